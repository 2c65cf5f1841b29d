//! Scroll-driven parallax offsets.

use std::collections::HashMap;
use std::hash::Hash;

pub const PARALLAX_SELECTOR: &str = ".parallax";
pub const RATE_ATTRIBUTE: &str = "data-rate";
pub const OFFSET_PROPERTY: &str = "--parallax-offset";
pub const DEFAULT_RATE: f64 = 0.5;

/// Reads a `data-rate` value. Anything missing, unparsable, negative or
/// non-finite falls back to [`DEFAULT_RATE`].
pub fn parse_rate(raw: Option<&str>) -> f64 {
    raw.and_then(|value| value.trim().parse::<f64>().ok())
        .filter(|rate| rate.is_finite() && *rate >= 0.0)
        .unwrap_or(DEFAULT_RATE)
}

pub fn parallax_offset(scroll_y: f64, rate: f64) -> f64 {
    scroll_y * rate
}

/// CSS value for [`OFFSET_PROPERTY`]. The offset is negated so the element
/// drifts up as the page scrolls down.
pub fn offset_css_value(offset: f64) -> String {
    if offset == 0.0 {
        "0px".to_string()
    } else {
        format!("{}px", -offset)
    }
}

/// Last published offset per element, plus the listening state.
#[derive(Debug)]
pub struct ScrollParallax<K> {
    active: bool,
    offsets: HashMap<K, f64>,
}

impl<K> Default for ScrollParallax<K> {
    fn default() -> Self {
        Self {
            active: false,
            offsets: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash> ScrollParallax<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Returns `true` when this call moved the utility from inactive to
    /// active, i.e. when the caller should subscribe.
    pub fn start(&mut self) -> bool {
        !std::mem::replace(&mut self.active, true)
    }

    /// Returns `true` when the caller should unsubscribe.
    pub fn stop(&mut self) -> bool {
        std::mem::replace(&mut self.active, false)
    }

    /// Recomputes offsets for one scroll tick. `elements` pairs each key with
    /// its raw rate attribute, read fresh by the caller.
    ///
    /// Returns the offsets that were published; empty when inactive.
    pub fn on_scroll<'a, I>(&mut self, scroll_y: f64, elements: I) -> Vec<(K, f64)>
    where
        I: IntoIterator<Item = (K, Option<&'a str>)>,
        K: Clone,
    {
        if !self.active {
            return Vec::new();
        }
        elements
            .into_iter()
            .map(|(key, raw_rate)| {
                let offset = parallax_offset(scroll_y, parse_rate(raw_rate));
                self.offsets.insert(key.clone(), offset);
                (key, offset)
            })
            .collect()
    }

    pub fn offset(&self, key: &K) -> Option<f64> {
        self.offsets.get(key).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_scales_with_rate() {
        let mut parallax = ScrollParallax::new();
        parallax.start();

        parallax.on_scroll(200.0, vec![("b", Some("0.3"))]);
        assert_eq!(parallax.offset(&"b"), Some(200.0 * 0.3));

        parallax.on_scroll(500.0, vec![("b", Some("0.3"))]);
        assert_eq!(parallax.offset(&"b"), Some(500.0 * 0.3));
        assert!((parallax.offset(&"b").unwrap() - 150.0).abs() < 1e-9);
    }

    #[test]
    fn recomputing_is_pure() {
        assert_eq!(parallax_offset(321.0, 0.7), parallax_offset(321.0, 0.7));
        assert_eq!(parallax_offset(200.0, 0.5), 100.0);
    }

    #[test]
    fn missing_rate_matches_default() {
        let mut parallax = ScrollParallax::new();
        parallax.start();
        let published = parallax.on_scroll(300.0, vec![(1, None), (2, Some("0.5"))]);
        assert_eq!(published[0].1, published[1].1);
        assert_eq!(parallax.offset(&1), Some(150.0));
    }

    #[test]
    fn malformed_rates_fall_back() {
        assert_eq!(parse_rate(Some("fast")), DEFAULT_RATE);
        assert_eq!(parse_rate(Some("")), DEFAULT_RATE);
        assert_eq!(parse_rate(Some("-1")), DEFAULT_RATE);
        assert_eq!(parse_rate(Some("NaN")), DEFAULT_RATE);
        assert_eq!(parse_rate(Some(" 0.25 ")), 0.25);
    }

    #[test]
    fn zero_rate_freezes_and_one_tracks_scroll() {
        let mut parallax = ScrollParallax::new();
        parallax.start();
        parallax.on_scroll(800.0, vec![("still", Some("0")), ("with", Some("1"))]);
        assert_eq!(parallax.offset(&"still"), Some(0.0));
        assert_eq!(parallax.offset(&"with"), Some(800.0));
    }

    #[test]
    fn start_is_idempotent() {
        let mut parallax = ScrollParallax::<u8>::new();
        assert!(parallax.start());
        assert!(!parallax.start());
        assert!(parallax.is_active());

        let published = parallax.on_scroll(100.0, vec![(0, Some("0.5"))]);
        assert_eq!(published, vec![(0, 50.0)]);
    }

    #[test]
    fn stop_freezes_offsets() {
        let mut parallax = ScrollParallax::new();
        parallax.start();
        parallax.on_scroll(100.0, vec![(0, Some("0.5"))]);

        assert!(parallax.stop());
        assert!(!parallax.stop());
        assert!(parallax.on_scroll(900.0, vec![(0, Some("0.5"))]).is_empty());
        assert_eq!(parallax.offset(&0), Some(50.0));
    }

    #[test]
    fn css_value_is_negated() {
        assert_eq!(offset_css_value(60.0), "-60px");
        assert_eq!(offset_css_value(0.0), "0px");
    }
}
