//! One-way "enter" animation gate for elements scrolling into view.
//!
//! [`VisibilityRevealer`] only tracks state. The browser side lives in
//! [`crate::animation::hooks`], which feeds it intersection ratios and turns a
//! reveal into the `active` CSS class.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// Fraction of the element that has to be on screen before it reveals.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// The viewport's bottom edge is pulled up by 50px.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

pub const REVEAL_SELECTOR: &str = ".reveal, .reveal-left, .reveal-right, .reveal-scale";

/// Class added to an element once it has been revealed.
pub const REVEALED_CLASS: &str = "active";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealCategory {
    Reveal,
    Left,
    Right,
    Scale,
}

impl RevealCategory {
    pub const ALL: [RevealCategory; 4] = [
        RevealCategory::Reveal,
        RevealCategory::Left,
        RevealCategory::Right,
        RevealCategory::Scale,
    ];

    pub fn class_name(self) -> &'static str {
        match self {
            RevealCategory::Reveal => "reveal",
            RevealCategory::Left => "reveal-left",
            RevealCategory::Right => "reveal-right",
            RevealCategory::Scale => "reveal-scale",
        }
    }

    /// First reveal category found in a whitespace separated class list.
    pub fn from_class_list(classes: &str) -> Option<Self> {
        classes.split_whitespace().find_map(|class| {
            Self::ALL
                .iter()
                .copied()
                .find(|category| category.class_name() == class)
        })
    }
}

pub fn crosses_threshold(ratio: f64) -> bool {
    ratio >= REVEAL_THRESHOLD
}

/// What the host has to do after an attach pass.
#[derive(Debug, PartialEq, Eq)]
pub struct AttachPlan<K> {
    /// Newly registered keys to hand to the intersection observer.
    pub observe: Vec<K>,
    /// Revealed keys whose element lost the revealed class, e.g. because a
    /// re-render rewrote its `class` attribute. The class goes back on.
    pub restore: Vec<K>,
}

/// Tracks which registered elements have entered the viewport.
///
/// Keys are whatever the host uses to tell elements apart. A key that has been
/// revealed stays revealed for the lifetime of the revealer, across
/// `detach`/`attach` cycles.
#[derive(Debug)]
pub struct VisibilityRevealer<K> {
    active: bool,
    registered: HashMap<K, RevealCategory>,
    revealed: HashSet<K>,
}

impl<K> Default for VisibilityRevealer<K> {
    fn default() -> Self {
        Self {
            active: false,
            registered: HashMap::new(),
            revealed: HashSet::new(),
        }
    }
}

impl<K: Eq + Hash + Clone> VisibilityRevealer<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Registers elements and returns the keys that still need observing.
    ///
    /// Keys that are already registered or already revealed are skipped, so
    /// calling this again after a re-render never observes an element twice.
    pub fn attach<I>(&mut self, elements: I) -> Vec<K>
    where
        I: IntoIterator<Item = (K, RevealCategory)>,
    {
        self.plan_attach(
            elements
                .into_iter()
                .map(|(key, category)| (key, category, false)),
        )
        .observe
    }

    /// Like [`attach`](Self::attach), but also told whether each element
    /// currently carries the revealed class.
    ///
    /// An element that carries the class without being known as revealed was
    /// revealed by an earlier mount and is taken as revealed. A revealed
    /// element without the class gets it back and is never observed again.
    pub fn plan_attach<I>(&mut self, elements: I) -> AttachPlan<K>
    where
        I: IntoIterator<Item = (K, RevealCategory, bool)>,
    {
        self.active = true;
        let mut plan = AttachPlan {
            observe: Vec::new(),
            restore: Vec::new(),
        };
        for (key, category, has_class) in elements {
            if self.revealed.contains(&key) {
                if !has_class {
                    plan.restore.push(key);
                }
                continue;
            }
            if has_class {
                self.registered.remove(&key);
                self.revealed.insert(key);
                continue;
            }
            if self.registered.contains_key(&key) {
                continue;
            }
            self.registered.insert(key.clone(), category);
            plan.observe.push(key);
        }
        plan
    }

    /// Feeds one intersection report. Returns `true` only on the report that
    /// flips the element to revealed.
    pub fn observe(&mut self, key: &K, ratio: f64) -> bool {
        if !self.active || !crosses_threshold(ratio) {
            return false;
        }
        if self.registered.remove(key).is_none() {
            return false;
        }
        self.revealed.insert(key.clone());
        true
    }

    pub fn is_revealed(&self, key: &K) -> bool {
        self.revealed.contains(key)
    }

    /// Number of elements still waiting to be revealed.
    pub fn pending(&self) -> usize {
        self.registered.len()
    }

    /// Drops every pending registration. Revealed flags are kept.
    pub fn detach(&mut self) {
        self.active = false;
        self.registered.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn revealer_with(keys: &[u32]) -> VisibilityRevealer<u32> {
        let mut revealer = VisibilityRevealer::new();
        revealer.attach(keys.iter().map(|k| (*k, RevealCategory::Reveal)));
        revealer
    }

    #[test]
    fn reveals_once_ratio_reaches_threshold() {
        let mut revealer = revealer_with(&[1]);

        assert!(!revealer.observe(&1, 0.05));
        assert!(!revealer.is_revealed(&1));

        assert!(revealer.observe(&1, 0.15));
        assert!(revealer.is_revealed(&1));

        assert!(!revealer.observe(&1, 0.0));
        assert!(revealer.is_revealed(&1));
    }

    #[test]
    fn exact_threshold_counts() {
        let mut revealer = revealer_with(&[7]);
        assert!(revealer.observe(&7, REVEAL_THRESHOLD));
    }

    #[test]
    fn gate_is_monotonic() {
        let mut revealer = revealer_with(&[1]);
        for _ in 0..5 {
            revealer.observe(&1, 0.02);
        }
        assert!(!revealer.is_revealed(&1));

        revealer.observe(&1, 0.5);
        for ratio in [0.0, 0.09, 1.0, 0.0] {
            assert!(!revealer.observe(&1, ratio));
            assert!(revealer.is_revealed(&1));
        }
    }

    #[test]
    fn reattach_skips_known_elements() {
        let mut revealer = VisibilityRevealer::new();
        let first = revealer.attach(vec![(1, RevealCategory::Left), (2, RevealCategory::Scale)]);
        assert_eq!(first, vec![1, 2]);

        revealer.observe(&1, 0.3);
        let second = revealer.attach(vec![(1, RevealCategory::Left), (2, RevealCategory::Scale), (3, RevealCategory::Right)]);
        assert_eq!(second, vec![3]);
        assert!(revealer.is_revealed(&1));
        assert_eq!(revealer.pending(), 2);
    }

    #[test]
    fn double_attach_reveals_only_once() {
        let mut revealer = VisibilityRevealer::new();
        revealer.attach(vec![(1, RevealCategory::Reveal)]);
        revealer.attach(vec![(1, RevealCategory::Reveal)]);

        let transitions = [0.2, 0.4, 0.9]
            .iter()
            .filter(|ratio| revealer.observe(&1, **ratio))
            .count();
        assert_eq!(transitions, 1);
    }

    #[test]
    fn detach_freezes_state() {
        let mut revealer = revealer_with(&[1, 2]);
        revealer.observe(&1, 0.5);
        revealer.detach();

        assert!(!revealer.is_active());
        assert!(!revealer.observe(&2, 1.0));
        assert!(!revealer.is_revealed(&2));
        assert!(revealer.is_revealed(&1));
        assert_eq!(revealer.pending(), 0);
    }

    #[test]
    fn detach_without_attach_is_a_no_op() {
        let mut revealer: VisibilityRevealer<u32> = VisibilityRevealer::new();
        revealer.detach();
        revealer.detach();
        assert!(!revealer.is_active());
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let mut revealer = revealer_with(&[1]);
        assert!(!revealer.observe(&99, 1.0));
        assert!(!revealer.is_revealed(&99));
    }

    #[test]
    fn empty_attach_is_valid() {
        let mut revealer: VisibilityRevealer<u32> = VisibilityRevealer::new();
        assert!(revealer.attach(Vec::new()).is_empty());
        assert!(revealer.is_active());
    }

    #[test]
    fn wiped_class_is_restored_without_observing_again() {
        let mut revealer = VisibilityRevealer::new();
        let plan = revealer.plan_attach(vec![(0, RevealCategory::Reveal, false)]);
        assert_eq!(plan.observe, vec![0]);
        assert!(revealer.observe(&0, 0.5));

        // A re-render rewrote the class attribute and dropped `active`.
        let plan = revealer.plan_attach(vec![(0, RevealCategory::Reveal, false)]);
        assert_eq!(plan, AttachPlan { observe: vec![], restore: vec![0] });
        assert!(revealer.is_revealed(&0));

        let plan = revealer.plan_attach(vec![(0, RevealCategory::Reveal, true)]);
        assert_eq!(plan, AttachPlan { observe: vec![], restore: vec![] });
    }

    #[test]
    fn class_from_an_earlier_mount_counts_as_revealed() {
        let mut revealer = VisibilityRevealer::new();
        let plan = revealer.plan_attach(vec![
            (1, RevealCategory::Left, true),
            (2, RevealCategory::Right, false),
        ]);
        assert_eq!(plan.observe, vec![2]);
        assert!(plan.restore.is_empty());
        assert!(revealer.is_revealed(&1));
        assert_eq!(revealer.pending(), 1);
    }

    #[test]
    fn category_from_class_list() {
        assert_eq!(
            RevealCategory::from_class_list("bg-gray-800 reveal-scale card-hover"),
            Some(RevealCategory::Scale)
        );
        assert_eq!(RevealCategory::from_class_list("reveal-left"), Some(RevealCategory::Left));
        assert_eq!(RevealCategory::from_class_list("parallax revealed"), None);
        assert_eq!(RevealCategory::Right.class_name(), "reveal-right");
    }
}
