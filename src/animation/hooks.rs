//! Browser side of the animation utilities: web-sys observers and listeners
//! wrapped in owned handles, and the Yew hooks that tie them to a page's
//! mount/unmount.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use js_sys::Array;
use log::{debug, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, NodeList, Window,
};
use yew::prelude::*;

use super::parallax::{
    offset_css_value, ScrollParallax, OFFSET_PROPERTY, PARALLAX_SELECTOR, RATE_ATTRIBUTE,
};
use super::reveal::{
    RevealCategory, VisibilityRevealer, REVEALED_CLASS, REVEAL_ROOT_MARGIN, REVEAL_SELECTOR,
    REVEAL_THRESHOLD,
};

/// A window `scroll` listener that is removed when dropped.
pub struct ScrollListener {
    window: Window,
    callback: Closure<dyn Fn()>,
}

impl ScrollListener {
    pub fn new(callback: impl Fn() + 'static) -> Option<Self> {
        let window = web_sys::window()?;
        let callback = Closure::<dyn Fn()>::new(callback);
        match window.add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref()) {
            Ok(()) => Some(Self { window, callback }),
            Err(e) => {
                warn!("Could not subscribe to scroll events: {:?}", e);
                None
            }
        }
    }
}

impl Drop for ScrollListener {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("scroll", self.callback.as_ref().unchecked_ref());
    }
}

fn current_scroll_y() -> f64 {
    web_sys::window()
        .and_then(|window| window.scroll_y().ok())
        .unwrap_or(0.0)
}

fn collect_nodes<T: JsCast>(nodes: NodeList) -> Vec<T> {
    (0..nodes.length())
        .filter_map(|index| nodes.item(index)?.dyn_into::<T>().ok())
        .collect()
}

fn query_document<T: JsCast>(selector: &str) -> Vec<T> {
    web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.query_selector_all(selector).ok())
        .map(collect_nodes)
        .unwrap_or_default()
}

fn query_within<T: JsCast>(root: &Element, selector: &str) -> Vec<T> {
    root.query_selector_all(selector)
        .map(collect_nodes)
        .unwrap_or_default()
}

/// Marks each reveal element with a page-unique id, so intersection reports
/// map back to a key without holding on to the element.
const REVEAL_ID_ATTRIBUTE: &str = "data-reveal-id";

thread_local! {
    static NEXT_REVEAL_ID: Cell<u32> = Cell::new(0);
}

fn reveal_key(element: &Element) -> Option<u32> {
    element.get_attribute(REVEAL_ID_ATTRIBUTE)?.parse().ok()
}

fn reveal_key_or_assign(element: &Element) -> u32 {
    if let Some(key) = reveal_key(element) {
        return key;
    }
    let key = NEXT_REVEAL_ID.with(|next| {
        let key = next.get();
        next.set(key.wrapping_add(1));
        key
    });
    let _ = element.set_attribute(REVEAL_ID_ATTRIBUTE, &key.to_string());
    key
}

/// Owns one `IntersectionObserver` and the reveal state behind it.
///
/// Without a window or `IntersectionObserver` support this is a no-op:
/// nothing gets observed and nothing ever reveals.
pub struct RevealObserver {
    state: Rc<RefCell<VisibilityRevealer<u32>>>,
    observer: Option<IntersectionObserver>,
    _callback: Option<Closure<dyn FnMut(Array, IntersectionObserver)>>,
}

impl RevealObserver {
    pub fn new() -> Self {
        let state = Rc::new(RefCell::new(VisibilityRevealer::new()));

        let callback = {
            let state = state.clone();
            Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
                move |entries: Array, observer: IntersectionObserver| {
                    let Ok(mut revealer) = state.try_borrow_mut() else {
                        debug!("Reveal state busy, dropping intersection batch");
                        return;
                    };
                    for entry in entries.iter() {
                        let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                            continue;
                        };
                        let target = entry.target();
                        let Some(key) = reveal_key(&target) else {
                            continue;
                        };
                        if revealer.observe(&key, entry.intersection_ratio()) {
                            let _ = target.class_list().add_1(REVEALED_CLASS);
                            observer.unobserve(&target);
                        }
                    }
                },
            )
        };

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
        options.set_root_margin(REVEAL_ROOT_MARGIN);

        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
            Ok(observer) => Self {
                state,
                observer: Some(observer),
                _callback: Some(callback),
            },
            Err(e) => {
                warn!("IntersectionObserver unavailable, reveal animations disabled: {:?}", e);
                Self {
                    state,
                    observer: None,
                    _callback: None,
                }
            }
        }
    }

    /// Registers every reveal element currently under `root` and puts the
    /// revealed class back on any revealed element a re-render stripped it
    /// from. Safe to call after every render.
    pub fn attach(&mut self, root: &Element) {
        let Some(observer) = self.observer.as_ref() else {
            return;
        };
        let Ok(mut revealer) = self.state.try_borrow_mut() else {
            warn!("Reveal state busy, skipping attach");
            return;
        };

        let mut elements = HashMap::new();
        let mut candidates = Vec::new();
        for element in query_within::<Element>(root, REVEAL_SELECTOR) {
            let Some(category) = RevealCategory::from_class_list(&element.class_name()) else {
                continue;
            };
            let key = reveal_key_or_assign(&element);
            let has_class = element.class_list().contains(REVEALED_CLASS);
            candidates.push((key, category, has_class));
            elements.insert(key, element);
        }

        let plan = revealer.plan_attach(candidates);
        for key in &plan.observe {
            if let Some(element) = elements.get(key) {
                observer.observe(element);
            }
        }
        for key in &plan.restore {
            if let Some(element) = elements.get(key) {
                let _ = element.class_list().add_1(REVEALED_CLASS);
            }
        }
        if !plan.observe.is_empty() || !plan.restore.is_empty() {
            debug!(
                "Reveal attach: {} observed, {} restored, {} pending",
                plan.observe.len(),
                plan.restore.len(),
                revealer.pending()
            );
        }
    }

    pub fn detach(&mut self) {
        if let Some(observer) = self.observer.as_ref() {
            observer.disconnect();
        }
        if let Ok(mut revealer) = self.state.try_borrow_mut() {
            if revealer.is_active() {
                revealer.detach();
            }
        }
    }
}

impl Default for RevealObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.detach();
    }
}

fn apply_parallax(state: &RefCell<ScrollParallax<usize>>) {
    let Ok(mut parallax) = state.try_borrow_mut() else {
        return;
    };
    if !parallax.is_active() {
        return;
    }

    let elements: Vec<HtmlElement> = query_document(PARALLAX_SELECTOR);
    let rates: Vec<Option<String>> = elements
        .iter()
        .map(|element| element.get_attribute(RATE_ATTRIBUTE))
        .collect();
    parallax.on_scroll(
        current_scroll_y(),
        rates.iter().enumerate().map(|(key, rate)| (key, rate.as_deref())),
    );

    for (key, element) in elements.iter().enumerate() {
        if let Some(offset) = parallax.offset(&key) {
            let _ = element
                .style()
                .set_property(OFFSET_PROPERTY, &offset_css_value(offset));
        }
    }
}

/// Keeps `--parallax-offset` on every `.parallax` element in step with the
/// window's scroll position while started.
pub struct ParallaxSubscription {
    state: Rc<RefCell<ScrollParallax<usize>>>,
    listener: Option<ScrollListener>,
}

impl ParallaxSubscription {
    pub fn new() -> Self {
        Self {
            state: Rc::new(RefCell::new(ScrollParallax::new())),
            listener: None,
        }
    }

    pub fn start(&mut self) {
        if !self.state.borrow_mut().start() {
            return;
        }
        let state = self.state.clone();
        match ScrollListener::new(move || apply_parallax(&state)) {
            Some(listener) => {
                self.listener = Some(listener);
                apply_parallax(&self.state);
            }
            None => {
                warn!("No window to scroll, parallax disabled");
                self.state.borrow_mut().stop();
            }
        }
    }

    pub fn stop(&mut self) {
        if self.state.borrow_mut().stop() {
            self.listener = None;
        }
    }
}

impl Default for ParallaxSubscription {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ParallaxSubscription {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Reveals `.reveal*` elements under `root` as they scroll into view.
/// Elements rendered after mount are picked up on the next render.
#[hook]
pub fn use_scroll_reveal(root: NodeRef) {
    let observer = use_mut_ref(|| None::<RevealObserver>);

    {
        let observer = observer.clone();
        use_effect(move || {
            if let Some(root) = root.cast::<Element>() {
                observer
                    .borrow_mut()
                    .get_or_insert_with(RevealObserver::new)
                    .attach(&root);
            }
            || ()
        });
    }

    use_effect_with_deps(
        move |_| {
            move || {
                observer.borrow_mut().take();
            }
        },
        (),
    );
}

/// Drives `.parallax` elements for as long as the calling component is
/// mounted.
#[hook]
pub fn use_parallax() {
    use_effect_with_deps(
        |_| {
            let mut subscription = ParallaxSubscription::new();
            subscription.start();
            move || drop(subscription)
        },
        (),
    );
}

/// `true` while the window is scrolled further than `threshold` pixels.
#[hook]
pub fn use_scrolled_past(threshold: f64) -> bool {
    let scrolled = use_state(|| false);

    {
        let scrolled = scrolled.clone();
        use_effect_with_deps(
            move |threshold| {
                let threshold = *threshold;
                let listener = ScrollListener::new(move || {
                    scrolled.set(current_scroll_y() > threshold);
                });
                move || drop(listener)
            },
            threshold,
        );
    }

    *scrolled
}

/// Scrolls the window to the top once, when the calling page mounts.
#[hook]
pub fn use_scroll_to_top() {
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );
}
