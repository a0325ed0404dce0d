use leptos::prelude::*;
use wasm_bindgen::{prelude::Closure, JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::motion::{Reveal, RevealKey, RevealTracker, REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD};

pub const REVEAL_ATTR: &str = "data-reveal";

type WatchCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Browser intersection observer, disconnected on drop.
struct ViewportWatcher {
    observer: IntersectionObserver,
    _callback: WatchCallback,
}

impl ViewportWatcher {
    fn new(mut on_visible: impl FnMut(RevealKey) + 'static) -> Result<Self, JsValue> {
        let callback = WatchCallback::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry = entry.unchecked_into::<IntersectionObserverEntry>();
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let target = entry.target();
                    // reveals are permanent, so stop watching
                    observer.unobserve(&target);
                    if let Some(key) = target
                        .get_attribute(REVEAL_ATTR)
                        .as_deref()
                        .and_then(RevealKey::from_attr)
                    {
                        on_visible(key);
                    }
                }
            },
        );
        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
        options.set_root_margin(REVEAL_ROOT_MARGIN);
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for ViewportWatcher {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Shared by every section that fades in when scrolled into view.
#[derive(Clone, Copy)]
pub struct RevealContext {
    tracker: RwSignal<RevealTracker>,
    // created on first use; dropped (and disconnected) with the page's owner
    watcher: StoredValue<Option<ViewportWatcher>, LocalStorage>,
}

impl RevealContext {
    pub fn provide() -> Self {
        let ctx = Self {
            tracker: RwSignal::new(RevealTracker::default()),
            watcher: StoredValue::new_local(None),
        };
        provide_context(ctx);
        ctx
    }

    pub fn revealed(&self, key: RevealKey) -> Signal<bool> {
        let tracker = self.tracker;
        Signal::derive(move || tracker.with(|t| t.is_revealed(&key)))
    }

    /// Starts watching `el`. No-op if the browser refuses to create an observer.
    pub fn observe(&self, el: &Element) {
        let tracker = self.tracker;
        self.watcher.update_value(|watcher| {
            if watcher.is_none() {
                match ViewportWatcher::new(move |key| mark_revealed(tracker, key)) {
                    Ok(w) => *watcher = Some(w),
                    Err(e) => log::warn!("couldn't create viewport watcher: {e:?}"),
                }
            }
            if let Some(w) = watcher {
                w.observer.observe(el);
            }
        });
    }
}

fn mark_revealed(tracker: RwSignal<RevealTracker>, key: RevealKey) {
    if tracker.with_untracked(|t| t.is_revealed(&key)) {
        return;
    }
    let res = tracker.try_update(|t| t.reveal(key.clone()));
    if res == Some(Reveal::RevealedSkills) {
        log::debug!("skills in view, starting bar animations");
    } else {
        log::trace!("revealed {}", key.attr());
    }
}

pub fn use_reveal() -> RevealContext {
    expect_context::<RevealContext>()
}
