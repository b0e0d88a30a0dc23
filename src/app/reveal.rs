use leptos::{html, prelude::*};
use leptos_use::{
    js, use_intersection_observer_with_options, use_supported, UseIntersectionObserverOptions,
    UseIntersectionObserverReturn,
};

use crate::visibility::{VisibilityTracker, DEFAULT_THRESHOLD};

/// Reports whether `target` has scrolled into view. Latches once seen, and
/// is permanently true where IntersectionObserver is missing.
pub fn use_reveal(target: NodeRef<html::Div>) -> Signal<bool> {
    let tracker = RwSignal::new(VisibilityTracker::default());
    let is_supported = use_supported(|| js!("IntersectionObserver" in &window()));

    let UseIntersectionObserverReturn { stop, .. } = use_intersection_observer_with_options(
        target,
        move |entries, _| {
            for entry in entries {
                tracker.update(|t| {
                    t.observe(entry.intersection_ratio());
                });
            }
        },
        UseIntersectionObserverOptions::default().thresholds(vec![DEFAULT_THRESHOLD]),
    );

    // effects only run in the browser, after hydration
    Effect::new(move |_| {
        if !is_supported.get() {
            tracker.set(VisibilityTracker::unsupported());
        }
    });

    Effect::new(move |_| {
        if tracker.with(|t| t.is_visible()) {
            stop();
        }
    });

    Signal::derive(move || tracker.with(|t| t.is_visible()))
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    #[test]
    fn test_server_render_starts_hidden() {
        let owner = Owner::new();
        owner.set();
        let shown = use_reveal(NodeRef::new());
        assert!(!shown.get_untracked());
    }
}
