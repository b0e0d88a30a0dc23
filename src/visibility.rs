/// Intersection ratio at which a section counts as on screen.
pub const DEFAULT_THRESHOLD: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Unseen,
    Seen,
}

/// Turns raw intersection ratios into the boolean that gates entrance
/// animations. With `trigger_once` the tracker latches on `Seen`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilityTracker {
    threshold: f64,
    trigger_once: bool,
    state: Visibility,
}

impl Default for VisibilityTracker {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD, true)
    }
}

impl VisibilityTracker {
    pub fn new(threshold: f64, trigger_once: bool) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            trigger_once,
            state: Visibility::Unseen,
        }
    }

    /// Tracker for environments without an intersection observer: content
    /// is shown immediately and never hidden again.
    pub fn unsupported() -> Self {
        Self {
            threshold: 0.0,
            trigger_once: true,
            state: Visibility::Seen,
        }
    }

    pub fn state(&self) -> Visibility {
        self.state
    }

    pub fn is_visible(&self) -> bool {
        self.state == Visibility::Seen
    }

    /// Feeds one observation and returns the resulting visibility.
    pub fn observe(&mut self, ratio: f64) -> bool {
        if self.trigger_once && self.state == Visibility::Seen {
            return true;
        }
        // a zero threshold means "any pixel"
        let intersecting = if self.threshold == 0.0 {
            ratio > 0.0
        } else {
            ratio >= self.threshold
        };
        self.state = if intersecting {
            Visibility::Seen
        } else {
            Visibility::Unseen
        };
        self.is_visible()
    }
}

/// Page offset past which the navigation bar gets its solid background.
pub const NAV_SCROLL_THRESHOLD_PX: f64 = 50.0;

pub fn is_scrolled(offset_y: f64) -> bool {
    offset_y > NAV_SCROLL_THRESHOLD_PX
}

/// Which way an element travels in when it is revealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Left,
    Right,
    Fade,
    Zoom,
}

pub fn reveal_class(shown: bool, direction: Direction) -> &'static str {
    match (shown, direction) {
        (true, Direction::Zoom) => "reveal opacity-100 scale-100",
        (true, _) => "reveal opacity-100 translate-x-0 translate-y-0",
        (false, Direction::Up) => "reveal opacity-0 translate-y-12",
        (false, Direction::Left) => "reveal opacity-0 -translate-x-12",
        (false, Direction::Right) => "reveal opacity-0 translate-x-12",
        (false, Direction::Fade) => "reveal opacity-0",
        (false, Direction::Zoom) => "reveal opacity-0 scale-50",
    }
}

/// Inline style delaying the `index`th item of a staggered list.
pub fn stagger_style(index: usize, step_ms: u32, base_ms: u32) -> String {
    let delay = base_ms as usize + index * step_ms as usize;
    format!("transition-delay: {delay}ms")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_until_threshold() {
        let mut t = VisibilityTracker::default();
        assert!(!t.is_visible());
        assert!(!t.observe(0.0));
        assert!(!t.observe(0.05));
        assert_eq!(t.state(), Visibility::Unseen);
        assert!(t.observe(0.1));
        assert_eq!(t.state(), Visibility::Seen);
    }

    #[test]
    fn test_trigger_once_latches() {
        let mut t = VisibilityTracker::new(0.1, true);
        assert!(t.observe(0.5));
        // element scrolled away again
        assert!(t.observe(0.0));
        assert!(t.is_visible());
    }

    #[test]
    fn test_continuous_mode_follows_viewport() {
        let mut t = VisibilityTracker::new(0.1, false);
        assert!(t.observe(0.8));
        assert!(!t.observe(0.0));
        assert_eq!(t.state(), Visibility::Unseen);
        assert!(t.observe(0.2));
    }

    #[test]
    fn test_zero_threshold_needs_some_intersection() {
        let mut t = VisibilityTracker::new(0.0, true);
        assert!(!t.observe(0.0));
        assert!(t.observe(0.01));
    }

    #[test]
    fn test_unsupported_is_always_visible() {
        let mut t = VisibilityTracker::unsupported();
        assert!(t.is_visible());
        assert!(t.observe(0.0));
    }

    #[test]
    fn test_threshold_is_clamped() {
        let mut t = VisibilityTracker::new(4.0, true);
        assert!(!t.observe(0.99));
        assert!(t.observe(1.0));
    }

    #[test]
    fn test_reveal_class_differs_by_state() {
        for d in [
            Direction::Up,
            Direction::Left,
            Direction::Right,
            Direction::Fade,
            Direction::Zoom,
        ] {
            assert!(reveal_class(false, d).contains("opacity-0"));
            assert!(reveal_class(true, d).contains("opacity-100"));
        }
    }

    #[test]
    fn test_is_scrolled() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(50.5));
        assert!(is_scrolled(1200.0));
    }

    #[test]
    fn test_stagger_style() {
        assert_eq!(stagger_style(0, 100, 0), "transition-delay: 0ms");
        assert_eq!(stagger_style(3, 100, 700), "transition-delay: 1000ms");
    }
}
