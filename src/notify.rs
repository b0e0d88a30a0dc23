/// Toasts visible at once; a newer one pushes the oldest out.
pub const TOAST_LIMIT: usize = 1;
/// How long a toast stays up before it dismisses itself.
pub const TOAST_DURATION_MS: u64 = 5_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub description: String,
}

impl Notification {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            title: title.into(),
            description: description.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub notification: Notification,
}

#[derive(Debug, Clone)]
pub struct ToastQueue {
    next_id: u64,
    limit: usize,
    toasts: Vec<Toast>,
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new(TOAST_LIMIT)
    }
}

impl ToastQueue {
    pub fn new(limit: usize) -> Self {
        Self {
            next_id: 0,
            limit: limit.max(1),
            toasts: Vec::new(),
        }
    }

    /// Newest first. Returns the id to dismiss it with.
    pub fn push(&mut self, notification: Notification) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.insert(0, Toast { id, notification });
        self.toasts.truncate(self.limit);
        id
    }

    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limit_keeps_newest() {
        let mut q = ToastQueue::default();
        q.push(Notification::error("first", ""));
        let id = q.push(Notification::success("second", ""));
        assert_eq!(q.toasts().len(), 1);
        assert_eq!(q.toasts()[0].id, id);
        assert_eq!(q.toasts()[0].notification.title, "second");
    }

    #[test]
    fn test_dismiss() {
        let mut q = ToastQueue::new(3);
        let a = q.push(Notification::success("a", ""));
        let b = q.push(Notification::success("b", ""));
        assert!(q.dismiss(a));
        assert!(!q.dismiss(a));
        assert_eq!(q.toasts().len(), 1);
        assert_eq!(q.toasts()[0].id, b);
        assert!(q.dismiss(b));
        assert!(q.is_empty());
    }

    #[test]
    fn test_zero_limit_still_shows_one() {
        let mut q = ToastQueue::new(0);
        q.push(Notification::success("a", ""));
        assert_eq!(q.toasts().len(), 1);
    }
}
