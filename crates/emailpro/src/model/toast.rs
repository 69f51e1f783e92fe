//! Transient notifications.

use std::time::Duration;

/// How long a toast stays up unless dismissed.
pub const TOAST_LIFETIME: Duration = Duration::from_secs(4);

/// Toast severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    /// Operation finished.
    Success,
    /// Operation failed or input was rejected.
    Error,
}

/// One notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    /// Identifier used to dismiss it.
    pub id: u64,
    /// Severity.
    pub kind: ToastKind,
    /// Bold first line.
    pub title: String,
    /// Detail line.
    pub description: String,
}

/// Visible toasts, oldest first.
#[derive(Debug, Clone, Default)]
pub struct Toasts {
    next_id: u64,
    items: Vec<Toast>,
}

impl Toasts {
    /// Adds a toast and returns its id.
    pub fn push(
        &mut self,
        kind: ToastKind,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Toast {
            id,
            kind,
            title: title.into(),
            description: description.into(),
        });
        id
    }

    /// Removes a toast. Unknown ids are ignored; the toast may already be gone.
    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|toast| toast.id != id);
    }

    /// Removes every toast.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.items.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_dismiss() {
        let mut toasts = Toasts::default();
        let first = toasts.push(ToastKind::Success, "Email Sent!", "to a@b.c");
        let second = toasts.push(ToastKind::Error, "Error", "boom");
        assert_ne!(first, second);

        toasts.dismiss(first);
        let left: Vec<_> = toasts.iter().map(|t| t.id).collect();
        assert_eq!(left, [second]);

        // Expiry after a manual dismiss is a no-op.
        toasts.dismiss(first);
        assert_eq!(toasts.iter().count(), 1);

        toasts.clear();
        assert!(toasts.is_empty());
    }
}
