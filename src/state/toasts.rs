//! Transient notification state surfaced by the toast host.

#[cfg(test)]
#[path = "toasts_test.rs"]
mod toasts_test;

/// Visual intent of a toast.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastColor {
    /// Success.
    Green,
    /// Failure.
    Red,
}

/// One transient notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    /// Monotonic identifier, used for dismissal.
    pub id: u64,
    /// Visual intent.
    pub color: ToastColor,
    /// Short heading.
    pub title: String,
    /// Body text.
    pub message: String,
}

/// Queue of visible toasts.
///
/// `show` is fire-and-forget for callers; the toast host owns rendering and
/// timed dismissal.
#[derive(Clone, Debug, Default)]
pub struct ToastsState {
    /// Visible toasts, oldest first.
    pub items: Vec<Toast>,
    next_id: u64,
}

impl ToastsState {
    /// Append a toast and return its id.
    pub fn show(&mut self, color: ToastColor, title: String, message: String) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Toast {
            id,
            color,
            title,
            message,
        });
        id
    }

    /// Remove the toast with `id`, if it is still visible.
    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|toast| toast.id != id);
    }

    /// Highest id handed out so far.
    #[must_use]
    pub fn latest_id(&self) -> u64 {
        self.next_id
    }
}
