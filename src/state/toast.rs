//! Transient notifications ("toasts").
//!
//! DESIGN
//! ======
//! Each toast is a single line. The list is capped so a burst of failures
//! cannot bury the page; the oldest entry is dropped first.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// Maximum number of toasts on screen at once.
pub const MAX_VISIBLE_TOASTS: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self { kind: ToastKind::Success, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { kind: ToastKind::Error, message: message.into() }
    }
}

/// A toast with the id used to dismiss it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShownToast {
    pub id: u64,
    pub toast: Toast,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    pub visible: Vec<ShownToast>,
    next_id: u64,
}

impl ToastState {
    /// Show a toast and return its id.
    pub fn push(&mut self, toast: Toast) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.visible.push(ShownToast { id, toast });
        if self.visible.len() > MAX_VISIBLE_TOASTS {
            let excess = self.visible.len() - MAX_VISIBLE_TOASTS;
            self.visible.drain(..excess);
        }
        id
    }

    /// Remove a toast. Unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.visible.retain(|shown| shown.id != id);
    }
}
