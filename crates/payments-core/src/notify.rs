//! Notifications
//!
//! Toasts are fire-and-forget; nothing is read back from the notifier.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Info,
    Success,
    Error,
}

impl Severity {
    /// CSS-friendly variant name
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub title: String,
    pub message: String,
    pub severity: Severity,
}

impl Toast {
    pub fn new(title: impl Into<String>, message: impl Into<String>, severity: Severity) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            severity,
        }
    }
}

/// Surface for user-facing messages
pub trait Notifier {
    fn notify(&self, toast: Toast);
}

impl<F: Fn(Toast)> Notifier for F {
    fn notify(&self, toast: Toast) {
        self(toast)
    }
}
