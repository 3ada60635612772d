//! Transient user notifications for QR Baghdad.
//!
//! Every failure path degrades to "notify and continue": the notifier takes
//! `(message, level)` and returns nothing. A new notification conceptually
//! replaces the previous one; there is no queue.

use std::sync::Mutex;

/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// Trait defining the notification sink.
pub trait Notifier {
    fn notify(&self, message: &str, level: NoticeLevel);
}

impl<T: Notifier + ?Sized> Notifier for std::sync::Arc<T> {
    fn notify(&self, message: &str, level: NoticeLevel) {
        (**self).notify(message, level);
    }
}

/// Console notifier used by the binary.
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, message: &str, level: NoticeLevel) {
        let prefix = match level {
            NoticeLevel::Info => "ℹ️ ",
            NoticeLevel::Success => "✅",
            NoticeLevel::Warning => "⚠️ ",
            NoticeLevel::Error => "❌",
        };
        println!("{} {}", prefix, message);
    }
}

/// Notifier that records notices in memory, keeping only the latest visible
/// one plus the full log. Used by tests.
#[derive(Default)]
pub struct MemoryNotifier {
    notices: Mutex<Vec<(NoticeLevel, String)>>,
}

impl MemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// All notices seen so far, in order.
    pub fn notices(&self) -> Vec<(NoticeLevel, String)> {
        self.notices.lock().expect("notifier lock poisoned").clone()
    }

    /// The currently visible (latest) notice, if any.
    pub fn last(&self) -> Option<(NoticeLevel, String)> {
        self.notices
            .lock()
            .expect("notifier lock poisoned")
            .last()
            .cloned()
    }
}

impl Notifier for MemoryNotifier {
    fn notify(&self, message: &str, level: NoticeLevel) {
        self.notices
            .lock()
            .expect("notifier lock poisoned")
            .push((level, message.to_string()));
    }
}
