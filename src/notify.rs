//! Notifier collaborators.
//!
//! Handlers report the outcome of an action through a [`Notifier`]. The
//! controller never calls a notifier itself.

use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Severity of a user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotifyLevel {
    Info,
    Success,
    Error,
}

impl NotifyLevel {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for NotifyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Surfaces transient success/failure messages to the user.
pub trait Notifier {
    fn notify(&self, message: &str, level: NotifyLevel);
}

impl<N: Notifier + ?Sized> Notifier for Rc<N> {
    fn notify(&self, message: &str, level: NotifyLevel) {
        (**self).notify(message, level);
    }
}

/// Notifier that emits `tracing` events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, message: &str, level: NotifyLevel) {
        match level {
            NotifyLevel::Info | NotifyLevel::Success => {
                tracing::info!(level = %level, "{message}");
            }
            NotifyLevel::Error => tracing::error!("{message}"),
        }
    }
}

/// Notifier that keeps every message, for inspection in tests and tooling.
#[derive(Debug, Default)]
pub struct MemoryNotifier {
    messages: RefCell<Vec<(String, NotifyLevel)>>,
}

impl MemoryNotifier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All messages received so far, oldest first.
    #[must_use]
    pub fn messages(&self) -> Vec<(String, NotifyLevel)> {
        self.messages.borrow().clone()
    }

    /// The most recent message, if any.
    #[must_use]
    pub fn last(&self) -> Option<(String, NotifyLevel)> {
        self.messages.borrow().last().cloned()
    }
}

impl Notifier for MemoryNotifier {
    fn notify(&self, message: &str, level: NotifyLevel) {
        self.messages.borrow_mut().push((message.to_string(), level));
    }
}

/// Manages a temporary status message with optional auto-clear.
///
/// # Example
///
/// ```
/// use share_menu::notify::{NotifyLevel, StatusMessage};
///
/// let mut status = StatusMessage::new();
///
/// status.set("Link copied!", NotifyLevel::Success);
/// assert_eq!(status.peek(), Some("Link copied!"));
///
/// status.clear();
/// assert!(status.peek().is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct StatusMessage {
    /// The current message (if any)
    message: Option<(String, NotifyLevel)>,
    /// When the message was set (for auto-clear)
    set_at: Option<Instant>,
    /// Auto-clear duration (None = no auto-clear)
    auto_clear_after: Option<Duration>,
}

impl StatusMessage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a status message manager with auto-clear after duration.
    #[must_use]
    pub const fn with_auto_clear(duration: Duration) -> Self {
        Self {
            message: None,
            set_at: None,
            auto_clear_after: Some(duration),
        }
    }

    pub fn set(&mut self, msg: impl Into<String>, level: NotifyLevel) {
        self.message = Some((msg.into(), level));
        self.set_at = Some(Instant::now());
    }

    pub fn clear(&mut self) {
        self.message = None;
        self.set_at = None;
    }

    /// Get the current message, dropping it first if it has expired.
    pub fn current(&mut self) -> Option<(&str, NotifyLevel)> {
        if let (Some(set_at), Some(duration)) = (self.set_at, self.auto_clear_after) {
            if set_at.elapsed() >= duration {
                self.clear();
            }
        }
        self.message
            .as_ref()
            .map(|(text, level)| (text.as_str(), *level))
    }

    /// Get the current message without checking auto-clear.
    #[must_use]
    pub fn peek(&self) -> Option<&str> {
        self.message.as_ref().map(|(text, _)| text.as_str())
    }

    #[must_use]
    pub const fn has_message(&self) -> bool {
        self.message.is_some()
    }
}

/// Notifier that writes into a shared [`StatusMessage`] shown by the TUI.
#[derive(Debug, Clone, Default)]
pub struct StatusNotifier {
    status: Rc<RefCell<StatusMessage>>,
}

impl StatusNotifier {
    pub fn new(status: Rc<RefCell<StatusMessage>>) -> Self {
        Self { status }
    }

    /// The status slot this notifier writes to.
    #[must_use]
    pub fn status(&self) -> Rc<RefCell<StatusMessage>> {
        Rc::clone(&self.status)
    }
}

impl Notifier for StatusNotifier {
    fn notify(&self, message: &str, level: NotifyLevel) {
        tracing::debug!(level = %level, "status: {message}");
        self.status.borrow_mut().set(message, level);
    }
}
