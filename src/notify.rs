//! Notification banner state
//!
//! One notification is visible at a time. Each `show` bumps a sequence
//! token; the auto-dismiss scheduled for an older notification carries a
//! stale token and becomes a no-op, so a newer notification preempts the
//! pending timer of the one it replaced.

use std::time::Duration;

/// How long a notification stays up before auto-dismissing.
pub const DISMISS_AFTER: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    Info,
}

/// Transient, auto-expiring status message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
}

impl Notification {
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Notification {
            message: message.into(),
            severity,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Success)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Error)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Info)
    }
}

/// Banner state machine: idle, or showing the most recent notification.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationState {
    current: Option<Notification>,
    seq: u64,
}

impl NotificationState {
    /// Show a notification, superseding any visible one. Returns the token
    /// the caller should hand to the dismiss timer.
    pub fn show(&mut self, notification: Notification) -> u64 {
        self.seq += 1;
        self.current = Some(notification);
        self.seq
    }

    /// Clear the banner, but only if `token` still identifies the visible
    /// notification. A stale token (superseded banner) does nothing.
    pub fn dismiss(&mut self, token: u64) -> bool {
        if token == self.seq && self.current.is_some() {
            self.current = None;
            true
        } else {
            false
        }
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }
}
