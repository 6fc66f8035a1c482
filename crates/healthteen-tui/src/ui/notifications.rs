// Status line feedback with auto-dismiss

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Error,
}

impl NotificationLevel {
    pub fn icon(&self) -> &'static str {
        match self {
            NotificationLevel::Info => "ℹ",
            NotificationLevel::Success => "✓",
            NotificationLevel::Error => "✗",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub level: NotificationLevel,
    pub duration: Duration,
    pub shown_at: Instant,
}

impl Notification {
    fn new(message: impl Into<String>, level: NotificationLevel, secs: u64) -> Self {
        Self {
            message: message.into(),
            level,
            duration: Duration::from_secs(secs),
            shown_at: Instant::now(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, NotificationLevel::Info, 3)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, NotificationLevel::Success, 3)
    }

    /// Errors stay up longer.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, NotificationLevel::Error, 5)
    }

    pub fn is_expired(&self) -> bool {
        self.shown_at.elapsed() >= self.duration
    }
}
