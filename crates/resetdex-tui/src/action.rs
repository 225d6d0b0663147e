//! All possible UI actions. Actions are the sole mechanism for state mutation.

use std::fmt;
use std::sync::Arc;

use resetdex_core::{Device, TagKind};

/// Direction for cycling selectors and chip groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Prev,
}

/// Notification severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// A toast notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub level: NotificationLevel,
}

impl Notification {
    pub fn info(msg: impl Into<String>) -> Self {
        Self {
            message: msg.into(),
            level: NotificationLevel::Info,
        }
    }

    pub fn success(msg: impl Into<String>) -> Self {
        Self {
            message: msg.into(),
            level: NotificationLevel::Success,
        }
    }

    pub fn warning(msg: impl Into<String>) -> Self {
        Self {
            message: msg.into(),
            level: NotificationLevel::Warning,
        }
    }

    pub fn error(msg: impl Into<String>) -> Self {
        Self {
            message: msg.into(),
            level: NotificationLevel::Error,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // ── Lifecycle ────────────────────────────────────────────────────
    Quit,
    Tick,
    Render,
    Resize(u16, u16),

    // ── Overlays ─────────────────────────────────────────────────────
    ToggleHelp,
    OpenSearch,
    /// Leave search mode and clear the query.
    CloseSearch,
    /// Leave search mode keeping the query.
    SearchSubmit,

    // ── Filters ──────────────────────────────────────────────────────
    SearchInput(String),
    CycleCategory(Direction),
    CycleChip(TagKind, Direction),
    ClearFilters,

    // ── Detail ───────────────────────────────────────────────────────
    /// Show the detail panel for the activated card's record.
    OpenDetail(Arc<Device>),
    CloseDetail,
    /// Launch a reference URL in the system browser.
    OpenUrl(String),

    // ── Notifications ────────────────────────────────────────────────
    Notify(Notification),
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Next => f.write_str("next"),
            Self::Prev => f.write_str("prev"),
        }
    }
}
