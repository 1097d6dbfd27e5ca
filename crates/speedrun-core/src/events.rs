use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::timer::{Tag, TimerKind, TimerRecord};

/// Every state change in the engine produces an Event.
/// The CLI prints them as JSON; a GUI would poll for them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    TimerCreated {
        id: u64,
        tag: Tag,
        at: DateTime<Utc>,
    },
    TimerStarted {
        id: u64,
        kind: TimerKind,
        at: DateTime<Utc>,
    },
    TimerPaused {
        id: u64,
        elapsed_ms: u64,
        at: DateTime<Utc>,
    },
    /// A countdown hit zero and stopped itself.
    TimerCompleted {
        id: u64,
        name: String,
        at: DateTime<Utc>,
    },
    TimerReset {
        id: u64,
        at: DateTime<Utc>,
    },
    TimerRemoved {
        id: u64,
        at: DateTime<Utc>,
    },
    TimerRenamed {
        id: u64,
        name: String,
        at: DateTime<Utc>,
    },
    TimerRetagged {
        id: u64,
        tag: Tag,
        at: DateTime<Utc>,
    },
    /// Settings were saved; `was_reset` reports whether the save
    /// forced a reset (kind or baseline duration changed).
    SettingsSaved {
        id: u64,
        was_reset: bool,
        at: DateTime<Utc>,
    },
    /// A notify threshold was crossed. The caller dispatches the
    /// `(title, body)` pair through its NotificationSink.
    NotificationDue {
        id: u64,
        title: String,
        body: String,
        at: DateTime<Utc>,
    },
    StateSnapshot {
        timers: Vec<TimerRecord>,
        total_ms: u64,
        total: String,
        at: DateTime<Utc>,
    },
}
