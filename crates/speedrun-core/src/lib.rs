//! # Speedrun Core Library
//!
//! Core engine for Speedrun, a personal multi-activity timer: up to
//! nine named, tagged timers, each a stopwatch or a countdown, with a
//! running grand total, optional threshold notifications, a
//! proportional stats breakdown, and compact shareable snapshots.
//!
//! ## Architecture
//!
//! - **Timer Engine**: a wall-clock-based state machine over the
//!   collection; the host calls `advance(now_ms)` periodically and
//!   every time-measuring operation takes `now_ms` explicitly
//! - **Storage**: SQLite key/value persistence for the collection and
//!   TOML-based preferences
//! - **Share codec**: reversible base64/percent-encoded tokens for
//!   read-only snapshot sharing
//!
//! ## Key Components
//!
//! - [`TimerEngine`]: intent dispatch plus the tick scheduler
//! - [`TimerStore`]: the ordered, capacity-checked collection
//! - [`stats::breakdown`]: the radial-chart aggregation
//! - [`share::encode`] / [`share::decode`]: the share token codec

pub mod error;
pub mod events;
pub mod feedback;
pub mod format;
pub mod notify;
pub mod share;
pub mod stats;
pub mod storage;
pub mod timer;

pub use error::{
    ConfigError, CoreError, DatabaseError, NotifyError, ShareError, StoreError, ValidationWarning,
};
pub use events::Event;
pub use feedback::{cue_for_event, AudioCue, AudioFeedback};
pub use format::format_hms;
pub use notify::{Notification, NotificationSink, PermissionState};
pub use share::ShareSnapshot;
pub use stats::{breakdown, Breakdown, Segment};
pub use storage::{Config, Database, Theme};
pub use timer::{
    now_ms, Intent, Tag, TickReport, TimerEngine, TimerKind, TimerRecord, TimerSettings,
    TimerStore, MAX_TIMERS,
};
