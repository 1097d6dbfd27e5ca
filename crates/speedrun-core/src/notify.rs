//! Notification threshold evaluation and the dispatch seam.
//!
//! The evaluator is pure; the engine marks `has_notified` and emits a
//! `NotificationDue` event on a true result. Actually delivering the
//! `(title, body)` pair is the host's job through a
//! [`NotificationSink`], and a failed or impossible dispatch never
//! affects timer accumulation.

use serde::{Deserialize, Serialize};

use crate::error::NotifyError;
use crate::format::format_hms;
use crate::timer::TimerRecord;

/// True iff the record's threshold is armed, un-fired this epoch, and
/// crossed by the time spent so far.
pub fn should_fire(rec: &TimerRecord) -> bool {
    rec.notify_enabled && !rec.has_notified && rec.elapsed_for_total() >= rec.notify_time_ms
}

/// The `(title, body)` pair handed to a sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub body: String,
}

impl Notification {
    pub fn threshold_reached(rec: &TimerRecord) -> Self {
        Self {
            title: format!("Time Reached: {}", rec.name),
            body: format!(
                "You have spent {} on this task.",
                format_hms(rec.notify_time_ms)
            ),
        }
    }
}

/// Environment permission state, opaque to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionState {
    Granted,
    Denied,
    Undetermined,
}

/// Where due notifications go. Dispatch is fire-and-forget from the
/// engine's point of view; errors are surfaced to the user only.
pub trait NotificationSink {
    fn permission(&self) -> PermissionState;
    fn dispatch(&self, note: &Notification) -> Result<(), NotifyError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::{Tag, TimerKind};

    fn armed(notify_time_ms: u64) -> TimerRecord {
        let mut rec = TimerRecord::new(1, Tag::Green);
        rec.notify_enabled = true;
        rec.notify_time_ms = notify_time_ms;
        rec
    }

    #[test]
    fn fires_only_at_or_past_threshold() {
        let mut rec = armed(5_000);
        rec.duration_ms = 4_999;
        assert!(!should_fire(&rec));
        rec.duration_ms = 5_000;
        assert!(should_fire(&rec));
        rec.duration_ms = 60_000;
        assert!(should_fire(&rec));
    }

    #[test]
    fn silent_when_disarmed_or_already_fired() {
        let mut rec = armed(5_000);
        rec.duration_ms = 10_000;
        rec.notify_enabled = false;
        assert!(!should_fire(&rec));
        rec.notify_enabled = true;
        rec.has_notified = true;
        assert!(!should_fire(&rec));
    }

    #[test]
    fn countdown_threshold_uses_time_spent() {
        let mut rec = armed(10_000);
        rec.kind = TimerKind::Countdown;
        rec.initial_duration_ms = 60_000;
        rec.remaining_ms = 55_000; // 5s spent
        assert!(!should_fire(&rec));
        rec.remaining_ms = 50_000; // 10s spent
        assert!(should_fire(&rec));
    }

    #[test]
    fn payload_names_the_threshold() {
        let mut rec = armed(3_600_000);
        rec.name = "Deep Work".into();
        let note = Notification::threshold_reached(&rec);
        assert_eq!(note.title, "Time Reached: Deep Work");
        assert_eq!(note.body, "You have spent 01:00:00 on this task.");
    }
}
