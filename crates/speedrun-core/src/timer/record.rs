//! The persisted shape of one timer and its state machine.
//!
//! A record is either Idle or Running; a countdown that reaches zero
//! stops itself in the same tick (Completed, which is Idle with
//! `remaining_ms == 0`). Accumulation is wall-clock based: the caller
//! supplies `now` and the record tracks the delta since its last tick.

use serde::{Deserialize, Serialize};

use super::tag::Tag;
use crate::error::ValidationWarning;

/// Soft recommendation for display names; exceeding it warns, never blocks.
pub const NAME_SOFT_LIMIT: usize = 45;

/// Default countdown target / editable duration: 25 minutes.
pub const DEFAULT_INITIAL_MS: u64 = 25 * 60 * 1000;

/// Default notify threshold: 1 hour.
pub const DEFAULT_NOTIFY_MS: u64 = 60 * 60 * 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerKind {
    Stopwatch,
    Countdown,
}

/// Settings applied in one save from the settings surface.
/// `show_in_title` is enforced collection-wide by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerSettings {
    pub kind: TimerKind,
    pub initial_duration_ms: u64,
    pub show_in_title: bool,
    pub notify_enabled: bool,
    pub notify_time_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerRecord {
    /// Creation-order identity, unique within the store.
    pub id: u64,
    pub tag: Tag,
    pub name: String,
    pub kind: TimerKind,
    /// Accumulated time (stopwatch mode).
    pub duration_ms: u64,
    /// Time left (countdown mode).
    pub remaining_ms: u64,
    /// Countdown target / baseline; also the editable duration.
    pub initial_duration_ms: u64,
    pub is_running: bool,
    /// Timestamp (ms) elapsed is measured from; meaningful only while running.
    #[serde(default)]
    pub last_tick_ms: u64,
    #[serde(default)]
    pub show_in_title: bool,
    #[serde(default)]
    pub notify_enabled: bool,
    #[serde(default = "default_notify_ms")]
    pub notify_time_ms: u64,
    #[serde(default)]
    pub has_notified: bool,
}

fn default_notify_ms() -> u64 {
    DEFAULT_NOTIFY_MS
}

impl TimerRecord {
    pub fn new(id: u64, tag: Tag) -> Self {
        Self {
            id,
            tag,
            name: "New Activity".into(),
            kind: TimerKind::Stopwatch,
            duration_ms: 0,
            remaining_ms: 0,
            initial_duration_ms: DEFAULT_INITIAL_MS,
            is_running: false,
            last_tick_ms: 0,
            show_in_title: false,
            notify_enabled: false,
            notify_time_ms: DEFAULT_NOTIFY_MS,
            has_notified: false,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    /// A countdown that ran out and stopped itself.
    pub fn is_completed(&self) -> bool {
        self.kind == TimerKind::Countdown && self.remaining_ms == 0 && !self.is_running
    }

    /// The value a row displays: accumulated time for a stopwatch,
    /// time left for a countdown.
    pub fn elapsed_for_display(&self) -> u64 {
        match self.kind {
            TimerKind::Stopwatch => self.duration_ms,
            TimerKind::Countdown => self.remaining_ms,
        }
    }

    /// Time spent regardless of mode: accumulated duration for a
    /// stopwatch, `initial - remaining` for a countdown. Feeds the
    /// grand total, the stats breakdown, and the notify threshold.
    pub fn elapsed_for_total(&self) -> u64 {
        match self.kind {
            TimerKind::Stopwatch => self.duration_ms,
            TimerKind::Countdown => {
                self.initial_duration_ms.saturating_sub(self.remaining_ms)
            }
        }
    }

    // ── Transitions ──────────────────────────────────────────────────

    /// Idle -> Running. Re-arms a finished countdown by reloading its
    /// baseline, and clears `has_notified` when starting from the
    /// epoch baseline (fresh stopwatch or full countdown). Starting a
    /// record that is already running flushes its delta first instead
    /// of discarding it.
    pub fn start(&mut self, now_ms: u64) {
        if self.is_running {
            self.tick(now_ms);
        }
        self.is_running = true;
        self.last_tick_ms = now_ms;
        if self.kind == TimerKind::Countdown && self.remaining_ms == 0 {
            self.remaining_ms = self.initial_duration_ms;
        }
        let at_baseline = match self.kind {
            TimerKind::Stopwatch => self.duration_ms == 0,
            TimerKind::Countdown => self.remaining_ms == self.initial_duration_ms,
        };
        if at_baseline {
            self.has_notified = false;
        }
    }

    /// Running -> Idle. Accounts the delta since the last tick before
    /// stopping, so hosts without a tick loop between operations lose
    /// no wall-clock time.
    pub fn pause(&mut self, now_ms: u64) {
        self.tick(now_ms);
        self.is_running = false;
    }

    /// Advance by the wall-clock delta since the last tick.
    ///
    /// Returns `true` when a countdown just hit zero; the record has
    /// already stopped itself (`remaining_ms == 0, is_running == false`).
    pub fn tick(&mut self, now_ms: u64) -> bool {
        if !self.is_running {
            return false;
        }
        let delta = now_ms.saturating_sub(self.last_tick_ms);
        self.last_tick_ms = now_ms;
        match self.kind {
            TimerKind::Stopwatch => {
                self.duration_ms = self.duration_ms.saturating_add(delta);
                false
            }
            TimerKind::Countdown => {
                self.remaining_ms = self.remaining_ms.saturating_sub(delta);
                if self.remaining_ms == 0 {
                    self.is_running = false;
                    true
                } else {
                    false
                }
            }
        }
    }

    /// Any state -> Idle with progress wiped and the notify epoch re-armed.
    pub fn reset(&mut self) {
        self.is_running = false;
        self.duration_ms = 0;
        self.remaining_ms = self.initial_duration_ms;
        self.has_notified = false;
    }

    /// Apply a settings save. Forces a reset exactly when the kind
    /// changes or the baseline duration changes; otherwise fields are
    /// updated in place without touching accumulated progress. Every
    /// save starts a new notify epoch.
    ///
    /// Returns `true` when the save forced a reset.
    pub fn reconfigure(&mut self, settings: &TimerSettings) -> bool {
        let should_reset = self.kind != settings.kind
            || self.initial_duration_ms != settings.initial_duration_ms;

        self.kind = settings.kind;
        self.initial_duration_ms = settings.initial_duration_ms;
        self.notify_enabled = settings.notify_enabled;
        self.notify_time_ms = settings.notify_time_ms;
        self.has_notified = false;

        if should_reset {
            self.reset();
        }
        should_reset
    }
}

/// Advisory check against the soft name length recommendation.
pub fn check_name(name: &str) -> Option<ValidationWarning> {
    let len = name.chars().count();
    if len > NAME_SOFT_LIMIT {
        Some(ValidationWarning {
            len,
            limit: NAME_SOFT_LIMIT,
        })
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stopwatch() -> TimerRecord {
        TimerRecord::new(1, Tag::Green)
    }

    fn countdown(initial_ms: u64) -> TimerRecord {
        let mut rec = TimerRecord::new(2, Tag::Blue);
        rec.kind = TimerKind::Countdown;
        rec.initial_duration_ms = initial_ms;
        rec.remaining_ms = initial_ms;
        rec
    }

    #[test]
    fn stopwatch_accumulates_delta() {
        let mut rec = stopwatch();
        rec.start(0);
        assert!(rec.is_running);
        assert!(!rec.tick(5000));
        assert_eq!(rec.duration_ms, 5000);
        assert!(!rec.tick(7500));
        assert_eq!(rec.duration_ms, 7500);
    }

    #[test]
    fn countdown_clamps_at_zero_and_stops() {
        let mut rec = countdown(60_000);
        rec.start(0);
        assert!(rec.tick(61_000));
        assert_eq!(rec.remaining_ms, 0);
        assert!(!rec.is_running);
        assert!(rec.is_completed());
    }

    #[test]
    fn restart_reloads_finished_countdown() {
        let mut rec = countdown(60_000);
        rec.start(0);
        rec.tick(61_000);
        rec.start(70_000);
        assert_eq!(rec.remaining_ms, 60_000);
        assert!(rec.is_running);
        assert!(!rec.has_notified);
    }

    #[test]
    fn pause_flushes_unticked_time() {
        let mut rec = stopwatch();
        rec.start(0);
        rec.pause(60_000);
        assert!(!rec.is_running);
        assert_eq!(rec.duration_ms, 60_000);
        // A tick while idle is a no-op.
        assert!(!rec.tick(90_000));
        assert_eq!(rec.duration_ms, 60_000);
    }

    #[test]
    fn start_while_running_flushes_first() {
        let mut rec = stopwatch();
        rec.start(0);
        rec.start(5_000);
        assert!(rec.is_running);
        assert_eq!(rec.duration_ms, 5_000);
    }

    #[test]
    fn start_mid_progress_keeps_notify_epoch() {
        let mut rec = stopwatch();
        rec.start(0);
        rec.tick(1000);
        rec.has_notified = true;
        rec.pause(1000);
        rec.start(2000);
        assert!(rec.has_notified, "resume is not a new epoch");
        rec.reset();
        assert!(!rec.has_notified);
    }

    #[test]
    fn reset_restores_baseline() {
        let mut rec = countdown(30_000);
        rec.start(0);
        rec.tick(10_000);
        rec.reset();
        assert!(!rec.is_running);
        assert_eq!(rec.remaining_ms, 30_000);
        assert_eq!(rec.duration_ms, 0);
    }

    #[test]
    fn elapsed_for_total_is_time_spent() {
        let mut rec = countdown(60_000);
        rec.start(0);
        rec.tick(15_000);
        assert_eq!(rec.elapsed_for_display(), 45_000);
        assert_eq!(rec.elapsed_for_total(), 15_000);
    }

    #[test]
    fn reconfigure_resets_on_kind_change() {
        let mut rec = stopwatch();
        rec.start(0);
        rec.tick(5000);
        let was_reset = rec.reconfigure(&TimerSettings {
            kind: TimerKind::Countdown,
            initial_duration_ms: DEFAULT_INITIAL_MS,
            show_in_title: false,
            notify_enabled: false,
            notify_time_ms: DEFAULT_NOTIFY_MS,
        });
        assert!(was_reset);
        assert_eq!(rec.duration_ms, 0);
        assert_eq!(rec.remaining_ms, DEFAULT_INITIAL_MS);
        assert!(!rec.is_running);
    }

    #[test]
    fn reconfigure_resets_on_duration_change() {
        let mut rec = countdown(60_000);
        rec.start(0);
        rec.tick(10_000);
        let was_reset = rec.reconfigure(&TimerSettings {
            kind: TimerKind::Countdown,
            initial_duration_ms: 90_000,
            show_in_title: false,
            notify_enabled: false,
            notify_time_ms: DEFAULT_NOTIFY_MS,
        });
        assert!(was_reset);
        assert_eq!(rec.remaining_ms, 90_000);
    }

    #[test]
    fn reconfigure_in_place_keeps_progress() {
        let mut rec = stopwatch();
        rec.start(0);
        rec.tick(5000);
        rec.has_notified = true;
        let was_reset = rec.reconfigure(&TimerSettings {
            kind: TimerKind::Stopwatch,
            initial_duration_ms: rec.initial_duration_ms,
            show_in_title: true,
            notify_enabled: true,
            notify_time_ms: 10_000,
        });
        assert!(!was_reset);
        assert_eq!(rec.duration_ms, 5000);
        assert!(rec.notify_enabled);
        assert!(!rec.has_notified, "every save starts a new epoch");
    }

    #[test]
    fn name_soft_limit_is_advisory() {
        assert!(check_name("Deep Work").is_none());
        let long = "x".repeat(46);
        let warn = check_name(&long).unwrap();
        assert_eq!(warn.len, 46);
        assert_eq!(warn.limit, NAME_SOFT_LIMIT);
    }
}
