//! Timer engine: intent dispatch and the tick scheduler.
//!
//! The engine is wall-clock based and owns no thread. The host drives
//! it: every operation that measures time takes `now_ms`, and the
//! periodic callback (once per frame, once per second, whatever the
//! host chooses) calls `advance(now_ms)`.
//!
//! ```ignore
//! let mut engine = TimerEngine::new();
//! engine.dispatch(Intent::Start { id }, now_ms())?;
//! // In a loop:
//! let report = engine.advance(now_ms());
//! ```
//!
//! Persistence and notification dispatch are the caller's side
//! effects; nothing in here does I/O.

use chrono::Utc;

use super::record::{TimerRecord, TimerSettings};
use super::store::TimerStore;
use super::tag::Tag;
use crate::error::StoreError;
use crate::events::Event;
use crate::format::format_hms;
use crate::notify::{self, Notification};

/// The closed set of intents a front end can emit. Each maps to one
/// state-machine operation; there is no other way in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Start { id: u64 },
    Pause { id: u64 },
    Toggle { id: u64 },
    Reset { id: u64 },
    Delete { id: u64 },
    Rename { id: u64, name: String },
    Retag { id: u64, tag: Tag },
    SaveSettings { id: u64, settings: TimerSettings },
}

/// What one `advance` pass produced.
#[derive(Debug, Clone)]
pub struct TickReport {
    /// Grand total of time spent across all records.
    pub total_ms: u64,
    /// Formatted title value from the unique show-in-title record.
    pub title: Option<String>,
    /// Completions and due notifications, in collection order.
    pub events: Vec<Event>,
}

/// Core timer engine. An explicit value owned by the caller -- there
/// is no ambient global instance.
#[derive(Debug, Clone, Default)]
pub struct TimerEngine {
    store: TimerStore,
}

impl TimerEngine {
    pub fn new() -> Self {
        Self {
            store: TimerStore::new(),
        }
    }

    pub fn with_store(store: TimerStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &TimerStore {
        &self.store
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Create a timer; fails with `LimitReached` at capacity.
    pub fn create(&mut self) -> Result<Event, StoreError> {
        let rec = self.store.create()?;
        Ok(Event::TimerCreated {
            id: rec.id,
            tag: rec.tag,
            at: Utc::now(),
        })
    }

    pub fn start(&mut self, id: u64, now_ms: u64) -> Result<Event, StoreError> {
        let rec = self.store.find_mut(id)?;
        rec.start(now_ms);
        Ok(Event::TimerStarted {
            id,
            kind: rec.kind,
            at: Utc::now(),
        })
    }

    /// Pause at `now_ms`. The record flushes its wall-clock delta
    /// before stopping, so the reported elapsed value is current even
    /// when no tick ran since `start`.
    pub fn pause(&mut self, id: u64, now_ms: u64) -> Result<Event, StoreError> {
        let rec = self.store.find_mut(id)?;
        rec.pause(now_ms);
        Ok(Event::TimerPaused {
            id,
            elapsed_ms: rec.elapsed_for_display(),
            at: Utc::now(),
        })
    }

    /// Start when idle, pause when running.
    pub fn toggle(&mut self, id: u64, now_ms: u64) -> Result<Event, StoreError> {
        if self.store.find(id)?.is_running {
            self.pause(id, now_ms)
        } else {
            self.start(id, now_ms)
        }
    }

    pub fn reset(&mut self, id: u64) -> Result<Event, StoreError> {
        self.store.find_mut(id)?.reset();
        Ok(Event::TimerReset { id, at: Utc::now() })
    }

    /// Remove by id. `None` when the id was already gone; removal of
    /// an absent record is not an error.
    pub fn remove(&mut self, id: u64) -> Option<Event> {
        self.store
            .remove(id)
            .then(|| Event::TimerRemoved { id, at: Utc::now() })
    }

    pub fn rename(&mut self, id: u64, name: String) -> Result<Event, StoreError> {
        let rec = self.store.find_mut(id)?;
        rec.name = name.clone();
        Ok(Event::TimerRenamed {
            id,
            name,
            at: Utc::now(),
        })
    }

    pub fn retag(&mut self, id: u64, tag: Tag) -> Result<Event, StoreError> {
        self.store.find_mut(id)?.tag = tag;
        Ok(Event::TimerRetagged {
            id,
            tag,
            at: Utc::now(),
        })
    }

    /// Apply a settings save: record-level reconfigure plus the
    /// collection-wide title exclusivity.
    pub fn save_settings(
        &mut self,
        id: u64,
        settings: TimerSettings,
    ) -> Result<Event, StoreError> {
        let was_reset = self.store.find_mut(id)?.reconfigure(&settings);
        self.store.set_show_in_title(id, settings.show_in_title)?;
        Ok(Event::SettingsSaved {
            id,
            was_reset,
            at: Utc::now(),
        })
    }

    /// Map an intent to its operation. Deletes of absent ids succeed
    /// with no events; everything else requires the record to exist.
    pub fn dispatch(&mut self, intent: Intent, now_ms: u64) -> Result<Vec<Event>, StoreError> {
        let event = match intent {
            Intent::Start { id } => Some(self.start(id, now_ms)?),
            Intent::Pause { id } => Some(self.pause(id, now_ms)?),
            Intent::Toggle { id } => Some(self.toggle(id, now_ms)?),
            Intent::Reset { id } => Some(self.reset(id)?),
            Intent::Delete { id } => self.remove(id),
            Intent::Rename { id, name } => Some(self.rename(id, name)?),
            Intent::Retag { id, tag } => Some(self.retag(id, tag)?),
            Intent::SaveSettings { id, settings } => Some(self.save_settings(id, settings)?),
        };
        Ok(event.into_iter().collect())
    }

    // ── Tick scheduler ───────────────────────────────────────────────

    /// Advance every running record to `now_ms`, evaluate the notify
    /// trigger per ticked record, and aggregate the grand total and
    /// the title designation.
    pub fn advance(&mut self, now_ms: u64) -> TickReport {
        let mut events = Vec::new();
        let mut total_ms: u64 = 0;
        let mut title = None;

        for rec in self.store.records_mut() {
            if rec.is_running {
                let completed = rec.tick(now_ms);
                if completed {
                    events.push(Event::TimerCompleted {
                        id: rec.id,
                        name: rec.name.clone(),
                        at: Utc::now(),
                    });
                }
                if notify::should_fire(rec) {
                    rec.has_notified = true;
                    let note = Notification::threshold_reached(rec);
                    events.push(Event::NotificationDue {
                        id: rec.id,
                        title: note.title,
                        body: note.body,
                        at: Utc::now(),
                    });
                }
            }

            total_ms = total_ms.saturating_add(rec.elapsed_for_total());

            if title.is_none() && rec.show_in_title {
                title = Some(format!(
                    "{} - {}",
                    format_hms(rec.elapsed_for_display()),
                    rec.name
                ));
            }
        }

        TickReport {
            total_ms,
            title,
            events,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn any_other_running(&self, excluding_id: u64) -> bool {
        self.store.any_other_running(excluding_id)
    }

    pub fn find(&self, id: u64) -> Result<&TimerRecord, StoreError> {
        self.store.find(id)
    }

    /// Build a full state snapshot event.
    pub fn snapshot(&self) -> Event {
        let total_ms = self
            .store
            .list()
            .iter()
            .fold(0u64, |acc, rec| acc.saturating_add(rec.elapsed_for_total()));
        Event::StateSnapshot {
            timers: self.store.list().to_vec(),
            total_ms,
            total: format_hms(total_ms),
            at: Utc::now(),
        }
    }
}

/// Current wall clock in milliseconds since the Unix epoch.
pub fn now_ms() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}
