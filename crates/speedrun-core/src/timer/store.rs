//! The ordered timer collection.
//!
//! Owns capacity, id assignment, and the tag/title policies. Records
//! live in insertion order, which is also display and aggregation
//! order. Persistence is a plain JSON array of records; the id counter
//! is re-derived on load.

use super::record::TimerRecord;
use super::tag::Tag;
use crate::error::StoreError;

/// Hard capacity of the collection. The tenth create is rejected.
pub const MAX_TIMERS: usize = 9;

#[derive(Debug, Clone)]
pub struct TimerStore {
    timers: Vec<TimerRecord>,
    next_id: u64,
}

impl Default for TimerStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TimerStore {
    pub fn new() -> Self {
        Self {
            timers: Vec::new(),
            next_id: 1,
        }
    }

    // ── Collection ops ───────────────────────────────────────────────

    /// Append a new record with default fields and a freshly assigned
    /// tag. Ids are handed out by a monotonic counter, so creates in
    /// the same instant never collide.
    pub fn create(&mut self) -> Result<&TimerRecord, StoreError> {
        if self.timers.len() >= MAX_TIMERS {
            return Err(StoreError::LimitReached);
        }
        let tag = self.assign_available_tag();
        let id = self.next_id;
        self.next_id += 1;
        let idx = self.timers.len();
        self.timers.push(TimerRecord::new(id, tag));
        Ok(&self.timers[idx])
    }

    /// Remove by id; silently a no-op when absent.
    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.timers.len();
        self.timers.retain(|t| t.id != id);
        self.timers.len() != before
    }

    pub fn find(&self, id: u64) -> Result<&TimerRecord, StoreError> {
        self.timers
            .iter()
            .find(|t| t.id == id)
            .ok_or(StoreError::NotFound(id))
    }

    pub fn find_mut(&mut self, id: u64) -> Result<&mut TimerRecord, StoreError> {
        self.timers
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(StoreError::NotFound(id))
    }

    /// Records in insertion order.
    pub fn list(&self) -> &[TimerRecord] {
        &self.timers
    }

    pub(crate) fn records_mut(&mut self) -> impl Iterator<Item = &mut TimerRecord> {
        self.timers.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }

    pub fn at_capacity(&self) -> bool {
        self.timers.len() >= MAX_TIMERS
    }

    // ── Policies ─────────────────────────────────────────────────────

    /// First non-neutral palette entry no current record uses, or
    /// `Neutral` when all nine are taken. Existing records are never
    /// retagged, so duplicates via manual retag stay possible.
    pub fn assign_available_tag(&self) -> Tag {
        Tag::PALETTE
            .iter()
            .copied()
            .filter(|&t| t != Tag::Neutral)
            .find(|&t| !self.timers.iter().any(|rec| rec.tag == t))
            .unwrap_or(Tag::Neutral)
    }

    /// Tags offerable to `id` in a tag picker: anything not held by
    /// another record, plus its own tag and the always-available
    /// neutral entry.
    pub fn available_tags_for(&self, id: u64) -> Vec<Tag> {
        Tag::PALETTE
            .iter()
            .copied()
            .filter(|&t| {
                t == Tag::Neutral
                    || !self
                        .timers
                        .iter()
                        .any(|rec| rec.id != id && rec.tag == t)
            })
            .collect()
    }

    /// Whether any record other than `excluding_id` is running. The
    /// caller uses this to gate `start` behind a confirmation.
    pub fn any_other_running(&self, excluding_id: u64) -> bool {
        self.timers
            .iter()
            .any(|t| t.is_running && t.id != excluding_id)
    }

    /// Set or clear the title designation. Setting it clears the flag
    /// on every other record in the same operation, so at most one
    /// record ever drives the title. Clearing touches only the target;
    /// another record's designation survives unrelated saves.
    pub fn set_show_in_title(&mut self, id: u64, on: bool) -> Result<(), StoreError> {
        if on {
            self.find(id)?;
            for rec in &mut self.timers {
                rec.show_in_title = rec.id == id;
            }
        } else {
            self.find_mut(id)?.show_in_title = false;
        }
        Ok(())
    }

    /// The unique title-driving record, if one exists.
    pub fn title_record(&self) -> Option<&TimerRecord> {
        self.timers.iter().find(|t| t.show_in_title)
    }

    // ── Persistence shape ────────────────────────────────────────────

    /// Serialize as a plain JSON array of records.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.timers)
    }

    /// Rebuild from a JSON array. The id counter resumes past the
    /// highest persisted id, which also absorbs legacy wall-clock ids.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let timers: Vec<TimerRecord> = serde_json::from_str(json)?;
        let next_id = timers.iter().map(|t| t.id).max().map_or(1, |m| m + 1);
        Ok(Self { timers, next_id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_assigns_sequential_ids_and_fresh_tags() {
        let mut store = TimerStore::new();
        let a = store.create().unwrap();
        assert_eq!(a.id, 1);
        assert_eq!(a.tag, Tag::Green);
        let b = store.create().unwrap();
        assert_eq!(b.id, 2);
        assert_eq!(b.tag, Tag::Blue);
    }

    #[test]
    fn tenth_create_is_rejected_unchanged() {
        let mut store = TimerStore::new();
        for _ in 0..MAX_TIMERS {
            store.create().unwrap();
        }
        assert_eq!(store.len(), 9);
        assert_eq!(store.create().unwrap_err(), StoreError::LimitReached);
        assert_eq!(store.len(), 9);
    }

    #[test]
    fn tag_falls_back_to_neutral_when_exhausted() {
        let mut store = TimerStore::new();
        for _ in 0..MAX_TIMERS {
            store.create().unwrap();
        }
        assert_eq!(store.assign_available_tag(), Tag::Neutral);
    }

    #[test]
    fn remove_is_silent_on_missing_id() {
        let mut store = TimerStore::new();
        store.create().unwrap();
        assert!(!store.remove(999));
        assert_eq!(store.len(), 1);
        assert!(store.remove(1));
        assert!(store.is_empty());
    }

    #[test]
    fn removing_frees_the_tag() {
        let mut store = TimerStore::new();
        store.create().unwrap(); // Green
        store.create().unwrap(); // Blue
        store.remove(1);
        assert_eq!(store.assign_available_tag(), Tag::Green);
    }

    #[test]
    fn find_reports_not_found() {
        let store = TimerStore::new();
        assert_eq!(store.find(7).unwrap_err(), StoreError::NotFound(7));
    }

    #[test]
    fn show_in_title_is_exclusive() {
        let mut store = TimerStore::new();
        store.create().unwrap();
        store.create().unwrap();
        store.set_show_in_title(1, true).unwrap();
        store.set_show_in_title(2, true).unwrap();
        let flagged: Vec<u64> = store
            .list()
            .iter()
            .filter(|t| t.show_in_title)
            .map(|t| t.id)
            .collect();
        assert_eq!(flagged, vec![2]);
        store.set_show_in_title(2, false).unwrap();
        assert!(store.title_record().is_none());
    }

    #[test]
    fn unchecking_leaves_other_designations_alone() {
        let mut store = TimerStore::new();
        store.create().unwrap();
        store.create().unwrap();
        store.set_show_in_title(1, true).unwrap();
        store.set_show_in_title(2, false).unwrap();
        assert_eq!(store.title_record().map(|t| t.id), Some(1));
    }

    #[test]
    fn available_tags_keep_own_selection() {
        let mut store = TimerStore::new();
        store.create().unwrap(); // 1: Green
        store.create().unwrap(); // 2: Blue
        let tags = store.available_tags_for(1);
        assert!(tags.contains(&Tag::Green), "own tag stays offerable");
        assert!(tags.contains(&Tag::Neutral));
        assert!(!tags.contains(&Tag::Blue), "other record's tag is hidden");
    }

    #[test]
    fn json_round_trip_resumes_id_counter() {
        let mut store = TimerStore::new();
        store.create().unwrap();
        store.create().unwrap();
        let json = store.to_json().unwrap();

        let mut restored = TimerStore::from_json(&json).unwrap();
        assert_eq!(restored.len(), 2);
        let c = restored.create().unwrap();
        assert_eq!(c.id, 3);
    }

    #[test]
    fn any_other_running_excludes_self() {
        let mut store = TimerStore::new();
        store.create().unwrap();
        store.create().unwrap();
        store.find_mut(1).unwrap().start(0);
        assert!(!store.any_other_running(1));
        assert!(store.any_other_running(2));
    }
}
