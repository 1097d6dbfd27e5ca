//! Discrete audio cue events.
//!
//! The engine only names cues; synthesis belongs to the host. The
//! mapping mirrors the reference UI: a soft "flop" on create, a blip
//! on start/stop, a sweep on delete, and a completion cue.

use serde::{Deserialize, Serialize};

use crate::events::Event;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "cue")]
pub enum AudioCue {
    Flop,
    Toggle { on: bool },
    Delete,
    Completion,
}

/// Consumes named cues; no return value is expected.
pub trait AudioFeedback {
    fn play(&self, cue: AudioCue);
}

/// The cue a state-change event maps to, if any.
pub fn cue_for_event(event: &Event) -> Option<AudioCue> {
    match event {
        Event::TimerCreated { .. } => Some(AudioCue::Flop),
        Event::TimerStarted { .. } => Some(AudioCue::Toggle { on: true }),
        Event::TimerPaused { .. } => Some(AudioCue::Toggle { on: false }),
        Event::TimerRemoved { .. } => Some(AudioCue::Delete),
        Event::TimerCompleted { .. } => Some(AudioCue::Completion),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use crate::timer::Tag;

    #[test]
    fn lifecycle_events_map_to_cues() {
        let at = Utc::now();
        assert_eq!(
            cue_for_event(&Event::TimerCreated {
                id: 1,
                tag: Tag::Green,
                at
            }),
            Some(AudioCue::Flop)
        );
        assert_eq!(
            cue_for_event(&Event::TimerRemoved { id: 1, at }),
            Some(AudioCue::Delete)
        );
        assert_eq!(cue_for_event(&Event::TimerReset { id: 1, at }), None);
    }
}
