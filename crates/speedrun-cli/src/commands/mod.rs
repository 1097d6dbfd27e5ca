pub mod config;
pub mod share;
pub mod stats;
pub mod timer;

use speedrun_core::error::NotifyError;
use speedrun_core::{
    cue_for_event, AudioCue, AudioFeedback, Config, Event, Notification, NotificationSink,
    PermissionState,
};

/// Terminal notification sink: prints the `(title, body)` pair to
/// stderr. A terminal can always display text, so permission is
/// always granted.
pub struct ConsoleNotifier;

impl NotificationSink for ConsoleNotifier {
    fn permission(&self) -> PermissionState {
        PermissionState::Granted
    }

    fn dispatch(&self, note: &Notification) -> Result<(), NotifyError> {
        eprintln!("🔔 {} -- {}", note.title, note.body);
        Ok(())
    }
}

/// Terminal stand-in for audio cues: names the cue on stderr.
pub struct ConsoleAudio;

impl AudioFeedback for ConsoleAudio {
    fn play(&self, cue: AudioCue) {
        let name = match cue {
            AudioCue::Flop => "flop",
            AudioCue::Toggle { on: true } => "toggle-on",
            AudioCue::Toggle { on: false } => "toggle-off",
            AudioCue::Delete => "delete",
            AudioCue::Completion => "completion",
        };
        eprintln!("[cue] {name}");
    }
}

/// Play cues for a batch of events when sound is enabled, and route
/// due notifications through the sink.
pub fn handle_side_effects(config: &Config, events: &[Event]) {
    let notifier = ConsoleNotifier;
    let audio = ConsoleAudio;
    for event in events {
        if let Event::NotificationDue { title, body, .. } = event {
            let note = Notification {
                title: title.clone(),
                body: body.clone(),
            };
            if let Err(e) = notifier.dispatch(&note) {
                eprintln!("notification not delivered: {e}");
            }
        }
        if config.sound_enabled {
            if let Some(cue) = cue_for_event(event) {
                audio.play(cue);
            }
        }
    }
}
