//! Share token flows against a live engine: export after real
//! accumulation, re-import as read-only snapshots, and stats over the
//! imported view.

use speedrun_core::{share, stats, Tag, TimerEngine, TimerKind, TimerSettings};

fn build_engine() -> TimerEngine {
    let mut engine = TimerEngine::new();
    engine.create().unwrap(); // id 1, Green
    engine.create().unwrap(); // id 2, Blue
    engine.rename(1, "Code".into()).unwrap();
    engine.rename(2, "Read".into()).unwrap();
    engine
        .save_settings(
            2,
            TimerSettings {
                kind: TimerKind::Countdown,
                initial_duration_ms: 90_000,
                show_in_title: false,
                notify_enabled: false,
                notify_time_ms: speedrun_core::timer::DEFAULT_NOTIFY_MS,
            },
        )
        .unwrap();
    engine.start(1, 0).unwrap();
    engine.start(2, 0).unwrap();
    engine.advance(60_000);
    engine.pause(1, 60_000).unwrap();
    engine.pause(2, 60_000).unwrap();
    engine
}

#[test]
fn export_import_round_trip_from_live_engine() {
    let engine = build_engine();
    let token = share::encode(engine.store().list());
    let snapshots = share::decode(&token).unwrap();

    assert_eq!(snapshots.len(), 2);
    assert_eq!(snapshots[0].name, "Code");
    assert_eq!(snapshots[0].duration_ms, 60_000);
    assert_eq!(snapshots[0].tag, Tag::Green);
    // The countdown exported its time spent, not its time left.
    assert_eq!(snapshots[1].name, "Read");
    assert_eq!(snapshots[1].duration_ms, 60_000);
    assert_eq!(snapshots[1].tag, Tag::Blue);
    // Snapshots are flattened to read-only stopwatch readings.
    assert_eq!(snapshots[1].kind, TimerKind::Stopwatch);
    assert_eq!(snapshots[1].initial_duration_ms, 0);
}

#[test]
fn import_never_mutates_the_live_collection() {
    let mut engine = build_engine();
    let token = share::encode(engine.store().list());
    let before = engine.store().to_json().unwrap();

    let _snapshots = share::decode(&token).unwrap();
    assert_eq!(engine.store().to_json().unwrap(), before);

    // The live engine keeps operating normally afterwards.
    engine.start(1, 70_000).unwrap();
    engine.advance(71_000);
    assert_eq!(engine.find(1).unwrap().duration_ms, 61_000);
}

#[test]
fn token_is_a_single_query_value() {
    let engine = build_engine();
    let token = share::encode(engine.store().list());
    assert!(token
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '+' || c == '/' || c == '='));
    let url = share::share_url("https://example.org/speedrun", &token);
    assert!(url.starts_with("https://example.org/speedrun?share="));
    assert!(!url[url.find('=').unwrap() + 1..].contains('?'));
}

#[test]
fn stats_over_decoded_snapshots_match_the_live_breakdown() {
    let engine = build_engine();
    let live = stats::breakdown(engine.store().list());

    let snapshots = share::decode(&share::encode(engine.store().list())).unwrap();
    let total: u64 = snapshots.iter().map(|s| s.duration_ms).sum();

    assert_eq!(total, live.total_ms);
    // Equal spends split the circle evenly either way.
    assert_eq!(live.segments.len(), 2);
    assert!((live.segments[0].span_deg - 180.0).abs() < 1e-9);
}
