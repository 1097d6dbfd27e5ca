//! Proportional breakdown of the collection for the radial chart.
//!
//! Each record with time spent becomes one segment spanning
//! `ms / total * 360` degrees, colored by its tag, laid out in
//! collection order. Spans are real-valued and deliberately not
//! corrected for rounding: the emitted spans sum to 360 degrees only
//! within [`SPAN_SUM_TOLERANCE_DEG`] per segment. Clamping the last
//! segment to force an exact sum would be an observable behavior
//! change.

use serde::Serialize;

use crate::timer::{Tag, TimerRecord};

/// Accepted floating-point drift of the span sum, per segment.
pub const SPAN_SUM_TOLERANCE_DEG: f64 = 1e-6;

/// One chart segment, occupying `[start_deg, start_deg + span_deg)`.
#[derive(Debug, Clone, Serialize)]
pub struct Segment {
    pub name: String,
    pub tag: Tag,
    pub color: &'static str,
    pub ms: u64,
    pub start_deg: f64,
    pub span_deg: f64,
}

/// The full breakdown. An empty `segments` with `total_ms == 0` means
/// the chart renders a single neutral "no data" disc.
#[derive(Debug, Clone, Serialize)]
pub struct Breakdown {
    pub total_ms: u64,
    pub segments: Vec<Segment>,
}

/// Aggregate the collection into angular segments. Records with no
/// time spent are excluded; a zero total yields an empty breakdown.
pub fn breakdown(records: &[TimerRecord]) -> Breakdown {
    let total_ms: u64 = records
        .iter()
        .fold(0u64, |acc, rec| acc.saturating_add(rec.elapsed_for_total()));
    if total_ms == 0 {
        return Breakdown {
            total_ms: 0,
            segments: Vec::new(),
        };
    }

    let mut start_deg = 0.0f64;
    let segments = records
        .iter()
        .filter(|rec| rec.elapsed_for_total() > 0)
        .map(|rec| {
            let ms = rec.elapsed_for_total();
            let span_deg = ms as f64 / total_ms as f64 * 360.0;
            let seg = Segment {
                name: rec.name.clone(),
                tag: rec.tag,
                color: rec.tag.color(),
                ms,
                start_deg,
                span_deg,
            };
            start_deg += span_deg;
            seg
        })
        .collect();

    Breakdown { total_ms, segments }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::{TimerKind, TimerRecord};

    fn spent(id: u64, tag: Tag, ms: u64) -> TimerRecord {
        let mut rec = TimerRecord::new(id, tag);
        rec.duration_ms = ms;
        rec
    }

    #[test]
    fn empty_collection_has_no_segments() {
        let b = breakdown(&[]);
        assert_eq!(b.total_ms, 0);
        assert!(b.segments.is_empty());
    }

    #[test]
    fn zero_total_has_no_segments() {
        let records = vec![spent(1, Tag::Green, 0), spent(2, Tag::Blue, 0)];
        let b = breakdown(&records);
        assert_eq!(b.total_ms, 0);
        assert!(b.segments.is_empty());
    }

    #[test]
    fn zero_ms_records_are_excluded() {
        let records = vec![
            spent(1, Tag::Green, 30_000),
            spent(2, Tag::Blue, 0),
            spent(3, Tag::Red, 10_000),
        ];
        let b = breakdown(&records);
        assert_eq!(b.total_ms, 40_000);
        assert_eq!(b.segments.len(), 2);
        assert_eq!(b.segments[0].tag, Tag::Green);
        assert_eq!(b.segments[1].tag, Tag::Red);
    }

    #[test]
    fn spans_are_proportional_and_contiguous() {
        let records = vec![spent(1, Tag::Green, 120_000), spent(2, Tag::Blue, 60_000)];
        let b = breakdown(&records);
        assert!((b.segments[0].span_deg - 240.0).abs() < 1e-9);
        assert!((b.segments[1].span_deg - 120.0).abs() < 1e-9);
        assert_eq!(b.segments[0].start_deg, 0.0);
        assert!(
            (b.segments[1].start_deg - b.segments[0].span_deg).abs() < 1e-9,
            "segments abut"
        );
    }

    #[test]
    fn countdown_contributes_time_spent() {
        let mut cd = TimerRecord::new(1, Tag::Purple);
        cd.kind = TimerKind::Countdown;
        cd.initial_duration_ms = 60_000;
        cd.remaining_ms = 45_000;
        let records = vec![cd, spent(2, Tag::Green, 15_000)];
        let b = breakdown(&records);
        assert_eq!(b.total_ms, 30_000);
        assert!((b.segments[0].span_deg - 180.0).abs() < 1e-9);
    }

    #[test]
    fn span_sum_is_360_within_tolerance() {
        // Thirds do not divide 360 exactly in binary.
        let records = vec![
            spent(1, Tag::Green, 1),
            spent(2, Tag::Blue, 1),
            spent(3, Tag::Red, 1),
            spent(4, Tag::Yellow, 7),
        ];
        let b = breakdown(&records);
        let sum: f64 = b.segments.iter().map(|s| s.span_deg).sum();
        let tolerance = SPAN_SUM_TOLERANCE_DEG * b.segments.len() as f64;
        assert!((sum - 360.0).abs() < tolerance, "sum was {sum}");
    }
}
