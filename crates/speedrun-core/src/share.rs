//! Compact reversible share tokens.
//!
//! Wire format: tuples `name|ms|tag_index` joined by `;`, the whole
//! string percent-encoded and then base64-encoded, so the token drops
//! straight into a URL query value. `ms` is the record's time spent
//! (`elapsed_for_total`), which makes every decoded snapshot a plain
//! stopwatch reading.
//!
//! Names containing the `|` or `;` delimiters are a known edge case:
//! they survive encoding but shift fields on decode.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde::Serialize;

use crate::error::ShareError;
use crate::timer::{Tag, TimerKind, TimerRecord};

const FIELD_SEP: char = '|';
const RECORD_SEP: char = ';';

/// A read-only record reconstructed from a token. Never merged into
/// the live collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShareSnapshot {
    pub name: String,
    pub kind: TimerKind,
    pub duration_ms: u64,
    pub remaining_ms: u64,
    pub initial_duration_ms: u64,
    pub tag: Tag,
}

impl ShareSnapshot {
    /// Time spent, mirroring `TimerRecord::elapsed_for_total`.
    pub fn elapsed_for_total(&self) -> u64 {
        self.duration_ms
    }
}

/// Encode the collection into a URL-safe token.
pub fn encode(records: &[TimerRecord]) -> String {
    let data = records
        .iter()
        .map(|rec| {
            format!(
                "{}{FIELD_SEP}{}{FIELD_SEP}{}",
                rec.name,
                rec.elapsed_for_total(),
                rec.tag.index()
            )
        })
        .collect::<Vec<_>>()
        .join(&RECORD_SEP.to_string());
    BASE64.encode(urlencoding::encode(&data).as_bytes())
}

/// Decode a token back into read-only snapshots.
///
/// Any parse failure -- bad base64, bad UTF-8, missing fields,
/// non-numeric ms -- is a [`ShareError`]; nothing panics past this
/// boundary. An empty token decodes to an empty list.
pub fn decode(token: &str) -> Result<Vec<ShareSnapshot>, ShareError> {
    let bytes = BASE64.decode(token.trim())?;
    let encoded = String::from_utf8(bytes)?;
    let data = urlencoding::decode(&encoded)?;
    if data.is_empty() {
        return Ok(Vec::new());
    }

    data.split(RECORD_SEP).map(parse_snapshot).collect()
}

fn parse_snapshot(item: &str) -> Result<ShareSnapshot, ShareError> {
    let fields: Vec<&str> = item.split(FIELD_SEP).collect();
    if fields.len() != 3 {
        return Err(ShareError::FieldCount(fields.len()));
    }
    let ms: u64 = fields[1]
        .parse()
        .map_err(|_| ShareError::BadNumber(fields[1].to_string()))?;
    let tag_index: usize = fields[2]
        .parse()
        .map_err(|_| ShareError::BadNumber(fields[2].to_string()))?;

    Ok(ShareSnapshot {
        name: fields[0].to_string(),
        kind: TimerKind::Stopwatch,
        duration_ms: ms,
        remaining_ms: 0,
        initial_duration_ms: 0,
        tag: Tag::from_index(tag_index).unwrap_or(Tag::Neutral),
    })
}

/// Assemble the shareable URL for a token.
pub fn share_url(base_url: &str, token: &str) -> String {
    format!("{base_url}?share={token}")
}
