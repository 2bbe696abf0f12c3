use serde::{Deserialize, Serialize};

/// Fallback duration for the last transcript segment, which has no
/// successor to derive from.
const LAST_SEGMENT_DUR: &str = "3.0";

/// One transcript line. `start` and `dur` are seconds rendered as
/// strings, matching the wire shape of caption formats.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TranscriptSegment {
    pub start: String,
    pub dur: String,
    pub text: String,
}

/// A transcript line as read from the panel, before durations are known.
#[derive(Debug, Clone, Deserialize)]
pub struct RawSegment {
    pub start: String,
    pub text: String,
}

/// Derive per-segment durations from consecutive start offsets.
///
/// The panel shows only start timestamps; each segment lasts until the
/// next one begins. Requires the sequence to be in display order.
pub fn derive_durations(raw: Vec<RawSegment>) -> Vec<TranscriptSegment> {
    let starts: Vec<f64> = raw
        .iter()
        .map(|segment| segment.start.parse().unwrap_or(0.0))
        .collect();

    raw.into_iter()
        .enumerate()
        .map(|(i, segment)| {
            let dur = match starts.get(i + 1) {
                Some(next) => format!("{:.1}", next - starts[i]),
                None => LAST_SEGMENT_DUR.to_string(),
            };
            TranscriptSegment {
                start: segment.start,
                dur,
                text: segment.text,
            }
        })
        .collect()
}
