use serde_json::Value;

use crate::models::{TeamChoice, VoteSummary};
use crate::tally;

/// Strict decode of a summary payload.
///
/// Missing or non-integer count fields read as 0, and a `viewerChoice`
/// outside {"A", "B", null} reads as null rather than being coerced into a
/// pick the server never stored. Percentages are recomputed from the decoded
/// counts, so the displayed bar always satisfies the complement rule no
/// matter what the payload claimed.
pub fn decode_summary(payload: &Value) -> VoteSummary {
    let count_a = read_count(payload, "countA");
    let count_b = read_count(payload, "countB");
    let viewer_choice = payload
        .get("viewerChoice")
        .and_then(Value::as_str)
        .and_then(TeamChoice::from_canonical);

    tally::summarize(count_a, count_b, viewer_choice)
}

/// Decodes a raw response body. A body that is not JSON at all is a
/// transport-level failure and surfaces as an error; any well-formed JSON
/// value decodes leniently via [`decode_summary`].
pub fn decode_summary_str(body: &str) -> Result<VoteSummary, serde_json::Error> {
    let value: Value = serde_json::from_str(body)?;
    Ok(decode_summary(&value))
}

fn read_count(payload: &Value, field: &str) -> i64 {
    payload.get(field).and_then(Value::as_i64).unwrap_or(0)
}
