use crate::models::{TeamChoice, VoteSummary};

/// Derives the aggregate view of a game's votes from per-side counts and the
/// requesting viewer's persisted pick.
///
/// Percentage rule: with at least one vote, side A gets the rounded share and
/// side B the complement, so the two always sum to 100 even when rounding
/// would otherwise drop or gain a point. With no votes both sides are 0.
pub fn summarize(count_a: i64, count_b: i64, viewer_choice: Option<TeamChoice>) -> VoteSummary {
    let count_a = count_a.max(0);
    let count_b = count_b.max(0);
    let total = count_a + count_b;

    let (pct_a, pct_b) = if total > 0 {
        let pct_a = ((count_a as f64 / total as f64) * 100.0).round() as i32;
        (pct_a, 100 - pct_a)
    } else {
        (0, 0)
    };

    VoteSummary {
        count_a,
        count_b,
        total,
        pct_a,
        pct_b,
        viewer_choice,
    }
}
