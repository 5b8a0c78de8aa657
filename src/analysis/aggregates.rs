use crate::models::snapshot::{GradeOutcome, RawSnapshot};
use crate::models::view::DerivedAggregate;

/// The API reports vote counters in raw byte-like units; the UI shows millions.
const VOTE_SCALE: f64 = 1_000_000.0;

/// Compute the scalar summaries for one snapshot.
///
/// Every zero-denominator case yields a sentinel (0 or `None`), never an error:
/// an empty profile is a valid profile.
pub fn compute_aggregates(snapshot: &RawSnapshot) -> DerivedAggregate {
    let total_xp: i64 = snapshot
        .transactions
        .iter()
        .filter(|t| t.kind == "xp")
        .map(|t| t.amount)
        .sum();

    let total_results = snapshot.result_records.len();
    let passed = snapshot
        .result_records
        .iter()
        .filter(|r| GradeOutcome::from_grade(r.grade) == GradeOutcome::Passed)
        .count();
    let overall_grade_percent = if total_results == 0 {
        0.0
    } else {
        round1(passed as f64 / total_results as f64 * 100.0)
    };

    let audit_ratio = if snapshot.total_down > 0 {
        Some(round1(snapshot.total_up as f64 / snapshot.total_down as f64))
    } else {
        None
    };

    DerivedAggregate {
        total_xp,
        overall_grade_percent,
        audit_ratio,
        up_votes_scaled: round2(snapshot.total_up as f64 / VOTE_SCALE),
        down_votes_scaled: round2(snapshot.total_down as f64 / VOTE_SCALE),
    }
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
