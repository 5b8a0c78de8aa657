use crate::models::snapshot::Transaction;
use crate::models::view::CumulativeSeriesPoint;

/// Build the cumulative-XP series for the line chart.
///
/// Filters to XP transactions, sorts ascending by creation time (stable, so
/// same-instant transactions keep their input order), then prefix-sums the
/// amounts. An empty result means "nothing to chart", not a failure.
pub fn build_xp_series(transactions: &[Transaction]) -> Vec<CumulativeSeriesPoint> {
    let mut xp: Vec<&Transaction> = transactions.iter().filter(|t| t.kind == "xp").collect();
    xp.sort_by_key(|t| t.created_at);

    let mut cumulative = 0i64;
    xp.into_iter()
        .map(|t| {
            cumulative += t.amount;
            CumulativeSeriesPoint {
                timestamp: t.created_at,
                cumulative_xp: cumulative,
            }
        })
        .collect()
}
