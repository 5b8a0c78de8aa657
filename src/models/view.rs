use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Scalar summaries computed once per snapshot.
///
/// `audit_ratio` is `None` when the user has received no down votes; the
/// renderer shows "N/A" instead of a division result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DerivedAggregate {
    pub total_xp: i64,
    pub overall_grade_percent: f64,
    pub audit_ratio: Option<f64>,
    pub up_votes_scaled: f64,
    pub down_votes_scaled: f64,
}

/// One point of the cumulative-XP line chart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CumulativeSeriesPoint {
    pub timestamp: DateTime<Utc>,
    pub cumulative_xp: i64,
}

/// A ranked skill with its summed transaction amount.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillRank {
    pub name: String,
    pub total_amount: i64,
}

/// Attempt statistics over the piscine track.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PiscineStats {
    pub attempts: usize,
    pub passed: usize,
    pub failed: usize,
    pub success_rate_percent: f64,
}

/// A progress or result record projected for the recent-activity list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecentActivityItem {
    pub name: String,
    pub status: String, // "Passed" | "Failed" | "In Progress"
    pub created_at: DateTime<Utc>,
    pub path: String,
}

/// The full view-model bundle for one profile render cycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileView {
    pub user_id: i64,
    pub login: String,
    pub aggregates: DerivedAggregate,
    pub xp_series: Vec<CumulativeSeriesPoint>,
    pub top_skills: Vec<SkillRank>,
    pub piscine: PiscineStats,
    pub recent_progress: Vec<RecentActivityItem>,
    pub recent_results: Vec<RecentActivityItem>,
}
