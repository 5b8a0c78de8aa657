use crate::analysis::aggregates::compute_aggregates;
use crate::analysis::recent::{recent, CutoffPolicy};
use crate::analysis::series::build_xp_series;
use crate::analysis::skills::{piscine_stats, top_skills};
use crate::analysis::validate::validate_response;
use crate::error::Result;
use crate::models::snapshot::{GradeOutcome, ObjectRef};
use crate::models::view::{ProfileView, RecentActivityItem};
use chrono::{DateTime, Utc};
use serde_json::Value;

const TOP_SKILL_LIMIT: usize = 5;
const RECENT_LIMIT: usize = 5;

/// Derive the full view-model bundle from one raw API payload.
///
/// A structural failure aborts the whole derivation; per-record anomalies
/// (missing object, null name) degrade to fallback values so one bad record
/// cannot blank the view.
pub fn build_profile(raw: &Value) -> Result<ProfileView> {
    let snapshot = validate_response(raw)?;

    let aggregates = compute_aggregates(&snapshot);
    let xp_series = build_xp_series(&snapshot.transactions);
    let skills = top_skills(&snapshot.transactions, TOP_SKILL_LIMIT);
    let piscine = piscine_stats(&snapshot.progress_records);

    let recent_progress = recent(&snapshot.progress_records, RECENT_LIMIT, CutoffPolicy::None)
        .into_iter()
        .map(|record| {
            to_activity_item(
                &record.related_object,
                record.grade,
                record.created_at,
                &record.path,
            )
        })
        .collect();

    // Results are capped to the current year; progress keeps everything.
    let recent_results = recent(
        &snapshot.result_records,
        RECENT_LIMIT,
        CutoffPolicy::upto_current_year(),
    )
    .into_iter()
    .map(|record| {
        to_activity_item(
            &record.related_object,
            record.grade,
            record.created_at,
            &record.path,
        )
    })
    .collect();

    Ok(ProfileView {
        user_id: snapshot.id,
        login: snapshot.login,
        aggregates,
        xp_series,
        top_skills: skills,
        piscine,
        recent_progress,
        recent_results,
    })
}

/// Load a saved raw payload from disk.
pub fn read_snapshot(path: &str) -> Result<Value> {
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

fn to_activity_item(
    related_object: &Option<ObjectRef>,
    grade: Option<f64>,
    created_at: DateTime<Utc>,
    path: &str,
) -> RecentActivityItem {
    let name = match related_object.as_ref().and_then(|object| object.name.clone()) {
        Some(name) => name,
        None => {
            log::warn!("record at '{path}' has no named object, showing it as Unnamed");
            "Unnamed".to_string()
        }
    };

    RecentActivityItem {
        name,
        status: GradeOutcome::from_grade(grade).label().to_string(),
        created_at,
        path: path.to_string(),
    }
}
