use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One validated API response for a single user at a point in time.
///
/// Field names follow the GraphQL payload (camelCase on the wire); the record
/// arrays decode to empty when absent so a sparse profile never fails to load.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSnapshot {
    pub id: i64,
    pub login: String,
    #[serde(default)]
    pub total_up: i64,
    #[serde(default)]
    pub total_down: i64,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(default, rename = "progresses")]
    pub progress_records: Vec<ProgressRecord>,
    #[serde(default, rename = "results")]
    pub result_records: Vec<ResultRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    #[serde(default)]
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: String, // "xp" | "up" | "down" | "skill_<name>"
    pub amount: i64,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub path: String,
    #[serde(default, alias = "object")]
    pub related_object: Option<ObjectRef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressRecord {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub grade: Option<f64>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub path: String,
    #[serde(default, alias = "object")]
    pub related_object: Option<ObjectRef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultRecord {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub grade: Option<f64>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub path: String,
    #[serde(default, alias = "object")]
    pub related_object: Option<ObjectRef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObjectRef {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: String, // "exercise" | "project" | ...
}

/// Three-valued grade classification.
///
/// A missing grade means the work is still in progress; only an explicit zero
/// counts as failed. Collapsing `None` into Failed mislabels open work.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradeOutcome {
    Passed,
    Failed,
    InProgress,
}

impl GradeOutcome {
    pub fn from_grade(grade: Option<f64>) -> Self {
        match grade {
            None => GradeOutcome::InProgress,
            Some(g) if g > 0.0 => GradeOutcome::Passed,
            Some(_) => GradeOutcome::Failed,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GradeOutcome::Passed => "Passed",
            GradeOutcome::Failed => "Failed",
            GradeOutcome::InProgress => "In Progress",
        }
    }
}
