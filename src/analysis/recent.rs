use crate::models::snapshot::{ProgressRecord, ResultRecord, Transaction};
use chrono::{DateTime, Datelike, Utc};

/// Anything carrying a creation timestamp can feed the recent-activity list.
pub trait Dated {
    fn created_at(&self) -> DateTime<Utc>;
}

impl Dated for ProgressRecord {
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Dated for ResultRecord {
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Dated for Transaction {
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Which records are eligible for the recent list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CutoffPolicy {
    /// Keep everything.
    None,
    /// Drop records dated after the given year.
    UptoYear(i32),
}

impl CutoffPolicy {
    /// Keep records from the current year or earlier.
    pub fn upto_current_year() -> Self {
        CutoffPolicy::UptoYear(Utc::now().year())
    }

    fn admits(&self, timestamp: DateTime<Utc>) -> bool {
        match self {
            CutoffPolicy::None => true,
            CutoffPolicy::UptoYear(year) => timestamp.year() <= *year,
        }
    }
}

/// Select the most recent records: sort descending by creation time, truncate.
///
/// The sort is stable, so records sharing a timestamp keep their input order.
pub fn recent<T: Dated + Clone>(records: &[T], limit: usize, cutoff: CutoffPolicy) -> Vec<T> {
    let mut selected: Vec<T> = records
        .iter()
        .filter(|record| cutoff.admits(record.created_at()))
        .cloned()
        .collect();

    selected.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
    selected.truncate(limit);
    selected
}
