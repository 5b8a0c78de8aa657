use crate::models::snapshot::{GradeOutcome, ProgressRecord, Transaction};
use crate::models::view::{PiscineStats, SkillRank};
use std::collections::HashMap;

const SKILL_PREFIX: &str = "skill_";
const PISCINE_MARKER: &str = "piscine";

/// Skill totals: display name → summed transaction amount
pub type SkillTotals = HashMap<String, i64>;

/// Rank skills by summed transaction amount, truncated to `limit`.
///
/// Transactions whose type carries the `skill_` prefix are grouped under a
/// display key (prefix stripped, hyphen-separated words title-cased). Ties are
/// broken by first-encountered key so the ranking is deterministic.
pub fn top_skills(transactions: &[Transaction], limit: usize) -> Vec<SkillRank> {
    let mut totals = SkillTotals::new();
    let mut first_seen: HashMap<String, usize> = HashMap::new();

    for transaction in transactions {
        let Some(raw_name) = transaction.kind.strip_prefix(SKILL_PREFIX) else {
            continue;
        };
        let name = display_name(raw_name);
        let next_index = first_seen.len();
        first_seen.entry(name.clone()).or_insert(next_index);
        *totals.entry(name).or_insert(0) += transaction.amount;
    }

    let mut ranked: Vec<SkillRank> = totals
        .into_iter()
        .map(|(name, total_amount)| SkillRank { name, total_amount })
        .collect();

    ranked.sort_by(|a, b| {
        b.total_amount
            .cmp(&a.total_amount)
            .then_with(|| first_seen[&a.name].cmp(&first_seen[&b.name]))
    });
    ranked.truncate(limit);
    ranked
}

/// Compute attempt statistics over the piscine track.
///
/// Records are matched by a `piscine` substring on the path and classified by
/// the three-valued grade rule; in-progress attempts count toward `attempts`
/// but toward neither `passed` nor `failed`.
pub fn piscine_stats(progress_records: &[ProgressRecord]) -> PiscineStats {
    let piscine: Vec<&ProgressRecord> = progress_records
        .iter()
        .filter(|record| record.path.contains(PISCINE_MARKER))
        .collect();

    let attempts = piscine.len();
    let passed = piscine
        .iter()
        .filter(|record| GradeOutcome::from_grade(record.grade) == GradeOutcome::Passed)
        .count();
    let failed = piscine
        .iter()
        .filter(|record| GradeOutcome::from_grade(record.grade) == GradeOutcome::Failed)
        .count();

    let success_rate_percent = if attempts == 0 {
        0.0
    } else {
        round1(passed as f64 / attempts as f64 * 100.0)
    };

    PiscineStats {
        attempts,
        passed,
        failed,
        success_rate_percent,
    }
}

/// "go" → "Go", "front-end" → "Front-End"
fn display_name(raw: &str) -> String {
    raw.split('-')
        .map(capitalize)
        .collect::<Vec<String>>()
        .join("-")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn tx(kind: &str, amount: i64) -> Transaction {
        Transaction {
            id: 0,
            kind: kind.to_string(),
            amount,
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            path: String::new(),
            related_object: None,
        }
    }

    fn progress(path: &str, grade: Option<f64>) -> ProgressRecord {
        ProgressRecord {
            id: 0,
            grade,
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            path: path.to_string(),
            related_object: None,
        }
    }

    #[test]
    fn groups_and_ranks_skill_amounts() {
        let skills = top_skills(
            &[tx("skill_go", 10), tx("skill_go", 5), tx("skill_js", 3)],
            5,
        );

        assert_eq!(skills.len(), 2);
        assert_eq!(skills[0].name, "Go");
        assert_eq!(skills[0].total_amount, 15);
        assert_eq!(skills[1].name, "Js");
        assert_eq!(skills[1].total_amount, 3);
    }

    #[test]
    fn ignores_non_skill_transactions() {
        let skills = top_skills(&[tx("xp", 100), tx("up", 50)], 5);
        assert!(skills.is_empty());
    }

    #[test]
    fn truncates_to_limit() {
        let transactions = vec![
            tx("skill_go", 50),
            tx("skill_js", 40),
            tx("skill_sql", 30),
            tx("skill_docker", 20),
            tx("skill_css", 10),
            tx("skill_html", 5),
        ];

        let skills = top_skills(&transactions, 5);
        assert_eq!(skills.len(), 5);
        assert_eq!(skills[0].name, "Go");
        assert!(skills.iter().all(|s| s.name != "Html"));
    }

    #[test]
    fn ties_break_by_first_encountered_skill() {
        let skills = top_skills(&[tx("skill_js", 10), tx("skill_go", 10)], 5);

        assert_eq!(skills[0].name, "Js");
        assert_eq!(skills[1].name, "Go");
    }

    #[test]
    fn title_cases_hyphenated_names() {
        let skills = top_skills(&[tx("skill_front-end", 10)], 5);
        assert_eq!(skills[0].name, "Front-End");
    }

    #[test]
    fn piscine_stats_use_three_valued_classification() {
        let records = vec![
            progress("/kisumu/piscine-go/quest-01", Some(1.0)),
            progress("/kisumu/piscine-go/quest-02", Some(0.0)),
            progress("/kisumu/piscine-go/quest-03", None),
            progress("/kisumu/module/go-reloaded", Some(1.0)),
        ];

        let stats = piscine_stats(&records);
        assert_eq!(stats.attempts, 3, "module record must not count");
        assert_eq!(stats.passed, 1);
        assert_eq!(stats.failed, 1, "in-progress must not count as failed");
        assert!((stats.success_rate_percent - 33.3).abs() < 1e-6);
    }

    #[test]
    fn piscine_stats_on_empty_input_are_all_zero() {
        let stats = piscine_stats(&[]);
        assert_eq!(stats.attempts, 0);
        assert_eq!(stats.success_rate_percent, 0.0);
    }
}
