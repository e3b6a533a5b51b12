use chrono::{DateTime, Utc};

use crate::models::{
    domain::{QuizRecord, ScoreTier},
    dto::response::{HistoryEntry, HistorySummary},
};

/// Read-only summaries over stored quiz records for the history view.
pub struct HistoryService;

impl HistoryService {
    pub fn total_attempts(records: &[QuizRecord]) -> u64 {
        records.iter().map(|r| u64::from(r.attempts)).sum()
    }

    /// Mean best score over attempted quizzes only. Quizzes that were never
    /// taken are left out rather than counted as zero.
    pub fn average_best_score(records: &[QuizRecord]) -> Option<f64> {
        let scores: Vec<f64> = records
            .iter()
            .filter_map(|r| r.best_score_percent)
            .map(f64::from)
            .collect();

        if scores.is_empty() {
            None
        } else {
            Some(scores.iter().sum::<f64>() / scores.len() as f64)
        }
    }

    /// Short en-US style date, e.g. `Mar 7, 2026`.
    pub fn format_date(timestamp: &DateTime<Utc>) -> String {
        timestamp.format("%b %-d, %Y").to_string()
    }

    pub fn summarize(records: &[QuizRecord]) -> HistorySummary {
        let entries = records
            .iter()
            .map(|r| {
                let tier = ScoreTier::for_best_score(r.best_score_percent);
                HistoryEntry {
                    quiz_id: r.id.clone(),
                    title: r.title.clone(),
                    question_count: r.question_count(),
                    attempts: r.attempts,
                    best_score_percent: r.best_score_percent,
                    tier,
                    tier_label: tier.label().to_string(),
                    created_at: r.created_at,
                    created_on: Self::format_date(&r.created_at),
                    last_attempted_on: r.last_attempt_at.as_ref().map(Self::format_date),
                }
            })
            .collect();

        HistorySummary {
            total_quizzes: records.len(),
            total_attempts: Self::total_attempts(records),
            average_best_score: Self::average_best_score(records),
            entries,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures::two_question_quiz;
    use chrono::TimeZone;

    fn attempted(scores: &[u8]) -> QuizRecord {
        let mut record = two_question_quiz();
        for score in scores {
            record.apply_attempt(*score, Utc::now());
        }
        record
    }

    #[test]
    fn totals_are_zero_for_empty_input() {
        assert_eq!(HistoryService::total_attempts(&[]), 0);
        assert!(HistoryService::average_best_score(&[]).is_none());
    }

    #[test]
    fn total_attempts_sums_all_records() {
        let records = vec![attempted(&[50, 70]), attempted(&[]), attempted(&[100])];
        assert_eq!(HistoryService::total_attempts(&records), 3);
    }

    #[test]
    fn average_excludes_unattempted_records() {
        let records = vec![attempted(&[80]), attempted(&[]), attempted(&[60, 40])];

        // (80 + 60) / 2, the untaken quiz is not a zero
        assert_eq!(HistoryService::average_best_score(&records), Some(70.0));
    }

    #[test]
    fn average_is_none_when_nothing_attempted() {
        let records = vec![attempted(&[]), attempted(&[])];
        assert!(HistoryService::average_best_score(&records).is_none());
    }

    #[test]
    fn average_counts_a_real_zero() {
        let records = vec![attempted(&[0]), attempted(&[100])];
        assert_eq!(HistoryService::average_best_score(&records), Some(50.0));
    }

    #[test]
    fn format_date_uses_short_month_day_year() {
        let ts = Utc.with_ymd_and_hms(2026, 3, 7, 15, 30, 0).unwrap();
        assert_eq!(HistoryService::format_date(&ts), "Mar 7, 2026");
    }

    #[test]
    fn summarize_keeps_order_and_tiers() {
        let mut first = attempted(&[92]);
        first.title = "First".to_string();
        let mut second = attempted(&[]);
        second.title = "Second".to_string();

        let summary = HistoryService::summarize(&[first, second]);

        assert_eq!(summary.total_quizzes, 2);
        assert_eq!(summary.total_attempts, 1);
        assert_eq!(summary.average_best_score, Some(92.0));
        assert_eq!(summary.entries[0].title, "First");
        assert_eq!(summary.entries[0].tier, ScoreTier::Excellent);
        assert!(summary.entries[0].last_attempted_on.is_some());
        assert_eq!(summary.entries[1].tier_label, "Not taken");
        assert!(summary.entries[1].last_attempted_on.is_none());
    }
}
