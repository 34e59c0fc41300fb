use crate::models::{ActivitySummary, Dataset, HistoryEntry, WeeklyReport};
use chrono::{Duration, Local, NaiveDate};
use std::collections::BTreeMap;

pub fn build_report(data: &Dataset) -> WeeklyReport {
    build_report_at(Local::now().date_naive(), data)
}

/// Seven-day window ending at `today`, scanned oldest to newest. The streak
/// counter resets on any day without a true-status record, so the value left
/// after the scan is the run of completed days ending at `today`.
///
/// Covers the activities present in the dataset, which may differ from the
/// configured list if that list changed after records were written.
pub fn build_report_at(today: NaiveDate, data: &Dataset) -> WeeklyReport {
    let start = today - Duration::days(6);

    let mut activities = BTreeMap::new();
    for (activity, records) in &data.activities {
        let mut completed = 0u32;
        let mut streak = 0u32;
        for offset in 0..7 {
            let day = date_key(start + Duration::days(offset));
            match records.get(&day) {
                Some(record) if record.status => {
                    completed += 1;
                    streak += 1;
                }
                _ => streak = 0,
            }
        }

        activities.insert(
            activity.clone(),
            ActivitySummary {
                completed,
                percentage: f64::from(completed) / 7.0 * 100.0,
                streak,
            },
        );
    }

    WeeklyReport {
        start_date: date_key(start),
        end_date: date_key(today),
        activities,
    }
}

/// Every activity with a record on `date`, in activity order. Activities
/// without a record that day are left out entirely; an empty result just
/// means nothing was recorded. `date` is assumed to be already validated.
pub fn date_history(data: &Dataset, date: &str) -> Vec<HistoryEntry> {
    data.activities
        .iter()
        .filter_map(|(activity, records)| {
            records.get(date).map(|record| HistoryEntry {
                activity: activity.clone(),
                status: record.status,
                time: record.time.clone(),
            })
        })
        .collect()
}

fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StatusRecord;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 10).unwrap()
    }

    fn record(status: bool) -> StatusRecord {
        StatusRecord {
            time: "09:00:00".to_string(),
            status,
        }
    }

    // Fills the window [today - 6, today] oldest to newest from `days`.
    fn dataset_with_window(activity: &str, days: [bool; 7]) -> Dataset {
        let start = today() - Duration::days(6);
        let mut data = Dataset::default();
        for (offset, status) in days.into_iter().enumerate() {
            let day = date_key(start + Duration::days(offset as i64));
            data.upsert(activity, &day, record(status));
        }
        data
    }

    #[test]
    fn percentage_is_completed_over_seven() {
        for completed in 0..=7u32 {
            let mut days = [false; 7];
            for day in days.iter_mut().take(completed as usize) {
                *day = true;
            }
            let data = dataset_with_window("Exercise", days);

            let report = build_report_at(today(), &data);
            let summary = &report.activities["Exercise"];
            assert_eq!(summary.completed, completed);
            assert_eq!(summary.percentage, f64::from(completed) / 7.0 * 100.0);
        }
    }

    #[test]
    fn streak_is_trailing_not_total() {
        // Everything true except the oldest day: six trailing days, not seven.
        let data = dataset_with_window("Exercise", [false, true, true, true, true, true, true]);
        let report = build_report_at(today(), &data);
        assert_eq!(report.activities["Exercise"].streak, 6);
        assert_eq!(report.activities["Exercise"].completed, 6);
    }

    #[test]
    fn streak_resets_on_false_day_mid_window() {
        let data = dataset_with_window("Exercise", [true, false, true, true, true, true, true]);
        let report = build_report_at(today(), &data);
        assert_eq!(report.activities["Exercise"].streak, 5);
        assert_eq!(report.activities["Exercise"].completed, 6);
    }

    #[test]
    fn streak_resets_on_missing_day() {
        let mut data = Dataset::default();
        // Records only for today - 2 and today; the gap at today - 1 breaks
        // the run even though today itself is true.
        data.upsert("Exercise", &date_key(today() - Duration::days(2)), record(true));
        data.upsert("Exercise", &date_key(today()), record(true));

        let report = build_report_at(today(), &data);
        assert_eq!(report.activities["Exercise"].streak, 1);
        assert_eq!(report.activities["Exercise"].completed, 2);
    }

    #[test]
    fn false_records_do_not_count_as_completed() {
        let data = dataset_with_window("Exercise", [false; 7]);
        let report = build_report_at(today(), &data);
        let summary = &report.activities["Exercise"];
        assert_eq!(summary.completed, 0);
        assert_eq!(summary.percentage, 0.0);
        assert_eq!(summary.streak, 0);
    }

    #[test]
    fn records_outside_window_are_ignored() {
        let mut data = Dataset::default();
        data.upsert("Exercise", &date_key(today() - Duration::days(7)), record(true));
        data.upsert("Exercise", &date_key(today() + Duration::days(1)), record(true));

        let report = build_report_at(today(), &data);
        let summary = &report.activities["Exercise"];
        assert_eq!(summary.completed, 0);
        assert_eq!(summary.percentage, 0.0);
        assert_eq!(summary.streak, 0);
    }

    #[test]
    fn report_covers_every_dataset_activity() {
        let mut data = Dataset::seeded(&["Exercise".to_string(), "Meditation".to_string()]);
        data.upsert("Exercise", &date_key(today()), record(true));
        data.upsert("Meditation", &date_key(today()), record(false));

        let report = build_report_at(today(), &data);
        assert_eq!(report.start_date, "2024-01-04");
        assert_eq!(report.end_date, "2024-01-10");

        let exercise = &report.activities["Exercise"];
        assert_eq!(exercise.completed, 1);
        assert_eq!(exercise.streak, 1);
        assert!((exercise.percentage - 100.0 / 7.0).abs() < 1e-9);

        let meditation = &report.activities["Meditation"];
        assert_eq!(meditation.completed, 0);
        assert_eq!(meditation.percentage, 0.0);
        assert_eq!(meditation.streak, 0);
    }

    #[test]
    fn history_lists_only_activities_recorded_that_day() {
        let mut data = Dataset::seeded(&[
            "Coding".to_string(),
            "Exercise".to_string(),
            "Meditation".to_string(),
        ]);
        data.upsert("Meditation", "2024-01-10", record(false));
        data.upsert("Exercise", "2024-01-10", record(true));
        data.upsert("Coding", "2024-01-09", record(true));

        let entries = date_history(&data, "2024-01-10");
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].activity, "Exercise");
        assert!(entries[0].status);
        assert_eq!(entries[0].time, "09:00:00");
        assert_eq!(entries[1].activity, "Meditation");
        assert!(!entries[1].status);
    }

    #[test]
    fn history_for_unrecorded_date_is_empty() {
        let mut data = Dataset::default();
        data.upsert("Exercise", "2024-01-10", record(true));

        assert!(date_history(&data, "1999-01-01").is_empty());
    }
}
