use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One day's completion record for one activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusRecord {
    pub time: String,
    pub status: bool,
}

/// Everything the tracker knows: activity name to date key (`YYYY-MM-DD`) to
/// record. Serialized transparently, so the data file holds the bare nested
/// mapping with no wrapper object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Dataset {
    pub activities: BTreeMap<String, BTreeMap<String, StatusRecord>>,
}

impl Dataset {
    /// Dataset with one empty record map per configured activity.
    pub fn seeded(activities: &[String]) -> Self {
        Self {
            activities: activities
                .iter()
                .map(|name| (name.clone(), BTreeMap::new()))
                .collect(),
        }
    }

    /// Sets the record for (activity, date), fully replacing any previous
    /// record at that key.
    pub fn upsert(&mut self, activity: &str, date: &str, record: StatusRecord) {
        self.activities
            .entry(activity.to_string())
            .or_default()
            .insert(date.to_string(), record);
    }

    pub fn record(&self, activity: &str, date: &str) -> Option<&StatusRecord> {
        self.activities
            .get(activity)
            .and_then(|records| records.get(date))
    }
}

#[derive(Debug, Deserialize)]
pub struct SubmitRequest {
    pub statuses: BTreeMap<String, bool>,
}

#[derive(Debug, Serialize)]
pub struct TodayEntry {
    pub activity: String,
    pub recorded: bool,
    pub status: bool,
    pub time: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TodayResponse {
    pub date: String,
    pub activities: Vec<TodayEntry>,
}

#[derive(Debug, Serialize)]
pub struct ActivitySummary {
    pub completed: u32,
    pub percentage: f64,
    pub streak: u32,
}

#[derive(Debug, Serialize)]
pub struct WeeklyReport {
    pub start_date: String,
    pub end_date: String,
    pub activities: BTreeMap<String, ActivitySummary>,
}

#[derive(Debug, Serialize)]
pub struct HistoryEntry {
    pub activity: String,
    pub status: bool,
    pub time: String,
}

#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub date: String,
    pub entries: Vec<HistoryEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(time: &str, status: bool) -> StatusRecord {
        StatusRecord {
            time: time.to_string(),
            status,
        }
    }

    #[test]
    fn seeded_dataset_has_empty_map_per_activity() {
        let data = Dataset::seeded(&["Exercise".to_string(), "Coding".to_string()]);
        assert_eq!(data.activities.len(), 2);
        assert!(data.activities["Exercise"].is_empty());
        assert!(data.activities["Coding"].is_empty());
    }

    #[test]
    fn upsert_creates_activity_on_first_write() {
        let mut data = Dataset::default();
        data.upsert("Exercise", "2024-01-10", record("08:15:00", true));

        let stored = data.record("Exercise", "2024-01-10").expect("missing record");
        assert_eq!(stored, &record("08:15:00", true));
    }

    #[test]
    fn upsert_overwrites_existing_record_entirely() {
        let mut data = Dataset::default();
        data.upsert("Exercise", "2024-01-10", record("08:15:00", true));
        data.upsert("Exercise", "2024-01-10", record("21:40:03", false));

        let stored = data.record("Exercise", "2024-01-10").expect("missing record");
        assert_eq!(stored, &record("21:40:03", false));
        assert_eq!(data.activities["Exercise"].len(), 1);
    }

    #[test]
    fn dataset_serializes_as_bare_mapping() {
        let mut data = Dataset::default();
        data.upsert("Exercise", "2024-01-10", record("08:15:00", true));

        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "Exercise": {
                    "2024-01-10": { "time": "08:15:00", "status": true }
                }
            })
        );
    }
}
