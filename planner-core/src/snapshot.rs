//! Snapshot export and lenient batch import.
//!
//! The blob format is a JSON array of task records with the public field
//! names (`dueDate`, `createdAt`). Import is deliberately forgiving at
//! the record level: unknown fields are ignored, optional fields default,
//! and records missing a required field are dropped one by one. Only a
//! top-level payload that is not an array is a hard failure.

use chrono::NaiveDate;
use log::debug;
use serde::Deserialize;

use crate::error::StoreError;
use crate::store::{today_local, TaskStore};
use crate::task::{Priority, Task};

/// A candidate record as it arrives from an import payload. Everything
/// is optional here; validation happens in [`TaskStore::import_records`].
/// Incoming ids are ignored — the store always assigns fresh ones.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTaskRecord {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub priority: Option<Priority>,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub created_at: Option<NaiveDate>,
    #[serde(default)]
    pub reminder: bool,
}

impl RawTaskRecord {
    fn is_importable(&self) -> bool {
        !self.title.trim().is_empty()
            && !self.subject.trim().is_empty()
            && self.priority.is_some()
            && self.due_date.is_some()
    }
}

impl TaskStore {
    /// Append every importable record with a fresh id, defaulting
    /// `created_at` to `today` when absent. Returns the imported count;
    /// zero valid records is an ordinary `0`, not an error.
    pub fn import_records(&mut self, records: Vec<RawTaskRecord>, today: NaiveDate) -> usize {
        let mut imported = 0;
        for record in records {
            if !record.is_importable() {
                continue;
            }
            let task = Task {
                id: self.take_next_id(),
                title: record.title,
                subject: record.subject,
                priority: record.priority.expect("importable record"),
                due_date: record.due_date.expect("importable record"),
                description: record.description,
                completed: record.completed,
                created_at: record.created_at.unwrap_or(today),
                reminder: record.reminder,
            };
            self.append(task);
            imported += 1;
        }
        debug!("imported {imported} tasks");
        imported
    }

    /// Parse a JSON payload and import it. Fails with
    /// [`StoreError::Format`] when the payload is not an array; elements
    /// that are not task-shaped are skipped, not fatal.
    pub fn import_json(&mut self, payload: &str) -> Result<usize, StoreError> {
        self.import_json_on(payload, today_local())
    }

    pub fn import_json_on(&mut self, payload: &str, today: NaiveDate) -> Result<usize, StoreError> {
        let value: serde_json::Value = serde_json::from_str(payload)
            .map_err(|e| StoreError::Format(format!("not valid JSON: {e}")))?;
        let Some(items) = value.as_array() else {
            return Err(StoreError::Format("expected an array of tasks".into()));
        };

        let records = items
            .iter()
            .filter_map(|item| serde_json::from_value::<RawTaskRecord>(item.clone()).ok())
            .collect();
        Ok(self.import_records(records, today))
    }

    /// Value snapshot of the full collection, in insertion order.
    pub fn export_snapshot(&self) -> Vec<Task> {
        self.tasks().to_vec()
    }

    /// Pretty-printed JSON array of the snapshot.
    pub fn export_json(&self) -> String {
        serde_json::to_string_pretty(self.tasks()).expect("tasks serialize to JSON")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::TaskDraft;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn import_keeps_valid_records_and_drops_invalid_ones() {
        let mut store = TaskStore::new();
        let payload = r#"[
            {"title": "A", "subject": "Math", "priority": "high", "dueDate": "2025-01-01"},
            {"title": ""}
        ]"#;

        let imported = store.import_json_on(payload, date("2025-10-02")).unwrap();
        assert_eq!(imported, 1);
        assert_eq!(store.len(), 1);

        let task = &store.tasks()[0];
        assert_eq!(task.title, "A");
        assert_eq!(task.priority, Priority::High);
        // defaults for omitted optional fields
        assert!(!task.completed);
        assert!(!task.reminder);
        assert_eq!(task.description, "");
        assert_eq!(task.created_at, date("2025-10-02"));
    }

    #[test]
    fn import_ignores_incoming_ids_and_unknown_fields() {
        let mut store = TaskStore::new();
        store
            .create_on(
                TaskDraft::new("existing", "Science")
                    .with_priority(Priority::Low)
                    .with_due_date(date("2025-10-04")),
                date("2025-10-02"),
            )
            .unwrap();

        let payload = r#"[
            {"id": 1, "title": "clash", "subject": "Math", "priority": "low",
             "dueDate": "2025-01-01", "color": "red"}
        ]"#;
        store.import_json_on(payload, date("2025-10-02")).unwrap();

        let ids: Vec<u64> = store.tasks().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn malformed_dates_and_priorities_drop_the_record() {
        let mut store = TaskStore::new();
        let payload = r#"[
            {"title": "bad date", "subject": "Math", "priority": "high", "dueDate": "tomorrow"},
            {"title": "bad priority", "subject": "Math", "priority": "urgent", "dueDate": "2025-01-01"},
            "not even an object"
        ]"#;
        let imported = store.import_json_on(payload, date("2025-10-02")).unwrap();
        assert_eq!(imported, 0);
        assert!(store.is_empty());
    }

    #[test]
    fn non_array_payload_is_a_format_error() {
        let mut store = TaskStore::new();
        for payload in [r#"{"title": "A"}"#, "42", "not json"] {
            let err = store.import_json_on(payload, date("2025-10-02")).unwrap_err();
            assert!(matches!(err, StoreError::Format(_)), "payload: {payload}");
        }
        assert!(store.is_empty());
    }

    #[test]
    fn export_json_uses_public_field_names() {
        let mut store = TaskStore::new();
        store
            .create_on(
                TaskDraft::new("Quiz", "Science")
                    .with_priority(Priority::High)
                    .with_due_date(date("2025-10-02")),
                date("2025-10-01"),
            )
            .unwrap();

        let json = store.export_json();
        assert!(json.contains("\"dueDate\": \"2025-10-02\""));
        assert!(json.contains("\"createdAt\": \"2025-10-01\""));
        assert!(json.contains("\"priority\": \"high\""));
    }
}
