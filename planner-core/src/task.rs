//! Task model for the study planner core.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Priority::Low => write!(f, "low"),
            Priority::Medium => write!(f, "medium"),
            Priority::High => write!(f, "high"),
        }
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            other => Err(format!("unknown priority '{other}' (expected low|medium|high)")),
        }
    }
}

/// One study task.
///
/// Serialized field names match the export/import blob format
/// (`dueDate`, `createdAt`), so snapshots stay interchangeable with
/// other frontends of the same data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Store-assigned, monotonically increasing, never reused.
    pub id: u64,
    pub title: String,
    pub subject: String,
    pub priority: Priority,
    pub due_date: NaiveDate,
    #[serde(default)]
    pub description: String,
    pub completed: bool,
    /// Set once at creation; update never touches it.
    pub created_at: NaiveDate,
    /// Display-only flag.
    #[serde(default)]
    pub reminder: bool,
}

impl Task {
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        !self.completed && self.due_date < today
    }
}

/// The mutable field set accepted by create/update.
///
/// `priority` and `due_date` stay optional here so validation can name
/// exactly which required fields the caller left out.
#[derive(Debug, Clone, Default)]
pub struct TaskDraft {
    pub title: String,
    pub subject: String,
    pub priority: Option<Priority>,
    pub due_date: Option<NaiveDate>,
    pub description: String,
    pub reminder: bool,
}

impl TaskDraft {
    pub fn new(title: impl Into<String>, subject: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subject: subject.into(),
            ..Self::default()
        }
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_reminder(mut self, reminder: bool) -> Self {
        self.reminder = reminder;
        self
    }

    /// Required fields that are missing or blank, by their public names.
    pub(crate) fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.title.trim().is_empty() {
            missing.push("title");
        }
        if self.subject.trim().is_empty() {
            missing.push("subject");
        }
        if self.priority.is_none() {
            missing.push("priority");
        }
        if self.due_date.is_none() {
            missing.push("dueDate");
        }
        missing
    }
}

/// Draft pre-filled from an existing task, for edit flows that change
/// only some fields.
impl From<&Task> for TaskDraft {
    fn from(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            subject: task.subject.clone(),
            priority: Some(task.priority),
            due_date: Some(task.due_date),
            description: task.description.clone(),
            reminder: task.reminder,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn priority_round_trips_through_str() {
        for p in [Priority::Low, Priority::Medium, Priority::High] {
            assert_eq!(p.to_string().parse::<Priority>().unwrap(), p);
        }
        assert!("urgent".parse::<Priority>().is_err());
    }

    #[test]
    fn draft_reports_all_missing_fields() {
        let draft = TaskDraft::new("  ", "");
        assert_eq!(draft.missing_fields(), vec!["title", "subject", "priority", "dueDate"]);

        let draft = TaskDraft::new("Quiz", "Science")
            .with_priority(Priority::High)
            .with_due_date(date("2025-10-02"));
        assert!(draft.missing_fields().is_empty());
    }

    #[test]
    fn overdue_needs_past_due_date_and_pending_status() {
        let task = Task {
            id: 1,
            title: "Essay".into(),
            subject: "English".into(),
            priority: Priority::Medium,
            due_date: date("2025-10-03"),
            description: String::new(),
            completed: false,
            created_at: date("2025-10-01"),
            reminder: false,
        };
        assert!(task.is_overdue(date("2025-10-04")));
        assert!(!task.is_overdue(date("2025-10-03")));

        let done = Task { completed: true, ..task };
        assert!(!done.is_overdue(date("2025-10-04")));
    }
}
