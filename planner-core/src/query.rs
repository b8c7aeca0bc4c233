//! Listing filters over the task collection.

use crate::task::{Priority, Task};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    Pending,
    Completed,
}

impl FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(StatusFilter::Pending),
            "completed" => Ok(StatusFilter::Completed),
            other => Err(format!("unknown status '{other}' (expected pending|completed)")),
        }
    }
}

/// Criteria for [`crate::TaskStore::filter`]. Every unset field matches
/// everything; set fields must all match.
#[derive(Debug, Clone, Default)]
pub struct TaskQuery {
    /// Case-insensitive substring, matched against title or description.
    pub search: Option<String>,
    pub subject: Option<String>,
    pub priority: Option<Priority>,
    pub status: Option<StatusFilter>,
}

impl TaskQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn with_status(mut self, status: StatusFilter) -> Self {
        self.status = Some(status);
        self
    }

    pub fn matches(&self, task: &Task) -> bool {
        if let Some(term) = &self.search {
            let needle = term.to_lowercase();
            if !needle.is_empty()
                && !task.title.to_lowercase().contains(&needle)
                && !task.description.to_lowercase().contains(&needle)
            {
                return false;
            }
        }

        if let Some(subject) = &self.subject {
            if !subject.is_empty() && task.subject != *subject {
                return false;
            }
        }

        if let Some(priority) = self.priority {
            if task.priority != priority {
                return false;
            }
        }

        match self.status {
            Some(StatusFilter::Completed) if !task.completed => return false,
            Some(StatusFilter::Pending) if task.completed => return false,
            _ => {}
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::TaskDraft;
    use crate::TaskStore;
    use chrono::NaiveDate;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn store_with_two() -> TaskStore {
        let mut store = TaskStore::new();
        store
            .create_on(
                TaskDraft::new("Math homework", "Mathematics")
                    .with_priority(Priority::High)
                    .with_due_date(date("2025-10-05"))
                    .with_description("Chapter 5 problems"),
                date("2025-10-01"),
            )
            .unwrap();
        store
            .create_on(
                TaskDraft::new("Essay", "English")
                    .with_priority(Priority::Medium)
                    .with_due_date(date("2025-10-03")),
                date("2025-10-01"),
            )
            .unwrap();
        store
    }

    #[test]
    fn search_is_case_insensitive_over_title_and_description() {
        let store = store_with_two();

        let hits = store.filter(&TaskQuery::new().with_search("MATH"));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Math homework");

        // matches description only
        let hits = store.filter(&TaskQuery::new().with_search("chapter 5"));
        assert_eq!(hits.len(), 1);
    }

    #[test]
    fn all_criteria_must_match() {
        let store = store_with_two();
        let query = TaskQuery::new()
            .with_search("essay")
            .with_subject("Mathematics");
        assert!(store.filter(&query).is_empty());
    }

    #[test]
    fn empty_query_matches_everything() {
        let store = store_with_two();
        assert_eq!(store.filter(&TaskQuery::new()).len(), 2);
    }

    #[test]
    fn status_filter_splits_pending_and_completed() {
        let mut store = store_with_two();
        store.toggle_completion(1).unwrap();

        let completed = store.filter(&TaskQuery::new().with_status(StatusFilter::Completed));
        assert_eq!(completed.len(), 1);
        assert_eq!(completed[0].id, 1);

        let pending = store.filter(&TaskQuery::new().with_status(StatusFilter::Pending));
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].id, 2);
    }
}
