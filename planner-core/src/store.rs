//! TaskStore — owned, instantiable task collection plus derived views.
//!
//! Design notes:
//! - Insertion-ordered `Vec<Task>` with linear scans throughout. The
//!   collection is tens to low hundreds of items; indexing would be
//!   machinery without a payoff.
//! - No ambient singletons: every store is an independent instance, and
//!   every date-sensitive operation has a `*_on` form taking an explicit
//!   `today` so behavior is reproducible in tests.

use chrono::{Duration, Local, NaiveDate};
use log::debug;
use serde::Serialize;

use crate::error::StoreError;
use crate::query::TaskQuery;
use crate::task::{Task, TaskDraft};

/// Default lookahead for [`TaskStore::upcoming_tasks`].
pub const DEFAULT_HORIZON_DAYS: i64 = 7;

/// Aggregate counters for the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    /// `round(completed / total * 100)`, halves away from zero; 0 when
    /// the store is empty.
    pub progress_percent: u8,
}

pub(crate) fn today_local() -> NaiveDate {
    Local::now().date_naive()
}

#[derive(Debug, Default, Clone)]
pub struct TaskStore {
    tasks: Vec<Task>,
    next_id: u64,
}

impl TaskStore {
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: 1,
        }
    }

    /// Rebuild a store from previously exported tasks, keeping their ids.
    /// The id counter is reseeded above the maximum preloaded id.
    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        let next_id = tasks.iter().map(|t| t.id).max().unwrap_or(0) + 1;
        Self { tasks, next_id }
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: u64) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub(crate) fn take_next_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub(crate) fn append(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// Create a task due today's local date as `created_at`.
    pub fn create(&mut self, draft: TaskDraft) -> Result<Task, StoreError> {
        self.create_on(draft, today_local())
    }

    /// Create with an explicit creation date.
    pub fn create_on(&mut self, draft: TaskDraft, today: NaiveDate) -> Result<Task, StoreError> {
        let missing = draft.missing_fields();
        if !missing.is_empty() {
            return Err(StoreError::missing(missing));
        }

        let task = Task {
            id: self.take_next_id(),
            title: draft.title,
            subject: draft.subject,
            // missing_fields() was empty, so both are present
            priority: draft.priority.expect("validated priority"),
            due_date: draft.due_date.expect("validated due date"),
            description: draft.description,
            completed: false,
            created_at: today,
            reminder: draft.reminder,
        };

        debug!("created task id={} title={:?}", task.id, task.title);
        self.tasks.push(task.clone());
        Ok(task)
    }

    /// Replace a task's mutable fields. `id` and `created_at` never change.
    pub fn update(&mut self, id: u64, draft: TaskDraft) -> Result<Task, StoreError> {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            return Err(StoreError::NotFound(id));
        };

        let missing = draft.missing_fields();
        if !missing.is_empty() {
            return Err(StoreError::missing(missing));
        }

        task.title = draft.title;
        task.subject = draft.subject;
        task.priority = draft.priority.expect("validated priority");
        task.due_date = draft.due_date.expect("validated due date");
        task.description = draft.description;
        task.reminder = draft.reminder;

        debug!("updated task id={}", id);
        Ok(task.clone())
    }

    /// Remove a task permanently, returning it.
    pub fn delete(&mut self, id: u64) -> Result<Task, StoreError> {
        let Some(pos) = self.tasks.iter().position(|t| t.id == id) else {
            return Err(StoreError::NotFound(id));
        };
        let removed = self.tasks.remove(pos);
        debug!("deleted task id={}", id);
        Ok(removed)
    }

    /// Flip completion, returning the new state.
    pub fn toggle_completion(&mut self, id: u64) -> Result<bool, StoreError> {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            return Err(StoreError::NotFound(id));
        };
        task.completed = !task.completed;
        debug!("toggled task id={} completed={}", id, task.completed);
        Ok(task.completed)
    }

    pub fn stats(&self) -> Stats {
        let total = self.tasks.len();
        let completed = self.tasks.iter().filter(|t| t.completed).count();
        let progress_percent = if total > 0 {
            ((completed as f64 / total as f64) * 100.0).round() as u8
        } else {
            0
        };
        Stats {
            total,
            completed,
            pending: total - completed,
            progress_percent,
        }
    }

    /// Snapshot of the tasks matching `query`, in insertion order.
    pub fn filter(&self, query: &TaskQuery) -> Vec<Task> {
        self.tasks
            .iter()
            .filter(|t| query.matches(t))
            .cloned()
            .collect()
    }

    /// Tasks due exactly on today's local date.
    pub fn today_tasks(&self) -> Vec<Task> {
        self.today_tasks_on(today_local())
    }

    pub fn today_tasks_on(&self, today: NaiveDate) -> Vec<Task> {
        self.tasks
            .iter()
            .filter(|t| t.due_date == today)
            .cloned()
            .collect()
    }

    /// Tasks due strictly after today and within the horizon, soonest first.
    pub fn upcoming_tasks(&self, horizon_days: i64) -> Vec<Task> {
        self.upcoming_tasks_on(today_local(), horizon_days)
    }

    pub fn upcoming_tasks_on(&self, today: NaiveDate, horizon_days: i64) -> Vec<Task> {
        let end = today + Duration::days(horizon_days);
        let mut out: Vec<Task> = self
            .tasks
            .iter()
            .filter(|t| t.due_date > today && t.due_date <= end)
            .cloned()
            .collect();
        out.sort_by_key(|t| t.due_date);
        out
    }
}

/// Listing order: pending before completed, then ascending due date.
/// The sort is stable, so equal keys keep their insertion order.
pub fn sort_for_listing(tasks: &mut [Task]) {
    tasks.sort_by_key(|t| (t.completed, t.due_date));
}
