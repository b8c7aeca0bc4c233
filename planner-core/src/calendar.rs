//! Month-grid projection for the calendar view.

use chrono::{Datelike, Duration, NaiveDate};

use crate::store::TaskStore;
use crate::task::Task;

/// A 6-week grid covers every month layout.
pub const GRID_CELLS: usize = 42;

/// One day-cell of the 42-cell month grid.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarCell {
    pub date: NaiveDate,
    /// Whether the cell falls inside the target month (leading and
    /// trailing cells belong to the neighbouring months).
    pub in_month: bool,
    pub is_today: bool,
    /// Tasks due on this date.
    pub tasks: Vec<Task>,
}

/// Build the 42-cell grid for the month containing `month`, starting on
/// the Sunday on or before the 1st. Read-only: tasks are bucketed by due
/// date, nothing is mutated.
pub fn month_grid(month: NaiveDate, today: NaiveDate, tasks: &[Task]) -> Vec<CalendarCell> {
    let first = month.with_day(1).expect("day 1 exists in every month");
    let offset = first.weekday().num_days_from_sunday() as i64;
    let start = first - Duration::days(offset);

    (0..GRID_CELLS as i64)
        .map(|i| {
            let date = start + Duration::days(i);
            CalendarCell {
                date,
                in_month: date.year() == first.year() && date.month() == first.month(),
                is_today: date == today,
                tasks: tasks.iter().filter(|t| t.due_date == date).cloned().collect(),
            }
        })
        .collect()
}

impl TaskStore {
    /// See [`month_grid`].
    pub fn calendar_bucket(&self, month: NaiveDate, today: NaiveDate) -> Vec<CalendarCell> {
        month_grid(month, today, self.tasks())
    }
}
