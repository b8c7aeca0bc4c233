//! Text rendering for the dashboard, list, and calendar views.

use chrono::{Datelike, NaiveDate};
use planner_core::{CalendarCell, Stats, Task};

pub fn task_line(task: &Task, today: NaiveDate) -> String {
    let check = if task.completed { "x" } else { " " };
    let mut line = format!(
        "[{check}] #{} {} ({}, {}) due {}",
        task.id, task.title, task.subject, task.priority, task.due_date
    );
    if task.is_overdue(today) {
        line.push_str(" (overdue)");
    }
    if task.reminder {
        line.push_str(" [reminder]");
    }
    line
}

pub fn print_task_list(tasks: &[Task], today: NaiveDate) {
    if tasks.is_empty() {
        println!("No tasks found.");
        return;
    }
    for task in tasks {
        println!("{}", task_line(task, today));
        if !task.description.is_empty() {
            println!("       {}", task.description);
        }
    }
}

pub fn progress_bar(percent: u8, width: usize) -> String {
    let filled = (percent as usize * width) / 100;
    format!("[{}{}] {percent}%", "#".repeat(filled), ".".repeat(width - filled))
}

pub fn print_dashboard(stats: Stats, due_today: &[Task], upcoming: &[Task], today: NaiveDate, horizon_days: i64) {
    println!("# Study dashboard\n");
    println!(
        "Tasks: {} total, {} completed, {} pending",
        stats.total, stats.completed, stats.pending
    );
    println!("Progress: {}\n", progress_bar(stats.progress_percent, 20));

    println!("## Due today ({today})\n");
    if due_today.is_empty() {
        println!("(nothing due today)");
    } else {
        print_task_list(due_today, today);
    }

    println!("\n## Upcoming (next {horizon_days} days)\n");
    if upcoming.is_empty() {
        println!("(nothing coming up)");
    } else {
        print_task_list(upcoming, today);
    }
}

/// Render the 42-cell grid as six week rows. Today is bracketed, days
/// with due tasks get a `*`, and days outside the month show as dots.
pub fn print_calendar(cells: &[CalendarCell], month: NaiveDate, today: NaiveDate) {
    println!("# {}\n", month.format("%B %Y"));
    println!(" Sun  Mon  Tue  Wed  Thu  Fri  Sat");

    for week in cells.chunks(7) {
        let row: String = week.iter().map(render_cell).collect();
        println!("{row}");
    }

    let mut due_in_month: Vec<&CalendarCell> = cells
        .iter()
        .filter(|c| c.in_month && !c.tasks.is_empty())
        .collect();
    due_in_month.sort_by_key(|c| c.date);

    if !due_in_month.is_empty() {
        println!();
        for cell in due_in_month {
            for task in &cell.tasks {
                println!("{}", task_line(task, today));
            }
        }
    }
}

fn render_cell(cell: &CalendarCell) -> String {
    if !cell.in_month {
        return "   . ".to_string();
    }
    let day = cell.date.day();
    let mark = if cell.tasks.is_empty() { ' ' } else { '*' };
    if cell.is_today {
        format!("[{day:>2}]{mark}")
    } else {
        format!(" {day:>2}{mark} ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use planner_core::{Priority, TaskDraft, TaskStore};

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn task(due: &str, completed: bool) -> Task {
        let mut store = TaskStore::new();
        let t = store
            .create_on(
                TaskDraft::new("Essay", "English")
                    .with_priority(Priority::Medium)
                    .with_due_date(date(due))
                    .with_reminder(true),
                date("2025-10-01"),
            )
            .unwrap();
        if completed {
            store.toggle_completion(t.id).unwrap();
            return store.get(t.id).unwrap().clone();
        }
        t
    }

    #[test]
    fn task_line_marks_overdue_and_reminder() {
        let line = task_line(&task("2025-10-03", false), date("2025-10-04"));
        assert_eq!(
            line,
            "[ ] #1 Essay (English, medium) due 2025-10-03 (overdue) [reminder]"
        );
    }

    #[test]
    fn completed_task_is_checked_not_overdue() {
        let line = task_line(&task("2025-10-03", true), date("2025-10-04"));
        assert!(line.starts_with("[x]"));
        assert!(!line.contains("overdue"));
    }

    #[test]
    fn progress_bar_scales_to_width() {
        assert_eq!(progress_bar(0, 4), "[....] 0%");
        assert_eq!(progress_bar(50, 4), "[##..] 50%");
        assert_eq!(progress_bar(100, 4), "[####] 100%");
    }
}
