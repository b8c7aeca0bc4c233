//! Demo data for `planner setup --sample`.

use chrono::NaiveDate;
use planner_core::{Priority, RawTaskRecord};

fn d(s: &str) -> NaiveDate {
    s.parse().expect("valid sample date")
}

/// Five representative tasks covering every view: one due "today"
/// (2025-10-02), one already completed, a mix of subjects and priorities.
pub fn sample_records() -> Vec<RawTaskRecord> {
    vec![
        RawTaskRecord {
            title: "Complete Math Assignment".into(),
            subject: "Mathematics".into(),
            priority: Some(Priority::High),
            due_date: Some(d("2025-10-05")),
            description: "Solve problems 1-20 from Chapter 5".into(),
            completed: false,
            created_at: Some(d("2025-10-02")),
            reminder: true,
        },
        RawTaskRecord {
            title: "Read History Chapter".into(),
            subject: "History".into(),
            priority: Some(Priority::Medium),
            due_date: Some(d("2025-10-04")),
            description: "Read Chapter 12: World War II".into(),
            completed: true,
            created_at: Some(d("2025-10-01")),
            reminder: false,
        },
        RawTaskRecord {
            title: "Science Lab Report".into(),
            subject: "Science".into(),
            priority: Some(Priority::High),
            due_date: Some(d("2025-10-06")),
            description: "Write lab report on chemical reactions experiment".into(),
            completed: false,
            created_at: Some(d("2025-10-02")),
            reminder: true,
        },
        RawTaskRecord {
            title: "English Essay".into(),
            subject: "English".into(),
            priority: Some(Priority::Medium),
            due_date: Some(d("2025-10-03")),
            description: "Write 500-word essay on climate change".into(),
            completed: false,
            created_at: Some(d("2025-10-01")),
            reminder: true,
        },
        RawTaskRecord {
            title: "Study for Geography Quiz".into(),
            subject: "Geography".into(),
            priority: Some(Priority::High),
            due_date: Some(d("2025-10-02")),
            description: "Review chapters 8-10 on continental geography".into(),
            completed: false,
            created_at: Some(d("2025-10-01")),
            reminder: true,
        },
    ]
}
