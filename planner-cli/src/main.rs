use anyhow::{bail, Context, Result};
use chrono::{Datelike, Local, NaiveDate};
use clap::{Parser, Subcommand};
use planner_core::{sort_for_listing, Priority, StatusFilter, TaskDraft, TaskQuery};
use std::path::PathBuf;

mod config;
mod sample;
mod state;
mod views;

#[derive(Parser, Debug)]
#[command(name = "planner", version, about = "Study planner CLI")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create ~/.study-planner/ with a default config
    Setup {
        /// Also seed a handful of demo tasks
        #[arg(long)]
        sample: bool,
    },

    /// Add a task
    Add {
        #[arg(long)]
        title: String,

        /// One of the configured subjects
        #[arg(long)]
        subject: String,

        /// low | medium | high
        #[arg(long)]
        priority: String,

        /// Due date, YYYY-MM-DD
        #[arg(long)]
        due: String,

        #[arg(long, default_value = "")]
        description: String,

        #[arg(long)]
        reminder: bool,
    },

    /// Change fields of an existing task (unset flags keep current values)
    Edit {
        id: u64,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        subject: Option<String>,

        #[arg(long)]
        priority: Option<String>,

        #[arg(long)]
        due: Option<String>,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        reminder: Option<bool>,
    },

    /// Toggle a task between pending and completed
    Done { id: u64 },

    /// Delete a task
    Rm { id: u64 },

    /// List tasks, optionally filtered
    List {
        /// Substring match against title or description
        #[arg(long)]
        search: Option<String>,

        #[arg(long)]
        subject: Option<String>,

        /// low | medium | high
        #[arg(long)]
        priority: Option<String>,

        /// pending | completed
        #[arg(long)]
        status: Option<String>,
    },

    /// Stats, today's tasks, and the upcoming week
    Dashboard,

    /// Month grid with due tasks (defaults to the current month)
    Calendar {
        /// Target month, YYYY-MM
        month: Option<String>,
    },

    /// Write the task snapshot as JSON
    Export {
        /// Output file (stdout when omitted)
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Import tasks from a JSON snapshot file
    Import { file: PathBuf },
}

fn main() -> Result<()> {
    let _logger = flexi_logger::Logger::try_with_env_or_str("warn")
        .context("configure logging")?
        .start()
        .context("start logging")?;

    let cli = Cli::parse();

    match cli.command {
        Command::Setup { sample } => run_setup(sample)?,

        Command::Add {
            title,
            subject,
            priority,
            due,
            description,
            reminder,
        } => {
            let cfg = config::load_config()?;
            check_subject(&cfg, &subject)?;

            let draft = TaskDraft::new(title, subject)
                .with_priority(parse_priority(&priority)?)
                .with_due_date(parse_date(&due)?)
                .with_description(description)
                .with_reminder(reminder);

            let mut store = state::load_store()?;
            let task = store.create(draft)?;
            state::save_store(&store)?;
            println!("Added task #{}: {}", task.id, task.title);
        }

        Command::Edit {
            id,
            title,
            subject,
            priority,
            due,
            description,
            reminder,
        } => {
            let mut store = state::load_store()?;
            let current = store
                .get(id)
                .with_context(|| format!("no task with id {id}"))?;

            let mut draft = TaskDraft::from(current);
            if let Some(title) = title {
                draft.title = title;
            }
            if let Some(subject) = subject {
                check_subject(&config::load_config()?, &subject)?;
                draft.subject = subject;
            }
            if let Some(priority) = priority {
                draft.priority = Some(parse_priority(&priority)?);
            }
            if let Some(due) = due {
                draft.due_date = Some(parse_date(&due)?);
            }
            if let Some(description) = description {
                draft.description = description;
            }
            if let Some(reminder) = reminder {
                draft.reminder = reminder;
            }

            let task = store.update(id, draft)?;
            state::save_store(&store)?;
            println!("Updated task #{}: {}", task.id, task.title);
        }

        Command::Done { id } => {
            let mut store = state::load_store()?;
            let completed = store.toggle_completion(id)?;
            state::save_store(&store)?;
            if completed {
                println!("Task #{id} completed");
            } else {
                println!("Task #{id} marked as pending");
            }
        }

        Command::Rm { id } => {
            let mut store = state::load_store()?;
            let removed = store.delete(id)?;
            state::save_store(&store)?;
            println!("Deleted task #{}: {}", removed.id, removed.title);
        }

        Command::List {
            search,
            subject,
            priority,
            status,
        } => {
            let mut query = TaskQuery::new();
            query.search = search;
            query.subject = subject;
            query.priority = priority.as_deref().map(parse_priority).transpose()?;
            query.status = status.as_deref().map(parse_status).transpose()?;

            let store = state::load_store()?;
            let mut tasks = store.filter(&query);
            sort_for_listing(&mut tasks);
            views::print_task_list(&tasks, today());
        }

        Command::Dashboard => {
            let cfg = config::load_config()?;
            let store = state::load_store()?;
            views::print_dashboard(
                store.stats(),
                &store.today_tasks(),
                &store.upcoming_tasks(cfg.horizon_days),
                today(),
                cfg.horizon_days,
            );
        }

        Command::Calendar { month } => {
            let month = match month {
                Some(s) => parse_month(&s)?,
                None => today().with_day(1).expect("day 1 exists in every month"),
            };
            let store = state::load_store()?;
            let cells = store.calendar_bucket(month, today());
            views::print_calendar(&cells, month, today());
        }

        Command::Export { out } => {
            let store = state::load_store()?;
            let json = store.export_json();
            match out {
                Some(path) => {
                    std::fs::write(&path, json)
                        .with_context(|| format!("write {}", path.display()))?;
                    println!("Exported {} tasks to {}", store.len(), path.display());
                }
                None => println!("{json}"),
            }
        }

        Command::Import { file } => {
            let payload = std::fs::read_to_string(&file)
                .with_context(|| format!("read {}", file.display()))?;
            let mut store = state::load_store()?;
            let imported = store.import_json(&payload)?;
            state::save_store(&store)?;
            println!("Imported {imported} tasks from {}", file.display());
        }
    }

    Ok(())
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn parse_priority(s: &str) -> Result<Priority> {
    s.parse::<Priority>().map_err(anyhow::Error::msg)
}

fn parse_status(s: &str) -> Result<StatusFilter> {
    s.parse::<StatusFilter>().map_err(anyhow::Error::msg)
}

fn parse_date(s: &str) -> Result<NaiveDate> {
    s.parse::<NaiveDate>()
        .with_context(|| format!("invalid date '{s}' (expected YYYY-MM-DD)"))
}

fn parse_month(s: &str) -> Result<NaiveDate> {
    format!("{s}-01")
        .parse::<NaiveDate>()
        .with_context(|| format!("invalid month '{s}' (expected YYYY-MM)"))
}

fn check_subject(cfg: &config::Config, subject: &str) -> Result<()> {
    if !cfg.subjects.iter().any(|s| s == subject) {
        bail!(
            "unknown subject '{}'. Configured subjects: {}",
            subject,
            cfg.subjects.join(", ")
        );
    }
    Ok(())
}

fn run_setup(sample: bool) -> Result<()> {
    let dir = state::ensure_planner_home()?;
    if !config::config_path()?.exists() {
        config::save_config(&config::Config::default())?;
    }
    println!("Planner home ready: {}", dir.display());

    if sample {
        let mut store = state::load_store()?;
        let seeded = store.import_records(sample::sample_records(), today());
        state::save_store(&store)?;
        println!("Seeded {seeded} sample tasks");
    }

    Ok(())
}
