use anyhow::{Context, Result};
use log::debug;
use planner_core::{Task, TaskStore};
use std::fs;
use std::path::PathBuf;

pub fn planner_home() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".study-planner"))
}

pub fn ensure_planner_home() -> Result<PathBuf> {
    let dir = planner_home()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}

pub fn tasks_path() -> Result<PathBuf> {
    Ok(planner_home()?.join("tasks.json"))
}

/// Load the store from the state file, or start empty when there is none.
/// The state file is the same blob `planner export` produces, with ids
/// kept as-is and the id counter reseeded above them.
pub fn load_store() -> Result<TaskStore> {
    let p = tasks_path()?;
    if !p.exists() {
        return Ok(TaskStore::new());
    }
    let s = fs::read_to_string(&p).with_context(|| format!("read {}", p.display()))?;
    let tasks: Vec<Task> =
        serde_json::from_str(&s).with_context(|| format!("parse {}", p.display()))?;
    debug!("loaded {} tasks from {}", tasks.len(), p.display());
    Ok(TaskStore::from_tasks(tasks))
}

pub fn save_store(store: &TaskStore) -> Result<()> {
    ensure_planner_home()?;
    let p = tasks_path()?;
    fs::write(&p, store.export_json()).with_context(|| format!("write {}", p.display()))?;
    Ok(())
}
