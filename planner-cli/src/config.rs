use anyhow::{Context, Result};
use planner_core::DEFAULT_HORIZON_DAYS;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::state::ensure_planner_home;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Subject catalogue offered by the add/edit prompts. The store
    /// itself accepts free text; this only constrains the UI.
    pub subjects: Vec<String>,
    /// Days ahead shown in the dashboard's upcoming section.
    pub horizon_days: i64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            subjects: [
                "Mathematics",
                "Science",
                "History",
                "English",
                "Geography",
                "Computer Science",
                "Languages",
            ]
            .map(String::from)
            .to_vec(),
            horizon_days: DEFAULT_HORIZON_DAYS,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    Ok(ensure_planner_home()?.join("config.toml"))
}

pub fn load_config() -> Result<Config> {
    let p = config_path()?;
    if !p.exists() {
        return Ok(Config::default());
    }
    let s = fs::read_to_string(&p).with_context(|| format!("read {}", p.display()))?;
    Ok(toml::from_str(&s).context("parse config.toml")?)
}

pub fn save_config(cfg: &Config) -> Result<()> {
    let p = config_path()?;
    let s = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(&p, s).with_context(|| format!("write {}", p.display()))?;
    Ok(())
}
