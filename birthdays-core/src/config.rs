//! Configuration at ~/.config/birthdays/config.toml

use std::collections::HashMap;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::engine::{DateEngine, LeapDayPolicy};
use crate::error::{BirthdayError, BirthdayResult};
use crate::store::LocalStore;

static DEFAULT_DATA_DIR: &str = "~/birthdays";

/// Number of upcoming birthdays shown when nothing else is configured.
pub const DEFAULT_UPCOMING_LIMIT: usize = 5;

fn default_data_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_DIR)
}

fn default_upcoming_limit() -> NonZeroUsize {
    NonZeroUsize::new(DEFAULT_UPCOMING_LIMIT).unwrap_or(NonZeroUsize::MIN)
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct BirthdaysConfig {
    /// Where record files live
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    #[serde(default = "default_upcoming_limit")]
    pub upcoming_limit: NonZeroUsize,

    #[serde(default)]
    pub leap_day: LeapDayPolicy,

    /// Greeting template with `{name}`, `{age}` and `{age_ordinal}` placeholders
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub greeting: Option<String>,
}

impl BirthdaysConfig {
    pub fn config_path() -> BirthdayResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| BirthdayError::Config("Could not determine config directory".into()))?
            .join("birthdays");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from `path`, writing a commented default file there on first run.
    pub fn load_or_init(path: &Path) -> BirthdayResult<Self> {
        if !path.exists() {
            Self::create_default_config(path)?;
        }

        Self::load_from(path)
    }

    /// Load from `path`, with `BIRTHDAYS_*` environment variables taking
    /// precedence over the file.
    pub fn load_from(path: &Path) -> BirthdayResult<Self> {
        Self::load_with_env(path, None)
    }

    /// `env` stands in for the process environment when given.
    fn load_with_env(path: &Path, env: Option<HashMap<String, String>>) -> BirthdayResult<Self> {
        Config::builder()
            .add_source(File::from(path).required(false))
            .add_source(Environment::with_prefix("BIRTHDAYS").source(env))
            .build()
            .map_err(|e| BirthdayError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| BirthdayError::Config(e.to_string()))
    }

    /// `data_dir` with `~` expanded.
    pub fn data_path(&self) -> PathBuf {
        let full_path_str = shellexpand::tilde(&self.data_dir.to_string_lossy()).into_owned();
        PathBuf::from(full_path_str)
    }

    pub fn engine(&self) -> DateEngine {
        let engine = DateEngine::new(self.leap_day);
        match &self.greeting {
            Some(template) => engine.with_greeting(template.clone()),
            None => engine,
        }
    }

    pub fn open_store(&self) -> BirthdayResult<LocalStore> {
        LocalStore::open(self.data_path())
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> BirthdayResult<()> {
        let contents = format!(
            "\
# birthdays configuration

# Where birthday records are stored:
# data_dir = \"{DEFAULT_DATA_DIR}\"

# How many birthdays `birthdays upcoming` shows:
# upcoming_limit = {DEFAULT_UPCOMING_LIMIT}

# When Feb 29 birthdays are celebrated in other years
# (\"strict\", \"february28\" or \"march1\"):
# leap_day = \"strict\"

# Greeting copied by `birthdays wish` ({{name}}, {{age}}, {{age_ordinal}}):
# greeting = \"Happy {{age_ordinal}} birthday, {{name}}!\"
"
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                BirthdayError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| BirthdayError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}
