use crate::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_NOTIFICATION_MS, LOG_FILE_NAME, SESSION_FILE_NAME,
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// What survives a restart: the list, the selected row and the input text
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub contacts: Vec<String>,
    pub selected: Option<usize>,
    pub input: String,
}

/// Session persistence settings
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub enabled: bool,
    pub path: PathBuf,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            enabled: false,
            path: config_dir().join(SESSION_FILE_NAME),
        }
    }
}

/// User configuration, read from `~/.contacts-tui/config.yaml`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub notification_ms: u64,
    pub log_level: String,
    pub log_file: PathBuf,
    pub session: SessionConfig,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            notification_ms: DEFAULT_NOTIFICATION_MS,
            log_level: String::from("info"),
            log_file: config_dir().join(LOG_FILE_NAME),
            session: SessionConfig::default(),
        }
    }
}

impl Config {
    pub fn notification_duration(&self) -> Duration {
        Duration::from_millis(self.notification_ms)
    }

    /// Parsed log level, falling back to INFO on anything unrecognized
    pub fn tracing_level(&self) -> tracing::Level {
        self.log_level.parse().unwrap_or(tracing::Level::INFO)
    }

    /// Load the config from the default location
    pub fn load() -> Result<Self> {
        Self::load_from(&config_dir().join(CONFIG_FILE_NAME))
    }

    /// Load the config from `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        if content.trim().is_empty() {
            return Ok(Config::default());
        }
        serde_yaml::from_str(&content).with_context(|| format!("parsing config {}", path.display()))
    }
}

/// Directory holding config, session and log files
pub fn config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CONFIG_DIR_NAME)
}

/// Ensure the parent directory of `path` exists
fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating directory {}", parent.display()))?;
        }
    }
    Ok(())
}

/// Read a saved session. A missing file means there is nothing to restore.
pub fn load_session(path: &Path) -> Result<Option<Snapshot>> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("reading session {}", path.display()))?;
    let snapshot = serde_json::from_str(&content)
        .with_context(|| format!("parsing session {}", path.display()))?;
    Ok(Some(snapshot))
}

/// Write a session snapshot, creating the directory when needed
pub fn save_session(path: &Path, snapshot: &Snapshot) -> Result<()> {
    ensure_parent(path)?;
    let content = serde_json::to_string_pretty(snapshot)?;
    fs::write(path, content).with_context(|| format!("writing session {}", path.display()))?;
    Ok(())
}
