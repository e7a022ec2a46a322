use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level roster configuration.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RosterConfigInner {
    pub transfer: TransferMode,
    pub logger: LoggerSettings,
}

/// Thin Arc-wrapped config for inexpensive cloning into subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct RosterConfig {
    #[serde(flatten, default)]
    inner: Arc<RosterConfigInner>,
}

impl Deref for RosterConfig {
    type Target = RosterConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for RosterConfig {
    fn deref_mut(&mut self) -> &mut RosterConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// How a passenger moves between flights.
///
/// `Atomic` checks the destination's capacity before the passenger leaves the current
/// flight, so a failed transfer changes nothing. `Sequential` detaches, rebinds the
/// back-reference and only then books; a full destination leaves the passenger pointing at
/// a flight whose roster does not list them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransferMode {
    #[default]
    Atomic,
    Sequential,
}

/// Logging output settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggerSettings {
    pub name: String,
    /// One of `trace`, `debug`, `info`, `warn`, `error`, `off`.
    pub level: String,
    pub console: bool,
    /// Directory for rolling log files. No file output when unset.
    pub path: Option<PathBuf>,
    pub json: bool,
    /// Rotated log files kept on disk; must be greater than zero.
    pub max_files: usize,
    pub env_filter: Option<String>,
}

// --- Default ---

impl Default for LoggerSettings {
    fn default() -> Self {
        Self {
            name: "roster".to_owned(),
            level: "info".to_owned(),
            console: true,
            path: None,
            json: false,
            max_files: 10,
            env_filter: None,
        }
    }
}
