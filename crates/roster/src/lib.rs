//! Facade crate for the flight roster.
//! Re-exports the domain, kernel, logger and flights crates and wires them together.
//! Keep this crate thin: it composes other crates, it does not implement booking rules.
//!
//! ## Usage
//! ```rust,no_run
//! let config = roster::load(Some("roster.toml"))?;
//! let _logger = roster::init_logger(&config)?;
//! let mut manifest = roster::manifest(&config);
//!
//! let flight = manifest.register_flight(roster::flights::Flight::new("AB123", 180)?);
//! # let _ = flight;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use roster_domain as domain;
use roster_domain::config::RosterConfig;
pub use roster_flights as flights;
use roster_flights::Manifest;
pub use roster_kernel as kernel;
use roster_kernel::config::{ConfigError, load_config};
pub use roster_logger as logger;
use roster_logger::{Logger, LoggerError};
use std::path::Path;

/// Reads [`RosterConfig`] from `path` (default `roster.*` in the working directory) with
/// `ROSTER__` environment overrides.
///
/// # Errors
/// Returns [`ConfigError`] if the file is missing or malformed.
pub fn load(path: Option<impl AsRef<Path>>) -> Result<RosterConfig, ConfigError> {
    load_config(path)
}

/// Installs the global subscriber described by the `logger` section.
///
/// # Errors
/// Returns [`LoggerError`] for invalid settings or when a subscriber is already installed.
pub fn init_logger(config: &RosterConfig) -> Result<Logger, LoggerError> {
    Logger::from_settings(&config.logger)
}

/// Creates an empty manifest using the configured transfer mode.
#[must_use]
pub fn manifest(config: &RosterConfig) -> Manifest {
    tracing::info!(transfer = ?config.transfer, "Roster manifest initialized");
    Manifest::from_config(config)
}
