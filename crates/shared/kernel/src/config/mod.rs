use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

/// Prefix of environment overrides, e.g. `ROSTER__TRANSFER=sequential`.
pub const ENV_PREFIX: &str = "ROSTER";

/// Custom error type for config loading.
#[roster_derive::roster_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads a configuration file and overlays environment overrides.
///
/// 1. **Base File**: `path`, or `roster` in the working directory when `None`. The
///    extension may be omitted; `config` probes the supported formats (TOML, YAML, JSON, ...).
/// 2. **Environment Overrides**: variables prefixed with `ROSTER__`. Nested keys are joined
///    with double underscores, so `ROSTER__LOGGER__LEVEL=debug` maps to `logger.level`.
///
/// # Errors
/// Returns [`ConfigError::Config`] if the file cannot be found or parsed, or if the merged
/// values do not deserialize into `T`.
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let effective_path = path.map_or_else(|| PathBuf::from("roster"), |p| p.as_ref().to_path_buf());

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(true))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .convert_case(config::Case::Snake),
        );

    info!(path = %effective_path.display(), "Loading roster config");

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
