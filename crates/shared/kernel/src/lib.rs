//! Kernel utilities shared across slices.
//! Keep this crate lightweight; it re-exports the domain crate and owns config loading.
//!
//! ## Config loading
//! ```rust,no_run
//! use roster_kernel::config::load_config;
//! use roster_kernel::domain::config::RosterConfig;
//!
//! let cfg: RosterConfig = load_config(Some("config/roster")).unwrap_or_default();
//! ```
pub mod config;

pub use roster_domain as domain;
