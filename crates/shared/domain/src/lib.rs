//! # Domain Models
//!
//! Pure domain data with a single dependency (`serde`).
//! Keep it lean: no I/O and no behaviour beyond lookups, just data and simple helpers.

pub mod config;
pub mod countries;
