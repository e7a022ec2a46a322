#![allow(unreachable_pub)]

//! # Macros
//!
//! Procedural macros shared by the roster crates.
//! For now this is a single attribute, [`macro@roster_error`], which turns a plain enum
//! into the error type every crate in the workspace exposes.
//!
//! ## Usage
//! ```toml
//! [dependencies]
//! roster-derive.workspace = true
//! thiserror.workspace = true
//! ```
//!
//! The expansion refers to `::thiserror`, so consumers must depend on it directly.

mod error;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Attribute macro for declaring a crate-level error enum.
///
/// # Features
///
/// * **Automatic Derives**: Injects `#[derive(Debug, thiserror::Error)]` unless already present.
/// * **Context Support**: Generates a companion `...Ext` trait that adds `.context(...)`
///   to any `Result` that can be converted into this error type.
/// * **Standard Conversions**: Implements `From<T>` for variants holding a `source` field
///   (or a field marked `#[source]`/`#[from]`), so `?` works on upstream errors.
/// * **Internal Fallback**: `From<&'static str>` and `From<String>` when an `Internal`
///   variant exists.
/// * **`format_context`**: a module-level helper for `#[error(...)]` strings that renders
///   ` (context)` when a context is attached and nothing otherwise.
///
/// # Requirements
///
/// 1. The macro must be applied to an **enum**.
/// 2. Variants must use named fields. Tuple and unit variants are rejected.
/// 3. A `context` field, when present, must be `Option<Cow<'static, str>>`.
/// 4. Variants with a source must also carry a `context` field.
///
/// # Example
///
/// ```rust,ignore
/// use roster_derive::roster_error;
/// use std::borrow::Cow;
///
/// #[roster_error]
/// pub enum BookingError {
///     #[error("Not enough seats for flight {flight}{}", format_context(.context))]
///     Full { flight: String, context: Option<Cow<'static, str>> },
///
///     #[error("IO error{}: {source}", format_context(.context))]
///     Io { source: std::io::Error, context: Option<Cow<'static, str>> },
/// }
///
/// fn load() -> Result<String, BookingError> {
///     std::fs::read_to_string("manifest.txt").context("Reading manifest")
/// }
/// ```
#[proc_macro_attribute]
pub fn roster_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    error::expand(input).into()
}
