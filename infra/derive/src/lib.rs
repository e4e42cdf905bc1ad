#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros for the workspace. Currently a single attribute macro,
//! [`macro@mdev_error`], which turns a plain enum into a `thiserror`-backed error type
//! with context support.
//!
//! ## Usage
//! ```toml
//! [dependencies]
//! mdev-derive.workspace = true
//! thiserror.workspace = true
//! ```

mod error;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Attribute macro for defining error enums.
///
/// # Features
///
/// * **Automatic Derives**: Injects `#[derive(Debug, thiserror::Error)]` unless already present.
/// * **Context Support**: Generates a companion `...Ext` trait that adds `.context()`
///   to `Result<T, ThisError>` and to `Result<T, SourceError>` for every wrapped source.
/// * **Standard Conversions**: Implements `From<SourceError>` for variants with a source
///   field, so `?` works on upstream errors.
/// * **Internal Fallback**: `From<&'static str>` and `From<String>` when an `Internal`
///   variant (with a `message` field) exists.
///
/// # Requirements
///
/// 1. Applied to an **enum** with **named-field** variants only.
/// 2. Context-aware variants carry `context: Option<Cow<'static, str>>`.
/// 3. A variant with a source (`source` field, or a field marked `#[source]`/`#[from]`)
///    must also carry a context field.
///
/// A `format_context` helper is emitted next to the enum for use in `#[error(...)]` strings.
///
/// # Example
///
/// ```rust,ignore
/// use mdev_derive::mdev_error;
/// use std::borrow::Cow;
///
/// #[mdev_error]
/// pub enum KernelError {
///     #[error("Config error{}: {source}", format_context(.context))]
///     Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
///
///     #[error("Internal fault{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn load() -> Result<Settings, KernelError> {
///     builder.build().context("Building configuration")?; // wraps config::ConfigError
///     Err("unreachable state".into()) // uses From<&str> for Internal
/// }
/// ```
#[proc_macro_attribute]
pub fn mdev_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    error::expand(input).into()
}
