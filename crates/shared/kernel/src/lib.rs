//! Kernel utilities shared by the tooling front-ends.
//! Keep this crate lightweight; it turns raw boundary input into domain types and applies
//! the policies the domain crate deliberately leaves open.
//!
//! ## Parsing boundary input
//! ```rust
//! use mdev_kernel::domain::vocabulary::Platform;
//! use mdev_kernel::vocabulary::parse_tag;
//!
//! assert_eq!(parse_tag::<Platform>("ios").unwrap(), Platform::Ios);
//! assert!(parse_tag::<Platform>("web").is_err());
//! ```
//!
//! ## Classifying native elements
//! ```rust
//! use mdev_kernel::classify::classify_or;
//! use mdev_kernel::domain::vocabulary::{ElementType, Platform};
//!
//! let element = classify_or(Platform::Android, "com.example.CustomView", ElementType::Other);
//! assert_eq!(element, ElementType::Other);
//! ```
//!
//! ## Config loading
//! ```rust,no_run
//! use mdev_kernel::config::load_tool_config;
//!
//! let cfg = load_tool_config(Some("mdev.toml".as_ref())).unwrap();
//! println!("{}", cfg.shell_timeout_ms);
//! ```

pub mod classify;
pub mod config;
mod error;
pub mod vocabulary;

pub use crate::error::{KernelError, KernelErrorExt};
pub use mdev_domain as domain;
