//! # Domain Vocabulary
//!
//! Pure domain types for the mobile tooling workspace: the closed enumerations shared
//! by every component, their string type guards, the native widget classification
//! tables, and the default tool configuration.
//! Keep it lean: no I/O, networking, or heavy logic—just data and simple helpers.
//!
//! ```rust
//! use mdev_domain::classification::ANDROID_ELEMENT_TYPES;
//! use mdev_domain::vocabulary::{ElementType, Platform, is_platform};
//!
//! assert!(is_platform("android"));
//! assert!(!is_platform("Android"));
//! assert_eq!("ios".parse::<Platform>(), Ok(Platform::Ios));
//! assert_eq!(ANDROID_ELEMENT_TYPES.get("android.widget.Button"), Some(ElementType::Button));
//! ```

pub mod classification;
pub mod config;
pub mod constants;
pub mod vocabulary;
