//! Facade crate for the mobile tooling vocabulary.
//! Re-exports domain types and kernel helpers under one name.
//! Keep this crate thin: it should compose other crates, not implement logic.

pub use mdev_domain as domain;
pub use mdev_kernel as kernel;

/// The names most callers need.
pub mod prelude {
    pub use mdev_domain::classification::{ANDROID_ELEMENT_TYPES, IOS_ELEMENT_TYPES, table_for};
    pub use mdev_domain::config::ToolConfig;
    pub use mdev_domain::vocabulary::*;
    pub use mdev_kernel::classify::{classify, classify_or};
    pub use mdev_kernel::config::load_tool_config;
    pub use mdev_kernel::vocabulary::{check_tag, parse_tag};
    pub use mdev_kernel::{KernelError, KernelErrorExt};
}
