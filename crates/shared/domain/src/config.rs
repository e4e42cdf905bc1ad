use crate::constants::{
    BUILD_TIMEOUT_MS, DEVICE_BOOT_TIMEOUT_MS, LOG_LIMIT, SCREENSHOT_QUALITY, SHELL_TIMEOUT_MS,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default tool settings.
///
/// Every field falls back to its constant in [`crate::constants`] when absent, so a
/// partial document only overrides what it names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolConfig {
    pub build_timeout_ms: u64,
    pub shell_timeout_ms: u64,
    pub log_limit: u32,
    pub screenshot_quality: u8,
    pub device_boot_timeout_ms: u64,
}

impl ToolConfig {
    /// The built-in defaults.
    pub const DEFAULT: Self = Self {
        build_timeout_ms: BUILD_TIMEOUT_MS,
        shell_timeout_ms: SHELL_TIMEOUT_MS,
        log_limit: LOG_LIMIT,
        screenshot_quality: SCREENSHOT_QUALITY,
        device_boot_timeout_ms: DEVICE_BOOT_TIMEOUT_MS,
    };

    #[must_use]
    pub const fn build_timeout(&self) -> Duration {
        Duration::from_millis(self.build_timeout_ms)
    }

    #[must_use]
    pub const fn shell_timeout(&self) -> Duration {
        Duration::from_millis(self.shell_timeout_ms)
    }

    #[must_use]
    pub const fn device_boot_timeout(&self) -> Duration {
        Duration::from_millis(self.device_boot_timeout_ms)
    }
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
