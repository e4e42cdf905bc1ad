//! Default numeric settings for the tooling.
//!
//! These are fallbacks only; callers merge their own overrides on top
//! (see [`crate::config::ToolConfig`]).

/// Upper bound for a full project build, in milliseconds (30 minutes).
pub const BUILD_TIMEOUT_MS: u64 = 1_800_000;

/// Upper bound for a single device shell command, in milliseconds.
pub const SHELL_TIMEOUT_MS: u64 = 30_000;

/// Number of log entries retained per query.
pub const LOG_LIMIT: u32 = 100;

/// JPEG quality for captured screenshots, in percent.
pub const SCREENSHOT_QUALITY: u8 = 50;

/// Upper bound for an emulator or simulator to finish booting, in milliseconds.
pub const DEVICE_BOOT_TIMEOUT_MS: u64 = 120_000;
