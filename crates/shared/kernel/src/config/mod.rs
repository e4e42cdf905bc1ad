use crate::{KernelError, KernelErrorExt};
use config::{Case, Config, Environment, File};
use mdev_domain::config::ToolConfig;
use serde::de::DeserializeOwned;
use std::path::Path;
use tracing::{debug, info};

/// Prefix of environment overrides (`MDEV__SHELL_TIMEOUT_MS=5000`).
pub const ENV_PREFIX: &str = "MDEV";

const ENV_SEPARATOR: &str = "__";

/// A reusable configuration loader that combines file-based settings with environment overrides.
///
/// Layers, lowest precedence first:
/// 1. **Serde defaults** of `T` (fields marked `#[serde(default)]`).
/// 2. **File**: the given path, format inferred from its extension. A path that is given but
///    missing is an error; `None` skips this layer.
/// 3. **Environment Overrides**: variables prefixed with `MDEV__`. Nested structures are
///    accessed using double underscores (e.g., `MDEV__LOGGING__LEVEL` maps to `logging.level`).
///
/// # Errors
/// Returns [`KernelError::Config`] if the file cannot be read or the merged sources do not
/// deserialize into `T`.
///
/// # Example
/// ```rust
/// use mdev_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct AppConfig {
///     port: u16,
/// }
///
/// let cfg: AppConfig = load_config(Some("config/local.toml".as_ref())).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<&Path>) -> Result<T, KernelError>
where
    T: DeserializeOwned,
{
    load_with_environment(path, environment())
}

/// Loads a [`ToolConfig`] through [`load_config`] and validates it.
///
/// # Errors
/// Everything [`load_config`] returns, plus [`KernelError::InvalidConfig`] from [`validate`].
pub fn load_tool_config(path: Option<&Path>) -> Result<ToolConfig, KernelError> {
    let config: ToolConfig = load_config(path)?;
    validate(&config)?;
    debug!(?config, "Tool configuration resolved");
    Ok(config)
}

/// Checks value constraints the type system does not express.
///
/// # Errors
/// Returns [`KernelError::InvalidConfig`] for a zero timeout or log limit, or a screenshot
/// quality outside `1..=100`.
pub fn validate(config: &ToolConfig) -> Result<(), KernelError> {
    let timeouts = [
        ("build_timeout_ms", config.build_timeout_ms),
        ("shell_timeout_ms", config.shell_timeout_ms),
        ("device_boot_timeout_ms", config.device_boot_timeout_ms),
    ];
    if let Some((name, _)) = timeouts.iter().find(|(_, value)| *value == 0) {
        return Err(invalid(format!("{name} must be greater than zero")));
    }

    if config.log_limit == 0 {
        return Err(invalid("log_limit must be greater than zero".to_owned()));
    }

    if !(1..=100).contains(&config.screenshot_quality) {
        return Err(invalid(format!(
            "screenshot_quality must be within 1..=100, got {}",
            config.screenshot_quality
        )));
    }

    Ok(())
}

fn invalid(message: String) -> KernelError {
    KernelError::InvalidConfig { message: message.into(), context: None }
}

fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator(ENV_SEPARATOR)
        .separator(ENV_SEPARATOR)
        .convert_case(Case::Snake)
        .try_parsing(true)
}

fn load_with_environment<T>(path: Option<&Path>, environment: Environment) -> Result<T, KernelError>
where
    T: DeserializeOwned,
{
    let mut builder = Config::builder();
    if let Some(path) = path {
        info!("Loading config from {}", path.display());
        builder = builder.add_source(File::from(path).required(true));
    }

    builder
        .add_source(environment)
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")
}
