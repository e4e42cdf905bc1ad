use mdev_kernel::KernelError;
use mdev_kernel::config::load_tool_config;
use std::fs;
use tempfile::tempdir;

#[test]
fn load_tool_config_reads_toml() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("mdev.toml");
    fs::write(&path, "build_timeout_ms = 600000\ndevice_boot_timeout_ms = 90000\n")?;

    let cfg = load_tool_config(Some(path.as_path()))?;
    assert_eq!(cfg.build_timeout_ms, 600_000);
    assert_eq!(cfg.device_boot_timeout_ms, 90_000);
    Ok(())
}

#[test]
fn load_tool_config_rejects_invalid_values() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("mdev.toml");
    fs::write(&path, "screenshot_quality = 0\n")?;

    let err = load_tool_config(Some(path.as_path())).unwrap_err();
    assert!(matches!(err, KernelError::InvalidConfig { .. }), "{err}");
    Ok(())
}

#[test]
fn load_tool_config_rejects_wrong_types() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("mdev.toml");
    fs::write(&path, "log_limit = \"plenty\"\n")?;

    let err = load_tool_config(Some(path.as_path())).unwrap_err();
    assert!(matches!(err, KernelError::Config { .. }), "{err}");
    Ok(())
}
