use mdev_logger::{ConsoleTarget, LogLevel, Logger};

#[test]
fn init_console_only_has_no_guard() {
    let logger = Logger::builder()
        .name("integration-console-only")
        .console(ConsoleTarget::Stderr)
        .log_level(LogLevel::Info)
        .init()
        .expect("logger should initialize");

    assert!(logger.guard().is_none(), "console-only logger should not create a file guard");
}
