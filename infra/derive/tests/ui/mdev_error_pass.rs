use mdev_derive::mdev_error;
use std::borrow::Cow;

#[mdev_error]
pub enum ShellError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Unknown tag '{value}'")]
    UnknownTag { value: String },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn read() -> Result<(), ShellError> {
    let result: Result<(), std::io::Error> = Err(std::io::Error::other("boom"));
    result.context("reading device list")?;
    Ok(())
}

fn main() {
    let err = read().unwrap_err();
    assert_eq!(err.to_string(), "IO error (reading device list): boom");

    let err: ShellError = "plain message".into();
    assert!(matches!(err, ShellError::Internal { context: None, .. }));

    let err = Err::<(), _>(ShellError::from(String::from("late"))).context("outer").unwrap_err();
    assert_eq!(err.to_string(), "Internal error (outer): late");
}
