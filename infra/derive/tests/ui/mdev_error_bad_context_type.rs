use mdev_derive::mdev_error;

#[mdev_error]
pub enum ShellError {
    #[error("IO error: {source}")]
    Io {
        #[source]
        source: std::io::Error,
        context: Option<String>,
    },
}

fn main() {}
