use mdev_derive::mdev_error;

#[mdev_error]
pub enum ShellError {
    #[error("IO error: {0}")]
    Io(std::io::Error),
}

fn main() {}
