use mdev_derive::mdev_error;

#[mdev_error]
pub struct ShellError {
    message: String,
}

fn main() {}
