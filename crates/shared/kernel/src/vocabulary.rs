//! String → enum conversion at the system boundary.

use crate::KernelError;
use mdev_domain::vocabulary::{Tag, Vocabulary};
use tracing::debug;

/// Parses `value` into the enumeration `T`.
///
/// # Errors
/// Returns [`KernelError::UnknownTag`] listing the valid tags when `value` is not an exact
/// member of `T`.
pub fn parse_tag<T: Tag>(value: &str) -> Result<T, KernelError> {
    value.parse::<T>().map_err(|_| unknown(T::NAME, T::TAGS, value))
}

/// Checks `value` against an enumeration chosen at runtime and returns its canonical tag.
///
/// # Errors
/// Returns [`KernelError::UnknownTag`] when the guard of `vocabulary` rejects `value`.
pub fn check_tag(vocabulary: Vocabulary, value: &str) -> Result<&'static str, KernelError> {
    let tags = vocabulary.tags();
    tags.iter()
        .copied()
        .find(|tag| *tag == value)
        .ok_or_else(|| unknown(vocabulary.as_str(), tags, value))
}

fn unknown(vocabulary: &'static str, expected: &'static [&'static str], value: &str) -> KernelError {
    debug!(vocabulary, value, "Rejected unknown tag");
    KernelError::UnknownTag { vocabulary, value: value.to_owned(), expected, context: None }
}
