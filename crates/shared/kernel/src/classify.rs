//! Element classification with an explicit fallback policy.
//!
//! [`mdev_domain::classification`] only answers "mapped or not". Callers that need a
//! category for every element go through [`classify_or`], which takes the fallback as an
//! argument so the choice stays visible at the call site.

use mdev_domain::classification::table_for;
use mdev_domain::vocabulary::{ElementType, Platform};
use tracing::debug;

/// Looks up `native` in the table for `platform`.
#[must_use]
pub fn classify(platform: Platform, native: &str) -> Option<ElementType> {
    table_for(platform).get(native)
}

/// Like [`classify`], returning `fallback` for unmapped names.
#[must_use]
pub fn classify_or(platform: Platform, native: &str, fallback: ElementType) -> ElementType {
    classify(platform, native).unwrap_or_else(|| {
        debug!(%platform, native, %fallback, "Unmapped native element type");
        fallback
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mapped_names_ignore_fallback() {
        assert_eq!(
            classify_or(Platform::Ios, "XCUIElementTypeButton", ElementType::Other),
            ElementType::Button
        );
        assert_eq!(
            classify_or(Platform::Android, "android.widget.CheckBox", ElementType::Other),
            ElementType::Checkbox
        );
    }

    #[test]
    fn unmapped_names_use_fallback() {
        assert_eq!(
            classify_or(Platform::Ios, "XCUIElementTypeUnknownFuture", ElementType::Container),
            ElementType::Container
        );
        assert_eq!(classify(Platform::Android, "com.example.CustomView"), None);
    }

    #[test]
    fn tables_are_not_shared_between_platforms() {
        assert_eq!(classify(Platform::Android, "XCUIElementTypeSwitch"), None);
        assert_eq!(classify(Platform::Ios, "android.widget.Switch"), None);
    }
}
