//! Native widget class name → [`ElementType`] tables.
//!
//! Android view hierarchy dumps and iOS accessibility snapshots use unrelated naming
//! schemes, so each platform has its own table and the two are never merged. Keys are
//! matched exactly as the platform reports them; nothing is normalized.
//!
//! A miss is `None`. Falling back to [`ElementType::Other`] (or anything else) is a
//! decision for the caller.

use crate::vocabulary::{ElementType, Platform};
use fxhash::FxHashMap;
use std::fmt;
use std::sync::OnceLock;

/// Immutable, platform-specific lookup table.
pub struct ClassificationTable {
    platform: Platform,
    entries: &'static [(&'static str, ElementType)],
    index: OnceLock<FxHashMap<&'static str, ElementType>>,
}

impl ClassificationTable {
    const fn new(platform: Platform, entries: &'static [(&'static str, ElementType)]) -> Self {
        Self { platform, entries, index: OnceLock::new() }
    }

    /// Platform whose native names this table understands.
    #[must_use]
    pub const fn platform(&self) -> Platform {
        self.platform
    }

    /// Looks up the category for an exact native class or type name.
    #[must_use]
    pub fn get(&self, native: &str) -> Option<ElementType> {
        self.index().get(native).copied()
    }

    #[must_use]
    pub fn contains(&self, native: &str) -> bool {
        self.index().contains_key(native)
    }

    /// Entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, ElementType)> + '_ {
        self.entries.iter().copied()
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    fn index(&self) -> &FxHashMap<&'static str, ElementType> {
        self.index.get_or_init(|| self.entries.iter().copied().collect())
    }
}

impl fmt::Debug for ClassificationTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClassificationTable")
            .field("platform", &self.platform)
            .field("entries", &self.entries.len())
            .finish_non_exhaustive()
    }
}

/// Android `android.widget.*` / `androidx.*` class names.
pub static ANDROID_ELEMENT_TYPES: ClassificationTable = ClassificationTable::new(
    Platform::Android,
    &[
        ("android.widget.Button", ElementType::Button),
        ("android.widget.ImageButton", ElementType::Button),
        ("com.google.android.material.button.MaterialButton", ElementType::Button),
        ("android.widget.TextView", ElementType::Text),
        ("android.widget.EditText", ElementType::Input),
        ("android.widget.AutoCompleteTextView", ElementType::Input),
        ("android.widget.ImageView", ElementType::Image),
        ("android.widget.ListView", ElementType::List),
        ("android.widget.GridView", ElementType::List),
        ("androidx.recyclerview.widget.RecyclerView", ElementType::List),
        ("android.widget.ScrollView", ElementType::Scroll),
        ("android.widget.HorizontalScrollView", ElementType::Scroll),
        ("androidx.core.widget.NestedScrollView", ElementType::Scroll),
        ("android.widget.FrameLayout", ElementType::Container),
        ("android.widget.LinearLayout", ElementType::Container),
        ("android.widget.RelativeLayout", ElementType::Container),
        ("androidx.constraintlayout.widget.ConstraintLayout", ElementType::Container),
        ("android.view.ViewGroup", ElementType::Container),
        ("android.widget.Switch", ElementType::Switch),
        ("androidx.appcompat.widget.SwitchCompat", ElementType::Switch),
        ("android.widget.ToggleButton", ElementType::Switch),
        ("android.widget.CheckBox", ElementType::Checkbox),
        ("android.widget.RadioButton", ElementType::Checkbox),
    ],
);

/// iOS `XCUIElementType*` names.
pub static IOS_ELEMENT_TYPES: ClassificationTable = ClassificationTable::new(
    Platform::Ios,
    &[
        ("XCUIElementTypeButton", ElementType::Button),
        ("XCUIElementTypeLink", ElementType::Button),
        ("XCUIElementTypeStaticText", ElementType::Text),
        ("XCUIElementTypeTextField", ElementType::Input),
        ("XCUIElementTypeSecureTextField", ElementType::Input),
        ("XCUIElementTypeSearchField", ElementType::Input),
        ("XCUIElementTypeTextView", ElementType::Input),
        ("XCUIElementTypeImage", ElementType::Image),
        ("XCUIElementTypeIcon", ElementType::Image),
        ("XCUIElementTypeTable", ElementType::List),
        ("XCUIElementTypeCollectionView", ElementType::List),
        ("XCUIElementTypeScrollView", ElementType::Scroll),
        ("XCUIElementTypeCell", ElementType::Container),
        ("XCUIElementTypeWindow", ElementType::Container),
        ("XCUIElementTypeOther", ElementType::Container),
        ("XCUIElementTypeSwitch", ElementType::Switch),
        ("XCUIElementTypeToggle", ElementType::Switch),
        ("XCUIElementTypeCheckBox", ElementType::Checkbox),
    ],
);

/// Table for `platform`.
#[must_use]
pub const fn table_for(platform: Platform) -> &'static ClassificationTable {
    match platform {
        Platform::Android => &ANDROID_ELEMENT_TYPES,
        Platform::Ios => &IOS_ELEMENT_TYPES,
    }
}
