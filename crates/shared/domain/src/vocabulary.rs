//! Closed enumerations shared across the tooling.
//!
//! Every enumeration is a `Copy` enum whose variants carry their wire tag. The tag is
//! what crosses process boundaries (CLI flags, JSON payloads, config files); inside the
//! workspace the typed value is used instead. Each enumeration gets:
//!
//! * `TAGS`, the ordered list of valid tags, and `VARIANTS` (via [`VariantArray`]);
//! * exact, case-sensitive [`FromStr`](std::str::FromStr), [`Display`](std::fmt::Display)
//!   and `serde` support, all driven by the same tag;
//! * a free `is_*` guard accepting any `&str`.
//!
//! Declaration order is preserved in `TAGS` but carries no ranking. In particular
//! [`LogLevel`] is not `Ord`.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum_macros::{Display, EnumCount, EnumString, IntoStaticStr, VariantArray};

pub use strum::{EnumCount, VariantArray};

/// Common surface of every vocabulary enum.
pub trait Tag: Copy + FromStr + VariantArray + 'static {
    /// Snake-case name of the enumeration (e.g. `"log_level"`).
    const NAME: &'static str;
    /// Valid tags, in declaration order.
    const TAGS: &'static [&'static str];

    /// The wire tag of this value.
    fn tag(self) -> &'static str;
}

macro_rules! vocabulary {
    (
        $(#[$meta:meta])*
        pub enum $name:ident ($label:literal) guarded by $guard:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $tag:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash,
            Serialize, Deserialize,
            Display, EnumString, IntoStaticStr, EnumCount, VariantArray,
        )]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $tag)]
                #[strum(serialize = $tag)]
                $variant,
            )+
        }

        impl $name {
            /// Valid tags, in declaration order.
            pub const TAGS: &'static [&'static str] = &[$($tag),+];

            /// The wire tag of this value.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $tag,)+
                }
            }
        }

        impl Tag for $name {
            const NAME: &'static str = $label;
            const TAGS: &'static [&'static str] = $name::TAGS;

            fn tag(self) -> &'static str {
                self.as_str()
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        #[doc = concat!("Returns `true` if `value` is exactly one of the [`", stringify!($name), "`] tags.")]
        #[must_use]
        pub fn $guard(value: &str) -> bool {
            $name::TAGS.contains(&value)
        }
    };
}

vocabulary! {
    /// Target mobile operating system.
    pub enum Platform ("platform") guarded by is_platform {
        Android => "android",
        Ios => "ios",
    }
}

vocabulary! {
    /// Build configuration.
    pub enum BuildVariant ("build_variant") guarded by is_build_variant {
        Debug => "debug",
        Release => "release",
    }
}

vocabulary! {
    /// Kotlin Multiplatform source-set target.
    pub enum KmmModule ("kmm_module") guarded by is_kmm_module {
        Shared => "shared",
        CommonMain => "commonMain",
        CommonTest => "commonTest",
        AndroidMain => "androidMain",
        IosMain => "iosMain",
    }
}

vocabulary! {
    /// UI gesture or action kind.
    pub enum InteractionType ("interaction_type") guarded by is_interaction_type {
        Tap => "tap",
        LongPress => "long_press",
        Swipe => "swipe",
        InputText => "input_text",
        Clear => "clear",
    }
}

vocabulary! {
    /// Gesture direction.
    pub enum SwipeDirection ("swipe_direction") guarded by is_swipe_direction {
        Up => "up",
        Down => "down",
        Left => "left",
        Right => "right",
    }
}

vocabulary! {
    /// Emulator or simulator lifecycle state.
    pub enum DeviceStatus ("device_status") guarded by is_device_status {
        Booted => "booted",
        Shutdown => "shutdown",
        Booting => "booting",
        Unknown => "unknown",
    }
}

vocabulary! {
    /// Log severity tag as reported by device log streams.
    ///
    /// Declaration order is not a severity ranking; map levels explicitly where a
    /// ranking is needed.
    pub enum LogLevel ("log_level") guarded by is_log_level {
        Verbose => "verbose",
        Debug => "debug",
        Info => "info",
        Warning => "warning",
        Error => "error",
        Fatal => "fatal",
    }
}

vocabulary! {
    /// Unified cross-platform UI widget category.
    pub enum ElementType ("element_type") guarded by is_element_type {
        Button => "button",
        Text => "text",
        Input => "input",
        Image => "image",
        List => "list",
        Scroll => "scroll",
        Container => "container",
        Switch => "switch",
        Checkbox => "checkbox",
        /// Explicit catch-all. No classification table entry maps to it; only a
        /// caller-supplied fallback yields it.
        Other => "other",
    }
}

vocabulary! {
    /// Crash classification.
    pub enum CrashPatternType ("crash_pattern_type") guarded by is_crash_pattern_type {
        NullPointer => "null_pointer",
        ArrayBounds => "array_bounds",
        ThreadingViolation => "threading_violation",
        StackOverflow => "stack_overflow",
        AssertionFailure => "assertion_failure",
        MemoryCorruption => "memory_corruption",
        Unknown => "unknown",
    }
}

vocabulary! {
    /// Static-analysis tool identity.
    pub enum LintSource ("lint_source") guarded by is_lint_source {
        Detekt => "detekt",
        AndroidLint => "android-lint",
        Ktlint => "ktlint",
    }
}

vocabulary! {
    /// Device environment lifecycle command.
    pub enum EnvAction ("env_action") guarded by is_env_action {
        Boot => "boot",
        Shutdown => "shutdown",
        Wipe => "wipe",
    }
}

vocabulary! {
    /// Names the enumerations above, for callers that pick one at runtime.
    pub enum Vocabulary ("vocabulary") guarded by is_vocabulary {
        Platform => "platform",
        BuildVariant => "build_variant",
        KmmModule => "kmm_module",
        InteractionType => "interaction_type",
        SwipeDirection => "swipe_direction",
        DeviceStatus => "device_status",
        LogLevel => "log_level",
        ElementType => "element_type",
        CrashPatternType => "crash_pattern_type",
        LintSource => "lint_source",
        EnvAction => "env_action",
    }
}

impl Vocabulary {
    /// Valid tags of the named enumeration.
    #[must_use]
    pub const fn tags(self) -> &'static [&'static str] {
        match self {
            Self::Platform => Platform::TAGS,
            Self::BuildVariant => BuildVariant::TAGS,
            Self::KmmModule => KmmModule::TAGS,
            Self::InteractionType => InteractionType::TAGS,
            Self::SwipeDirection => SwipeDirection::TAGS,
            Self::DeviceStatus => DeviceStatus::TAGS,
            Self::LogLevel => LogLevel::TAGS,
            Self::ElementType => ElementType::TAGS,
            Self::CrashPatternType => CrashPatternType::TAGS,
            Self::LintSource => LintSource::TAGS,
            Self::EnvAction => EnvAction::TAGS,
        }
    }

    /// Runs the guard of the named enumeration against `value`.
    #[must_use]
    pub fn contains(self, value: &str) -> bool {
        let guard: fn(&str) -> bool = match self {
            Self::Platform => is_platform,
            Self::BuildVariant => is_build_variant,
            Self::KmmModule => is_kmm_module,
            Self::InteractionType => is_interaction_type,
            Self::SwipeDirection => is_swipe_direction,
            Self::DeviceStatus => is_device_status,
            Self::LogLevel => is_log_level,
            Self::ElementType => is_element_type,
            Self::CrashPatternType => is_crash_pattern_type,
            Self::LintSource => is_lint_source,
            Self::EnvAction => is_env_action,
        };
        guard(value)
    }
}
