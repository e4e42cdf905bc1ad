use std::borrow::Cow;

/// Errors raised while turning external input into domain values.
#[mdev_derive::mdev_error]
pub enum KernelError {
    /// A raw string is not a member of the requested enumeration.
    #[error(
        "Unknown {vocabulary} '{value}'{}: expected one of {}",
        format_context(.context),
        expected_tags(.expected)
    )]
    UnknownTag {
        vocabulary: &'static str,
        value: String,
        expected: &'static [&'static str],
        context: Option<Cow<'static, str>>,
    },

    /// Loaded configuration violates a value constraint.
    #[error("Invalid configuration{}: {message}", format_context(.context))]
    InvalidConfig { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The `config` crate failed to read or deserialize a source.
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

fn expected_tags(tags: &[&str]) -> String {
    tags.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const fn variant_name(error: &KernelError) -> &'static str {
        match error {
            KernelError::UnknownTag { .. } => "unknown_tag",
            KernelError::InvalidConfig { .. } => "invalid_config",
            KernelError::Config { .. } => "config",
        }
    }

    #[test]
    fn every_variant_renders_its_context() {
        let errors: [Result<(), KernelError>; 3] = [
            Err(KernelError::UnknownTag {
                vocabulary: "platform",
                value: "web".to_owned(),
                expected: &["android", "ios"],
                context: None,
            }),
            Err(KernelError::InvalidConfig { message: "log_limit must be positive".into(), context: None }),
            Err(config::ConfigError::Message("missing field".to_owned()).into()),
        ];

        let names: Vec<_> = errors
            .into_iter()
            .map(|result| {
                let error = result.context("loading").unwrap_err();
                assert!(error.to_string().contains("loading"), "{error}");
                variant_name(&error)
            })
            .collect();
        assert_eq!(names, ["unknown_tag", "invalid_config", "config"]);
    }

    #[test]
    fn unknown_tag_lists_expected_values() {
        let error = KernelError::UnknownTag {
            vocabulary: "platform",
            value: "web".to_owned(),
            expected: &["android", "ios"],
            context: None,
        };
        assert_eq!(error.to_string(), "Unknown platform 'web': expected one of android, ios");
    }
}
