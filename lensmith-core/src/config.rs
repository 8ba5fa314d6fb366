//! Generator settings.

use crate::error::ConfigError;

/// Naming and layout settings for synthesized lenses.
///
/// # Examples
///
/// ```rust
/// use lensmith_core::GeneratorConfig;
///
/// let config = GeneratorConfig::default()
///     .with_lens_suffix("Optic")
///     .with_parameters("replacement", "original");
/// assert!(config.validate().is_ok());
/// assert_eq!(config.lens_suffix, "Optic");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GeneratorConfig {
    /// Appended to the field name to form the lens name.
    pub lens_suffix: String,
    /// Name of the accessor-pair type.
    pub lens_type: String,
    /// Setter parameter bound to the new field value.
    pub value_parameter: String,
    /// Setter parameter bound to the original instance.
    pub instance_parameter: String,
    /// One level of indentation in rendered text.
    pub indent: String,
    /// Spell `internal` instead of leaving it implicit.
    pub explicit_internal: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            lens_suffix: "Lens".to_string(),
            lens_type: "Lens".to_string(),
            value_parameter: "newValue".to_string(),
            instance_parameter: "whole".to_string(),
            indent: "    ".to_string(),
            explicit_internal: false,
        }
    }
}

impl GeneratorConfig {
    /// Replaces the lens-name suffix.
    #[must_use]
    pub fn with_lens_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.lens_suffix = suffix.into();
        self
    }

    /// Replaces the accessor-pair type name.
    #[must_use]
    pub fn with_lens_type(mut self, lens_type: impl Into<String>) -> Self {
        self.lens_type = lens_type.into();
        self
    }

    /// Replaces both setter parameter names.
    #[must_use]
    pub fn with_parameters(
        mut self,
        value_parameter: impl Into<String>,
        instance_parameter: impl Into<String>,
    ) -> Self {
        self.value_parameter = value_parameter.into();
        self.instance_parameter = instance_parameter.into();
        self
    }

    /// Replaces the indentation unit.
    #[must_use]
    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }

    /// Spells out `internal` on internal lenses.
    #[must_use]
    pub const fn with_explicit_internal(mut self, explicit_internal: bool) -> Self {
        self.explicit_internal = explicit_internal;
        self
    }

    /// Checks that every generated name is well formed.
    ///
    /// The suffix may start with a digit or underscore since it is appended
    /// to an existing identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidIdentifier`] for an empty or malformed
    /// name and [`ConfigError::ParameterClash`] when both setter parameters
    /// share a name.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_identifier("lens_type", &self.lens_type, true)?;
        check_identifier("value_parameter", &self.value_parameter, true)?;
        check_identifier("instance_parameter", &self.instance_parameter, true)?;
        check_identifier("lens_suffix", &self.lens_suffix, false)?;
        if self.value_parameter == self.instance_parameter {
            return Err(ConfigError::ParameterClash {
                name: self.value_parameter.clone(),
            });
        }
        Ok(())
    }
}

fn check_identifier(setting: &'static str, value: &str, leading: bool) -> Result<(), ConfigError> {
    let mut characters = value.chars();
    let well_formed = characters.next().is_some_and(|first| {
        first.is_alphabetic() || first == '_' || (!leading && first.is_ascii_digit())
    }) && characters.all(|character| character.is_alphanumeric() || character == '_');
    if well_formed {
        Ok(())
    } else {
        Err(ConfigError::InvalidIdentifier {
            setting,
            value: value.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_default_is_valid() {
        assert_eq!(GeneratorConfig::default().validate(), Ok(()));
    }

    #[rstest]
    #[case(GeneratorConfig::default().with_lens_suffix(""), "lens_suffix")]
    #[case(GeneratorConfig::default().with_lens_type("Lens<"), "lens_type")]
    #[case(GeneratorConfig::default().with_parameters("1st", "whole"), "value_parameter")]
    #[case(GeneratorConfig::default().with_parameters("value", "the whole"), "instance_parameter")]
    fn test_invalid_identifiers(#[case] config: GeneratorConfig, #[case] setting: &str) {
        match config.validate() {
            Err(ConfigError::InvalidIdentifier { setting: actual, .. }) => {
                assert_eq!(actual, setting);
            }
            other => panic!("expected invalid identifier, got {other:?}"),
        }
    }

    #[test]
    fn test_suffix_may_start_with_underscore_or_digit() {
        assert!(GeneratorConfig::default().with_lens_suffix("_lens").validate().is_ok());
        assert!(GeneratorConfig::default().with_lens_suffix("2").validate().is_ok());
    }

    #[test]
    fn test_parameter_clash() {
        let config = GeneratorConfig::default().with_parameters("value", "value");
        assert_eq!(
            config.validate(),
            Err(ConfigError::ParameterClash {
                name: "value".to_string()
            })
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_partial_config() {
        let config: GeneratorConfig =
            serde_json::from_str(r#"{ "lens_suffix": "Optic", "explicit_internal": true }"#).unwrap();
        assert_eq!(config.lens_suffix, "Optic");
        assert!(config.explicit_internal);
        assert_eq!(config.value_parameter, "newValue");
    }
}
