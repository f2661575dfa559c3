//! Processor options, loadable from a `[processor]` TOML table.

use crate::error::InputError;
use crate::lexer::MAX_LINE_LENGTH;
use serde::{Deserialize, Serialize};

/// Top-level wrapper matching the TOML `[processor]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProcessorConfigFile {
    #[serde(default)]
    pub processor: ProcessorConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessorConfig {
    /// Expected version prefix for the dictionary and the data `Version`
    /// object. `None` turns version checks off.
    pub match_version: Option<String>,
    /// Characters kept from one input line; the rest is cut and reported.
    pub max_line_length: usize,
    /// Report `\required-object` definitions with no instances.
    pub check_required_objects: bool,
    /// Collect requested output variables after the data pass.
    pub prescan_output_variables: bool,
    /// Redirect retired object names through the legacy table.
    pub legacy_objects: bool,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        ProcessorConfig {
            match_version: None,
            max_line_length: MAX_LINE_LENGTH,
            check_required_objects: true,
            prescan_output_variables: true,
            legacy_objects: true,
        }
    }
}

impl ProcessorConfig {
    /// Parse a config document. Missing keys take their defaults.
    pub fn from_toml_str(content: &str) -> Result<ProcessorConfig, InputError> {
        let file: ProcessorConfigFile = toml::from_str(content)?;
        Ok(file.processor)
    }

    pub fn with_match_version(mut self, version: impl Into<String>) -> Self {
        self.match_version = Some(version.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_gives_defaults() {
        let config = ProcessorConfig::from_toml_str("").unwrap();
        assert_eq!(config, ProcessorConfig::default());
        assert_eq!(config.max_line_length, 500);
        assert!(config.legacy_objects);
    }

    #[test]
    fn partial_table_overrides_named_keys() {
        let config = ProcessorConfig::from_toml_str(
            r#"
            [processor]
            match_version = "8.3"
            max_line_length = 120
            prescan_output_variables = false
            "#,
        )
        .unwrap();
        assert_eq!(config.match_version.as_deref(), Some("8.3"));
        assert_eq!(config.max_line_length, 120);
        assert!(!config.prescan_output_variables);
        assert!(config.check_required_objects);
    }

    #[test]
    fn bad_value_type_is_a_config_error() {
        let err = ProcessorConfig::from_toml_str("[processor]\nmax_line_length = \"long\"\n")
            .unwrap_err();
        assert!(matches!(err, InputError::Config(_)));
        assert!(err.to_string().starts_with("invalid processor configuration"));
    }
}
