use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of a non-fatal diagnostic.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Severe,
}

/// Which stage of processing produced a diagnostic.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Malformed or duplicate dictionary declarations.
    Schema,
    /// Unknown object or section names in the data stream.
    Resolution,
    /// Field-level problems: bad numbers, ranges, counts, unique objects.
    Validation,
    /// Deleted or renamed objects found in the data stream.
    Legacy,
    /// Dictionary or data version disagrees with the expected version.
    Version,
}

/// A non-fatal input diagnostic.
///
/// Diagnostics never abort a parse; they accumulate in
/// [`Diagnostics`](crate::diagnostics::Diagnostics) and set the run-wide
/// error flag.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub category: Category,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    pub line: u32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub continuation: Option<String>,
}

impl Diagnostic {
    pub fn new(
        severity: Severity,
        category: Category,
        line: u32,
        message: impl Into<String>,
    ) -> Self {
        Diagnostic {
            severity,
            category,
            object: None,
            field: None,
            line,
            message: message.into(),
            continuation: None,
        }
    }

    pub fn severe(category: Category, line: u32, message: impl Into<String>) -> Self {
        Diagnostic::new(Severity::Severe, category, line, message)
    }

    pub fn warning(category: Category, line: u32, message: impl Into<String>) -> Self {
        Diagnostic::new(Severity::Warning, category, line, message)
    }

    pub fn with_object(mut self, object: &str) -> Self {
        self.object = Some(object.to_owned());
        self
    }

    pub fn with_field(mut self, field: &str) -> Self {
        self.field = Some(field.to_owned());
        self
    }

    pub fn continued(mut self, text: impl Into<String>) -> Self {
        self.continuation = Some(text.into());
        self
    }

    /// Serialize to JSON with every key present (null for missing values).
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "category":     self.category,
            "continuation": self.continuation,
            "field":        self.field,
            "line":         self.line,
            "message":      self.message,
            "object":       self.object,
            "severity":     self.severity,
        })
    }
}

/// The input stream a fatal error came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Dictionary,
    Data,
}

impl fmt::Display for Stream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stream::Dictionary => f.write_str("dictionary"),
            Stream::Data => f.write_str("data"),
        }
    }
}

/// Fatal errors: the parse cannot continue.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// The underlying character stream could not be read.
    #[error("unable to read {stream} stream after line {line}")]
    Io {
        stream: Stream,
        line: u32,
        #[source]
        source: std::io::Error,
    },

    /// The processor configuration could not be parsed.
    #[error("invalid processor configuration: {0}")]
    Config(#[from] toml::de::Error),
}

/// Errors from the read-only query surface.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    #[error("object not found in dictionary: {0}")]
    UnknownObject(String),

    #[error("instance {ordinal} of {object} requested but {found} found")]
    OrdinalOutOfRange {
        object: String,
        ordinal: usize,
        found: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_value_includes_null_fields() {
        let d = Diagnostic::severe(Category::Resolution, 4, "IP: unknown");
        let v = d.to_json_value();
        assert_eq!(v["severity"], "severe");
        assert_eq!(v["category"], "resolution");
        assert!(v["object"].is_null());
        assert!(v["continuation"].is_null());
        assert_eq!(v["line"], 4);
    }

    #[test]
    fn serde_skips_missing_optionals() {
        let d = Diagnostic::warning(Category::Legacy, 1, "IP: renamed").with_object("AIRFLOW MODEL");
        let v = serde_json::to_value(&d).unwrap();
        assert_eq!(v["object"], "AIRFLOW MODEL");
        assert!(v.get("field").is_none());
    }

    #[test]
    fn io_error_message_names_stream() {
        let err = InputError::Io {
            stream: Stream::Data,
            line: 12,
            source: std::io::Error::new(std::io::ErrorKind::InvalidData, "bad utf-8"),
        };
        assert_eq!(err.to_string(), "unable to read data stream after line 12");
    }
}
