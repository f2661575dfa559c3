//! Diagnostics stream: collects non-fatal problems in emission order and
//! renders them in the fixed console format.

use crate::error::{Category, Diagnostic, InputError, Severity, Stream};
use crate::lexer::{Line, LineReader};
use std::io::BufRead;

pub const SEVERE_MARKER: &str = "   ** Severe  ** ";
pub const WARNING_MARKER: &str = "   ** Warning ** ";
pub const CONTINUE_MARKER: &str = "   **   ~~~   ** ";

#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
    error_flag: bool,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a diagnostic and raise the run-wide error flag.
    pub fn emit(&mut self, diagnostic: Diagnostic) {
        match diagnostic.severity {
            Severity::Severe => tracing::error!(
                line = diagnostic.line,
                object = diagnostic.object.as_deref(),
                "{}",
                diagnostic.message
            ),
            Severity::Warning => tracing::warn!(
                line = diagnostic.line,
                object = diagnostic.object.as_deref(),
                "{}",
                diagnostic.message
            ),
        }
        self.error_flag = true;
        self.entries.push(diagnostic);
    }

    pub fn entries(&self) -> &[Diagnostic] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True once any diagnostic has fired during the run.
    pub fn error_flag(&self) -> bool {
        self.error_flag
    }

    pub fn severe_count(&self) -> usize {
        self.count(Severity::Severe)
    }

    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    fn count(&self, severity: Severity) -> usize {
        self.entries
            .iter()
            .filter(|d| d.severity == severity)
            .count()
    }

    /// Render every diagnostic, one marked line each plus an optional
    /// continuation line.
    pub fn render(&self) -> String {
        self.entries.iter().map(render_one).collect()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.error_flag = false;
    }
}

pub fn render_one(diagnostic: &Diagnostic) -> String {
    let marker = match diagnostic.severity {
        Severity::Severe => SEVERE_MARKER,
        Severity::Warning => WARNING_MARKER,
    };
    let mut out = format!("{}{}\n", marker, diagnostic.message);
    if let Some(cont) = &diagnostic.continuation {
        out.push_str(CONTINUE_MARKER);
        out.push_str(cont);
        out.push('\n');
    }
    out
}

/// Read the next line, reporting truncation. Read failures are fatal.
pub(crate) fn read_reported_line<R: BufRead>(
    reader: &mut LineReader<R>,
    stream: Stream,
    diags: &mut Diagnostics,
) -> Result<Option<Line>, InputError> {
    match reader.next_line() {
        Ok(Some(line)) => {
            report_truncated(&line, reader.max_line_length(), diags);
            Ok(Some(line))
        }
        Ok(None) => Ok(None),
        Err(source) => Err(InputError::Io {
            stream,
            line: reader.line_number(),
            source,
        }),
    }
}

/// Report a line the reader had to cut at the configured maximum length.
fn report_truncated(line: &Line, max_len: usize, diags: &mut Diagnostics) {
    if line.truncated {
        diags.emit(
            Diagnostic::severe(
                Category::Validation,
                line.number,
                format!(
                    "IP: Input line longer than maximum length allowed={} characters. Other errors may follow.",
                    max_len
                ),
            )
            .continued(format!("Line {} truncated to {} characters", line.number, max_len)),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_severe_with_continuation() {
        let mut diags = Diagnostics::new();
        diags.emit(
            Diagnostic::severe(Category::Version, 0, "IP: Possible incorrect IDD File")
                .continued("IDD_Version 8.3.0 not the same as expected =\"2.0\""),
        );
        assert_eq!(
            diags.render(),
            "   ** Severe  ** IP: Possible incorrect IDD File\n   **   ~~~   ** IDD_Version 8.3.0 not the same as expected =\"2.0\"\n"
        );
    }

    #[test]
    fn renders_warning_without_continuation() {
        let mut diags = Diagnostics::new();
        diags.emit(Diagnostic::warning(Category::Legacy, 3, "IP: gone"));
        assert_eq!(diags.render(), "   ** Warning ** IP: gone\n");
        assert_eq!(diags.warning_count(), 1);
        assert_eq!(diags.severe_count(), 0);
    }

    #[test]
    fn truncated_line_is_reported_once() {
        let mut diags = Diagnostics::new();
        let mut reader = LineReader::new(std::io::Cursor::new("Version,8.3;\n")).with_max_line_length(7);
        let line = read_reported_line(&mut reader, Stream::Data, &mut diags)
            .unwrap()
            .unwrap();
        assert_eq!(line.text, "Version");
        assert_eq!(diags.severe_count(), 1);
        assert_eq!(
            diags.render(),
            "   ** Severe  ** IP: Input line longer than maximum length allowed=7 characters. Other errors may follow.\n   **   ~~~   ** Line 1 truncated to 7 characters\n"
        );
        assert!(read_reported_line(&mut reader, Stream::Data, &mut diags)
            .unwrap()
            .is_none());
    }

    #[test]
    fn any_diagnostic_raises_flag_and_clear_resets() {
        let mut diags = Diagnostics::new();
        assert!(!diags.error_flag());
        diags.emit(Diagnostic::warning(Category::Legacy, 1, "x"));
        assert!(diags.error_flag());
        diags.clear();
        assert!(!diags.error_flag());
        assert!(diags.is_empty());
    }
}
