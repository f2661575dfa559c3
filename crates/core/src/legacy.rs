//! Legacy object names: objects that were deleted from or renamed in the
//! dictionary, consulted before schema resolution.

use crate::diagnostics::Diagnostics;
use crate::error::{Category, Diagnostic};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LegacyObject {
    pub old_name: String,
    pub new_name: String,
    pub deleted: bool,
    pub transition_defer: bool,
}

impl LegacyObject {
    fn deleted(old_name: &str) -> Self {
        LegacyObject {
            old_name: old_name.to_owned(),
            new_name: String::new(),
            deleted: true,
            transition_defer: false,
        }
    }

    fn renamed(old_name: &str, new_name: &str) -> Self {
        LegacyObject {
            old_name: old_name.to_owned(),
            new_name: new_name.to_owned(),
            deleted: false,
            transition_defer: false,
        }
    }
}

/// What the data pass should do with an object after legacy lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Not a legacy name; resolve it as written.
    Unchanged,
    /// Validate under this replacement name instead.
    Renamed(String),
    /// Skip the object.
    Dropped,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LegacyTable {
    entries: Vec<LegacyObject>,
}

impl LegacyTable {
    pub fn empty() -> Self {
        Self::default()
    }

    /// The fixed table of retired object names.
    pub fn init_secret_objects() -> Self {
        let mut reports = LegacyObject::deleted("OUTPUT:REPORTS");
        reports.new_name = "various - depends on fields".to_owned();
        reports.transition_defer = true;

        LegacyTable {
            entries: vec![
                LegacyObject::deleted("SKY RADIANCE DISTRIBUTION"),
                LegacyObject::renamed("SURFACE:SHADING:DETACHED", "Shading:Site:Detailed"),
                LegacyObject::deleted("AIRFLOW MODEL"),
                LegacyObject::deleted("AIRFLOWNETWORK:MULTIZONE:SITEWINDCONDITIONS"),
                reports,
            ],
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[LegacyObject] {
        &self.entries
    }

    pub fn find(&self, name: &str) -> Option<&LegacyObject> {
        let name = name.trim();
        self.entries
            .iter()
            .find(|e| e.old_name.eq_ignore_ascii_case(name))
    }

    /// Look `name` up and report any redirection.
    pub fn resolve(&self, name: &str, line: u32, diags: &mut Diagnostics) -> Resolution {
        let Some(entry) = self.find(name) else {
            return Resolution::Unchanged;
        };
        let shown = name.trim().to_uppercase();

        if entry.deleted {
            let diag = if entry.transition_defer {
                Diagnostic::severe(
                    Category::Legacy,
                    line,
                    format!(
                        "IP: Objects=\"{}\" have been replaced with this object=\"{}\"",
                        shown, entry.new_name
                    ),
                )
                .continued("Use the conversion utilities before running this input file.")
            } else {
                Diagnostic::warning(
                    Category::Legacy,
                    line,
                    format!(
                        "IP: Objects=\"{}\" have been deleted from the IDD.  Will be ignored.",
                        shown
                    ),
                )
            };
            diags.emit(diag.with_object(&shown));
            return Resolution::Dropped;
        }

        diags.emit(
            Diagnostic::warning(
                Category::Legacy,
                line,
                format!(
                    "IP: Objects=\"{}\" are being replaced with this object=\"{}\"",
                    shown, entry.new_name
                ),
            )
            .with_object(&shown),
        );
        Resolution::Renamed(entry.new_name.clone())
    }
}
