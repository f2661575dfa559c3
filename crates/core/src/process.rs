//! Input processor: the run-scoped context that owns the schema catalog,
//! the record store and the diagnostics stream.
//!
//! This is a thin orchestrator that calls each pass module in order:
//! dictionary (pass 1, which builds the name index of pass 2), data
//! (pass 3), then the post-data checks and the output-variable pre-scan
//! (pass 4).

use crate::config::ProcessorConfig;
use crate::diagnostics::Diagnostics;
use crate::error::{Category, Diagnostic, InputError, Severity};
use crate::legacy::LegacyTable;
use crate::lexer::LineReader;
use crate::output_vars::OutputVariableRequests;
use crate::pass1_dictionary::{self, SchemaRegistry};
use crate::pass3_records;
use crate::pass4_prescan;
use crate::record::RecordStore;
use serde::Serialize;
use std::io::BufRead;

/// Summary of one processing step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Outcome {
    /// Any diagnostic was emitted by this step.
    pub errors_found: bool,
    pub severe: usize,
    pub warnings: usize,
}

impl Outcome {
    fn since(diags: &Diagnostics, mark: usize) -> Outcome {
        let emitted = &diags.entries()[mark..];
        let severe = emitted
            .iter()
            .filter(|d| d.severity == Severity::Severe)
            .count();
        Outcome {
            errors_found: !emitted.is_empty(),
            severe,
            warnings: emitted.len() - severe,
        }
    }
}

#[derive(Debug, Clone)]
pub struct InputProcessor {
    pub(crate) config: ProcessorConfig,
    pub(crate) schema: SchemaRegistry,
    pub(crate) records: RecordStore,
    pub(crate) legacy: LegacyTable,
    pub(crate) output_vars: OutputVariableRequests,
    pub(crate) diagnostics: Diagnostics,
}

impl Default for InputProcessor {
    fn default() -> Self {
        InputProcessor::new(ProcessorConfig::default())
    }
}

impl InputProcessor {
    pub fn new(config: ProcessorConfig) -> Self {
        let legacy = if config.legacy_objects {
            LegacyTable::init_secret_objects()
        } else {
            LegacyTable::empty()
        };
        InputProcessor {
            config,
            schema: SchemaRegistry::new(),
            records: RecordStore::new(0),
            legacy,
            output_vars: OutputVariableRequests::new(),
            diagnostics: Diagnostics::new(),
        }
    }

    /// Parse the dictionary stream, replacing any previously loaded schema.
    pub fn process_dictionary<R: BufRead>(&mut self, reader: R) -> Result<Outcome, InputError> {
        let mark = self.diagnostics.len();
        let mut lines = LineReader::new(reader).with_max_line_length(self.config.max_line_length);
        self.schema = pass1_dictionary::parse_dictionary(&mut lines, &mut self.diagnostics)?;
        self.records = RecordStore::new(self.schema.object_defs.len());
        self.check_dictionary_version();

        tracing::debug!(
            objects = self.schema.object_defs.len(),
            sections = self.schema.section_defs.len(),
            "dictionary loaded"
        );
        Ok(Outcome::since(&self.diagnostics, mark))
    }

    /// Parse the data stream against the loaded schema, then run the
    /// post-data checks and the output-variable pre-scan.
    ///
    /// Each call replaces the records and instance counts of the previous
    /// one. Output-variable requests and diagnostics accumulate until the
    /// caller clears them.
    pub fn process_data<R: BufRead>(&mut self, reader: R) -> Result<Outcome, InputError> {
        let mark = self.diagnostics.len();
        self.schema.reset_counts();
        let mut lines = LineReader::new(reader).with_max_line_length(self.config.max_line_length);
        let legacy = self.config.legacy_objects.then_some(&self.legacy);
        self.records = pass3_records::parse_data(
            &mut lines,
            &mut self.schema,
            legacy,
            &mut self.diagnostics,
        )?;

        if self.config.check_required_objects {
            self.check_required_objects();
        }
        self.check_data_version();
        if self.config.prescan_output_variables {
            pass4_prescan::pre_scan_reporting_variables(
                &self.schema,
                &self.records,
                &mut self.output_vars,
            );
        }
        Ok(Outcome::since(&self.diagnostics, mark))
    }

    /// Dictionary then data, as one call.
    pub fn process<D: BufRead, I: BufRead>(
        &mut self,
        dictionary: D,
        data: I,
    ) -> Result<Outcome, InputError> {
        let mark = self.diagnostics.len();
        self.process_dictionary(dictionary)?;
        self.process_data(data)?;
        Ok(Outcome::since(&self.diagnostics, mark))
    }

    fn check_dictionary_version(&mut self) {
        let Some(expected) = &self.config.match_version else {
            return;
        };
        let found = self.schema.idd_version.as_deref().unwrap_or("");
        if found.starts_with(expected.as_str()) {
            return;
        }
        let line = if found.is_empty() {
            "IDD_Version (missing)".to_owned()
        } else {
            format!("IDD_Version {}", found)
        };
        self.diagnostics.emit(
            Diagnostic::severe(Category::Version, 0, "IP: Possible incorrect IDD File")
                .continued(format!("{} not the same as expected =\"{}\"", line, expected)),
        );
    }

    fn check_required_objects(&mut self) {
        for def in &self.schema.object_defs {
            if def.required_object && def.num_found == 0 {
                self.diagnostics.emit(
                    Diagnostic::severe(
                        Category::Validation,
                        0,
                        format!("IP: No items found for Required Object={}", def.name),
                    )
                    .with_object(&def.name),
                );
            }
        }
    }

    fn check_data_version(&mut self) {
        let Some(expected) = &self.config.match_version else {
            return;
        };
        let Some(def) = self.schema.find_object("VERSION") else {
            return;
        };
        let Some(record) = self.records.instances_of(def).next() else {
            return;
        };
        let found = record.alphas().first().map_or("", |a| a.value.as_str());
        if !found.starts_with(expected.to_uppercase().as_str()) {
            self.diagnostics.emit(
                Diagnostic::warning(
                    Category::Version,
                    record.line,
                    format!(
                        "IP: Version: in IDF=\"{}\" not the same as expected=\"{}\"",
                        found, expected
                    ),
                )
                .with_object("VERSION"),
            );
        }
    }

    pub fn config(&self) -> &ProcessorConfig {
        &self.config
    }

    pub fn schema(&self) -> &SchemaRegistry {
        &self.schema
    }

    pub fn records(&self) -> &RecordStore {
        &self.records
    }

    pub fn legacy_objects(&self) -> &LegacyTable {
        &self.legacy
    }

    pub fn output_variables(&self) -> &OutputVariableRequests {
        &self.output_vars
    }

    pub fn output_variables_mut(&mut self) -> &mut OutputVariableRequests {
        &mut self.output_vars
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// True once any diagnostic has been emitted during this run.
    pub fn overall_error_flag(&self) -> bool {
        self.diagnostics.error_flag()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const IDD: &str = "\
!IDD_Version 8.3.0
Lead Input;
Version,
  \\unique-object
  A1 ; \\field Version Identifier
Building,
  \\unique-object
  \\required-object
  \\min-fields 2
  A1 , \\field Name
  \\default NONE
  N1 ; \\field North Axis
  \\default 0.0
Output:Variable,
  A1 , \\field Key Value
  A2 ; \\field Variable Name
";

    fn processor(config: ProcessorConfig) -> InputProcessor {
        let mut ip = InputProcessor::new(config);
        let outcome = ip.process_dictionary(Cursor::new(IDD)).unwrap();
        assert!(!outcome.errors_found, "{}", ip.diagnostics().render());
        ip
    }

    #[test]
    fn missing_required_object_is_reported() {
        let mut ip = processor(ProcessorConfig::default());
        let outcome = ip.process_data(Cursor::new("Version, 8.3;\n")).unwrap();
        assert_eq!(outcome.severe, 1);
        assert_eq!(
            ip.diagnostics().render(),
            "   ** Severe  ** IP: No items found for Required Object=BUILDING\n"
        );
        assert!(ip.overall_error_flag());
    }

    #[test]
    fn required_check_can_be_disabled() {
        let config = ProcessorConfig {
            check_required_objects: false,
            ..ProcessorConfig::default()
        };
        let mut ip = processor(config);
        let outcome = ip.process_data(Cursor::new("Version, 8.3;\n")).unwrap();
        assert!(!outcome.errors_found);
        assert!(!ip.overall_error_flag());
    }

    #[test]
    fn dictionary_version_mismatch_is_severe() {
        let mut ip = InputProcessor::new(ProcessorConfig::default().with_match_version("2.0"));
        let outcome = ip.process_dictionary(Cursor::new(IDD)).unwrap();
        assert_eq!(outcome.severe, 1);
        assert_eq!(
            ip.diagnostics().render(),
            "   ** Severe  ** IP: Possible incorrect IDD File\n   \
             **   ~~~   ** IDD_Version 8.3.0 not the same as expected =\"2.0\"\n"
        );
    }

    #[test]
    fn data_version_mismatch_is_a_warning() {
        let mut ip = processor(ProcessorConfig::default().with_match_version("8.3"));
        let outcome = ip
            .process_data(Cursor::new("Version, 9.1;\nBuilding, Office;\n"))
            .unwrap();
        assert_eq!(outcome.warnings, 1);
        assert_eq!(outcome.severe, 0);
        let d = &ip.diagnostics().entries()[0];
        assert_eq!(d.category, Category::Version);
        assert_eq!(
            d.message,
            "IP: Version: in IDF=\"9.1\" not the same as expected=\"8.3\""
        );
    }

    #[test]
    fn matching_versions_are_quiet() {
        let mut ip = processor(ProcessorConfig::default().with_match_version("8.3"));
        let outcome = ip
            .process_data(Cursor::new("Version, 8.3;\nBuilding, Office;\n"))
            .unwrap();
        assert!(!outcome.errors_found, "{}", ip.diagnostics().render());
    }

    #[test]
    fn prescan_runs_after_data() {
        let mut ip = processor(ProcessorConfig::default());
        ip.process_data(Cursor::new(
            "Building, Office;\nOutput:Variable, *, Zone Mean Air Temperature;\n",
        ))
        .unwrap();
        assert!(ip
            .output_variables()
            .contains("ZONE 1", "ZONE MEAN AIR TEMPERATURE"));

        let config = ProcessorConfig {
            prescan_output_variables: false,
            ..ProcessorConfig::default()
        };
        let mut quiet = processor(config);
        quiet
            .process_data(Cursor::new(
                "Building, Office;\nOutput:Variable, *, Zone Mean Air Temperature;\n",
            ))
            .unwrap();
        assert!(quiet.output_variables().is_empty());
    }

    #[test]
    fn second_data_pass_replaces_the_first() {
        let config = ProcessorConfig {
            check_required_objects: false,
            ..ProcessorConfig::default()
        };
        let mut ip = processor(config);
        ip.process_data(Cursor::new("Version, 8.3;\nBuilding, A;\n"))
            .unwrap();
        let outcome = ip
            .process_data(Cursor::new("Version, 8.3;\nBuilding, B;\n"))
            .unwrap();
        assert!(!outcome.errors_found, "{}", ip.diagnostics().render());
        assert_eq!(ip.records().len(), 2);
        assert_eq!(ip.schema().object_def("BUILDING").map(|d| d.num_found), Some(1));
        assert_eq!(ip.get_object_item("Building", 1).unwrap().alphas(), vec!["B"]);
    }

    #[test]
    fn legacy_redirect_can_be_disabled() {
        let config = ProcessorConfig {
            legacy_objects: false,
            check_required_objects: false,
            ..ProcessorConfig::default()
        };
        let mut ip = processor(config);
        assert!(ip.legacy_objects().is_empty());
        ip.process_data(Cursor::new("Airflow Model, x;\n")).unwrap();
        assert_eq!(
            ip.diagnostics().entries()[0].message,
            "IP: IDF line~1 Did not find \"AIRFLOW MODEL\" in list of Objects"
        );
    }
}
