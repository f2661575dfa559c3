//! simput-core: schema-driven input processor.
//!
//! Reads a dictionary stream that declares object types and their fields,
//! then a data stream of object instances, and produces validated,
//! default-completed records plus a diagnostics stream.
//!
//! # Public API
//!
//! Key types are re-exported at the crate root for convenience:
//!
//! - [`InputProcessor`] -- run-scoped context; [`InputProcessor::process`]
//!   runs every pass
//! - [`SchemaRegistry`] -- object and section catalog (Pass 1 output)
//! - [`NameIndex`] -- case-insensitive sorted name index (Pass 2)
//! - [`RecordStore`] -- parsed records and sections (Pass 3 output)
//! - [`OutputVariableRequests`] -- requested report variables (Pass 4)
//! - [`Diagnostics`], [`Diagnostic`] -- non-fatal problems
//! - [`InputError`], [`QueryError`] -- fatal and query errors
//!
//! Individual pass entry functions are also re-exported for selective
//! pipeline execution.

/// Sentinel stored for `autosize` in numeric fields.
pub const AUTOSIZE: f64 = -99999.0;
/// Sentinel stored for `autocalculate` in numeric fields.
pub const AUTOCALCULATE: f64 = -99999.0;

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod legacy;
pub mod lexer;
pub mod output_presets;
pub mod output_vars;
pub mod pass1_dictionary;
pub mod pass2_index;
pub mod pass3_records;
pub mod pass4_prescan;
pub mod process;
pub mod query;
pub mod record;
pub mod schema;
pub mod serialize;

// ── Convenience re-exports: key types ────────────────────────────────

pub use config::ProcessorConfig;
pub use diagnostics::Diagnostics;
pub use error::{Category, Diagnostic, InputError, QueryError, Severity};
pub use legacy::LegacyTable;
pub use output_vars::OutputVariableRequests;
pub use pass1_dictionary::SchemaRegistry;
pub use pass2_index::NameIndex;
pub use process::{InputProcessor, Outcome};
pub use query::{MaxArgs, ObjectItem};
pub use record::{AlphaValue, IdfRecord, NumericValue, RecordStore, SectionOnFile};
pub use schema::{FieldDef, FieldKind, FieldType, ObjectDef, RangeCheck, SectionDef};

// ── Convenience re-exports: pipeline entry points ────────────────────

pub use pass1_dictionary::parse_dictionary;
pub use pass2_index::{find_item_in_list, find_item_in_sorted_list, setup_and_sort};
pub use pass3_records::parse_data;
pub use pass4_prescan::pre_scan_reporting_variables;
pub use serialize::{diagnostics_to_json, records_to_json};
