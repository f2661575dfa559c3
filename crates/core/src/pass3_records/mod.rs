//! Pass 3: data parsing -- resolve each object of the data stream against
//! the schema catalog and build typed, default-completed records.
//!
//! A `Name;` line is a section: a declared section, an object used as an
//! implicit section, or an `End <Section>` marker. Anything else starts an
//! object.

mod fields;

use crate::diagnostics::{read_reported_line, Diagnostics};
use crate::error::{Category, Diagnostic, InputError, Stream};
use crate::legacy::{LegacyTable, Resolution};
use crate::lexer::{scan, Line, LineReader};
use crate::pass1_dictionary::SchemaRegistry;
use crate::record::{IdfRecord, RecordStore};
use crate::schema::{FieldKind, ObjectDef};
use fields::{check_required, coerce_alpha, coerce_numeric, collect_fields, FieldContext, RawField};
use std::io::BufRead;

/// Parse the whole data stream into a record store.
///
/// Non-fatal problems go to `diags`; only an unreadable stream is an error.
pub fn parse_data<R: BufRead>(
    reader: &mut LineReader<R>,
    schema: &mut SchemaRegistry,
    legacy: Option<&LegacyTable>,
    diags: &mut Diagnostics,
) -> Result<RecordStore, InputError> {
    let mut store = RecordStore::new(schema.object_defs.len());
    let mut pass = DataPass::new(schema, &mut store, legacy, diags);

    while let Some(line) = read_reported_line(reader, Stream::Data, pass.diags)? {
        if line.is_blank() {
            continue;
        }
        let text = line.text.as_str();
        match scan(text, 0) {
            Some(pos) if text.as_bytes()[pos] == b';' => {
                pass.validate_section(&text[..pos], line.number);
                let rest = &text[pos + 1..];
                if !rest.trim().is_empty() {
                    reader.push_back(Line {
                        text: rest.to_owned(),
                        comment: None,
                        truncated: false,
                        number: line.number,
                    });
                }
            }
            Some(pos) => {
                pass.validate_object(reader, &text[..pos], &text[pos + 1..], line.number)?;
            }
            None => {
                let name = text.trim();
                pass.diags.emit(
                    Diagnostic::severe(
                        Category::Validation,
                        line.number,
                        format!("IP: IDF line~{} Comma being inserted after:\"{}\"", line.number, name),
                    )
                    .with_object(&name.to_uppercase()),
                );
                pass.validate_object(reader, name, "", line.number)?;
            }
        }
    }

    tracing::debug!(
        records = store.len(),
        sections = store.sections().len(),
        "data parsed"
    );
    Ok(store)
}

/// Mutable state of one data parse.
pub struct DataPass<'a> {
    schema: &'a mut SchemaRegistry,
    store: &'a mut RecordStore,
    legacy: Option<&'a LegacyTable>,
    diags: &'a mut Diagnostics,
}

impl<'a> DataPass<'a> {
    pub fn new(
        schema: &'a mut SchemaRegistry,
        store: &'a mut RecordStore,
        legacy: Option<&'a LegacyTable>,
        diags: &'a mut Diagnostics,
    ) -> Self {
        DataPass {
            schema,
            store,
            legacy,
            diags,
        }
    }

    /// Handle a `Name;` line.
    pub fn validate_section(&mut self, name: &str, line: u32) {
        let upper = name.trim().to_uppercase();

        if let Some(i) = self.schema.find_section(&upper) {
            self.schema.section_defs[i].num_found += 1;
            self.store.open_section(&upper, line);
            tracing::trace!(section = %upper, line, "section");
            return;
        }

        if let Some(d) = self.schema.find_object(&upper) {
            // An object name on its own line: default-filled record plus a
            // section of the same name starting at that record.
            let i = self.schema.ensure_section(&upper);
            self.schema.section_defs[i].num_found += 1;
            let record = self.build_record(d, &[], line);
            self.finish_record(record, line);
            self.store.open_section(&upper, line);
            tracing::trace!(section = %upper, line, "implicit section");
            return;
        }

        if let Some(target) = upper.strip_prefix("END ") {
            if !self.store.close_section(target.trim()) {
                tracing::debug!(section = target.trim(), line, "end of section that was not open");
            }
            return;
        }

        self.diags.emit(
            Diagnostic::severe(
                Category::Resolution,
                line,
                format!("IP: IDF line~{} Did not find \"{}\" in list of Sections", line, upper),
            )
            .with_object(&upper),
        );
    }

    /// Parse one object whose name (and its `,`) has been scanned; `rest`
    /// is the text after the delimiter.
    pub fn validate_object<R: BufRead>(
        &mut self,
        reader: &mut LineReader<R>,
        name: &str,
        rest: &str,
        line: u32,
    ) -> Result<(), InputError> {
        let mut name = name.trim().to_owned();
        let collected = collect_fields(reader, rest, line, self.diags)?;

        if let Some(legacy) = self.legacy {
            match legacy.resolve(&name, line, self.diags) {
                Resolution::Unchanged => {}
                Resolution::Renamed(new_name) => name = new_name,
                Resolution::Dropped => return Ok(()),
            }
        }

        let upper = name.to_uppercase();
        let Some(d) = self.schema.find_object(&upper) else {
            self.diags.emit(
                Diagnostic::severe(
                    Category::Resolution,
                    line,
                    format!("IP: IDF line~{} Did not find \"{}\" in list of Objects", line, upper),
                )
                .with_object(&upper),
            );
            return Ok(());
        };

        if let Some(ptr) = self.schema.object_defs[d].obs_ptr {
            let replacement = self
                .schema
                .obsolete_replacements
                .get(ptr)
                .map(String::as_str)
                .unwrap_or("");
            self.diags.emit(
                Diagnostic::warning(
                    Category::Validation,
                    line,
                    format!(
                        "IP: Obsolete object={}, encountered.  Should be replaced with new object={}",
                        upper, replacement
                    ),
                )
                .with_object(&upper),
            );
        }

        let record = self.build_record(d, &collected.fields, line);
        if !collected.terminated {
            self.diags.emit(
                Diagnostic::severe(
                    Category::Validation,
                    collected.last_line,
                    format!(
                        "IP: IDF line~{} End of file reached while processing Object={}",
                        collected.last_line, upper
                    ),
                )
                .with_object(&upper),
            );
        }
        self.finish_record(record, line);
        Ok(())
    }

    /// Coerce `fields` against definition `d`, growing extensible
    /// definitions as needed, then pad to the minimum field count.
    fn build_record(&mut self, d: usize, fields: &[RawField], line: u32) -> IdfRecord {
        let mut record = IdfRecord::new(&self.schema.object_defs[d].name, d, line);
        let mut instance: Option<String> = None;

        for (i, raw) in fields.iter().enumerate() {
            if i >= self.schema.object_defs[d].num_params() && !self.schema.object_defs[d].extend() {
                let def = &self.schema.object_defs[d];
                self.diags.emit(
                    Diagnostic::severe(
                        Category::Validation,
                        raw.line,
                        format!(
                            "IP: IDF line~{} Maximum arguments reached for this object, trying to process ->{}<-",
                            raw.line, raw.text
                        ),
                    )
                    .with_object(&def.name)
                    .continued(format!("Object={}", def.name)),
                );
                break;
            }

            let def = &self.schema.object_defs[d];
            let Some(field) = def.field(i) else {
                break;
            };
            let ctx = FieldContext {
                object: &def.name,
                instance: instance.as_deref(),
                line: raw.line,
            };
            match field.kind {
                FieldKind::Alpha => {
                    let value = coerce_alpha(field, &raw.text, &ctx, self.diags);
                    if i == 0 && def.name_alpha1 {
                        instance = Some(value.value.clone());
                    }
                    record.push_alpha(value.value, value.blank);
                }
                FieldKind::Numeric => {
                    let ordinal = record.num_numbers() + 1;
                    let value = coerce_numeric(field, ordinal, &raw.text, &ctx, self.diags);
                    record.push_number(value.value, value.blank);
                }
            }
        }

        let def = &self.schema.object_defs[d];
        let ctx = FieldContext {
            object: &def.name,
            instance: instance.as_deref(),
            line,
        };
        pad_to_min_fields(&mut record, def, &ctx, self.diags);
        record
    }

    /// Count the instance, check uniqueness and store the record.
    fn finish_record(&mut self, record: IdfRecord, line: u32) {
        let def = &mut self.schema.object_defs[record.object_def];
        def.num_found += 1;
        if def.unique_object && def.num_found > 1 {
            self.diags.emit(
                Diagnostic::severe(
                    Category::Validation,
                    line,
                    format!(
                        "IP: IDF line~{} Multiple occurrences of Unique Object={}",
                        line, def.name
                    ),
                )
                .with_object(&def.name),
            );
        }
        tracing::trace!(
            object = %record.name,
            alphas = record.num_alphas(),
            numbers = record.num_numbers(),
            "record"
        );
        self.store.push(record);
    }
}

/// Fill fields up to `\min-fields` with their defaults. Padded alphas count
/// as present, padded numerics as blank.
fn pad_to_min_fields(
    record: &mut IdfRecord,
    def: &ObjectDef,
    ctx: &FieldContext<'_>,
    diags: &mut Diagnostics,
) {
    let present = record.num_alphas() + record.num_numbers();
    for field in def.fields().iter().take(def.min_num_fields).skip(present) {
        check_required(field, true, ctx, diags);
        match field.kind {
            FieldKind::Alpha => record.push_alpha(field.alpha_default(), false),
            FieldKind::Numeric => record.push_number(field.numeric_default(), true),
        }
    }
}
