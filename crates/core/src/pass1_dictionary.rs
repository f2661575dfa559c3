//! Pass 1: dictionary parsing -- build the schema catalog of object and
//! section definitions from the dictionary stream.
//!
//! Problems in the dictionary are reported and parsing moves on to the next
//! object, so one pass surfaces as many as possible.

use crate::diagnostics::{read_reported_line, Diagnostics};
use crate::error::{Category, Diagnostic, InputError, Stream};
use crate::lexer::{parse_number, scan, Line, LineReader};
use crate::pass2_index::{find_item_in_list, NameIndex};
use crate::schema::{FieldDef, FieldKind, FieldType, ObjectDef, SectionDef};
use crate::{AUTOCALCULATE, AUTOSIZE};
use std::io::BufRead;

/// The schema catalog.
#[derive(Debug, Clone, Default)]
pub struct SchemaRegistry {
    pub object_defs: Vec<ObjectDef>,
    pub section_defs: Vec<SectionDef>,
    /// Replacement names named by `\obsolete =>New` annotations.
    pub obsolete_replacements: Vec<String>,
    /// Version from a `!IDD_Version` comment line.
    pub idd_version: Option<String>,
    object_index: NameIndex,
}

impl SchemaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse one object definition whose name has already been scanned.
    ///
    /// `rest` is the remainder of the name line after its delimiter. Field
    /// declarations and annotations are consumed up to the terminating `;`
    /// plus any annotation lines that follow it.
    pub fn add_object_def<R: BufRead>(
        &mut self,
        reader: &mut LineReader<R>,
        name: &str,
        rest: &str,
        line: u32,
        group: Option<&str>,
        diags: &mut Diagnostics,
    ) -> Result<(), InputError> {
        let mut def = ObjectDef::new(name);
        def.group = group.map(str::to_owned);
        let mut terminated = self.consume(&mut def, rest, line, false, diags);
        let mut last_line = line;

        while let Some(next) = read_line(reader, diags)? {
            if next.is_blank() {
                continue;
            }
            // After the `;`, only annotation lines still belong to this
            // object, and `\group` always starts a new group.
            let annotation = next.text.trim_start().strip_prefix('\\');
            let belongs = annotation.is_some_and(|a| strip_keyword(a, "group").is_none());
            if terminated && !belongs {
                reader.push_back(next);
                break;
            }
            last_line = next.number;
            terminated = self.consume(&mut def, &next.text, next.number, terminated, diags);
        }

        if !terminated {
            diags.emit(
                Diagnostic::severe(
                    Category::Schema,
                    last_line,
                    format!(
                        "IP: IDD line~{} End of file reached while processing Object={}",
                        last_line, def.name
                    ),
                )
                .with_object(&def.name),
            );
            ObjectBuilder {
                def: &mut def,
                obsolete: &mut self.obsolete_replacements,
                diags,
                terminated: true,
            }
            .finalize(last_line);
        }

        tracing::trace!(object = %def.name, fields = def.num_params(), "object definition");
        self.object_defs.push(def);
        Ok(())
    }

    fn consume(
        &mut self,
        def: &mut ObjectDef,
        text: &str,
        line: u32,
        terminated: bool,
        diags: &mut Diagnostics,
    ) -> bool {
        let mut builder = ObjectBuilder {
            def,
            obsolete: &mut self.obsolete_replacements,
            diags,
            terminated,
        };
        builder.consume(text, line);
        builder.terminated
    }

    /// Register a bare section name.
    pub fn add_section_def(&mut self, name: &str, line: u32, diags: &mut Diagnostics) {
        let section = SectionDef::new(name);
        if find_item_in_list(&section.name, self.section_names()) > 0 {
            diags.emit(
                Diagnostic::severe(
                    Category::Schema,
                    line,
                    format!(
                        "IP: IDD line~{} Duplicate Section Definition, Section={}",
                        line, section.name
                    ),
                )
                .with_object(&section.name),
            );
            return;
        }
        tracing::trace!(section = %section.name, "section definition");
        self.section_defs.push(section);
    }

    /// Rebuild the sorted object index. Call once the catalog is complete.
    pub fn finish(&mut self) {
        self.object_index = NameIndex::build(self.object_defs.iter().map(|d| d.name.as_str()));
    }

    pub fn object_index(&self) -> &NameIndex {
        &self.object_index
    }

    /// 0-based index of an object definition, via the sorted index.
    pub fn find_object(&self, name: &str) -> Option<usize> {
        self.object_index.lookup(name.trim())
    }

    /// 0-based index of a section definition, via linear search.
    pub fn find_section(&self, name: &str) -> Option<usize> {
        find_item_in_list(name.trim(), self.section_names()).checked_sub(1)
    }

    pub fn object_def(&self, name: &str) -> Option<&ObjectDef> {
        self.find_object(name).map(|i| &self.object_defs[i])
    }

    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.section_defs.iter().map(|s| s.name.as_str())
    }

    /// Zero the per-run instance counts of every object and section.
    pub(crate) fn reset_counts(&mut self) {
        for def in &mut self.object_defs {
            def.num_found = 0;
        }
        for section in &mut self.section_defs {
            section.num_found = 0;
        }
    }

    /// Index of the section named `name`, registering it when new.
    pub(crate) fn ensure_section(&mut self, name: &str) -> usize {
        match self.find_section(name) {
            Some(i) => i,
            None => {
                self.section_defs.push(SectionDef::new(name));
                self.section_defs.len() - 1
            }
        }
    }

    fn has_object(&self, name: &str) -> bool {
        find_item_in_list(name, self.object_defs.iter().map(|d| d.name.as_str())) > 0
    }
}

/// Parse a whole dictionary stream into a finished registry.
pub fn parse_dictionary<R: BufRead>(
    reader: &mut LineReader<R>,
    diags: &mut Diagnostics,
) -> Result<SchemaRegistry, InputError> {
    let mut registry = SchemaRegistry::new();
    let mut group: Option<String> = None;

    while let Some(line) = read_line(reader, diags)? {
        if registry.idd_version.is_none() {
            if let Some(version) = line
                .comment
                .as_deref()
                .and_then(|c| c.trim().strip_prefix("IDD_Version"))
            {
                registry.idd_version = Some(version.trim().to_owned());
            }
        }
        if line.is_blank() {
            continue;
        }
        let text = line.text.trim_start();
        if let Some(annotation) = text.strip_prefix('\\') {
            if let Some(name) = strip_keyword(annotation, "group") {
                group = Some(name.trim().to_owned());
            }
            continue;
        }

        match scan(text, 0) {
            Some(pos) => {
                let name = text[..pos].trim();
                let rest = &text[pos + 1..];
                if name.is_empty() {
                    diags.emit(Diagnostic::severe(
                        Category::Schema,
                        line.number,
                        format!(
                            "IP: IDD line~{} Invalid line, expected object or section name ->{}<-",
                            line.number,
                            text.trim()
                        ),
                    ));
                    continue;
                }
                if text.as_bytes()[pos] == b';' {
                    registry.add_section_def(name, line.number, diags);
                    if !rest.trim().is_empty() {
                        reader.push_back(Line {
                            text: rest.to_owned(),
                            number: line.number,
                            comment: None,
                            truncated: false,
                        });
                    }
                    continue;
                }
                let upper = name.to_uppercase();
                if registry.has_object(&upper) {
                    diags.emit(
                        Diagnostic::severe(
                            Category::Schema,
                            line.number,
                            format!(
                                "IP: IDD line~{} Duplicate Object Definition, Object={}",
                                line.number, upper
                            ),
                        )
                        .with_object(&upper),
                    );
                    // Parse into a scratch registry so the body is consumed.
                    let mut scratch = SchemaRegistry::new();
                    scratch.add_object_def(reader, name, rest, line.number, None, diags)?;
                    continue;
                }
                registry.add_object_def(reader, name, rest, line.number, group.as_deref(), diags)?;
            }
            None => {
                diags.emit(Diagnostic::severe(
                    Category::Schema,
                    line.number,
                    format!(
                        "IP: IDD line~{} Invalid line, expected object or section name ->{}<-",
                        line.number,
                        text.trim()
                    ),
                ));
            }
        }
    }

    registry.finish();
    tracing::debug!(
        objects = registry.object_defs.len(),
        sections = registry.section_defs.len(),
        "dictionary parsed"
    );
    Ok(registry)
}

fn read_line<R: BufRead>(
    reader: &mut LineReader<R>,
    diags: &mut Diagnostics,
) -> Result<Option<Line>, InputError> {
    read_reported_line(reader, Stream::Dictionary, diags)
}

/// If `annotation` starts with `keyword` (case-insensitive) followed by a
/// separator or end of text, return what follows.
fn strip_keyword<'a>(annotation: &'a str, keyword: &str) -> Option<&'a str> {
    let head = annotation.get(..keyword.len())?;
    if !head.eq_ignore_ascii_case(keyword) {
        return None;
    }
    let tail = &annotation[keyword.len()..];
    match tail.chars().next() {
        None => Some(tail),
        Some(c) if c.is_whitespace() || c == ':' => Some(tail),
        Some(_) => None,
    }
}

/// Leading unsigned integer of an annotation value (`3 - repeat ...`).
fn leading_count(value: &str) -> Option<usize> {
    let digits: String = value
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

struct ObjectBuilder<'a> {
    def: &'a mut ObjectDef,
    obsolete: &'a mut Vec<String>,
    diags: &'a mut Diagnostics,
    terminated: bool,
}

impl ObjectBuilder<'_> {
    /// Consume one line of an object body: field designators with their
    /// delimiters, then at most one trailing annotation.
    fn consume(&mut self, text: &str, line: u32) {
        let mut cur = 0usize;
        loop {
            let rest = text[cur..].trim_start();
            if rest.is_empty() {
                return;
            }
            let offset = text.len() - rest.len();
            if let Some(annotation) = rest.strip_prefix('\\') {
                self.annotate(annotation.trim_end(), line);
                return;
            }
            if self.terminated {
                self.schema_error(
                    line,
                    format!(
                        "IP: IDD line~{} Unexpected text after object terminator ->{}<- in Object={}",
                        line,
                        rest.trim(),
                        self.def.name
                    ),
                );
                return;
            }
            // Delimiters inside a trailing annotation do not count.
            let segment_end = rest.find('\\').map_or(text.len(), |p| offset + p);
            match scan(&text[..segment_end], offset) {
                Some(pos) => {
                    let token = text[offset..pos].trim();
                    self.declare_field(token, line);
                    if text.as_bytes()[pos] == b';' {
                        self.terminated = true;
                        self.finalize(line);
                    }
                    cur = pos + 1;
                }
                None => {
                    let token = text[offset..segment_end].trim();
                    self.schema_error(
                        line,
                        format!(
                            "IP: IDD line~{} Missing delimiter after field ->{}<- in Object={}",
                            line, token, self.def.name
                        ),
                    );
                    if segment_end == text.len() {
                        return;
                    }
                    cur = segment_end;
                }
            }
        }
    }

    fn declare_field(&mut self, token: &str, line: u32) {
        let mut chars = token.chars();
        let kind = match chars.next().map(|c| c.to_ascii_uppercase()) {
            Some('A') => Some(FieldKind::Alpha),
            Some('N') => Some(FieldKind::Numeric),
            _ => None,
        };
        let numbered = !chars.as_str().is_empty() && chars.as_str().chars().all(|c| c.is_ascii_digit());
        match kind {
            Some(kind) if numbered => {
                self.def.push_field(FieldDef::new(kind, token.to_ascii_uppercase()));
            }
            _ => self.schema_error(
                line,
                format!(
                    "IP: IDD line~{} Invalid field designator ->{}<- in Object={}",
                    line, token, self.def.name
                ),
            ),
        }
    }

    /// Settle flags that depend on the complete field list.
    fn finalize(&mut self, line: u32) {
        self.refresh_name_alpha1();
        let def = &mut *self.def;
        if def.extensible_object {
            def.last_extend_alpha = def.num_alpha();
            def.last_extend_num = def.num_numeric();
            if def.extensible_num > def.num_params() {
                let message = format!(
                    "IP: IDD line~{} \\extensible value {} exceeds number of fields {} in Object={}",
                    line,
                    def.extensible_num,
                    def.num_params(),
                    def.name
                );
                def.extensible_object = false;
                def.extensible_num = 0;
                self.schema_error(line, message);
            }
        }
        let def = &mut *self.def;
        if def.min_num_fields > def.num_params() {
            let message = format!(
                "IP: IDD line~{} \\min-fields value {} exceeds number of fields {} in Object={}",
                line,
                def.min_num_fields,
                def.num_params(),
                def.name
            );
            def.min_num_fields = def.num_params();
            self.schema_error(line, message);
        }
    }

    fn annotate(&mut self, annotation: &str, line: u32) {
        let kw_end = annotation
            .find(|c: char| c.is_whitespace() || c == ':')
            .unwrap_or(annotation.len());
        let keyword = annotation[..kw_end].to_ascii_lowercase();
        let value = annotation[kw_end..]
            .trim_start_matches(|c: char| c.is_whitespace() || c == ':')
            .trim_end();

        match keyword.as_str() {
            "unique-object" => self.def.unique_object = true,
            "required-object" => self.def.required_object = true,
            "extensible" => match leading_count(value) {
                Some(n) if n > 0 => {
                    self.def.extensible_object = true;
                    self.def.extensible_num = n;
                    // Re-check once the object's fields are known.
                    if self.terminated {
                        self.finalize(line);
                    }
                }
                _ => self.invalid_value(&keyword, value, line),
            },
            "min-fields" => match leading_count(value) {
                Some(n) => {
                    self.def.min_num_fields = n;
                    if self.terminated {
                        self.finalize(line);
                    }
                }
                None => self.invalid_value(&keyword, value, line),
            },
            "obsolete" | "obsolete-and-replaceable" => {
                let replacement = value.split("=>").nth(1).unwrap_or("").trim();
                self.obsolete.push(replacement.to_owned());
                self.def.obs_ptr = Some(self.obsolete.len() - 1);
            }
            "field" => {
                let label = value.to_owned();
                if let Some(field) = self.current_field(&keyword, line) {
                    field.label = label;
                }
                if self.terminated || self.def.num_params() == 1 {
                    self.refresh_name_alpha1();
                }
            }
            "type" => match FieldType::parse(value) {
                Some(t) => {
                    if let Some(field) = self.current_field(&keyword, line) {
                        field.field_type = t;
                    }
                }
                None => self.invalid_value(&keyword, value, line),
            },
            "key" => {
                if let Some(field) = self.current_field(&keyword, line) {
                    field.keys.push(value.to_owned());
                }
            }
            "default" => self.set_default(value, line),
            "autosizable" => {
                if let Some(field) = self.current_numeric(&keyword, line) {
                    field.range.autosizable = true;
                }
            }
            "autocalculatable" => {
                if let Some(field) = self.current_numeric(&keyword, line) {
                    field.range.autocalculatable = true;
                }
            }
            "retaincase" => {
                if let Some(field) = self.current_field(&keyword, line) {
                    field.retain_case = true;
                }
            }
            "required-field" => {
                if let Some(field) = self.current_field(&keyword, line) {
                    field.required = true;
                }
            }
            k if k.starts_with("minimum") || k.starts_with("maximum") => {
                self.set_limit(&keyword, value, line)
            }
            other => {
                tracing::trace!(object = %self.def.name, annotation = other, "annotation ignored");
            }
        }
    }

    fn refresh_name_alpha1(&mut self) {
        let def = &mut *self.def;
        def.name_alpha1 = def
            .field(0)
            .map_or(false, |f| f.is_alpha() && f.label.to_uppercase().contains("NAME"));
    }

    fn set_default(&mut self, value: &str, line: u32) {
        let Some(field) = self.current_field("default", line) else {
            return;
        };
        field.default = Some(value.to_owned());
        if field.is_alpha() {
            return;
        }
        let parsed = if value.eq_ignore_ascii_case("autosize") {
            Some(AUTOSIZE)
        } else if value.eq_ignore_ascii_case("autocalculate") {
            Some(AUTOCALCULATE)
        } else {
            parse_number(value)
        };
        match parsed {
            Some(v) => field.range.default = Some(v),
            None => {
                field.default = None;
                self.invalid_value("default", value, line);
            }
        }
    }

    /// `\minimum`, `\minimum>`, `\maximum`, `\maximum<` and the compact
    /// `\minimum>0` spelling.
    fn set_limit(&mut self, keyword: &str, value: &str, line: u32) {
        let (is_min, tail) = match keyword.strip_prefix("minimum") {
            Some(tail) => (true, tail),
            None => (false, &keyword["maximum".len()..]),
        };
        let exclusive = tail.starts_with('<') || tail.starts_with('>');
        let inline = tail.trim_start_matches(['<', '>']);
        let text = if inline.is_empty() { value } else { inline };
        let Some(limit) = parse_number(text) else {
            self.invalid_value(keyword, text, line);
            return;
        };
        let Some(field) = self.current_numeric(keyword, line) else {
            return;
        };
        if is_min {
            field.range.minimum = Some(limit);
            field.range.min_exclusive = exclusive;
        } else {
            field.range.maximum = Some(limit);
            field.range.max_exclusive = exclusive;
        }
    }

    fn current_field(&mut self, keyword: &str, line: u32) -> Option<&mut FieldDef> {
        if self.def.num_params() == 0 {
            let message = format!(
                "IP: IDD line~{} Field annotation \\{} before any field in Object={}",
                line, keyword, self.def.name
            );
            self.schema_error(line, message);
            return None;
        }
        self.def.last_field_mut()
    }

    fn current_numeric(&mut self, keyword: &str, line: u32) -> Option<&mut FieldDef> {
        let is_alpha = self.def.fields().last().map(|f| f.is_alpha());
        if is_alpha == Some(true) {
            let designator = self
                .def
                .fields()
                .last()
                .map(|f| f.designator.clone())
                .unwrap_or_default();
            let message = format!(
                "IP: IDD line~{} Numeric annotation \\{} on alpha field {} in Object={}",
                line, keyword, designator, self.def.name
            );
            self.schema_error(line, message);
            return None;
        }
        self.current_field(keyword, line)
    }

    fn invalid_value(&mut self, keyword: &str, value: &str, line: u32) {
        let message = format!(
            "IP: IDD line~{} Invalid \\{} value ->{}<- in Object={}",
            line, keyword, value, self.def.name
        );
        self.schema_error(line, message);
    }

    fn schema_error(&mut self, line: u32, message: String) {
        let name = self.def.name.clone();
        self.diags
            .emit(Diagnostic::severe(Category::Schema, line, message).with_object(&name));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn parse(src: &str) -> (SchemaRegistry, Diagnostics) {
        let mut diags = Diagnostics::new();
        let mut reader = LineReader::new(Cursor::new(src));
        let registry = parse_dictionary(&mut reader, &mut diags).unwrap();
        (registry, diags)
    }

    #[test]
    fn truncated_section_line_is_reported_once() {
        let mut diags = Diagnostics::new();
        let mut reader = LineReader::new(Cursor::new("Lead Input;Report Data;Extra Stuff\n"))
            .with_max_line_length(23);
        let reg = parse_dictionary(&mut reader, &mut diags).unwrap();
        assert_eq!(
            reg.section_names().collect::<Vec<_>>(),
            vec!["LEAD INPUT", "REPORT DATA"]
        );
        assert_eq!(diags.len(), 1, "{}", diags.render());
        assert!(diags.entries()[0]
            .message
            .starts_with("IP: Input line longer than maximum length allowed=23"));
    }

    #[test]
    fn output_sqlite_definition() {
        let (reg, diags) = parse(
            "Output:SQLite,\n\
             \x20      \\memo Output from the simulation can be written to an SQLite file.\n\
             \x20      \\unique-object\n\
             \x20 A1 ; \\field Option Type\n\
             \x20      \\type choice\n\
             \x20      \\key Simple\n\
             \x20      \\key SimpleAndTabular\n",
        );
        assert!(diags.is_empty(), "{}", diags.render());
        assert_eq!(reg.object_defs.len(), 1);
        let def = &reg.object_defs[0];
        assert_eq!(def.name, "OUTPUT:SQLITE");
        assert_eq!(def.num_params(), 1);
        assert_eq!(def.num_alpha(), 1);
        assert_eq!(def.num_numeric(), 0);
        assert_eq!(def.min_num_fields, 0);
        assert!(!def.name_alpha1);
        assert!(def.unique_object);
        assert!(!def.required_object);
        assert!(!def.extensible_object);
        assert_eq!(def.extensible_num, 0);
        assert_eq!(def.obs_ptr, None);
        let field = &def.fields()[0];
        assert!(field.is_alpha());
        assert!(!field.required);
        assert!(!field.retain_case);
        assert_eq!(field.label, "Option Type");
        assert_eq!(field.field_type, FieldType::Choice);
        assert_eq!(field.keys, vec!["Simple", "SimpleAndTabular"]);
        assert_eq!(field.default, None);
        assert_eq!(def.num_found, 0);
    }

    #[test]
    fn sections_are_registered_in_order() {
        let (reg, diags) = parse("Lead Input;\nSimulation Data;\n");
        assert!(diags.is_empty());
        let names: Vec<&str> = reg.section_names().collect();
        assert_eq!(names, vec!["LEAD INPUT", "SIMULATION DATA"]);
        assert!(reg.section_defs.iter().all(|s| s.num_found == 0));
        assert_eq!(reg.find_section("simulation data"), Some(1));
    }

    #[test]
    fn numeric_annotations_build_range_checks() {
        let (reg, diags) = parse(
            "Humidifier:Steam:Gas,\n\
             \x20 A1, \\field Name\n\
             \x20     \\required-field\n\
             \x20 N1, \\field Rated Capacity\n\
             \x20     \\autosizable\n\
             \x20     \\minimum 0\n\
             \x20 N2; \\field Thermal Efficiency\n\
             \x20     \\minimum> 0\n\
             \x20     \\maximum 1.0\n\
             \x20     \\default 0.8\n",
        );
        assert!(diags.is_empty(), "{}", diags.render());
        let def = reg.object_def("humidifier:steam:gas").unwrap();
        assert!(def.name_alpha1);
        assert!(def.fields()[0].required);
        let cap = &def.fields()[1].range;
        assert!(cap.autosizable);
        assert_eq!(cap.minimum, Some(0.0));
        assert!(!cap.min_exclusive);
        let eff = &def.fields()[2].range;
        assert!(eff.min_exclusive);
        assert_eq!(eff.maximum, Some(1.0));
        assert_eq!(eff.default, Some(0.8));
    }

    #[test]
    fn extensible_and_min_fields_with_group_and_version() {
        let (reg, diags) = parse(
            "!IDD_Version 8.3.0\n\
             \\group Schedules\n\
             Schedule:Compact,\n\
             \x20      \\extensible:1 - repeat last field\n\
             \x20      \\min-fields 3\n\
             \x20 A1, \\field Name\n\
             \x20 A2, \\field Schedule Type Limits Name\n\
             \x20 A3; \\field Field 1\n",
        );
        assert!(diags.is_empty(), "{}", diags.render());
        assert_eq!(reg.idd_version.as_deref(), Some("8.3.0"));
        let def = &reg.object_defs[0];
        assert_eq!(def.group.as_deref(), Some("Schedules"));
        assert!(def.extensible_object);
        assert_eq!(def.extensible_num, 1);
        assert_eq!(def.min_num_fields, 3);
        assert_eq!(def.last_extend_alpha, 3);
    }

    #[test]
    fn group_line_after_object_starts_new_group() {
        let (reg, diags) = parse(
            "\\group Zones\n\
             Zone,\n\
             \x20 A1; \\field Name\n\
             \x20      \\required-field\n\
             \\group Surfaces\n\
             Wall,\n\
             \x20 A1; \\field Name\n",
        );
        assert!(diags.is_empty(), "{}", diags.render());
        assert_eq!(reg.object_defs[0].group.as_deref(), Some("Zones"));
        assert!(reg.object_defs[0].fields()[0].required);
        assert_eq!(reg.object_defs[1].group.as_deref(), Some("Surfaces"));
    }

    #[test]
    fn compact_field_lists_and_obsolete_links() {
        let (reg, diags) = parse(
            "Old:Thing,\n\
             \x20 \\obsolete =>New:Thing\n\
             \x20 A1, A2, N1;\n\
             New:Thing, A1;\n",
        );
        assert!(diags.is_empty(), "{}", diags.render());
        let old = reg.object_def("OLD:THING").unwrap();
        assert_eq!(old.num_alpha(), 2);
        assert_eq!(old.num_numeric(), 1);
        assert_eq!(old.obs_ptr, Some(0));
        assert_eq!(reg.obsolete_replacements, vec!["New:Thing"]);
        assert_eq!(reg.object_def("NEW:THING").unwrap().num_params(), 1);
    }

    #[test]
    fn errors_accumulate_and_parsing_continues() {
        let (reg, diags) = parse(
            "Thing,\n\
             \x20 \\field Orphan\n\
             \x20 X1;\n\
             Thing,\n\
             \x20 A1;\n\
             Lead Input;\n\
             Lead Input;\n\
             Other,\n\
             \x20 N1; \\minimum abc\n\
             Good, A1;\n",
        );
        // orphan annotation, bad designator, duplicate object, duplicate
        // section, bad minimum
        assert_eq!(diags.severe_count(), 5, "{}", diags.render());
        assert!(reg.object_def("GOOD").is_some());
        assert_eq!(reg.object_defs.len(), 3);
        assert_eq!(reg.section_defs.len(), 1);
        assert!(diags.render().contains("Duplicate Object Definition, Object=THING"));
    }

    #[test]
    fn unknown_annotations_are_ignored() {
        let (reg, diags) = parse(
            "Zone,\n\
             \x20 \\format vertices\n\
             \x20 A1, \\field Name\n\
             \x20     \\reference ZoneNames\n\
             \x20 N1; \\field Direction of Relative North\n\
             \x20     \\units deg\n\
             \x20     \\ip-units deg\n",
        );
        assert!(diags.is_empty(), "{}", diags.render());
        assert_eq!(reg.object_defs[0].num_params(), 2);
    }

    #[test]
    fn premature_end_inside_object_is_reported() {
        let (reg, diags) = parse("Broken,\n  A1,\n  N1,\n");
        assert_eq!(diags.severe_count(), 1);
        assert!(diags.render().contains("End of file reached while processing Object=BROKEN"));
        assert_eq!(reg.object_defs[0].num_params(), 2);
    }
}
