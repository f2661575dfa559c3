//! Field collection across lines and per-field coercion.

use crate::diagnostics::{read_reported_line, Diagnostics};
use crate::error::{Category, Diagnostic, InputError, Stream};
use crate::lexer::{parse_number, scan, Line, LineReader};
use crate::record::{AlphaValue, NumericValue};
use crate::schema::{FieldDef, FieldType};
use crate::{AUTOCALCULATE, AUTOSIZE};
use std::io::BufRead;

/// One raw field as typed, with the line it ended on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct RawField {
    pub text: String,
    pub line: u32,
}

#[derive(Debug)]
pub(super) struct CollectedFields {
    pub fields: Vec<RawField>,
    /// False when the stream ended before the `;`.
    pub terminated: bool,
    pub last_line: u32,
}

/// Collect the fields of one object, starting with `first` (the text after
/// the object name's delimiter). Fields may span lines; text after the
/// terminating `;` is pushed back for the caller.
pub(super) fn collect_fields<R: BufRead>(
    reader: &mut LineReader<R>,
    first: &str,
    line: u32,
    diags: &mut Diagnostics,
) -> Result<CollectedFields, InputError> {
    let mut fields = Vec::new();
    let mut pending = String::new();
    let mut text = first.to_owned();
    let mut number = line;

    loop {
        let mut cur = 0;
        while let Some(pos) = scan(&text, cur) {
            append_part(&mut pending, &text[cur..pos]);
            fields.push(RawField {
                text: std::mem::take(&mut pending),
                line: number,
            });
            if text.as_bytes()[pos] == b';' {
                let rest = &text[pos + 1..];
                if !rest.trim().is_empty() {
                    reader.push_back(Line {
                        text: rest.to_owned(),
                        number,
                        comment: None,
                        truncated: false,
                    });
                }
                return Ok(CollectedFields {
                    fields,
                    terminated: true,
                    last_line: number,
                });
            }
            cur = pos + 1;
        }
        append_part(&mut pending, &text[cur.min(text.len())..]);

        let next = loop {
            match read_reported_line(reader, Stream::Data, diags)? {
                Some(next) if next.is_blank() => continue,
                other => break other,
            }
        };
        match next {
            Some(next) => {
                text = next.text;
                number = next.number;
            }
            None => {
                if !pending.is_empty() {
                    fields.push(RawField {
                        text: pending,
                        line: number,
                    });
                }
                return Ok(CollectedFields {
                    fields,
                    terminated: false,
                    last_line: number,
                });
            }
        }
    }
}

/// A field split over lines is rejoined with a single space.
fn append_part(pending: &mut String, part: &str) {
    let part = part.trim();
    if part.is_empty() {
        return;
    }
    if !pending.is_empty() {
        pending.push(' ');
    }
    pending.push_str(part);
}

/// Where a field sits, for diagnostics.
pub(super) struct FieldContext<'a> {
    pub object: &'a str,
    /// Instance name, when the object's first field is its name.
    pub instance: Option<&'a str>,
    pub line: u32,
}

impl FieldContext<'_> {
    fn describe_object(&self) -> String {
        match self.instance {
            Some(name) => format!("{}={}", self.object, name),
            None => self.object.to_owned(),
        }
    }

    fn emit(&self, field: &FieldDef, message: String, diags: &mut Diagnostics) {
        diags.emit(
            Diagnostic::severe(Category::Validation, self.line, message)
                .with_object(self.object)
                .with_field(&field.label),
        );
    }
}

/// Report a required field that ended up with no value.
pub(super) fn check_required(
    field: &FieldDef,
    blank: bool,
    ctx: &FieldContext<'_>,
    diags: &mut Diagnostics,
) {
    if field.required && blank && field.default.is_none() {
        ctx.emit(
            field,
            format!(
                "IP: IDF line~{} Missing required field [{}] ({}) in {}",
                ctx.line,
                field.designator,
                field.label,
                ctx.describe_object()
            ),
            diags,
        );
    }
}

pub(super) fn coerce_alpha(
    field: &FieldDef,
    raw: &str,
    ctx: &FieldContext<'_>,
    diags: &mut Diagnostics,
) -> AlphaValue {
    let raw = raw.trim();
    if raw.is_empty() {
        check_required(field, true, ctx, diags);
        return AlphaValue {
            value: field.alpha_default(),
            blank: true,
        };
    }
    let value = if field.retain_case {
        raw.to_owned()
    } else {
        raw.to_uppercase()
    };
    AlphaValue {
        value,
        blank: false,
    }
}

/// Coerce one numeric field. `ordinal` is the 1-based position among the
/// object's numeric fields.
pub(super) fn coerce_numeric(
    field: &FieldDef,
    ordinal: usize,
    raw: &str,
    ctx: &FieldContext<'_>,
    diags: &mut Diagnostics,
) -> NumericValue {
    let raw = raw.trim();
    if raw.is_empty() {
        check_required(field, true, ctx, diags);
        return NumericValue {
            value: field.numeric_default(),
            blank: true,
        };
    }

    let range = &field.range;
    if raw.eq_ignore_ascii_case("autosize") || raw.eq_ignore_ascii_case("autocalculate") {
        let autosize = raw.eq_ignore_ascii_case("autosize");
        let allowed = if autosize {
            range.autosizable
        } else {
            range.autocalculatable
        };
        if !allowed {
            ctx.emit(
                field,
                format!(
                    "IP: IDF line~{} Invalid Number in Numeric Field#{} ({}), value={}, in {}",
                    ctx.line,
                    ordinal,
                    field.label,
                    raw,
                    ctx.describe_object()
                ),
                diags,
            );
        }
        return NumericValue {
            value: if autosize { AUTOSIZE } else { AUTOCALCULATE },
            blank: false,
        };
    }

    let Some(value) = parse_number(raw) else {
        ctx.emit(
            field,
            format!(
                "IP: IDF line~{} Invalid Number in Numeric Field#{} ({}), value={}, in {}",
                ctx.line,
                ordinal,
                field.label,
                raw,
                ctx.describe_object()
            ),
            diags,
        );
        return NumericValue {
            value: 0.0,
            blank: false,
        };
    };

    if field.field_type == FieldType::Integer && value.fract() != 0.0 {
        ctx.emit(
            field,
            format!(
                "IP: IDF line~{} Invalid Integer in Numeric Field#{} ({}), value={}, in {}",
                ctx.line,
                ordinal,
                field.label,
                raw,
                ctx.describe_object()
            ),
            diags,
        );
    }

    if !range.contains(value) {
        ctx.emit(
            field,
            format!(
                "IP: IDF line~{} Out of range value Numeric Field#{} ({}), value={}, range={{{}}}, in {}",
                ctx.line,
                ordinal,
                field.label,
                raw,
                range.describe(),
                ctx.describe_object()
            ),
            diags,
        );
    }

    NumericValue {
        value,
        blank: false,
    }
}
