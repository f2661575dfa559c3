/// Schema types produced by the dictionary pass.
/// Every object definition keeps its per-field metadata in one sequence of
/// [`FieldDef`]s, so the field count, labels, defaults and range checks can
/// never drift apart.
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FieldKind {
    Alpha,
    Numeric,
}

impl FieldKind {
    pub fn sigil(self) -> char {
        match self {
            FieldKind::Alpha => 'A',
            FieldKind::Numeric => 'N',
        }
    }
}

/// Declared `\type` of a field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum FieldType {
    #[default]
    Unspecified,
    Choice,
    Alpha,
    Integer,
    Real,
    ObjectList,
    ExternalList,
    Node,
}

impl FieldType {
    pub fn parse(value: &str) -> Option<FieldType> {
        match value.trim().to_ascii_lowercase().as_str() {
            "choice" => Some(FieldType::Choice),
            "alpha" => Some(FieldType::Alpha),
            "integer" => Some(FieldType::Integer),
            "real" => Some(FieldType::Real),
            "object-list" => Some(FieldType::ObjectList),
            "external-list" => Some(FieldType::ExternalList),
            "node" => Some(FieldType::Node),
            _ => None,
        }
    }
}

/// Numeric constraints for one field.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RangeCheck {
    pub minimum: Option<f64>,
    pub min_exclusive: bool,
    pub maximum: Option<f64>,
    pub max_exclusive: bool,
    pub autosizable: bool,
    pub autocalculatable: bool,
    pub default: Option<f64>,
}

impl RangeCheck {
    pub fn has_limits(&self) -> bool {
        self.minimum.is_some() || self.maximum.is_some()
    }

    pub fn contains(&self, value: f64) -> bool {
        let above = match self.minimum {
            Some(min) if self.min_exclusive => value > min,
            Some(min) => value >= min,
            None => true,
        };
        let below = match self.maximum {
            Some(max) if self.max_exclusive => value < max,
            Some(max) => value <= max,
            None => true,
        };
        above && below
    }

    /// Human-readable range, e.g. `>0 and <=1`.
    pub fn describe(&self) -> String {
        let lower = self
            .minimum
            .map(|min| format!("{}{}", if self.min_exclusive { ">" } else { ">=" }, min));
        let upper = self
            .maximum
            .map(|max| format!("{}{}", if self.max_exclusive { "<" } else { "<=" }, max));
        match (lower, upper) {
            (Some(l), Some(u)) => format!("{} and {}", l, u),
            (Some(l), None) => l,
            (None, Some(u)) => u,
            (None, None) => String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldDef {
    pub kind: FieldKind,
    /// Designator as written in the dictionary, e.g. `A1` or `N12`.
    pub designator: String,
    /// `\field` label; empty when undeclared.
    pub label: String,
    pub field_type: FieldType,
    /// `\key` values for choice fields, in declaration order.
    pub keys: Vec<String>,
    /// Raw `\default` text.
    pub default: Option<String>,
    pub required: bool,
    pub retain_case: bool,
    /// Numeric limits; unused for alpha fields.
    pub range: RangeCheck,
}

impl FieldDef {
    pub fn new(kind: FieldKind, designator: impl Into<String>) -> Self {
        FieldDef {
            kind,
            designator: designator.into(),
            label: String::new(),
            field_type: FieldType::Unspecified,
            keys: Vec::new(),
            default: None,
            required: false,
            retain_case: false,
            range: RangeCheck::default(),
        }
    }

    pub fn is_alpha(&self) -> bool {
        self.kind == FieldKind::Alpha
    }

    /// Default value for an alpha field, upper-cased unless the field
    /// retains case. Empty when no default is declared.
    pub fn alpha_default(&self) -> String {
        match &self.default {
            Some(d) if self.retain_case => d.clone(),
            Some(d) => d.to_uppercase(),
            None => String::new(),
        }
    }

    /// Default value for a numeric field, 0 when no default is declared.
    pub fn numeric_default(&self) -> f64 {
        self.range.default.unwrap_or(0.0)
    }

    /// Copy of this field for the next repetition of an extensible block.
    fn next_repetition(&self, designator_number: usize) -> FieldDef {
        let mut next = self.clone();
        next.designator = format!("{}{}", self.kind.sigil(), designator_number);
        next.label = bump_repetition_index(&self.label);
        next
    }
}

/// Replace the first run of digits in `label` with its successor:
/// `Vertex 4 X-coordinate` becomes `Vertex 5 X-coordinate`.
pub fn bump_repetition_index(label: &str) -> String {
    let Some(start) = label.find(|c: char| c.is_ascii_digit()) else {
        return label.to_owned();
    };
    let end = label[start..]
        .find(|c: char| !c.is_ascii_digit())
        .map_or(label.len(), |e| start + e);
    match label[start..end].parse::<u64>() {
        Ok(n) => format!("{}{}{}", &label[..start], n + 1, &label[end..]),
        Err(_) => label.to_owned(),
    }
}

/// One object type declared in the dictionary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObjectDef {
    /// Upper-cased object name.
    pub name: String,
    pub group: Option<String>,
    pub min_num_fields: usize,
    pub name_alpha1: bool,
    pub unique_object: bool,
    pub required_object: bool,
    pub extensible_object: bool,
    /// Number of trailing fields repeated per extensible block.
    pub extensible_num: usize,
    pub last_extend_alpha: usize,
    pub last_extend_num: usize,
    /// Index into the registry's obsolete-replacement list.
    pub obs_ptr: Option<usize>,
    /// Instances seen in the data stream.
    pub num_found: usize,
    fields: Vec<FieldDef>,
    num_alpha: usize,
    num_numeric: usize,
}

impl ObjectDef {
    pub fn new(name: &str) -> Self {
        ObjectDef {
            name: name.trim().to_uppercase(),
            group: None,
            min_num_fields: 0,
            name_alpha1: false,
            unique_object: false,
            required_object: false,
            extensible_object: false,
            extensible_num: 0,
            last_extend_alpha: 0,
            last_extend_num: 0,
            obs_ptr: None,
            num_found: 0,
            fields: Vec::new(),
            num_alpha: 0,
            num_numeric: 0,
        }
    }

    pub fn fields(&self) -> &[FieldDef] {
        &self.fields
    }

    pub fn field(&self, index: usize) -> Option<&FieldDef> {
        self.fields.get(index)
    }

    pub(crate) fn last_field_mut(&mut self) -> Option<&mut FieldDef> {
        self.fields.last_mut()
    }

    pub fn num_params(&self) -> usize {
        self.fields.len()
    }

    pub fn num_alpha(&self) -> usize {
        self.num_alpha
    }

    pub fn num_numeric(&self) -> usize {
        self.num_numeric
    }

    pub fn push_field(&mut self, field: FieldDef) {
        match field.kind {
            FieldKind::Alpha => self.num_alpha += 1,
            FieldKind::Numeric => self.num_numeric += 1,
        }
        self.fields.push(field);
    }

    pub fn alpha_fields(&self) -> impl Iterator<Item = &FieldDef> {
        self.fields.iter().filter(|f| f.kind == FieldKind::Alpha)
    }

    pub fn numeric_fields(&self) -> impl Iterator<Item = &FieldDef> {
        self.fields.iter().filter(|f| f.kind == FieldKind::Numeric)
    }

    /// Grow the definition by one extensible block, copying the last
    /// `extensible_num` fields with their repetition index bumped.
    /// Returns false when the object cannot grow.
    pub fn extend(&mut self) -> bool {
        let n = self.extensible_num;
        if !self.extensible_object || n == 0 || n > self.fields.len() {
            return false;
        }
        let start = self.fields.len() - n;
        let block: Vec<FieldDef> = self.fields[start..].to_vec();
        for field in block {
            let number = match field.kind {
                FieldKind::Alpha => self.num_alpha + 1,
                FieldKind::Numeric => self.num_numeric + 1,
            };
            let next = field.next_repetition(number);
            self.push_field(next);
        }
        self.last_extend_alpha = self.num_alpha;
        self.last_extend_num = self.num_numeric;
        true
    }
}

/// A bare section name from the dictionary (or an object used as one).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionDef {
    pub name: String,
    pub num_found: usize,
}

impl SectionDef {
    pub fn new(name: &str) -> Self {
        SectionDef {
            name: name.trim().to_uppercase(),
            num_found: 0,
        }
    }
}
