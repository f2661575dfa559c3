//! Parsed data records and the store that holds them in file order.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlphaValue {
    pub value: String,
    /// The field was empty in the data stream.
    pub blank: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NumericValue {
    pub value: f64,
    /// The field was empty in the data stream, or padded in.
    pub blank: bool,
}

/// One object instance from the data stream.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IdfRecord {
    /// Upper-cased object name.
    pub name: String,
    /// 0-based index of the object definition in the schema registry.
    #[serde(skip)]
    pub object_def: usize,
    /// Line the object started on.
    pub line: u32,
    alphas: Vec<AlphaValue>,
    numbers: Vec<NumericValue>,
}

impl IdfRecord {
    pub fn new(name: &str, object_def: usize, line: u32) -> Self {
        IdfRecord {
            name: name.to_owned(),
            object_def,
            line,
            alphas: Vec::new(),
            numbers: Vec::new(),
        }
    }

    /// 1-based back-reference to the object definition.
    pub fn object_def_ptr(&self) -> usize {
        self.object_def + 1
    }

    pub fn num_alphas(&self) -> usize {
        self.alphas.len()
    }

    pub fn num_numbers(&self) -> usize {
        self.numbers.len()
    }

    pub fn alphas(&self) -> &[AlphaValue] {
        &self.alphas
    }

    pub fn numbers(&self) -> &[NumericValue] {
        &self.numbers
    }

    pub fn alpha_values(&self) -> Vec<&str> {
        self.alphas.iter().map(|a| a.value.as_str()).collect()
    }

    pub fn alpha_blanks(&self) -> Vec<bool> {
        self.alphas.iter().map(|a| a.blank).collect()
    }

    pub fn number_values(&self) -> Vec<f64> {
        self.numbers.iter().map(|n| n.value).collect()
    }

    pub fn numeric_blanks(&self) -> Vec<bool> {
        self.numbers.iter().map(|n| n.blank).collect()
    }

    pub fn push_alpha(&mut self, value: String, blank: bool) {
        self.alphas.push(AlphaValue { value, blank });
    }

    pub fn push_number(&mut self, value: f64, blank: bool) {
        self.numbers.push(NumericValue { value, blank });
    }
}

/// A named section as it appeared in the data stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionOnFile {
    pub name: String,
    /// 1-based ordinal of the most recent record when the section opened,
    /// 0 if none.
    pub first_record: usize,
    /// Record count when an `End` line closed the section, 0 while open.
    pub last_record: usize,
    pub first_line_no: u32,
}

#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<IdfRecord>,
    /// Record positions (0-based) per object definition, in file order.
    by_object: Vec<Vec<usize>>,
    sections: Vec<SectionOnFile>,
}

impl RecordStore {
    pub fn new(num_object_defs: usize) -> Self {
        RecordStore {
            records: Vec::new(),
            by_object: vec![Vec::new(); num_object_defs],
            sections: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[IdfRecord] {
        &self.records
    }

    /// Record by 1-based ordinal.
    pub fn get(&self, ordinal: usize) -> Option<&IdfRecord> {
        ordinal.checked_sub(1).and_then(|i| self.records.get(i))
    }

    /// Append a record and return its 1-based ordinal.
    pub fn push(&mut self, record: IdfRecord) -> usize {
        let def = record.object_def;
        if def >= self.by_object.len() {
            self.by_object.resize(def + 1, Vec::new());
        }
        self.by_object[def].push(self.records.len());
        self.records.push(record);
        self.records.len()
    }

    /// Records of one object definition, in file order.
    pub fn instances_of(&self, object_def: usize) -> impl Iterator<Item = &IdfRecord> {
        self.by_object
            .get(object_def)
            .map(|v| v.as_slice())
            .unwrap_or_default()
            .iter()
            .map(|&i| &self.records[i])
    }

    pub fn count_of(&self, object_def: usize) -> usize {
        self.by_object.get(object_def).map_or(0, Vec::len)
    }

    /// 1-based ordinal of the first record of `object_def`, 0 if none.
    pub fn start_record(&self, object_def: usize) -> usize {
        self.by_object
            .get(object_def)
            .and_then(|v| v.first())
            .map_or(0, |&i| i + 1)
    }

    pub fn sections(&self) -> &[SectionOnFile] {
        &self.sections
    }

    pub fn open_section(&mut self, name: &str, line: u32) {
        self.sections.push(SectionOnFile {
            name: name.to_owned(),
            first_record: self.records.len(),
            last_record: 0,
            first_line_no: line,
        });
    }

    /// Close the most recent open section named `name`. Returns false when
    /// there is none.
    pub fn close_section(&mut self, name: &str) -> bool {
        let count = self.records.len();
        match self
            .sections
            .iter_mut()
            .rev()
            .find(|s| s.last_record == 0 && s.name.eq_ignore_ascii_case(name))
        {
            Some(section) => {
                section.last_record = count;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinals_are_one_based_per_object() {
        let mut store = RecordStore::new(3);
        assert_eq!(store.push(IdfRecord::new("VERSION", 0, 1)), 1);
        assert_eq!(store.push(IdfRecord::new("BUILDING", 2, 2)), 2);
        assert_eq!(store.push(IdfRecord::new("BUILDING", 2, 3)), 3);

        assert_eq!(store.start_record(0), 1);
        assert_eq!(store.start_record(2), 2);
        assert_eq!(store.start_record(1), 0);
        assert_eq!(store.count_of(2), 2);
        assert_eq!(store.instances_of(2).map(|r| r.line).collect::<Vec<_>>(), vec![2, 3]);
        assert_eq!(store.get(0), None);
        assert_eq!(store.get(3).map(|r| r.object_def_ptr()), Some(3));
    }

    #[test]
    fn sections_record_position_and_close() {
        let mut store = RecordStore::new(1);
        store.open_section("LEAD INPUT", 4);
        store.push(IdfRecord::new("VERSION", 0, 5));
        store.push(IdfRecord::new("VERSION", 0, 6));
        assert!(store.close_section("lead input"));
        assert!(!store.close_section("LEAD INPUT"));
        let s = &store.sections()[0];
        assert_eq!((s.first_record, s.last_record, s.first_line_no), (0, 2, 4));
    }

    #[test]
    fn value_and_blank_views_stay_parallel() {
        let mut r = IdfRecord::new("SITE:LOCATION", 0, 1);
        r.push_alpha("CHICAGO".into(), false);
        r.push_number(41.77, false);
        r.push_number(0.0, true);
        assert_eq!(r.num_alphas(), r.alpha_blanks().len());
        assert_eq!(r.number_values(), vec![41.77, 0.0]);
        assert_eq!(r.numeric_blanks(), vec![false, true]);
    }
}
