//! JSON snapshot of a processed input: records in file order, the
//! sections they were grouped under, and the diagnostics raised.

use crate::diagnostics::Diagnostics;
use crate::pass1_dictionary::SchemaRegistry;
use crate::record::{IdfRecord, RecordStore, SectionOnFile};
use serde_json::{json, Map, Value};

pub const SNAPSHOT_VERSION: &str = "1.0";

pub fn records_to_json(schema: &SchemaRegistry, store: &RecordStore) -> Value {
    let records: Vec<Value> = store
        .records()
        .iter()
        .enumerate()
        .map(|(i, r)| serialize_record(i + 1, r))
        .collect();
    let sections: Vec<Value> = store.sections().iter().map(serialize_section).collect();

    let mut snapshot = Map::new();
    snapshot.insert(
        "idd_version".to_owned(),
        schema
            .idd_version
            .as_ref()
            .map_or(Value::Null, |v| Value::String(v.clone())),
    );
    snapshot.insert("kind".to_owned(), Value::String("InputSnapshot".to_owned()));
    snapshot.insert("records".to_owned(), Value::Array(records));
    snapshot.insert("sections".to_owned(), Value::Array(sections));
    snapshot.insert(
        "snapshot_version".to_owned(),
        Value::String(SNAPSHOT_VERSION.to_owned()),
    );
    Value::Object(snapshot)
}

fn serialize_record(ordinal: usize, record: &IdfRecord) -> Value {
    let alphas: Vec<Value> = record
        .alphas()
        .iter()
        .map(|a| json!({ "blank": a.blank, "value": a.value }))
        .collect();
    let numbers: Vec<Value> = record
        .numbers()
        .iter()
        .map(|n| json!({ "blank": n.blank, "value": n.value }))
        .collect();
    json!({
        "alphas": alphas,
        "line": record.line,
        "name": record.name,
        "numbers": numbers,
        "object_def": record.object_def_ptr(),
        "ordinal": ordinal,
    })
}

fn serialize_section(section: &SectionOnFile) -> Value {
    json!({
        "first_line": section.first_line_no,
        "first_record": section.first_record,
        "last_record": section.last_record,
        "name": section.name,
    })
}

pub fn diagnostics_to_json(diags: &Diagnostics) -> Value {
    Value::Array(diags.entries().iter().map(|d| d.to_json_value()).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProcessorConfig;
    use crate::process::InputProcessor;
    use std::io::Cursor;

    const IDD: &str = "\
!IDD_Version 8.3.0
Simulation Data;
Zone,
  \\min-fields 2
  A1 , \\field Name
  N1 ; \\field Multiplier
  \\default 1
";

    #[test]
    fn snapshot_lists_records_and_sections() {
        let mut ip = InputProcessor::new(ProcessorConfig::default());
        ip.process(
            Cursor::new(IDD),
            Cursor::new("Simulation Data;\nZone, Core;\nEnd Simulation Data;\n"),
        )
        .unwrap();
        let v = records_to_json(ip.schema(), ip.records());
        assert_eq!(v["idd_version"], "8.3.0");
        assert_eq!(v["records"][0]["name"], "ZONE");
        assert_eq!(v["records"][0]["object_def"], 1);
        assert_eq!(v["records"][0]["ordinal"], 1);
        assert_eq!(v["records"][0]["alphas"][0]["value"], "CORE");
        assert_eq!(v["records"][0]["numbers"][0]["value"], 1.0);
        assert_eq!(v["records"][0]["numbers"][0]["blank"], true);
        assert_eq!(v["sections"][0]["name"], "SIMULATION DATA");
        assert_eq!(v["sections"][0]["first_line"], 1);
        assert_eq!(v["sections"][0]["last_record"], 1);
    }

    #[test]
    fn diagnostics_serialize_in_order() {
        let mut ip = InputProcessor::new(ProcessorConfig::default());
        ip.process(Cursor::new(IDD), Cursor::new("Roof, x;\nFloor, y;\n"))
            .unwrap();
        let v = diagnostics_to_json(ip.diagnostics());
        assert_eq!(v.as_array().map(Vec::len), Some(2));
        assert_eq!(v[0]["line"], 1);
        assert_eq!(v[1]["line"], 2);
        assert_eq!(v[1]["category"], "resolution");
    }
}
