//! Pass 4: output-variable pre-scan -- walk the parsed report-request
//! objects and register every (key, variable) pair they ask for.

use crate::output_vars::OutputVariableRequests;
use crate::pass1_dictionary::SchemaRegistry;
use crate::record::{IdfRecord, RecordStore};

const EXPAND_EVERY_PRESET: &[&str] = &[
    "ALLMONTHLY",
    "ALLSUMMARYANDMONTHLY",
    "ALLSUMMARYMONTHLYANDSIZINGPERIOD",
];

/// Alpha value at 1-based `n`, if the record has it.
fn alpha(record: &IdfRecord, n: usize) -> Option<&str> {
    n.checked_sub(1)
        .and_then(|i| record.alphas().get(i))
        .map(|a| a.value.as_str())
}

/// (key, variable) pairs from consecutive alphas starting at 1-based `from`.
fn alpha_pairs(record: &IdfRecord, from: usize) -> Vec<(&str, &str)> {
    let values: Vec<&str> = record
        .alphas()
        .iter()
        .skip(from.saturating_sub(1))
        .map(|a| a.value.as_str())
        .collect();
    values.chunks_exact(2).map(|pair| (pair[0], pair[1])).collect()
}

fn records_of<'s>(
    schema: &SchemaRegistry,
    store: &'s RecordStore,
    object: &str,
) -> impl Iterator<Item = &'s IdfRecord> {
    schema
        .find_object(object)
        .into_iter()
        .flat_map(move |d| store.instances_of(d))
}

pub fn pre_scan_reporting_variables(
    schema: &SchemaRegistry,
    store: &RecordStore,
    requests: &mut OutputVariableRequests,
) {
    for kind in ["OUTPUT:VARIABLE", "OUTPUT:TABLE:TIMEBINS"] {
        for record in records_of(schema, store, kind) {
            if let Some(variable) = alpha(record, 2) {
                requests.insert(alpha(record, 1).unwrap_or(""), variable);
            }
        }
    }

    for record in records_of(schema, store, "OUTPUT:TABLE:MONTHLY") {
        let variables = record.alphas().iter().skip(1).step_by(2);
        for variable in variables {
            requests.insert("*", &variable.value);
        }
    }

    for record in records_of(schema, store, "ENERGYMANAGEMENTSYSTEM:SENSOR") {
        if let Some(variable) = alpha(record, 3) {
            requests.insert(alpha(record, 2).unwrap_or(""), variable);
        }
    }

    for (kind, first_pair) in [("METER:CUSTOM", 3), ("METER:CUSTOMDECREMENT", 4)] {
        for record in records_of(schema, store, kind) {
            requests.insert_all(alpha_pairs(record, first_pair));
        }
    }

    for record in records_of(schema, store, "OUTPUT:TABLE:SUMMARYREPORTS") {
        for report in record.alphas() {
            let name = report.value.trim();
            if EXPAND_EVERY_PRESET
                .iter()
                .any(|all| all.eq_ignore_ascii_case(name))
            {
                requests.expand_all_presets();
            } else if !name.is_empty() && !requests.expand_preset(name) {
                tracing::trace!(report = name, "summary report is not a monthly preset");
            }
        }
    }

    tracing::debug!(requests = requests.len(), "output variables pre-scanned");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::Diagnostics;
    use crate::lexer::LineReader;
    use crate::pass1_dictionary::parse_dictionary;
    use crate::pass3_records::parse_data;
    use std::io::Cursor;

    const IDD: &str = "\
Output:Variable,
  A1, \\field Key Value
  A2, \\field Variable Name
  A3; \\field Reporting Frequency
Output:Table:Monthly,
  \\extensible:2
  A1, \\field Name
  N1, \\field Digits After Decimal
  A2, \\field Variable or Meter 1 Name
  A3; \\field Aggregation Type for Variable or Meter 1
EnergyManagementSystem:Sensor,
  A1, \\field Name
  A2, \\field Output:Variable or Output:Meter Index Key Name
  A3; \\field Output:Variable or Output:Meter Name
Meter:Custom,
  \\extensible:2
  A1, \\field Name
  A2, \\field Fuel Type
  A3, \\field Key Name 1
  A4; \\field Output Variable or Meter Name 1
Meter:CustomDecrement,
  \\extensible:2
  A1, \\field Name
  A2, \\field Fuel Type
  A3, \\field Source Meter Name
  A4, \\field Key Name 1
  A5; \\field Output Variable or Meter Name 1
Output:Table:SummaryReports,
  \\extensible:1
  A1; \\field Report 1 Name
";

    fn prescan(data: &str) -> OutputVariableRequests {
        let mut diags = Diagnostics::new();
        let mut schema =
            parse_dictionary(&mut LineReader::new(Cursor::new(IDD)), &mut diags).unwrap();
        let store = parse_data(
            &mut LineReader::new(Cursor::new(data.to_owned())),
            &mut schema,
            None,
            &mut diags,
        )
        .unwrap();
        assert!(diags.is_empty(), "{}", diags.render());
        let mut requests = OutputVariableRequests::new();
        pre_scan_reporting_variables(&schema, &store, &mut requests);
        requests
    }

    #[test]
    fn output_variable_star_and_blank_keys() {
        let req = prescan(
            "Output:Variable,*,Site Outdoor Air Drybulb Temperature,timestep;\n\
             Output:Variable,,Site Outdoor Air Drybulb Temperature,hourly;\n",
        );
        assert_eq!(req.len(), 1);
        assert!(req.contains("*", "SITE OUTDOOR AIR DRYBULB TEMPERATURE"));
    }

    #[test]
    fn monthly_table_variables_use_wildcard_key() {
        let req = prescan(
            "Output:Table:Monthly, Report, 2, Zone Mean Air Temperature, Average, Fan Electric Energy, SumOrAverage;\n",
        );
        assert!(req.contains("ANY ZONE", "ZONE MEAN AIR TEMPERATURE"));
        assert!(req.contains("*", "FAN ELECTRIC ENERGY"));
        assert!(!req.contains("*", "AVERAGE"));
        assert_eq!(req.len(), 2);
    }

    #[test]
    fn sensors_and_custom_meters() {
        let req = prescan(
            "EnergyManagementSystem:Sensor, S1, Zone 1, Zone Mean Air Temperature;\n\
             Meter:Custom, M1, Electricity, Fan 1, Fan Electric Energy, Pump 1, Pump Electric Energy;\n\
             Meter:CustomDecrement, D1, Electricity, Electricity:Facility, Chiller 1, Chiller Electric Energy;\n",
        );
        assert!(req.contains("ZONE 1", "ZONE MEAN AIR TEMPERATURE"));
        assert!(!req.contains("ZONE 2", "ZONE MEAN AIR TEMPERATURE"));
        assert!(req.contains("FAN 1", "FAN ELECTRIC ENERGY"));
        assert!(req.contains("PUMP 1", "PUMP ELECTRIC ENERGY"));
        assert!(req.contains("CHILLER 1", "CHILLER ELECTRIC ENERGY"));
        assert!(!req.contains("ELECTRICITY", "ELECTRICITY:FACILITY"));
        assert_eq!(req.len(), 4);
    }

    #[test]
    fn summary_reports_expand_presets() {
        let one = prescan("Output:Table:SummaryReports, AllSummary, FanReportMonthly;\n");
        assert_eq!(one.len(), 3);
        assert!(one.contains("*", "FAN RISE IN AIR TEMPERATURE"));

        let all = prescan("Output:Table:SummaryReports, AllSummaryAndMonthly;\n");
        assert!(all.contains("*", "ZONE MECHANICAL VENTILATION AIR CHANGES PER HOUR"));
        assert!(all.contains("*", "CHILLER COP"));
    }
}
