//! Requested output variables: (key, variable) pairs gathered before the
//! simulation runs, so unrequested variables can be skipped.

use crate::output_presets::{preset_variables, MONTHLY_PRESETS};
use std::collections::{BTreeMap, BTreeSet};

const WILDCARD: &str = "*";

fn normalize_key(key: &str) -> String {
    let key = key.trim();
    if key.is_empty() || key == WILDCARD {
        WILDCARD.to_owned()
    } else {
        key.to_uppercase()
    }
}

fn normalize_variable(variable: &str) -> String {
    variable.trim().to_uppercase()
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputVariableRequests {
    /// variable -> keys requested for it
    by_variable: BTreeMap<String, BTreeSet<String>>,
}

impl OutputVariableRequests {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one request. Blank and `*` keys both mean "every key".
    pub fn insert(&mut self, key: &str, variable: &str) {
        let variable = normalize_variable(variable);
        if variable.is_empty() {
            return;
        }
        self.by_variable
            .entry(variable)
            .or_default()
            .insert(normalize_key(key));
    }

    pub fn insert_all<'a, I>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        for (key, variable) in pairs {
            self.insert(key, variable);
        }
    }

    /// True when `variable` was requested for `key`. A stored wildcard
    /// matches any key.
    pub fn contains(&self, key: &str, variable: &str) -> bool {
        let Some(keys) = self.by_variable.get(&normalize_variable(variable)) else {
            return false;
        };
        keys.contains(WILDCARD) || keys.contains(&normalize_key(key))
    }

    /// Insert every variable of a monthly-report preset with key `*`.
    /// Returns false for an unknown preset.
    pub fn expand_preset(&mut self, preset: &str) -> bool {
        match preset_variables(preset) {
            Some(vars) => {
                for variable in vars {
                    self.insert(WILDCARD, variable);
                }
                tracing::trace!(preset, variables = vars.len(), "preset expanded");
                true
            }
            None => false,
        }
    }

    pub fn expand_all_presets(&mut self) {
        for (name, _) in MONTHLY_PRESETS {
            self.expand_preset(name);
        }
    }

    /// Number of distinct (key, variable) pairs.
    pub fn len(&self) -> usize {
        self.by_variable.values().map(BTreeSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.by_variable.is_empty()
    }

    pub fn clear(&mut self) {
        self.by_variable.clear();
    }

    /// All pairs as `(key, variable)`, ordered by variable then key.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.by_variable
            .iter()
            .flat_map(|(var, keys)| keys.iter().map(move |k| (k.as_str(), var.as_str())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_and_star_keys_share_a_bucket() {
        let mut req = OutputVariableRequests::new();
        req.insert("*", "Site Outdoor Air Drybulb Temperature");
        req.insert("", "site outdoor air drybulb temperature");
        assert_eq!(req.len(), 1);
        assert!(req.contains("*", "SITE OUTDOOR AIR DRYBULB TEMPERATURE"));
        assert!(req.contains("", "SITE OUTDOOR AIR DRYBULB TEMPERATURE"));
    }

    #[test]
    fn stored_wildcard_matches_any_key_but_not_the_reverse() {
        let mut req = OutputVariableRequests::new();
        req.insert("*", "ZONE MEAN AIR TEMPERATURE");
        req.insert("Zone 1", "ZONE AIR HUMIDITY RATIO");
        assert!(req.contains("ZONE 2", "Zone Mean Air Temperature"));
        assert!(req.contains("zone 1", "ZONE AIR HUMIDITY RATIO"));
        assert!(!req.contains("ZONE 2", "ZONE AIR HUMIDITY RATIO"));
        assert!(!req.contains("*", "ZONE AIR HUMIDITY RATIO"));
        assert!(!req.contains("*", "NOT REQUESTED"));
    }

    #[test]
    fn unknown_preset_inserts_nothing() {
        let mut req = OutputVariableRequests::new();
        assert!(!req.expand_preset("NOSUCHMONTHLY"));
        assert!(req.is_empty());
    }

    #[test]
    fn iter_yields_normalized_pairs() {
        let mut req = OutputVariableRequests::new();
        req.insert_all([("boiler 1", "Boiler Heating Energy"), ("", "Fan Electric Power")]);
        let pairs: Vec<(&str, &str)> = req.iter().collect();
        assert_eq!(
            pairs,
            vec![("BOILER 1", "BOILER HEATING ENERGY"), ("*", "FAN ELECTRIC POWER")]
        );
    }
}
