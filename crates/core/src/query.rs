//! Read-only queries over a processed input. Ordinals at this boundary
//! are 1-based.

use crate::error::QueryError;
use crate::process::InputProcessor;
use crate::record::IdfRecord;
use crate::schema::ObjectDef;
use serde::Serialize;

/// Field-count maxima of one object definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MaxArgs {
    pub total: usize,
    pub alphas: usize,
    pub numerics: usize,
}

/// One record together with the definition it was parsed against.
#[derive(Debug, Clone, Copy)]
pub struct ObjectItem<'a> {
    record: &'a IdfRecord,
    def: &'a ObjectDef,
}

impl<'a> ObjectItem<'a> {
    pub fn record(&self) -> &'a IdfRecord {
        self.record
    }

    pub fn object_def(&self) -> &'a ObjectDef {
        self.def
    }

    pub fn num_alphas(&self) -> usize {
        self.record.num_alphas()
    }

    pub fn num_numbers(&self) -> usize {
        self.record.num_numbers()
    }

    pub fn alphas(&self) -> Vec<&'a str> {
        self.record.alpha_values()
    }

    pub fn alpha_blanks(&self) -> Vec<bool> {
        self.record.alpha_blanks()
    }

    pub fn numbers(&self) -> Vec<f64> {
        self.record.number_values()
    }

    pub fn numeric_blanks(&self) -> Vec<bool> {
        self.record.numeric_blanks()
    }

    /// Labels of every alpha field the definition declares, including
    /// those the record did not fill.
    pub fn alpha_field_names(&self) -> Vec<&'a str> {
        self.def.alpha_fields().map(|f| f.label.as_str()).collect()
    }

    pub fn numeric_field_names(&self) -> Vec<&'a str> {
        self.def.numeric_fields().map(|f| f.label.as_str()).collect()
    }
}

impl InputProcessor {
    /// Instances of `object` in the data; 0 for an unknown name.
    pub fn get_num_objects_found(&self, object: &str) -> usize {
        self.schema
            .find_object(object)
            .map_or(0, |d| self.records.count_of(d))
    }

    pub fn get_object_def_max_args(&self, object: &str) -> Result<MaxArgs, QueryError> {
        let def = self
            .schema
            .object_def(object)
            .ok_or_else(|| QueryError::UnknownObject(object.to_uppercase()))?;
        Ok(MaxArgs {
            total: def.num_params(),
            alphas: def.num_alpha(),
            numerics: def.num_numeric(),
        })
    }

    /// The `ordinal`-th instance of `object` in data order.
    pub fn get_object_item(
        &self,
        object: &str,
        ordinal: usize,
    ) -> Result<ObjectItem<'_>, QueryError> {
        let index = self
            .schema
            .find_object(object)
            .ok_or_else(|| QueryError::UnknownObject(object.to_uppercase()))?;
        let def = &self.schema.object_defs[index];
        let record = ordinal
            .checked_sub(1)
            .and_then(|i| self.records.instances_of(index).nth(i))
            .ok_or_else(|| QueryError::OrdinalOutOfRange {
                object: def.name.clone(),
                ordinal,
                found: self.records.count_of(index),
            })?;
        Ok(ObjectItem { record, def })
    }

    /// Record-store ordinal of the first instance of `object`, or 0.
    pub fn object_start_record(&self, object: &str) -> usize {
        self.schema
            .find_object(object)
            .map_or(0, |d| self.records.start_record(d))
    }
}
