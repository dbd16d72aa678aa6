use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::DomainValue;

/// One row of the bound dataset, keyed by field name in insertion order.
pub type Record = IndexMap<String, DomainValue>;

/// Tabular data shared by the background chart and the slider scale.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    #[must_use]
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Builds a two-field dataset from `(x, y)` pairs.
    #[must_use]
    pub fn from_pairs<X, Y>(
        x_field: &str,
        y_field: &str,
        pairs: impl IntoIterator<Item = (X, Y)>,
    ) -> Self
    where
        X: Into<DomainValue>,
        Y: Into<DomainValue>,
    {
        let records = pairs
            .into_iter()
            .map(|(x, y)| {
                let mut record = Record::with_capacity(2);
                record.insert(x_field.to_owned(), x.into());
                record.insert(y_field.to_owned(), y.into());
                record
            })
            .collect();
        Self { records }
    }

    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Values of `field` in record order, skipping records that lack it.
    pub fn field_values<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a DomainValue> {
        self.records.iter().filter_map(move |record| record.get(field))
    }

    /// `(x, y)` value pairs for records that carry both fields.
    pub fn field_pairs<'a>(
        &'a self,
        x_field: &'a str,
        y_field: &'a str,
    ) -> impl Iterator<Item = (&'a DomainValue, &'a DomainValue)> {
        self.records
            .iter()
            .filter_map(move |record| Some((record.get(x_field)?, record.get(y_field)?)))
    }
}

impl From<Vec<Record>> for Dataset {
    fn from(records: Vec<Record>) -> Self {
        Self::new(records)
    }
}
