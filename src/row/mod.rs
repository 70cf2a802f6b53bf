//! Sparse CSV rows and their projection onto destination values
//!
//! A [`Row`] is one materialized record: column name to raw string, holding
//! only the columns that carried a value. Binding a row writes converted
//! values into a caller-owned [`Bindable`](crate::Bindable) destination.
//!
//! ## Architecture
//!
//! - [`record`] - Building a row from a tokenized record and column metadata
//! - [`bind`] - Kind dispatch and value conversion for [`Row::bind`]

pub mod bind;
pub mod record;

#[cfg(test)]
pub mod tests;

use crate::options::Options;
use std::collections::HashMap;
use std::sync::Arc;

/// One sparse record produced by [`Binder::read_row`](crate::Binder::read_row)
#[derive(Debug, Clone)]
pub struct Row {
    data: HashMap<String, String>,
    options: Arc<Options>,
}

impl Row {
    /// Create a row from column/value pairs.
    ///
    /// Values that are empty or equal to the options' null-marker are
    /// dropped, as they would be when reading from a source.
    pub fn new<I, K, V>(pairs: I, options: Arc<Options>) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let data = pairs
            .into_iter()
            .map(|(column, value)| (column.into(), value.into()))
            .filter(|(_, value)| !options.is_null(value))
            .collect();

        Self { data, options }
    }

    /// Raw value of a column, `None` when it was absent or null
    pub fn get(&self, column: &str) -> Option<&str> {
        self.data.get(column).map(String::as_str)
    }

    /// Check whether a column carried a value
    pub fn contains(&self, column: &str) -> bool {
        self.data.contains_key(column)
    }

    /// Number of populated columns
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Populated columns in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.data
            .iter()
            .map(|(column, value)| (column.as_str(), value.as_str()))
    }

    /// Options of the binder that produced this row
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Consume the row, keeping only its column/value map
    pub fn into_map(self) -> HashMap<String, String> {
        self.data
    }
}
