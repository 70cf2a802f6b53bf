//! Row construction from tokenized records
//!
//! Pairs each positional value of a record with its column name and drops
//! the values that count as null.

use super::Row;
use crate::options::{Metadata, Options};
use csv::StringRecord;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::trace;

impl Row {
    /// Build a row from one record and the binder's column metadata.
    ///
    /// Empty values and values equal to the null-marker are omitted. Positions
    /// with no column name in `metadata` are dropped. When a name repeats, the
    /// right-most populated value wins.
    pub fn from_record(record: &StringRecord, metadata: &Metadata, options: &Arc<Options>) -> Self {
        let mut data = HashMap::with_capacity(record.len());

        for (index, value) in record.iter().enumerate() {
            if options.is_null(value) {
                continue;
            }

            match metadata.get(&index) {
                Some(column) => {
                    data.insert(column.clone(), value.to_string());
                }
                None => trace!("Dropping value at position {} with no column name", index),
            }
        }

        Row {
            data,
            options: Arc::clone(options),
        }
    }
}
