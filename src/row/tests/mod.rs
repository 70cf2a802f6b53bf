//! Test utilities for row building and binding
//!
//! Provides destination types covering every field kind and helpers to build
//! rows with specific options.

use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::field::{FieldKind, FieldSlot, FieldValue};
use crate::options::Options;
use crate::row::Row;
use crate::{Error, Result};


/// Structured value that is not a date/time
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl FieldSlot for GeoPoint {
    fn kind(&self) -> FieldKind {
        FieldKind::Composite
    }

    fn value(&self) -> FieldValue {
        FieldValue::Other("GeoPoint")
    }

    fn assign(&mut self, field: &str, value: FieldValue) -> Result<()> {
        Err(Error::field_type_mismatch(field, "GeoPoint", value.type_name()))
    }
}

/// Destination with one field of each kind
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Member {
    pub id: String,
    pub name: String,
    pub age: i64,
    pub joined_at: DateTime<Utc>,
    pub location: GeoPoint,
    pub score: f64,
}

crate::bindable!(Member {
    "ID" => id,
    "Name" => name,
    "Age" => age,
    "JoinedAt" => joined_at,
    "Location" => location,
    "Score" => score,
});

/// Helper to build a row with default (resolved) options
pub fn row_of(pairs: &[(&str, &str)]) -> Row {
    row_with(pairs, Options::resolve(None))
}

/// Helper to build a row with specific options
pub fn row_with(pairs: &[(&str, &str)], options: Options) -> Row {
    Row::new(pairs.iter().copied(), Arc::new(options))
}
