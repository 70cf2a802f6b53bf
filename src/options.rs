//! Binder configuration and its construction-time defaulting.
//!
//! [`Options`] is built once by the caller, resolved once when a
//! [`Binder`](crate::Binder) is constructed and shared read-only (behind an
//! `Arc`) with every [`Row`](crate::Row) that Binder produces.

use crate::constants::{DEFAULT_SEPARATOR, DEFAULT_TIMEZONE};
use crate::{Error, Result};
use chrono_tz::Tz;
use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;

/// Column index to column name mapping
pub type Metadata = BTreeMap<usize, String>;

/// Reader and binding configuration
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Options {
    /// Field separator; unset means the tokenizer default (comma)
    pub separator: Option<char>,

    /// Sentinel treated as "no value". Empty means no marker is configured;
    /// empty fields are always treated as null regardless.
    pub null_marker: String,

    /// Timezone used to interpret date/time values
    pub timezone: Option<Tz>,

    /// Explicit column metadata. `None` derives it from the first record.
    #[serde(deserialize_with = "header_from_names")]
    pub header: Option<Metadata>,
}

impl Options {
    /// Create empty options (every field unset)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the field separator
    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = Some(separator);
        self
    }

    /// Set the null-marker sentinel
    pub fn with_null_marker(mut self, null_marker: impl Into<String>) -> Self {
        self.null_marker = null_marker.into();
        self
    }

    /// Set the timezone used for date/time fields
    pub fn with_timezone(mut self, timezone: Tz) -> Self {
        self.timezone = Some(timezone);
        self
    }

    /// Set explicit header names; position in the iterator is the column index
    pub fn with_header<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.header = Some(names.into_iter().map(Into::into).enumerate().collect());
        self
    }

    /// Set an explicit, possibly sparse, index to name header
    pub fn with_header_map(mut self, header: Metadata) -> Self {
        self.header = Some(header);
        self
    }

    /// Fill in defaults the way Binder construction does.
    ///
    /// Supplied options get a comma separator when none was set. When no
    /// options are supplied at all, fresh empty options are used and the
    /// separator stays unset; the tokenizer falls back to its own comma
    /// default, so parsing is identical but `separator` reads back as `None`.
    /// Both paths default the timezone to UTC.
    pub fn resolve(options: Option<Options>) -> Options {
        let mut resolved = match options {
            None => Options::new(),
            Some(mut options) => {
                if options.separator.is_none() {
                    options.separator = Some(DEFAULT_SEPARATOR);
                }
                options
            }
        };

        if resolved.timezone.is_none() {
            resolved.timezone = Some(DEFAULT_TIMEZONE);
        }

        resolved
    }

    /// Timezone for date/time parsing, UTC when unset
    pub fn timezone(&self) -> Tz {
        self.timezone.unwrap_or(DEFAULT_TIMEZONE)
    }

    /// Check whether a raw field value counts as null
    pub fn is_null(&self, value: &str) -> bool {
        value.is_empty() || value == self.null_marker
    }

    /// Separator as the single byte the csv tokenizer expects
    pub fn delimiter(&self) -> Result<u8> {
        let separator = self.separator.unwrap_or(DEFAULT_SEPARATOR);
        if separator.is_ascii() {
            Ok(separator as u8)
        } else {
            Err(Error::InvalidSeparator { separator })
        }
    }
}

/// Read `header = ["id", "name"]` as `{0: "id", 1: "name"}`
fn header_from_names<'de, D>(deserializer: D) -> std::result::Result<Option<Metadata>, D::Error>
where
    D: Deserializer<'de>,
{
    let names: Option<Vec<String>> = Option::deserialize(deserializer)?;
    Ok(names.map(|names| names.into_iter().enumerate().collect()))
}
