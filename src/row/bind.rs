//! Projection of a row onto a destination value
//!
//! Each mapping pair names a source column and a destination field. The
//! destination's [`FieldKind`] selects the conversion:
//!
//! | Kind          | Conversion                                             |
//! |---------------|--------------------------------------------------------|
//! | `String`      | raw value as-is                                        |
//! | `Int64`       | base-10 signed 64-bit integer                          |
//! | `Composite`   | `YYYY-MM-DD HH:MM:SS` in the row's timezone, only when |
//! |               | the field currently holds a date/time                  |
//! | `Unsupported` | nothing                                                |
//!
//! Missing source columns, unsupported kinds and composite fields that do
//! not hold a date/time are skipped without error.

use super::Row;
use crate::constants::{DATETIME_LAYOUT, DATETIME_LAYOUT_DISPLAY};
use crate::field::{Bindable, FieldKind, FieldValue};
use crate::{Error, Result};
use chrono::{DateTime, NaiveDateTime, TimeZone, Timelike};
use chrono_tz::Tz;
use tracing::trace;

impl Row {
    /// Write mapped columns into `destination`.
    ///
    /// `mapping` yields `(source_column, destination_field)` pairs. The first
    /// unknown field or conversion failure aborts the call; fields written
    /// by earlier pairs keep their new values.
    pub fn bind<T, M, S, D>(&self, destination: &mut T, mapping: M) -> Result<()>
    where
        T: Bindable + ?Sized,
        M: IntoIterator<Item = (S, D)>,
        S: AsRef<str>,
        D: AsRef<str>,
    {
        for (source, field) in mapping {
            let field = field.as_ref();
            if let Some(value) = self.convert(&*destination, source.as_ref(), field)? {
                destination.set_field(field, value)?;
            }
        }

        Ok(())
    }

    /// Like [`Row::bind`], but writes nothing unless every pair converts.
    ///
    /// All conversions run first against the destination's current state;
    /// the writes are applied only once every pair has succeeded. The
    /// guarantee covers conversions: if the destination's own
    /// [`Bindable::set_field`] rejects a converted value, that error is
    /// returned and the fields already written keep their new values.
    pub fn bind_atomic<T, M, S, D>(&self, destination: &mut T, mapping: M) -> Result<()>
    where
        T: Bindable + ?Sized,
        M: IntoIterator<Item = (S, D)>,
        S: AsRef<str>,
        D: AsRef<str>,
    {
        let mut pending = Vec::new();

        for (source, field) in mapping {
            let field = field.as_ref();
            if let Some(value) = self.convert(&*destination, source.as_ref(), field)? {
                pending.push((field.to_string(), value));
            }
        }

        for (field, value) in pending {
            destination.set_field(&field, value)?;
        }

        Ok(())
    }

    /// Convert one column for one destination field, `None` when skipped
    fn convert<T>(&self, destination: &T, source: &str, field: &str) -> Result<Option<FieldValue>>
    where
        T: Bindable + ?Sized,
    {
        let Some(raw) = self.get(source) else {
            trace!("Column '{}' absent, leaving field {} untouched", source, field);
            return Ok(None);
        };

        match destination.field_kind(field)? {
            FieldKind::String => Ok(Some(FieldValue::String(raw.to_string()))),
            FieldKind::Int64 => raw
                .parse::<i64>()
                .map(|value| Some(FieldValue::Int64(value)))
                .map_err(|e| Error::parse_int(source, raw, e)),
            FieldKind::Composite => match destination.field_value(field)? {
                FieldValue::DateTime(_) => {
                    let parsed = parse_datetime(source, raw, self.options().timezone())?;
                    Ok(Some(FieldValue::DateTime(parsed)))
                }
                other => {
                    trace!(
                        "Field {} holds {}, not a datetime; skipping",
                        field,
                        other.type_name()
                    );
                    Ok(None)
                }
            },
            FieldKind::Unsupported => {
                trace!("Field {} has an unsupported kind; skipping", field);
                Ok(None)
            }
        }
    }
}

/// Parse `YYYY-MM-DD HH:MM:SS` as a local time in `timezone`.
///
/// Every field is fixed-width and zero-padded; signs, surrounding
/// whitespace and leap seconds are rejected. Ambiguous local times (DST
/// fold) resolve to the earlier instant; local times inside a DST gap are
/// an error.
pub fn parse_datetime(column: &str, raw: &str, timezone: Tz) -> Result<DateTime<Tz>> {
    check_layout(raw).map_err(|reason| Error::parse_datetime(column, raw, reason))?;

    let naive = NaiveDateTime::parse_from_str(raw, DATETIME_LAYOUT)
        .map_err(|e| Error::parse_datetime(column, raw, e.to_string()))?;

    // chrono accepts second 60 as a leap second
    if naive.nanosecond() >= 1_000_000_000 {
        return Err(Error::parse_datetime(column, raw, "second out of range"));
    }

    timezone
        .from_local_datetime(&naive)
        .earliest()
        .ok_or_else(|| Error::nonexistent_local_time(column, raw, timezone.to_string()))
}

/// Check the fixed-width shape of `raw` against `DATETIME_LAYOUT_DISPLAY`
fn check_layout(raw: &str) -> std::result::Result<(), String> {
    let bytes = raw.as_bytes();
    let pattern = DATETIME_LAYOUT_DISPLAY.as_bytes();

    if !raw.is_ascii() {
        return Err("contains non-ASCII characters".to_string());
    }

    if bytes.len() != pattern.len() {
        return Err(format!(
            "expected {} characters, found {}",
            pattern.len(),
            bytes.len()
        ));
    }

    for (position, (&byte, &expected)) in bytes.iter().zip(pattern).enumerate() {
        let matches = if expected.is_ascii_alphabetic() {
            byte.is_ascii_digit()
        } else {
            byte == expected
        };

        if !matches {
            return Err(if expected.is_ascii_alphabetic() {
                format!("expected a digit at position {}", position + 1)
            } else {
                format!("expected '{}' at position {}", expected as char, position + 1)
            });
        }
    }

    Ok(())
}
