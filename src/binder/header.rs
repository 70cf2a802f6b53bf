//! Column metadata resolution
//!
//! Column names come either from the first record of the source or from an
//! explicit header in [`Options`]. Exactly one record is consumed in the
//! first case and none in the second, so data rows start right after
//! construction either way.

use crate::options::{Metadata, Options};
use crate::source::RecordSource;
use crate::{Error, Result};
use csv::StringRecord;
use tracing::debug;

/// Establish the column index to name mapping for a binder
pub fn resolve_metadata<S>(source: &mut S, options: &Options) -> Result<Metadata>
where
    S: RecordSource + ?Sized,
{
    match &options.header {
        Some(header) => {
            if header.is_empty() {
                return Err(Error::NoCustomHeader);
            }
            debug!("Using explicit header with {} columns", header.len());
            Ok(header.clone())
        }
        None => {
            let mut record = StringRecord::new();
            if !source.next_record(&mut record)? {
                return Err(Error::MissingHeaderRecord);
            }

            let metadata = header_from_record(&record);
            if metadata.is_empty() {
                return Err(Error::NoHeader);
            }
            debug!("Read header record with {} columns", metadata.len());
            Ok(metadata)
        }
    }
}

/// Map each position of a header record to its raw value
pub fn header_from_record(record: &StringRecord) -> Metadata {
    record
        .iter()
        .enumerate()
        .map(|(index, name)| (index, name.to_string()))
        .collect()
}
