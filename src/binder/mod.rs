//! CSV binder: header resolution and row-at-a-time reading
//!
//! A [`Binder`] owns one record source, the column metadata resolved at
//! construction and the [`Options`] shared with every [`Row`] it produces.
//!
//! ## Architecture
//!
//! - [`header`] - Column metadata from a header record or explicit options
//! - [`stats`] - Read counters
//!
//! ## Usage
//!
//! ```rust
//! use std::ops::ControlFlow;
//! use csvbind::{bindable, Binder, Options};
//!
//! #[derive(Debug, Default)]
//! struct Person {
//!     id: String,
//!     age: i64,
//! }
//!
//! bindable!(Person { id, age });
//!
//! # fn main() -> csvbind::Result<()> {
//! let data = "id;age\n7;42\n8;\n";
//! let options = Options::new().with_separator(';');
//! let mut binder = Binder::from_reader(data.as_bytes(), Some(options))?;
//!
//! let mut people = Vec::new();
//! binder.for_each(|row| {
//!     let mut person = Person::default();
//!     row.bind(&mut person, [("id", "id"), ("age", "age")])?;
//!     people.push(person);
//!     Ok::<_, csvbind::Error>(ControlFlow::Continue(()))
//! })?;
//!
//! assert_eq!(people.len(), 2);
//! assert_eq!(people[0].age, 42);
//! assert_eq!(people[1].age, 0);
//! # Ok(())
//! # }
//! ```

pub mod header;
pub mod stats;

#[cfg(test)]
pub mod tests;

use std::fs::File;
use std::io;
use std::iter::FusedIterator;
use std::ops::ControlFlow;
use std::path::Path;
use std::sync::Arc;

use csv::StringRecord;
use tracing::{debug, info, trace};

use self::header::resolve_metadata;
use self::stats::ReadStats;
use crate::options::{Metadata, Options};
use crate::row::Row;
use crate::source::RecordSource;
use crate::{Error, Result};

/// Reads sparse rows from a record source using resolved column metadata
#[derive(Debug)]
pub struct Binder<S> {
    source: S,
    metadata: Metadata,
    options: Arc<Options>,
    record: StringRecord,
    stats: ReadStats,
}

impl<R: io::Read> Binder<csv::Reader<R>> {
    /// Create a binder over CSV text.
    ///
    /// The csv reader is configured with the resolved separator and without
    /// its own header handling; column metadata is resolved here, which reads
    /// the first record unless `options` carries an explicit header.
    pub fn from_reader(reader: R, options: Option<Options>) -> Result<Self> {
        let options = Options::resolve(options);
        let source = csv::ReaderBuilder::new()
            .has_headers(false)
            .delimiter(options.delimiter()?)
            .from_reader(reader);

        Self::build(source, options)
    }
}

impl Binder<csv::Reader<File>> {
    /// Open a CSV file and create a binder over it
    pub fn from_path(path: impl AsRef<Path>, options: Option<Options>) -> Result<Self> {
        let path = path.as_ref();
        info!("Opening CSV file: {}", path.display());

        let file = File::open(path).map_err(|e| Error::io(path, e))?;
        Self::from_reader(file, options)
    }
}

impl<S: RecordSource> Binder<S> {
    /// Create a binder over an already-configured record source.
    ///
    /// The separator in `options` is not applied; the source does its own
    /// tokenizing.
    pub fn with_source(source: S, options: Option<Options>) -> Result<Self> {
        Self::build(source, Options::resolve(options))
    }

    fn build(mut source: S, options: Options) -> Result<Self> {
        let metadata = resolve_metadata(&mut source, &options)?;
        debug!(
            "Binder ready: {} columns, null marker {:?}, timezone {}",
            metadata.len(),
            options.null_marker,
            options.timezone()
        );

        Ok(Self {
            source,
            metadata,
            options: Arc::new(options),
            record: StringRecord::new(),
            stats: ReadStats::new(),
        })
    }

    /// Read the next row.
    ///
    /// `Ok(None)` means the input is exhausted. Malformed records and I/O
    /// failures are errors and are not retried.
    pub fn read_row(&mut self) -> Result<Option<Row>> {
        if !self.source.next_record(&mut self.record)? {
            debug!("End of input after {} rows", self.stats.rows_read);
            return Ok(None);
        }

        let row = Row::from_record(&self.record, &self.metadata, &self.options);
        self.stats.record_row(self.record.len(), row.len());
        trace!(
            "Row {}: {} of {} cells populated",
            self.stats.rows_read,
            row.len(),
            self.record.len()
        );

        Ok(Some(row))
    }

    /// Feed rows to `visitor` in input order.
    ///
    /// Stops without error at end of input or when the visitor returns
    /// [`ControlFlow::Break`]. The first error, from the source or from the
    /// visitor, is returned as-is and no further records are read.
    pub fn for_each<F, E>(&mut self, mut visitor: F) -> std::result::Result<(), E>
    where
        F: FnMut(Row) -> std::result::Result<ControlFlow<()>, E>,
        E: From<Error>,
    {
        while let Some(row) = self.read_row()? {
            if visitor(row)?.is_break() {
                break;
            }
        }

        Ok(())
    }

    /// Iterate over the remaining rows
    pub fn rows(&mut self) -> Rows<'_, S> {
        Rows {
            binder: self,
            finished: false,
        }
    }

    /// Column index to name mapping resolved at construction
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Options after defaulting
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Counters for the rows read so far
    pub fn stats(&self) -> &ReadStats {
        &self.stats
    }

    /// Give back the underlying record source
    pub fn into_inner(self) -> S {
        self.source
    }
}

/// Iterator over a binder's rows, see [`Binder::rows`].
///
/// Yields `Err` at most once; after an error or the end of input it returns
/// `None` without touching the source again.
#[derive(Debug)]
pub struct Rows<'a, S> {
    binder: &'a mut Binder<S>,
    finished: bool,
}

impl<S: RecordSource> Iterator for Rows<'_, S> {
    type Item = Result<Row>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        match self.binder.read_row() {
            Ok(Some(row)) => Some(Ok(row)),
            Ok(None) => {
                self.finished = true;
                None
            }
            Err(e) => {
                self.finished = true;
                Some(Err(e))
            }
        }
    }
}

impl<S: RecordSource> FusedIterator for Rows<'_, S> {}
