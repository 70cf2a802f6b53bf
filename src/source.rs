//! Record sources feeding the binder
//!
//! A [`RecordSource`] hands out one tokenized record per call. The binder
//! never looks at bytes, quoting or line endings itself; those belong to the
//! source. [`csv::Reader`] is the standard implementation, [`MemorySource`]
//! serves pre-split records.

use crate::Result;
use csv::StringRecord;
use std::collections::VecDeque;
use std::io;

/// Tokenizer seam used by [`Binder`](crate::Binder)
pub trait RecordSource {
    /// Read the next record into `record`.
    ///
    /// Returns `Ok(false)` once the input is exhausted. Any other failure
    /// (malformed record, I/O, encoding) is an error.
    fn next_record(&mut self, record: &mut StringRecord) -> Result<bool>;
}

impl<R: io::Read> RecordSource for csv::Reader<R> {
    fn next_record(&mut self, record: &mut StringRecord) -> Result<bool> {
        Ok(self.read_record(record)?)
    }
}

impl<S: RecordSource + ?Sized> RecordSource for &mut S {
    fn next_record(&mut self, record: &mut StringRecord) -> Result<bool> {
        (**self).next_record(record)
    }
}

/// In-memory source over records that are already split into fields
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    records: VecDeque<StringRecord>,
    records_read: usize,
}

impl MemorySource {
    /// Create a source from rows of fields
    pub fn new<I, R, F>(rows: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = F>,
        F: AsRef<str>,
    {
        let records = rows
            .into_iter()
            .map(|row| {
                let mut record = StringRecord::new();
                for field in row {
                    record.push_field(field.as_ref());
                }
                record
            })
            .collect();

        Self {
            records,
            records_read: 0,
        }
    }

    /// Number of records handed out so far
    pub fn records_read(&self) -> usize {
        self.records_read
    }

    /// Number of records not yet handed out
    pub fn remaining(&self) -> usize {
        self.records.len()
    }
}

impl RecordSource for MemorySource {
    fn next_record(&mut self, record: &mut StringRecord) -> Result<bool> {
        match self.records.pop_front() {
            Some(next) => {
                *record = next;
                self.records_read += 1;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_source_yields_in_order() {
        let mut source = MemorySource::new([vec!["a", "b"], vec!["1", "2"]]);
        let mut record = StringRecord::new();

        assert!(source.next_record(&mut record).unwrap());
        assert_eq!(record.iter().collect::<Vec<_>>(), vec!["a", "b"]);
        assert!(source.next_record(&mut record).unwrap());
        assert_eq!(record.iter().collect::<Vec<_>>(), vec!["1", "2"]);
        assert!(!source.next_record(&mut record).unwrap());
        assert_eq!(source.records_read(), 2);
        assert_eq!(source.remaining(), 0);
    }

    #[test]
    fn test_memory_source_empty_record() {
        let mut source = MemorySource::new([Vec::<&str>::new()]);
        let mut record = StringRecord::new();

        assert!(source.next_record(&mut record).unwrap());
        assert!(record.is_empty());
    }

    #[test]
    fn test_csv_reader_source() {
        let data = "x;y\n1;2\n";
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .delimiter(b';')
            .from_reader(data.as_bytes());
        let mut record = StringRecord::new();

        assert!(reader.next_record(&mut record).unwrap());
        assert_eq!(&record[0], "x");
        assert!(reader.next_record(&mut record).unwrap());
        assert_eq!(&record[1], "2");
        assert!(!reader.next_record(&mut record).unwrap());
    }

    #[test]
    fn test_csv_reader_source_reports_ragged_record() {
        let data = "a,b\n1,2,3\n";
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_reader(data.as_bytes());
        let mut record = StringRecord::new();

        assert!(reader.next_record(&mut record).unwrap());
        let error = reader.next_record(&mut record).unwrap_err();
        assert_eq!(error.category(), crate::ErrorCategory::Stream);
    }
}
