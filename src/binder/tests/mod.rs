//! Test utilities for binder testing
//!
//! This module provides sample inputs and helpers shared by the header,
//! reading and statistics tests.

use std::io::Write;
use tempfile::NamedTempFile;

use crate::binder::Binder;
use crate::options::Options;


/// Sample member export with a header record
pub fn create_members_csv() -> &'static str {
    r#"id,name,age,joined
1,alice,34,2024-01-15 09:30:00
2,bob,NULL,
3,,27,2023-11-02 18:00:00"#
}

/// Helper to build a binder over in-memory CSV text
pub fn binder_for(
    content: &str,
    options: Option<Options>,
) -> crate::Result<Binder<csv::Reader<&[u8]>>> {
    Binder::from_reader(content.as_bytes(), options)
}

/// Helper to create a temporary file with given content
pub fn create_temp_file(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(temp_file, "{}", content).unwrap();
    temp_file
}
