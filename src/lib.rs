//! csvbind Library
//!
//! A Rust library for reading delimited text records and binding named
//! columns onto the fields of caller-owned record values.
//!
//! This library provides tools for:
//! - Resolving column names from a header record or explicit metadata
//! - Reading rows as sparse column/value records with null-marker handling
//! - Binding rows onto typed destinations through a column-to-field mapping
//! - Parsing `YYYY-MM-DD HH:MM:SS` date/times in a configurable timezone
//!
//! ```rust
//! use chrono::{DateTime, TimeZone, Utc};
//! use csvbind::{bindable, Binder};
//!
//! #[derive(Debug, Default)]
//! struct Member {
//!     id: String,
//!     name: String,
//!     joined_at: DateTime<Utc>,
//! }
//!
//! bindable!(Member {
//!     "ID" => id,
//!     "Name" => name,
//!     "JoinedAt" => joined_at,
//! });
//!
//! # fn main() -> csvbind::Result<()> {
//! let data = "id,name,joined\n7,alice,2024-01-15 09:30:00\n";
//! let mut binder = Binder::from_reader(data.as_bytes(), None)?;
//! let row = binder.read_row()?.expect("one data row");
//!
//! let mut member = Member::default();
//! row.bind(
//!     &mut member,
//!     [("id", "ID"), ("name", "Name"), ("joined", "JoinedAt")],
//! )?;
//!
//! assert_eq!(member.id, "7");
//! assert_eq!(member.name, "alice");
//! assert_eq!(
//!     member.joined_at,
//!     Utc.with_ymd_and_hms(2024, 1, 15, 9, 30, 0).unwrap()
//! );
//! # Ok(())
//! # }
//! ```

pub mod binder;
pub mod constants;
pub mod error;
pub mod field;
pub mod options;
pub mod row;
pub mod source;

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use binder::stats::ReadStats;
pub use binder::{Binder, Rows};
pub use error::{Error, ErrorCategory, Result};
pub use field::{Bindable, FieldKind, FieldSlot, FieldValue};
pub use options::{Metadata, Options};
pub use row::Row;
pub use source::{MemorySource, RecordSource};
