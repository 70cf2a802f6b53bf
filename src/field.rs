//! Destination field access for binding
//!
//! Rows are projected onto caller-owned values through the [`Bindable`]
//! trait: look up a field's [`FieldKind`], read its live [`FieldValue`] and
//! write a converted value back. Most types get it from the [`bindable!`]
//! macro, which dispatches to the [`FieldSlot`] impl of each listed field.
//!
//! ```rust
//! use chrono::{DateTime, Utc};
//! use csvbind::{bindable, Bindable, FieldKind};
//!
//! #[derive(Debug, Default)]
//! struct Member {
//!     id: String,
//!     age: i64,
//!     joined_at: DateTime<Utc>,
//! }
//!
//! bindable!(Member {
//!     "ID" => id,
//!     "Age" => age,
//!     "JoinedAt" => joined_at,
//! });
//!
//! let member = Member::default();
//! assert_eq!(member.field_kind("Age").unwrap(), FieldKind::Int64);
//! assert!(member.field_kind("age").is_err());
//! ```

use crate::{Error, Result};
use chrono::{DateTime, Utc};
use chrono_tz::Tz;

/// Declared shape of a destination field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Receives the raw string
    String,
    /// Receives a base-10 signed 64-bit integer
    Int64,
    /// Structured value; only bound when its live value is a date/time
    Composite,
    /// Never written by binding
    Unsupported,
}

/// Live value of a destination field, also used to carry converted values
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    String(String),
    Int64(i64),
    DateTime(DateTime<Tz>),
    /// Any other value, identified by its type name
    Other(&'static str),
}

impl FieldValue {
    /// Short name of the carried type, used in mismatch errors
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldValue::String(_) => "string",
            FieldValue::Int64(_) => "i64",
            FieldValue::DateTime(_) => "datetime",
            FieldValue::Other(name) => name,
        }
    }
}

/// Field access by name on a destination value
pub trait Bindable {
    /// Kind of the named field; unknown names are an error
    fn field_kind(&self, field: &str) -> Result<FieldKind>;

    /// Current value of the named field
    fn field_value(&self, field: &str) -> Result<FieldValue>;

    /// Overwrite the named field
    fn set_field(&mut self, field: &str, value: FieldValue) -> Result<()>;
}

/// Per-type behaviour of a single field, used by [`bindable!`]
pub trait FieldSlot {
    fn kind(&self) -> FieldKind;

    fn value(&self) -> FieldValue;

    /// Replace the slot's value; `field` is only used for error reporting
    fn assign(&mut self, field: &str, value: FieldValue) -> Result<()>;
}

impl FieldSlot for String {
    fn kind(&self) -> FieldKind {
        FieldKind::String
    }

    fn value(&self) -> FieldValue {
        FieldValue::String(self.clone())
    }

    fn assign(&mut self, field: &str, value: FieldValue) -> Result<()> {
        match value {
            FieldValue::String(value) => {
                *self = value;
                Ok(())
            }
            other => Err(Error::field_type_mismatch(
                field,
                "string",
                other.type_name(),
            )),
        }
    }
}

impl FieldSlot for i64 {
    fn kind(&self) -> FieldKind {
        FieldKind::Int64
    }

    fn value(&self) -> FieldValue {
        FieldValue::Int64(*self)
    }

    fn assign(&mut self, field: &str, value: FieldValue) -> Result<()> {
        match value {
            FieldValue::Int64(value) => {
                *self = value;
                Ok(())
            }
            other => Err(Error::field_type_mismatch(field, "i64", other.type_name())),
        }
    }
}

impl FieldSlot for DateTime<Tz> {
    fn kind(&self) -> FieldKind {
        FieldKind::Composite
    }

    fn value(&self) -> FieldValue {
        FieldValue::DateTime(*self)
    }

    fn assign(&mut self, field: &str, value: FieldValue) -> Result<()> {
        match value {
            FieldValue::DateTime(value) => {
                *self = value;
                Ok(())
            }
            other => Err(Error::field_type_mismatch(
                field,
                "datetime",
                other.type_name(),
            )),
        }
    }
}

impl FieldSlot for DateTime<Utc> {
    fn kind(&self) -> FieldKind {
        FieldKind::Composite
    }

    fn value(&self) -> FieldValue {
        FieldValue::DateTime(self.with_timezone(&Tz::UTC))
    }

    fn assign(&mut self, field: &str, value: FieldValue) -> Result<()> {
        match value {
            FieldValue::DateTime(value) => {
                *self = value.with_timezone(&Utc);
                Ok(())
            }
            other => Err(Error::field_type_mismatch(
                field,
                "datetime",
                other.type_name(),
            )),
        }
    }
}

/// Scalars that binding does not convert into
macro_rules! unsupported_slot {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl FieldSlot for $ty {
                fn kind(&self) -> FieldKind {
                    FieldKind::Unsupported
                }

                fn value(&self) -> FieldValue {
                    FieldValue::Other(stringify!($ty))
                }

                fn assign(&mut self, field: &str, value: FieldValue) -> Result<()> {
                    Err(Error::field_type_mismatch(
                        field,
                        stringify!($ty),
                        value.type_name(),
                    ))
                }
            }
        )+
    };
}

unsupported_slot!(i8, i16, i32, u8, u16, u32, u64, usize, f32, f64, bool, char);

/// Implement [`Bindable`] for a struct by listing its fields.
///
/// Fields are exposed under their own names, or under an explicit name with
/// `"Name" => field`. Every listed field type must implement [`FieldSlot`].
#[macro_export]
macro_rules! bindable {
    (@impl $ty:ty { $($name:expr => $field:ident),+ }) => {
        impl $crate::Bindable for $ty {
            fn field_kind(&self, field: &str) -> $crate::Result<$crate::FieldKind> {
                $(
                    if field == $name {
                        return Ok($crate::FieldSlot::kind(&self.$field));
                    }
                )+
                Err($crate::Error::unknown_field(field))
            }

            fn field_value(&self, field: &str) -> $crate::Result<$crate::FieldValue> {
                $(
                    if field == $name {
                        return Ok($crate::FieldSlot::value(&self.$field));
                    }
                )+
                Err($crate::Error::unknown_field(field))
            }

            fn set_field(
                &mut self,
                field: &str,
                value: $crate::FieldValue,
            ) -> $crate::Result<()> {
                $(
                    if field == $name {
                        return $crate::FieldSlot::assign(&mut self.$field, field, value);
                    }
                )+
                Err($crate::Error::unknown_field(field))
            }
        }
    };
    ($ty:ty { $($name:literal => $field:ident),+ $(,)? }) => {
        $crate::bindable!(@impl $ty { $($name => $field),+ });
    };
    ($ty:ty { $($field:ident),+ $(,)? }) => {
        $crate::bindable!(@impl $ty { $(stringify!($field) => $field),+ });
    };
}
