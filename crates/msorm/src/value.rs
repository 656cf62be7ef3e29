//! Driver-agnostic bound values.
//!
//! The builder never talks to a driver directly, so bound arguments and
//! decoded result cells are carried as [`Value`]. A driver adapter converts
//! between `Value` and its native parameter type on both sides of the
//! [`Client`](crate::client::Client) seam.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{OrmError, OrmResult};

/// A single decoded result row.
pub type Row = Vec<Value>;

/// A bound argument or decoded result cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i32),
    BigInt(i64),
    Float(f64),
    Text(String),
    DateTime(NaiveDateTime),
    Uuid(Uuid),
    Bytes(Vec<u8>),
}

impl Value {
    /// Checks if the value is [`Value::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Variant name, used in decode error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::BigInt(_) => "bigint",
            Value::Float(_) => "float",
            Value::Text(_) => "text",
            Value::DateTime(_) => "datetime",
            Value::Uuid(_) => "uuid",
            Value::Bytes(_) => "bytes",
        }
    }
}

macro_rules! impl_conv_for_value {
    ($variant:ident, $ty:ty, $name:ident) => {
        impl From<$ty> for Value {
            fn from(value: $ty) -> Self {
                Value::$variant(value)
            }
        }

        impl Value {
            /// Attempts to extract a reference to the inner value if it matches the variant.
            pub fn $name(&self) -> Option<&$ty> {
                if let Value::$variant(v) = self {
                    Some(v)
                } else {
                    None
                }
            }
        }
    };
}

impl_conv_for_value!(Bool, bool, as_bool);
impl_conv_for_value!(Int, i32, as_int);
impl_conv_for_value!(BigInt, i64, as_bigint);
impl_conv_for_value!(Float, f64, as_float);
impl_conv_for_value!(Text, String, as_text);
impl_conv_for_value!(DateTime, NaiveDateTime, as_datetime);
impl_conv_for_value!(Uuid, Uuid, as_uuid);
impl_conv_for_value!(Bytes, Vec<u8>, as_bytes);

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }
}

/// Conversion out of a [`Value`], used when populating destinations.
pub trait FromValue: Sized {
    /// Decode `value` into `Self`, failing with [`OrmError::Decode`] on a
    /// variant mismatch. The column position is filled in by the caller.
    fn from_value(value: Value) -> OrmResult<Self>;
}

macro_rules! impl_from_value {
    ($ty:ty, $variant:ident, $expected:literal) => {
        impl FromValue for $ty {
            fn from_value(value: Value) -> OrmResult<Self> {
                match value {
                    Value::$variant(v) => Ok(v),
                    other => Err(OrmError::decode(
                        "",
                        format!(concat!("expected ", $expected, ", got {}"), other.kind()),
                    )),
                }
            }
        }
    };
}

impl_from_value!(bool, Bool, "bool");
impl_from_value!(i32, Int, "int");
impl_from_value!(f64, Float, "float");
impl_from_value!(String, Text, "text");
impl_from_value!(NaiveDateTime, DateTime, "datetime");
impl_from_value!(Uuid, Uuid, "uuid");
impl_from_value!(Vec<u8>, Bytes, "bytes");

// Drivers disagree on integer width for COUNT-style columns, so i64 also
// accepts Int and widens.
impl FromValue for i64 {
    fn from_value(value: Value) -> OrmResult<Self> {
        match value {
            Value::BigInt(v) => Ok(v),
            Value::Int(v) => Ok(i64::from(v)),
            other => Err(OrmError::decode(
                "",
                format!("expected bigint, got {}", other.kind()),
            )),
        }
    }
}

impl<T: FromValue> FromValue for Option<T> {
    fn from_value(value: Value) -> OrmResult<Self> {
        match value {
            Value::Null => Ok(None),
            other => T::from_value(other).map(Some),
        }
    }
}
