//! The Value type - a single table cell.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};

/// A single table cell.
///
/// `Value` covers the cell types the crate handles: timestamps (the
/// canonical grouping key), integers, and strings. Every variant is
/// orderable and hashable, so any column can serve as the grouping key.
///
/// The total order is variant-first (timestamps sort before integers,
/// integers before strings), then the natural order within a variant. A
/// homogeneous key column - the common case - only ever sees the natural
/// within-variant order.
///
/// # Example
///
/// ```
/// use keychunk::Value;
///
/// let a = Value::from(1i64);
/// let b = Value::from(2i64);
/// assert!(a < b);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Value {
    /// A timestamp cell.
    Timestamp(NaiveDateTime),
    /// An integer cell.
    Int(i64),
    /// A string cell.
    Str(String),
}

impl Value {
    /// Returns the timestamp if this is a `Timestamp` cell.
    pub fn as_timestamp(&self) -> Option<NaiveDateTime> {
        match self {
            Value::Timestamp(ts) => Some(*ts),
            _ => None,
        }
    }

    /// Returns the integer if this is an `Int` cell.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the string if this is a `Str` cell.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Timestamp(ts) => write!(f, "{}", ts),
            Value::Int(i) => write!(f, "{}", i),
            Value::Str(s) => write!(f, "{}", s),
        }
    }
}

impl From<NaiveDateTime> for Value {
    fn from(ts: NaiveDateTime) -> Self {
        Value::Timestamp(ts)
    }
}

impl From<NaiveDate> for Value {
    fn from(date: NaiveDate) -> Self {
        Value::Timestamp(date.into())
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}
