//! The Chunk type - represents one key-atomic batch of rows.

use std::fmt;
use std::ops::RangeInclusive;

use crate::table::{Table, Value};

/// One key-atomic batch of rows with its key span.
///
/// A chunk is the concatenation, in ascending key order, of one or more
/// complete groups. `min_key`/`max_key` are the smallest and largest key
/// values it contains; spans of consecutive chunks never overlap.
///
/// Chunks own their rows: a chunk stays valid however the source table is
/// used afterwards.
///
/// # Example
///
/// ```
/// use keychunk::{Chunk, Table, Value};
///
/// let rows = Table::from_columns(vec![(
///     "date",
///     vec![Value::from(1i64), Value::from(2i64)],
/// )])?;
/// let chunk = Chunk::new(rows, Value::from(1i64), Value::from(2i64));
///
/// assert_eq!(chunk.len(), 2);
/// assert_eq!(chunk.key_range(), &Value::from(1i64)..=&Value::from(2i64));
/// # Ok::<(), keychunk::ChunkError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    table: Table,
    min_key: Value,
    max_key: Value,
}

impl Chunk {
    /// Creates a new chunk from materialized rows and their key span.
    pub fn new(table: Table, min_key: Value, max_key: Value) -> Self {
        Self {
            table,
            min_key,
            max_key,
        }
    }

    /// Returns the number of rows in the chunk.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns true if the chunk has no rows.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Returns the chunk's rows.
    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Returns the smallest key value in the chunk.
    pub fn min_key(&self) -> &Value {
        &self.min_key
    }

    /// Returns the largest key value in the chunk.
    pub fn max_key(&self) -> &Value {
        &self.max_key
    }

    /// Returns the chunk's key span as an inclusive range.
    pub fn key_range(&self) -> RangeInclusive<&Value> {
        &self.min_key..=&self.max_key
    }

    /// Consumes the chunk and returns the underlying table.
    pub fn into_table(self) -> Table {
        self.table
    }

    /// Splits the chunk into (table, min key, max key).
    pub fn into_parts(self) -> (Table, Value, Value) {
        (self.table, self.min_key, self.max_key)
    }
}

impl fmt::Display for Chunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Chunk({} rows, keys {}..{})",
            self.len(),
            self.min_key,
            self.max_key
        )
    }
}
