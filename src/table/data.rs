//! The Table type - a schema-carrying, row-ordered in-memory table.

use std::fmt;

use crate::error::ChunkError;

use super::Value;

/// An ordered sequence of rows sharing one schema.
///
/// Rows are stored in insertion order; their 0-based position is the stable
/// identity chunking uses for bookkeeping. Every row has exactly one cell
/// per declared column.
///
/// # Example
///
/// ```
/// use keychunk::{Table, Value};
///
/// let table = Table::from_columns(vec![
///     ("date", vec![Value::from(1i64), Value::from(2i64)]),
///     ("qty", vec![Value::from(10i64), Value::from(20i64)]),
/// ])?;
///
/// assert_eq!(table.len(), 2);
/// assert_eq!(table.value(0, "qty"), Some(&Value::from(10i64)));
/// # Ok::<(), keychunk::ChunkError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl Table {
    /// Creates an empty table with the given schema.
    ///
    /// A table may declare no columns at all; such a table has no key
    /// column either, so chunking it fails with
    /// [`ChunkError::MissingColumn`].
    ///
    /// # Example
    ///
    /// ```
    /// use keychunk::Table;
    ///
    /// let table = Table::new(["date", "qty"]);
    /// assert!(table.is_empty());
    /// assert!(table.has_column("date"));
    /// ```
    pub fn new<N: Into<String>>(columns: impl IntoIterator<Item = N>) -> Self {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Creates a table from named columns.
    ///
    /// # Errors
    ///
    /// Returns [`ChunkError::ShapeMismatch`] if the columns differ in
    /// length, or [`ChunkError::DuplicateColumn`] if a name repeats.
    ///
    /// # Example
    ///
    /// ```
    /// use keychunk::{Table, Value};
    ///
    /// let table = Table::from_columns(vec![(
    ///     "date",
    ///     vec![Value::from(1i64), Value::from(2i64)],
    /// )])?;
    /// assert_eq!(table.len(), 2);
    /// # Ok::<(), keychunk::ChunkError>(())
    /// ```
    pub fn from_columns<N: Into<String>>(
        columns: Vec<(N, Vec<Value>)>,
    ) -> Result<Self, ChunkError> {
        let mut table = Self::new(std::iter::empty::<String>());
        for (name, values) in columns {
            table = table.with_column(name, values)?;
        }
        Ok(table)
    }

    /// Appends one row.
    ///
    /// # Errors
    ///
    /// Returns [`ChunkError::ShapeMismatch`] if the row's arity does not
    /// match the schema.
    pub fn push_row(&mut self, row: Vec<Value>) -> Result<(), ChunkError> {
        if row.len() != self.columns.len() {
            return Err(ChunkError::ShapeMismatch {
                expected: self.columns.len(),
                actual: row.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    /// Returns a copy of this table extended by one column.
    ///
    /// The first column added to an empty, column-less table sets the row
    /// count; every later column must match it.
    ///
    /// # Errors
    ///
    /// Returns [`ChunkError::DuplicateColumn`] if the name already exists,
    /// or [`ChunkError::ShapeMismatch`] if `values` does not have one entry
    /// per existing row.
    ///
    /// # Example
    ///
    /// ```
    /// use keychunk::{Table, Value};
    ///
    /// let table = Table::from_columns(vec![("date", vec![Value::from(1i64)])])?
    ///     .with_column("qty", vec![Value::from(10i64)])?;
    /// assert_eq!(table.columns(), &["date", "qty"]);
    /// # Ok::<(), keychunk::ChunkError>(())
    /// ```
    pub fn with_column<N: Into<String>>(
        mut self,
        name: N,
        values: Vec<Value>,
    ) -> Result<Self, ChunkError> {
        let name = name.into();
        if self.has_column(&name) {
            return Err(ChunkError::DuplicateColumn { column: name });
        }
        if self.columns.is_empty() && self.rows.is_empty() {
            // First column of a fresh table: it defines the row count.
            self.columns.push(name);
            self.rows = values.into_iter().map(|v| vec![v]).collect();
            return Ok(self);
        }
        if values.len() != self.rows.len() {
            return Err(ChunkError::ShapeMismatch {
                expected: self.rows.len(),
                actual: values.len(),
            });
        }
        self.columns.push(name);
        for (row, value) in self.rows.iter_mut().zip(values) {
            row.push(value);
        }
        Ok(self)
    }

    /// Returns the schema as an ordered list of column names.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Returns true if the schema contains `name`.
    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Returns the position of `name` in the schema, if present.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Returns the number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the row at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn row(&self, index: usize) -> &[Value] {
        &self.rows[index]
    }

    /// Iterates over rows in original order.
    pub fn rows(&self) -> impl Iterator<Item = &[Value]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Returns the cell at (`row`, `column`), if both exist.
    pub fn value(&self, row: usize, column: &str) -> Option<&Value> {
        let col = self.column_index(column)?;
        self.rows.get(row).map(|r| &r[col])
    }

    /// Returns all cells of one column in row order, if it exists.
    pub fn column_values(&self, name: &str) -> Option<Vec<&Value>> {
        let col = self.column_index(name)?;
        Some(self.rows.iter().map(|r| &r[col]).collect())
    }

    /// Materializes the rows at `indices`, in the given order, as an owned
    /// table carrying the full schema.
    ///
    /// The result shares no storage with `self`; mutating one cannot be
    /// observed through the other.
    ///
    /// # Panics
    ///
    /// Panics if any index is out of bounds.
    pub fn select(&self, indices: &[usize]) -> Table {
        Table {
            columns: self.columns.clone(),
            rows: indices.iter().map(|&i| self.rows[i].clone()).collect(),
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Table({} rows x {} columns)",
            self.rows.len(),
            self.columns.len()
        )
    }
}
