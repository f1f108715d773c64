//! Core chunking engine - Chunker with plan and materialize APIs.
//!
//! This module implements the key-atomic packing operation:
//!
//! - [`Chunker`] - Holds a validated [`ChunkConfig`]
//! - `chunk()` - Partition a table into materialized [`Chunk`]s
//! - `chunk_indices()` - The packing plan alone, as row-index lists
//!
//! # Example
//!
//! ```
//! use keychunk::{ChunkConfig, Chunker, Table, Value};
//!
//! let table = Table::from_columns(vec![(
//!     "date",
//!     vec![Value::from(2i64), Value::from(1i64), Value::from(2i64)],
//! )])?;
//!
//! let chunker = Chunker::new(ChunkConfig::new(3)?);
//! let chunks = chunker.chunk(&table)?;
//!
//! assert_eq!(chunks.len(), 1);
//! assert_eq!(chunks[0].len(), 3);
//! # Ok::<(), keychunk::ChunkError>(())
//! ```

use std::collections::HashMap;

use log::{debug, trace};

use crate::chunk::Chunk;
use crate::config::ChunkConfig;
use crate::error::ChunkError;
use crate::table::{Table, Value};

/// A chunker that partitions tables into key-atomic, minimum-size chunks.
///
/// `Chunker` groups the rows of an input [`Table`] by the configured key
/// column, then packs whole groups - in ascending key order - into chunks
/// until each chunk reaches `min_chunk_size` rows. Any remainder is flushed
/// as one final, possibly undersized chunk.
///
/// # Guarantees
///
/// - The chunks partition the input: every row lands in exactly one chunk.
/// - Groups are atomic: rows sharing a key value are never split across
///   two chunks.
/// - Every chunk except possibly the last holds at least `min_chunk_size`
///   rows.
/// - Within a chunk, groups appear in ascending key order and rows within
///   a group keep their original relative order.
/// - Across chunks, key spans are strictly increasing and disjoint.
///
/// # Determinism
///
/// Identical inputs produce identical chunk boundaries: grouping preserves
/// first-seen order and packing follows the key type's total order, so no
/// step depends on hash iteration order.
///
/// # Statelessness
///
/// Each call builds its grouping index and accumulator from scratch and
/// discards them on return. The chunker holds only its configuration, so a
/// shared `&Chunker` may serve concurrent calls on independent tables.
///
/// # Example
///
/// ```
/// use keychunk::{ChunkConfig, Chunker, Table, Value};
///
/// let table = Table::from_columns(vec![(
///     "date",
///     (0..10i64).map(|i| Value::from(i % 5)).collect(),
/// )])?;
///
/// let chunker = Chunker::new(ChunkConfig::new(4)?);
/// let chunks = chunker.chunk(&table)?;
///
/// let total: usize = chunks.iter().map(|c| c.len()).sum();
/// assert_eq!(total, 10);
/// # Ok::<(), keychunk::ChunkError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Chunker {
    config: ChunkConfig,
}

impl Chunker {
    /// Creates a new chunker with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - The chunking configuration specifying the minimum chunk
    ///   size and the key column
    ///
    /// # Example
    ///
    /// ```
    /// use keychunk::{ChunkConfig, Chunker};
    ///
    /// let chunker = Chunker::new(ChunkConfig::default());
    /// ```
    pub fn new(config: ChunkConfig) -> Self {
        Self { config }
    }

    /// Partitions a table into materialized chunks.
    ///
    /// Each returned [`Chunk`] is an owned copy of its rows together with
    /// the smallest and largest key value it contains. The input table is
    /// not modified.
    ///
    /// # Errors
    ///
    /// Returns [`ChunkError::MissingColumn`] if the configured key column
    /// is not in the table's schema. A zero-row table with the key column
    /// present is not an error and yields an empty vector.
    ///
    /// # Example
    ///
    /// ```
    /// use keychunk::{ChunkConfig, Chunker, Table, Value};
    ///
    /// let table = Table::from_columns(vec![(
    ///     "date",
    ///     vec![Value::from(1i64), Value::from(1i64), Value::from(2i64)],
    /// )])?;
    ///
    /// let chunker = Chunker::new(ChunkConfig::new(2)?);
    /// let chunks = chunker.chunk(&table)?;
    ///
    /// assert_eq!(chunks.len(), 2);
    /// assert_eq!(chunks[0].len(), 2);
    /// assert_eq!(chunks[1].len(), 1);
    /// # Ok::<(), keychunk::ChunkError>(())
    /// ```
    pub fn chunk(&self, table: &Table) -> Result<Vec<Chunk>, ChunkError> {
        let col = self.key_column_index(table)?;

        let chunks = self
            .plan(table, col)
            .into_iter()
            .map(|indices| {
                // Rows are in ascending key order, so the span is bounded by
                // the first and last row's key.
                let min_key = table.row(indices[0])[col].clone();
                let max_key = table.row(indices[indices.len() - 1])[col].clone();
                Chunk::new(table.select(&indices), min_key, max_key)
            })
            .collect();

        Ok(chunks)
    }

    /// Computes the packing plan without materializing any rows.
    ///
    /// Returns one ordered row-index list per chunk; each list holds the
    /// original 0-based positions of the rows that chunk would contain, in
    /// ascending key order (first-seen order within a group). Useful for
    /// callers that want index-based views into the source table instead of
    /// owned copies. [`Chunker::chunk`] is this plan plus
    /// [`Table::select`] per list.
    ///
    /// # Errors
    ///
    /// Returns [`ChunkError::MissingColumn`] if the configured key column
    /// is not in the table's schema.
    ///
    /// # Example
    ///
    /// ```
    /// use keychunk::{ChunkConfig, Chunker, Table, Value};
    ///
    /// let table = Table::from_columns(vec![(
    ///     "date",
    ///     vec![Value::from(2i64), Value::from(1i64)],
    /// )])?;
    ///
    /// let chunker = Chunker::new(ChunkConfig::new(1)?);
    /// let plan = chunker.chunk_indices(&table)?;
    ///
    /// // Key 1 packs before key 2 even though it appears later in the input.
    /// assert_eq!(plan, vec![vec![1], vec![0]]);
    /// # Ok::<(), keychunk::ChunkError>(())
    /// ```
    pub fn chunk_indices(&self, table: &Table) -> Result<Vec<Vec<usize>>, ChunkError> {
        let col = self.key_column_index(table)?;
        Ok(self.plan(table, col))
    }

    /// Returns the configuration used by this chunker.
    pub fn config(&self) -> &ChunkConfig {
        &self.config
    }

    /// Resolves the key column against a table's schema.
    fn key_column_index(&self, table: &Table) -> Result<usize, ChunkError> {
        table
            .column_index(self.config.key_column())
            .ok_or_else(|| ChunkError::MissingColumn {
                column: self.config.key_column().to_string(),
            })
    }

    /// Groups rows by key, then packs whole groups into index lists.
    fn plan(&self, table: &Table, col: usize) -> Vec<Vec<usize>> {
        // Group construction: one pass in original row order, so each
        // group's indices stay in first-seen order.
        let mut groups: HashMap<&Value, Vec<usize>> = HashMap::new();
        for (index, row) in table.rows().enumerate() {
            groups.entry(&row[col]).or_default().push(index);
        }

        debug!(
            "grouped {} rows into {} distinct keys on '{}'",
            table.len(),
            groups.len(),
            self.config.key_column()
        );
        trace!("group index: {:?}", groups);

        let mut keys: Vec<&Value> = groups.keys().copied().collect();
        keys.sort_unstable();

        // Sorted packing: append whole groups until the accumulator reaches
        // the threshold, then cut. The trailing accumulator flushes as one
        // final chunk whatever its size.
        let min_chunk_size = self.config.min_chunk_size();
        let mut chunks: Vec<Vec<usize>> = Vec::new();
        let mut current: Vec<usize> = Vec::new();

        for key in keys {
            current.extend_from_slice(&groups[key]);

            if current.len() >= min_chunk_size {
                chunks.push(std::mem::take(&mut current));
            }
        }

        if !current.is_empty() {
            chunks.push(current);
        }

        debug!(
            "packed {} chunks with min_chunk_size={}",
            chunks.len(),
            min_chunk_size
        );

        chunks
    }
}

impl Default for Chunker {
    fn default() -> Self {
        Self::new(ChunkConfig::default())
    }
}
