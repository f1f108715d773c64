//! Configuration for chunking behavior.
//!
//! This module provides [`ChunkConfig`], which controls the minimum chunk
//! size and the grouping column used by a [`Chunker`](crate::Chunker).
//!
//! # Example
//!
//! ```
//! use keychunk::ChunkConfig;
//!
//! // Chunks of at least 1000 rows, grouped on the default "date" column
//! let config = ChunkConfig::new(1000)?;
//!
//! // Group on a different column
//! let config = ChunkConfig::new(1000)?.with_key_column("symbol");
//!
//! # Ok::<(), keychunk::ChunkError>(())
//! ```

use crate::error::ChunkError;

/// Default minimum chunk size (1000 rows).
pub const DEFAULT_MIN_CHUNK_SIZE: usize = 1000;

/// Default grouping column name.
pub const DEFAULT_KEY_COLUMN: &str = "date";

/// Configuration for key-atomic chunking behavior.
///
/// `ChunkConfig` controls the packing threshold and the grouping column:
///
/// - Minimum chunk size (`min_chunk_size`) - Every chunk except possibly the
///   last holds at least this many rows
/// - Key column (`key_column`) - Rows sharing one value of this column are
///   never split across chunks
///
/// # Constraints
///
/// `min_chunk_size` must be at least 1. The key column is not validated at
/// construction; whether it exists is a property of each input table and is
/// checked per [`chunk`](crate::Chunker::chunk) call.
///
/// # Example
///
/// ```
/// use keychunk::ChunkConfig;
///
/// // Use default configuration
/// let config = ChunkConfig::default();
///
/// // Custom configuration
/// let config = ChunkConfig::new(500)?;
///
/// // Builder pattern
/// let config = ChunkConfig::default()
///     .with_min_chunk_size(500)
///     .with_key_column("timestamp");
/// # Ok::<(), keychunk::ChunkError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChunkConfig {
    /// Minimum rows per emitted chunk (except the trailing remainder).
    min_chunk_size: usize,

    /// Name of the grouping column.
    key_column: String,
}

impl ChunkConfig {
    /// Creates a new configuration with the specified minimum chunk size.
    ///
    /// The key column defaults to [`DEFAULT_KEY_COLUMN`] (`"date"`); use
    /// [`ChunkConfig::with_key_column`] to change it.
    ///
    /// # Errors
    ///
    /// Returns [`ChunkError::InvalidConfig`] if `min_chunk_size` is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use keychunk::ChunkConfig;
    ///
    /// let config = ChunkConfig::new(1000)?;
    /// assert_eq!(config.min_chunk_size(), 1000);
    /// assert_eq!(config.key_column(), "date");
    /// # Ok::<(), keychunk::ChunkError>(())
    /// ```
    pub fn new(min_chunk_size: usize) -> Result<Self, ChunkError> {
        if min_chunk_size < 1 {
            return Err(ChunkError::InvalidConfig {
                message: "min_chunk_size must be at least 1",
            });
        }

        Ok(Self {
            min_chunk_size,
            key_column: DEFAULT_KEY_COLUMN.to_string(),
        })
    }

    /// Sets the minimum chunk size.
    ///
    /// Note: This does not validate the configuration. Use
    /// [`ChunkConfig::validate`] to check if the configuration is valid.
    ///
    /// # Example
    ///
    /// ```
    /// use keychunk::ChunkConfig;
    ///
    /// let config = ChunkConfig::default().with_min_chunk_size(500);
    /// assert_eq!(config.min_chunk_size(), 500);
    /// ```
    pub fn with_min_chunk_size(mut self, size: usize) -> Self {
        self.min_chunk_size = size;
        self
    }

    /// Sets the grouping column name.
    ///
    /// # Example
    ///
    /// ```
    /// use keychunk::ChunkConfig;
    ///
    /// let config = ChunkConfig::default().with_key_column("symbol");
    /// assert_eq!(config.key_column(), "symbol");
    /// ```
    pub fn with_key_column(mut self, name: impl Into<String>) -> Self {
        self.key_column = name.into();
        self
    }

    /// Returns the minimum chunk size.
    pub fn min_chunk_size(&self) -> usize {
        self.min_chunk_size
    }

    /// Returns the grouping column name.
    pub fn key_column(&self) -> &str {
        &self.key_column
    }

    /// Validates the current configuration.
    ///
    /// Returns an error if the configuration is invalid.
    ///
    /// # Example
    ///
    /// ```
    /// use keychunk::ChunkConfig;
    ///
    /// let config = ChunkConfig::default().with_min_chunk_size(0);
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), ChunkError> {
        Self::new(self.min_chunk_size).map(|_| ())
    }
}

impl Default for ChunkConfig {
    fn default() -> Self {
        Self {
            min_chunk_size: DEFAULT_MIN_CHUNK_SIZE,
            key_column: DEFAULT_KEY_COLUMN.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ChunkConfig::default();
        assert_eq!(config.min_chunk_size(), DEFAULT_MIN_CHUNK_SIZE);
        assert_eq!(config.key_column(), DEFAULT_KEY_COLUMN);
    }

    #[test]
    fn test_builder_pattern() {
        let config = ChunkConfig::default()
            .with_min_chunk_size(500)
            .with_key_column("timestamp");

        assert_eq!(config.min_chunk_size(), 500);
        assert_eq!(config.key_column(), "timestamp");
    }

    #[test]
    fn test_invalid_config_zero_size() {
        let result = ChunkConfig::new(0);
        assert!(result.is_err());
    }

    #[test]
    fn test_min_size_of_one_is_valid() {
        let config = ChunkConfig::new(1).unwrap();
        assert_eq!(config.min_chunk_size(), 1);
    }

    #[test]
    fn test_validate_catches_builder_zero() {
        let config = ChunkConfig::default().with_min_chunk_size(0);
        assert!(config.validate().is_err());
    }
}
