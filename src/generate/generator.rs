//! Synthetic input producer - tables with repeated, non-unique timestamps.
//!
//! `TableGenerator` builds the canonical chunking input: a table whose key
//! column draws from a bounded set of distinct timestamps, with far more
//! rows than distinct keys. Tests, benches and demos use it as their input
//! source; the chunker makes no assumption about how its input was
//! produced.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use keychunk::{Frequency, TableGenerator};
//!
//! let start = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap().into();
//! let end = NaiveDate::from_ymd_opt(2023, 1, 10).unwrap().into();
//!
//! let table = TableGenerator::new(start, end, 200, Frequency::Daily)?
//!     .with_n_unique_keys(10)
//!     .with_seed(42)
//!     .generate()?;
//!
//! assert_eq!(table.len(), 200);
//! # Ok::<(), keychunk::ChunkError>(())
//! ```

use chrono::{Duration, NaiveDateTime};
use log::debug;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::config::DEFAULT_KEY_COLUMN;
use crate::error::ChunkError;
use crate::table::{Table, Value};

/// Default number of distinct key values to generate.
pub const DEFAULT_N_UNIQUE_KEYS: usize = 100;

/// Spacing of the candidate timestamp grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Frequency {
    /// One candidate per second.
    Secondly,
    /// One candidate per minute.
    Minutely,
    /// One candidate per hour.
    Hourly,
    /// One candidate per day.
    Daily,
}

impl Frequency {
    /// Returns the grid step.
    pub fn step(&self) -> Duration {
        match self {
            Frequency::Secondly => Duration::seconds(1),
            Frequency::Minutely => Duration::minutes(1),
            Frequency::Hourly => Duration::hours(1),
            Frequency::Daily => Duration::days(1),
        }
    }
}

/// Generates tables with a repeated-timestamp key column.
///
/// The generator lays an evenly spaced grid of candidate timestamps over
/// `start..=end`, samples `n_unique_keys` of them without replacement,
/// then draws `n_rows` values from the sample with replacement. The result
/// is a single-column table (column name `"date"` unless overridden) whose
/// key column repeats each distinct timestamp many times - the input shape
/// the chunker targets.
///
/// # Reproducibility
///
/// With a seed, generation is fully deterministic; without one, the RNG is
/// seeded from the OS.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use keychunk::{Frequency, TableGenerator};
///
/// let start = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap().into();
/// let end = NaiveDate::from_ymd_opt(2023, 2, 1).unwrap().into();
///
/// let generator = TableGenerator::new(start, end, 10_000, Frequency::Minutely)?
///     .with_seed(123);
///
/// let a = generator.generate()?;
/// let b = generator.generate()?;
/// assert_eq!(a, b);
/// # Ok::<(), keychunk::ChunkError>(())
/// ```
#[derive(Debug, Clone)]
pub struct TableGenerator {
    start: NaiveDateTime,
    end: NaiveDateTime,
    n_rows: usize,
    freq: Frequency,
    n_unique_keys: usize,
    seed: Option<u64>,
    key_column: String,
}

impl TableGenerator {
    /// Creates a new generator over the given time range.
    ///
    /// The distinct-key count defaults to [`DEFAULT_N_UNIQUE_KEYS`]; the
    /// emitted column name defaults to `"date"`.
    ///
    /// # Errors
    ///
    /// Returns [`ChunkError::InvalidConfig`] if `start` is not strictly
    /// before `end`.
    pub fn new(
        start: NaiveDateTime,
        end: NaiveDateTime,
        n_rows: usize,
        freq: Frequency,
    ) -> Result<Self, ChunkError> {
        if start >= end {
            return Err(ChunkError::InvalidConfig {
                message: "start must be before end",
            });
        }

        Ok(Self {
            start,
            end,
            n_rows,
            freq,
            n_unique_keys: DEFAULT_N_UNIQUE_KEYS,
            seed: None,
            key_column: DEFAULT_KEY_COLUMN.to_string(),
        })
    }

    /// Sets the number of distinct key values to sample.
    ///
    /// Note: This does not validate the configuration. Use
    /// [`TableGenerator::validate`] to check if the configuration is valid.
    pub fn with_n_unique_keys(mut self, n: usize) -> Self {
        self.n_unique_keys = n;
        self
    }

    /// Sets the RNG seed for reproducible output.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the name of the emitted key column.
    pub fn with_key_column(mut self, name: impl Into<String>) -> Self {
        self.key_column = name.into();
        self
    }

    /// Returns the total row count this generator emits.
    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    /// Returns the distinct-key count this generator samples.
    pub fn n_unique_keys(&self) -> usize {
        self.n_unique_keys
    }

    /// Validates the current configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ChunkError::InvalidConfig`] if `n_unique_keys` exceeds
    /// `n_rows`, if `n_unique_keys` is zero while rows were requested, or
    /// if the `start..=end` grid at the configured frequency holds fewer
    /// than `n_unique_keys` candidates.
    pub fn validate(&self) -> Result<(), ChunkError> {
        if self.n_unique_keys > self.n_rows {
            return Err(ChunkError::InvalidConfig {
                message: "n_unique_keys must not exceed n_rows",
            });
        }
        if self.n_unique_keys == 0 && self.n_rows > 0 {
            return Err(ChunkError::InvalidConfig {
                message: "n_unique_keys must be at least 1 when rows are requested",
            });
        }
        if self.grid_len() < self.n_unique_keys {
            return Err(ChunkError::InvalidConfig {
                message: "not enough grid points in the time range for n_unique_keys",
            });
        }
        Ok(())
    }

    /// Generates a table with `n_rows` rows and a single key column.
    ///
    /// Draws `n_unique_keys` distinct timestamps from the candidate grid
    /// without replacement, then fills the column by sampling them with
    /// replacement. A zero-row generator yields an empty table that still
    /// declares the key column.
    ///
    /// # Errors
    ///
    /// Returns [`ChunkError::InvalidConfig`] on the conditions
    /// [`TableGenerator::validate`] checks.
    pub fn generate(&self) -> Result<Table, ChunkError> {
        self.validate()?;

        if self.n_rows == 0 {
            return Table::from_columns(vec![(self.key_column.clone(), Vec::new())]);
        }

        let mut rng = match self.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };

        let grid = self.grid();
        let selected: Vec<NaiveDateTime> = grid
            .choose_multiple(&mut rng, self.n_unique_keys)
            .copied()
            .collect();

        let cells: Vec<Value> = (0..self.n_rows)
            .map(|_| Value::Timestamp(selected[rng.gen_range(0..selected.len())]))
            .collect();

        debug!(
            "generated {} rows over {} distinct keys in '{}'",
            self.n_rows, self.n_unique_keys, self.key_column
        );

        Table::from_columns(vec![(self.key_column.clone(), cells)])
    }

    /// Number of candidate timestamps in the `start..=end` grid.
    fn grid_len(&self) -> usize {
        let span = (self.end - self.start).num_seconds();
        let step = self.freq.step().num_seconds();
        (span / step + 1) as usize
    }

    /// Materializes the candidate grid.
    fn grid(&self) -> Vec<NaiveDateTime> {
        let step = self.freq.step();
        let mut points = Vec::with_capacity(self.grid_len());
        let mut t = self.start;
        while t <= self.end {
            points.push(t);
            t += step;
        }
        points
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::collections::HashSet;

    fn day(d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2023, 1, d).unwrap().into()
    }

    #[test]
    fn test_start_after_end_is_invalid() {
        let result = TableGenerator::new(day(10), day(1), 100, Frequency::Daily);
        assert!(matches!(result, Err(ChunkError::InvalidConfig { .. })));
    }

    #[test]
    fn test_more_unique_keys_than_rows_is_invalid() {
        let generator = TableGenerator::new(day(1), day(10), 5, Frequency::Daily)
            .unwrap()
            .with_n_unique_keys(10);
        assert!(generator.generate().is_err());
    }

    #[test]
    fn test_too_coarse_grid_is_invalid() {
        // 10 days at daily frequency: 10 grid points, 20 requested
        let generator = TableGenerator::new(day(1), day(10), 100, Frequency::Daily)
            .unwrap()
            .with_n_unique_keys(20);
        assert!(generator.generate().is_err());
    }

    #[test]
    fn test_row_count_and_key_bound() {
        let table = TableGenerator::new(day(1), day(10), 200, Frequency::Daily)
            .unwrap()
            .with_n_unique_keys(10)
            .with_seed(42)
            .generate()
            .unwrap();

        assert_eq!(table.len(), 200);
        assert_eq!(table.columns(), &["date"]);

        let distinct: HashSet<_> = table.column_values("date").unwrap().into_iter().collect();
        assert!(distinct.len() <= 10);
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let generator = TableGenerator::new(day(1), day(10), 50, Frequency::Hourly)
            .unwrap()
            .with_n_unique_keys(25)
            .with_seed(7);

        assert_eq!(generator.generate().unwrap(), generator.generate().unwrap());
    }

    #[test]
    fn test_zero_rows_yields_empty_table_with_column() {
        let table = TableGenerator::new(day(1), day(10), 0, Frequency::Daily)
            .unwrap()
            .with_n_unique_keys(0)
            .generate()
            .unwrap();

        assert!(table.is_empty());
        assert!(table.has_column("date"));
    }

    #[test]
    fn test_custom_key_column() {
        let table = TableGenerator::new(day(1), day(10), 10, Frequency::Daily)
            .unwrap()
            .with_n_unique_keys(5)
            .with_key_column("ts")
            .with_seed(1)
            .generate()
            .unwrap();

        assert!(table.has_column("ts"));
        assert!(!table.has_column("date"));
    }

    #[test]
    fn test_keys_come_from_grid() {
        let table = TableGenerator::new(day(1), day(3), 20, Frequency::Daily)
            .unwrap()
            .with_n_unique_keys(3)
            .with_seed(9)
            .generate()
            .unwrap();

        for value in table.column_values("date").unwrap() {
            let ts = value.as_timestamp().unwrap();
            assert!(ts >= day(1) && ts <= day(3), "key {} outside the grid", ts);
            assert_eq!(ts.time(), chrono::NaiveTime::MIN, "daily grid is midnight-aligned");
        }
    }
}
