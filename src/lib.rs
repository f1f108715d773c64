//! keychunk
//!
//! Key-atomic chunking for in-memory tables.
//!
//! `keychunk` partitions a [`Table`] into an ordered sequence of batches
//! ("chunks") for downstream processing (per-batch writes, parallel jobs).
//! It is designed as a small, composable primitive with two guarantees:
//!
//! - every chunk except possibly the last holds at least `min_chunk_size` rows
//! - rows sharing one value of the key column are never split across chunks
//!
//! The crate intentionally:
//! - does NOT consume, store, or parallelize chunks
//! - does NOT manage files or I/O
//! - does NOT mutate the input table
//! - does NOT persist anything between calls
//!
//! It only does one thing: **Table in → key-atomic chunks out**
//!
//! # Chunking
//!
//! ```
//! use keychunk::{ChunkConfig, Chunker, Table, Value};
//!
//! fn main() -> Result<(), keychunk::ChunkError> {
//!     let table = Table::from_columns(vec![(
//!         "date",
//!         vec![Value::from(3i64), Value::from(1i64), Value::from(3i64)],
//!     )])?;
//!
//!     let config = ChunkConfig::new(2)?;
//!     let chunker = Chunker::new(config);
//!
//!     for chunk in chunker.chunk(&table)? {
//!         println!(
//!             "chunk of {} rows, keys {}..{}",
//!             chunk.len(),
//!             chunk.min_key(),
//!             chunk.max_key()
//!         );
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Synthetic input (feature = "generate")
//!
//! ```
//! # #[cfg(feature = "generate")]
//! # fn demo() -> Result<(), keychunk::ChunkError> {
//! use chrono::NaiveDate;
//! use keychunk::{Frequency, TableGenerator};
//!
//! let start = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap().into();
//! let end = NaiveDate::from_ymd_opt(2023, 1, 10).unwrap().into();
//!
//! let table = TableGenerator::new(start, end, 1000, Frequency::Daily)?
//!     .with_n_unique_keys(10)
//!     .with_seed(42)
//!     .generate()?;
//!
//! assert_eq!(table.len(), 1000);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod chunk;
mod chunker;
mod config;
mod error;
mod table;

#[cfg(feature = "generate")]
mod generate;

//
// Public surface (intentionally tiny)
//

pub use chunk::Chunk;
pub use chunker::Chunker;
pub use config::ChunkConfig;
pub use error::ChunkError;
pub use table::{Table, Value};

#[cfg(feature = "generate")]
pub use generate::{Frequency, TableGenerator};
