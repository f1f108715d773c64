//! Synthetic table generation.
//!
//! - [`TableGenerator`] - Produces tables with a repeated-timestamp key column
//! - [`Frequency`] - Grid step for candidate timestamps

mod generator;

pub use generator::{Frequency, TableGenerator};
