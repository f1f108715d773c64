//! Basic chunking example: generate a table, chunk it, summarize.
//!
//! Run with:
//!     cargo run --example chunk_table

use chrono::NaiveDate;
use keychunk::{ChunkConfig, Chunker, Frequency, TableGenerator};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Create some sample data: 10,000 rows over 100 distinct timestamps
    let start = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap().into();
    let end = NaiveDate::from_ymd_opt(2023, 2, 1).unwrap().into();

    let table = TableGenerator::new(start, end, 10_000, Frequency::Hourly)?
        .with_n_unique_keys(100)
        .with_seed(42)
        .generate()?;

    println!("Chunking {} rows of data...\n", table.len());

    // Chunk into batches of at least 500 rows, grouped on "date"
    let chunker = Chunker::new(ChunkConfig::new(500)?);
    let chunks = chunker.chunk(&table)?;

    let mut total_rows = 0;
    for (i, chunk) in chunks.iter().enumerate() {
        total_rows += chunk.len();
        println!(
            "Chunk {}: rows={}, keys={}..{}",
            i + 1,
            chunk.len(),
            chunk.min_key(),
            chunk.max_key()
        );
    }

    println!("\nTotal: {} chunks, {} rows", chunks.len(), total_rows);
    if !chunks.is_empty() {
        println!("Average chunk size: {} rows", total_rows / chunks.len());
    }

    Ok(())
}
