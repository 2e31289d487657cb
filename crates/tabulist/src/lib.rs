//! # tabulist
//!
//! A Rust library for parsing CSV into a mutable table of rows and cells.
//!
//! Tabulist reads CSV from a file, any reader (pulled in bounded chunks) or
//! an in-memory buffer, and hands back a [`Table`] you can query and edit by
//! position, by value, or through stable handles.
//!
//! ## Features
//!
//! - Quoted fields with embedded delimiters, newlines and doubled quotes
//! - Optional space trimming and empty-cell discarding
//! - Results independent of the read chunk size
//! - O(1) append and handle-based removal on rows and tables
//! - Flat, pretty and one-cell-per-line printers
//! - CSV re-emission, and `serde` serialization behind the `serde` feature
//!
//! ## Example
//!
//! ```rust
//! use tabulist::prelude::*;
//!
//! let table = CsvReader::read_str(
//!     "name,city\n\"Smith, J\",Boston\n",
//!     &CsvReadOptions::default(),
//! )
//! .unwrap();
//!
//! assert_eq!(table.value(1, 0), Some("Smith, J"));
//! assert_eq!(table.position_of_value("Boston"), Some(CellPosition::new(1, 1)));
//! println!("{}", tabulist::display::pretty(&table));
//! ```

pub mod display;
pub mod prelude;

// Re-export core types
pub use tabulist_core::{
    Cell, CellHandle, CellPosition, Error, IndexedList, ListId, NodeHandle, Result, Row,
    RowHandle, Table,
};

// Re-export I/O types
pub use tabulist_csv::{
    normalize, CsvError, CsvReadOptions, CsvReader, CsvResult, CsvWriteOptions, CsvWriter,
    LineTerminator, StreamTokenizer, DEFAULT_CHUNK_SIZE,
};

use std::path::Path;

/// Extension trait for Table to add file I/O
///
/// Files ending in `.tsv` or `.tab` use a tab delimiter; everything else is
/// treated as comma-separated.
pub trait TableExt: Sized {
    /// Open a table from a file with the default options for its extension
    fn open<P: AsRef<Path>>(path: P) -> CsvResult<Self>;

    /// Save the table to a file with the default options for its extension
    fn save<P: AsRef<Path>>(&self, path: P) -> CsvResult<()>;
}

impl TableExt for Table {
    fn open<P: AsRef<Path>>(path: P) -> CsvResult<Table> {
        let path = path.as_ref();
        let options = CsvReadOptions::default().delimiter(delimiter_for(path));
        CsvReader::read_file(path, &options)
    }

    fn save<P: AsRef<Path>>(&self, path: P) -> CsvResult<()> {
        let path = path.as_ref();
        let options = CsvWriteOptions {
            delimiter: delimiter_for(path),
            ..Default::default()
        };
        CsvWriter::write_file(self, path, &options)
    }
}

fn delimiter_for(path: &Path) -> u8 {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase());

    match extension.as_deref() {
        Some("tsv") | Some("tab") => b'\t',
        _ => b',',
    }
}
