//! # tabulist-csv
//!
//! Streaming CSV tokenizer and writer for tabulist.
//!
//! [`CsvReader`] parses a chunked reader or an in-memory buffer into a
//! [`tabulist_core::Table`]; [`StreamTokenizer`] exposes the push-driven
//! scanner underneath it. [`CsvWriter`] writes a table back out.
//!
//! ```rust
//! use tabulist_csv::{CsvReadOptions, CsvReader};
//!
//! let options = CsvReadOptions::new().strip_spaces(true);
//! let table = CsvReader::read_str("a, \"b,c\" \n d", &options).unwrap();
//! assert_eq!(table.to_strings(), vec![vec!["a", "b,c"], vec!["d"]]);
//! ```

mod error;
pub mod normalize;
mod options;
mod reader;
mod tokenizer;
mod writer;

pub use error::{CsvError, CsvResult};
pub use normalize::normalize;
pub use options::{CsvReadOptions, CsvWriteOptions, LineTerminator, DEFAULT_CHUNK_SIZE};
pub use reader::CsvReader;
pub use tokenizer::StreamTokenizer;
pub use writer::CsvWriter;
