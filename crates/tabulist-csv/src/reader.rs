//! CSV reader

use std::fs::File;
use std::io::{self, ErrorKind, Read};
use std::path::Path;

use tabulist_core::{Row, Table};
use tracing::{debug, warn};

use crate::error::{CsvError, CsvResult};
use crate::options::CsvReadOptions;
use crate::tokenizer::StreamTokenizer;

/// CSV reader
///
/// Every entry point parses the whole source and returns a complete
/// [`Table`]; on error nothing partial is returned.
pub struct CsvReader;

impl CsvReader {
    /// Parse from exactly one of a chunked reader or an in-memory buffer
    ///
    /// Supplying both or neither is a configuration error. A reader is
    /// consumed `options.chunk_size` bytes at a time; a buffer is scanned as
    /// a single chunk.
    pub fn parse_source<R: Read>(
        reader: Option<R>,
        buffer: Option<&[u8]>,
        options: &CsvReadOptions,
    ) -> CsvResult<Table> {
        match (reader, buffer) {
            (Some(_), Some(_)) => Err(CsvError::AmbiguousSource),
            (None, None) => Err(CsvError::MissingSource),
            (Some(reader), None) => Self::parse_chunked(reader, options),
            (None, Some(buffer)) => Self::parse_buffer(buffer, options),
        }
    }

    /// Read a CSV file into a table
    pub fn read_file<P: AsRef<Path>>(path: P, options: &CsvReadOptions) -> CsvResult<Table> {
        let path = path.as_ref();
        debug!(path = %path.display(), "opening CSV file");
        let file = File::open(path)?;
        Self::read(file, options)
    }

    /// Read CSV from a reader into a table
    pub fn read<R: Read>(reader: R, options: &CsvReadOptions) -> CsvResult<Table> {
        Self::parse_source(Some(reader), None, options)
    }

    /// Parse an in-memory buffer into a table
    pub fn read_bytes(bytes: &[u8], options: &CsvReadOptions) -> CsvResult<Table> {
        Self::parse_source(None::<io::Empty>, Some(bytes), options)
    }

    /// Parse a string into a table
    pub fn read_str(text: &str, options: &CsvReadOptions) -> CsvResult<Table> {
        Self::read_bytes(text.as_bytes(), options)
    }

    /// Parse a string and keep only its first row
    ///
    /// Returns `Ok(None)` if the string holds no records.
    pub fn read_row_str(text: &str, options: &CsvReadOptions) -> CsvResult<Option<Row>> {
        let mut table = Self::read_str(text, options)?;
        Ok(table.pop_row(0))
    }

    fn parse_buffer(buffer: &[u8], options: &CsvReadOptions) -> CsvResult<Table> {
        let mut tokenizer = StreamTokenizer::new(options)?;
        tokenizer.feed(buffer);
        let table = tokenizer.finish();
        debug!(bytes = buffer.len(), rows = table.len(), "parsed CSV buffer");
        Ok(table)
    }

    fn parse_chunked<R: Read>(mut reader: R, options: &CsvReadOptions) -> CsvResult<Table> {
        let mut tokenizer = StreamTokenizer::new(options)?;
        let mut chunk = vec![0u8; options.chunk_size];
        let mut total = 0usize;

        loop {
            let read = match reader.read(&mut chunk) {
                Ok(0) => break,
                Ok(read) => read,
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => {
                    warn!(offset = total, error = %err, "read failed, discarding partial table");
                    return Err(err.into());
                }
            };
            tokenizer.feed(&chunk[..read]);
            total += read;
        }

        let table = tokenizer.finish();
        debug!(
            bytes = total,
            chunk_size = options.chunk_size,
            rows = table.len(),
            "parsed CSV stream"
        );
        Ok(table)
    }
}
