//! Streaming tokenizer building a [`Table`] from byte chunks
//!
//! The tokenizer is push-driven: feed it the source one chunk at a time and
//! call [`StreamTokenizer::finish`] at end-of-source. All scan state (the
//! quote parity, the bytes of the lexeme in progress, a pending CR) carries
//! over between chunks, so where the chunk boundaries fall never changes
//! the resulting table.

use tabulist_core::{Row, Table};
use tracing::trace;

use crate::error::CsvResult;
use crate::normalize::normalize;
use crate::options::CsvReadOptions;

/// Incremental CSV scanner
#[derive(Debug)]
pub struct StreamTokenizer {
    delimiter: u8,
    quote: u8,
    strip_spaces: bool,
    discard_empty_cells: bool,

    table: Table,
    /// Row being filled; created on its first kept cell
    row: Option<Row>,
    /// Raw bytes of the lexeme in progress, possibly spanning chunks
    lexeme: Vec<u8>,
    in_quotes: bool,
    /// Some byte of the current record has been consumed
    record_open: bool,
    /// Previous chunk ended in a CR terminator; swallow a leading LF
    pending_cr: bool,
}

impl StreamTokenizer {
    /// Create a tokenizer for the given options
    ///
    /// The options are validated and the space-delimiter override applied.
    pub fn new(options: &CsvReadOptions) -> CsvResult<Self> {
        let options = options.resolved()?;
        Ok(Self {
            delimiter: options.delimiter,
            quote: options.quote,
            strip_spaces: options.strip_spaces,
            discard_empty_cells: options.discard_empty_cells,
            table: Table::new(),
            row: None,
            lexeme: Vec::new(),
            in_quotes: false,
            record_open: false,
            pending_cr: false,
        })
    }

    /// Scan one chunk of the source
    pub fn feed(&mut self, chunk: &[u8]) {
        if chunk.is_empty() {
            return;
        }
        let mut pos = 0;
        if std::mem::take(&mut self.pending_cr) && chunk.first() == Some(&b'\n') {
            pos = 1;
        }
        let mut start = pos;

        while pos < chunk.len() {
            let byte = chunk[pos];
            if byte == self.quote {
                self.in_quotes = !self.in_quotes;
            } else if !self.in_quotes {
                if byte == self.delimiter {
                    self.lexeme.extend_from_slice(&chunk[start..pos]);
                    self.end_field();
                    start = pos + 1;
                } else if byte == b'\n' || byte == b'\r' {
                    self.lexeme.extend_from_slice(&chunk[start..pos]);
                    self.end_record();
                    if byte == b'\r' {
                        match chunk.get(pos + 1) {
                            Some(b'\n') => pos += 1,
                            Some(_) => {}
                            None => self.pending_cr = true,
                        }
                    }
                    pos += 1;
                    start = pos;
                    continue;
                }
            }
            self.record_open = true;
            pos += 1;
        }

        if start < chunk.len() {
            self.lexeme.extend_from_slice(&chunk[start..]);
        }
        trace!(
            bytes = chunk.len(),
            rows = self.table.len(),
            carried = self.lexeme.len(),
            in_quotes = self.in_quotes,
            "scanned chunk"
        );
    }

    /// Close the source and return the finished table
    ///
    /// A record still open at end-of-source is completed, even if it is
    /// inside an unterminated quote.
    pub fn finish(mut self) -> Table {
        if self.record_open {
            self.end_record();
        }
        self.table
    }

    fn end_field(&mut self) {
        let value = normalize(&self.lexeme, self.quote, true, self.strip_spaces);
        self.lexeme.clear();
        if self.discard_empty_cells && value.is_empty() {
            return;
        }
        let value = match String::from_utf8(value) {
            Ok(value) => value,
            Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
        };
        self.row.get_or_insert_with(Row::new).push_value(value);
    }

    fn end_record(&mut self) {
        self.end_field();
        let row = self.row.take().unwrap_or_default();
        trace!(row = self.table.len(), cells = row.len(), "completed record");
        self.table.push_row(row);
        self.in_quotes = false;
        self.record_open = false;
    }
}
