//! CSV options

use crate::error::{CsvError, CsvResult};

/// Default size of one read from a chunked source, in bytes
pub const DEFAULT_CHUNK_SIZE: usize = 1024;

/// Options for reading CSV
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvReadOptions {
    /// Field delimiter (default: comma)
    pub delimiter: u8,
    /// Quote character (default: double quote)
    pub quote: u8,
    /// Trim leading/trailing spaces from every field
    pub strip_spaces: bool,
    /// Drop fields that are empty after normalization
    pub discard_empty_cells: bool,
    /// Bytes pulled from a reader per read (default: 1024)
    pub chunk_size: usize,
}

impl Default for CsvReadOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            quote: b'"',
            strip_spaces: false,
            discard_empty_cells: false,
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

impl CsvReadOptions {
    /// Create options with the defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the field delimiter
    pub fn delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set the quote character
    pub fn quote(mut self, quote: u8) -> Self {
        self.quote = quote;
        self
    }

    /// Trim leading/trailing spaces from fields
    pub fn strip_spaces(mut self, yes: bool) -> Self {
        self.strip_spaces = yes;
        self
    }

    /// Drop fields that end up empty
    pub fn discard_empty_cells(mut self, yes: bool) -> Self {
        self.discard_empty_cells = yes;
        self
    }

    /// Set the read chunk size in bytes
    pub fn chunk_size(mut self, bytes: usize) -> Self {
        self.chunk_size = bytes;
        self
    }

    /// Validate the options and apply the space-delimiter override
    ///
    /// With a space delimiter, `strip_spaces` is forced off and
    /// `discard_empty_cells` forced on: runs of spaces then separate fields
    /// without producing empty cells.
    pub fn resolved(&self) -> CsvResult<CsvReadOptions> {
        if self.chunk_size == 0 {
            return Err(CsvError::InvalidOptions(
                "chunk size must be at least 1 byte".to_string(),
            ));
        }
        if self.delimiter == self.quote {
            return Err(CsvError::InvalidOptions(format!(
                "delimiter and quote are both {:?}",
                self.delimiter as char
            )));
        }
        for (name, byte) in [("delimiter", self.delimiter), ("quote", self.quote)] {
            if byte == b'\n' || byte == b'\r' {
                return Err(CsvError::InvalidOptions(format!(
                    "{name} cannot be a line terminator"
                )));
            }
        }

        let mut resolved = self.clone();
        if resolved.delimiter == b' ' {
            resolved.strip_spaces = false;
            resolved.discard_empty_cells = true;
        }
        Ok(resolved)
    }
}

/// Options for writing CSV
#[derive(Debug, Clone)]
pub struct CsvWriteOptions {
    /// Field delimiter (default: comma)
    pub delimiter: u8,
    /// Quote character (default: double quote)
    pub quote: u8,
    /// Line terminator
    pub line_terminator: LineTerminator,
}

impl Default for CsvWriteOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            quote: b'"',
            line_terminator: LineTerminator::LF,
        }
    }
}

/// Line terminator type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineTerminator {
    /// Unix-style (LF)
    LF,
    /// Windows-style (CRLF)
    CRLF,
    /// Mac classic (CR)
    CR,
}
