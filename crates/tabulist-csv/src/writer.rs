//! CSV writer

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use tabulist_core::Table;
use tracing::debug;

use crate::error::{CsvError, CsvResult};
use crate::options::{CsvWriteOptions, LineTerminator};

/// CSV writer
///
/// Fields are quoted only when they need it, so the output reads back into
/// an equal table with matching read options. The one exception is a row
/// with no cells: it is written as `""` and reads back as one empty cell.
pub struct CsvWriter;

impl CsvWriter {
    /// Write a table to a CSV file
    pub fn write_file<P: AsRef<Path>>(
        table: &Table,
        path: P,
        options: &CsvWriteOptions,
    ) -> CsvResult<()> {
        let path = path.as_ref();
        debug!(path = %path.display(), rows = table.len(), "writing CSV file");
        let file = File::create(path)?;
        Self::write(table, file, options)
    }

    /// Write a table to a writer
    pub fn write<W: Write>(table: &Table, writer: W, options: &CsvWriteOptions) -> CsvResult<()> {
        let terminator = match options.line_terminator {
            LineTerminator::LF => csv::Terminator::Any(b'\n'),
            LineTerminator::CRLF => csv::Terminator::CRLF,
            LineTerminator::CR => csv::Terminator::Any(b'\r'),
        };

        // Rows may differ in length
        let mut csv_writer = csv::WriterBuilder::new()
            .delimiter(options.delimiter)
            .quote(options.quote)
            .terminator(terminator)
            .flexible(true)
            .from_writer(writer);

        for row in table {
            csv_writer.write_record(row.values())?;
        }

        csv_writer.flush()?;
        Ok(())
    }

    /// Render a table as a CSV string
    pub fn to_string(table: &Table, options: &CsvWriteOptions) -> CsvResult<String> {
        let mut buffer = Vec::new();
        Self::write(table, &mut buffer, options)?;
        String::from_utf8(buffer)
            .map_err(|err| CsvError::Io(io::Error::new(io::ErrorKind::InvalidData, err)))
    }
}
