//! Tabulist CLI - CSV inspection and conversion tool

use anyhow::{ensure, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tabulist::display::{self, Style};
use tabulist::prelude::*;
use tabulist::DEFAULT_CHUNK_SIZE;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tabulist")]
#[command(author, version, about = "CSV inspection and conversion tool")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a CSV file and print the resulting table
    Print {
        /// Input CSV file
        input: PathBuf,

        /// Output layout
        #[arg(short, long, value_enum, default_value_t = PrintStyle::Flat)]
        style: PrintStyle,

        #[command(flatten)]
        parse: ParseArgs,
    },

    /// Parse a CSV file and write it back out as normalized CSV
    #[command(alias = "csv")]
    ToCsv {
        /// Input CSV file
        input: PathBuf,

        /// Output CSV file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output field delimiter
        #[arg(long, default_value = ",")]
        out_delimiter: char,

        /// End output lines with CRLF instead of LF
        #[arg(long)]
        crlf: bool,

        #[command(flatten)]
        parse: ParseArgs,
    },

    /// Parse a CSV file and print it as a JSON array of rows
    Json {
        /// Input CSV file
        input: PathBuf,

        #[command(flatten)]
        parse: ParseArgs,
    },

    /// Show information about a CSV file
    Info {
        /// Input CSV file
        input: PathBuf,

        #[command(flatten)]
        parse: ParseArgs,
    },
}

/// Options controlling how the input is parsed
#[derive(Args)]
struct ParseArgs {
    /// Field delimiter
    #[arg(short, long, default_value = ",")]
    delimiter: char,

    /// Quote character
    #[arg(short, long, default_value = "\"")]
    quote: char,

    /// Trim leading and trailing spaces from every field
    #[arg(long)]
    strip_spaces: bool,

    /// Drop fields that are empty after parsing
    #[arg(long)]
    discard_empty: bool,

    /// Bytes read from the file at a time
    #[arg(long, default_value_t = DEFAULT_CHUNK_SIZE)]
    chunk_size: usize,
}

impl ParseArgs {
    fn to_options(&self) -> Result<CsvReadOptions> {
        Ok(CsvReadOptions::new()
            .delimiter(ascii_byte(self.delimiter, "delimiter")?)
            .quote(ascii_byte(self.quote, "quote")?)
            .strip_spaces(self.strip_spaces)
            .discard_empty_cells(self.discard_empty)
            .chunk_size(self.chunk_size))
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum PrintStyle {
    /// Whole table on one line
    Flat,
    /// One row per line
    Pretty,
    /// One cell per line
    Super,
}

impl From<PrintStyle> for Style {
    fn from(style: PrintStyle) -> Self {
        match style {
            PrintStyle::Flat => Style::Flat,
            PrintStyle::Pretty => Style::Pretty,
            PrintStyle::Super => Style::SuperPretty,
        }
    }
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Print {
            input,
            style,
            parse,
        } => print_table(&input, style, &parse),
        Commands::ToCsv {
            input,
            output,
            out_delimiter,
            crlf,
            parse,
        } => to_csv(&input, output.as_deref(), out_delimiter, crlf, &parse),
        Commands::Json { input, parse } => to_json(&input, &parse),
        Commands::Info { input, parse } => show_info(&input, &parse),
    }
}

/// Log to stderr, filtered by `RUST_LOG` (default: warn)
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .init();
}

fn ascii_byte(c: char, what: &str) -> Result<u8> {
    ensure!(c.is_ascii(), "{what} must be a single ASCII character, got {c:?}");
    Ok(c as u8)
}

fn load(input: &Path, parse: &ParseArgs) -> Result<Table> {
    let options = parse.to_options()?;
    debug!(path = %input.display(), ?options, "loading table");
    CsvReader::read_file(input, &options)
        .with_context(|| format!("Failed to parse '{}'", input.display()))
}

fn print_table(input: &Path, style: PrintStyle, parse: &ParseArgs) -> Result<()> {
    let table = load(input, parse)?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", display::table(&table, style.into()))
        .context("Failed to write to stdout")?;
    Ok(())
}

fn to_csv(
    input: &Path,
    output: Option<&Path>,
    out_delimiter: char,
    crlf: bool,
    parse: &ParseArgs,
) -> Result<()> {
    let table = load(input, parse)?;
    let options = CsvWriteOptions {
        delimiter: ascii_byte(out_delimiter, "output delimiter")?,
        line_terminator: if crlf {
            LineTerminator::CRLF
        } else {
            LineTerminator::LF
        },
        ..Default::default()
    };

    if let Some(output_path) = output {
        CsvWriter::write_file(&table, output_path, &options)
            .with_context(|| format!("Failed to write '{}'", output_path.display()))?;
        eprintln!("Wrote {} rows to '{}'", table.len(), output_path.display());
    } else {
        CsvWriter::write(&table, io::stdout().lock(), &options)
            .context("Failed to write to stdout")?;
    }

    Ok(())
}

fn to_json(input: &Path, parse: &ParseArgs) -> Result<()> {
    let table = load(input, parse)?;
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &table).context("Failed to serialize table")?;
    writeln!(stdout).context("Failed to write to stdout")?;
    Ok(())
}

fn show_info(input: &Path, parse: &ParseArgs) -> Result<()> {
    let table = load(input, parse)?;
    let widest = table.rows().map(Row::len).max().unwrap_or(0);
    let empty_rows = table.rows().filter(|row| row.is_empty()).count();

    println!("File: {}", input.display());
    println!("Rows: {}", table.len());
    println!("Widest row: {} cells", widest);
    println!("Cells: {}", table.cell_count());
    if empty_rows > 0 {
        println!("Empty rows: {}", empty_rows);
    }
    if let Some(header) = table.row(0) {
        println!("First row: {}", header);
    }

    Ok(())
}
