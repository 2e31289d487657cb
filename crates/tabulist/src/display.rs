//! Printers for tables and rows
//!
//! Every printer is a [`fmt::Display`] adapter borrowing the value it
//! renders, so it works with `println!`, `format!` and `write!` alike.
//! Cell values are wrapped in double quotes verbatim; no escaping is applied.
//!
//! ```rust
//! use tabulist::display;
//! use tabulist::{Row, Table};
//!
//! let table: Table = [Row::from_values(["a", "b"]), Row::from_values(["c"])]
//!     .into_iter()
//!     .collect();
//!
//! assert_eq!(display::flat(&table).to_string(), r#"[["a", "b"], ["c"]]"#);
//! assert_eq!(
//!     display::pretty(&table).to_string(),
//!     "[\n\t[\"a\", \"b\"],\n\t[\"c\"]\n]"
//! );
//! ```

use std::fmt;

use tabulist_core::{Row, Table};

/// Table layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Style {
    /// Everything on one line: `[["a", "b"], ["c"]]`
    #[default]
    Flat,
    /// One row per line, tab-indented
    Pretty,
    /// One cell per line, rows bracketed on their own lines
    SuperPretty,
}

/// [`Table`] rendered in a chosen [`Style`]
#[derive(Debug, Clone, Copy)]
pub struct TableDisplay<'a> {
    table: &'a Table,
    style: Style,
}

/// Render a table in the given style
pub fn table(table: &Table, style: Style) -> TableDisplay<'_> {
    TableDisplay { table, style }
}

/// Render a table on one line
pub fn flat(t: &Table) -> TableDisplay<'_> {
    table(t, Style::Flat)
}

/// Render a table with one row per line
pub fn pretty(t: &Table) -> TableDisplay<'_> {
    table(t, Style::Pretty)
}

/// Render a table with one cell per line
pub fn super_pretty(t: &Table) -> TableDisplay<'_> {
    table(t, Style::SuperPretty)
}

impl fmt::Display for TableDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.style {
            Style::Flat => write!(f, "{}", self.table),
            Style::Pretty => {
                f.write_str("[\n")?;
                write_lines(f, self.table.rows(), |f, row| write!(f, "\t{row}"))?;
                f.write_str("]")
            }
            Style::SuperPretty => {
                f.write_str("[\n")?;
                write_lines(f, self.table.rows(), |f, row| {
                    f.write_str("\t[\n")?;
                    write_lines(f, row.values(), |f, value| write!(f, "\t\t\"{value}\""))?;
                    f.write_str("\t]")
                })?;
                f.write_str("]")
            }
        }
    }
}

/// [`Row`] rendered with one cell per line
#[derive(Debug, Clone, Copy)]
pub struct PrettyRow<'a>(&'a Row);

/// Render a row with one cell per line
pub fn pretty_row(row: &Row) -> PrettyRow<'_> {
    PrettyRow(row)
}

impl fmt::Display for PrettyRow<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[\n")?;
        write_lines(f, self.0.values(), |f, value| write!(f, "\t\"{value}\""))?;
        f.write_str("]")
    }
}

/// Write each item on its own line, comma-separated
fn write_lines<I, F>(f: &mut fmt::Formatter<'_>, items: I, mut item: F) -> fmt::Result
where
    I: IntoIterator,
    F: FnMut(&mut fmt::Formatter<'_>, I::Item) -> fmt::Result,
{
    let mut items = items.into_iter().peekable();
    while let Some(next) = items.next() {
        item(f, next)?;
        if items.peek().is_some() {
            f.write_str(",")?;
        }
        f.write_str("\n")?;
    }
    Ok(())
}
