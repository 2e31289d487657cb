//! # tabulist-core
//!
//! Core data structures for the tabulist CSV library.
//!
//! This crate provides:
//! - [`IndexedList`] - a position-addressable doubly-linked list with
//!   O(1) splicing and generation-checked [`NodeHandle`]s
//! - [`Cell`], [`Row`], [`Table`] - the parsed-document model, built on
//!   `IndexedList` (cells in a row, rows in a table)
//!
//! ## Example
//!
//! ```rust
//! use tabulist_core::{Row, Table};
//!
//! let mut table = Table::new();
//! table.push_row(Row::from_values(["Name", "Age"]));
//! table.push_row(Row::from_values(["Alice", "30"]));
//!
//! let (_, cell) = table.find("Alice").unwrap();
//! let (_, row) = table.parent_row(cell).unwrap();
//! assert_eq!(row.value(1), Some("30"));
//!
//! let header = table.pop_row(0).unwrap();
//! assert_eq!(header.to_strings(), vec!["Name", "Age"]);
//! assert_eq!(table.len(), 1);
//! ```

pub mod cell;
pub mod error;
pub mod list;
pub mod row;
pub mod table;

#[cfg(feature = "serde")]
mod ser;

// Re-exports for convenience
pub use cell::{Cell, CellHandle};
pub use error::{Error, Result};
pub use list::{IndexedList, ListId, NodeHandle};
pub use row::{Row, RowHandle};
pub use table::{CellPosition, Table};
