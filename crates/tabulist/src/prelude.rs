//! Prelude module - common imports for tabulist users
//!
//! ```rust
//! use tabulist::prelude::*;
//! ```

pub use crate::{
    // Model types
    Cell,
    CellHandle,
    CellPosition,
    // I/O types
    CsvError,
    CsvReadOptions,
    CsvReader,
    CsvResult,
    CsvWriteOptions,
    CsvWriter,
    // Error types
    Error,
    LineTerminator,
    Result,
    Row,
    RowHandle,
    Table,
    // Extension traits
    TableExt,
};
