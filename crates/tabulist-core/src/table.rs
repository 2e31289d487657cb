//! Table type - the parsed document

use std::fmt;

use crate::cell::{Cell, CellHandle};
use crate::error::{Error, Result};
use crate::list::{Handles, IndexedList, Iter, ListId};
use crate::row::{Row, RowHandle};

/// Row/column coordinates of a cell within a [`Table`] (0-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellPosition {
    /// Row index
    pub row: usize,
    /// Column index within the row
    pub column: usize,
}

impl CellPosition {
    /// Create a new position
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

impl fmt::Display for CellPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// An ordered sequence of rows
///
/// Rows need not have equal lengths. Cells can be reached through the table
/// either by `(row, column)` coordinates or by a [`CellHandle`]; a cell
/// handle's owner identifies the row it lives in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    rows: IndexedList<Row>,
}

impl Table {
    /// Create a new empty table
    pub fn new() -> Self {
        Self {
            rows: IndexedList::new(),
        }
    }

    /// Identity of this table; the owner of every handle to its rows
    pub fn id(&self) -> ListId {
        self.rows.id()
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if the table has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Total number of cells across all rows
    pub fn cell_count(&self) -> usize {
        self.rows().map(Row::len).sum()
    }

    /// Iterate over the rows in order
    pub fn rows(&self) -> Iter<'_, Row> {
        self.rows.iter()
    }

    /// Iterate over the row handles in order
    pub fn handles(&self) -> Handles<'_, Row> {
        self.rows.handles()
    }

    /// Collect every row's values into owned strings
    pub fn to_strings(&self) -> Vec<Vec<String>> {
        self.rows().map(Row::to_strings).collect()
    }

    /// Handle of the first row
    pub fn head(&self) -> Option<RowHandle> {
        self.rows.head()
    }

    /// Handle of the last row
    pub fn tail(&self) -> Option<RowHandle> {
        self.rows.tail()
    }

    /// Handle of the row after `handle`
    pub fn next(&self, handle: RowHandle) -> Option<RowHandle> {
        self.rows.next(handle)
    }

    /// Handle of the row before `handle`
    pub fn prev(&self, handle: RowHandle) -> Option<RowHandle> {
        self.rows.prev(handle)
    }

    /// Get the row at `index`
    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    /// Get a mutable reference to the row at `index`
    pub fn row_mut(&mut self, index: usize) -> Option<&mut Row> {
        self.rows.get_mut(index)
    }

    /// Handle of the row at `index`
    pub fn row_handle(&self, index: usize) -> Option<RowHandle> {
        self.rows.handle_at(index)
    }

    /// Get the row addressed by `handle`
    pub fn row_by_handle(&self, handle: RowHandle) -> Option<&Row> {
        self.rows.node(handle)
    }

    /// Get a mutable reference to the row addressed by `handle`
    pub fn row_by_handle_mut(&mut self, handle: RowHandle) -> Option<&mut Row> {
        self.rows.node_mut(handle)
    }

    /// Get the cell at `(row, column)`
    pub fn cell(&self, row: usize, column: usize) -> Option<&Cell> {
        self.row(row)?.cell(column)
    }

    /// Get a mutable reference to the cell at `(row, column)`
    pub fn cell_mut(&mut self, row: usize, column: usize) -> Option<&mut Cell> {
        self.row_mut(row)?.cell_mut(column)
    }

    /// Get the value of the cell at `(row, column)`
    pub fn value(&self, row: usize, column: usize) -> Option<&str> {
        self.cell(row, column).map(Cell::value)
    }

    /// Resolve the row a cell handle belongs to
    ///
    /// Returns the row's handle together with the row itself.
    pub fn parent_row(&self, cell: CellHandle) -> Option<(RowHandle, &Row)> {
        let owner = cell.owner();
        let handle = self.rows.find(|row| row.id() == owner)?;
        let row = self.rows.node(handle)?;
        row.is_mapped(cell).then_some((handle, row))
    }

    /// Get the cell addressed by `handle`, wherever it lives in the table
    pub fn cell_by_handle(&self, handle: CellHandle) -> Option<&Cell> {
        self.parent_row(handle)?.1.cell_by_handle(handle)
    }

    /// Get a mutable reference to the cell addressed by `handle`
    pub fn cell_by_handle_mut(&mut self, handle: CellHandle) -> Option<&mut Cell> {
        let (row, _) = self.parent_row(handle)?;
        self.rows.node_mut(row)?.cell_by_handle_mut(handle)
    }

    /// Handles of the first cell whose value equals `value`, scanning rows in order
    pub fn find(&self, value: &str) -> Option<(RowHandle, CellHandle)> {
        self.handles().find_map(|row_handle| {
            let row = self.rows.node(row_handle)?;
            row.find(value).map(|cell| (row_handle, cell))
        })
    }

    /// Coordinates of the first cell whose value equals `value`
    pub fn position_of_value(&self, value: &str) -> Option<CellPosition> {
        self.rows().enumerate().find_map(|(row_index, row)| {
            row.position_of_value(value)
                .map(|column| CellPosition::new(row_index, column))
        })
    }

    /// Coordinates of the first cell equal to `cell`
    pub fn position_of_cell(&self, cell: &Cell) -> Option<CellPosition> {
        self.position_of_value(cell.value())
    }

    /// Index of the first row equal to `row`
    pub fn position_of_row(&self, row: &Row) -> Option<usize> {
        self.rows.position_where(|candidate| candidate == row)
    }

    /// Current index of the row addressed by `handle`
    pub fn row_position(&self, handle: RowHandle) -> Option<usize> {
        self.rows.position(handle)
    }

    /// Current coordinates of the cell addressed by `handle`
    pub fn cell_position(&self, handle: CellHandle) -> Option<CellPosition> {
        let (row_handle, row) = self.parent_row(handle)?;
        let column = row.position(handle)?;
        let row_index = self.rows.position(row_handle)?;
        Some(CellPosition::new(row_index, column))
    }

    /// Check if `handle` addresses a row mapped into this table
    pub fn is_row_mapped(&self, handle: RowHandle) -> bool {
        self.rows.contains(handle)
    }

    /// Check if `handle` addresses a cell mapped into any row of this table
    pub fn is_cell_mapped(&self, handle: CellHandle) -> bool {
        self.parent_row(handle).is_some()
    }

    /// Check if a row equal to `row` is in this table
    pub fn contains_row(&self, row: &Row) -> bool {
        self.position_of_row(row).is_some()
    }

    /// Check if a cell equal to `cell` is anywhere in this table
    pub fn contains_cell(&self, cell: &Cell) -> bool {
        self.position_of_cell(cell).is_some()
    }

    /// Check if any cell holds `value`
    pub fn contains_value(&self, value: &str) -> bool {
        self.position_of_value(value).is_some()
    }

    /// Map a row onto the end of the table
    pub fn push_row(&mut self, row: Row) -> RowHandle {
        self.rows.push_back(row)
    }

    /// Map a row so that it ends up at `index`
    pub fn insert_row(&mut self, index: usize, row: Row) -> Result<RowHandle> {
        self.rows.insert_at(index, row)
    }

    /// Map a cell so that it ends up at `(row, column)`
    ///
    /// The row must exist, except that `(len(), 0)` opens a new last row
    /// holding just this cell.
    pub fn insert_cell(&mut self, row: usize, column: usize, cell: Cell) -> Result<CellHandle> {
        let len = self.len();
        if row == len && column == 0 {
            let mut new_row = Row::new();
            let handle = new_row.push(cell);
            self.push_row(new_row);
            return Ok(handle);
        }
        match self.row_mut(row) {
            Some(target) => target.insert(column, cell),
            None => Err(Error::IndexOutOfRange { index: row, len }),
        }
    }

    /// Insert a new cell holding `value` at `(row, column)`
    pub fn insert_value<S: Into<String>>(
        &mut self,
        row: usize,
        column: usize,
        value: S,
    ) -> Result<CellHandle> {
        self.insert_cell(row, column, Cell::new(value))
    }

    /// Detach the row at `index` and hand it back
    pub fn pop_row(&mut self, index: usize) -> Option<Row> {
        self.rows.remove_at(index)
    }

    /// Detach the cell at `(row, column)` and hand it back
    pub fn pop_cell(&mut self, row: usize, column: usize) -> Option<Cell> {
        self.row_mut(row)?.pop(column)
    }

    /// Detach and drop the row at `index`
    ///
    /// Returns `false` if there was no row at `index`.
    pub fn delete_row(&mut self, index: usize) -> bool {
        self.pop_row(index).is_some()
    }

    /// Detach and drop the cell at `(row, column)`
    pub fn delete_cell(&mut self, row: usize, column: usize) -> bool {
        self.pop_cell(row, column).is_some()
    }

    /// Detach the row addressed by `handle` and hand it back
    pub fn unmap_row(&mut self, handle: RowHandle) -> Result<Row> {
        self.rows.remove(handle)
    }

    /// Detach the cell addressed by `handle` from whichever row holds it
    pub fn unmap_cell(&mut self, handle: CellHandle) -> Result<Cell> {
        let (row, _) = self.parent_row(handle).ok_or(Error::ForeignNode)?;
        match self.rows.node_mut(row) {
            Some(row) => row.unmap(handle),
            None => Err(Error::ForeignNode),
        }
    }

    /// Detach and drop the row addressed by `handle`
    pub fn delete_row_node(&mut self, handle: RowHandle) -> Result<()> {
        self.unmap_row(handle).map(drop)
    }

    /// Detach and drop the cell addressed by `handle`
    pub fn delete_cell_node(&mut self, handle: CellHandle) -> Result<()> {
        self.unmap_cell(handle).map(drop)
    }

    /// Remove every row
    pub fn clear(&mut self) {
        self.rows.clear();
    }

    /// Panic if any list in the table has broken structural invariants
    pub fn assert_consistent(&self) {
        self.rows.assert_consistent();
        for row in self.rows() {
            row.assert_consistent();
        }
    }
}

impl FromIterator<Row> for Table {
    fn from_iter<I: IntoIterator<Item = Row>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}

impl Extend<Row> for Table {
    fn extend<I: IntoIterator<Item = Row>>(&mut self, iter: I) {
        self.rows.extend(iter);
    }
}

impl<'a> IntoIterator for &'a Table {
    type Item = &'a Row;
    type IntoIter = Iter<'a, Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows()
    }
}

impl IntoIterator for Table {
    type Item = Row;
    type IntoIter = crate::list::IntoIter<Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}

/// Flat form: `[["a", "b"], ["c"]]`
impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{row}")?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn customers() -> Table {
        [
            Row::from_values(["Name", "Age", "City"]),
            Row::from_values(["Alice", "30", "NYC"]),
            Row::from_values(["Julian Applebottom", "41", "SF"]),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_coordinate_lookup() {
        let table = customers();
        assert_eq!(table.len(), 3);
        assert_eq!(table.cell_count(), 9);
        assert_eq!(table.value(1, 2), Some("NYC"));
        assert_eq!(table.value(3, 0), None);
        assert_eq!(table.value(0, 3), None);
        assert_eq!(
            table.position_of_value("41"),
            Some(CellPosition::new(2, 1))
        );
        assert_eq!(table.position_of_value("LA"), None);
    }

    #[test]
    fn test_cell_handle_leads_to_parent_row() {
        let table = customers();
        let age_column = table.row(0).unwrap().position_of_value("Age").unwrap();

        let (row_handle, cell_handle) = table.find("Julian Applebottom").unwrap();
        let (parent_handle, parent) = table.parent_row(cell_handle).unwrap();
        assert_eq!(parent_handle, row_handle);
        assert_eq!(cell_handle.owner(), parent.id());
        assert_eq!(parent.value(age_column), Some("41"));
        assert_eq!(table.cell_position(cell_handle), Some(CellPosition::new(2, 0)));
        assert!(table.is_cell_mapped(cell_handle));
    }

    #[test]
    fn test_insert_cell_opens_new_row_only_at_end() {
        let mut table = customers();
        let handle = table.insert_value(3, 0, "Bob").unwrap();
        assert_eq!(table.len(), 4);
        assert_eq!(table.cell_position(handle), Some(CellPosition::new(3, 0)));

        table.insert_value(3, 1, "25").unwrap();
        assert_eq!(table.row(3).unwrap().to_strings(), vec!["Bob", "25"]);

        assert_eq!(
            table.insert_value(5, 0, "x").unwrap_err(),
            Error::IndexOutOfRange { index: 5, len: 4 }
        );
        assert_eq!(
            table.insert_value(4, 1, "x").unwrap_err(),
            Error::IndexOutOfRange { index: 4, len: 4 }
        );
        table.assert_consistent();
    }

    #[test]
    fn test_pop_and_delete_rows() {
        let mut table = customers();
        let header = table.pop_row(0).unwrap();
        assert_eq!(header.to_strings(), vec!["Name", "Age", "City"]);
        assert_eq!(table.len(), 2);
        assert!(!table.contains_row(&header));

        let moved = table.insert_row(2, header).unwrap();
        assert_eq!(table.row_position(moved), Some(2));
        assert!(table.delete_row(0));
        assert!(!table.delete_row(7));
        assert_eq!(table.row(0).unwrap().value(0), Some("Julian Applebottom"));
        table.assert_consistent();
    }

    #[test]
    fn test_pop_then_delete_does_not_release_twice() {
        let mut table = customers();
        let handle = table.row_handle(1).unwrap();
        let popped = table.unmap_row(handle).unwrap();
        assert_eq!(popped.value(0), Some("Alice"));
        assert_eq!(table.delete_row_node(handle), Err(Error::ForeignNode));
        assert_eq!(table.len(), 2);

        let (_, cell) = table.find("SF").unwrap();
        table.delete_cell_node(cell).unwrap();
        assert_eq!(table.delete_cell_node(cell), Err(Error::ForeignNode));
        assert_eq!(table.row(1).unwrap().len(), 2);
        table.assert_consistent();
    }

    #[test]
    fn test_detached_row_keeps_its_cell_handles() {
        let mut table = customers();
        let (row_handle, cell_handle) = table.find("NYC").unwrap();
        let row = table.unmap_row(row_handle).unwrap();
        assert!(!table.is_cell_mapped(cell_handle));
        assert_eq!(row.cell_by_handle(cell_handle).map(Cell::value), Some("NYC"));

        let mut other = Table::new();
        other.push_row(row);
        assert_eq!(other.cell_position(cell_handle), Some(CellPosition::new(0, 2)));
    }

    #[test]
    fn test_clone_does_not_touch_source() {
        let table = customers();
        let mut copy = table.clone();
        assert_eq!(copy, table);
        assert_eq!(table.len(), 3);

        copy.row_mut(0).unwrap().push_value("Zip");
        copy.delete_row(2);
        assert_ne!(copy, table);
        assert_eq!(table, customers());
        assert!(table.row_handle(0).map(|h| !copy.is_row_mapped(h)).unwrap());
    }

    #[test]
    fn test_membership() {
        let table = customers();
        assert!(table.contains_value("Alice"));
        assert!(table.contains_cell(&Cell::from("SF")));
        assert!(table.contains_row(&Row::from_values(["Alice", "30", "NYC"])));
        assert!(!table.contains_row(&Row::from_values(["Alice", "30"])));
        assert_eq!(
            table.position_of_cell(&Cell::from("City")),
            Some(CellPosition::new(0, 2))
        );
    }

    #[test]
    fn test_traversal_primitives() {
        let table = customers();
        let mut names = Vec::new();
        let mut cursor = table.head();
        while let Some(handle) = cursor {
            names.push(table.row_by_handle(handle).unwrap().value(0).unwrap());
            cursor = table.next(handle);
        }
        assert_eq!(names, vec!["Name", "Alice", "Julian Applebottom"]);
        assert_eq!(table.prev(table.tail().unwrap()), table.row_handle(1));
    }

    #[test]
    fn test_display_flat() {
        let table: Table = [Row::from_values(["a", "b"]), Row::from_values(["c"])]
            .into_iter()
            .collect();
        assert_eq!(table.to_string(), r#"[["a", "b"], ["c"]]"#);
    }
}
