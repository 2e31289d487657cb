//! Row type

use std::fmt;

use crate::cell::{Cell, CellHandle};
use crate::error::Result;
use crate::list::{Handles, IndexedList, Iter, ListId};

/// Handle of a row mapped into a [`Table`](crate::Table)
pub type RowHandle = crate::list::NodeHandle;

/// An ordered sequence of cells forming one record
///
/// Cells are addressed either by index (0-based column) or by the
/// [`CellHandle`] returned when they were mapped in. Index lookups walk the
/// list from the nearer end.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    cells: IndexedList<Cell>,
}

impl Row {
    /// Create a new empty row
    pub fn new() -> Self {
        Self {
            cells: IndexedList::new(),
        }
    }

    /// Create a row from a sequence of string values
    pub fn from_values<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        values.into_iter().map(Cell::new).collect()
    }

    /// Identity of this row; the owner of every handle to its cells
    pub fn id(&self) -> ListId {
        self.cells.id()
    }

    /// Number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if the row has no cells
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate over the cells in order
    pub fn cells(&self) -> Iter<'_, Cell> {
        self.cells.iter()
    }

    /// Iterate over the cell handles in order
    pub fn handles(&self) -> Handles<'_, Cell> {
        self.cells.handles()
    }

    /// Iterate over the cell values in order
    pub fn values(&self) -> impl DoubleEndedIterator<Item = &str> + '_ {
        self.cells.iter().map(Cell::value)
    }

    /// Collect the cell values into owned strings
    pub fn to_strings(&self) -> Vec<String> {
        self.values().map(str::to_owned).collect()
    }

    /// Handle of the first cell
    pub fn head(&self) -> Option<CellHandle> {
        self.cells.head()
    }

    /// Handle of the last cell
    pub fn tail(&self) -> Option<CellHandle> {
        self.cells.tail()
    }

    /// Handle of the cell after `handle`
    pub fn next(&self, handle: CellHandle) -> Option<CellHandle> {
        self.cells.next(handle)
    }

    /// Handle of the cell before `handle`
    pub fn prev(&self, handle: CellHandle) -> Option<CellHandle> {
        self.cells.prev(handle)
    }

    /// Get the cell at `index`
    pub fn cell(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }

    /// Get a mutable reference to the cell at `index`
    pub fn cell_mut(&mut self, index: usize) -> Option<&mut Cell> {
        self.cells.get_mut(index)
    }

    /// Get the value of the cell at `index`
    pub fn value(&self, index: usize) -> Option<&str> {
        self.cell(index).map(Cell::value)
    }

    /// Handle of the cell at `index`
    pub fn cell_handle(&self, index: usize) -> Option<CellHandle> {
        self.cells.handle_at(index)
    }

    /// Get the cell addressed by `handle`
    pub fn cell_by_handle(&self, handle: CellHandle) -> Option<&Cell> {
        self.cells.node(handle)
    }

    /// Get a mutable reference to the cell addressed by `handle`
    pub fn cell_by_handle_mut(&mut self, handle: CellHandle) -> Option<&mut Cell> {
        self.cells.node_mut(handle)
    }

    /// Handle of the first cell whose value equals `value`
    pub fn find(&self, value: &str) -> Option<CellHandle> {
        self.cells.find(|cell| cell.value() == value)
    }

    /// Index of the first cell whose value equals `value`
    pub fn position_of_value(&self, value: &str) -> Option<usize> {
        self.cells.position_where(|cell| cell.value() == value)
    }

    /// Index of the first cell equal to `cell`
    pub fn position_of_cell(&self, cell: &Cell) -> Option<usize> {
        self.cells.position_where(|candidate| candidate == cell)
    }

    /// Current index of the cell addressed by `handle`
    pub fn position(&self, handle: CellHandle) -> Option<usize> {
        self.cells.position(handle)
    }

    /// Check if `handle` addresses a cell mapped into this row
    pub fn is_mapped(&self, handle: CellHandle) -> bool {
        self.cells.contains(handle)
    }

    /// Check if a cell equal to `cell` is in this row
    pub fn contains_cell(&self, cell: &Cell) -> bool {
        self.position_of_cell(cell).is_some()
    }

    /// Check if any cell holds `value`
    pub fn contains_value(&self, value: &str) -> bool {
        self.position_of_value(value).is_some()
    }

    /// Map a cell onto the end of the row
    pub fn push(&mut self, cell: Cell) -> CellHandle {
        self.cells.push_back(cell)
    }

    /// Append a new cell holding `value`
    pub fn push_value<S: Into<String>>(&mut self, value: S) -> CellHandle {
        self.push(Cell::new(value))
    }

    /// Map a cell so that it ends up at `index`
    ///
    /// Later cells shift up by one; `index == len()` appends.
    pub fn insert(&mut self, index: usize, cell: Cell) -> Result<CellHandle> {
        self.cells.insert_at(index, cell)
    }

    /// Insert a new cell holding `value` at `index`
    pub fn insert_value<S: Into<String>>(&mut self, index: usize, value: S) -> Result<CellHandle> {
        self.insert(index, Cell::new(value))
    }

    /// Detach the cell at `index` and hand it back
    pub fn pop(&mut self, index: usize) -> Option<Cell> {
        self.cells.remove_at(index)
    }

    /// Detach and drop the cell at `index`
    ///
    /// Returns `false` if there was no cell at `index`.
    pub fn delete(&mut self, index: usize) -> bool {
        self.pop(index).is_some()
    }

    /// Detach the cell addressed by `handle` and hand it back
    pub fn unmap(&mut self, handle: CellHandle) -> Result<Cell> {
        self.cells.remove(handle)
    }

    /// Detach and drop the cell addressed by `handle`
    pub fn delete_node(&mut self, handle: CellHandle) -> Result<()> {
        self.unmap(handle).map(drop)
    }

    /// Remove every cell
    pub fn clear(&mut self) {
        self.cells.clear();
    }

    /// Panic if the cell list's structural invariants are broken
    pub fn assert_consistent(&self) {
        self.cells.assert_consistent();
    }
}

impl FromIterator<Cell> for Row {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

impl Extend<Cell> for Row {
    fn extend<I: IntoIterator<Item = Cell>>(&mut self, iter: I) {
        self.cells.extend(iter);
    }
}

impl<'a> IntoIterator for &'a Row {
    type Item = &'a Cell;
    type IntoIter = Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells()
    }
}

/// Flat form: `["a", "b"]`
impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, cell) in self.cells().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "\"{}\"", cell.value())?;
        }
        f.write_str("]")
    }
}
