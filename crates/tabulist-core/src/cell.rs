//! Cell type

use std::fmt;

/// Handle of a cell mapped into a [`Row`](crate::Row)
///
/// [`NodeHandle::owner`](crate::NodeHandle::owner) of a cell handle is the
/// [`Row::id`](crate::Row::id) of its parent row.
pub type CellHandle = crate::list::NodeHandle;

/// A single field value
///
/// A `Cell` on its own is detached; it gains a parent once it is mapped into
/// a [`Row`](crate::Row).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    value: String,
}

impl Cell {
    /// Create a new cell holding `value`
    pub fn new<S: Into<String>>(value: S) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// The cell's string value
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replace the cell's value
    pub fn set_value<S: Into<String>>(&mut self, value: S) {
        self.value = value.into();
    }

    /// Consume the cell and return its value
    pub fn into_value(self) -> String {
        self.value
    }

    /// Length of the value in bytes
    pub fn len(&self) -> usize {
        self.value.len()
    }

    /// Check if the value is the empty string
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::new(value)
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Cell::new(value)
    }
}

impl PartialEq<str> for Cell {
    fn eq(&self, other: &str) -> bool {
        self.value == other
    }
}

impl PartialEq<&str> for Cell {
    fn eq(&self, other: &&str) -> bool {
        self.value == *other
    }
}

impl AsRef<str> for Cell {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_access() {
        let mut cell = Cell::new("hello");
        assert_eq!(cell.value(), "hello");
        assert_eq!(cell.len(), 5);
        assert!(!cell.is_empty());

        cell.set_value(String::new());
        assert!(cell.is_empty());
        assert_eq!(cell, Cell::default());
    }

    #[test]
    fn test_clone_owns_its_string() {
        let original = Cell::from("abc");
        let mut copy = original.clone();
        copy.set_value("xyz");
        assert_eq!(original.value(), "abc");
        assert_eq!(copy.into_value(), "xyz");
    }

    #[test]
    fn test_compare_with_str() {
        let cell = Cell::from("a");
        assert!(cell == "a");
        assert_eq!(cell.to_string(), "a");
    }
}
