use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::{CellKey, GridError};

/// A `(row, column, value)` triple.
///
/// Grids hand out `Cell<&V>` while iterating; [`Cell::cloned`] turns one into an owned cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Cell<V> {
    row: i32,
    column: i32,
    value: V,
}

impl<V> Cell<V> {
    /// Creates a cell.
    ///
    /// Fails with [`GridError::NegativeCoordinate`] when either coordinate is negative.
    pub fn of(row: i32, column: i32, value: V) -> Result<Self, GridError> {
        if row < 0 || column < 0 {
            return Err(GridError::NegativeCoordinate { row, column });
        }
        Ok(Cell { row, column, value })
    }

    /// Creates a cell without validating its coordinates.
    ///
    /// The coordinates must be non-negative. This is checked in debug builds only.
    #[inline(always)]
    #[cfg_attr(debug_assertions, track_caller)]
    pub fn new_unchecked(row: i32, column: i32, value: V) -> Self {
        debug_assert!(row >= 0, "row must be non-negative");
        debug_assert!(column >= 0, "column must be non-negative");
        Cell { row, column, value }
    }

    /// The cell's row.
    #[inline(always)]
    pub fn row(&self) -> i32 {
        self.row
    }

    /// The cell's column.
    #[inline(always)]
    pub fn column(&self) -> i32 {
        self.column
    }

    /// The cell's value.
    #[inline(always)]
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Consumes the cell, returning its value.
    pub fn into_value(self) -> V {
        self.value
    }

    /// Consumes the cell, returning `(row, column, value)`.
    pub fn into_parts(self) -> (i32, i32, V) {
        (self.row, self.column, self.value)
    }

    /// Borrows the value, keeping the position.
    pub fn as_ref(&self) -> Cell<&V> {
        Cell {
            row: self.row,
            column: self.column,
            value: &self.value,
        }
    }

    /// The packed position of the cell.
    pub fn key(&self) -> CellKey {
        CellKey::new(self.row, self.column)
    }

    /// Whether the cell sits at `(row, column)`.
    pub fn equal_row_column(&self, row: i32, column: i32) -> bool {
        self.row == row && self.column == column
    }

    /// Whether the cell holds `value`.
    pub fn equal_value(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.value == *value
    }

    /// Row-major comparison of positions, ignoring values.
    pub fn cmp_position<W>(&self, other: &Cell<W>) -> Ordering {
        (self.row, self.column).cmp(&(other.row, other.column))
    }
}

impl<V: Clone> Cell<&V> {
    /// Clones the borrowed value into an owned cell.
    pub fn cloned(self) -> Cell<V> {
        Cell {
            row: self.row,
            column: self.column,
            value: self.value.clone(),
        }
    }
}

impl<V: Hash> Hash for Cell<V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u32(self.row as u32 ^ (self.column as u32).rotate_left(16));
        self.value.hash(state);
    }
}

impl<V: Ord> PartialOrd for Cell<V> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<V: Ord> Ord for Cell<V> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cmp_position(other)
            .then_with(|| self.value.cmp(&other.value))
    }
}

impl<V: fmt::Display> fmt::Display for Cell<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})={}", self.row, self.column, self.value)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::hash_map::DefaultHasher;

    use super::*;
    use crate::ErrorKind;

    fn hash_of<T: Hash>(t: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        t.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn rejects_negative_coordinates() {
        let err = Cell::of(-1, 0, "x").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::IndexOutOfBounds);
        assert!(Cell::of(0, -5, "x").is_err());
        assert!(Cell::of(0, 0, "x").is_ok());
    }

    #[test]
    fn equality_and_hash() {
        let a = Cell::of(1, 2, "a").unwrap();
        let b = Cell::of(1, 2, "a").unwrap();
        let c = Cell::of(1, 2, "b").unwrap();
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
        assert_ne!(a, c);
        assert_ne!(hash_of(&Cell::of(0, 1, 0).unwrap()), hash_of(&Cell::of(1, 0, 0).unwrap()));
    }

    #[test]
    fn row_major_ordering() {
        let mut cells = vec![
            Cell::of(1, 0, 9).unwrap(),
            Cell::of(0, 2, 1).unwrap(),
            Cell::of(0, 1, 5).unwrap(),
        ];
        cells.sort();
        let positions: Vec<_> = cells.iter().map(|c| (c.row(), c.column())).collect();
        assert_eq!(positions, [(0, 1), (0, 2), (1, 0)]);
        assert_eq!(
            Cell::of(0, 1, 9).unwrap().cmp_position(&Cell::of(0, 1, 0).unwrap()),
            Ordering::Equal
        );
    }

    #[test]
    fn copy_and_display() {
        let value = String::from("Hello");
        let borrowed = Cell::new_unchecked(0, 1, &value);
        let owned = borrowed.cloned();
        assert_eq!(owned.value(), "Hello");
        assert!(owned.equal_row_column(0, 1));
        assert!(owned.equal_value(&"Hello".to_string()));
        assert_eq!(owned.to_string(), "(0,1)=Hello");
        assert_eq!(owned.as_ref(), borrowed);
    }
}
