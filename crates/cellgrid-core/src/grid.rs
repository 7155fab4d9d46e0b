use crate::views::{Cells, CellsMut, Column, ColumnMut, Columns, Row, RowMut, Rows, Values};
use crate::{check_cell, in_bounds, Cell, GridError};

/// The density character of a grid's storage.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Layout {
    /// Every addressable cell has a slot; lookups are O(1).
    Dense,
    /// Only occupied cells are stored.
    Sparse,
}

/// Row-major iterator over the occupied cells of a grid.
pub struct Iter<'a, V: 'a> {
    inner: Box<dyn Iterator<Item = Cell<&'a V>> + 'a>,
    remaining: usize,
}

impl<'a, V: 'a> Iter<'a, V> {
    /// Wraps an iterator that yields exactly `len` cells in row-major order.
    pub fn new(len: usize, iter: impl Iterator<Item = Cell<&'a V>> + 'a) -> Self {
        Iter {
            inner: Box::new(iter),
            remaining: len,
        }
    }

    /// An iterator over no cells.
    pub fn empty() -> Self {
        Iter::new(0, std::iter::empty())
    }
}

impl<'a, V: 'a> Iterator for Iter<'a, V> {
    type Item = Cell<&'a V>;

    fn next(&mut self) -> Option<Self::Item> {
        let cell = self.inner.next()?;
        self.remaining = self.remaining.saturating_sub(1);
        Some(cell)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, V: 'a> ExactSizeIterator for Iter<'a, V> {}

/// A two-dimensional container mapping `(row, column)` to values.
///
/// The declared dimensions are fixed for the lifetime of the grid. Reads never fail: any
/// coordinate outside the grid simply has no value. Writes outside the grid fail with
/// [`GridError::CellOutOfBounds`], and grids that cannot be mutated at all fail every write with
/// [`GridError::Unsupported`].
pub trait Grid {
    /// The type stored in occupied cells.
    type Value;

    /// Number of rows, fixed at construction.
    fn row_count(&self) -> i32;

    /// Number of columns, fixed at construction.
    fn column_count(&self) -> i32;

    /// Number of occupied cells.
    fn size(&self) -> usize;

    /// How the grid stores its cells.
    fn layout(&self) -> Layout;

    /// The value at a position, `None` when empty or outside the grid.
    fn get(&self, row: i32, column: i32) -> Option<&Self::Value>;

    /// Iterates the occupied cells in row-major order.
    fn iter(&self) -> Iter<'_, Self::Value>;

    /// Stores a value, replacing any previous one.
    ///
    /// Fails with [`GridError::CellOutOfBounds`] outside the grid.
    fn put(&mut self, row: i32, column: i32, value: Self::Value) -> Result<(), GridError>;

    /// Removes and returns the value at a position. Positions outside the grid yield `None`.
    fn take(&mut self, row: i32, column: i32) -> Result<Option<Self::Value>, GridError>;

    /// Removes every value.
    fn clear(&mut self) -> Result<(), GridError>;

    /// Whether the mutators can succeed at all.
    fn is_mutable(&self) -> bool {
        true
    }

    /// Number of addressable cells, `row_count * column_count`.
    fn capacity(&self) -> usize {
        (self.row_count().max(0) as usize).saturating_mul(self.column_count().max(0) as usize)
    }

    /// Whether `(row, column)` is addressable, regardless of whether it holds a value.
    fn exists(&self, row: i32, column: i32) -> bool {
        in_bounds(row, column, self.row_count(), self.column_count())
    }

    /// Whether every addressable cell holds a value.
    fn is_full(&self) -> bool {
        self.size() == self.capacity()
    }

    /// Whether no cell holds a value.
    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Whether `(row, column)` holds a value.
    fn contains(&self, row: i32, column: i32) -> bool {
        self.exists(row, column) && self.get(row, column).is_some()
    }

    /// Whether any cell holds `value`.
    fn contains_value(&self, value: &Self::Value) -> bool
    where
        Self::Value: PartialEq,
    {
        self.iter().any(|cell| cell.into_value() == value)
    }

    /// The occupied cell at a position.
    fn cell(&self, row: i32, column: i32) -> Option<Cell<&Self::Value>> {
        if !self.exists(row, column) {
            return None;
        }
        self.get(row, column)
            .map(|value| Cell::new_unchecked(row, column, value))
    }

    /// Removes the value at a position, returning whether one was present.
    fn remove(&mut self, row: i32, column: i32) -> Result<bool, GridError> {
        Ok(self.take(row, column)?.is_some())
    }

    /// Copies every cell of `other` into this grid.
    ///
    /// Every incoming cell is bounds-checked before the first write, so either all cells are
    /// copied or the grid is left untouched.
    fn put_all<G>(&mut self, other: &G) -> Result<(), GridError>
    where
        G: Grid<Value = Self::Value> + ?Sized,
        Self::Value: Clone,
    {
        if !self.is_mutable() {
            return Err(GridError::Unsupported("put_all"));
        }
        let (rows, columns) = (self.row_count(), self.column_count());
        for cell in other.iter() {
            check_cell(cell.row(), cell.column(), rows, columns)?;
        }
        for cell in other.iter() {
            self.put(cell.row(), cell.column(), (*cell.value()).clone())?;
        }
        Ok(())
    }

    /// The occupied cells.
    fn cells(&self) -> Cells<'_, Self> {
        Cells::new(self)
    }

    /// The occupied cells, with set-like mutation.
    fn cells_mut(&mut self) -> CellsMut<'_, Self> {
        CellsMut::new(self)
    }

    /// The values of the occupied cells.
    fn values(&self) -> Values<'_, Self> {
        Values::new(self)
    }

    /// One row. Fails with [`GridError::RowOutOfBounds`] outside `0..row_count`.
    fn row(&self, row: i32) -> Result<Row<'_, Self>, GridError> {
        check_index(row, self.row_count(), true)?;
        Ok(Row::new(self, row))
    }

    /// One row, writable through the grid.
    fn row_mut(&mut self, row: i32) -> Result<RowMut<'_, Self>, GridError> {
        check_index(row, self.row_count(), true)?;
        Ok(RowMut::new(self, row))
    }

    /// One column. Fails with [`GridError::ColumnOutOfBounds`] outside `0..column_count`.
    fn column(&self, column: i32) -> Result<Column<'_, Self>, GridError> {
        check_index(column, self.column_count(), false)?;
        Ok(Column::new(self, column))
    }

    /// One column, writable through the grid.
    fn column_mut(&mut self, column: i32) -> Result<ColumnMut<'_, Self>, GridError> {
        check_index(column, self.column_count(), false)?;
        Ok(ColumnMut::new(self, column))
    }

    /// Every row.
    fn rows(&self) -> Rows<'_, Self> {
        Rows::new(self)
    }

    /// Every column.
    fn columns(&self) -> Columns<'_, Self> {
        Columns::new(self)
    }
}

fn check_index(index: i32, count: i32, row: bool) -> Result<(), GridError> {
    if index >= 0 && index < count {
        Ok(())
    } else if row {
        Err(GridError::RowOutOfBounds { index, count })
    } else {
        Err(GridError::ColumnOutOfBounds { index, count })
    }
}
