//! Live projections of a grid.
//!
//! Views borrow the owning grid and have no storage of their own. Reads go straight to the
//! grid, and writes through the `*Mut` views are ordinary grid mutations, so the owner and every
//! later view observe them immediately.

use crate::{Cell, Grid, GridError, Iter};

/// One row of a grid, `column_count` entries long regardless of occupancy.
pub struct Row<'a, G: ?Sized> {
    grid: &'a G,
    row: i32,
}

impl<'a, G: Grid + ?Sized> Row<'a, G> {
    pub(crate) fn new(grid: &'a G, row: i32) -> Self {
        Row { grid, row }
    }

    /// Index of the row in the grid.
    pub fn index(&self) -> i32 {
        self.row
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.grid.column_count() as usize
    }

    /// Whether the grid has no columns.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The value in `column`, `None` when empty or outside the row.
    pub fn get(&self, column: i32) -> Option<&'a G::Value> {
        self.grid.get(self.row, column)
    }

    /// Yields one entry per column, `None` where the cell is unoccupied.
    pub fn iter(&self) -> impl Iterator<Item = Option<&'a G::Value>> + 'a {
        let (grid, row) = (self.grid, self.row);
        (0..grid.column_count()).map(move |column| grid.get(row, column))
    }

    /// The occupied entries as `(column, value)`.
    pub fn occupied(&self) -> impl Iterator<Item = (i32, &'a G::Value)> + 'a {
        self.iter()
            .enumerate()
            .filter_map(|(column, value)| Some((column as i32, value?)))
    }

    /// Number of occupied entries.
    pub fn occupied_len(&self) -> usize {
        self.occupied().count()
    }
}

/// One column of a grid, `row_count` entries long regardless of occupancy.
pub struct Column<'a, G: ?Sized> {
    grid: &'a G,
    column: i32,
}

impl<'a, G: Grid + ?Sized> Column<'a, G> {
    pub(crate) fn new(grid: &'a G, column: i32) -> Self {
        Column { grid, column }
    }

    /// Index of the column in the grid.
    pub fn index(&self) -> i32 {
        self.column
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.grid.row_count() as usize
    }

    /// Whether the grid has no rows.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The value in `row`, `None` when empty or outside the column.
    pub fn get(&self, row: i32) -> Option<&'a G::Value> {
        self.grid.get(row, self.column)
    }

    /// Yields one entry per row, `None` where the cell is unoccupied.
    pub fn iter(&self) -> impl Iterator<Item = Option<&'a G::Value>> + 'a {
        let (grid, column) = (self.grid, self.column);
        (0..grid.row_count()).map(move |row| grid.get(row, column))
    }

    /// The occupied entries as `(row, value)`.
    pub fn occupied(&self) -> impl Iterator<Item = (i32, &'a G::Value)> + 'a {
        self.iter()
            .enumerate()
            .filter_map(|(row, value)| Some((row as i32, value?)))
    }

    /// Number of occupied entries.
    pub fn occupied_len(&self) -> usize {
        self.occupied().count()
    }
}

/// One row of a grid, writable through the owning grid.
pub struct RowMut<'a, G: ?Sized> {
    grid: &'a mut G,
    row: i32,
}

impl<'a, G: Grid + ?Sized> RowMut<'a, G> {
    pub(crate) fn new(grid: &'a mut G, row: i32) -> Self {
        RowMut { grid, row }
    }

    /// A read-only view of the same row.
    pub fn as_row(&self) -> Row<'_, G> {
        Row::new(&*self.grid, self.row)
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.grid.column_count() as usize
    }

    /// Whether the grid has no columns.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The value in `column`.
    pub fn get(&self, column: i32) -> Option<&G::Value> {
        self.grid.get(self.row, column)
    }

    /// Stores a value in `column`.
    pub fn set(&mut self, column: i32, value: G::Value) -> Result<(), GridError> {
        self.grid.put(self.row, column, value)
    }

    /// Removes the value in `column`, returning whether one was present.
    pub fn remove(&mut self, column: i32) -> Result<bool, GridError> {
        self.grid.remove(self.row, column)
    }

    /// Removes every value in the row.
    pub fn clear(&mut self) -> Result<(), GridError> {
        for column in 0..self.grid.column_count() {
            self.grid.take(self.row, column)?;
        }
        Ok(())
    }
}

/// One column of a grid, writable through the owning grid.
pub struct ColumnMut<'a, G: ?Sized> {
    grid: &'a mut G,
    column: i32,
}

impl<'a, G: Grid + ?Sized> ColumnMut<'a, G> {
    pub(crate) fn new(grid: &'a mut G, column: i32) -> Self {
        ColumnMut { grid, column }
    }

    /// A read-only view of the same column.
    pub fn as_column(&self) -> Column<'_, G> {
        Column::new(&*self.grid, self.column)
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.grid.row_count() as usize
    }

    /// Whether the grid has no rows.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The value in `row`.
    pub fn get(&self, row: i32) -> Option<&G::Value> {
        self.grid.get(row, self.column)
    }

    /// Stores a value in `row`.
    pub fn set(&mut self, row: i32, value: G::Value) -> Result<(), GridError> {
        self.grid.put(row, self.column, value)
    }

    /// Removes the value in `row`, returning whether one was present.
    pub fn remove(&mut self, row: i32) -> Result<bool, GridError> {
        self.grid.remove(row, self.column)
    }

    /// Removes every value in the column.
    pub fn clear(&mut self) -> Result<(), GridError> {
        for row in 0..self.grid.row_count() {
            self.grid.take(row, self.column)?;
        }
        Ok(())
    }
}

/// The rows of a grid, `row_count` entries long.
pub struct Rows<'a, G: ?Sized> {
    grid: &'a G,
}

impl<'a, G: Grid + ?Sized> Rows<'a, G> {
    pub(crate) fn new(grid: &'a G) -> Self {
        Rows { grid }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.grid.row_count() as usize
    }

    /// Whether the grid has no rows.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The row at `row`, `None` outside the grid.
    pub fn get(&self, row: i32) -> Option<Row<'a, G>> {
        (row >= 0 && row < self.grid.row_count()).then(|| Row::new(self.grid, row))
    }

    /// Every row, top to bottom.
    pub fn iter(&self) -> impl Iterator<Item = Row<'a, G>> + 'a {
        let grid = self.grid;
        (0..grid.row_count()).map(move |row| Row::new(grid, row))
    }
}

/// The columns of a grid, `column_count` entries long.
pub struct Columns<'a, G: ?Sized> {
    grid: &'a G,
}

impl<'a, G: Grid + ?Sized> Columns<'a, G> {
    pub(crate) fn new(grid: &'a G) -> Self {
        Columns { grid }
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.grid.column_count() as usize
    }

    /// Whether the grid has no columns.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The column at `column`, `None` outside the grid.
    pub fn get(&self, column: i32) -> Option<Column<'a, G>> {
        (column >= 0 && column < self.grid.column_count()).then(|| Column::new(self.grid, column))
    }

    /// Every column, left to right.
    pub fn iter(&self) -> impl Iterator<Item = Column<'a, G>> + 'a {
        let grid = self.grid;
        (0..grid.column_count()).map(move |column| Column::new(grid, column))
    }
}

/// The occupied cells of a grid as a set ordered row-major.
pub struct Cells<'a, G: ?Sized> {
    grid: &'a G,
}

impl<'a, G: Grid + ?Sized> Cells<'a, G> {
    pub(crate) fn new(grid: &'a G) -> Self {
        Cells { grid }
    }

    /// Number of occupied cells.
    pub fn len(&self) -> usize {
        self.grid.size()
    }

    /// Whether no cell is occupied.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The cells in row-major order.
    pub fn iter(&self) -> Iter<'a, G::Value> {
        self.grid.iter()
    }

    /// Whether the grid holds exactly this cell.
    pub fn contains(&self, cell: &Cell<G::Value>) -> bool
    where
        G::Value: PartialEq,
    {
        self.grid
            .get(cell.row(), cell.column())
            .is_some_and(|value| value == cell.value())
    }
}

impl<'a, G: Grid + ?Sized> IntoIterator for Cells<'a, G> {
    type Item = Cell<&'a G::Value>;
    type IntoIter = Iter<'a, G::Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.grid.iter()
    }
}

/// Mutable access to the occupied cells of a grid.
pub struct CellsMut<'a, G: ?Sized> {
    grid: &'a mut G,
}

impl<'a, G: Grid + ?Sized> CellsMut<'a, G> {
    pub(crate) fn new(grid: &'a mut G) -> Self {
        CellsMut { grid }
    }

    /// Number of occupied cells.
    pub fn len(&self) -> usize {
        self.grid.size()
    }

    /// Whether no cell is occupied.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The cells in row-major order.
    pub fn iter(&self) -> Iter<'_, G::Value> {
        self.grid.iter()
    }

    /// Whether the grid holds exactly this cell.
    pub fn contains(&self, cell: &Cell<G::Value>) -> bool
    where
        G::Value: PartialEq,
    {
        Cells::new(&*self.grid).contains(cell)
    }

    /// Stores a cell, replacing any value at its position.
    ///
    /// Returns whether the grid changed.
    pub fn add(&mut self, cell: Cell<G::Value>) -> Result<bool, GridError>
    where
        G::Value: PartialEq,
    {
        self.check_mutable("cells().add")?;
        let changed = !self.contains(&cell);
        let (row, column, value) = cell.into_parts();
        self.grid.put(row, column, value)?;
        Ok(changed)
    }

    /// Removes a cell if both its position and its value match.
    pub fn remove(&mut self, cell: &Cell<G::Value>) -> Result<bool, GridError>
    where
        G::Value: PartialEq,
    {
        self.check_mutable("cells().remove")?;
        if !self.contains(cell) {
            return Ok(false);
        }
        self.grid.remove(cell.row(), cell.column())
    }

    /// Removes every cell.
    pub fn clear(&mut self) -> Result<(), GridError> {
        self.check_mutable("cells().clear")?;
        self.grid.clear()
    }

    /// Removes every cell for which `keep` returns `false`, returning how many were removed.
    pub fn retain(
        &mut self,
        mut keep: impl FnMut(Cell<&G::Value>) -> bool,
    ) -> Result<usize, GridError> {
        self.check_mutable("cells().retain")?;
        let doomed: Vec<(i32, i32)> = self
            .grid
            .iter()
            .filter(|cell| !keep(*cell))
            .map(|cell| (cell.row(), cell.column()))
            .collect();
        for &(row, column) in &doomed {
            self.grid.take(row, column)?;
        }
        Ok(doomed.len())
    }

    /// A cursor that can remove cells while walking them.
    pub fn cursor(&mut self) -> CellCursor<'_, G> {
        CellCursor::new(self.grid)
    }

    fn check_mutable(&self, operation: &'static str) -> Result<(), GridError> {
        if self.grid.is_mutable() {
            Ok(())
        } else {
            Err(GridError::Unsupported(operation))
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum CursorState {
    BeforeFirst,
    Current(i32, i32),
    Removed,
}

/// Walks the cells of a grid in row-major order and can remove the cell it last returned.
///
/// The cursor holds the grid's only mutable borrow, so the positions it captured on creation
/// stay accurate apart from its own removals.
pub struct CellCursor<'a, G: ?Sized> {
    grid: &'a mut G,
    positions: Vec<(i32, i32)>,
    next: usize,
    state: CursorState,
}

impl<'a, G: Grid + ?Sized> CellCursor<'a, G> {
    fn new(grid: &'a mut G) -> Self {
        let positions = grid
            .iter()
            .map(|cell| (cell.row(), cell.column()))
            .collect();
        CellCursor {
            grid,
            positions,
            next: 0,
            state: CursorState::BeforeFirst,
        }
    }

    /// Number of cells not yet returned.
    pub fn remaining(&self) -> usize {
        self.positions.len() - self.next
    }

    /// The next cell still present in the grid.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<Cell<&G::Value>> {
        while let Some(&(row, column)) = self.positions.get(self.next) {
            self.next += 1;
            if self.grid.contains(row, column) {
                self.state = CursorState::Current(row, column);
                return self.grid.cell(row, column);
            }
        }
        None
    }

    /// Removes the cell returned by the last call to [`next`](Self::next).
    pub fn remove(&mut self) -> Result<G::Value, GridError> {
        if !self.grid.is_mutable() {
            return Err(GridError::Unsupported("cursor remove"));
        }
        match self.state {
            CursorState::BeforeFirst => {
                Err(GridError::IllegalCursorState("remove called before next"))
            }
            CursorState::Removed => Err(GridError::IllegalCursorState(
                "remove called twice without an intervening next",
            )),
            CursorState::Current(row, column) => {
                self.state = CursorState::Removed;
                self.grid
                    .take(row, column)?
                    .ok_or(GridError::IllegalCursorState("current cell already removed"))
            }
        }
    }
}

/// The values of the occupied cells of a grid, in row-major cell order.
pub struct Values<'a, G: ?Sized> {
    grid: &'a G,
}

impl<'a, G: Grid + ?Sized> Values<'a, G> {
    pub(crate) fn new(grid: &'a G) -> Self {
        Values { grid }
    }

    /// Number of values.
    pub fn len(&self) -> usize {
        self.grid.size()
    }

    /// Whether there are no values.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The values in row-major cell order.
    pub fn iter(&self) -> impl Iterator<Item = &'a G::Value> + 'a {
        self.grid.iter().map(Cell::into_value)
    }

    /// Whether any cell holds `value`.
    pub fn contains(&self, value: &G::Value) -> bool
    where
        G::Value: PartialEq,
    {
        self.grid.contains_value(value)
    }
}
