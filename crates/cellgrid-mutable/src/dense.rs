use cellgrid_core::{
    check_cell, empty_slots, impl_grid_traits, Cell, Grid, GridError, Iter, Layout,
};

/// Mutable grid backed by a flattened `rows * columns` buffer.
///
/// Every addressable cell has a slot, so lookups and writes are O(1) and iteration visits the
/// whole buffer.
#[derive(Clone)]
pub struct DenseGrid<V> {
    rows: i32,
    columns: i32,
    size: usize,
    cells: Box<[Option<V>]>,
}

impl<V> DenseGrid<V> {
    pub fn create(rows: i32, columns: i32) -> Result<Self, GridError> {
        let cells = empty_slots(rows, columns)?;
        #[cfg(feature = "tracing")]
        tracing::trace!(rows, columns, capacity = cells.len(), "allocated dense grid");
        Ok(DenseGrid {
            rows,
            columns,
            size: 0,
            cells,
        })
    }

    /// Creates a dense grid holding a copy of every cell of `source`.
    pub fn create_from<G>(source: &G) -> Result<Self, GridError>
    where
        G: Grid<Value = V> + ?Sized,
        V: Clone,
    {
        let mut grid = DenseGrid::create(source.row_count(), source.column_count())?;
        for cell in source.iter() {
            grid.put(cell.row(), cell.column(), (*cell.value()).clone())?;
        }
        Ok(grid)
    }

    pub fn from_cells(
        rows: i32,
        columns: i32,
        cells: impl IntoIterator<Item = Cell<V>>,
    ) -> Result<Self, GridError> {
        let mut grid = DenseGrid::create(rows, columns)?;
        for cell in cells {
            let (row, column, value) = cell.into_parts();
            grid.put(row, column, value)?;
        }
        Ok(grid)
    }

    /// The flattened row-major buffer.
    pub fn storage(&self) -> &[Option<V>] {
        &self.cells
    }

    pub fn get_mut(&mut self, row: i32, column: i32) -> Option<&mut V> {
        if !self.exists(row, column) {
            return None;
        }
        let index = self.index(row, column);
        self.cells[index].as_mut()
    }

    #[inline(always)]
    fn index(&self, row: i32, column: i32) -> usize {
        self.columns as usize * row as usize + column as usize
    }

    #[inline(always)]
    fn position(&self, index: usize) -> (i32, i32) {
        let columns = self.columns as usize;
        ((index / columns) as i32, (index % columns) as i32)
    }
}

impl<V> Grid for DenseGrid<V> {
    type Value = V;

    #[inline(always)]
    fn row_count(&self) -> i32 {
        self.rows
    }

    #[inline(always)]
    fn column_count(&self) -> i32 {
        self.columns
    }

    fn size(&self) -> usize {
        self.size
    }

    fn layout(&self) -> Layout {
        Layout::Dense
    }

    fn get(&self, row: i32, column: i32) -> Option<&V> {
        if !self.exists(row, column) {
            return None;
        }
        self.cells[self.index(row, column)].as_ref()
    }

    fn iter(&self) -> Iter<'_, V> {
        Iter::new(
            self.size,
            self.cells.iter().enumerate().filter_map(move |(index, slot)| {
                let (row, column) = self.position(index);
                slot.as_ref()
                    .map(|value| Cell::new_unchecked(row, column, value))
            }),
        )
    }

    fn put(&mut self, row: i32, column: i32, value: V) -> Result<(), GridError> {
        check_cell(row, column, self.rows, self.columns)?;
        let index = self.index(row, column);
        if self.cells[index].replace(value).is_none() {
            self.size += 1;
        }
        Ok(())
    }

    fn take(&mut self, row: i32, column: i32) -> Result<Option<V>, GridError> {
        if !self.exists(row, column) {
            return Ok(None);
        }
        let index = self.index(row, column);
        let old = self.cells[index].take();
        if old.is_some() {
            self.size -= 1;
        }
        Ok(old)
    }

    fn clear(&mut self) -> Result<(), GridError> {
        self.cells.fill_with(|| None);
        self.size = 0;
        Ok(())
    }

    fn is_full(&self) -> bool {
        self.size == self.cells.len()
    }
}

impl<V> IntoIterator for DenseGrid<V> {
    type Item = Cell<V>;
    type IntoIter = std::vec::IntoIter<Cell<V>>;

    fn into_iter(self) -> Self::IntoIter {
        let columns = self.columns as usize;
        let cells: Vec<_> = self
            .cells
            .into_vec()
            .into_iter()
            .enumerate()
            .filter_map(|(index, slot)| {
                let (row, column) = ((index / columns) as i32, (index % columns) as i32);
                slot.map(|value| Cell::new_unchecked(row, column, value))
            })
            .collect();
        cells.into_iter()
    }
}

impl_grid_traits!(DenseGrid);
