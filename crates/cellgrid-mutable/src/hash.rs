use ahash::AHashMap;
use cellgrid_core::{
    check_cell, check_dimensions, impl_grid_traits, Cell, CellKey, Grid, GridError, Iter, Layout,
};

/// Mutable grid storing only occupied cells in a hash map.
///
/// Point lookups and writes are O(1). Iteration sorts the occupied keys first so that cells are
/// still produced in row-major order.
#[derive(Clone)]
pub struct HashGrid<V> {
    rows: i32,
    columns: i32,
    cells: AHashMap<CellKey, V>,
}

impl<V> HashGrid<V> {
    pub fn create(rows: i32, columns: i32) -> Result<Self, GridError> {
        check_dimensions(rows, columns)?;
        Ok(HashGrid {
            rows,
            columns,
            cells: AHashMap::new(),
        })
    }

    pub fn create_from<G>(source: &G) -> Result<Self, GridError>
    where
        G: Grid<Value = V> + ?Sized,
        V: Clone,
    {
        let mut grid = HashGrid::create(source.row_count(), source.column_count())?;
        grid.cells.reserve(source.size());
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
        let mut grid = HashGrid::create(rows, columns)?;
        for cell in cells {
            let (row, column, value) = cell.into_parts();
            grid.put(row, column, value)?;
        }
        Ok(grid)
    }

    pub fn get_mut(&mut self, row: i32, column: i32) -> Option<&mut V> {
        if !self.exists(row, column) {
            return None;
        }
        self.cells.get_mut(&CellKey::new(row, column))
    }

    fn sorted(&self) -> Vec<(&CellKey, &V)> {
        let mut entries: Vec<_> = self.cells.iter().collect();
        entries.sort_unstable_by_key(|&(key, _)| *key);
        entries
    }
}

impl<V> Grid for HashGrid<V> {
    type Value = V;

    fn row_count(&self) -> i32 {
        self.rows
    }

    fn column_count(&self) -> i32 {
        self.columns
    }

    fn size(&self) -> usize {
        self.cells.len()
    }

    fn layout(&self) -> Layout {
        Layout::Sparse
    }

    fn get(&self, row: i32, column: i32) -> Option<&V> {
        if !self.exists(row, column) {
            return None;
        }
        self.cells.get(&CellKey::new(row, column))
    }

    fn iter(&self) -> Iter<'_, V> {
        let entries = self.sorted();
        Iter::new(
            entries.len(),
            entries
                .into_iter()
                .map(|(key, value)| Cell::new_unchecked(key.row(), key.column(), value)),
        )
    }

    fn contains_value(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.cells.values().any(|v| v == value)
    }

    fn put(&mut self, row: i32, column: i32, value: V) -> Result<(), GridError> {
        if let Err(err) = check_cell(row, column, self.rows, self.columns) {
            #[cfg(feature = "tracing")]
            tracing::debug!(row, column, "rejected write outside hash grid");
            return Err(err);
        }
        self.cells.insert(CellKey::new(row, column), value);
        Ok(())
    }

    fn take(&mut self, row: i32, column: i32) -> Result<Option<V>, GridError> {
        if !self.exists(row, column) {
            return Ok(None);
        }
        Ok(self.cells.remove(&CellKey::new(row, column)))
    }

    fn clear(&mut self) -> Result<(), GridError> {
        self.cells.clear();
        Ok(())
    }
}

impl<V> IntoIterator for HashGrid<V> {
    type Item = Cell<V>;
    type IntoIter = std::vec::IntoIter<Cell<V>>;

    fn into_iter(self) -> Self::IntoIter {
        let mut cells: Vec<_> = self
            .cells
            .into_iter()
            .map(|(key, value)| Cell::new_unchecked(key.row(), key.column(), value))
            .collect();
        cells.sort_unstable_by(|a, b| a.cmp_position(b));
        cells.into_iter()
    }
}

impl_grid_traits!(HashGrid);
