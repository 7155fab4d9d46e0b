use std::collections::{btree_map, BTreeMap};
use std::iter::Map;

use cellgrid_core::{
    check_cell, check_dimensions, impl_grid_traits, Cell, CellKey, Grid, GridError, Iter, Layout,
};

/// Mutable grid storing only occupied cells in an ordered map.
///
/// Memory and iteration cost are proportional to the number of occupied cells. The declared
/// dimensions bound writes exactly as they do for [`DenseGrid`](crate::DenseGrid).
#[derive(Clone)]
pub struct SparseGrid<V> {
    rows: i32,
    columns: i32,
    cells: BTreeMap<CellKey, V>,
}

impl<V> SparseGrid<V> {
    pub fn create(rows: i32, columns: i32) -> Result<Self, GridError> {
        check_dimensions(rows, columns)?;
        Ok(SparseGrid {
            rows,
            columns,
            cells: BTreeMap::new(),
        })
    }

    pub fn create_from<G>(source: &G) -> Result<Self, GridError>
    where
        G: Grid<Value = V> + ?Sized,
        V: Clone,
    {
        let mut grid = SparseGrid::create(source.row_count(), source.column_count())?;
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
        let mut grid = SparseGrid::create(rows, columns)?;
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

    /// Iterates the occupied cells of one row without scanning the others.
    pub fn row_cells(&self, row: i32) -> impl Iterator<Item = Cell<&V>> + '_ {
        let range = if row >= 0 && row < self.rows {
            CellKey::new(row, 0)..CellKey::new(row + 1, 0)
        } else {
            CellKey::new(0, 0)..CellKey::new(0, 0)
        };
        self.cells
            .range(range)
            .map(|(key, value)| Cell::new_unchecked(key.row(), key.column(), value))
    }
}

impl<V> Grid for SparseGrid<V> {
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
        Iter::new(
            self.cells.len(),
            self.cells
                .iter()
                .map(|(key, value)| Cell::new_unchecked(key.row(), key.column(), value)),
        )
    }

    fn put(&mut self, row: i32, column: i32, value: V) -> Result<(), GridError> {
        if let Err(err) = check_cell(row, column, self.rows, self.columns) {
            #[cfg(feature = "tracing")]
            tracing::debug!(row, column, "rejected write outside sparse grid");
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

type IntoCells<V> = Map<btree_map::IntoIter<CellKey, V>, fn((CellKey, V)) -> Cell<V>>;

impl<V> IntoIterator for SparseGrid<V> {
    type Item = Cell<V>;
    type IntoIter = IntoCells<V>;

    fn into_iter(self) -> Self::IntoIter {
        fn to_cell<V>((key, value): (CellKey, V)) -> Cell<V> {
            Cell::new_unchecked(key.row(), key.column(), value)
        }
        self.cells.into_iter().map(to_cell::<V> as fn((CellKey, V)) -> Cell<V>)
    }
}

impl_grid_traits!(SparseGrid);

#[cfg(test)]
mod tests {
    use cellgrid_core::ErrorKind;

    use super::*;

    #[test]
    fn enforces_declared_bounds() {
        let mut grid = SparseGrid::create(1000, 1000).unwrap();
        grid.put(999, 999, 1u8).unwrap();
        let err = grid.put(1000, 0, 2).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::IndexOutOfBounds);
        assert_eq!(grid.put(0, -3, 2).unwrap_err().kind(), ErrorKind::IndexOutOfBounds);
        assert_eq!(grid.size(), 1);
        assert!(!grid.is_full());
    }

    #[test]
    fn ordered_iteration_and_row_scan() {
        let mut grid = SparseGrid::create(4, 4).unwrap();
        for (row, column) in [(3, 0), (1, 3), (1, 0), (0, 2)] {
            grid.put(row, column, row * 10 + column).unwrap();
        }
        let values: Vec<_> = grid.values().iter().copied().collect();
        assert_eq!(values, [2, 10, 13, 30]);
        let row: Vec<_> = grid.row_cells(1).map(|cell| cell.column()).collect();
        assert_eq!(row, [0, 3]);
        assert_eq!(grid.row_cells(7).count(), 0);
        assert_eq!(grid.row(1).unwrap().len(), 4);
    }

    #[test]
    fn remove_is_lenient() {
        let mut grid = SparseGrid::create(2, 2).unwrap();
        grid.put(0, 0, "v").unwrap();
        assert_eq!(grid.remove(i32::MIN, i32::MAX), Ok(false));
        assert_eq!(grid.take(0, 0), Ok(Some("v")));
        assert!(grid.is_empty());
    }

    #[test]
    fn copies_from_other_grids() {
        let mut dense = crate::DenseGrid::create(2, 2).unwrap();
        dense.put(1, 0, 'q').unwrap();
        let mut sparse = SparseGrid::create_from(&dense).unwrap();
        assert_eq!(sparse.layout(), Layout::Sparse);
        assert!(sparse == dense);
        *sparse.get_mut(1, 0).unwrap() = 'r';
        assert_eq!(dense.get(1, 0), Some(&'q'));
        let cells: Vec<_> = sparse.into_iter().collect();
        assert_eq!(cells, [Cell::of(1, 0, 'r').unwrap()]);
    }
}
