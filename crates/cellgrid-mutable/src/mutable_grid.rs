use cellgrid_core::{impl_grid_traits, Cell, Grid, GridError, Iter, Layout};

use crate::{DenseGrid, HashGrid, SparseGrid};

/// Storage strategy of a [`MutableGrid`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MutableGridKind {
    Dense,
    Sparse,
    Hash,
}

/// A mutable grid whose storage strategy is chosen at runtime.
///
/// The strategy is fixed at construction. Adapters that write grids out record
/// [`kind`](Self::kind) and later [`rebuild`](Self::rebuild) a grid of the same kind.
#[derive(Clone)]
pub enum MutableGrid<V> {
    Dense(DenseGrid<V>),
    Sparse(SparseGrid<V>),
    Hash(HashGrid<V>),
}

macro_rules! dispatch {
    ($self:expr, $grid:ident => $body:expr) => {
        match $self {
            MutableGrid::Dense($grid) => $body,
            MutableGrid::Sparse($grid) => $body,
            MutableGrid::Hash($grid) => $body,
        }
    };
}

impl<V> MutableGrid<V> {
    pub fn create(kind: MutableGridKind, rows: i32, columns: i32) -> Result<Self, GridError> {
        Ok(match kind {
            MutableGridKind::Dense => MutableGrid::Dense(DenseGrid::create(rows, columns)?),
            MutableGridKind::Sparse => MutableGrid::Sparse(SparseGrid::create(rows, columns)?),
            MutableGridKind::Hash => MutableGrid::Hash(HashGrid::create(rows, columns)?),
        })
    }

    /// Reconstructs a grid from its kind, dimensions and cells.
    pub fn rebuild(
        kind: MutableGridKind,
        rows: i32,
        columns: i32,
        cells: impl IntoIterator<Item = Cell<V>>,
    ) -> Result<Self, GridError> {
        let mut grid = MutableGrid::create(kind, rows, columns)?;
        for cell in cells {
            let (row, column, value) = cell.into_parts();
            grid.put(row, column, value)?;
        }
        Ok(grid)
    }

    pub fn kind(&self) -> MutableGridKind {
        match self {
            MutableGrid::Dense(_) => MutableGridKind::Dense,
            MutableGrid::Sparse(_) => MutableGridKind::Sparse,
            MutableGrid::Hash(_) => MutableGridKind::Hash,
        }
    }

    pub fn get_mut(&mut self, row: i32, column: i32) -> Option<&mut V> {
        dispatch!(self, grid => grid.get_mut(row, column))
    }
}

impl<V> Grid for MutableGrid<V> {
    type Value = V;

    fn row_count(&self) -> i32 {
        dispatch!(self, grid => grid.row_count())
    }

    fn column_count(&self) -> i32 {
        dispatch!(self, grid => grid.column_count())
    }

    fn size(&self) -> usize {
        dispatch!(self, grid => grid.size())
    }

    fn layout(&self) -> Layout {
        dispatch!(self, grid => grid.layout())
    }

    fn get(&self, row: i32, column: i32) -> Option<&V> {
        dispatch!(self, grid => grid.get(row, column))
    }

    fn iter(&self) -> Iter<'_, V> {
        dispatch!(self, grid => grid.iter())
    }

    fn put(&mut self, row: i32, column: i32, value: V) -> Result<(), GridError> {
        dispatch!(self, grid => grid.put(row, column, value))
    }

    fn take(&mut self, row: i32, column: i32) -> Result<Option<V>, GridError> {
        dispatch!(self, grid => grid.take(row, column))
    }

    fn clear(&mut self) -> Result<(), GridError> {
        dispatch!(self, grid => grid.clear())
    }
}

impl<V> From<DenseGrid<V>> for MutableGrid<V> {
    fn from(grid: DenseGrid<V>) -> Self {
        MutableGrid::Dense(grid)
    }
}

impl<V> From<SparseGrid<V>> for MutableGrid<V> {
    fn from(grid: SparseGrid<V>) -> Self {
        MutableGrid::Sparse(grid)
    }
}

impl<V> From<HashGrid<V>> for MutableGrid<V> {
    fn from(grid: HashGrid<V>) -> Self {
        MutableGrid::Hash(grid)
    }
}

impl<V> IntoIterator for MutableGrid<V> {
    type Item = Cell<V>;
    type IntoIter = std::vec::IntoIter<Cell<V>>;

    fn into_iter(self) -> Self::IntoIter {
        let cells: Vec<_> = dispatch!(self, grid => grid.into_iter().collect());
        cells.into_iter()
    }
}

impl_grid_traits!(MutableGrid);
