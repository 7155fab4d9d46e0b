use std::collections::BTreeMap;
use std::sync::Arc;

use cellgrid_core::{
    check_cell, check_dimensions, empty_slots, impl_grid_traits, Cell, CellKey, Grid, GridError,
    Iter, Layout,
};

use crate::DensityPolicy;

/// Which specialization backs an [`ImmutableGrid`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ImmutableKind {
    Empty,
    Singleton,
    Dense,
    Sparse,
}

enum Repr<V> {
    Empty,
    Singleton(Cell<V>),
    Dense {
        size: usize,
        cells: Box<[Option<V>]>,
    },
    // Parallel arrays sorted by key.
    Sparse {
        keys: Box<[CellKey]>,
        values: Box<[V]>,
    },
}

struct Inner<V> {
    rows: i32,
    columns: i32,
    repr: Repr<V>,
}

/// A grid that can never change.
///
/// The storage is private to the grid and shared between clones, so cloning is O(1) and a clone
/// is the same grid (see [`ptr_eq`](Self::ptr_eq)). Every mutator fails with
/// [`GridError::Unsupported`].
pub struct ImmutableGrid<V> {
    inner: Arc<Inner<V>>,
}

impl<V> Clone for ImmutableGrid<V> {
    fn clone(&self) -> Self {
        ImmutableGrid {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<V> ImmutableGrid<V> {
    /// The empty 0x0 grid.
    pub fn of() -> Self {
        Self::assemble(0, 0, vec![], None)
    }

    /// An empty grid with the given dimensions.
    pub fn of_dimensions(rows: i32, columns: i32) -> Result<Self, GridError> {
        check_dimensions(rows, columns)?;
        Ok(Self::assemble(rows, columns, vec![], None))
    }

    /// A grid holding one cell, sized to just contain it.
    pub fn of_cell(row: i32, column: i32, value: V) -> Result<Self, GridError> {
        let cell = Cell::of(row, column, value)?;
        let (rows, columns) = extent(row, column)?;
        Ok(Self::assemble(rows, columns, vec![cell], None))
    }

    pub fn of_cell_in(
        rows: i32,
        columns: i32,
        row: i32,
        column: i32,
        value: V,
    ) -> Result<Self, GridError> {
        check_dimensions(rows, columns)?;
        check_cell(row, column, rows, columns)?;
        let cell = Cell::new_unchecked(row, column, value);
        Ok(Self::assemble(rows, columns, vec![cell], None))
    }

    /// Copies a grid, reusing `source` itself when it is already immutable.
    ///
    /// Other sources are stored densely when at least half of their cells are occupied and
    /// sparsely otherwise, whatever their own layout.
    pub fn copy_of<G>(source: &G) -> Self
    where
        G: crate::ToImmutableGrid<V> + ?Sized,
    {
        source.to_immutable_grid()
    }

    /// Copies any [`Grid`] implementation with the default [`DensityPolicy`].
    ///
    /// The source's dimensions and cell positions are validated rather than trusted.
    pub fn copy_of_grid<G>(source: &G) -> Result<Self, GridError>
    where
        G: Grid<Value = V> + ?Sized,
        V: Clone,
    {
        Self::copy_with_policy(source, DensityPolicy::default())
    }

    /// Copies any [`Grid`] implementation, choosing the layout with `policy`.
    ///
    /// Fails with [`GridError::CapacityOverflow`] when a dense buffer for the source's
    /// dimensions cannot be allocated.
    pub fn copy_with_policy<G>(source: &G, policy: DensityPolicy) -> Result<Self, GridError>
    where
        G: Grid<Value = V> + ?Sized,
        V: Clone,
    {
        let (rows, columns) = (source.row_count(), source.column_count());
        let capacity = check_dimensions(rows, columns)?;
        let mut cells = Vec::with_capacity(source.size());
        for cell in source.iter() {
            check_cell(cell.row(), cell.column(), rows, columns)?;
            cells.push(cell.cloned());
        }
        cells.sort_by(|a, b| a.cmp_position(b));
        cells.dedup_by(|later, earlier| later.cmp_position(earlier).is_eq());
        let layout = policy.layout_for(cells.len(), capacity);
        Self::build(rows, columns, cells, layout)
    }

    /// Builds a grid from cells alone.
    ///
    /// The dimensions are the largest row plus one by the largest column plus one. When two
    /// cells share a position the later one wins.
    pub fn copy_of_cells(cells: impl IntoIterator<Item = Cell<V>>) -> Result<Self, GridError> {
        let mut rows = 0;
        let mut columns = 0;
        let mut collected = BTreeMap::new();
        for cell in cells {
            let (row_extent, column_extent) = extent(cell.row(), cell.column())?;
            rows = rows.max(row_extent);
            columns = columns.max(column_extent);
            collected.insert(cell.key(), cell.into_value());
        }
        Self::from_map(rows, columns, collected, DensityPolicy::default())
    }

    /// Builds a grid of the given dimensions from cells; later cells win on shared positions.
    pub fn copy_of_cells_in(
        rows: i32,
        columns: i32,
        cells: impl IntoIterator<Item = Cell<V>>,
    ) -> Result<Self, GridError> {
        check_dimensions(rows, columns)?;
        let mut collected = BTreeMap::new();
        for cell in cells {
            check_cell(cell.row(), cell.column(), rows, columns)?;
            collected.insert(cell.key(), cell.into_value());
        }
        Self::from_map(rows, columns, collected, DensityPolicy::default())
    }

    pub fn kind(&self) -> ImmutableKind {
        match self.inner.repr {
            Repr::Empty => ImmutableKind::Empty,
            Repr::Singleton(_) => ImmutableKind::Singleton,
            Repr::Dense { .. } => ImmutableKind::Dense,
            Repr::Sparse { .. } => ImmutableKind::Sparse,
        }
    }

    /// Whether both handles share the same storage.
    pub fn ptr_eq(this: &Self, other: &Self) -> bool {
        Arc::ptr_eq(&this.inner, &other.inner)
    }

    fn from_map(
        rows: i32,
        columns: i32,
        cells: BTreeMap<CellKey, V>,
        policy: DensityPolicy,
    ) -> Result<Self, GridError> {
        let capacity = check_dimensions(rows, columns)?;
        let layout = policy.layout_for(cells.len(), capacity);
        let cells = cells
            .into_iter()
            .map(|(key, value)| Cell::new_unchecked(key.row(), key.column(), value))
            .collect();
        Self::build(rows, columns, cells, layout)
    }

    /// Builds a grid with the requested layout.
    ///
    /// `cells` must be sorted row-major, free of duplicate positions and within the dimensions,
    /// which must already have been validated.
    fn build(
        rows: i32,
        columns: i32,
        cells: Vec<Cell<V>>,
        layout: Layout,
    ) -> Result<Self, GridError> {
        let slots = match layout {
            Layout::Dense if cells.len() > 1 => Some(empty_slots(rows, columns)?),
            _ => None,
        };
        Ok(Self::assemble(rows, columns, cells, slots))
    }

    /// Builds a grid with the layout the default [`DensityPolicy`] picks for `cells`.
    ///
    /// Same preconditions as [`build`](Self::build). A dense buffer that cannot be allocated
    /// falls back to sparse storage.
    pub(crate) fn build_compact(rows: i32, columns: i32, cells: Vec<Cell<V>>) -> Self {
        let capacity = check_dimensions(rows, columns).unwrap_or(usize::MAX);
        let slots = match DensityPolicy::default().layout_for(cells.len(), capacity) {
            Layout::Dense if cells.len() > 1 => empty_slots(rows, columns).ok(),
            _ => None,
        };
        Self::assemble(rows, columns, cells, slots)
    }

    /// Selects the specialization for `cells`; dense when `slots` is given.
    fn assemble(
        rows: i32,
        columns: i32,
        mut cells: Vec<Cell<V>>,
        slots: Option<Box<[Option<V>]>>,
    ) -> Self {
        debug_assert!(cells.windows(2).all(|w| w[0].cmp_position(&w[1]).is_lt()));
        let repr = match (cells.len(), slots) {
            (0, _) => Repr::Empty,
            (1, _) => Repr::Singleton(cells.remove(0)),
            (size, Some(mut slots)) => {
                for cell in cells {
                    let (row, column, value) = cell.into_parts();
                    slots[row as usize * columns as usize + column as usize] = Some(value);
                }
                Repr::Dense { size, cells: slots }
            }
            (_, None) => {
                let (keys, values): (Vec<_>, Vec<_>) = cells
                    .into_iter()
                    .map(|cell| (cell.key(), cell.into_value()))
                    .unzip();
                Repr::Sparse {
                    keys: keys.into_boxed_slice(),
                    values: values.into_boxed_slice(),
                }
            }
        };
        let grid = ImmutableGrid {
            inner: Arc::new(Inner {
                rows,
                columns,
                repr,
            }),
        };
        #[cfg(feature = "tracing")]
        tracing::trace!(
            rows,
            columns,
            size = grid.size(),
            kind = ?grid.kind(),
            "built immutable grid"
        );
        grid
    }
}

/// Dimensions of the smallest grid containing `(row, column)`.
fn extent(row: i32, column: i32) -> Result<(i32, i32), GridError> {
    match (row.checked_add(1), column.checked_add(1)) {
        (Some(rows), Some(columns)) => {
            check_dimensions(rows, columns)?;
            Ok((rows, columns))
        }
        _ => Err(GridError::CapacityOverflow {
            rows: row.saturating_add(1),
            columns: column.saturating_add(1),
        }),
    }
}

impl<V> Default for ImmutableGrid<V> {
    fn default() -> Self {
        ImmutableGrid::of()
    }
}

impl<V> Grid for ImmutableGrid<V> {
    type Value = V;

    fn row_count(&self) -> i32 {
        self.inner.rows
    }

    fn column_count(&self) -> i32 {
        self.inner.columns
    }

    fn size(&self) -> usize {
        match &self.inner.repr {
            Repr::Empty => 0,
            Repr::Singleton(_) => 1,
            Repr::Dense { size, .. } => *size,
            Repr::Sparse { keys, .. } => keys.len(),
        }
    }

    fn layout(&self) -> Layout {
        match self.inner.repr {
            Repr::Dense { .. } => Layout::Dense,
            _ => Layout::Sparse,
        }
    }

    fn get(&self, row: i32, column: i32) -> Option<&V> {
        if !self.exists(row, column) {
            return None;
        }
        match &self.inner.repr {
            Repr::Empty => None,
            Repr::Singleton(cell) => cell.equal_row_column(row, column).then(|| cell.value()),
            Repr::Dense { cells, .. } => {
                cells[row as usize * self.inner.columns as usize + column as usize].as_ref()
            }
            Repr::Sparse { keys, values } => keys
                .binary_search(&CellKey::new(row, column))
                .ok()
                .map(|index| &values[index]),
        }
    }

    fn iter(&self) -> Iter<'_, V> {
        let columns = self.inner.columns as usize;
        match &self.inner.repr {
            Repr::Empty => Iter::empty(),
            Repr::Singleton(cell) => Iter::new(1, std::iter::once(cell.as_ref())),
            Repr::Dense { size, cells } => Iter::new(
                *size,
                cells.iter().enumerate().filter_map(move |(index, slot)| {
                    let (row, column) = ((index / columns) as i32, (index % columns) as i32);
                    slot.as_ref()
                        .map(|value| Cell::new_unchecked(row, column, value))
                }),
            ),
            Repr::Sparse { keys, values } => Iter::new(
                keys.len(),
                keys.iter()
                    .zip(values.iter())
                    .map(|(key, value)| Cell::new_unchecked(key.row(), key.column(), value)),
            ),
        }
    }

    fn put(&mut self, _row: i32, _column: i32, _value: V) -> Result<(), GridError> {
        Err(GridError::Unsupported("put"))
    }

    fn take(&mut self, _row: i32, _column: i32) -> Result<Option<V>, GridError> {
        Err(GridError::Unsupported("remove"))
    }

    fn clear(&mut self) -> Result<(), GridError> {
        Err(GridError::Unsupported("clear"))
    }

    fn is_mutable(&self) -> bool {
        false
    }
}

impl_grid_traits!(ImmutableGrid);
