use cellgrid_core::{Cell, Grid};
use cellgrid_mutable::{DenseGrid, HashGrid, MutableGrid, SparseGrid};

use crate::ImmutableGrid;

/// Grids that can be snapshotted into an [`ImmutableGrid`].
///
/// An immutable grid hands back a handle to itself. Every other grid is copied into dense
/// storage when at least half of its cells are occupied and into a sorted sparse array
/// otherwise, so the copy is never larger or slower than the source's best representation.
pub trait ToImmutableGrid<V> {
    fn to_immutable_grid(&self) -> ImmutableGrid<V>;
}

impl<V> ToImmutableGrid<V> for ImmutableGrid<V> {
    fn to_immutable_grid(&self) -> ImmutableGrid<V> {
        self.clone()
    }
}

// Sources are engines whose dimensions and cell positions are already valid.
fn snapshot<G>(source: &G) -> ImmutableGrid<G::Value>
where
    G: Grid + ?Sized,
    G::Value: Clone,
{
    let cells = source.iter().map(Cell::cloned).collect();
    ImmutableGrid::build_compact(source.row_count(), source.column_count(), cells)
}

fn from_owned<G>(source: G) -> ImmutableGrid<G::Value>
where
    G: Grid + IntoIterator<Item = Cell<<G as Grid>::Value>>,
{
    let (rows, columns) = (source.row_count(), source.column_count());
    ImmutableGrid::build_compact(rows, columns, source.into_iter().collect())
}

macro_rules! immutable_conversions {
    ($($ty:ident),+) => {
        $(
            impl<V: Clone> ToImmutableGrid<V> for $ty<V> {
                fn to_immutable_grid(&self) -> ImmutableGrid<V> {
                    snapshot(self)
                }
            }

            impl<V> From<$ty<V>> for ImmutableGrid<V> {
                fn from(grid: $ty<V>) -> Self {
                    from_owned(grid)
                }
            }
        )+
    };
}

immutable_conversions!(DenseGrid, SparseGrid, HashGrid, MutableGrid);

#[cfg(test)]
mod tests {
    use cellgrid_core::Layout;
    use cellgrid_mutable::MutableGridKind;

    use super::*;
    use crate::ImmutableKind;

    #[test]
    fn copy_of_immutable_is_identity() {
        let mut dense = DenseGrid::create(2, 2).unwrap();
        dense.put(0, 0, 1).unwrap();
        dense.put(1, 1, 2).unwrap();
        let first = ImmutableGrid::copy_of(&dense);
        let second = ImmutableGrid::copy_of(&first);
        assert!(ImmutableGrid::ptr_eq(&first, &second));
    }

    #[test]
    fn copies_choose_layout_by_density() {
        let mut dense = DenseGrid::create(1000, 1000).unwrap();
        dense.put(0, 0, 1).unwrap();
        dense.put(999, 999, 2).unwrap();
        let from_dense = ImmutableGrid::copy_of(&dense);
        assert_eq!(from_dense.kind(), ImmutableKind::Sparse);
        assert_eq!(from_dense.layout(), Layout::Sparse);
        assert!(from_dense == dense);

        let mut hash = HashGrid::create(4, 4).unwrap();
        for row in 0..4 {
            for column in 0..4 {
                hash.put(row, column, row * 4 + column).unwrap();
            }
        }
        let from_hash = ImmutableGrid::copy_of(&hash);
        assert_eq!(from_hash.kind(), ImmutableKind::Dense);
        assert!(from_hash.is_full());
        assert!(from_hash == hash);
        assert_eq!(ImmutableGrid::from(hash).kind(), ImmutableKind::Dense);
    }

    #[test]
    fn copies_are_detached_from_source() {
        let mut sparse = SparseGrid::create(3, 3).unwrap();
        sparse.put(0, 0, String::from("a")).unwrap();
        sparse.put(2, 2, String::from("b")).unwrap();
        let frozen = ImmutableGrid::copy_of(&sparse);
        sparse.put(1, 1, String::from("c")).unwrap();
        sparse.clear().unwrap();
        assert_eq!(frozen.size(), 2);
        assert_eq!(frozen.get(2, 2).map(String::as_str), Some("b"));
    }

    #[test]
    fn size_selects_specialization() {
        let mut grid = MutableGrid::create(MutableGridKind::Dense, 4, 4).unwrap();
        assert_eq!(ImmutableGrid::copy_of(&grid).kind(), ImmutableKind::Empty);
        grid.put(3, 3, 'x').unwrap();
        let single = ImmutableGrid::copy_of(&grid);
        assert_eq!(single.kind(), ImmutableKind::Singleton);
        assert_eq!((single.row_count(), single.column_count()), (4, 4));
        grid.put(0, 0, 'y').unwrap();
        assert_eq!(ImmutableGrid::copy_of(&grid).kind(), ImmutableKind::Sparse);
        for column in 0..4 {
            grid.put(1, column, 'z').unwrap();
            grid.put(2, column, 'z').unwrap();
        }
        assert_eq!(grid.size(), 10);
        assert_eq!(ImmutableGrid::from(grid).kind(), ImmutableKind::Dense);
    }
}
