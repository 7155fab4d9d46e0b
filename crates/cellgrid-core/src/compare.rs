use std::fmt;
use std::hash::{Hash, Hasher};

use crate::Grid;

/// Compares two grids by dimensions and cell set, ignoring their representation.
pub fn grid_eq<A, B>(a: &A, b: &B) -> bool
where
    A: Grid + ?Sized,
    B: Grid + ?Sized,
    A::Value: PartialEq<B::Value>,
{
    a.row_count() == b.row_count()
        && a.column_count() == b.column_count()
        && a.size() == b.size()
        && a.iter().zip(b.iter()).all(|(x, y)| {
            x.equal_row_column(y.row(), y.column()) && x.into_value() == y.into_value()
        })
}

/// Hashes a grid so that grids equal under [`grid_eq`] hash equally.
pub fn hash_grid<G, H>(grid: &G, state: &mut H)
where
    G: Grid + ?Sized,
    G::Value: Hash,
    H: Hasher,
{
    state.write_u32(grid.row_count() as u32 ^ (grid.column_count() as u32).rotate_left(16));
    state.write_usize(grid.size());
    for cell in grid.iter() {
        cell.hash(state);
    }
}

/// Writes `[RxC:(r,c)=v, ...]`.
pub fn fmt_grid<G>(grid: &G, f: &mut fmt::Formatter<'_>) -> fmt::Result
where
    G: Grid + ?Sized,
    G::Value: fmt::Display,
{
    write!(f, "[{}x{}:", grid.row_count(), grid.column_count())?;
    for (i, cell) in grid.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{cell}")?;
    }
    f.write_str("]")
}

/// Like [`fmt_grid`], with values written through `Debug`.
pub fn fmt_grid_debug<G>(grid: &G, f: &mut fmt::Formatter<'_>) -> fmt::Result
where
    G: Grid + ?Sized,
    G::Value: fmt::Debug,
{
    write!(f, "[{}x{}:", grid.row_count(), grid.column_count())?;
    for (i, cell) in grid.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "({},{})={:?}", cell.row(), cell.column(), cell.value())?;
    }
    f.write_str("]")
}

/// Implements `PartialEq<$rhs<V>>` for `$lhs<V>` through [`grid_eq`].
#[macro_export]
macro_rules! impl_grid_eq {
    ($lhs:ident => $($rhs:ident),+ $(,)?) => {
        $(
            impl<V: PartialEq> ::std::cmp::PartialEq<$rhs<V>> for $lhs<V> {
                fn eq(&self, other: &$rhs<V>) -> bool {
                    $crate::grid_eq(self, other)
                }
            }
        )+
    };
}

/// Implements `Eq`, `Hash`, `Display` and `Debug` for grid types through the shared helpers.
#[macro_export]
macro_rules! impl_grid_traits {
    ($($ty:ident),+ $(,)?) => {
        $(
            impl<V: Eq> ::std::cmp::Eq for $ty<V> {}

            impl<V: ::std::hash::Hash> ::std::hash::Hash for $ty<V> {
                fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
                    $crate::hash_grid(self, state)
                }
            }

            impl<V: ::std::fmt::Display> ::std::fmt::Display for $ty<V> {
                fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                    $crate::fmt_grid(self, f)
                }
            }

            impl<V: ::std::fmt::Debug> ::std::fmt::Debug for $ty<V> {
                fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                    $crate::fmt_grid_debug(self, f)
                }
            }
        )+
    };
}
