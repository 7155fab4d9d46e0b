//! Mutable grid storage engines.
//!
//! [`DenseGrid`] suits grids where most cells are occupied; [`SparseGrid`] and [`HashGrid`] store
//! occupied cells only. All three enforce the declared dimensions on writes.

mod dense;
mod eq;
mod hash;
mod mutable_grid;
mod sparse;

pub use self::dense::*;
pub use self::hash::*;
pub use self::mutable_grid::*;
pub use self::sparse::*;
