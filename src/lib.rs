//! Two-dimensional grids of optional values.
//!
//! Every grid implements [`Grid`]: a fixed number of rows and columns, each cell either empty or
//! holding one value, iterated in row-major order. Mutable grids live in [`mutable`], immutable
//! snapshots in [`immutable`].

pub use cellgrid_core::*;
pub use cellgrid_immutable as immutable;
pub use cellgrid_mutable as mutable;

pub use cellgrid_immutable::{DensityPolicy, ImmutableGrid, ImmutableKind, ToImmutableGrid};
pub use cellgrid_mutable::{DenseGrid, HashGrid, MutableGrid, MutableGridKind, SparseGrid};
