use cellgrid_core::impl_grid_eq;
use cellgrid_mutable::{DenseGrid, HashGrid, MutableGrid, SparseGrid};

use crate::ImmutableGrid;

impl_grid_eq!(ImmutableGrid => ImmutableGrid, DenseGrid, SparseGrid, HashGrid, MutableGrid);
impl_grid_eq!(DenseGrid => ImmutableGrid);
impl_grid_eq!(SparseGrid => ImmutableGrid);
impl_grid_eq!(HashGrid => ImmutableGrid);
impl_grid_eq!(MutableGrid => ImmutableGrid);
