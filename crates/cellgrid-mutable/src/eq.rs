use cellgrid_core::impl_grid_eq;

use crate::{DenseGrid, HashGrid, MutableGrid, SparseGrid};

impl_grid_eq!(DenseGrid => DenseGrid, SparseGrid, HashGrid, MutableGrid);
impl_grid_eq!(SparseGrid => DenseGrid, SparseGrid, HashGrid, MutableGrid);
impl_grid_eq!(HashGrid => DenseGrid, SparseGrid, HashGrid, MutableGrid);
impl_grid_eq!(MutableGrid => DenseGrid, SparseGrid, HashGrid, MutableGrid);
