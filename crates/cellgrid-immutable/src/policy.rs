use cellgrid_core::Layout;

/// Decides between dense and sparse storage when an immutable grid is built from cells alone.
///
/// Copies of existing grids keep the layout of their source; see
/// [`ImmutableGrid::copy_with_policy`](crate::ImmutableGrid::copy_with_policy) to override it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum DensityPolicy {
    /// Dense when at least this fraction of the capacity is occupied.
    FillRatio(f64),
    AlwaysDense,
    AlwaysSparse,
}

impl DensityPolicy {
    pub const DEFAULT_FILL_RATIO: f64 = 0.5;

    pub fn layout_for(&self, size: usize, capacity: usize) -> Layout {
        match *self {
            DensityPolicy::AlwaysDense => Layout::Dense,
            DensityPolicy::AlwaysSparse => Layout::Sparse,
            DensityPolicy::FillRatio(ratio) => {
                if capacity > 0 && size as f64 >= ratio * capacity as f64 {
                    Layout::Dense
                } else {
                    Layout::Sparse
                }
            }
        }
    }
}

impl Default for DensityPolicy {
    fn default() -> Self {
        DensityPolicy::FillRatio(Self::DEFAULT_FILL_RATIO)
    }
}
