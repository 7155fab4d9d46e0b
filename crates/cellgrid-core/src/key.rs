/// A cell position packed into a single `u64`.
///
/// Layout: the row occupies the high 32 bits and the column the low 32 bits. Both coordinates
/// are non-negative, so the natural ordering of the packed value is row-major. Ordered maps and
/// sorted arrays keyed by `CellKey` therefore iterate in cell order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CellKey(u64);

impl CellKey {
    /// Packs a position. Both coordinates must be non-negative.
    #[inline(always)]
    #[cfg_attr(debug_assertions, track_caller)]
    pub fn new(row: i32, column: i32) -> Self {
        debug_assert!(row >= 0, "row must be non-negative");
        debug_assert!(column >= 0, "column must be non-negative");
        CellKey((row as u32 as u64) << 32 | column as u32 as u64)
    }

    /// The row of the packed position.
    #[inline(always)]
    pub fn row(self) -> i32 {
        (self.0 >> 32) as i32
    }

    /// The column of the packed position.
    #[inline(always)]
    pub fn column(self) -> i32 {
        self.0 as u32 as i32
    }

    /// The raw packed value.
    #[inline(always)]
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unpacks_coordinates() {
        let key = CellKey::new(7, i32::MAX);
        assert_eq!(key.row(), 7);
        assert_eq!(key.column(), i32::MAX);
        assert_eq!(CellKey::new(0, 0).as_u64(), 0);
    }

    #[test]
    fn orders_row_major() {
        assert!(CellKey::new(0, 5) < CellKey::new(1, 0));
        assert!(CellKey::new(1, 0) < CellKey::new(1, 1));
        assert!(CellKey::new(2, i32::MAX) < CellKey::new(3, 0));
    }
}
