use crate::GridError;

/// Validates declared grid dimensions and returns the cell capacity.
pub fn check_dimensions(rows: i32, columns: i32) -> Result<usize, GridError> {
    if rows < 0 || columns < 0 {
        return Err(GridError::NegativeDimensions { rows, columns });
    }
    (rows as usize)
        .checked_mul(columns as usize)
        .ok_or(GridError::CapacityOverflow { rows, columns })
}

/// Checks that `(row, column)` addresses a cell of a `rows`x`columns` grid.
#[inline(always)]
pub fn check_cell(row: i32, column: i32, rows: i32, columns: i32) -> Result<(), GridError> {
    if in_bounds(row, column, rows, columns) {
        Ok(())
    } else {
        Err(GridError::CellOutOfBounds {
            row,
            column,
            rows,
            columns,
        })
    }
}

/// Whether `(row, column)` addresses a cell of a `rows`x`columns` grid.
#[inline(always)]
pub fn in_bounds(row: i32, column: i32, rows: i32, columns: i32) -> bool {
    row >= 0 && column >= 0 && row < rows && column < columns
}

/// Allocates `rows * columns` empty slots for dense storage.
///
/// Fails with [`GridError::CapacityOverflow`] when the buffer does not fit in the address space
/// or the allocator refuses it.
pub fn empty_slots<V>(rows: i32, columns: i32) -> Result<Box<[Option<V>]>, GridError> {
    let capacity = check_dimensions(rows, columns)?;
    let mut slots = Vec::new();
    slots
        .try_reserve_exact(capacity)
        .map_err(|_| GridError::CapacityOverflow { rows, columns })?;
    slots.resize_with(capacity, || None);
    Ok(slots.into_boxed_slice())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimensions() {
        assert_eq!(check_dimensions(2, 3), Ok(6));
        assert_eq!(check_dimensions(0, 0), Ok(0));
        assert_eq!(
            check_dimensions(-1, 3),
            Err(GridError::NegativeDimensions { rows: -1, columns: 3 })
        );
        assert!(check_dimensions(2, -3).is_err());
    }

    #[test]
    fn cells() {
        assert!(check_cell(0, 0, 1, 1).is_ok());
        assert!(check_cell(1, 0, 1, 1).is_err());
        assert!(check_cell(0, -1, 1, 1).is_err());
        assert!(!in_bounds(0, 0, 0, 0));
    }

    #[test]
    fn oversized_slots_are_an_error() {
        assert_eq!(empty_slots::<u8>(3, 4).map(|slots| slots.len()), Ok(12));
        assert_eq!(
            empty_slots::<u64>(i32::MAX, i32::MAX).err(),
            Some(GridError::CapacityOverflow {
                rows: i32::MAX,
                columns: i32::MAX
            })
        );
    }
}
