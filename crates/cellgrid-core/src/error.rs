/// Broad category of a [`GridError`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A constructor argument can never describe a valid grid.
    InvalidArgument,
    /// A coordinate or view index lies outside the addressable range.
    IndexOutOfBounds,
    /// The grid (or view) does not allow mutation.
    UnsupportedOperation,
    /// A cursor was used out of sequence.
    IllegalState,
}

/// Errors raised by grid construction, mutation and views.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    /// A negative row or column count.
    #[error("row count and column count must be non-negative, got {rows}x{columns}")]
    NegativeDimensions {
        /// Requested row count.
        rows: i32,
        /// Requested column count.
        columns: i32,
    },
    /// The cell count or its storage exceeds what can be addressed or allocated.
    #[error("a {rows}x{columns} grid exceeds the addressable capacity")]
    CapacityOverflow {
        /// Requested row count.
        rows: i32,
        /// Requested column count.
        columns: i32,
    },
    /// A cell with a negative coordinate.
    #[error("cell ({row},{column}) has a negative coordinate")]
    NegativeCoordinate {
        /// Offending row.
        row: i32,
        /// Offending column.
        column: i32,
    },
    /// A write outside the grid's dimensions.
    #[error("cell ({row},{column}) is outside the {rows}x{columns} grid")]
    CellOutOfBounds {
        /// Offending row.
        row: i32,
        /// Offending column.
        column: i32,
        /// Row count of the grid.
        rows: i32,
        /// Column count of the grid.
        columns: i32,
    },
    /// A row view index outside the grid.
    #[error("row {index} is outside 0..{count}")]
    RowOutOfBounds {
        /// Requested row.
        index: i32,
        /// Row count of the grid.
        count: i32,
    },
    /// A column view index outside the grid.
    #[error("column {index} is outside 0..{count}")]
    ColumnOutOfBounds {
        /// Requested column.
        index: i32,
        /// Column count of the grid.
        count: i32,
    },
    /// A mutation attempted on an immutable grid; names the operation.
    #[error("{0} is not supported by an immutable grid")]
    Unsupported(&'static str),
    /// A cursor removal out of sequence.
    #[error("illegal cursor state: {0}")]
    IllegalCursorState(&'static str),
}

impl GridError {
    /// The broad category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            GridError::NegativeDimensions { .. } | GridError::CapacityOverflow { .. } => {
                ErrorKind::InvalidArgument
            }
            GridError::NegativeCoordinate { .. }
            | GridError::CellOutOfBounds { .. }
            | GridError::RowOutOfBounds { .. }
            | GridError::ColumnOutOfBounds { .. } => ErrorKind::IndexOutOfBounds,
            GridError::Unsupported(_) => ErrorKind::UnsupportedOperation,
            GridError::IllegalCursorState(_) => ErrorKind::IllegalState,
        }
    }
}
