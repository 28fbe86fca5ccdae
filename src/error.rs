use thiserror::Error;

/// The error type for fallible container and matrix operations.
///
/// Every failure is surfaced synchronously to the caller; no operation is
/// retried and no operation leaves its receiver in a partially-mutated
/// state. Operator-overload sugar (`+`, `-`, `*`, indexing) panics on the
/// same conditions and documents it; the checked methods return these
/// variants instead.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A matrix was constructed or resized with a zero dimension.
    #[error("matrix dimensions must be at least 1x1, got {rows}x{cols}")]
    InvalidDimensions {
        /// Requested row count.
        rows: usize,
        /// Requested column count.
        cols: usize,
    },

    /// Arithmetic was attempted between incompatibly-shaped matrices.
    #[error("matrix dimension mismatch: {left_rows}x{left_cols} vs {right_rows}x{right_cols}")]
    DimensionMismatch {
        /// Shape of the left-hand operand.
        left_rows: usize,
        /// Shape of the left-hand operand.
        left_cols: usize,
        /// Shape of the right-hand operand.
        right_rows: usize,
        /// Shape of the right-hand operand.
        right_cols: usize,
    },

    /// A checked matrix access was outside the valid index range.
    #[error("matrix index ({row}, {col}) out of range for a {rows}x{cols} matrix")]
    IndexOutOfRange {
        /// Requested row index.
        row: usize,
        /// Requested column index.
        col: usize,
        /// Row count of the matrix.
        rows: usize,
        /// Column count of the matrix.
        cols: usize,
    },

    /// The inverse of a zero-determinant matrix was requested.
    #[error("matrix is singular (determinant is zero)")]
    SingularMatrix,

    /// A checked keyed access ([`BstMap::at`](crate::BstMap::at)) missed.
    #[error("key not found")]
    KeyNotFound,
}

/// Convenience alias used throughout the crate.
pub type Result<T, E = Error> = core::result::Result<T, E>;
