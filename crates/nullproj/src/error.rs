use thiserror::Error;

/// Error types for the null space projector.
#[derive(Debug, Error, PartialEq)]
pub enum ProjectionError {
    /// The input matrix has no elements.
    #[error("The input matrix is empty ({nrows}x{ncols})")]
    EmptyMatrix {
        /// Number of rows of the input.
        nrows: usize,
        /// Number of columns of the input.
        ncols: usize,
    },

    /// The Gram matrix M * M^T cannot be inverted.
    #[error("The matrix M * M^T is not invertible (rcond = {rcond:e})")]
    SingularMatrix {
        /// Reciprocal condition number measured on M * M^T.
        rcond: f64,
    },

    /// The input matrix holds a NaN or infinite entry.
    #[error("Non-finite entry at ({row}, {col})")]
    NonFinite {
        /// Row of the offending entry.
        row: usize,
        /// Column of the offending entry.
        col: usize,
    },

    /// Row-major input data with rows of different lengths.
    #[error("Row {row} has {actual} columns, expected {expected}")]
    RaggedRows {
        /// Index of the first row with a mismatched length.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the mismatched row.
        actual: usize,
    },
}
