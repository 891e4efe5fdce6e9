use faer::{Mat, MatRef, Parallelism};

use crate::ProjectionError;

/// Utility function to convert a fixed size row-major array to a faer matrix.
///
/// # Arguments
///
/// * `array` - A RxC array where each inner array is a row.
///
/// # Returns
///
/// A faer matrix with R rows and C columns.
pub fn matrix_from_array<const R: usize, const C: usize>(array: &[[f64; C]; R]) -> Mat<f64> {
    Mat::from_fn(R, C, |i, j| array[i][j])
}

/// Utility function to convert a list of rows to a faer matrix.
///
/// # Arguments
///
/// * `rows` - The rows of the matrix. All rows must have the same length.
///
/// # Returns
///
/// A faer matrix with one row per entry of `rows`. An empty list gives a 0x0 matrix.
pub fn matrix_from_rows(rows: &[Vec<f64>]) -> Result<Mat<f64>, ProjectionError> {
    let ncols = rows.first().map_or(0, |row| row.len());

    if let Some((row, actual)) = rows
        .iter()
        .map(|r| r.len())
        .enumerate()
        .find(|&(_, len)| len != ncols)
    {
        return Err(ProjectionError::RaggedRows {
            row,
            expected: ncols,
            actual,
        });
    }

    Ok(Mat::from_fn(rows.len(), ncols, |i, j| rows[i][j]))
}

/// Matrix product `lhs * rhs` computed on the calling thread.
///
/// # Arguments
///
/// * `lhs` - The left matrix with shape (m, k).
/// * `rhs` - The right matrix with shape (k, n).
///
/// PRECONDITION: `lhs.ncols() == rhs.nrows()`.
pub fn matmul(lhs: MatRef<'_, f64>, rhs: MatRef<'_, f64>) -> Mat<f64> {
    assert_eq!(lhs.ncols(), rhs.nrows());

    let mut out = Mat::<f64>::zeros(lhs.nrows(), rhs.ncols());
    faer::linalg::matmul::matmul(out.as_mut(), lhs, rhs, None, 1.0, Parallelism::None);
    out
}
