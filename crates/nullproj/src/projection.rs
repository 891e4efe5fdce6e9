use faer::{linalg::solvers::SolverCore, Mat, MatRef};

use crate::{utils::matmul, ProjectionError};

/// Numeric tolerances used by the projector and its verification.
#[derive(Debug, Clone)]
pub struct NumericTol {
    /// Absolute tolerance on each entry of M * P when checking for the zero matrix.
    pub zero: f64,
    /// Reciprocal condition number of M * M^T at or below which it is treated as singular.
    ///
    /// `None` uses `max(m, n) * f64::EPSILON`, the threshold below which M * M^T
    /// is not distinguishable from a rank deficient matrix in double precision.
    pub singular: Option<f64>,
}

impl Default for NumericTol {
    fn default() -> Self {
        Self {
            zero: 1e-10,
            singular: None,
        }
    }
}

/// Compute the orthogonal projector onto the null space of a matrix.
///
/// The projector is computed in closed form as `P = I - M^T (M M^T)^-1 M`,
/// using the default [`NumericTol`].
///
/// # Arguments
///
/// * `m` - The input matrix with shape (m, n).
///
/// # Returns
///
/// The projector `P` with shape (n, n).
///
/// Example:
///
/// ```
/// use nullproj::{null_space_projector, utils::matrix_from_array};
///
/// let m = matrix_from_array(&[[1.0, 0.0, 0.0]]);
/// let p = null_space_projector(m.as_ref()).unwrap();
/// assert_eq!(p.nrows(), 3);
/// assert!(p.read(0, 0).abs() < 1e-12);
/// assert!((p.read(1, 1) - 1.0).abs() < 1e-12);
/// ```
pub fn null_space_projector(m: MatRef<'_, f64>) -> Result<Mat<f64>, ProjectionError> {
    null_space_projector_with_tol(m, &NumericTol::default())
}

/// Compute the orthogonal projector onto the null space of a matrix with explicit tolerances.
///
/// Matrix products run on the calling thread. The SVD and LU factorizations
/// follow faer's global parallelism setting.
///
/// # Arguments
///
/// * `m` - The input matrix with shape (m, n).
/// * `tol` - The tolerances used to decide whether `M M^T` is invertible.
///
/// # Errors
///
/// * [`ProjectionError::EmptyMatrix`] if `m` has no elements.
/// * [`ProjectionError::NonFinite`] if `m` holds a NaN or infinite entry.
/// * [`ProjectionError::SingularMatrix`] if `M M^T` is not invertible, e.g. when
///   there are more rows than columns or the rows are linearly dependent.
pub fn null_space_projector_with_tol(
    m: MatRef<'_, f64>,
    tol: &NumericTol,
) -> Result<Mat<f64>, ProjectionError> {
    let (nrows, ncols) = (m.nrows(), m.ncols());

    if nrows == 0 || ncols == 0 {
        return Err(ProjectionError::EmptyMatrix { nrows, ncols });
    }

    for row in 0..nrows {
        for col in 0..ncols {
            if !m.read(row, col).is_finite() {
                return Err(ProjectionError::NonFinite { row, col });
            }
        }
    }

    // rcond(M * M^T) = rcond(M)^2 when M has full row rank. Measuring it on M
    // keeps exactly dependent rows well below the threshold.
    let rcond = if nrows > ncols {
        0.0
    } else {
        reciprocal_condition(m).powi(2)
    };
    let threshold = tol
        .singular
        .unwrap_or(nrows.max(ncols) as f64 * f64::EPSILON);
    log::debug!(
        "projector: M is {nrows}x{ncols}, rcond(M * M^T) = {rcond:e}, threshold = {threshold:e}"
    );

    // NOTE: a NaN rcond must also be rejected, hence the negated comparison
    if !(rcond > threshold) {
        return Err(ProjectionError::SingularMatrix { rcond });
    }

    // gram matrix M * M^T with shape (m, m)
    let gram = matmul(m, m.transpose());

    if !is_finite(gram.as_ref()) {
        return Err(ProjectionError::SingularMatrix { rcond: f64::NAN });
    }

    let gram_inv = gram.partial_piv_lu().inverse();

    // P = I - M^T * (M * M^T)^-1 * M
    let mt_gram_inv = matmul(m.transpose(), gram_inv.as_ref());
    let range_proj = matmul(mt_gram_inv.as_ref(), m);
    let identity = Mat::<f64>::identity(ncols, ncols);

    Ok(&identity - &range_proj)
}

fn is_finite(mat: MatRef<'_, f64>) -> bool {
    (0..mat.ncols()).all(|col| (0..mat.nrows()).all(|row| mat.read(row, col).is_finite()))
}

/// Ratio between the smallest and the largest singular value of a matrix.
///
/// Returns 0 for the zero matrix and NaN when the matrix holds non-finite entries.
fn reciprocal_condition(mat: MatRef<'_, f64>) -> f64 {
    if !is_finite(mat) {
        return f64::NAN;
    }

    // singular values come in nonincreasing order
    let s = mat.singular_values();
    match (s.first(), s.last()) {
        (Some(&s_max), Some(&s_min)) if s_max > 0.0 => s_min / s_max,
        _ => 0.0,
    }
}
