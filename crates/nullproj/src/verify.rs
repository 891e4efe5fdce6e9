use faer::{Mat, MatRef};

use crate::{utils::matmul, NumericTol};

/// Result of checking that `M * P` is the zero matrix.
#[derive(Debug, Clone)]
pub struct ZeroCheck {
    /// Whether every entry of the product is within the tolerance of zero.
    pub is_zero: bool,
    /// The product `M * P` with shape (m, n).
    pub product: Mat<f64>,
    /// Largest absolute entry of the product, NaN if any entry is NaN.
    pub max_abs: f64,
}

/// Check that the projector annihilates the input matrix, i.e. `M * P ≈ 0`.
///
/// Uses the default absolute tolerance of [`NumericTol`].
///
/// # Arguments
///
/// * `m` - The input matrix with shape (m, n).
/// * `p` - The projector with shape (n, n).
///
/// PRECONDITION: `p` is square and its size matches the number of columns of `m`.
pub fn check_zero_product(m: MatRef<'_, f64>, p: MatRef<'_, f64>) -> ZeroCheck {
    check_zero_product_with_tol(m, p, NumericTol::default().zero)
}

/// Check that the projector annihilates the input matrix within an absolute tolerance.
///
/// # Arguments
///
/// * `m` - The input matrix with shape (m, n).
/// * `p` - The projector with shape (n, n).
/// * `atol` - Absolute tolerance on each entry of `M * P`.
///
/// PRECONDITION: `p` is square and its size matches the number of columns of `m`.
pub fn check_zero_product_with_tol(
    m: MatRef<'_, f64>,
    p: MatRef<'_, f64>,
    atol: f64,
) -> ZeroCheck {
    assert_eq!(p.nrows(), p.ncols());
    assert_eq!(m.ncols(), p.nrows());

    let product = matmul(m, p);

    // an empty product is trivially zero
    let mut max_abs = 0.0_f64;
    let mut is_zero = true;
    for col in 0..product.ncols() {
        for row in 0..product.nrows() {
            let val = product.read(row, col).abs();
            // NaN never compares below the tolerance
            if !(val <= atol) {
                is_zero = false;
            }
            // a NaN entry sticks so that max_abs agrees with is_zero
            if val.is_nan() || val > max_abs {
                max_abs = val;
            }
        }
    }

    log::debug!("zero check: max |M * P| = {max_abs:e}, atol = {atol:e}, is_zero = {is_zero}");

    ZeroCheck {
        is_zero,
        product,
        max_abs,
    }
}
