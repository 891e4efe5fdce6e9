use faer::MatRef;

use crate::utils::matmul;

/// Largest absolute entry of `P * P - P`.
///
/// An orthogonal projector is idempotent, so this is close to zero for a valid `P`.
///
/// PRECONDITION: `p` is square.
pub fn idempotency_error(p: MatRef<'_, f64>) -> f64 {
    assert_eq!(p.nrows(), p.ncols());
    let p2 = matmul(p, p);
    (&p2 - p).norm_max()
}

/// Largest absolute entry of `P - P^T`.
///
/// PRECONDITION: `p` is square.
pub fn symmetry_error(p: MatRef<'_, f64>) -> f64 {
    assert_eq!(p.nrows(), p.ncols());
    (p - p.transpose()).norm_max()
}

/// Dimension of the subspace a projector maps onto, read from its trace.
///
/// For the null space projector of a full row rank (m, n) matrix this is `n - m`.
pub fn null_space_dimension(p: MatRef<'_, f64>) -> usize {
    let trace: f64 = (0..p.nrows().min(p.ncols())).map(|i| p.read(i, i)).sum();
    trace.round().max(0.0) as usize
}
