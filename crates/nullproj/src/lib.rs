#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

mod error;
pub use error::ProjectionError;

/// Null space projector computation.
pub mod projection;
pub use projection::{null_space_projector, null_space_projector_with_tol, NumericTol};

/// Structural properties of a computed projector.
pub mod properties;

/// Console formatting of matrices and verification results.
pub mod report;

/// Utilities to build faer matrices from row-major data.
pub mod utils;

/// Verification that the projector annihilates the input matrix.
pub mod verify;
pub use verify::{check_zero_product, check_zero_product_with_tol, ZeroCheck};
