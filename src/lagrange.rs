//! Lagrange interpolation over the scalar field.
//!
//! Reconstruction evaluates the implicit degree-(t-1) polynomial at zero
//! from a set of sample points `(x_i, f(x_i))` with pairwise distinct
//! integer abscissas lifted into the field:
//!
//! ```text
//! f(0) = sum_i f(x_i) * lambda_i
//! lambda_i = prod_{j != i} (-x_j) / (x_i - x_j)
//! ```
//!
//! Duplicate abscissas are rejected up front: they would make a
//! denominator zero, and the check must happen before any inversion is
//! attempted.

use crate::arith::VssScalar;
use crate::errors::{BackendError, Error};

/// Interpolates the polynomial through `points` and evaluates it at zero.
///
/// Every supplied point participates, so passing more points than the
/// polynomial's degree requires is fine as long as they all lie on the
/// same polynomial.
///
/// # Errors
///
/// - [`Error::DuplicateIndex`] if two points share an abscissa.
pub fn interpolate_at_zero<F: VssScalar>(points: &[(u64, F)]) -> Result<F, Error> {
    for (i, (xi, _)) in points.iter().enumerate() {
        if points[i + 1..].iter().any(|(xj, _)| xj == xi) {
            return Err(Error::DuplicateIndex(*xi as usize));
        }
    }

    let mut result = F::zero();
    for (i, (xi, value)) in points.iter().enumerate() {
        let xi = F::from_u64(*xi);
        let mut lambda = F::one();
        for (j, (xj, _)) in points.iter().enumerate() {
            if i == j {
                continue;
            }
            let xj = F::from_u64(*xj);
            let denominator = (xi - xj)
                .invert()
                .ok_or(BackendError::Math("zero denominator in lagrange basis"))?;
            lambda *= -xj * denominator;
        }
        result += *value * lambda;
    }
    Ok(result)
}
