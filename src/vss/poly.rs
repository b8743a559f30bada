//! Secret polynomials and Horner evaluation.
//!
//! A dealing uses two degree-(t-1) polynomials over the scalar field: `f`
//! whose constant term is the secret, and a blinding polynomial whose
//! constant term is random. Evaluation at participant indices uses
//! Horner's method, O(t) field multiplications per point.

use rand_core::RngCore;

use crate::arith::VssScalar;

/// A polynomial `a_0 + a_1 x + ... + a_{t-1} x^{t-1}` over the scalar field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct SecretPolynomial<F: VssScalar> {
    coeffs: Vec<F>,
}

impl<F: VssScalar> SecretPolynomial<F> {
    /// Builds a polynomial with the given constant term and `t - 1` fresh
    /// random coefficients.
    pub fn with_constant_term<R: RngCore + ?Sized>(rng: &mut R, constant: F, t: usize) -> Self {
        let mut coeffs = Vec::with_capacity(t);
        coeffs.push(constant);
        for _ in 1..t {
            coeffs.push(F::random(rng));
        }
        Self { coeffs }
    }

    /// Builds a polynomial with all `t` coefficients random, including the
    /// constant term. Used for the blinding polynomial.
    pub fn random<R: RngCore + ?Sized>(rng: &mut R, t: usize) -> Self {
        let constant = F::random(rng);
        Self::with_constant_term(rng, constant, t)
    }

    pub fn coeffs(&self) -> &[F] {
        &self.coeffs
    }

    /// Evaluates the polynomial at an integer point via Horner's method.
    pub fn evaluate(&self, x: u64) -> F {
        let x = F::from_u64(x);
        let mut acc = F::zero();
        for coeff in self.coeffs.iter().rev() {
            acc = acc * x + *coeff;
        }
        acc
    }
}
