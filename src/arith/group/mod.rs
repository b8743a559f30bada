use std::fmt::Debug;

use crate::{BackendError, FieldElement};

#[cfg(feature = "blst")]
mod blst_bls12_381;
#[cfg(feature = "blst")]
pub use blst_bls12_381::G1;

#[cfg(feature = "ark_bls12381")]
mod ark_bls12_381;
#[cfg(feature = "ark_bls12381")]
pub use ark_bls12_381::G1;

#[cfg(feature = "ark_bn254")]
mod ark_bn254;
#[cfg(feature = "ark_bn254")]
pub use ark_bn254::G1;

/// Elliptic curve point abstraction for the commitment group.
///
/// Pedersen commitments and the verification equation live in a single
/// prime-order group whose order matches the scalar field. This trait
/// provides the group operations the scheme consumes: identity, the group
/// law, scalar multiplication and equality.
///
/// # Type Parameters
///
/// - `F`: The scalar field type used for scalar multiplication
///
/// # Example
///
/// ```rust,no_run
/// use rand::thread_rng;
/// use pvss::{CurvePoint, FieldElement, Fr, G1};
///
/// let mut rng = thread_rng();
/// let scalar = Fr::random(&mut rng);
///
/// let g = G1::generator();
/// let point = g.mul_scalar(&scalar);
/// let doubled = point.add(&point);
/// ```
pub trait CurvePoint<F: FieldElement>:
    Clone + Copy + Send + Sync + Debug + PartialEq + 'static
{
    /// Byte representation type (compressed point encoding).
    type Repr: AsRef<[u8]> + Default + Debug + Send + Sync + Clone + 'static;

    /// Returns the point at infinity (identity element).
    fn identity() -> Self;

    /// Returns the standard generator for this group.
    fn generator() -> Self;

    /// Checks if this point is the identity element.
    fn is_identity(&self) -> bool;

    /// Performs elliptic curve point addition (the group operation).
    fn add(&self, other: &Self) -> Self;

    /// Performs scalar multiplication: returns `scalar * self`.
    fn mul_scalar(&self, scalar: &F) -> Self;

    /// Serializes this point to its compressed byte representation.
    fn to_repr(&self) -> Self::Repr;

    /// Deserializes a point from its compressed byte representation.
    ///
    /// Returns an error for encodings that are not valid curve points.
    fn from_repr(repr: &Self::Repr) -> Result<Self, BackendError>;
}
