use std::fmt::Debug;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use rand_core::RngCore;

use crate::BackendError;

#[cfg(feature = "blst")]
mod blst_bls12_381;
#[cfg(feature = "blst")]
pub use blst_bls12_381::Fr;

#[cfg(feature = "ark_bls12381")]
mod ark_bls12_381;
#[cfg(feature = "ark_bls12381")]
pub use ark_bls12_381::Fr;

#[cfg(feature = "ark_bn254")]
mod ark_bn254;
#[cfg(feature = "ark_bn254")]
pub use ark_bn254::Fr;

/// Field element abstraction for scalar field operations.
///
/// This trait abstracts over the scalar field Fr of the elliptic curve. It
/// covers the exponent space of the scheme: polynomial coefficients, share
/// values and Lagrange basis factors all live here.
///
/// # Type Parameters
///
/// - `Repr`: Byte representation type for serialization
///
/// # Example
///
/// ```rust,no_run
/// use rand::thread_rng;
/// use pvss::{FieldElement, Fr};
///
/// let mut rng = thread_rng();
/// let a = Fr::random(&mut rng);
///
/// let zero = Fr::zero();
/// let one = Fr::one();
/// let inv = a.invert().expect("non-zero element");
///
/// let bytes = a.to_repr();
/// let recovered = Fr::from_repr(&bytes).expect("valid repr");
/// ```
pub trait FieldElement: Clone + Copy + Send + Sync + Debug + 'static {
    /// Byte representation type (e.g., 32-byte array for bls12-381 scalars).
    type Repr: AsRef<[u8]> + AsMut<[u8]> + Default + Debug + Send + Sync + Clone + 'static;

    /// Returns the additive identity (zero) element.
    fn zero() -> Self;

    /// Returns the multiplicative identity (one) element.
    fn one() -> Self;

    /// Generates a random field element using the provided RNG.
    fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self;

    /// Generates a random nonzero field element by rejection sampling.
    ///
    /// Drawing zero has negligible probability for cryptographic field
    /// sizes, so the loop virtually always terminates on the first draw.
    fn random_nonzero<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        loop {
            let candidate = Self::random(rng);
            if !candidate.is_zero() {
                return candidate;
            }
        }
    }

    /// Computes the multiplicative inverse, returning `None` for zero.
    fn invert(&self) -> Option<Self>;

    /// Checks whether this element is the additive identity.
    fn is_zero(&self) -> bool;

    /// Lifts an unsigned integer (e.g. a participant index) into the field.
    fn from_u64(n: u64) -> Self;

    /// Serializes this field element to its byte representation.
    fn to_repr(&self) -> Self::Repr;

    /// Deserializes a field element from its byte representation.
    ///
    /// Returns an error if the representation is invalid (e.g., not reduced
    /// modulo the field order).
    fn from_repr(repr: &Self::Repr) -> Result<Self, BackendError>;
}

/// Helper trait combining the field functionality required by the scheme.
///
/// Concrete scalar types from the backends already implement the arithmetic
/// operators, so the blanket impl picks them up automatically.
pub trait VssScalar:
    FieldElement
    + Add<Output = Self>
    + AddAssign
    + Sub<Output = Self>
    + SubAssign
    + Mul<Output = Self>
    + MulAssign
    + Neg<Output = Self>
    + PartialEq
    + Eq
{
}

impl<T> VssScalar for T where
    T: FieldElement
        + Add<Output = T>
        + AddAssign
        + Sub<Output = T>
        + SubAssign
        + Mul<Output = T>
        + MulAssign
        + Neg<Output = T>
        + PartialEq
        + Eq
{
}
