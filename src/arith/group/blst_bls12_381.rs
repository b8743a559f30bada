//! blst-backed commitment group implementation for BLS12-381.
//!
//! Implements the [`CurvePoint`] trait for `blstrs::G1Projective`. The
//! scheme only needs one prime-order group, so G1 is the natural choice:
//! smallest representation, fastest arithmetic.
//!
//! # Feature
//!
//! Compiled when the Cargo feature `blst` is enabled.

use blstrs::{G1Affine, G1Projective, Scalar};
use group::{Curve, Group};

use crate::{BackendError, CurvePoint};

pub type G1 = G1Projective;

impl CurvePoint<Scalar> for G1 {
    type Repr = Vec<u8>;

    fn identity() -> Self {
        <G1Projective as Group>::identity()
    }

    fn generator() -> Self {
        <G1Projective as Group>::generator()
    }

    fn is_identity(&self) -> bool {
        <Self as Group>::is_identity(self).into()
    }

    fn add(&self, other: &Self) -> Self {
        self + other
    }

    fn mul_scalar(&self, scalar: &Scalar) -> Self {
        self * scalar
    }

    fn to_repr(&self) -> Self::Repr {
        self.to_affine().to_compressed().to_vec()
    }

    fn from_repr(repr: &Self::Repr) -> Result<Self, BackendError> {
        let mut bytes = [0u8; 48];
        if repr.len() != 48 {
            return Err(BackendError::Serialization("invalid point length"));
        }
        bytes.copy_from_slice(repr);
        Option::<G1Affine>::from(G1Affine::from_compressed(&bytes))
            .map(Into::into)
            .ok_or(BackendError::Serialization("invalid point bytes"))
    }
}
