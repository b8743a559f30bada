use ark_bls12_381::{Fr, G1Affine, G1Projective};
use ark_ec::{AffineRepr, CurveGroup, Group};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};

use crate::{BackendError, CurvePoint};

pub type G1 = G1Projective;

impl CurvePoint<Fr> for G1 {
    type Repr = Vec<u8>;

    fn identity() -> Self {
        <G1Projective as ark_ff::Zero>::zero()
    }

    fn generator() -> Self {
        <G1Projective as Group>::generator()
    }

    fn is_identity(&self) -> bool {
        <G1Projective as ark_ff::Zero>::is_zero(self)
    }

    fn add(&self, other: &Self) -> Self {
        self + other
    }

    fn mul_scalar(&self, scalar: &Fr) -> Self {
        *self * scalar
    }

    fn to_repr(&self) -> Self::Repr {
        let mut bytes = Vec::new();
        self.into_affine()
            .serialize_compressed(&mut bytes)
            .expect("point serialization");
        bytes
    }

    fn from_repr(repr: &Self::Repr) -> Result<Self, BackendError> {
        G1Affine::deserialize_compressed(repr.as_slice())
            .map(|affine| affine.into_group())
            .map_err(|_| BackendError::Serialization("invalid point bytes"))
    }
}
