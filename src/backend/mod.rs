//! Backend trait tying the scalar field and commitment group together.
//!
//! A [`VssBackend`] names the concrete scalar and point types a scheme
//! instance operates on, along with the identifiers used to cross-check a
//! runtime [`BackendConfig`](crate::config::BackendConfig) against the
//! compiled backend.
//!
//! # Available Backends
//!
//! - **`BlstBackend`** (feature: `blst`, default): BLS12-381 using blstrs
//!   with optimized assembly
//! - **`ArkworksBls12`** (feature: `ark_bls12381`): BLS12-381 using arkworks
//! - **`ArkworksBn254`** (feature: `ark_bn254`): BN254 using arkworks
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(feature = "blst")]
//! # {
//! use rand::thread_rng;
//! use pvss::{BlstBackend, CurvePoint, FieldElement, VssBackend};
//!
//! let mut rng = thread_rng();
//! let scalar = <BlstBackend as VssBackend>::Scalar::random(&mut rng);
//! let point = <BlstBackend as VssBackend>::Point::generator().mul_scalar(&scalar);
//! # }
//! ```

use std::fmt::Debug;

use crate::arith::{CurvePoint, VssScalar};
use crate::config::{BackendId, CurveId};

/// Umbrella trait naming the concrete primitive types of one backend.
pub trait VssBackend: Clone + Debug + Send + Sync + 'static {
    /// Scalar field of prime order r (the exponent space).
    type Scalar: VssScalar;
    /// Prime-order commitment group of the same order r.
    type Point: CurvePoint<Self::Scalar>;

    /// Identifier of the backend implementation.
    fn backend_id() -> BackendId;

    /// Identifier of the curve the backend operates on.
    fn curve_id() -> CurveId;
}

/// blstrs backend for BLS12-381.
#[cfg(feature = "blst")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BlstBackend;

#[cfg(feature = "blst")]
impl VssBackend for BlstBackend {
    type Scalar = blstrs::Scalar;
    type Point = blstrs::G1Projective;

    fn backend_id() -> BackendId {
        BackendId::Blst
    }

    fn curve_id() -> CurveId {
        CurveId::Bls12_381
    }
}

/// Arkworks backend for BLS12-381.
#[cfg(feature = "ark_bls12381")]
#[derive(Clone, Copy, Debug, Default)]
pub struct ArkworksBls12;

#[cfg(feature = "ark_bls12381")]
impl VssBackend for ArkworksBls12 {
    type Scalar = ark_bls12_381::Fr;
    type Point = ark_bls12_381::G1Projective;

    fn backend_id() -> BackendId {
        BackendId::Arkworks
    }

    fn curve_id() -> CurveId {
        CurveId::Bls12_381
    }
}

/// Arkworks backend for BN254.
#[cfg(feature = "ark_bn254")]
#[derive(Clone, Copy, Debug, Default)]
pub struct ArkworksBn254;

#[cfg(feature = "ark_bn254")]
impl VssBackend for ArkworksBn254 {
    type Scalar = ark_bn254::Fr;
    type Point = ark_bn254::G1Projective;

    fn backend_id() -> BackendId {
        BackendId::Arkworks
    }

    fn curve_id() -> CurveId {
        CurveId::Bn254
    }
}
