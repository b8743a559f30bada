//! Cryptographic primitive abstractions and implementations.
//!
//! This module provides the trait seam between the scheme and the vetted
//! curve libraries that supply the actual arithmetic. No field or group
//! operation is re-implemented here; each backend delegates to its crate.
//!
//! - **[`field`](self)**: scalar field operations (Fr) - addition,
//!   multiplication, inversion, random sampling
//! - **[`group`](self)**: commitment group operations (G1) - point
//!   addition, scalar multiplication, equality
//!
//! # Backend Support
//!
//! Backends are selected via feature flags:
//!
//! | Feature | Backend | Curve | Status |
//! |---------|---------|-------|--------|
//! | `blst` (default) | blstrs | BLS12-381 | Stable |
//! | `ark_bls12381` | Arkworks | BLS12-381 | Stable |
//! | `ark_bn254` | Arkworks | BN254 | Stable |

mod field;
pub use field::*;

mod group;
pub use group::*;
