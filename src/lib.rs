//! # PVSS: Pedersen Verifiable Secret Sharing
//!
//! This crate implements Pedersen's non-interactive verifiable secret
//! sharing scheme over prime-order elliptic curve groups: a dealer splits
//! a secret scalar into `n` shares such that any `t` of them reconstruct
//! it, fewer than `t` reveal nothing, and every share can be publicly
//! verified against a commitment vector without revealing the secret or
//! contacting the dealer.
//!
//! ## Architecture
//!
//! The crate is organized into several key modules:
//!
//! - **[`arith`]**: Trait abstractions for the scalar field and the
//!   commitment group, with implementations supplied by vetted curve
//!   libraries (blstrs, Arkworks) behind feature flags. No field or group
//!   arithmetic is re-implemented here.
//!
//! - **[`backend`]**: The [`VssBackend`] umbrella trait naming one
//!   backend's concrete scalar and point types.
//!
//! - **[`vss`]**: The scheme itself - [`PedersenVss`] with dealing,
//!   verification and reconstruction, and the [`Share`] data model.
//!
//! - **[`lagrange`]**: Lagrange interpolation at zero over the scalar
//!   field, with an explicit duplicate-index guard.
//!
//! - **[`config`]**: Backend selection and `(n, t)` parameters.
//!
//! - **[`errors`]**: Error types for backend and scheme operations.
//!
//! ## Quick Example
//!
//! ```rust,no_run
//! # #[cfg(feature = "blst")]
//! use rand::thread_rng;
//! # #[cfg(feature = "blst")]
//! use pvss::{
//!     BackendConfig, BackendId, BlstBackend, CurveId, FieldElement,
//!     PedersenVss, VssBackend, VssParameters,
//! };
//!
//! # #[cfg(feature = "blst")]
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Fix two independent generators of the commitment group.
//! let mut rng = thread_rng();
//! let vss = PedersenVss::<BlstBackend>::setup(&mut rng)?;
//!
//! // Split a secret into 5 shares, any 3 of which reconstruct it.
//! let params = VssParameters::new(
//!     5, 3,
//!     BackendConfig::new(BackendId::Blst, CurveId::Bls12_381),
//! )?;
//! let secret = <BlstBackend as VssBackend>::Scalar::random_nonzero(&mut rng);
//! let shares = vss.share_secret(&mut rng, &secret, &params)?;
//!
//! // Each participant checks their share against the public commitments.
//! assert!(shares.iter().all(|share| vss.verify_share(share)));
//!
//! // Any 3 distinct shares recover the secret.
//! let recovered = vss.reconstruct(&shares[2..], params.threshold)?;
//! assert_eq!(recovered, secret);
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "blst"))]
//! # fn main() {}
//! ```
//!
//! ## Feature Flags
//!
//! Multiple cryptographic backends are supported via feature flags:
//!
//! - **`blst`** (default): blstrs backend for BLS12-381
//! - **`ark_bls12381`**: Arkworks backend for BLS12-381
//! - **`ark_bn254`**: Arkworks backend for BN254
//!
//! The per-feature `Fr`/`G1` type aliases assume one backend per build;
//! generic code can enable several and address them through their
//! [`VssBackend`] types.
//!
//! ## Security Considerations
//!
//! - **Generator independence**: the hiding property requires that nobody
//!   knows the discrete log of `h` with respect to `g`.
//!   [`PedersenVss::setup`] derives `h` from caller-supplied randomness
//!   and is meant for tests and demos; production deployments should
//!   derive `h` by hashing to the curve or via a public ceremony and use
//!   [`PedersenVss::new`].
//! - **Threshold security**: fewer than `t` shares reveal nothing about
//!   the secret, information-theoretically.
//! - **Reconstruction discipline**: never interpolate fewer than `t`
//!   points; the crate rejects this before computing anything.

pub mod arith;
pub mod backend;
pub mod config;
pub mod errors;
pub mod lagrange;
pub mod vss;

mod serde_impl;

pub use arith::*;
pub use backend::*;
pub use config::*;
pub use errors::*;
pub use vss::{PedersenVss, Share};
