//! Configuration types for sharing instances.
//!
//! This module provides the types that select a cryptographic backend and
//! fix the `(n, t)` parameters of one dealing.
//!
//! # Example
//!
//! ```rust
//! use pvss::{BackendConfig, BackendId, CurveId, VssParameters};
//!
//! // 3-of-5 sharing with the blstrs backend on BLS12-381
//! let config = BackendConfig::new(BackendId::Blst, CurveId::Bls12_381);
//! let params = VssParameters::new(5, 3, config).expect("valid params");
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{BackendError, Error};

/// Supported elliptic curves.
///
/// - `Bls12_381`: ~128-bit security (recommended)
/// - `Bn254`: ~100-bit security (faster but lower security margin)
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum CurveId {
    /// BN254 curve (~100-bit security)
    Bn254,
    /// BLS12-381 curve (~128-bit security, recommended)
    Bls12_381,
}

/// Cryptographic backend implementations.
///
/// Backend support is controlled via Cargo features:
/// - `blst` (default): blstrs with BLS12-381
/// - `ark_bls12381`: Arkworks with BLS12-381
/// - `ark_bn254`: Arkworks with BN254
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum BackendId {
    /// Arkworks backend (pure Rust, supports BLS12-381 and BN254)
    Arkworks,
    /// blstrs backend (optimized assembly, BLS12-381 only)
    Blst,
}

/// Backend and curve configuration.
///
/// Not all combinations are supported - use
/// [`ensure_supported`](BackendConfig::ensure_supported) to validate.
///
/// | Backend    | BLS12-381 | BN254 |
/// |------------|-----------|-------|
/// | Arkworks   | yes       | yes   |
/// | blst       | yes       | no    |
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct BackendConfig {
    /// The cryptographic backend to use
    pub backend: BackendId,
    /// The curve to use
    pub curve: CurveId,
}

impl BackendConfig {
    /// Creates a new backend configuration.
    pub fn new(backend: BackendId, curve: CurveId) -> Self {
        Self { backend, curve }
    }

    /// Validates that this backend/curve combination is supported.
    ///
    /// This checks both that the combination is valid (e.g., blst only
    /// supports BLS12-381) and that the required feature flag is enabled
    /// at compile time.
    pub fn ensure_supported(&self) -> Result<(), BackendError> {
        match (self.backend, self.curve) {
            (BackendId::Arkworks, CurveId::Bls12_381) => {
                if cfg!(feature = "ark_bls12381") {
                    Ok(())
                } else {
                    Err(BackendError::UnsupportedFeature(
                        "compile with `ark_bls12381` feature to use Arkworks BLS12-381",
                    ))
                }
            }
            (BackendId::Arkworks, CurveId::Bn254) => {
                if cfg!(feature = "ark_bn254") {
                    Ok(())
                } else {
                    Err(BackendError::UnsupportedFeature(
                        "compile with `ark_bn254` feature to use Arkworks BN254",
                    ))
                }
            }
            (BackendId::Blst, CurveId::Bls12_381) => {
                if cfg!(feature = "blst") {
                    Ok(())
                } else {
                    Err(BackendError::UnsupportedFeature(
                        "compile with `blst` feature to use the blstrs backend",
                    ))
                }
            }
            (BackendId::Blst, CurveId::Bn254) => Err(BackendError::UnsupportedCurve(
                "bn254 is not supported by the blstrs backend",
            )),
        }
    }
}

/// Parameters of one sharing instance.
///
/// # Constraints
///
/// - `threshold` must satisfy `1 <= threshold <= participants`
/// - `backend` must be a supported combination (checked via `validate`)
///
/// # Example
///
/// ```rust
/// use pvss::{BackendConfig, BackendId, CurveId, VssParameters};
///
/// // splitting into 5 shares, any 3 of which reconstruct
/// let params = VssParameters::new(
///     5,
///     3,
///     BackendConfig::new(BackendId::Blst, CurveId::Bls12_381),
/// ).expect("valid parameters");
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct VssParameters {
    /// Total number of participants (n)
    pub participants: usize,
    /// Minimum number of shares required to reconstruct (t)
    pub threshold: usize,
    /// Backend and curve configuration
    pub backend: BackendConfig,
}

impl VssParameters {
    /// Creates and validates sharing parameters.
    pub fn new(
        participants: usize,
        threshold: usize,
        backend: BackendConfig,
    ) -> Result<Self, Error> {
        let params = Self {
            participants,
            threshold,
            backend,
        };
        params.validate()?;
        Ok(params)
    }

    /// Validates the sharing parameters.
    ///
    /// Checks that the backend/curve combination is supported and that the
    /// threshold satisfies `1 <= t <= n`.
    pub fn validate(&self) -> Result<(), Error> {
        self.backend.ensure_supported().map_err(Error::Backend)?;
        if self.threshold == 0 || self.threshold > self.participants {
            return Err(Error::InvalidThreshold {
                threshold: self.threshold,
                participants: self.participants,
            });
        }
        Ok(())
    }
}
