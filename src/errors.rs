//! Error types for the crate.
//!
//! This module defines low-level backend errors returned by concrete
//! backend implementations (Arkworks, blstrs) as well as the high-level
//! `Error` type returned by the sharing, verification and reconstruction
//! operations.
//!
//! The errors are implemented with `thiserror` so they are easy to convert
//! and debug in higher-level code. Every precondition violation surfaces
//! immediately as an `Err`; the crate never logs or swallows them.

use thiserror::Error;

/// Errors bubbled up from backend implementations (Arkworks, blstrs, etc.).
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("unsupported curve: {0}")]
    UnsupportedCurve(&'static str),
    #[error("unsupported backend feature: {0}")]
    UnsupportedFeature(&'static str),
    #[error("serialization failure: {0}")]
    Serialization(&'static str),
    #[error("math error: {0}")]
    Math(&'static str),
}

/// High-level errors returned by the verifiable secret sharing API.
#[derive(Debug, Error)]
pub enum Error {
    /// The two Pedersen generators are equal (or one is the identity),
    /// which makes the commitments degenerate.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    /// The threshold does not satisfy `1 <= t <= n`.
    #[error("invalid threshold: {threshold} for {participants} participants")]
    InvalidThreshold {
        threshold: usize,
        participants: usize,
    },
    /// The secret to share is the zero scalar.
    #[error("secret must be a nonzero scalar")]
    InvalidSecret,
    /// Fewer shares were supplied to reconstruction than the threshold.
    #[error("insufficient shares: required {required}, provided {provided}")]
    InsufficientShares { required: usize, provided: usize },
    /// Two supplied shares carry the same participant index, which would
    /// produce a zero denominator in the Lagrange basis.
    #[error("duplicate share index: {0}")]
    DuplicateIndex(usize),
    #[error("backend error: {0}")]
    Backend(#[from] BackendError),
}
