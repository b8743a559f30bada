//! Pedersen verifiable secret sharing scheme.
//!
//! This module implements the non-interactive VSS scheme of Pedersen
//! (CRYPTO '91). A dealer splits a secret scalar into `n` shares such that
//! any `t` of them reconstruct it, fewer than `t` reveal nothing, and
//! every share can be checked against a public commitment vector without
//! interaction with the dealer.
//!
//! # Protocol Overview
//!
//! 1. **Setup** ([`PedersenVss::new`] / [`PedersenVss::setup`]): fix two
//!    distinct generators `g` and `h` of the commitment group. Nobody may
//!    know the discrete log of `h` with respect to `g`.
//!
//! 2. **Dealing** ([`PedersenVss::share_secret`]): draw polynomials `f`
//!    (constant term = secret) and `b` (all coefficients random) of degree
//!    `t-1`, publish commitments `C_i = g^{f_i} + h^{b_i}` to the paired
//!    coefficients, and hand participant `i` the evaluations
//!    `(f(i), b(i))` for `i` in `1..=n`.
//!
//! 3. **Verification** ([`PedersenVss::verify_share`]): anyone holding a
//!    share checks `g^{f(i)} + h^{b(i)} == sum_j C_j * i^j` using only
//!    public data.
//!
//! 4. **Reconstruction** ([`PedersenVss::reconstruct`]): any `t` or more
//!    shares with distinct indices recover `f(0)` by Lagrange
//!    interpolation at zero.
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(feature = "blst")]
//! use rand::thread_rng;
//! # #[cfg(feature = "blst")]
//! use pvss::{
//!     BackendConfig, BackendId, BlstBackend, CurveId, FieldElement,
//!     PedersenVss, VssParameters,
//! };
//!
//! # #[cfg(feature = "blst")]
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut rng = thread_rng();
//! let vss = PedersenVss::<BlstBackend>::setup(&mut rng)?;
//!
//! let params = VssParameters::new(
//!     5, 3,
//!     BackendConfig::new(BackendId::Blst, CurveId::Bls12_381),
//! )?;
//!
//! let secret = <BlstBackend as pvss::VssBackend>::Scalar::random_nonzero(&mut rng);
//! let shares = vss.share_secret(&mut rng, &secret, &params)?;
//!
//! assert!(shares.iter().all(|share| vss.verify_share(share)));
//!
//! let recovered = vss.reconstruct(&shares[..3], params.threshold)?;
//! assert_eq!(recovered, secret);
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "blst"))]
//! # fn main() {}
//! ```
//!
//! # Security
//!
//! - **Hiding**: the commitment vector is information-theoretically hiding
//!   thanks to the blinding polynomial; fewer than `t` shares reveal
//!   nothing about the secret.
//! - **Binding**: forging a share that passes verification without a
//!   matching polynomial evaluation requires solving the discrete log of
//!   `h` with respect to `g`.
//! - **Generator independence**: `h` must not be chosen with a known
//!   discrete log relative to `g`; [`PedersenVss::setup`] is suitable for
//!   tests and demos, production deployments should derive `h` by hashing
//!   to the curve or via a public ceremony.

use std::sync::Arc;

use rand_core::RngCore;
use rayon::iter::{IntoParallelIterator, IntoParallelRefIterator, ParallelIterator};
use tracing::instrument;

use crate::arith::{CurvePoint, FieldElement};
use crate::backend::VssBackend;
use crate::config::VssParameters;
use crate::errors::{BackendError, Error};
use crate::lagrange::interpolate_at_zero;

mod poly;
mod share;

pub use share::Share;

use poly::SecretPolynomial;

/// A sharing instance: two fixed, distinct generators of the commitment
/// group plus the backend's field/group context.
///
/// The generators are fixed at construction and never change for the
/// instance's lifetime. All operations are pure apart from the randomness
/// consumed while dealing, so one instance can be used from any number of
/// threads without synchronization.
#[derive(Clone, Debug)]
pub struct PedersenVss<B: VssBackend> {
    generator_g: B::Point,
    generator_h: B::Point,
}

impl<B: VssBackend> PedersenVss<B> {
    /// Creates a sharing instance from two generators.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidConfig`] when the generators are equal or either is
    /// the identity; both cases make the commitments degenerate.
    pub fn new(generator_g: B::Point, generator_h: B::Point) -> Result<Self, Error> {
        if generator_g == generator_h {
            return Err(Error::InvalidConfig(
                "generators g and h must be different".into(),
            ));
        }
        if generator_g.is_identity() || generator_h.is_identity() {
            return Err(Error::InvalidConfig(
                "generators must not be the identity".into(),
            ));
        }
        Ok(Self {
            generator_g,
            generator_h,
        })
    }

    /// Creates a sharing instance with the group's standard generator and
    /// a random second generator.
    ///
    /// The second generator is `g^r` for a random nonzero `r`, redrawn in
    /// the (negligible-probability) case it collides with `g`. The caller
    /// learns `r` transitively through the RNG state, so this constructor
    /// is meant for tests and demos; see the module docs for production
    /// guidance.
    pub fn setup<R: RngCore + ?Sized>(rng: &mut R) -> Result<Self, Error> {
        let generator_g = B::Point::generator();
        let generator_h = loop {
            let exponent = B::Scalar::random_nonzero(rng);
            let candidate = generator_g.mul_scalar(&exponent);
            if candidate != generator_g {
                break candidate;
            }
        };
        Self::new(generator_g, generator_h)
    }

    /// The two public generators `(g, h)` of this instance.
    pub fn generators(&self) -> (&B::Point, &B::Point) {
        (&self.generator_g, &self.generator_h)
    }

    fn ensure_backend(params: &VssParameters) -> Result<(), Error> {
        if params.backend.backend != B::backend_id() {
            return Err(Error::Backend(BackendError::UnsupportedFeature(
                "backend mismatch for PedersenVss",
            )));
        }
        if params.backend.curve != B::curve_id() {
            return Err(Error::Backend(BackendError::UnsupportedCurve(
                "curve mismatch for PedersenVss",
            )));
        }
        Ok(())
    }

    /// Splits `secret` into `params.participants` verifiable shares.
    ///
    /// Draws the two dealing polynomials from `rng`, publishes one
    /// commitment per coefficient pair and evaluates both polynomials at
    /// every participant index. All returned shares reference the same
    /// commitment vector allocation.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidThreshold`] unless `1 <= t <= n`
    /// - [`Error::InvalidSecret`] when `secret` is zero
    #[instrument(
        level = "debug",
        skip_all,
        fields(participants = params.participants, threshold = params.threshold)
    )]
    pub fn share_secret<R: RngCore + ?Sized>(
        &self,
        rng: &mut R,
        secret: &B::Scalar,
        params: &VssParameters,
    ) -> Result<Vec<Share<B>>, Error> {
        params.validate()?;
        Self::ensure_backend(params)?;
        if secret.is_zero() {
            return Err(Error::InvalidSecret);
        }

        let t = params.threshold;
        let f = SecretPolynomial::with_constant_term(rng, *secret, t);
        let blinding = SecretPolynomial::random(rng, t);

        let commitments: Vec<B::Point> = f
            .coeffs()
            .iter()
            .zip(blinding.coeffs())
            .map(|(f_coeff, b_coeff)| {
                self.generator_g
                    .mul_scalar(f_coeff)
                    .add(&self.generator_h.mul_scalar(b_coeff))
            })
            .collect();
        let commitments = Arc::new(commitments);

        let shares = (1..=params.participants)
            .into_par_iter()
            .map(|index| Share {
                index,
                value1: f.evaluate(index as u64),
                value2: blinding.evaluate(index as u64),
                commitments: Arc::clone(&commitments),
            })
            .collect();
        Ok(shares)
    }

    /// Checks one share against its commitment vector.
    ///
    /// Computes `lhs = g^{value1} + h^{value2}` and evaluates the
    /// commitment vector as a polynomial in the group at the share's
    /// index, `rhs = sum_j C_j * index^j`, with the index power
    /// accumulated in the scalar field. Uses only public data; no secret
    /// material is needed or learned.
    pub fn verify_share(&self, share: &Share<B>) -> bool {
        let lhs = self
            .generator_g
            .mul_scalar(&share.value1)
            .add(&self.generator_h.mul_scalar(&share.value2));

        let x = B::Scalar::from_u64(share.index as u64);
        let mut power = B::Scalar::one();
        let mut rhs = B::Point::identity();
        for commitment in share.commitments.iter() {
            rhs = rhs.add(&commitment.mul_scalar(&power));
            power *= x;
        }

        lhs == rhs
    }

    /// Checks a batch of shares in parallel.
    ///
    /// Share verification is pure, so the batch is fanned out with rayon.
    pub fn verify_shares(&self, shares: &[Share<B>]) -> bool {
        shares.par_iter().all(|share| self.verify_share(share))
    }

    /// Recovers the secret from `threshold` or more shares.
    ///
    /// Interpolates the shares' `value1` evaluations at zero. Shares
    /// beyond the threshold participate too; for genuine shares of one
    /// dealing the overdetermined interpolation is consistent and yields
    /// the same secret.
    ///
    /// # Errors
    ///
    /// - [`Error::InsufficientShares`] when fewer than `threshold` shares
    ///   are supplied; rejected before any computation, because
    ///   interpolating too few points silently yields an unrelated value.
    /// - [`Error::DuplicateIndex`] when two shares carry the same index.
    #[instrument(level = "debug", skip(self, shares), fields(provided = shares.len()))]
    pub fn reconstruct(&self, shares: &[Share<B>], threshold: usize) -> Result<B::Scalar, Error> {
        if shares.len() < threshold {
            return Err(Error::InsufficientShares {
                required: threshold,
                provided: shares.len(),
            });
        }

        let points: Vec<(u64, B::Scalar)> = shares
            .iter()
            .map(|share| (share.index as u64, share.value1))
            .collect();
        interpolate_at_zero(&points)
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    use super::*;
    use crate::config::{BackendConfig, BackendId, CurveId};

    fn sample_params(backend: BackendConfig) -> VssParameters {
        VssParameters {
            participants: 5,
            threshold: 3,
            backend,
        }
    }

    fn run_deal_verify_reconstruct<B: VssBackend>(backend: BackendConfig) {
        let mut rng = StdRng::from_entropy();
        let vss = PedersenVss::<B>::setup(&mut rng).expect("setup");
        let params = sample_params(backend);
        let secret = B::Scalar::random_nonzero(&mut rng);

        let shares = vss
            .share_secret(&mut rng, &secret, &params)
            .expect("dealing");
        assert_eq!(shares.len(), params.participants);

        for (offset, share) in shares.iter().enumerate() {
            assert_eq!(share.index, offset + 1);
            assert_eq!(share.threshold(), params.threshold);
            assert!(vss.verify_share(share), "share {} must verify", share.index);
        }
        assert!(vss.verify_shares(&shares));

        // shares {1,2,3}
        let recovered = vss
            .reconstruct(&shares[..3], params.threshold)
            .expect("reconstruct");
        assert_eq!(recovered, secret);

        // shares {2,3,5}
        let subset = vec![shares[1].clone(), shares[2].clone(), shares[4].clone()];
        let recovered = vss
            .reconstruct(&subset, params.threshold)
            .expect("reconstruct from subset");
        assert_eq!(recovered, secret);
    }

    fn run_overdetermined_reconstruction<B: VssBackend>(backend: BackendConfig) {
        let mut rng = StdRng::from_entropy();
        let vss = PedersenVss::<B>::setup(&mut rng).expect("setup");
        let params = sample_params(backend);
        let secret = B::Scalar::random_nonzero(&mut rng);

        let shares = vss
            .share_secret(&mut rng, &secret, &params)
            .expect("dealing");
        let recovered = vss
            .reconstruct(&shares, params.threshold)
            .expect("reconstruct from all shares");
        assert_eq!(recovered, secret);
    }

    fn run_shared_commitment_vector<B: VssBackend>(backend: BackendConfig) {
        let mut rng = StdRng::from_entropy();
        let vss = PedersenVss::<B>::setup(&mut rng).expect("setup");
        let params = sample_params(backend);
        let secret = B::Scalar::random_nonzero(&mut rng);

        let shares = vss
            .share_secret(&mut rng, &secret, &params)
            .expect("dealing");
        for share in &shares[1..] {
            assert!(Arc::ptr_eq(&shares[0].commitments, &share.commitments));
        }
    }

    fn run_tampered_shares_fail<B: VssBackend>(backend: BackendConfig) {
        let mut rng = StdRng::from_entropy();
        let vss = PedersenVss::<B>::setup(&mut rng).expect("setup");
        let params = sample_params(backend);
        let secret = B::Scalar::random_nonzero(&mut rng);

        let shares = vss
            .share_secret(&mut rng, &secret, &params)
            .expect("dealing");

        let mut tampered = shares[0].clone();
        tampered.value1 = B::Scalar::random_nonzero(&mut rng);
        assert!(!vss.verify_share(&tampered), "tampered value1 must fail");

        let mut tampered = shares[1].clone();
        tampered.value2 = B::Scalar::random_nonzero(&mut rng);
        assert!(!vss.verify_share(&tampered), "tampered value2 must fail");

        let mut tampered = shares[2].clone();
        let mut commitments = (*tampered.commitments).clone();
        commitments[0] = commitments[0].add(&B::Point::generator());
        tampered.commitments = Arc::new(commitments);
        assert!(!vss.verify_share(&tampered), "tampered commitment must fail");

        assert!(!vss.verify_shares(&[shares[0].clone(), tampered]));
    }

    fn run_rejects_invalid_threshold<B: VssBackend>(backend: BackendConfig) {
        let mut rng = StdRng::from_entropy();
        let vss = PedersenVss::<B>::setup(&mut rng).expect("setup");
        let params = VssParameters {
            participants: 5,
            threshold: 6,
            backend,
        };
        let secret = B::Scalar::random_nonzero(&mut rng);

        let result = vss.share_secret(&mut rng, &secret, &params);
        assert!(matches!(
            result,
            Err(Error::InvalidThreshold {
                threshold: 6,
                participants: 5,
            })
        ));
    }

    fn run_rejects_zero_secret<B: VssBackend>(backend: BackendConfig) {
        let mut rng = StdRng::from_entropy();
        let vss = PedersenVss::<B>::setup(&mut rng).expect("setup");
        let params = sample_params(backend);

        let result = vss.share_secret(&mut rng, &B::Scalar::zero(), &params);
        assert!(matches!(result, Err(Error::InvalidSecret)));
    }

    fn run_rejects_insufficient_shares<B: VssBackend>(backend: BackendConfig) {
        let mut rng = StdRng::from_entropy();
        let vss = PedersenVss::<B>::setup(&mut rng).expect("setup");
        let params = sample_params(backend);
        let secret = B::Scalar::random_nonzero(&mut rng);

        let shares = vss
            .share_secret(&mut rng, &secret, &params)
            .expect("dealing");
        let result = vss.reconstruct(&shares[..2], params.threshold);
        assert!(matches!(
            result,
            Err(Error::InsufficientShares {
                required: 3,
                provided: 2,
            })
        ));
    }

    fn run_rejects_duplicate_index<B: VssBackend>(backend: BackendConfig) {
        let mut rng = StdRng::from_entropy();
        let vss = PedersenVss::<B>::setup(&mut rng).expect("setup");
        let params = sample_params(backend);
        let secret = B::Scalar::random_nonzero(&mut rng);

        let shares = vss
            .share_secret(&mut rng, &secret, &params)
            .expect("dealing");
        let duplicated = vec![shares[0].clone(), shares[1].clone(), shares[0].clone()];
        let result = vss.reconstruct(&duplicated, params.threshold);
        assert!(matches!(result, Err(Error::DuplicateIndex(1))));
    }

    fn run_rejects_equal_generators<B: VssBackend>() {
        let g = B::Point::generator();
        let result = PedersenVss::<B>::new(g, g);
        assert!(matches!(result, Err(Error::InvalidConfig(_))));

        let result = PedersenVss::<B>::new(g, B::Point::identity());
        assert!(matches!(result, Err(Error::InvalidConfig(_))));
    }

    fn run_deterministic_dealing<B: VssBackend>(backend: BackendConfig) {
        let params = sample_params(backend);
        let secret = B::Scalar::from_u64(0xfeed);

        let deal = || {
            let mut rng = ChaCha20Rng::seed_from_u64(42);
            let vss = PedersenVss::<B>::setup(&mut rng).expect("setup");
            vss.share_secret(&mut rng, &secret, &params)
                .expect("dealing")
        };

        assert_eq!(deal(), deal(), "seeded dealings must match");
    }

    #[cfg(feature = "blst")]
    mod blst {
        use super::*;
        use crate::backend::BlstBackend;

        fn config() -> BackendConfig {
            BackendConfig::new(BackendId::Blst, CurveId::Bls12_381)
        }

        #[test]
        fn deal_verify_reconstruct() {
            run_deal_verify_reconstruct::<BlstBackend>(config());
        }

        #[test]
        fn overdetermined_reconstruction() {
            run_overdetermined_reconstruction::<BlstBackend>(config());
        }

        #[test]
        fn shared_commitment_vector() {
            run_shared_commitment_vector::<BlstBackend>(config());
        }

        #[test]
        fn tampered_shares_fail() {
            run_tampered_shares_fail::<BlstBackend>(config());
        }

        #[test]
        fn rejects_invalid_threshold() {
            run_rejects_invalid_threshold::<BlstBackend>(config());
        }

        #[test]
        fn rejects_zero_secret() {
            run_rejects_zero_secret::<BlstBackend>(config());
        }

        #[test]
        fn rejects_insufficient_shares() {
            run_rejects_insufficient_shares::<BlstBackend>(config());
        }

        #[test]
        fn rejects_duplicate_index() {
            run_rejects_duplicate_index::<BlstBackend>(config());
        }

        #[test]
        fn rejects_equal_generators() {
            run_rejects_equal_generators::<BlstBackend>();
        }

        #[test]
        fn deterministic_dealing() {
            run_deterministic_dealing::<BlstBackend>(config());
        }
    }

    #[cfg(feature = "ark_bls12381")]
    mod ark_bls {
        use super::*;
        use crate::backend::ArkworksBls12;

        fn config() -> BackendConfig {
            BackendConfig::new(BackendId::Arkworks, CurveId::Bls12_381)
        }

        #[test]
        fn deal_verify_reconstruct() {
            run_deal_verify_reconstruct::<ArkworksBls12>(config());
        }

        #[test]
        fn overdetermined_reconstruction() {
            run_overdetermined_reconstruction::<ArkworksBls12>(config());
        }

        #[test]
        fn tampered_shares_fail() {
            run_tampered_shares_fail::<ArkworksBls12>(config());
        }

        #[test]
        fn rejects_invalid_threshold() {
            run_rejects_invalid_threshold::<ArkworksBls12>(config());
        }

        #[test]
        fn rejects_zero_secret() {
            run_rejects_zero_secret::<ArkworksBls12>(config());
        }

        #[test]
        fn rejects_insufficient_shares() {
            run_rejects_insufficient_shares::<ArkworksBls12>(config());
        }

        #[test]
        fn rejects_duplicate_index() {
            run_rejects_duplicate_index::<ArkworksBls12>(config());
        }

        #[test]
        fn rejects_equal_generators() {
            run_rejects_equal_generators::<ArkworksBls12>();
        }
    }

    #[cfg(feature = "ark_bn254")]
    mod ark_bn {
        use super::*;
        use crate::backend::ArkworksBn254;

        fn config() -> BackendConfig {
            BackendConfig::new(BackendId::Arkworks, CurveId::Bn254)
        }

        #[test]
        fn deal_verify_reconstruct() {
            run_deal_verify_reconstruct::<ArkworksBn254>(config());
        }

        #[test]
        fn tampered_shares_fail() {
            run_tampered_shares_fail::<ArkworksBn254>(config());
        }

        #[test]
        fn rejects_duplicate_index() {
            run_rejects_duplicate_index::<ArkworksBn254>(config());
        }
    }
}
