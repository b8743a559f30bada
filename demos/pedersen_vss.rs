use rand::{rngs::StdRng, SeedableRng};
use tracing::info;
use tracing_subscriber::fmt;

use pvss::{
    BackendConfig, BackendId, BlstBackend, CurveId, FieldElement, PedersenVss, VssBackend,
    VssParameters,
};

const PARTICIPANTS: usize = 5;
const THRESHOLD: usize = 3;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_target(false)
        .with_ansi(false)
        .init();

    let mut rng = StdRng::seed_from_u64(42);

    let vss = PedersenVss::<BlstBackend>::setup(&mut rng)?;

    info!(
        participants = PARTICIPANTS,
        threshold = THRESHOLD,
        "starting pedersen vss example"
    );

    let params = VssParameters::new(
        PARTICIPANTS,
        THRESHOLD,
        BackendConfig::new(BackendId::Blst, CurveId::Bls12_381),
    )?;

    // Deal a random nonzero secret
    let secret = <BlstBackend as VssBackend>::Scalar::random_nonzero(&mut rng);
    let shares = vss.share_secret(&mut rng, &secret, &params)?;

    // Every participant can verify their share against the commitments
    for share in &shares {
        let valid = vss.verify_share(share);
        info!(index = share.index, valid, "verified share");
    }

    // Reconstruct from shares {1,2,3}
    let recovered = vss.reconstruct(&shares[..THRESHOLD], THRESHOLD)?;
    info!(matches = (recovered == secret), "reconstructed from shares 1-3");

    // Reconstruct from shares {2,3,5}
    let subset = vec![shares[1].clone(), shares[2].clone(), shares[4].clone()];
    let recovered = vss.reconstruct(&subset, THRESHOLD)?;
    info!(
        matches = (recovered == secret),
        "reconstructed from shares 2, 3 and 5"
    );

    Ok(())
}
