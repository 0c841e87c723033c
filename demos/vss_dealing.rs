use rand::{SeedableRng, rngs::StdRng};
use tracing::{info, warn};
use tracing_subscriber::fmt;

use feldman_vss::{
    CommitmentVector, DefaultBackend, FieldElement, Share, Verification, VssParameters, deal,
    recover_public_key, recover_secret,
};

const PARTIES: usize = 10;
const THRESHOLD: usize = 4;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_span_events(fmt::format::FmtSpan::CLOSE)
        .with_target(false)
        .with_ansi(false)
        .init();

    let mut rng = StdRng::seed_from_u64(42);
    let params = VssParameters::new(PARTIES, THRESHOLD)?;

    info!(
        parties = PARTIES,
        threshold = THRESHOLD,
        "dealing a fresh secret"
    );
    let mut dealing = deal::<DefaultBackend, _>(&mut rng, &params)?;

    // Broadcast the commitment and ship shares as bytes
    let wire = dealing.commitment.to_bytes();
    info!(bytes = wire.len(), "commitment encoded");

    // A cheating dealer corrupts participant 3's share
    let bumped = FieldElement::add(&dealing.shares[2].value, &FieldElement::one());
    dealing.shares[2].value = bumped;

    // Every participant decodes the commitment and checks its own share
    let commitment = CommitmentVector::<DefaultBackend>::from_bytes(&wire, params.threshold)?;
    let mut accepted = Vec::new();
    for share in &dealing.shares {
        let received = Share::<DefaultBackend>::from_bytes(share.index, &share.to_bytes())?;
        match commitment.verify_share(&received) {
            Verification::Valid => accepted.push(received),
            outcome => warn!(index = %received.index, ?outcome, "complaint raised"),
        }
    }
    info!(accepted = accepted.len(), "share verification finished");

    // Any threshold of the accepted shares reconstructs the secret
    let secret = recover_secret(&accepted, params.threshold)?;
    assert_eq!(&secret, dealing.polynomial.secret());

    let public_shares = commitment.public_shares(params.parties)?;
    let public_key = recover_public_key(&public_shares[5..], params.threshold)?;
    assert_eq!(&public_key, commitment.public_key());
    info!("secret and public key recovered");

    Ok(())
}
