use rand_core::{CryptoRng, RngCore};
use tracing::{debug, instrument};

use super::{CommitmentVector, SecretPolynomial, Share, ShareIndex, Verification};
use crate::{Error, GroupBackend, VssParameters};

/// Everything a dealer produces in one run: the private polynomial, the
/// commitment to broadcast and one private share per participant.
pub struct Dealing<B: GroupBackend> {
    pub polynomial: SecretPolynomial<B>,
    pub commitment: CommitmentVector<B>,
    pub shares: Vec<Share<B>>,
}

impl<B: GroupBackend> Dealing<B> {
    /// Verifies every share against the commitment and returns the indices
    /// that fail, i.e. the complaints an honest participant set would raise.
    pub fn verify_all(&self) -> Vec<ShareIndex> {
        self.shares
            .iter()
            .filter(|share| self.commitment.verify_share(share) != Verification::Valid)
            .map(|share| share.index)
            .collect()
    }
}

impl<B: GroupBackend> std::fmt::Debug for Dealing<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dealing")
            .field("polynomial", &self.polynomial)
            .field("commitment", &self.commitment)
            .field("shares", &self.shares)
            .finish()
    }
}

/// Deals a fresh random secret to `params.parties` participants.
pub fn deal<B, R>(rng: &mut R, params: &VssParameters) -> Result<Dealing<B>, Error>
where
    B: GroupBackend,
    R: RngCore + CryptoRng + ?Sized,
{
    params.validate()?;
    let polynomial = SecretPolynomial::random(rng, params.threshold)?;
    share_out(polynomial, params)
}

/// Deals `secret` to `params.parties` participants.
pub fn deal_with_secret<B, R>(
    rng: &mut R,
    secret: B::Scalar,
    params: &VssParameters,
) -> Result<Dealing<B>, Error>
where
    B: GroupBackend,
    R: RngCore + CryptoRng + ?Sized,
{
    params.validate()?;
    let polynomial = SecretPolynomial::with_secret(rng, secret, params.threshold)?;
    share_out(polynomial, params)
}

#[instrument(level = "debug", skip_all, fields(backend = B::NAME, parties = params.parties, threshold = params.threshold))]
fn share_out<B: GroupBackend>(
    polynomial: SecretPolynomial<B>,
    params: &VssParameters,
) -> Result<Dealing<B>, Error> {
    let commitment = polynomial.commit();
    let shares = ShareIndex::range(params.parties)?
        .into_iter()
        .map(|index| polynomial.share(index))
        .collect();
    debug!("dealing ready");
    Ok(Dealing {
        polynomial,
        commitment,
        shares,
    })
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::arith::test_group::TestGroup;
    use crate::{DefaultBackend, FieldElement, Fr, recover_secret};

    #[test]
    fn honest_dealing_has_no_complaints() {
        let mut rng = StdRng::seed_from_u64(61);
        let params = VssParameters::new(7, 4).unwrap();
        let dealing = deal::<DefaultBackend, _>(&mut rng, &params).unwrap();
        assert_eq!(dealing.shares.len(), 7);
        assert_eq!(dealing.commitment.threshold(), 4);
        assert!(dealing.verify_all().is_empty());
    }

    #[test]
    fn tampered_share_is_reported() {
        let mut rng = StdRng::seed_from_u64(62);
        let params = VssParameters::new(5, 3).unwrap();
        let mut dealing = deal::<DefaultBackend, _>(&mut rng, &params).unwrap();
        let bumped = FieldElement::add(&dealing.shares[2].value, &FieldElement::one());
        dealing.shares[2].value = bumped;
        let complaints = dealing.verify_all();
        assert_eq!(complaints, vec![ShareIndex::new(3).unwrap()]);
    }

    #[test]
    fn dealt_secret_is_recoverable() {
        let mut rng = StdRng::seed_from_u64(63);
        let params = VssParameters::new(6, 3).unwrap();
        let secret = <Fr as FieldElement>::from_u64(123_456);
        let dealing = deal_with_secret::<DefaultBackend, _>(&mut rng, secret, &params).unwrap();
        assert_eq!(recover_secret(&dealing.shares[3..], 3).unwrap(), secret);
    }

    #[test]
    fn full_index_domain() {
        let mut rng = StdRng::seed_from_u64(64);
        let params = VssParameters::new(255, 255).unwrap();
        let dealing = deal::<TestGroup, _>(&mut rng, &params).unwrap();
        assert_eq!(dealing.shares.last().unwrap().index.get(), 255);
        assert!(dealing.verify_all().is_empty());
    }

    #[test]
    fn invalid_params_rejected() {
        let mut rng = StdRng::seed_from_u64(65);
        let params = VssParameters {
            parties: 2,
            threshold: 3,
        };
        assert!(deal::<TestGroup, _>(&mut rng, &params).is_err());
    }
}
