use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use tracing::{debug, instrument};

use super::codec::{encode_vector, read_vector};
use super::{PublicShare, Share, ShareIndex, Verification, check_threshold};
use crate::{CurvePoint, Error, GroupBackend};

/// Public commitment `C_j = [a_j]g` to a secret polynomial.
///
/// Published once by the dealer and immutable afterwards. Because the map
/// `a -> [a]g` is a group homomorphism, evaluating the commitment at `x` in
/// the group gives `[P(x)]g` without knowing any coefficient.
pub struct CommitmentVector<B: GroupBackend> {
    points: Vec<B::Point>,
}

impl<B: GroupBackend> CommitmentVector<B> {
    /// Wraps received commitment points (constant term first).
    pub fn new(points: Vec<B::Point>) -> Result<Self, Error> {
        check_threshold(points.len())?;
        Ok(Self { points })
    }

    pub(crate) fn from_points_unchecked(points: Vec<B::Point>) -> Self {
        Self { points }
    }

    /// Decodes a commitment of `threshold` points from the wire format.
    pub fn from_bytes(bytes: &[u8], threshold: usize) -> Result<Self, Error> {
        check_threshold(threshold)?;
        let points = read_vector::<B>(bytes, threshold)?;
        Ok(Self { points })
    }

    /// Encodes the commitment as `threshold` concatenated point encodings.
    pub fn to_bytes(&self) -> Vec<u8> {
        encode_vector::<B>(&self.points)
    }

    /// Number of committed coefficients.
    pub fn threshold(&self) -> usize {
        self.points.len()
    }

    pub fn points(&self) -> &[B::Point] {
        &self.points
    }

    /// Commitment to the secret, `C_0 = [a_0]g`: the group public key.
    pub fn public_key(&self) -> &B::Point {
        &self.points[0]
    }

    /// Returns `true` when the commitment to the secret is the identity,
    /// which callers treat as a degenerate dealing.
    pub fn is_degenerate(&self) -> bool {
        self.public_key().is_identity()
    }

    /// Evaluates the committed polynomial in the group at `index`.
    ///
    /// Runs Horner's rule over the points, `acc = [x]acc + C_j`, from the
    /// highest coefficient down with variable-base scalar multiplications.
    pub fn evaluate(&self, index: ShareIndex) -> PublicShare<B> {
        let x = index.to_scalar::<B::Scalar>();
        let mut points = self.points.iter().rev();
        let mut acc = match points.next() {
            Some(leading) => *leading,
            None => B::Point::identity(),
        };
        for point in points {
            acc = acc.mul_scalar(&x).add(point);
        }
        PublicShare::new(index, acc)
    }

    /// Evaluates the commitment at every index of the batch.
    ///
    /// Indices are evaluated independently (and in parallel); the output
    /// keeps the order of `indices`.
    #[instrument(level = "trace", skip_all, fields(backend = B::NAME, threshold = self.threshold(), count = indices.len()))]
    pub fn evaluate_batch(&self, indices: &[ShareIndex]) -> Vec<PublicShare<B>> {
        indices.par_iter().map(|index| self.evaluate(*index)).collect()
    }

    /// Public shares of the participants `1..=parties`.
    pub fn public_shares(&self, parties: usize) -> Result<Vec<PublicShare<B>>, Error> {
        let indices = ShareIndex::range(parties)?;
        Ok(self.evaluate_batch(&indices))
    }

    /// Recomputes `[P(x)]g` for the share's index and checks the share
    /// against it.
    pub fn verify_share(&self, share: &Share<B>) -> Verification {
        let outcome = share.verify(&self.evaluate(share.index));
        if outcome != Verification::Valid {
            debug!(index = %share.index, ?outcome, "share does not match commitment");
        }
        outcome
    }

    /// Adds commitments point-wise: the commitment to the sum of the
    /// underlying polynomials.
    pub fn aggregate(commitments: &[CommitmentVector<B>]) -> Result<Self, Error> {
        let first = commitments
            .first()
            .ok_or_else(|| Error::MalformedInput("no commitments to aggregate".into()))?;
        let threshold = first.threshold();
        if let Some(other) = commitments.iter().find(|c| c.threshold() != threshold) {
            return Err(Error::LengthMismatch {
                expected: threshold,
                actual: other.threshold(),
            });
        }
        let points = (0..threshold)
            .map(|j| {
                commitments
                    .iter()
                    .fold(B::Point::identity(), |acc, c| acc.add(&c.points[j]))
            })
            .collect();
        Ok(Self { points })
    }
}

impl<B: GroupBackend> Clone for CommitmentVector<B> {
    fn clone(&self) -> Self {
        Self {
            points: self.points.clone(),
        }
    }
}

impl<B: GroupBackend> PartialEq for CommitmentVector<B> {
    fn eq(&self, other: &Self) -> bool {
        self.points == other.points
    }
}

impl<B: GroupBackend> std::fmt::Debug for CommitmentVector<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommitmentVector")
            .field("points", &self.points)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::arith::test_group::{TestGroup, TestPoint};
    use crate::{Bls12381G1, DefaultBackend, FieldElement, SecretPolynomial};

    fn homomorphism_holds<B: GroupBackend>(rng: &mut StdRng, threshold: usize) {
        let poly = SecretPolynomial::<B>::random(rng, threshold).unwrap();
        let commitment = poly.commit();
        for x in [1u32, 2, 3, 17, 254, 255] {
            let index = ShareIndex::new(x).unwrap();
            let (_, expected) = poly.image(index);
            assert_eq!(commitment.evaluate(index), expected, "index {x}");
        }
    }

    #[test]
    fn homomorphism_blst_g2() {
        let mut rng = StdRng::seed_from_u64(21);
        homomorphism_holds::<DefaultBackend>(&mut rng, 1);
        homomorphism_holds::<DefaultBackend>(&mut rng, 5);
    }

    #[test]
    fn homomorphism_blst_g1() {
        homomorphism_holds::<Bls12381G1>(&mut StdRng::seed_from_u64(22), 7);
    }

    #[test]
    fn homomorphism_test_group() {
        let mut rng = StdRng::seed_from_u64(23);
        for threshold in [1, 2, 10, 255] {
            homomorphism_holds::<TestGroup>(&mut rng, threshold);
        }
    }

    #[test]
    fn origin_recovers_commitment_to_secret() {
        let poly = SecretPolynomial::<DefaultBackend>::from_seed(&[4u8; 32], 6).unwrap();
        let commitment = poly.commit();
        let at_origin = commitment.evaluate(ShareIndex::ORIGIN);
        assert_eq!(at_origin.point, *commitment.public_key());
        assert_eq!(
            at_origin.point,
            <<DefaultBackend as GroupBackend>::Point as CurvePoint<_>>::mul_generator(poly.secret())
        );
    }

    #[test]
    fn batch_preserves_order() {
        let poly = SecretPolynomial::<TestGroup>::from_seed(&[5u8; 32], 4).unwrap();
        let commitment = poly.commit();
        let indices: Vec<ShareIndex> = [9u32, 3, 200, 1]
            .iter()
            .map(|i| ShareIndex::new(*i).unwrap())
            .collect();
        let batch = commitment.evaluate_batch(&indices);
        assert_eq!(batch.len(), indices.len());
        for (public, index) in batch.iter().zip(&indices) {
            assert_eq!(*public, commitment.evaluate(*index));
        }
    }

    #[test]
    fn public_shares_cover_one_to_n() {
        let poly = SecretPolynomial::<TestGroup>::from_seed(&[6u8; 32], 3).unwrap();
        let shares = poly.commit().public_shares(5).unwrap();
        let indices: Vec<u8> = shares.iter().map(|s| s.index.get()).collect();
        assert_eq!(indices, vec![1, 2, 3, 4, 5]);
        assert!(poly.commit().public_shares(256).is_err());
    }

    #[test]
    fn verify_share_against_commitment() {
        let mut rng = StdRng::seed_from_u64(24);
        let poly = SecretPolynomial::<DefaultBackend>::random(&mut rng, 3).unwrap();
        let commitment = poly.commit();
        let mut share = poly.share(ShareIndex::new(8).unwrap());
        assert_eq!(commitment.verify_share(&share), Verification::Valid);
        share.value = FieldElement::add(&share.value, &FieldElement::one());
        assert_eq!(commitment.verify_share(&share), Verification::Invalid);
    }

    #[test]
    fn new_checks_length() {
        assert!(CommitmentVector::<TestGroup>::new(vec![]).is_err());
        assert!(CommitmentVector::<TestGroup>::new(vec![TestPoint(4); 255]).is_ok());
        let err = CommitmentVector::<TestGroup>::new(vec![TestPoint(4); 256]).unwrap_err();
        assert!(err.is_domain());
    }

    #[test]
    fn aggregate_commits_to_sum() {
        let mut rng = StdRng::seed_from_u64(25);
        let a = SecretPolynomial::<DefaultBackend>::random(&mut rng, 3).unwrap();
        let b = SecretPolynomial::<DefaultBackend>::random(&mut rng, 3).unwrap();
        let summed: Vec<_> = a
            .coeffs()
            .iter()
            .zip(b.coeffs())
            .map(|(x, y)| FieldElement::add(x, y))
            .collect();
        let sum = SecretPolynomial::<DefaultBackend>::from_coefficients(summed).unwrap();
        let aggregate = CommitmentVector::aggregate(&[a.commit(), b.commit()]).unwrap();
        assert_eq!(aggregate, sum.commit());

        let short = SecretPolynomial::<DefaultBackend>::random(&mut rng, 2).unwrap();
        assert!(CommitmentVector::aggregate(&[a.commit(), short.commit()]).is_err());
    }

    #[test]
    fn degenerate_commitment_flagged() {
        let zero = SecretPolynomial::<TestGroup>::from_coefficients(vec![
            FieldElement::zero(),
            FieldElement::one(),
        ])
        .unwrap();
        assert!(zero.commit().is_degenerate());
    }
}
