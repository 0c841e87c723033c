use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use rand_core::{CryptoRng, RngCore};
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use tracing::instrument;
use zeroize::Zeroize;

use super::{CommitmentVector, PublicShare, Share, ShareIndex, check_threshold};
use crate::{CurvePoint, Error, FieldElement, GroupBackend};

/// The dealer's secret polynomial `P(x) = a_0 + a_1 x + ... + a_{t-1} x^{t-1}`.
///
/// Coefficients are stored in ascending order, so `a_0` (the shared secret)
/// comes first. The length `t` is the threshold and is fixed at construction.
/// Coefficients are wiped when the polynomial is dropped.
pub struct SecretPolynomial<B: GroupBackend> {
    coeffs: Vec<B::Scalar>,
}

impl<B: GroupBackend> SecretPolynomial<B> {
    /// Constructs a polynomial from its coefficients (constant term first).
    ///
    /// Leading zero coefficients are kept: the threshold is the number of
    /// coefficients supplied, not the degree of the resulting function.
    pub fn from_coefficients(coeffs: Vec<B::Scalar>) -> Result<Self, Error> {
        check_threshold(coeffs.len())?;
        Ok(Self { coeffs })
    }

    /// Samples `threshold` uniformly random coefficients.
    pub fn random<R: RngCore + CryptoRng + ?Sized>(
        rng: &mut R,
        threshold: usize,
    ) -> Result<Self, Error> {
        check_threshold(threshold)?;
        let coeffs = (0..threshold).map(|_| B::Scalar::random(rng)).collect();
        Ok(Self { coeffs })
    }

    /// Samples a polynomial whose constant term is `secret`.
    pub fn with_secret<R: RngCore + CryptoRng + ?Sized>(
        rng: &mut R,
        secret: B::Scalar,
        threshold: usize,
    ) -> Result<Self, Error> {
        let mut poly = Self::random(rng, threshold)?;
        poly.coeffs[0] = secret;
        Ok(poly)
    }

    /// Derives the coefficients deterministically from a 32-byte seed.
    pub fn from_seed(seed: &[u8; 32], threshold: usize) -> Result<Self, Error> {
        let mut rng = ChaCha20Rng::from_seed(*seed);
        Self::random(&mut rng, threshold)
    }

    /// Decodes `threshold` concatenated scalar encodings.
    ///
    /// Malformed input is rejected before any evaluation can happen.
    pub fn from_bytes(bytes: &[u8], threshold: usize) -> Result<Self, Error> {
        check_threshold(threshold)?;
        let width = B::Scalar::REPR_SIZE;
        let expected = threshold * width;
        if bytes.len() != expected {
            return Err(Error::LengthMismatch {
                expected,
                actual: bytes.len(),
            });
        }
        let coeffs = bytes
            .chunks_exact(width)
            .enumerate()
            .map(|(position, chunk)| {
                B::Scalar::from_repr(chunk).map_err(|source| Error::Decoding { position, source })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { coeffs })
    }

    /// Number of coefficients, i.e. the number of shares needed to reconstruct.
    pub fn threshold(&self) -> usize {
        self.coeffs.len()
    }

    /// Nominal degree `t - 1`.
    pub fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }

    /// Returns the coefficients in ascending order.
    pub fn coeffs(&self) -> &[B::Scalar] {
        &self.coeffs
    }

    /// The shared secret `a_0 = P(0)`.
    pub fn secret(&self) -> &B::Scalar {
        &self.coeffs[0]
    }

    /// Evaluates `P(x) mod r` using Horner's method (`t - 1` multiply-adds).
    pub fn evaluate(&self, index: ShareIndex) -> B::Scalar {
        let x = index.to_scalar::<B::Scalar>();
        let mut coeffs = self.coeffs.iter().rev();
        let mut acc = match coeffs.next() {
            Some(leading) => *leading,
            None => return B::Scalar::zero(),
        };
        for coeff in coeffs {
            acc = acc.mul(&x).add(coeff);
        }
        acc
    }

    /// Returns the private share `(x, P(x))` for a participant.
    #[instrument(level = "trace", skip_all, fields(threshold = self.threshold(), index = %index))]
    pub fn share(&self, index: ShareIndex) -> Share<B> {
        Share::new(index, self.evaluate(index))
    }

    /// Computes both the private share and its public image `[P(x)]g`.
    pub fn image(&self, index: ShareIndex) -> (Share<B>, PublicShare<B>) {
        let share = self.share(index);
        let public = share.public_share();
        (share, public)
    }

    /// Publishes the commitment `C_j = [a_j]g` to every coefficient.
    #[instrument(level = "trace", skip_all, fields(backend = B::NAME, threshold = self.threshold()))]
    pub fn commit(&self) -> CommitmentVector<B> {
        let points = self
            .coeffs
            .par_iter()
            .map(B::Point::mul_generator)
            .collect();
        CommitmentVector::from_points_unchecked(points)
    }
}

impl<B: GroupBackend> Drop for SecretPolynomial<B> {
    fn drop(&mut self) {
        self.coeffs.zeroize();
    }
}

impl<B: GroupBackend> std::fmt::Debug for SecretPolynomial<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecretPolynomial")
            .field("threshold", &self.coeffs.len())
            .finish_non_exhaustive()
    }
}
