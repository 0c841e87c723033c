//! Feldman verifiable secret sharing.
//!
//! A dealer samples a [`SecretPolynomial`] `P` with `t` coefficients, keeps it
//! private and publishes its [`CommitmentVector`] `C_j = [a_j]g`. Participant
//! `x` privately receives the scalar [`Share`] `P(x)` and can recompute the
//! matching [`PublicShare`] `[P(x)]g` from the commitment alone. Comparing the
//! two ([`verify_share`]) tells the participant whether to complain.
//!
//! Share indices are one byte wide: participants use `1..=255` and index `0`
//! ([`ShareIndex::ORIGIN`]) stands for the secret `P(0) = a_0` itself.
//!
//! # Example
//!
//! ```rust
//! use rand::{SeedableRng, rngs::StdRng};
//! use feldman_vss::{DefaultBackend, SecretPolynomial, ShareIndex, Verification};
//!
//! let mut rng = StdRng::seed_from_u64(1);
//! let poly = SecretPolynomial::<DefaultBackend>::random(&mut rng, 3)?;
//! let commitment = poly.commit();
//!
//! let index = ShareIndex::new(4)?;
//! let share = poly.share(index);
//! let public = commitment.evaluate(index);
//! assert_eq!(share.verify(&public), Verification::Valid);
//! # Ok::<(), feldman_vss::Error>(())
//! ```

use std::fmt;

use zeroize::{Zeroize, Zeroizing};

use crate::{CurvePoint, Error, FieldElement, GroupBackend};

mod codec;
mod commitment;
mod dealer;
mod lagrange;
mod polynomial;
mod verify;

pub use codec::{encode_vector, encoded_len, read_vector, write_vector};
pub use commitment::CommitmentVector;
pub use dealer::{Dealing, deal, deal_with_secret};
pub use lagrange::{lagrange_coefficients_at_origin, recover_public_key, recover_secret};
pub use polynomial::SecretPolynomial;
pub use verify::{Verification, verify_share, verify_share_bytes};

/// Largest participant index.
pub const MAX_INDEX: u8 = u8::MAX;

/// Largest number of polynomial coefficients (and commitment points).
pub const MAX_THRESHOLD: usize = MAX_INDEX as usize;

/// Checks that a coefficient count fits the one-byte index domain.
pub(crate) fn check_threshold(threshold: usize) -> Result<(), Error> {
    if threshold == 0 || threshold > MAX_THRESHOLD {
        return Err(Error::ThresholdOutOfRange(threshold));
    }
    Ok(())
}

/// Index of a participant's share.
///
/// Valid participant indices are `[1, 255]`. [`ShareIndex::ORIGIN`] is the
/// reserved index `0`; evaluating at it yields the secret (or, in the group,
/// the commitment to the secret).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ShareIndex(u8);

impl ShareIndex {
    /// The reserved evaluation point `x = 0`.
    pub const ORIGIN: ShareIndex = ShareIndex(0);

    /// Creates a participant index, rejecting `0` and anything above 255.
    pub fn new(index: u32) -> Result<Self, Error> {
        match u8::try_from(index) {
            Ok(value) if value != 0 => Ok(ShareIndex(value)),
            _ => Err(Error::IndexOutOfRange(index)),
        }
    }

    /// Returns the participant indices `1..=n`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use feldman_vss::ShareIndex;
    ///
    /// let indices = ShareIndex::range(3)?;
    /// assert_eq!(indices.iter().map(|i| i.get()).collect::<Vec<_>>(), vec![1, 2, 3]);
    /// assert!(ShareIndex::range(256).is_err());
    /// # Ok::<(), feldman_vss::Error>(())
    /// ```
    pub fn range(n: usize) -> Result<Vec<ShareIndex>, Error> {
        if n > MAX_INDEX as usize {
            return Err(Error::IndexOutOfRange(u32::try_from(n).unwrap_or(u32::MAX)));
        }
        Ok((1..=n as u8).map(ShareIndex).collect())
    }

    /// Returns the raw index value.
    pub fn get(self) -> u8 {
        self.0
    }

    /// Returns `true` for [`ShareIndex::ORIGIN`].
    pub fn is_origin(self) -> bool {
        self.0 == 0
    }

    /// Maps the index into the scalar field.
    pub fn to_scalar<F: FieldElement>(self) -> F {
        F::from_u64(u64::from(self.0))
    }
}

impl TryFrom<u32> for ShareIndex {
    type Error = Error;

    fn try_from(index: u32) -> Result<Self, Self::Error> {
        ShareIndex::new(index)
    }
}

impl TryFrom<usize> for ShareIndex {
    type Error = Error;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        ShareIndex::new(u32::try_from(index).unwrap_or(u32::MAX))
    }
}

impl fmt::Display for ShareIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Secret share held by a single participant: `(x, P(x))`.
///
/// The scalar is wiped on drop and never printed by `Debug`. It must only
/// travel over a confidential channel.
pub struct Share<B: GroupBackend> {
    pub index: ShareIndex,
    pub value: B::Scalar,
}

impl<B: GroupBackend> Share<B> {
    pub fn new(index: ShareIndex, value: B::Scalar) -> Self {
        Self { index, value }
    }

    /// Decodes a share received for `index`.
    ///
    /// Rejects encodings of the wrong width and scalars not reduced mod `r`.
    pub fn from_bytes(index: ShareIndex, bytes: &[u8]) -> Result<Self, Error> {
        let value = B::Scalar::from_repr(bytes)
            .map_err(|source| Error::Decoding { position: 0, source })?;
        Ok(Self { index, value })
    }

    /// Canonical encoding of the scalar, wiped when the buffer is dropped.
    pub fn to_bytes(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(self.value.to_repr())
    }

    /// Fixed-base exponentiation of the share: `[P(x)]g`.
    pub fn public_share(&self) -> PublicShare<B> {
        PublicShare {
            index: self.index,
            point: B::Point::mul_generator(&self.value),
        }
    }

    /// Checks the share against a public share recomputed from the
    /// commitment. Disagreeing indices are reported as malformed input.
    pub fn verify(&self, public: &PublicShare<B>) -> Verification {
        if self.index != public.index {
            return Verification::Malformed;
        }
        verify_share::<B>(&self.value, &public.point)
    }

    /// Sums shares of the same index, as a participant does with the shares
    /// it received from every qualified dealer of a joint dealing.
    pub fn aggregate(shares: &[Share<B>]) -> Result<Share<B>, Error> {
        let first = shares
            .first()
            .ok_or_else(|| Error::MalformedInput("no shares to aggregate".into()))?;
        if shares.iter().any(|s| s.index != first.index) {
            return Err(Error::MalformedInput(
                "aggregated shares must share one index".into(),
            ));
        }
        let value = shares
            .iter()
            .fold(B::Scalar::zero(), |acc, s| acc.add(&s.value));
        Ok(Share::new(first.index, value))
    }
}

impl<B: GroupBackend> Clone for Share<B> {
    fn clone(&self) -> Self {
        Self {
            index: self.index,
            value: self.value,
        }
    }
}

impl<B: GroupBackend> PartialEq for Share<B> {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index && self.value == other.value
    }
}

impl<B: GroupBackend> fmt::Debug for Share<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Share")
            .field("index", &self.index)
            .field("value", &"[redacted]")
            .finish()
    }
}

impl<B: GroupBackend> Drop for Share<B> {
    fn drop(&mut self) {
        self.value.zeroize();
    }
}

/// Public share `(x, [P(x)]g)`, derivable by anyone from the commitment.
pub struct PublicShare<B: GroupBackend> {
    pub index: ShareIndex,
    pub point: B::Point,
}

impl<B: GroupBackend> PublicShare<B> {
    pub fn new(index: ShareIndex, point: B::Point) -> Self {
        Self { index, point }
    }
}

impl<B: GroupBackend> Clone for PublicShare<B> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<B: GroupBackend> Copy for PublicShare<B> {}

impl<B: GroupBackend> PartialEq for PublicShare<B> {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index && self.point == other.point
    }
}

impl<B: GroupBackend> fmt::Debug for PublicShare<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PublicShare")
            .field("index", &self.index)
            .field("point", &self.point)
            .finish()
    }
}
