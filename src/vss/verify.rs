use tracing::debug;

use crate::{CurvePoint, FieldElement, GroupBackend};

/// Outcome of checking a scalar share against a public point.
///
/// `Invalid` is an expected protocol outcome: the share is well formed but
/// does not match, and the caller should raise a complaint. `Malformed`
/// means the inputs themselves could not be interpreted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Verification {
    /// `y == [s]g`
    Valid,
    /// `y != [s]g`
    Invalid,
    /// An encoding failed to decode, or the share and point disagree on the index.
    Malformed,
}

impl Verification {
    pub fn is_valid(self) -> bool {
        self == Verification::Valid
    }
}

/// Checks `point == [scalar]g` with a fixed-base multiplication.
pub fn verify_share<B: GroupBackend>(scalar: &B::Scalar, point: &B::Point) -> Verification {
    if B::Point::mul_generator(scalar) == *point {
        Verification::Valid
    } else {
        Verification::Invalid
    }
}

/// Checks an encoded share against an encoded public point.
///
/// Encodings that do not decode (wrong width, unreduced scalar, point off the
/// curve or outside the subgroup) yield [`Verification::Malformed`] rather
/// than `Invalid`.
///
/// # Example
///
/// ```rust
/// use feldman_vss::{DefaultBackend, SecretPolynomial, ShareIndex, Verification, verify_share_bytes};
///
/// let poly = SecretPolynomial::<DefaultBackend>::from_seed(&[3u8; 32], 2)?;
/// let (share, public) = poly.image(ShareIndex::new(1)?);
/// let point = feldman_vss::encode_vector::<DefaultBackend>(&[public.point]);
///
/// assert_eq!(verify_share_bytes::<DefaultBackend>(&share.to_bytes(), &point), Verification::Valid);
/// assert_eq!(verify_share_bytes::<DefaultBackend>(&share.to_bytes(), &[0u8; 96]), Verification::Malformed);
/// # Ok::<(), feldman_vss::Error>(())
/// ```
pub fn verify_share_bytes<B: GroupBackend>(scalar: &[u8], point: &[u8]) -> Verification {
    let scalar = match B::Scalar::from_repr(scalar) {
        Ok(scalar) => scalar,
        Err(err) => {
            debug!(backend = B::NAME, %err, "malformed share scalar");
            return Verification::Malformed;
        }
    };
    let point = match B::Point::from_repr(point) {
        Ok(point) => point,
        Err(err) => {
            debug!(backend = B::NAME, %err, "malformed public share point");
            return Verification::Malformed;
        }
    };
    verify_share::<B>(&scalar, &point)
}
