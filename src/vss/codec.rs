//! Wire format for vectors of group elements.
//!
//! A vector of `n` points is the concatenation of their canonical fixed-width
//! encodings: no length prefix and no separators. Position in the buffer
//! carries the coefficient (or participant) index, so both ends must agree on
//! `n` out of band. Vectors hold at most [`MAX_THRESHOLD`] points.

use tracing::debug;

use super::MAX_THRESHOLD;
use crate::{CurvePoint, Error, GroupBackend};

/// Encoded size of `n` points.
///
/// Fails with [`Error::CountOutOfRange`] when `n` exceeds [`MAX_THRESHOLD`].
pub fn encoded_len<B: GroupBackend>(n: usize) -> Result<usize, Error> {
    if n > MAX_THRESHOLD {
        return Err(Error::CountOutOfRange(n));
    }
    Ok(n * B::Point::REPR_SIZE)
}

/// Writes `points` into `out`, which must be exactly `encoded_len(points.len())`
/// bytes long.
pub fn write_vector<B: GroupBackend>(points: &[B::Point], out: &mut [u8]) -> Result<(), Error> {
    let expected = encoded_len::<B>(points.len())?;
    if out.len() != expected {
        return Err(Error::LengthMismatch {
            expected,
            actual: out.len(),
        });
    }
    for (point, chunk) in points.iter().zip(out.chunks_exact_mut(B::Point::REPR_SIZE)) {
        chunk.copy_from_slice(&point.to_repr());
    }
    Ok(())
}

/// Encodes `points` into a freshly allocated buffer.
pub fn encode_vector<B: GroupBackend>(points: &[B::Point]) -> Vec<u8> {
    points.iter().flat_map(|point| point.to_repr()).collect()
}

/// Decodes exactly `n` points from `bytes`.
///
/// Every chunk must decode to a member of the prime-order subgroup; the first
/// chunk that does not aborts the whole decode.
///
/// # Example
///
/// ```rust
/// use feldman_vss::{DefaultBackend, SecretPolynomial, encode_vector, read_vector};
///
/// let poly = SecretPolynomial::<DefaultBackend>::from_seed(&[7u8; 32], 3)?;
/// let commitment = poly.commit();
/// let bytes = encode_vector::<DefaultBackend>(commitment.points());
/// assert_eq!(bytes.len(), 3 * 96);
///
/// let points = read_vector::<DefaultBackend>(&bytes, 3)?;
/// assert_eq!(points, commitment.points());
/// # Ok::<(), feldman_vss::Error>(())
/// ```
pub fn read_vector<B: GroupBackend>(bytes: &[u8], n: usize) -> Result<Vec<B::Point>, Error> {
    let expected = encoded_len::<B>(n)?;
    if bytes.len() != expected {
        return Err(Error::LengthMismatch {
            expected,
            actual: bytes.len(),
        });
    }
    bytes
        .chunks_exact(B::Point::REPR_SIZE)
        .enumerate()
        .map(|(position, chunk)| {
            B::Point::from_repr(chunk).map_err(|source| {
                debug!(backend = B::NAME, position, "rejecting vector: invalid point");
                Error::Decoding { position, source }
            })
        })
        .collect()
}
