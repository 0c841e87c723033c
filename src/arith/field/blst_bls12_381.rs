//! blst-backed scalar field of BLS12-381.
//!
//! Scalars are encoded as 32 big-endian bytes, matching the encoding of
//! BLS private keys.

use blstrs::Scalar;
use ff::Field;
use rand_core::RngCore;
use zeroize::DefaultIsZeroes;

use crate::{BackendError, FieldElement};

/// Element of the BLS12-381 scalar field.
///
/// Wraps [`blstrs::Scalar`] so that shares and coefficients can be wiped
/// through [`zeroize::Zeroize`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Fr(Scalar);

impl DefaultIsZeroes for Fr {}

impl From<Scalar> for Fr {
    fn from(scalar: Scalar) -> Self {
        Fr(scalar)
    }
}

impl From<Fr> for Scalar {
    fn from(fr: Fr) -> Self {
        fr.0
    }
}

impl AsRef<Scalar> for Fr {
    fn as_ref(&self) -> &Scalar {
        &self.0
    }
}

impl FieldElement for Fr {
    const REPR_SIZE: usize = 32;

    fn zero() -> Self {
        Fr(Scalar::ZERO)
    }

    fn one() -> Self {
        Fr(Scalar::ONE)
    }

    fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        Fr(<Scalar as Field>::random(rng))
    }

    fn from_u64(n: u64) -> Self {
        Fr(Scalar::from(n))
    }

    fn add(&self, other: &Self) -> Self {
        Fr(self.0 + other.0)
    }

    fn sub(&self, other: &Self) -> Self {
        Fr(self.0 - other.0)
    }

    fn mul(&self, other: &Self) -> Self {
        Fr(self.0 * other.0)
    }

    fn invert(&self) -> Option<Self> {
        Option::<Scalar>::from(Field::invert(&self.0)).map(Fr)
    }

    fn is_zero(&self) -> bool {
        Field::is_zero(&self.0).into()
    }

    fn to_repr(&self) -> Vec<u8> {
        self.0.to_bytes_be().to_vec()
    }

    fn from_repr(bytes: &[u8]) -> Result<Self, BackendError> {
        let bytes: [u8; 32] = bytes
            .try_into()
            .map_err(|_| BackendError::Serialization("invalid scalar length"))?;
        Option::<Scalar>::from(Scalar::from_bytes_be(&bytes))
            .map(Fr)
            .ok_or(BackendError::Serialization("scalar not reduced modulo r"))
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};
    use zeroize::Zeroize;

    use super::*;

    #[test]
    fn repr_is_big_endian() {
        let repr = Fr::from_u64(0x0102).to_repr();
        assert_eq!(repr.len(), 32);
        assert_eq!(&repr[30..], &[0x01, 0x02]);
        assert!(repr[..30].iter().all(|b| *b == 0));
    }

    #[test]
    fn rejects_unreduced_scalar() {
        let bytes = [0xffu8; 32];
        assert!(Fr::from_repr(&bytes).is_err());
    }

    #[test]
    fn rejects_wrong_width() {
        let mut rng = StdRng::seed_from_u64(7);
        let repr = Fr::random(&mut rng).to_repr();
        assert!(Fr::from_repr(&repr[..31]).is_err());
    }

    #[test]
    fn invert_zero_is_none() {
        assert!(Fr::zero().invert().is_none());
    }

    #[test]
    fn zeroize_clears_scalar() {
        let mut rng = StdRng::seed_from_u64(8);
        let mut scalar = Fr::random(&mut rng);
        assert!(!scalar.is_zero());
        scalar.zeroize();
        assert!(scalar.is_zero());
        assert_eq!(scalar, Fr::default());
    }
}
