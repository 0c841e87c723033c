//! blst-backed implementation of the BLS12-381 groups.
//!
//! Encodings follow the ZCash compressed point format used by blst: 48 bytes
//! for G1 and 96 bytes for G2, with the identity encoded as `0xc0` followed
//! by zeros. `from_compressed` performs the subgroup check.

use blstrs::{G1Affine, G1Projective, G2Affine, G2Projective};
use group::{Curve, Group};

use crate::{BackendError, CurvePoint, Fr};

pub type G1 = G1Projective;
pub type G2 = G2Projective;

impl CurvePoint<Fr> for G1 {
    const REPR_SIZE: usize = 48;

    fn identity() -> Self {
        <G1Projective as Group>::identity()
    }

    fn generator() -> Self {
        <G1Projective as Group>::generator()
    }

    fn is_identity(&self) -> bool {
        <Self as Group>::is_identity(self).into()
    }

    fn add(&self, other: &Self) -> Self {
        self + other
    }

    fn mul_scalar(&self, scalar: &Fr) -> Self {
        self * scalar.as_ref()
    }

    fn to_repr(&self) -> Vec<u8> {
        self.to_affine().to_compressed().to_vec()
    }

    fn from_repr(bytes: &[u8]) -> Result<Self, BackendError> {
        let bytes: [u8; 48] = bytes
            .try_into()
            .map_err(|_| BackendError::Serialization("invalid G1 length"))?;
        Option::<G1Affine>::from(G1Affine::from_compressed(&bytes))
            .map(G1Projective::from)
            .ok_or(BackendError::Serialization("invalid G1 point"))
    }
}

impl CurvePoint<Fr> for G2 {
    const REPR_SIZE: usize = 96;

    fn identity() -> Self {
        <G2Projective as Group>::identity()
    }

    fn generator() -> Self {
        <G2Projective as Group>::generator()
    }

    fn is_identity(&self) -> bool {
        <Self as Group>::is_identity(self).into()
    }

    fn add(&self, other: &Self) -> Self {
        self + other
    }

    fn mul_scalar(&self, scalar: &Fr) -> Self {
        self * scalar.as_ref()
    }

    fn to_repr(&self) -> Vec<u8> {
        self.to_affine().to_compressed().to_vec()
    }

    fn from_repr(bytes: &[u8]) -> Result<Self, BackendError> {
        let bytes: [u8; 96] = bytes
            .try_into()
            .map_err(|_| BackendError::Serialization("invalid G2 length"))?;
        Option::<G2Affine>::from(G2Affine::from_compressed(&bytes))
            .map(G2Projective::from)
            .ok_or(BackendError::Serialization("invalid G2 point"))
    }
}
