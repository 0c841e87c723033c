//! Small prime-order group used to exercise the sharing code without curve
//! arithmetic.
//!
//! Points are the quadratic residues modulo the safe prime `P = 2 * Q + 1`,
//! a cyclic group of prime order `Q`. The group law is multiplication mod `P`
//! and "scalar multiplication" is exponentiation. Encodings are two
//! big-endian bytes.

use rand_core::RngCore;
use zeroize::DefaultIsZeroes;

use crate::{BackendError, CurvePoint, FieldElement, GroupBackend};

const Q: u64 = 1019;
const P: u64 = 2 * Q + 1;
const GENERATOR: u64 = 4;

fn pow_mod(mut base: u64, mut exp: u64, modulus: u64) -> u64 {
    let mut acc = 1;
    base %= modulus;
    while exp > 0 {
        if exp & 1 == 1 {
            acc = acc * base % modulus;
        }
        base = base * base % modulus;
        exp >>= 1;
    }
    acc
}

fn decode_u16(bytes: &[u8]) -> Result<u64, BackendError> {
    let bytes: [u8; 2] = bytes
        .try_into()
        .map_err(|_| BackendError::Serialization("invalid test group length"))?;
    Ok(u16::from_be_bytes(bytes) as u64)
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TestScalar(pub u64);

impl DefaultIsZeroes for TestScalar {}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TestPoint(pub u64);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TestGroup;

impl GroupBackend for TestGroup {
    const NAME: &'static str = "test/qr-2039";
    type Scalar = TestScalar;
    type Point = TestPoint;
}

impl FieldElement for TestScalar {
    const REPR_SIZE: usize = 2;

    fn zero() -> Self {
        TestScalar(0)
    }

    fn one() -> Self {
        TestScalar(1)
    }

    fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        TestScalar(rng.next_u64() % Q)
    }

    fn from_u64(n: u64) -> Self {
        TestScalar(n % Q)
    }

    fn add(&self, other: &Self) -> Self {
        TestScalar((self.0 + other.0) % Q)
    }

    fn sub(&self, other: &Self) -> Self {
        TestScalar((self.0 + Q - other.0) % Q)
    }

    fn mul(&self, other: &Self) -> Self {
        TestScalar(self.0 * other.0 % Q)
    }

    fn invert(&self) -> Option<Self> {
        (self.0 != 0).then(|| TestScalar(pow_mod(self.0, Q - 2, Q)))
    }

    fn is_zero(&self) -> bool {
        self.0 == 0
    }

    fn to_repr(&self) -> Vec<u8> {
        (self.0 as u16).to_be_bytes().to_vec()
    }

    fn from_repr(bytes: &[u8]) -> Result<Self, BackendError> {
        let value = decode_u16(bytes)?;
        if value >= Q {
            return Err(BackendError::Serialization("scalar not reduced"));
        }
        Ok(TestScalar(value))
    }
}

impl CurvePoint<TestScalar> for TestPoint {
    const REPR_SIZE: usize = 2;

    fn identity() -> Self {
        TestPoint(1)
    }

    fn generator() -> Self {
        TestPoint(GENERATOR)
    }

    fn is_identity(&self) -> bool {
        self.0 == 1
    }

    fn add(&self, other: &Self) -> Self {
        TestPoint(self.0 * other.0 % P)
    }

    fn mul_scalar(&self, scalar: &TestScalar) -> Self {
        TestPoint(pow_mod(self.0, scalar.0, P))
    }

    fn to_repr(&self) -> Vec<u8> {
        (self.0 as u16).to_be_bytes().to_vec()
    }

    fn from_repr(bytes: &[u8]) -> Result<Self, BackendError> {
        let value = decode_u16(bytes)?;
        if value == 0 || value >= P || pow_mod(value, Q, P) != 1 {
            return Err(BackendError::Serialization("not in the order-Q subgroup"));
        }
        Ok(TestPoint(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generator_has_prime_order() {
        let g = TestPoint::generator();
        assert!(!g.is_identity());
        assert!(g.mul_scalar(&TestScalar(Q)).is_identity());
    }

    #[test]
    fn non_residue_rejected() {
        // P - 1 is -1, a non-residue for P = 3 mod 4.
        let bytes = ((P - 1) as u16).to_be_bytes();
        assert!(TestPoint::from_repr(&bytes).is_err());
    }
}
