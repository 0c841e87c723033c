use std::fmt::Debug;

use crate::{BackendError, FieldElement};

mod blst_bls12_381;
pub use blst_bls12_381::{G1, G2};

/// Elliptic curve point abstraction for the prime-order groups G1 and G2.
///
/// Points are kept in projective coordinates. The canonical encoding is the
/// compressed affine form, [`REPR_SIZE`](CurvePoint::REPR_SIZE) bytes wide.
/// Decoding must reject anything outside the prime-order subgroup.
///
/// # Type Parameters
///
/// - `F`: The scalar field type used for scalar multiplication
///
/// # Example
///
/// ```rust
/// use rand::thread_rng;
/// use feldman_vss::{CurvePoint, FieldElement, Fr, G2};
///
/// let mut rng = thread_rng();
/// let scalar = <Fr as FieldElement>::random(&mut rng);
///
/// let fixed = <G2 as CurvePoint<Fr>>::mul_generator(&scalar);
/// let variable = <G2 as CurvePoint<Fr>>::generator().mul_scalar(&scalar);
/// assert_eq!(fixed, variable);
///
/// let bytes = CurvePoint::<Fr>::to_repr(&fixed);
/// assert_eq!(bytes.len(), 96);
/// ```
pub trait CurvePoint<F: FieldElement>:
    Clone + Copy + Send + Sync + Debug + PartialEq + 'static
{
    /// Width in bytes of the canonical (compressed) encoding.
    const REPR_SIZE: usize;

    /// Returns the point at infinity (identity element).
    fn identity() -> Self;

    /// Returns the standard generator for this group.
    fn generator() -> Self;

    /// Checks if this point is the identity element.
    fn is_identity(&self) -> bool;

    /// Performs elliptic curve point addition.
    fn add(&self, other: &Self) -> Self;

    /// Performs variable-base scalar multiplication: returns `scalar * self`.
    fn mul_scalar(&self, scalar: &F) -> Self;

    /// Performs fixed-base scalar multiplication on the generator.
    fn mul_generator(scalar: &F) -> Self {
        Self::generator().mul_scalar(scalar)
    }

    /// Serializes this point to its canonical encoding.
    fn to_repr(&self) -> Vec<u8>;

    /// Deserializes a point, checking curve and subgroup membership.
    fn from_repr(bytes: &[u8]) -> Result<Self, BackendError>;
}
