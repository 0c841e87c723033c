use std::fmt::Debug;

use rand_core::RngCore;
use zeroize::Zeroize;

use crate::BackendError;

mod blst_bls12_381;
pub use blst_bls12_381::Fr;

/// Field element abstraction for the scalar field of the sharing group.
///
/// Scalars are always reduced modulo the group order `r`. Encodings have a
/// fixed width of [`REPR_SIZE`](FieldElement::REPR_SIZE) bytes. Secret
/// scalars are wiped through [`Zeroize`] when shares and polynomials drop.
///
/// # Example
///
/// ```rust
/// use rand::thread_rng;
/// use feldman_vss::{FieldElement, Fr};
///
/// let mut rng = thread_rng();
/// let a = <Fr as FieldElement>::random(&mut rng);
/// let b = <Fr as FieldElement>::from_u64(7);
///
/// let c = FieldElement::mul(&a, &b);
/// let inv = FieldElement::invert(&b).expect("non-zero element");
/// assert_eq!(FieldElement::mul(&c, &inv), a);
///
/// let bytes = FieldElement::to_repr(&a);
/// assert_eq!(bytes.len(), <Fr as FieldElement>::REPR_SIZE);
/// assert_eq!(<Fr as FieldElement>::from_repr(&bytes).expect("valid repr"), a);
/// ```
pub trait FieldElement:
    Clone + Copy + Send + Sync + Debug + PartialEq + Zeroize + 'static
{
    /// Width in bytes of the canonical encoding.
    const REPR_SIZE: usize;

    /// Returns the additive identity (zero) element.
    fn zero() -> Self;

    /// Returns the multiplicative identity (one) element.
    fn one() -> Self;

    /// Generates a uniformly random field element using the provided RNG.
    fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self;

    /// Converts a small integer into the field.
    fn from_u64(n: u64) -> Self;

    /// Modular addition.
    fn add(&self, other: &Self) -> Self;

    /// Modular subtraction.
    fn sub(&self, other: &Self) -> Self;

    /// Modular multiplication.
    fn mul(&self, other: &Self) -> Self;

    /// Computes the multiplicative inverse, returning `None` for zero.
    fn invert(&self) -> Option<Self>;

    /// Checks if this element is zero.
    fn is_zero(&self) -> bool;

    /// Serializes this field element to its canonical fixed-width encoding.
    fn to_repr(&self) -> Vec<u8>;

    /// Deserializes a field element from its canonical encoding.
    ///
    /// Returns an error if the slice has the wrong width or the value is not
    /// reduced modulo the group order.
    fn from_repr(bytes: &[u8]) -> Result<Self, BackendError>;
}
