use std::fmt::Debug;

mod blst_bls12_381;
pub use blst_bls12_381::{Bls12381G1, Bls12381G2};

use crate::{CurvePoint, FieldElement};

/// Backend used when none is named: commitments and public shares live in
/// G2, scalars in the BLS12-381 scalar field.
pub type DefaultBackend = Bls12381G2;

/// Arithmetic capability injected into the sharing primitives.
///
/// A backend ties a scalar field to the prime-order group that commitments
/// and public shares live in. All sharing types are generic over it, so the
/// same evaluation code runs against blstrs or a test group.
///
/// # Example
///
/// ```rust
/// use feldman_vss::{Bls12381G2, CurvePoint, GroupBackend};
///
/// type Point = <Bls12381G2 as GroupBackend>::Point;
/// type Scalar = <Bls12381G2 as GroupBackend>::Scalar;
///
/// assert_eq!(<Point as CurvePoint<Scalar>>::REPR_SIZE, 96);
/// assert_eq!(Bls12381G2::NAME, "bls12-381/g2");
/// ```
pub trait GroupBackend: Send + Sync + Debug + Sized + 'static {
    /// Short name used in log fields.
    const NAME: &'static str;

    /// Scalar field type (Fr).
    type Scalar: FieldElement;

    /// Prime-order group carrying commitments and public shares.
    type Point: CurvePoint<Self::Scalar>;
}
