//! Arithmetic backend abstractions and implementations.
//!
//! The sharing primitives never touch curve arithmetic directly. They work
//! through the traits in this module, which a backend implements:
//!
//! - **[`field`]**: Scalar field operations (Fr) - addition, multiplication, inversion,
//!   fixed-width encoding
//! - **[`group`]**: Prime-order group operations (G1, G2) - addition, variable-base and
//!   fixed-base scalar multiplication, subgroup-checked encoding
//! - **[`backend`]**: [`GroupBackend`] ties a scalar field to the group commitments live in
//!
//! # Backend Support
//!
//! | Backend | Scalar | Group | Point width |
//! |---------|--------|-------|-------------|
//! | [`Bls12381G1`] | BLS12-381 Fr | G1 | 48 bytes |
//! | [`Bls12381G2`] (default) | BLS12-381 Fr | G2 | 96 bytes |
//!
//! # Example
//!
//! ```rust
//! use rand::thread_rng;
//! use feldman_vss::{CurvePoint, DefaultBackend, FieldElement, GroupBackend};
//!
//! type Scalar = <DefaultBackend as GroupBackend>::Scalar;
//! type Point = <DefaultBackend as GroupBackend>::Point;
//!
//! let mut rng = thread_rng();
//! let a = <Scalar as FieldElement>::random(&mut rng);
//! let b = <Scalar as FieldElement>::random(&mut rng);
//!
//! // [a]g + [b]g == [a + b]g
//! let lhs = CurvePoint::add(&Point::mul_generator(&a), &Point::mul_generator(&b));
//! let rhs = Point::mul_generator(&FieldElement::add(&a, &b));
//! assert_eq!(lhs, rhs);
//! ```

mod field;
pub use self::field::*;

mod group;
pub use self::group::*;

mod backend;
pub use self::backend::*;

#[cfg(test)]
pub(crate) mod test_group;
