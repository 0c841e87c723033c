//! # Feldman verifiable secret sharing over BLS12-381
//!
//! This crate implements the primitives of Feldman-style Verifiable Secret
//! Sharing as used by threshold BLS signatures and distributed key generation.
//!
//! ## Overview
//!
//! A dealer shares a secret `a_0` among up to 255 participants with a
//! polynomial `P` of `t` coefficients. It publishes the commitment
//! `C_j = [a_j]g` and sends participant `x` the scalar share `P(x)` over a
//! private channel. Anyone can evaluate the commitment at `x` in the group
//! and obtain `[P(x)]g`; the participant compares it with its share and
//! complains if they disagree.
//!
//! ## Architecture
//!
//! - **Arithmetic traits**: [`FieldElement`], [`CurvePoint`] and [`GroupBackend`]
//!   inject the scalar field and group arithmetic. [`Bls12381G1`] and
//!   [`Bls12381G2`] implement them with `blstrs`.
//!
//! - **Sharing**: [`SecretPolynomial`] evaluates shares, [`CommitmentVector`]
//!   evaluates public shares in the group, [`verify_share`] and
//!   [`verify_share_bytes`] return a tri-state [`Verification`], and
//!   [`read_vector`] / [`write_vector`] move point vectors across the wire.
//!
//! - **Dealing and reconstruction**: [`deal`], [`recover_secret`] and
//!   [`recover_public_key`].
//!
//! - **[`config`]**: [`VssParameters`] checks `t` and `n` against the index domain.
//!
//! - **[`errors`]**: [`Error`] and [`BackendError`].
//!
//! ## Quick Example
//!
//! ```rust
//! use rand::{SeedableRng, rngs::StdRng};
//! use feldman_vss::{
//!     CommitmentVector, DefaultBackend, ShareIndex, Verification, VssParameters, deal,
//!     recover_secret,
//! };
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let params = VssParameters::new(5, 3)?;
//!
//! // Dealer side
//! let dealing = deal::<DefaultBackend, _>(&mut rng, &params)?;
//! let wire = dealing.commitment.to_bytes();
//!
//! // Participant 2 side: decode the broadcast commitment and check the share
//! let commitment = CommitmentVector::<DefaultBackend>::from_bytes(&wire, params.threshold)?;
//! let share = &dealing.shares[1];
//! assert_eq!(share.index, ShareIndex::new(2)?);
//! assert_eq!(commitment.verify_share(share), Verification::Valid);
//!
//! // Any three shares reconstruct the secret
//! let secret = recover_secret(&dealing.shares[2..], params.threshold)?;
//! assert_eq!(&secret, dealing.polynomial.secret());
//! # Ok::<(), feldman_vss::Error>(())
//! ```
//!
//! ## Security Considerations
//!
//! - Shares and polynomial coefficients are wiped on drop and redacted from
//!   `Debug` output; nothing secret is logged.
//! - Every decoded point is checked for subgroup membership.
//! - The identity element is a valid point; [`CommitmentVector::is_degenerate`]
//!   lets callers reject a dealing whose public key is the identity.

mod arith;
pub mod config;
pub mod errors;
mod serde_impl;
mod vss;

pub use arith::*;
pub use config::*;
pub use errors::*;
pub use vss::*;
