//! Lagrange interpolation at the origin.
//!
//! Any `t` shares of a polynomial with `t` coefficients determine `P(0)`:
//!
//! ```text
//! P(0) = sum_i lambda_i * P(x_i),   lambda_i = prod_{j != i} x_j / (x_j - x_i)
//! ```
//!
//! The same coefficients applied in the group to public shares recover the
//! commitment to the secret, `[P(0)]g`.

use std::collections::HashSet;

use tracing::instrument;

use super::{PublicShare, Share, ShareIndex, check_threshold};
use crate::{BackendError, CurvePoint, Error, FieldElement, GroupBackend};

/// Computes `lambda_i` for every index in the set.
///
/// Indices must be distinct participant indices; the origin is rejected.
pub fn lagrange_coefficients_at_origin<F: FieldElement>(
    indices: &[ShareIndex],
) -> Result<Vec<F>, Error> {
    let mut seen = HashSet::with_capacity(indices.len());
    for index in indices {
        if index.is_origin() {
            return Err(Error::MalformedInput(
                "cannot interpolate from the origin".into(),
            ));
        }
        if !seen.insert(*index) {
            return Err(Error::MalformedInput(format!("duplicate share index {index}")));
        }
    }

    let xs: Vec<F> = indices.iter().map(|i| i.to_scalar::<F>()).collect();
    xs.iter()
        .enumerate()
        .map(|(i, xi)| -> Result<F, Error> {
            let (num, den) = xs
                .iter()
                .enumerate()
                .filter(|(j, _)| *j != i)
                .fold((F::one(), F::one()), |(num, den), (_, xj)| {
                    (num.mul(xj), den.mul(&xj.sub(xi)))
                });
            let inv = den
                .invert()
                .ok_or(BackendError::Math("cannot invert zero element"))?;
            Ok(num.mul(&inv))
        })
        .collect()
}

fn take_threshold<T>(items: &[T], threshold: usize) -> Result<&[T], Error> {
    check_threshold(threshold)?;
    if items.len() < threshold {
        return Err(Error::NotEnoughShares {
            required: threshold,
            provided: items.len(),
        });
    }
    Ok(&items[..threshold])
}

/// Reconstructs the secret `P(0)` from at least `threshold` shares.
///
/// Only the first `threshold` shares are used.
#[instrument(level = "trace", skip_all, fields(threshold = threshold, provided = shares.len()))]
pub fn recover_secret<B: GroupBackend>(
    shares: &[Share<B>],
    threshold: usize,
) -> Result<B::Scalar, Error> {
    let shares = take_threshold(shares, threshold)?;
    let indices: Vec<ShareIndex> = shares.iter().map(|s| s.index).collect();
    let lambdas = lagrange_coefficients_at_origin::<B::Scalar>(&indices)?;
    Ok(shares
        .iter()
        .zip(&lambdas)
        .fold(B::Scalar::zero(), |acc, (share, lambda)| {
            acc.add(&share.value.mul(lambda))
        }))
}

/// Recovers the commitment to the secret, `[P(0)]g`, from at least
/// `threshold` public shares.
#[instrument(level = "trace", skip_all, fields(backend = B::NAME, threshold = threshold, provided = public_shares.len()))]
pub fn recover_public_key<B: GroupBackend>(
    public_shares: &[PublicShare<B>],
    threshold: usize,
) -> Result<B::Point, Error> {
    let public_shares = take_threshold(public_shares, threshold)?;
    let indices: Vec<ShareIndex> = public_shares.iter().map(|s| s.index).collect();
    let lambdas = lagrange_coefficients_at_origin::<B::Scalar>(&indices)?;
    Ok(public_shares
        .iter()
        .zip(&lambdas)
        .fold(B::Point::identity(), |acc, (public, lambda)| {
            acc.add(&public.point.mul_scalar(lambda))
        }))
}
