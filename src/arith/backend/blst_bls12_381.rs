use crate::{Fr, G1, G2, GroupBackend};

/// BLS12-381 with commitments in G1 (48-byte points).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Bls12381G1;

/// BLS12-381 with commitments in G2 (96-byte points), the group BLS public
/// keys live in when signatures are in G1.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Bls12381G2;

impl GroupBackend for Bls12381G1 {
    const NAME: &'static str = "bls12-381/g1";
    type Scalar = Fr;
    type Point = G1;
}

impl GroupBackend for Bls12381G2 {
    const NAME: &'static str = "bls12-381/g2";
    type Scalar = Fr;
    type Point = G2;
}
