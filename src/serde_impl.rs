//! Serde support for the sharing types.
//!
//! Group elements and scalars are serialized through their canonical byte
//! encodings and re-validated on the way back in: points must decode into the
//! prime-order subgroup, scalars must be reduced and indices must lie in
//! `[1, 255]`.
//!
//! # Example
//!
//! ```rust
//! use feldman_vss::{CommitmentVector, DefaultBackend, SecretPolynomial};
//!
//! let poly = SecretPolynomial::<DefaultBackend>::from_seed(&[0u8; 32], 2)?;
//! let commitment = poly.commit();
//!
//! let json = serde_json::to_string(&commitment).unwrap();
//! let back: CommitmentVector<DefaultBackend> = serde_json::from_str(&json).unwrap();
//! assert_eq!(back, commitment);
//! # Ok::<(), feldman_vss::Error>(())
//! ```

use serde::de;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use zeroize::Zeroize;

use crate::{
    CommitmentVector, CurvePoint, FieldElement, GroupBackend, PublicShare, Share, ShareIndex,
};

fn index_from_u8<E: de::Error>(index: u8) -> Result<ShareIndex, E> {
    ShareIndex::new(u32::from(index)).map_err(E::custom)
}

impl Serialize for ShareIndex {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(self.get())
    }
}

impl<'de> Deserialize<'de> for ShareIndex {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        index_from_u8(u8::deserialize(deserializer)?)
    }
}

impl<B: GroupBackend> Serialize for Share<B> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("Share", 2)?;
        state.serialize_field("index", &self.index)?;
        state.serialize_field("value", self.to_bytes().as_slice())?;
        state.end()
    }
}

impl<'de, B: GroupBackend> Deserialize<'de> for Share<B> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct ShareHelper {
            index: ShareIndex,
            value: Vec<u8>,
        }

        let mut helper = ShareHelper::deserialize(deserializer)?;
        let value = B::Scalar::from_repr(&helper.value);
        helper.value.zeroize();
        Ok(Share::new(helper.index, value.map_err(de::Error::custom)?))
    }
}

impl<B: GroupBackend> Serialize for PublicShare<B> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("PublicShare", 2)?;
        state.serialize_field("index", &self.index)?;
        state.serialize_field("point", self.point.to_repr().as_slice())?;
        state.end()
    }
}

impl<'de, B: GroupBackend> Deserialize<'de> for PublicShare<B> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct PublicShareHelper {
            index: ShareIndex,
            point: Vec<u8>,
        }

        let helper = PublicShareHelper::deserialize(deserializer)?;
        let point = B::Point::from_repr(&helper.point).map_err(de::Error::custom)?;
        Ok(PublicShare::new(helper.index, point))
    }
}

impl<B: GroupBackend> Serialize for CommitmentVector<B> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("CommitmentVector", 2)?;
        state.serialize_field("threshold", &self.threshold())?;
        state.serialize_field("points", self.to_bytes().as_slice())?;
        state.end()
    }
}

impl<'de, B: GroupBackend> Deserialize<'de> for CommitmentVector<B> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct CommitmentHelper {
            threshold: usize,
            points: Vec<u8>,
        }

        let helper = CommitmentHelper::deserialize(deserializer)?;
        CommitmentVector::from_bytes(&helper.points, helper.threshold).map_err(de::Error::custom)
    }
}
