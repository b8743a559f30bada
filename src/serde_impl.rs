//! Serde serialization support for shares.
//!
//! Scalars and curve points are serialized through their compressed byte
//! representations; the commitment vector is serialized as an array of
//! point encodings. Deserializing a share allocates a fresh commitment
//! vector, so shares that travelled separately no longer alias one
//! allocation - equality of contents is what verification relies on.
//!
//! # Example
//!
//! ```rust,ignore
//! let json = serde_json::to_string(&share)?;
//! let share: Share<BlstBackend> = serde_json::from_str(&json)?;
//! ```

use std::sync::Arc;

use serde::de;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::arith::{CurvePoint, FieldElement};
use crate::backend::VssBackend;
use crate::vss::Share;

fn scalar_from_bytes<F, E>(bytes: &[u8]) -> Result<F, E>
where
    F: FieldElement<Repr = Vec<u8>>,
    E: de::Error,
{
    F::from_repr(&bytes.to_vec()).map_err(E::custom)
}

fn point_from_bytes<F, P, E>(bytes: &[u8]) -> Result<P, E>
where
    F: FieldElement,
    P: CurvePoint<F, Repr = Vec<u8>>,
    E: de::Error,
{
    P::from_repr(&bytes.to_vec()).map_err(E::custom)
}

impl<B> Serialize for Share<B>
where
    B: VssBackend,
    B::Scalar: FieldElement<Repr = Vec<u8>>,
    B::Point: CurvePoint<B::Scalar, Repr = Vec<u8>>,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let commitments: Vec<Vec<u8>> = self
            .commitments
            .iter()
            .map(|commitment| commitment.to_repr())
            .collect();

        let mut state = serializer.serialize_struct("Share", 4)?;
        state.serialize_field("index", &(self.index as u64))?;
        state.serialize_field("value1", &self.value1.to_repr())?;
        state.serialize_field("value2", &self.value2.to_repr())?;
        state.serialize_field("commitments", &commitments)?;
        state.end()
    }
}

#[derive(Deserialize)]
struct RawShare {
    index: u64,
    value1: Vec<u8>,
    value2: Vec<u8>,
    commitments: Vec<Vec<u8>>,
}

impl<'de, B> Deserialize<'de> for Share<B>
where
    B: VssBackend,
    B::Scalar: FieldElement<Repr = Vec<u8>>,
    B::Point: CurvePoint<B::Scalar, Repr = Vec<u8>>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawShare::deserialize(deserializer)?;
        if raw.index == 0 {
            return Err(de::Error::custom("share index must be at least 1"));
        }

        let commitments = raw
            .commitments
            .iter()
            .map(|bytes| point_from_bytes::<B::Scalar, B::Point, D::Error>(bytes))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Share {
            index: raw.index as usize,
            value1: scalar_from_bytes::<B::Scalar, D::Error>(&raw.value1)?,
            value2: scalar_from_bytes::<B::Scalar, D::Error>(&raw.value2)?,
            commitments: Arc::new(commitments),
        })
    }
}

#[cfg(all(test, feature = "blst"))]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::backend::BlstBackend;
    use crate::config::{BackendConfig, BackendId, CurveId, VssParameters};
    use crate::vss::{PedersenVss, Share};

    #[test]
    fn share_json_roundtrip() {
        let mut rng = StdRng::seed_from_u64(1);
        let vss = PedersenVss::<BlstBackend>::setup(&mut rng).unwrap();
        let params = VssParameters::new(
            5,
            3,
            BackendConfig::new(BackendId::Blst, CurveId::Bls12_381),
        )
        .unwrap();
        let secret = <BlstBackend as crate::VssBackend>::Scalar::from(1234u64);

        let shares = vss.share_secret(&mut rng, &secret, &params).unwrap();

        let json = serde_json::to_string(&shares[0]).unwrap();
        let decoded: Share<BlstBackend> = serde_json::from_str(&json).unwrap();

        assert_eq!(decoded, shares[0]);
        assert!(vss.verify_share(&decoded));
    }

    #[test]
    fn zero_index_is_rejected() {
        let json = r#"{"index":0,"value1":[],"value2":[],"commitments":[]}"#;
        let decoded: Result<Share<BlstBackend>, _> = serde_json::from_str(json);
        assert!(decoded.is_err());
    }
}
