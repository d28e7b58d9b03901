//! Version-tagged payload used to persist and restore a [`Duid`]
//!
//! Any serializer can store a DUID as two fields, a format version and the
//! raw octets. Restoring goes through the regular length check and rejects
//! versions it does not know.

use crate::{Duid, DuidError};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::debug;

/// Current payload version; bump when the stored fields change
pub const SERIALIZABLE_VERSION: i32 = 0;

/// Two-field persisted form of a DUID
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuidPayload {
    pub version: i32,
    #[serde(default)]
    pub bytes: Option<Vec<u8>>,
}

impl From<&Duid> for DuidPayload {
    fn from(duid: &Duid) -> Self {
        Self {
            version: SERIALIZABLE_VERSION,
            bytes: Some(duid.as_bytes().to_vec()),
        }
    }
}

impl TryFrom<DuidPayload> for Duid {
    type Error = DuidError;

    fn try_from(payload: DuidPayload) -> Result<Self, Self::Error> {
        if payload.version != SERIALIZABLE_VERSION {
            debug!("Rejecting DUID payload with version {}", payload.version);
            return Err(DuidError::UnsupportedVersion(payload.version));
        }

        let bytes = payload.bytes.ok_or(DuidError::NullInput)?;
        Duid::try_from(bytes)
    }
}

impl Serialize for Duid {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        DuidPayload::from(self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Duid {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let payload = DuidPayload::deserialize(deserializer)?;
        Duid::try_from(payload).map_err(serde::de::Error::custom)
    }
}
