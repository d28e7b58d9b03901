use serde::{Deserialize, Serialize};
use std::fmt;

/// DUID type as defined in RFC 8415 section 11 and RFC 6355
///
/// Only the codes `0x0001`-`0x0004` are assigned. The reserved `0x0000` and
/// every code from `0x0005` up map to [`DuidType::Undefined`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DuidType {
    #[default]
    Undefined,
    /// Link-layer address plus time (DUID-LLT)
    LinkLayerPlusTime,
    /// Vendor-assigned unique ID based on Enterprise Number (DUID-EN)
    VendorAssigned,
    /// Link-layer address (DUID-LL)
    LinkLayer,
    /// Universally Unique Identifier (DUID-UUID)
    Uuid,
}

impl DuidType {
    /// Map a 2-octet type code to its DUID type
    pub fn from_type_code(code: u16) -> Self {
        match code {
            0x0001 => Self::LinkLayerPlusTime,
            0x0002 => Self::VendorAssigned,
            0x0003 => Self::LinkLayer,
            0x0004 => Self::Uuid,
            _ => Self::Undefined,
        }
    }

    /// Classify a DUID from its leading two octets (big endian)
    pub fn from_bytes(bytes: &[u8]) -> Self {
        match bytes {
            [high, low, ..] => Self::from_type_code(u16::from_be_bytes([*high, *low])),
            _ => Self::Undefined,
        }
    }

    /// The assigned type code, `None` for [`DuidType::Undefined`]
    pub fn type_code(self) -> Option<u16> {
        match self {
            Self::Undefined => None,
            Self::LinkLayerPlusTime => Some(0x0001),
            Self::VendorAssigned => Some(0x0002),
            Self::LinkLayer => Some(0x0003),
            Self::Uuid => Some(0x0004),
        }
    }
}

impl fmt::Display for DuidType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Undefined => "Undefined",
            Self::LinkLayerPlusTime => "DUID-LLT",
            Self::VendorAssigned => "DUID-EN",
            Self::LinkLayer => "DUID-LL",
            Self::Uuid => "DUID-UUID",
        };
        f.write_str(name)
    }
}
