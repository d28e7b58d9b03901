use crate::{DuidError, DuidFormat, DuidType};
use std::any::Any;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Minimum DUID length in octets (2-octet type code plus at least one octet)
pub const MIN_LEN: usize = 3;

/// Maximum DUID length in octets (2-octet type code plus up to 128 octets)
pub const MAX_LEN: usize = 130;

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// DHCP Unique Identifier as defined in RFC 8415 and RFC 6355
///
/// A `Duid` owns a copy of its octets and never changes after construction,
/// so it can be shared freely between threads.
///
/// Ordering is by length first, then octet by octet. A shorter DUID always
/// sorts before a longer one, whatever its value.
///
/// ```
/// use duid::{Duid, DuidType};
///
/// let duid: Duid = "00:03:00:01:aa:bb:cc:dd:ee:ff".parse().unwrap();
/// assert_eq!(duid.duid_type(), DuidType::LinkLayer);
/// assert_eq!(duid.to_string(), "00:03:00:01:AA:BB:CC:DD:EE:FF");
/// ```
#[derive(Clone)]
pub struct Duid {
    bytes: Box<[u8]>,
    duid_type: DuidType,
    hash_code: u64,
}

impl Duid {
    /// Create a DUID from a copy of the given octets
    pub fn new(bytes: impl AsRef<[u8]>) -> Result<Self, DuidError> {
        Self::from_boxed(Box::from(bytes.as_ref()))
    }

    fn from_boxed(bytes: Box<[u8]>) -> Result<Self, DuidError> {
        if !(MIN_LEN..=MAX_LEN).contains(&bytes.len()) {
            return Err(DuidError::InvalidLength(bytes.len()));
        }

        Ok(Self {
            duid_type: DuidType::from_bytes(&bytes),
            hash_code: compute_hash_code(&bytes),
            bytes,
        })
    }

    /// Get the underlying octets in network order
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Get the DUID type derived from the first two octets
    pub fn duid_type(&self) -> DuidType {
        self.duid_type
    }

    /// Stable hash of the octets, identical across runs and platforms
    pub fn hash_code(&self) -> u64 {
        self.hash_code
    }

    /// Borrow a [`fmt::Display`] adapter rendering this DUID with `format`
    pub fn display(&self, format: DuidFormat) -> Formatted<'_> {
        Formatted {
            bytes: &self.bytes,
            format,
        }
    }

    /// Format with a textual specifier such as `"L-"` (see [`DuidFormat`])
    pub fn to_string_with(&self, format: &str) -> Result<String, DuidError> {
        let format: DuidFormat = format.parse()?;
        Ok(self.display(format).to_string())
    }

    /// Compare against a dynamically typed value
    ///
    /// An absent value sorts before any DUID. Values of any other type
    /// cannot be ordered against a DUID.
    pub fn compare_to_any(&self, other: Option<&dyn Any>) -> Result<Ordering, DuidError> {
        match other {
            None => Ok(Ordering::Greater),
            Some(other) => other
                .downcast_ref::<Duid>()
                .map(|other| self.cmp(other))
                .ok_or(DuidError::IncomparableType),
        }
    }

    /// Equality against a dynamically typed value, `false` for any non-DUID
    pub fn equals_any(&self, other: Option<&dyn Any>) -> bool {
        other
            .and_then(|other| other.downcast_ref::<Duid>())
            .is_some_and(|other| self == other)
    }
}

// FNV-1a, fed one octet at a time
fn compute_hash_code(bytes: &[u8]) -> u64 {
    bytes.iter().fold(FNV_OFFSET_BASIS, |hash, &byte| {
        (hash ^ u64::from(byte)).wrapping_mul(FNV_PRIME)
    })
}

impl TryFrom<&[u8]> for Duid {
    type Error = DuidError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Self::new(bytes)
    }
}

impl TryFrom<Vec<u8>> for Duid {
    type Error = DuidError;

    fn try_from(bytes: Vec<u8>) -> Result<Self, Self::Error> {
        Self::from_boxed(bytes.into_boxed_slice())
    }
}

impl AsRef<[u8]> for Duid {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl PartialEq for Duid {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other) || self.bytes == other.bytes
    }
}

impl Eq for Duid {}

impl Hash for Duid {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash_code);
    }
}

impl Ord for Duid {
    fn cmp(&self, other: &Self) -> Ordering {
        if std::ptr::eq(self, other) {
            return Ordering::Equal;
        }

        // equal lengths compare lexicographically, unsigned
        self.bytes
            .len()
            .cmp(&other.bytes.len())
            .then_with(|| self.bytes.cmp(&other.bytes))
    }
}

impl PartialOrd for Duid {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for Duid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Duid")
            .field("duid_type", &self.duid_type)
            .field("bytes", &format_args!("{}", self))
            .finish()
    }
}

impl fmt::Display for Duid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.display(DuidFormat::default()), f)
    }
}

impl fmt::UpperHex for Duid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.display(DuidFormat::UPPER), f)
    }
}

impl fmt::LowerHex for Duid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.display(DuidFormat::LOWER), f)
    }
}

/// Display adapter returned by [`Duid::display`]
#[derive(Debug, Clone, Copy)]
pub struct Formatted<'a> {
    bytes: &'a [u8],
    format: DuidFormat,
}

impl fmt::Display for Formatted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.width().is_none() && f.precision().is_none() {
            return self.format.write_octets(f, self.bytes);
        }

        // width and fill apply to the whole rendering
        let mut buf = String::with_capacity(self.bytes.len() * 3);
        self.format.write_octets(&mut buf, self.bytes)?;
        f.pad(&buf)
    }
}
