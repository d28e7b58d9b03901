//! DHCP Unique Identifier (DUID) value type
//!
//! This library implements the DUID as described by RFC 8415 (DHCPv6) and
//! RFC 6355 (DUID-UUID): an immutable sequence of 3 to 130 octets whose first
//! two octets carry the type code. It covers construction, parsing from the
//! usual textual forms, canonical formatting, ordering and hashing. No I/O is
//! performed here.

pub mod duid;
pub mod duid_type;
pub mod error;
pub mod format;
pub mod parse;
pub mod payload;

pub use duid::{Duid, Formatted};
pub use duid_type::DuidType;
pub use error::DuidError;
pub use format::{Delimiter, DuidFormat, LetterCase};
pub use payload::{DuidPayload, SERIALIZABLE_VERSION};
