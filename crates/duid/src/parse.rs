//! Parsing DUIDs from text
//!
//! Two syntaxes are accepted, both case-insensitive and surrounded by
//! optional whitespace:
//!
//! - delimited octets, e.g. `00:01:0a:ff` or `0-1-A-FF`: one or two hex digits
//!   per octet, separated by a single `-`, `:` or space used consistently;
//! - undelimited octets, e.g. `00010AFF`: exactly two hex digits per octet.

use crate::duid::{MAX_LEN, MIN_LEN};
use crate::{Duid, DuidError};
use std::str::FromStr;
use tracing::trace;

const DELIMITERS: [u8; 3] = [b'-', b':', b' '];

/// Fewest groups the delimited syntax recognizes; shorter results are
/// rejected by the length check
const MIN_DELIMITED_GROUPS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Grammar {
    Delimited,
    Undelimited,
}

impl Grammar {
    fn recognize(text: &[u8]) -> Option<Self> {
        if is_delimited(text) {
            Some(Self::Delimited)
        } else if is_undelimited(text) {
            Some(Self::Undelimited)
        } else {
            None
        }
    }

    fn decode(self, text: &[u8]) -> Vec<u8> {
        match self {
            Self::Delimited => decode_delimited(text),
            Self::Undelimited => decode_undelimited(text),
        }
    }
}

impl Duid {
    /// Parse a DUID from its delimited or undelimited hex representation
    pub fn parse(input: &str) -> Result<Self, DuidError> {
        if input.is_empty() {
            return Err(DuidError::EmptyInput);
        }

        let trimmed = input.trim();
        let text = trimmed.as_bytes();
        let grammar = Grammar::recognize(text)
            .ok_or_else(|| DuidError::UnrecognizedFormat(input.to_string()))?;

        Duid::try_from(grammar.decode(text))
    }

    /// Parse a DUID, returning `None` on any failure
    pub fn try_parse(input: &str) -> Option<Self> {
        match Self::parse(input) {
            Ok(duid) => Some(duid),
            Err(e) => {
                trace!("Discarding DUID parse failure for {:?}: {}", input, e);
                None
            }
        }
    }
}

impl FromStr for Duid {
    type Err = DuidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Groups of 1-2 hex digits separated by one delimiter character, the same
/// one throughout, with no leading or trailing delimiter
fn is_delimited(text: &[u8]) -> bool {
    let mut delimiter = None;
    let mut groups = 0;
    let mut digits = 0;

    for &c in text {
        if c.is_ascii_hexdigit() {
            digits += 1;
            if digits > 2 {
                return false;
            }
            continue;
        }

        if digits == 0 {
            return false;
        }
        match delimiter {
            None if DELIMITERS.contains(&c) => delimiter = Some(c),
            Some(d) if d == c => {}
            _ => return false,
        }
        groups += 1;
        digits = 0;
    }

    if digits == 0 || delimiter.is_none() {
        return false;
    }
    groups += 1;

    (MIN_DELIMITED_GROUPS..=MAX_LEN).contains(&groups)
}

/// An even number of hex digits covering 3 to 130 octets
fn is_undelimited(text: &[u8]) -> bool {
    text.len() % 2 == 0
        && (MIN_LEN * 2..=MAX_LEN * 2).contains(&text.len())
        && text.iter().all(u8::is_ascii_hexdigit)
}

// A digit followed by another digit is a full octet; a digit followed by
// anything else stands alone with an implied leading zero.
fn decode_delimited(text: &[u8]) -> Vec<u8> {
    let mut octets = Vec::with_capacity((text.len() + 1) / 2);
    let mut i = 0;

    while i < text.len() {
        let digit = hex_value(text[i]);
        match text.get(i + 1) {
            None => {
                octets.push(digit);
                break;
            }
            Some(&next) if next.is_ascii_hexdigit() => {
                octets.push((digit << 4) | hex_value(next));
                i += 1;
            }
            Some(_) => octets.push(digit),
        }
        // skip the delimiter
        i += 2;
    }

    octets
}

fn decode_undelimited(text: &[u8]) -> Vec<u8> {
    text.chunks_exact(2)
        .map(|pair| (hex_value(pair[0]) << 4) | hex_value(pair[1]))
        .collect()
}

fn hex_value(c: u8) -> u8 {
    debug_assert!(c.is_ascii_hexdigit());
    match c {
        b'0'..=b'9' => c - b'0',
        b'a'..=b'f' => c - b'a' + 10,
        b'A'..=b'F' => c - b'A' + 10,
        _ => 0,
    }
}
