//! Property-based tests for DUID construction, parsing, ordering and hashing.
//!
//! Uses proptest to check that the guarantees hold for arbitrary octets of
//! every valid length.

use duid::Duid;
use proptest::prelude::*;
use std::cmp::Ordering;

const DELIMITERS: [&str; 4] = ["-", ":", " ", ""];

fn duid_bytes() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 3..=130)
}

fn padded(bytes: &[u8], delimiter: &str) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02X}", b))
        .collect::<Vec<_>>()
        .join(delimiter)
}

fn unpadded(bytes: &[u8], delimiter: &str) -> String {
    bytes
        .iter()
        .map(|b| format!("{:X}", b))
        .collect::<Vec<_>>()
        .join(delimiter)
}

// =============================================================================
// Construction and Text Round Trips
// =============================================================================

proptest! {
    /// The byte accessor returns exactly the octets given at construction
    #[test]
    fn prop_bytes_preserved(bytes in duid_bytes()) {
        let duid = Duid::new(&bytes).unwrap();
        prop_assert_eq!(duid.as_bytes(), bytes.as_slice());
    }

    /// Lengths outside 3..=130 are always rejected
    #[test]
    fn prop_invalid_length_rejected(
        bytes in prop_oneof![
            prop::collection::vec(any::<u8>(), 0..3),
            prop::collection::vec(any::<u8>(), 131..300),
        ]
    ) {
        prop_assert!(Duid::new(&bytes).is_err());
    }

    /// Default formatting then parsing reproduces the octets
    #[test]
    fn prop_default_format_round_trip(bytes in duid_bytes()) {
        let duid = Duid::new(&bytes).unwrap();
        let parsed = Duid::parse(&duid.to_string()).unwrap();
        prop_assert_eq!(parsed.as_bytes(), bytes.as_slice());
    }

    /// Every delimiter, padded or not, in either case, parses back to the octets
    #[test]
    fn prop_lenient_parse(bytes in duid_bytes()) {
        for delimiter in DELIMITERS {
            let mut inputs = vec![padded(&bytes, delimiter)];
            if !delimiter.is_empty() {
                inputs.push(unpadded(&bytes, delimiter));
            }
            for input in inputs {
                for input in [input.to_uppercase(), input.to_lowercase()] {
                    let parsed = Duid::parse(&input).unwrap();
                    prop_assert_eq!(parsed.as_bytes(), bytes.as_slice(), "input {:?}", input);
                }
            }
        }
    }
}

// =============================================================================
// Equality, Hash and Ordering
// =============================================================================

proptest! {
    /// Equal values always share a hash code
    #[test]
    fn prop_equal_implies_equal_hash(a in duid_bytes(), b in duid_bytes()) {
        let left = Duid::new(&a).unwrap();
        let right = Duid::new(&b).unwrap();
        let same = Duid::new(&a).unwrap();

        prop_assert_eq!(&left, &same);
        prop_assert_eq!(left.hash_code(), same.hash_code());
        if left == right {
            prop_assert_eq!(left.hash_code(), right.hash_code());
        }
        prop_assert_eq!(left == right, a == b);
    }

    /// Ordering is by length first, then octet by octet
    #[test]
    fn prop_order_length_then_bytes(a in duid_bytes(), b in duid_bytes()) {
        let left = Duid::new(&a).unwrap();
        let right = Duid::new(&b).unwrap();
        let expected = a.len().cmp(&b.len()).then_with(|| a.cmp(&b));

        prop_assert_eq!(left.cmp(&right), expected);
        prop_assert_eq!(right.cmp(&left), expected.reverse());
        prop_assert_eq!(left.cmp(&right) == Ordering::Equal, left == right);
    }

    /// Same-length values order like their octet sequences
    #[test]
    fn prop_order_same_length(
        (a, b) in (3usize..=130).prop_flat_map(|len| (
            prop::collection::vec(any::<u8>(), len),
            prop::collection::vec(any::<u8>(), len),
        ))
    ) {
        let left = Duid::new(&a).unwrap();
        let right = Duid::new(&b).unwrap();
        prop_assert_eq!(left.cmp(&right), a.cmp(&b));
    }
}
