//! Textual rendering of DUIDs
//!
//! A format specifier has at most two characters:
//!
//! | Specifier         | Output          |
//! |-------------------|-----------------|
//! | `""`, `":"`, `"U:"` | `12:34:AB:CD` |
//! | `"L:"`            | `12:34:ab:cd`   |
//! | `"-"`, `"U-"`     | `12-34-AB-CD`   |
//! | `"L-"`            | `12-34-ab-cd`   |
//! | `"U"`             | `1234ABCD`      |
//! | `"L"`             | `1234abcd`      |
//!
//! Letters are case-insensitive. Every octet is written as exactly two hex
//! digits and the delimiter only appears between octets.

use crate::DuidError;
use std::fmt;
use std::str::FromStr;

const UPPER_DIGITS: &[u8; 16] = b"0123456789ABCDEF";
const LOWER_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Letter case of the hex digits A-F
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LetterCase {
    #[default]
    Upper,
    Lower,
}

impl LetterCase {
    fn digits(self) -> &'static [u8; 16] {
        match self {
            Self::Upper => UPPER_DIGITS,
            Self::Lower => LOWER_DIGITS,
        }
    }
}

/// Separator written between octets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Delimiter {
    Colon,
    Dash,
}

impl Delimiter {
    pub fn as_char(self) -> char {
        match self {
            Self::Colon => ':',
            Self::Dash => '-',
        }
    }

    fn from_char(c: char) -> Option<Self> {
        match c {
            ':' => Some(Self::Colon),
            '-' => Some(Self::Dash),
            _ => None,
        }
    }
}

/// Parsed format specifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DuidFormat {
    case: LetterCase,
    delimiter: Option<Delimiter>,
}

impl DuidFormat {
    /// `U:`, the default
    pub const UPPER_COLON: Self = Self::new(LetterCase::Upper, Some(Delimiter::Colon));
    /// `U`
    pub const UPPER: Self = Self::new(LetterCase::Upper, None);
    /// `L`
    pub const LOWER: Self = Self::new(LetterCase::Lower, None);

    pub const fn new(case: LetterCase, delimiter: Option<Delimiter>) -> Self {
        Self { case, delimiter }
    }

    pub fn case(&self) -> LetterCase {
        self.case
    }

    pub fn delimiter(&self) -> Option<Delimiter> {
        self.delimiter
    }

    /// Write `bytes` as hex octets
    pub fn write_octets<W: fmt::Write>(&self, out: &mut W, bytes: &[u8]) -> fmt::Result {
        let digits = self.case.digits();
        for (i, byte) in bytes.iter().enumerate() {
            if i > 0 {
                if let Some(delimiter) = self.delimiter {
                    out.write_char(delimiter.as_char())?;
                }
            }
            out.write_char(char::from(digits[usize::from(byte >> 4)]))?;
            out.write_char(char::from(digits[usize::from(byte & 0x0F)]))?;
        }
        Ok(())
    }
}

impl Default for DuidFormat {
    fn default() -> Self {
        Self::UPPER_COLON
    }
}

impl FromStr for DuidFormat {
    type Err = DuidError;

    fn from_str(specifier: &str) -> Result<Self, Self::Err> {
        let invalid = || DuidError::InvalidFormatSpecifier(specifier.to_string());

        let mut chars = specifier.chars();
        let format = match (chars.next(), chars.next(), chars.next()) {
            (None, _, _) => Self::default(),
            (Some(c), None, _) => match c {
                'U' | 'u' => Self::UPPER,
                'L' | 'l' => Self::LOWER,
                _ => match Delimiter::from_char(c) {
                    Some(delimiter) => Self::new(LetterCase::Upper, Some(delimiter)),
                    None => return Err(invalid()),
                },
            },
            (Some(case), Some(delimiter), None) => {
                let case = match case {
                    'U' | 'u' => LetterCase::Upper,
                    'L' | 'l' => LetterCase::Lower,
                    _ => return Err(invalid()),
                };
                match Delimiter::from_char(delimiter) {
                    Some(delimiter) => Self::new(case, Some(delimiter)),
                    None => return Err(invalid()),
                }
            }
            _ => return Err(invalid()),
        };

        Ok(format)
    }
}
