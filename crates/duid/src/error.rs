use thiserror::Error;

/// Errors raised while building, parsing, formatting or restoring a DUID
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DuidError {
    #[error("cannot create DUID from an absent byte source")]
    NullInput,

    #[error("invalid DUID length: expected between 3 and 130 octets, got {0}")]
    InvalidLength(usize),

    #[error("cannot parse DUID from empty input")]
    EmptyInput,

    #[error("could not parse {0:?} as DUID")]
    UnrecognizedFormat(String),

    #[error("invalid format string: {0:?}")]
    InvalidFormatSpecifier(String),

    #[error("cannot compare DUID with a value of an unrelated type")]
    IncomparableType,

    #[error("could not deserialize unrecognized DUID payload version {0}")]
    UnsupportedVersion(i32),
}
