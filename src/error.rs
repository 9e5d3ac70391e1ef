//! Error types for field specification parsing and record filtering.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Which side of a `start-end` range token failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeSide {
    Start,
    End,
}

impl fmt::Display for RangeSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeSide::Start => write!(f, "start"),
            RangeSide::End => write!(f, "end"),
        }
    }
}

/// Errors produced while parsing a field specification such as `1,3-5`.
///
/// Parsing stops at the first error; no partial specification is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpecError {
    /// The specification text is empty after trimming.
    #[error("empty field list")]
    EmptySpecification,

    /// A token containing `-` did not split into exactly two pieces.
    #[error("malformed range: {token}")]
    MalformedRange { token: String },

    /// One bound of a range token is not an integer.
    #[error("invalid range {side} '{value}' in '{token}'")]
    InvalidRangeBound {
        token: String,
        side: RangeSide,
        value: String,
    },

    /// Range start is greater than range end.
    #[error("range start exceeds end: {token} ({start} > {end})")]
    RangeOrderViolation { token: String, start: i64, end: i64 },

    /// A single-field token is not an integer.
    #[error("invalid field number: {token}")]
    InvalidFieldNumber { token: String },

    /// A single-field token is zero or negative.
    #[error("field number must be positive: {value}")]
    NonPositiveField { value: i64 },
}

/// Errors produced while building a [`Config`](crate::Config).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("the delimiter must not be empty")]
    EmptyDelimiter,
}

/// Errors surfaced by the line filter and the `fieldcut` binary.
#[derive(Debug, Error)]
pub enum CutError {
    #[error(transparent)]
    Spec(#[from] SpecError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("{}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("read error: {0}")]
    Read(#[source] std::io::Error),

    #[error("write error: {0}")]
    Write(#[source] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_echo_token() {
        let err = SpecError::MalformedRange {
            token: "1-3-5".to_string(),
        };
        assert_eq!(err.to_string(), "malformed range: 1-3-5");

        let err = SpecError::InvalidRangeBound {
            token: "-1".to_string(),
            side: RangeSide::Start,
            value: String::new(),
        };
        assert_eq!(err.to_string(), "invalid range start '' in '-1'");

        let err = SpecError::NonPositiveField { value: 0 };
        assert_eq!(err.to_string(), "field number must be positive: 0");
    }

    #[test]
    fn test_spec_error_converts_to_cut_error() {
        let err: CutError = SpecError::EmptySpecification.into();
        assert!(matches!(err, CutError::Spec(SpecError::EmptySpecification)));
        assert_eq!(err.to_string(), "empty field list");
    }
}
