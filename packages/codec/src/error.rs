use thiserror::Error;

/// Result type for codec operations.
pub type Result<T> = std::result::Result<T, SourceMapError>;

/// Structural problems found while reading or building a source map.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SourceMapError {
    #[error("unsupported source map version: {0}")]
    UnsupportedVersion(u32),

    #[error("invalid base64 VLQ character {0:?} in mappings")]
    InvalidBase64(char),

    #[error("unterminated VLQ sequence in segment {0:?}")]
    UnterminatedVlq(String),

    #[error("segment {0:?} has a source but no original line and column")]
    IncompleteSegment(String),

    #[error("source index {index} is out of bounds ({len} sources)")]
    SourceIndexOutOfBounds { index: i64, len: usize },

    #[error("name index {index} is out of bounds ({len} names)")]
    NameIndexOutOfBounds { index: i64, len: usize },

    #[error("{field} out of range ({value}) in segment {segment:?}")]
    ValueOutOfRange {
        field: &'static str,
        value: i64,
        segment: String,
    },

    #[error("invalid mapping: {0}")]
    InvalidMapping(String),
}
