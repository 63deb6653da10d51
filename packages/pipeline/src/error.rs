use devmap_codec::SourceMapError;
use thiserror::Error;

/// Result type for pipeline operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while post-processing a source map.
#[derive(Debug, Error)]
pub enum Error {
    /// The input map is structurally malformed.
    #[error("invalid source map: {0}")]
    SourceMap(#[from] SourceMapError),

    /// The map could not be serialized.
    #[error("failed to serialize source map: {0}")]
    Serialize(#[from] serde_json::Error),
}
