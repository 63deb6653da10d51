#![deny(clippy::all)]

/**
 * devmap codec
 *
 * Source map v3 data model, Base64 VLQ, a bisecting position consumer and an
 * incremental generator.
 */
pub mod consumer;
mod error;
pub mod generator;
pub mod raw_source_map;
pub mod segment_marker;
pub mod util;
pub mod vlq;


pub use consumer::{SourceLocation, SourceMapConsumer};
pub use error::{Result, SourceMapError};
pub use generator::SourceMapGenerator;
pub use raw_source_map::RawSourceMap;
pub use segment_marker::{Mapping, Position};

/// The only source map revision this crate reads or writes.
pub const VERSION: u32 = 3;
