#![deny(clippy::all)]

/**
 * devmap pipeline
 *
 * Source map post-processing for emitted build artifacts
 */
// Re-export codec for convenience
pub use devmap_codec as codec;

pub mod config;
mod error;
pub mod file_system;
pub mod logging;
pub mod pipeline;
pub mod sourcemaps;
pub mod testing;

pub use config::{IgnoreListOption, SourcemapOptions};
pub use error::{Error, Result};
pub use pipeline::finalize_source_map;
