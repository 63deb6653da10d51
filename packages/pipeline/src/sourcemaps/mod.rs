//! Source Map Post-processing
//!
//! Flattening, content injection, ignore-list annotation and inline emission
//! of source maps for emitted artifacts.

pub mod emit;
pub mod flatten;
pub mod ignore_list;
pub mod inject;
pub mod source_root;


pub use emit::*;
pub use flatten::*;
pub use ignore_list::*;
pub use inject::*;
pub use source_root::*;
