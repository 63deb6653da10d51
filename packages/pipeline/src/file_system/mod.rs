//! File System Helpers
//!
//! POSIX-form path manipulation and the few disk queries the source map
//! passes need.

pub mod helpers;
pub mod types;
pub mod util;


pub use helpers::*;
pub use types::*;
pub use util::*;
