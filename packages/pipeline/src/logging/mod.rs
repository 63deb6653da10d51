//! Logging
//!
//! The logger collaborator the source map passes report through.

pub mod console_logger;
pub mod logger;

#[cfg(test)]
mod test;

pub use console_logger::*;
pub use logger::*;
