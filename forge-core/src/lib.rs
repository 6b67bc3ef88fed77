//! Core utilities and types for the hookforge code generator.
//!
//! This crate provides the string helpers shared by every generator and
//! the side-effecting sinks (destination files and the external formatter).

mod error;
mod file;
mod format;
mod utils;

pub use error::SinkError;
// File operations
pub use file::{File, WriteResult};
pub use format::Formatter;
// String utilities
pub use utils::{lower_first, to_pascal_case, upper_first};
