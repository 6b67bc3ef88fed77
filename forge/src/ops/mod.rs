//! Core operations.
//!
//! The business logic for hookforge commands, separated from CLI argument
//! parsing and output rendering.

pub mod batch;
pub mod check;
pub mod generate;
mod sink;

pub use batch::{BatchOptions, batch};
pub use check::check;
pub use generate::generate;
