//! Fragment-based rendering of generated TypeScript.
//!
//! Synthesizers build [`CodeFragment`] trees (usually through
//! [`Renderable`] AST nodes) and [`CodeBuilder`] turns them into text.

mod code_builder;
mod indent;
mod renderable;

pub use code_builder::CodeBuilder;
pub use indent::Indent;
pub use renderable::{CodeFragment, Renderable};
