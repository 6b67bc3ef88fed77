//! TypeScript AST builders for declarations, functions, objects, and imports.
//!
//! These provide a high-level API for constructing TypeScript syntax,
//! which can then be rendered via CodeBuilder.

mod consts;
mod fns;
mod imports;
mod interface;
mod objects;
mod types;

pub use consts::Const;
pub use fns::{ConstFn, Param};
pub use imports::Import;
pub use interface::{Interface, InterfaceField};
pub use objects::{ArrowFn, JsObject, Property, PropertyValue};
pub use types::{TypeAlias, Union};
