//! Report data structures for commands.
//!
//! Commands build reports, then render them to an Output target.

mod check;
mod generate;
mod list;
mod output;

pub use check::{CheckReport, FeatureCheck};
pub use generate::{AppendedFile, GenerateReport, GenerationResult, PreviewFragment, WrittenResult};
pub use list::{FeatureListReport, FeatureRow, OperationListReport};
pub use output::{Output, Report, TerminalOutput};
