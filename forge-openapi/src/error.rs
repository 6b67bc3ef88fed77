use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The document is not JSON or lacks the parts an OpenAPI document needs.
    #[error("Invalid OpenAPI spec: {0}")]
    Parse(String),

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A selection matched neither an operation label nor an operationId.
    #[error("unknown operation '{0}'")]
    UnknownOperation(String),
}
