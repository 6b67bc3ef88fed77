use std::path::PathBuf;

use thiserror::Error;

/// Failure of a destination write or of the external formatter.
///
/// Sink errors never invalidate fragments that were already computed.
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("failed to write to '{path}'")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("formatter `{command}` failed: {message}")]
    Format { command: String, message: String },
}
