//! Errors raised while synthesizing code.

use std::fmt;

use thiserror::Error;

use crate::json::ParseFailure;

/// Result type for codegen operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The artifact a synthesis step was producing when it failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Artifact {
    Response,
    Variables,
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Artifact::Response => f.write_str("response"),
            Artifact::Variables => f.write_str("variables"),
        }
    }
}

#[derive(Debug, Error)]
pub enum Error {
    /// Example text is not parseable, even after the repair pass.
    #[error("failed to parse {artifact} example: {source}")]
    InputParse {
        artifact: Artifact,
        #[source]
        source: ParseFailure,
    },

    /// The type compiler rejected a schema or sample.
    #[error("failed to generate {artifact} types: {message}")]
    SchemaSynthesis { artifact: Artifact, message: String },

    /// Raised by a type compiler; wrapped into `SchemaSynthesis` by callers.
    #[error("{0}")]
    TypeCompile(String),

    /// A pipeline phase failed or left error diagnostics behind.
    #[error("{phase} phase failed: {message}")]
    Pipeline { phase: String, message: String },
}

impl Error {
    /// Attach the failing artifact to a type compiler error.
    pub fn synthesis(artifact: Artifact, err: Error) -> Self {
        match err {
            Error::TypeCompile(message) => Error::SchemaSynthesis { artifact, message },
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_parse_message_carries_both_failures() {
        let err = Error::InputParse {
            artifact: Artifact::Response,
            source: ParseFailure {
                original: "unexpected token".into(),
                repair: "still unexpected".into(),
            },
        };
        assert_eq!(
            err.to_string(),
            "failed to parse response example: Invalid JSON: unexpected token. \
             Repair attempt failed: still unexpected"
        );
    }

    #[test]
    fn test_synthesis_wraps_compile_errors() {
        let err = Error::synthesis(
            Artifact::Variables,
            Error::TypeCompile("unresolved reference '#/definitions/User'".into()),
        );
        assert_eq!(
            err.to_string(),
            "failed to generate variables types: unresolved reference '#/definitions/User'"
        );
    }
}
