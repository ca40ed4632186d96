//! Error types for critter-core.
//!
//! This module provides a unified error type for all operations in the
//! critter-core library: emitting capability lines to a writer and
//! resolving species names.

use std::io;
use thiserror::Error;

/// The main error type for critter-core operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A capability line could not be written to the supplied writer.
    #[error("failed to emit {what} line: {source}")]
    Emit {
        /// The capability that was being emitted (e.g. "walk", "speak").
        what: &'static str,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The requested species name does not match any known variant.
    #[error("unknown species '{name}': only 'dog' is available")]
    UnknownSpecies {
        /// The species name that was requested.
        name: String,
    },
}

impl Error {
    /// Create a new `Emit` error for the given capability.
    pub fn emit(what: &'static str, source: io::Error) -> Self {
        Self::Emit { what, source }
    }

    /// Create a new `UnknownSpecies` error for the given name.
    pub fn unknown_species(name: impl Into<String>) -> Self {
        Self::UnknownSpecies { name: name.into() }
    }
}

/// A specialized `Result` type for critter-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let err = Error::emit(
            "walk",
            io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"),
        );
        assert_eq!(err.to_string(), "failed to emit walk line: pipe closed");

        let err = Error::unknown_species("cat");
        assert_eq!(
            err.to_string(),
            "unknown species 'cat': only 'dog' is available"
        );
    }

    #[test]
    fn test_emit_error_keeps_source() {
        use std::error::Error as _;

        let err = Error::emit(
            "speak",
            io::Error::new(io::ErrorKind::WriteZero, "short write"),
        );
        let source = err.source().expect("Emit should carry a source");
        assert!(source.to_string().contains("short write"));
    }
}
