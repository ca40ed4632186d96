//! Behavioral capability traits.
//!
//! A capability is a contract a variant may satisfy independently of the
//! base `Animal` record. Each capability requires one operation that
//! writes a fixed description line to a caller-supplied writer, and
//! provides a convenience method that emits the same line on standard
//! output. Capabilities share no state, so a variant satisfies any
//! combination of them by providing the required operations.

use crate::error::{Error, Result};
use std::io::{self, Write};

/// The "can walk" capability.
pub trait Walkable {
    /// Write the locomotion description, followed by a newline, to `out`.
    ///
    /// # Errors
    ///
    /// Returns `Error::Emit` if the writer fails.
    fn walk_to(&self, out: &mut dyn Write) -> Result<()>;

    /// Emit the locomotion description on standard output.
    ///
    /// A failed stdout write is ignored; there is no caller that could
    /// act on it.
    fn walk(&self) {
        let _ = self.walk_to(&mut io::stdout().lock());
    }
}

/// The "can speak" capability.
pub trait Speaks {
    /// Write the sound description, followed by a newline, to `out`.
    ///
    /// # Errors
    ///
    /// Returns `Error::Emit` if the writer fails.
    fn speak_to(&self, out: &mut dyn Write) -> Result<()>;

    /// Emit the sound description on standard output.
    ///
    /// A failed stdout write is ignored; there is no caller that could
    /// act on it.
    fn speak(&self) {
        let _ = self.speak_to(&mut io::stdout().lock());
    }
}

/// Write a single capability line to `out`, mapping writer failures to
/// `Error::Emit` tagged with the capability name.
pub(crate) fn emit_line(out: &mut dyn Write, what: &'static str, line: &str) -> Result<()> {
    writeln!(out, "{line}").map_err(|source| Error::emit(what, source))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A writer that always fails.
    struct BrokenWriter;

    impl Write for BrokenWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_emit_line_writes_line_with_newline() {
        let mut out = Vec::new();
        emit_line(&mut out, "walk", "Walks on 4 legs on land!").unwrap();
        assert_eq!(out, b"Walks on 4 legs on land!\n");
    }

    #[test]
    fn test_emit_line_maps_writer_failure() {
        let mut out = BrokenWriter;
        let result = emit_line(&mut out, "speak", "Bark!!");

        match result {
            Err(Error::Emit { what, .. }) => assert_eq!(what, "speak"),
            other => panic!("expected Emit error, got {:?}", other),
        }
    }
}
