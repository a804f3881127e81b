//! Non-fatal problems found while loading or building a level.
//!
//! None of these stop processing. They are handed to a [`DiagnosticSink`],
//! which can collect them or log them.

use std::fmt;

use log::warn;

use crate::rbsp::LumpKind;

/// Something odd about the input that was worked around.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A lump's length isn't a whole number of records. The trailing bytes are ignored.
    LumpLengthMismatch {
        lump: LumpKind,
        length: usize,
        record_size: usize,
    },

    /// A blob lump's contents describe a different size than its directory entry.
    IncompleteRead {
        lump: LumpKind,
        read: usize,
        length: usize,
    },

    /// A face's surface type can't be turned into geometry. The face is skipped.
    UnsupportedFaceType { face: usize, surface_type: i32 },

    /// A face refers to data that doesn't exist. The face is skipped.
    MalformedFace { face: usize, reason: String },

    /// A face's shader index has no texture entry, so it gets no materials.
    MissingTexture { face: usize, shader: i32 },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Diagnostic::LumpLengthMismatch {
                lump,
                length,
                record_size,
            } => write!(
                f,
                "[{}] Inconsistent length {}, not a multiple of the record size {}",
                lump.name(),
                length,
                record_size
            ),
            Diagnostic::IncompleteRead { lump, read, length } => write!(
                f,
                "[{}] Incorrect number of bytes read ({} of {})",
                lump.name(),
                read,
                length
            ),
            Diagnostic::UnsupportedFaceType { face, surface_type } => {
                write!(f, "[face {}] Unsupported face type: {}", face, surface_type)
            }
            Diagnostic::MalformedFace { face, reason } => {
                write!(f, "[face {}] Skipped: {}", face, reason)
            }
            Diagnostic::MissingTexture { face, shader } => {
                write!(f, "[face {}] No texture with index {}", face, shader)
            }
        }
    }
}

/// Receives diagnostics as they happen.
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

/// Sends every diagnostic to the `log` facade as a warning.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn report(&mut self, diagnostic: Diagnostic) {
        warn!("{}", diagnostic);
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &mut S {
    fn report(&mut self, diagnostic: Diagnostic) {
        (**self).report(diagnostic);
    }
}
