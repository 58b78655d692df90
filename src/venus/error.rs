//! Error types for VENUS96 log extraction.

use thiserror::Error;

/// Errors that can occur while extracting trajectories from a VENUS96 log.
///
/// Line numbers are 1-based and refer to the log being scanned.
#[derive(Debug, Error)]
pub enum Error {
    /// The log layout TOML could not be parsed.
    #[error("failed to parse log layout: {0}")]
    LayoutParse(#[from] toml::de::Error),

    /// The log layout parsed but describes an impossible layout.
    #[error("invalid log layout: {0}")]
    InvalidLayout(String),

    /// A numeric or textual field could not be parsed.
    #[error("malformed VENUS96 output at line {line}: {details}")]
    MalformedInput { line: usize, details: String },

    /// A cycle block was reached before any atomic masses were declared.
    #[error("cycle block at line {line} precedes the atomic masses block")]
    MissingMasses { line: usize },

    /// A cycle block was reached before the number of atoms was declared.
    #[error("cycle block at line {line} precedes the number of atoms")]
    MissingAtomCount { line: usize },

    /// A cycle block was reached before any trajectory was opened.
    #[error("cycle block at line {line} does not belong to any trajectory")]
    OrphanCycle { line: usize },

    /// The log ended in the middle of a block.
    #[error("VENUS96 output ended inside the {context} starting at line {line}")]
    UnexpectedEndOfInput { line: usize, context: &'static str },

    /// Atom counts disagree between headers, masses and frames.
    #[error("inconsistent atom count at line {line}: expected {expected}, found {found}")]
    InconsistentAtomCount {
        line: usize,
        expected: usize,
        found: usize,
    },
}

impl Error {
    pub fn malformed(line: usize, details: impl Into<String>) -> Self {
        Self::MalformedInput {
            line,
            details: details.into(),
        }
    }

    /// Line of the log the error points at, if any.
    pub fn line(&self) -> Option<usize> {
        match self {
            Error::LayoutParse(_) | Error::InvalidLayout(_) => None,
            Error::MalformedInput { line, .. }
            | Error::MissingMasses { line }
            | Error::MissingAtomCount { line }
            | Error::OrphanCycle { line }
            | Error::UnexpectedEndOfInput { line, .. }
            | Error::InconsistentAtomCount { line, .. } => Some(*line),
        }
    }
}
