use std::path::PathBuf;

use thiserror::Error;

/// A user-supplied field was rejected before anything was encoded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub(crate) enum ValidationError {
    #[error("Invalid date format! Please use dd/mm/yyyy")]
    Date,
    #[error("Description cannot be empty!")]
    EmptyDescription,
    #[error("Description cannot contain NUL characters!")]
    DescriptionNul,
    #[error("Invalid amount! Must be a positive number.")]
    Amount,
    #[error("Please enter 'I' or 'E'!")]
    Type,
}

#[derive(Debug, Error)]
pub(crate) enum LedgerError {
    #[error("ledger I/O failed on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("corrupt record at byte {offset}: {reason}")]
    CorruptRecord { offset: u64, reason: String },
}

impl LedgerError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn corrupt(offset: u64, reason: impl Into<String>) -> Self {
        Self::CorruptRecord {
            offset,
            reason: reason.into(),
        }
    }
}
