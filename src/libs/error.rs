//! Error taxonomy shared by the task tracker and the input helpers.
//!
//! Recoverable failures (validation, unknown records, authorization) are
//! reported to the user and the menu loop carries on. `StorageUnavailable`
//! is the one variant that command handlers let escape to `main`.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// Malformed, wrong-length or non-numeric input.
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("User '{0}' does not exist")]
    UnknownUser(String),

    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Task cannot be edited (already complete)")]
    AlreadyCompleted,

    #[error("Only {0} can perform this action")]
    Unauthorized(String),

    #[error("Username '{0}' already exists")]
    DuplicateUser(String),

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Task {0} not found")]
    TaskNotFound(u32),

    #[error("No task ids left in the tasks file")]
    TaskIdsExhausted,

    #[error("Storage unavailable at {}: {source}", path.display())]
    StorageUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write records to {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

impl AppError {
    pub fn storage(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AppError::StorageUnavailable { path: path.into(), source }
    }

    pub fn csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        if !source.is_io_error() {
            return AppError::Csv { path: path.into(), source };
        }
        match source.into_kind() {
            csv::ErrorKind::Io(source) => AppError::StorageUnavailable { path: path.into(), source },
            kind => AppError::storage(path, std::io::Error::other(format!("{:?}", kind))),
        }
    }

    /// True for failures that should abort the process instead of re-prompting.
    pub fn is_fatal(&self) -> bool {
        matches!(self, AppError::StorageUnavailable { .. } | AppError::Csv { .. })
    }
}
