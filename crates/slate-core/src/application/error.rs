//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// A theme project already exists at the target location.
    ///
    /// Detected by the manifest marker; nothing at the target is touched.
    #[error("a theme already exists at {}", path.display())]
    ProjectExists { path: PathBuf },

    /// A local starter path does not exist on the filesystem.
    #[error("starter path does not exist: {}", path.display())]
    SourceNotFound { path: PathBuf },

    /// A local starter path exists but is not a directory.
    #[error("starter path is not a directory: {}", path.display())]
    SourceNotADirectory { path: PathBuf },

    /// The version-control fetch subprocess exited non-zero.
    #[error("failed to clone starter repository '{repository}'")]
    FetchFailed {
        repository: String,
        code: Option<i32>,
    },

    /// Filesystem operation failed mid-materialization or elsewhere.
    #[error("filesystem operation failed at {}: {reason}", path.display())]
    FilesystemError { path: PathBuf, reason: String },

    /// A subprocess could not be started at all (program missing, etc.).
    #[error("failed to run '{command}': {reason}")]
    CommandSpawnFailed { command: String, reason: String },

    /// Dependency installation exited non-zero.
    ///
    /// The theme files are already valid on disk at this point; the message
    /// must make clear the project is usable, just not installed.
    #[error(
        "'{manager}' failed while installing dependencies; the theme files were created and are usable, but its dependencies are not installed"
    )]
    InstallFailed {
        manager: String,
        code: Option<i32>,
    },

    /// The bundler subprocess exited non-zero.
    #[error("bundler build failed")]
    BuildFailed { code: Option<i32> },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ProjectExists { path } => vec![
                format!("'{}' already contains a theme project", path.display()),
                "Choose a different theme name".into(),
                "Or remove the existing directory first".into(),
            ],
            Self::SourceNotFound { path } => vec![
                format!("No directory found at '{}'", path.display()),
                "Check the starter path for typos".into(),
                "For hosted starters, use the owner/name form".into(),
            ],
            Self::SourceNotADirectory { path } => vec![
                format!("'{}' is a file, not a theme directory", path.display()),
                "Point the starter at the root of a theme project".into(),
            ],
            Self::FetchFailed { repository, .. } => vec![
                format!("Could not clone '{}'", repository),
                "Check that the repository exists and you have access to it".into(),
                "Check your network connection and git SSH credentials".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Partially written files may remain; inspect and remove the target".into(),
            ],
            Self::CommandSpawnFailed { command, .. } => vec![
                format!("Could not start '{}'", command),
                "Ensure the command is installed and in your PATH".into(),
            ],
            Self::InstallFailed { manager, .. } => vec![
                "The theme was created successfully".into(),
                format!("Re-run the install manually: cd into the theme and run '{}'", manager),
            ],
            Self::BuildFailed { .. } => vec![
                "The bundler reported compilation errors".into(),
                "Check the build output above for details".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ProjectExists { .. } => ErrorCategory::Conflict,
            Self::SourceNotFound { .. } => ErrorCategory::NotFound,
            Self::SourceNotADirectory { .. } => ErrorCategory::Validation,
            Self::FetchFailed { .. }
            | Self::CommandSpawnFailed { .. }
            | Self::InstallFailed { .. }
            | Self::BuildFailed { .. } => ErrorCategory::External,
            Self::FilesystemError { .. } => ErrorCategory::Internal,
        }
    }
}
