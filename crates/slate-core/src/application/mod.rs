//! Application layer for Slate.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ScaffoldService, BuildService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All business rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{BuildService, PackageManager, ScaffoldOptions, ScaffoldService};

// Re-export port traits (for adapter implementation)
pub use ports::{
    CommandRunner, CommandStatus, DirEntry, EntryKind, Filesystem, Invocation, OutputMode,
};

pub use error::ApplicationError;
