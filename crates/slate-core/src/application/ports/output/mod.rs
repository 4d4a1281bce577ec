//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `slate-adapters` crate provides implementations.

use std::path::{Path, PathBuf};

use crate::error::SlateResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `slate_adapters::filesystem::LocalFilesystem` (production)
/// - `slate_adapters::filesystem::MemoryFilesystem` (testing)
pub trait Filesystem: Send + Sync {
    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Check if path exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> SlateResult<()>;

    /// Write content to a file.
    fn write_file(&self, path: &Path, content: &str) -> SlateResult<()>;

    /// Copy a single file.
    fn copy_file(&self, from: &Path, to: &Path) -> SlateResult<()>;

    /// List the immediate children of a directory.
    fn list_dir(&self, path: &Path) -> SlateResult<Vec<DirEntry>>;
}

/// One entry returned by [`Filesystem::list_dir`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    /// File name of the entry (no path components).
    pub name: String,
    pub kind: EntryKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
    /// Symlinks, sockets, devices. Skipped during materialization.
    Other,
}

/// How a subprocess's output streams are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Output is piped away from the user's terminal (fetch subprocesses).
    Suppressed,
    /// Output streams to the user's terminal live (install, bundler).
    Inherited,
}

/// Exit information from a completed subprocess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandStatus {
    pub success: bool,
    /// Exit code, if the process exited normally.
    pub code: Option<i32>,
}

/// Port for running external commands.
///
/// The invocation blocks until the subprocess completes. Failure to *spawn*
/// (program missing, permission denied) is an `Err`; a subprocess that ran
/// and exited non-zero is an `Ok` with `success == false` — callers decide
/// what a non-zero exit means for their step.
///
/// Implemented by:
/// - `slate_adapters::process::SystemRunner` (production)
/// - `slate_adapters::process::RecordingRunner` (testing)
pub trait CommandRunner: Send + Sync {
    fn run(
        &self,
        program: &str,
        args: &[String],
        cwd: Option<&Path>,
        output: OutputMode,
    ) -> SlateResult<CommandStatus>;
}

/// Recorded form of one invocation, shared by test doubles and tracing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: Option<PathBuf>,
    pub output: OutputMode,
}
