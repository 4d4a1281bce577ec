//! Scaffold Service - main application orchestrator.
//!
//! This service coordinates the entire scaffolding workflow:
//! 1. Validate the theme name
//! 2. Check for a conflicting project at the target
//! 3. Resolve the starter into a source descriptor
//! 4. Materialize (clone or filtered copy)
//! 5. Write the configuration overlay
//! 6. Install dependencies (unless skipped)
//!
//! It implements the driving port (incoming) and uses driven ports (outgoing).
//!
//! Partial targets are deliberately left on disk when materialization fails;
//! the caller inspects and removes them.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{CommandRunner, EntryKind, Filesystem, OutputMode},
    },
    domain::{
        ConfigOverlay, MANIFEST_MARKER, RemoteSource, SourceDescriptor, ThemeName,
        source::is_excluded,
    },
    error::SlateResult,
};

/// Recognized scaffolding options. Missing options fall back to defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScaffoldOptions {
    /// Skip the dependency-installation step entirely.
    pub skip_install: bool,
}

/// The package manager used for the install step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageManager {
    Yarn,
    Npm,
}

impl PackageManager {
    pub const fn program(&self) -> &'static str {
        match self {
            Self::Yarn => "yarnpkg",
            Self::Npm => "npm",
        }
    }

    /// The install command is the ecosystem default: bare `yarnpkg`, or
    /// `npm install`.
    pub fn install_args(&self) -> Vec<String> {
        match self {
            Self::Yarn => vec![],
            Self::Npm => vec!["install".to_string()],
        }
    }
}

/// Main scaffolding service.
///
/// Orchestrates validation, materialization, overlay and install through the
/// injected ports. One instance handles one target directory at a time.
pub struct ScaffoldService {
    filesystem: Box<dyn Filesystem>,
    runner: Box<dyn CommandRunner>,
    overlay: ConfigOverlay,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    pub fn new(
        filesystem: Box<dyn Filesystem>,
        runner: Box<dyn CommandRunner>,
        overlay: ConfigOverlay,
    ) -> Self {
        Self {
            filesystem,
            runner,
            overlay,
        }
    }

    /// Scaffold a new theme.
    ///
    /// This is the main use case - creates a populated, validated theme
    /// directory at `root/<name>` from the given starter, or fails before
    /// mutating anything beyond what an already-completed step wrote.
    #[instrument(skip_all, fields(theme = %name, starter = %source))]
    pub fn scaffold(
        &self,
        name: &str,
        source: &str,
        root: &Path,
        options: &ScaffoldOptions,
    ) -> SlateResult<PathBuf> {
        // 1. Validate the theme name before touching the filesystem.
        let theme_name = ThemeName::parse(name)?;

        // 2. Conflict check. The manifest marker is the sole signal; a bare
        //    directory without one is not treated as a project.
        let target = root.join(theme_name.as_str());
        if self.filesystem.exists(&target.join(MANIFEST_MARKER)) {
            return Err(ApplicationError::ProjectExists { path: target }.into());
        }

        // 3. Resolve the starter into a descriptor, once.
        let descriptor =
            SourceDescriptor::parse(source, |path| self.filesystem.exists(path))?;
        if let SourceDescriptor::Local(path) = &descriptor {
            if !self.filesystem.exists(path) {
                return Err(ApplicationError::SourceNotFound { path: path.clone() }.into());
            }
            if !self.filesystem.is_dir(path) {
                return Err(ApplicationError::SourceNotADirectory { path: path.clone() }.into());
            }
        }
        debug!(descriptor = %descriptor, "Starter resolved");

        // 4. Materialize the starter into the target.
        match &descriptor {
            SourceDescriptor::Remote(remote) => self.fetch_remote(remote, &target)?,
            SourceDescriptor::Local(path) => self.copy_local(path, &target)?,
        }

        // 5. Overlay the packaged store configuration, for both source kinds.
        self.write_overlay(&target)?;

        // 6. Install dependencies.
        if options.skip_install {
            info!("Skipping dependency installation");
        } else {
            self.install_dependencies(&target)?;
        }

        info!(path = %target.display(), "Scaffold completed");
        Ok(target)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    /// Shallow, single-branch clone of the starter repository into `target`.
    ///
    /// The conflict check guarantees the fetch is never invoked against an
    /// existing project; git creates the target directory itself. Output is
    /// suppressed - clone progress is noise during scaffolding.
    fn fetch_remote(&self, remote: &RemoteSource, target: &Path) -> SlateResult<()> {
        info!(repository = %remote, "Cloning starter repository");

        let args = remote.clone_args(target);
        let status = self
            .runner
            .run("git", &args, None, OutputMode::Suppressed)?;

        if !status.success {
            return Err(ApplicationError::FetchFailed {
                repository: remote.to_string(),
                code: status.code,
            }
            .into());
        }
        Ok(())
    }

    /// Recursively copy the starter tree, filtering excluded segments at
    /// every nesting depth.
    fn copy_local(&self, source: &Path, target: &Path) -> SlateResult<()> {
        info!(source = %source.display(), "Copying local starter");
        self.filesystem.create_dir_all(target)?;
        self.copy_tree(source, target)
    }

    fn copy_tree(&self, from: &Path, to: &Path) -> SlateResult<()> {
        for entry in self.filesystem.list_dir(from)? {
            if is_excluded(&entry.name) {
                debug!(entry = %entry.name, "Excluded from copy");
                continue;
            }

            let src = from.join(&entry.name);
            let dst = to.join(&entry.name);
            match entry.kind {
                EntryKind::Directory => {
                    self.filesystem.create_dir_all(&dst)?;
                    self.copy_tree(&src, &dst)?;
                }
                EntryKind::File => self.filesystem.copy_file(&src, &dst)?,
                EntryKind::Other => {
                    warn!(path = %src.display(), "Skipping special file");
                }
            }
        }
        Ok(())
    }

    /// Copy the packaged configuration overlay into the theme,
    /// unconditionally.
    fn write_overlay(&self, target: &Path) -> SlateResult<()> {
        let dest = self.overlay.destination(target);
        if let Some(parent) = dest.parent() {
            self.filesystem.create_dir_all(parent)?;
        }
        self.filesystem.write_file(&dest, self.overlay.content())
    }

    /// Run the ecosystem-default install command in the target directory.
    ///
    /// Output is inherited so the user sees live install progress. A failed
    /// install does not roll back the already-written theme files.
    fn install_dependencies(&self, target: &Path) -> SlateResult<()> {
        let manager = self.detect_package_manager();
        info!(manager = manager.program(), "Installing theme dependencies");

        let status = self.runner.run(
            manager.program(),
            &manager.install_args(),
            Some(target),
            OutputMode::Inherited,
        )?;

        if !status.success {
            return Err(ApplicationError::InstallFailed {
                manager: manager.program().to_string(),
                code: status.code,
            }
            .into());
        }
        Ok(())
    }

    /// Prefer yarn when it is installed, matching the ecosystem default.
    /// The probe's own failure (missing binary) just means npm.
    fn detect_package_manager(&self) -> PackageManager {
        let probe = self.runner.run(
            "yarnpkg",
            &["--version".to_string()],
            None,
            OutputMode::Suppressed,
        );
        match probe {
            Ok(status) if status.success => PackageManager::Yarn,
            _ => PackageManager::Npm,
        }
    }
}
