//! Build Service - bundler invocation.
//!
//! Thin orchestration around one external bundler run: resolve the
//! invocation plan from an explicit [`BundlerConfig`], run it to completion
//! with inherited stdio, and translate a non-zero exit into a fatal error.

use std::path::Path;

use tracing::{info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{CommandRunner, OutputMode},
    },
    domain::BundlerConfig,
    error::SlateResult,
};

/// Runs the ecosystem bundler for a theme project.
pub struct BuildService {
    runner: Box<dyn CommandRunner>,
}

impl BuildService {
    pub fn new(runner: Box<dyn CommandRunner>) -> Self {
        Self { runner }
    }

    /// Build the theme at `project_root` with the given bundler config.
    ///
    /// Blocks until the bundler exits. Compilation output streams directly
    /// to the user's terminal.
    #[instrument(skip_all, fields(mode = %config.mode()))]
    pub fn build(&self, config: &BundlerConfig, project_root: &Path) -> SlateResult<()> {
        info!(config_file = config.config_path(), "Starting bundler");

        let status = self.runner.run(
            config.program(),
            &config.args(),
            Some(project_root),
            OutputMode::Inherited,
        )?;

        if !status.success {
            return Err(ApplicationError::BuildFailed { code: status.code }.into());
        }

        info!("Bundle completed");
        Ok(())
    }
}
