//! Implementation of the `slate build` command.
//!
//! The mode flag is converted to a core value and threaded explicitly into
//! the bundler configuration; the bundler itself runs with inherited stdio.

use tracing::{info, instrument};

use slate_adapters::SystemRunner;
use slate_core::{
    application::BuildService,
    domain::{BuildMode as CoreMode, BundlerConfig},
};

use crate::{
    cli::{BuildArgs, BuildMode, GlobalArgs},
    error::{CliError, CliResult, IntoCli as _},
    output::OutputManager,
};

/// Execute the `slate build` command in the current directory.
#[instrument(skip_all, fields(mode = %args.mode))]
pub fn execute(args: BuildArgs, _global: GlobalArgs, output: OutputManager) -> CliResult<()> {
    let root = std::env::current_dir().with_cli_context(|| "resolving current directory")?;
    let config = BundlerConfig::new(convert_mode(args.mode));

    output.header(&format!("Building theme ({} mode)...", args.mode))?;
    info!(root = %root.display(), "Build started");

    let service = BuildService::new(Box::new(SystemRunner::new()));
    service.build(&config, &root).map_err(CliError::Core)?;

    output.success("Build completed")?;
    Ok(())
}

// ── Type conversions CLI → core ───────────────────────────────────────────────

fn convert_mode(mode: BuildMode) -> CoreMode {
    match mode {
        BuildMode::Development => CoreMode::Development,
        BuildMode::Production => CoreMode::Production,
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
