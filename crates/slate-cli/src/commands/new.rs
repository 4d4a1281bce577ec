//! Implementation of the `slate new` command.
//!
//! Responsibility: translate CLI arguments into a scaffold invocation, wire
//! up the production adapters, and display results. No business logic lives
//! here.

use tracing::{info, instrument};

use slate_adapters::{LocalFilesystem, SystemRunner, builtin_overlay};
use slate_core::application::{ScaffoldOptions, ScaffoldService};

use crate::{
    cli::{GlobalArgs, NewArgs},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli as _},
    output::OutputManager,
};

/// Execute the `slate new` command.
///
/// Dispatch sequence:
/// 1. Resolve the starter (argument, falling back to configured default)
/// 2. Wire adapters into the core `ScaffoldService`
/// 3. Scaffold; all validation happens inside the service
/// 4. Print next-steps guidance
#[instrument(skip_all, fields(theme = %args.name))]
pub fn execute(
    args: NewArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let starter = resolve_starter(&args, &config);
    let options = ScaffoldOptions {
        skip_install: args.skip_install || config.defaults.skip_install,
    };

    let root = std::env::current_dir().with_cli_context(|| "resolving current directory")?;

    output.header(&format!("Creating '{}' from {starter}...", args.name))?;
    if options.skip_install {
        output.info("Dependency installation will be skipped")?;
    }
    info!(theme = %args.name, starter = %starter, "Scaffold started");

    let service = ScaffoldService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(SystemRunner::new()),
        builtin_overlay(),
    );

    let target = service
        .scaffold(&args.name, &starter, &root, &options)
        .map_err(CliError::Core)?;

    info!(path = %target.display(), "Scaffold completed");

    output.success(&format!("Theme '{}' created!", args.name))?;

    if !global.quiet {
        output.print("")?;
        output.print("Next steps:")?;
        output.print(&format!("  cd {}", args.name))?;
        if options.skip_install {
            output.print("  yarnpkg         # install dependencies")?;
        }
        output.print("  slate build")?;
    }

    Ok(())
}

/// The starter argument wins; otherwise fall back to the configured default.
fn resolve_starter(args: &NewArgs, config: &AppConfig) -> String {
    args.starter
        .clone()
        .unwrap_or_else(|| config.defaults.starter.clone())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
