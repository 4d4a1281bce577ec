//! Service-level tests for the scaffold and build workflows, run against the
//! in-memory filesystem and the recording command runner.

use std::path::{Path, PathBuf};

use slate_adapters::{MemoryFilesystem, RecordingRunner, builtin_overlay};
use slate_adapters::overlay::SHOPIFY_CONFIG_TEMPLATE;
use slate_core::{
    application::{
        ApplicationError, BuildService, Filesystem, ScaffoldOptions, ScaffoldService,
        ports::OutputMode,
    },
    domain::{BuildMode, BundlerConfig, DomainError},
    error::SlateError,
};

const ROOT: &str = "work";

fn service(fs: &MemoryFilesystem, runner: &RecordingRunner) -> ScaffoldService {
    ScaffoldService::new(
        Box::new(fs.clone()),
        Box::new(runner.clone()),
        builtin_overlay(),
    )
}

fn scaffold(
    fs: &MemoryFilesystem,
    runner: &RecordingRunner,
    name: &str,
    starter: &str,
    options: &ScaffoldOptions,
) -> Result<PathBuf, SlateError> {
    service(fs, runner).scaffold(name, starter, Path::new(ROOT), options)
}

fn seed_local_starter(fs: &MemoryFilesystem) {
    fs.add_file("old-project/package.json", "{ \"name\": \"test-repo\" }");
    fs.add_file("old-project/src/index.js", "export default {};");
    fs.add_file("old-project/node_modules/some-package/index.js", "");
    fs.add_file("old-project/.git/index", "");
    // Exclusions must apply below the top level too.
    fs.add_file("old-project/assets/node_modules/nested/index.js", "");
    fs.add_file("old-project/assets/logo.svg", "<svg/>");
}

// ── remote starters ───────────────────────────────────────────────────────────

#[test]
fn clones_a_theme_from_a_hosted_repository() {
    let fs = MemoryFilesystem::new();
    let runner = RecordingRunner::new();

    scaffold(
        &fs,
        &runner,
        "test-project",
        "shopify/test-repo",
        &ScaffoldOptions { skip_install: true },
    )
    .unwrap();

    let invocations = runner.invocations();
    assert_eq!(invocations.len(), 1);
    assert_eq!(invocations[0].program, "git");
    assert_eq!(
        invocations[0].args,
        vec![
            "clone",
            "git@github.com:shopify/test-repo.git",
            "work/test-project",
            "--single-branch",
        ]
    );
    assert_eq!(invocations[0].output, OutputMode::Suppressed);
    assert_eq!(invocations[0].cwd, None);
}

#[test]
fn clones_with_a_pinned_reference() {
    let fs = MemoryFilesystem::new();
    let runner = RecordingRunner::new();

    scaffold(
        &fs,
        &runner,
        "test-project",
        "shopify/test-repo#123456",
        &ScaffoldOptions { skip_install: true },
    )
    .unwrap();

    let invocations = runner.invocations();
    assert_eq!(
        invocations[0].args,
        vec![
            "clone",
            "-b",
            "123456",
            "git@github.com:shopify/test-repo.git",
            "work/test-project",
            "--single-branch",
        ]
    );
}

#[test]
fn clone_failure_is_fatal_and_halts_the_workflow() {
    let fs = MemoryFilesystem::new();
    let runner = RecordingRunner::new();
    runner.fail_program("git", 128);

    let err = scaffold(
        &fs,
        &runner,
        "test-project",
        "shopify/test-repo",
        &ScaffoldOptions::default(),
    )
    .unwrap_err();

    assert!(matches!(
        err,
        SlateError::Application(ApplicationError::FetchFailed {
            code: Some(128),
            ..
        })
    ));
    // Nothing after the fetch ran: no probe, no install.
    assert_eq!(runner.invocations().len(), 1);
}

// ── local starters ────────────────────────────────────────────────────────────

#[test]
fn copies_a_theme_from_a_local_directory() {
    let fs = MemoryFilesystem::new();
    let runner = RecordingRunner::new();
    seed_local_starter(&fs);

    scaffold(
        &fs,
        &runner,
        "test-project",
        "old-project",
        &ScaffoldOptions { skip_install: true },
    )
    .unwrap();

    assert_eq!(
        fs.read_file(Path::new("work/test-project/package.json")).as_deref(),
        Some("{ \"name\": \"test-repo\" }")
    );
    assert_eq!(
        fs.read_file(Path::new("work/test-project/src/index.js")).as_deref(),
        Some("export default {};")
    );
    assert_eq!(
        fs.read_file(Path::new("work/test-project/assets/logo.svg")).as_deref(),
        Some("<svg/>")
    );
}

#[test]
fn local_copy_excludes_dependency_and_vcs_dirs_at_any_depth() {
    let fs = MemoryFilesystem::new();
    let runner = RecordingRunner::new();
    seed_local_starter(&fs);

    scaffold(
        &fs,
        &runner,
        "test-project",
        "old-project",
        &ScaffoldOptions { skip_install: true },
    )
    .unwrap();

    assert!(!fs.exists(Path::new("work/test-project/node_modules/some-package/index.js")));
    assert!(!fs.exists(Path::new("work/test-project/.git/index")));
    assert!(!fs.exists(Path::new("work/test-project/assets/node_modules/nested/index.js")));
    // Sibling content of an excluded directory still arrives.
    assert!(fs.exists(Path::new("work/test-project/assets/logo.svg")));
}

#[test]
fn missing_local_source_fails_before_creating_the_target() {
    let fs = MemoryFilesystem::new();
    let runner = RecordingRunner::new();

    let err = scaffold(
        &fs,
        &runner,
        "test-project",
        "missing-starter",
        &ScaffoldOptions::default(),
    )
    .unwrap_err();

    assert!(matches!(
        err,
        SlateError::Application(ApplicationError::SourceNotFound { .. })
    ));
    assert!(!fs.exists(Path::new("work/test-project")));
    assert!(runner.invocations().is_empty());
}

#[test]
fn local_source_that_is_a_plain_file_is_rejected() {
    let fs = MemoryFilesystem::new();
    let runner = RecordingRunner::new();
    fs.add_file("starter-file", "not a directory");

    let err = scaffold(
        &fs,
        &runner,
        "test-project",
        "starter-file",
        &ScaffoldOptions::default(),
    )
    .unwrap_err();

    assert!(matches!(
        err,
        SlateError::Application(ApplicationError::SourceNotADirectory { .. })
    ));
    assert!(!fs.exists(Path::new("work/test-project")));
}

// ── overlay ───────────────────────────────────────────────────────────────────

#[test]
fn overlay_is_written_for_remote_starters() {
    let fs = MemoryFilesystem::new();
    let runner = RecordingRunner::new();

    scaffold(
        &fs,
        &runner,
        "test-project",
        "shopify/test-repo",
        &ScaffoldOptions { skip_install: true },
    )
    .unwrap();

    assert_eq!(
        fs.read_file(Path::new("work/test-project/config/shopify.yml")).as_deref(),
        Some(SHOPIFY_CONFIG_TEMPLATE)
    );
}

#[test]
fn overlay_is_written_for_local_starters() {
    let fs = MemoryFilesystem::new();
    let runner = RecordingRunner::new();
    seed_local_starter(&fs);

    scaffold(
        &fs,
        &runner,
        "test-project",
        "old-project",
        &ScaffoldOptions { skip_install: true },
    )
    .unwrap();

    assert!(fs.exists(Path::new("work/test-project/config/shopify.yml")));
}

// ── install step ──────────────────────────────────────────────────────────────

#[test]
fn installs_dependencies_after_scaffolding() {
    let fs = MemoryFilesystem::new();
    let runner = RecordingRunner::new();

    scaffold(
        &fs,
        &runner,
        "test-project",
        "shopify/test-repo",
        &ScaffoldOptions::default(),
    )
    .unwrap();

    let install: Vec<_> = runner
        .invocations()
        .into_iter()
        .filter(|i| i.output == OutputMode::Inherited)
        .collect();
    assert_eq!(install.len(), 1);
    assert_eq!(install[0].program, "yarnpkg");
    assert!(install[0].args.is_empty());
    assert_eq!(install[0].cwd.as_deref(), Some(Path::new("work/test-project")));

    // Ordering: fetch completes before the install starts.
    let invocations = runner.invocations();
    assert_eq!(invocations.first().map(|i| i.program.as_str()), Some("git"));
    assert_eq!(invocations.last().map(|i| i.program.as_str()), Some("yarnpkg"));
}

#[test]
fn falls_back_to_npm_when_yarn_is_unavailable() {
    let fs = MemoryFilesystem::new();
    let runner = RecordingRunner::new();
    runner.fail_program("yarnpkg", 127);

    scaffold(
        &fs,
        &runner,
        "test-project",
        "shopify/test-repo",
        &ScaffoldOptions::default(),
    )
    .unwrap();

    let install: Vec<_> = runner
        .invocations()
        .into_iter()
        .filter(|i| i.output == OutputMode::Inherited)
        .collect();
    assert_eq!(install.len(), 1);
    assert_eq!(install[0].program, "npm");
    assert_eq!(install[0].args, vec!["install"]);
}

#[test]
fn skip_install_runs_no_install_subprocess() {
    let fs = MemoryFilesystem::new();
    let runner = RecordingRunner::new();

    scaffold(
        &fs,
        &runner,
        "test-project",
        "shopify/test-repo",
        &ScaffoldOptions { skip_install: true },
    )
    .unwrap();

    let invocations = runner.invocations();
    assert_eq!(invocations.len(), 1); // just the clone
    assert!(invocations.iter().all(|i| i.output == OutputMode::Suppressed));
}

#[test]
fn install_failure_is_fatal_but_leaves_a_usable_theme() {
    let fs = MemoryFilesystem::new();
    let runner = RecordingRunner::new();
    runner.fail_program("yarnpkg", 127);
    runner.fail_program("npm", 1);

    let err = scaffold(
        &fs,
        &runner,
        "test-project",
        "shopify/test-repo",
        &ScaffoldOptions::default(),
    )
    .unwrap_err();

    assert!(matches!(
        err,
        SlateError::Application(ApplicationError::InstallFailed { .. })
    ));
    // The theme files written before the install remain on disk.
    assert!(fs.exists(Path::new("work/test-project/config/shopify.yml")));
}

// ── validation and conflicts ──────────────────────────────────────────────────

#[test]
fn invalid_theme_name_fails_before_any_side_effect() {
    let fs = MemoryFilesystem::new();
    let runner = RecordingRunner::new();

    let err = scaffold(
        &fs,
        &runner,
        "test project",
        "shopify/test-repo",
        &ScaffoldOptions::default(),
    )
    .unwrap_err();

    assert!(matches!(
        err,
        SlateError::Domain(DomainError::InvalidThemeName { .. })
    ));
    assert!(runner.invocations().is_empty());
    assert!(fs.list_files().is_empty());
}

#[test]
fn conflicting_project_is_rejected_for_remote_starters() {
    let fs = MemoryFilesystem::new();
    let runner = RecordingRunner::new();
    fs.add_file("work/test-project/package.json", "{ \"name\": \"existing\" }");

    let err = scaffold(
        &fs,
        &runner,
        "test-project",
        "shopify/test-repo",
        &ScaffoldOptions::default(),
    )
    .unwrap_err();

    assert!(matches!(
        err,
        SlateError::Application(ApplicationError::ProjectExists { .. })
    ));
    assert!(runner.invocations().is_empty());
    // Existing files are untouched.
    assert_eq!(
        fs.read_file(Path::new("work/test-project/package.json")).as_deref(),
        Some("{ \"name\": \"existing\" }")
    );
}

#[test]
fn conflicting_project_is_rejected_for_local_starters() {
    let fs = MemoryFilesystem::new();
    let runner = RecordingRunner::new();
    seed_local_starter(&fs);
    fs.add_file("work/test-project/package.json", "{ \"name\": \"existing\" }");

    let err = scaffold(
        &fs,
        &runner,
        "test-project",
        "old-project",
        &ScaffoldOptions::default(),
    )
    .unwrap_err();

    assert!(matches!(
        err,
        SlateError::Application(ApplicationError::ProjectExists { .. })
    ));
}

// ── build service ─────────────────────────────────────────────────────────────

#[test]
fn build_runs_the_bundler_with_the_selected_config() {
    let runner = RecordingRunner::new();
    let service = BuildService::new(Box::new(runner.clone()));

    service
        .build(
            &BundlerConfig::new(BuildMode::Production),
            Path::new("work/theme"),
        )
        .unwrap();

    let invocations = runner.invocations();
    assert_eq!(invocations.len(), 1);
    assert_eq!(invocations[0].program, "npx");
    assert_eq!(
        invocations[0].args,
        vec!["webpack", "--config", "tools/webpack/config/prod.js"]
    );
    assert_eq!(invocations[0].output, OutputMode::Inherited);
    assert_eq!(invocations[0].cwd.as_deref(), Some(Path::new("work/theme")));
}

#[test]
fn bundler_failure_surfaces_as_build_failed() {
    let runner = RecordingRunner::new();
    runner.fail_program("npx", 1);
    let service = BuildService::new(Box::new(runner.clone()));

    let err = service
        .build(
            &BundlerConfig::new(BuildMode::Development),
            Path::new("work/theme"),
        )
        .unwrap_err();

    assert!(matches!(
        err,
        SlateError::Application(ApplicationError::BuildFailed { code: Some(1) })
    ));
}
