//! Lint command - collect, lint and report

use std::path::Path;

use pylint_vcs::adapters::{PylintLinter, default_registry, pylint};
use pylint_vcs::config::{LoadedConfig, RunConfig};
use pylint_vcs::output::{OutputMode, RunStatus};
use pylint_vcs::pipeline::{RunRequest, execute};
use pylint_vcs::session::SessionOptions;

use crate::cli::Cli;

/// Lint the requested paths and print the report
pub fn lint(cli: Cli, mode: OutputMode) -> anyhow::Result<RunStatus> {
    let cwd = std::env::current_dir()?;
    let loaded = RunConfig::discover(cli.config.as_deref(), &cwd)?;

    let command = cli
        .pylint_command
        .clone()
        .or_else(|| loaded.as_ref().and_then(|l| l.config.lint.command.clone()))
        .unwrap_or_else(|| pylint::DEFAULT_PROGRAM.to_string());
    let request = build_request(cli, loaded.as_ref(), &cwd);

    let linter = PylintLinter::from_command_line(&command);
    let report = execute(&request, &default_registry(), &linter)?;
    report.render(mode);
    Ok(report.status())
}

/// Merge CLI flags over the run config
///
/// Booleans are OR-ed, values given on the command line win.
fn build_request(cli: Cli, loaded: Option<&LoadedConfig>, cwd: &Path) -> RunRequest {
    let file = loaded.map(|l| l.config.lint.clone()).unwrap_or_default();

    RunRequest {
        paths: cli.paths,
        options: SessionOptions {
            pylint: cli.pylint || file.pylint,
            vcs: cli.pylint_vcs || file.vcs,
            no_pylint: cli.no_pylint,
            no_vcs: cli.pylint_no_vcs,
            rcfile: cli.pylint_rcfile.or(file.rcfile),
            config_dir: loaded.map(|l| l.dir().to_path_buf()),
            cwd: cwd.to_path_buf(),
        },
        jobs: cli.jobs.or(file.jobs),
    }
}
