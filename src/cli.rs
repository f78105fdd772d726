//! CLI definitions and entry point

use std::path::PathBuf;

use clap::Parser;

use crate::commands;
use pylint_vcs::output::{OutputMode, RunStatus};

/// pylint-vcs - Pylint as a test run, optionally scoped to VCS changes
#[derive(Parser, Debug)]
#[command(
    name = "pylint-vcs",
    version,
    about = "Run pylint on every file, or only on files changed in the working copy",
    long_about = "Run pylint once per python file and report each file as a passed or failed test.\n\n\
                  With --pylint-vcs only files added or modified in the last revision of the\n\
                  svn or git working copy are linted. Without a working copy every file is."
)]
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Run pylint on all python files
    #[arg(long)]
    pub pylint: bool,

    /// Run pylint only on python files changed in the current revision
    ///
    /// Falls back to --pylint when no working copy is detected.
    #[arg(long = "pylint-vcs")]
    pub pylint_vcs: bool,

    /// Disable running pylint
    #[arg(long = "no-pylint")]
    pub no_pylint: bool,

    /// Disable VCS linting mode (does not turn off pylint)
    #[arg(long = "pylint-no-vcs")]
    pub pylint_no_vcs: bool,

    /// Location of the rcfile if not pylintrc
    #[arg(long = "pylint-rcfile", value_name = "PATH")]
    pub pylint_rcfile: Option<PathBuf>,

    /// Pylint command line (default: pylint)
    #[arg(long = "pylint-command", value_name = "CMD")]
    pub pylint_command: Option<String>,

    /// Run config file (default: nearest pylint-vcs.toml)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Worker threads (default: one per core)
    #[arg(short = 'n', long, value_name = "N")]
    pub jobs: Option<usize>,

    /// Output in JSON format (machine-readable)
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Files or directories to collect from (default: current directory)
    #[arg(value_name = "PATHS")]
    pub paths: Vec<PathBuf>,
}

/// Run the CLI
pub fn run() -> anyhow::Result<RunStatus> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    commands::lint(cli, output_mode)
}
