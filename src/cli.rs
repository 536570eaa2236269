//! CLI definition and parsing.
//! Defines Args and provides parse() for command-line handling.
//!
//! Notes:
//! - The move table, marker list and shim list are fixed; flags only select
//!   strict vs enhanced behavior and logging options.
//! - --debug is a shorthand for --log-level debug.

use clap::{Parser, ValueHint};
use std::path::PathBuf;

use repo_reorg::config::{Config, LogLevel};

/// CLI wrapper for the repo_reorg library.
#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "Reorganize the flat views/services layout into spotify packages"
)]
pub struct Args {
    /// Working tree root to reorganize (defaults to the current directory).
    #[arg(value_name = "ROOT", default_value = ".", value_hint = ValueHint::DirPath)]
    pub root: PathBuf,

    /// Plain variant: only exact-path moves, no fuzzy discovery, no shims.
    #[arg(long, help = "Disable fuzzy discovery and shim writing")]
    pub strict: bool,

    /// Dry-run: report actions but do not modify the filesystem.
    #[arg(
        long,
        help = "Show what would be done, but do not modify files/directories"
    )]
    pub dry_run: bool,

    /// Skip `git mv` even inside a git checkout.
    #[arg(long, help = "Always use plain filesystem moves, never git mv")]
    pub no_git: bool,

    /// Enable debug logging (equivalent to `--log-level debug`).
    #[arg(
        short = 'd',
        long,
        help = "Enable debug logging (shorthand for --log-level debug)"
    )]
    pub debug: bool,

    /// Set log level. One of: quiet, normal, info, debug.
    #[arg(long, help = "Set log level: quiet, normal, info, debug")]
    pub log_level: Option<String>,

    /// Optional log file in addition to stdout.
    #[arg(long, value_hint = ValueHint::FilePath, help = "Also write logs to this file")]
    pub log_file: Option<PathBuf>,

    /// Emit logs in structured JSON (includes timestamp, level, and structured fields).
    #[arg(long, help = "Emit logs in structured JSON")]
    pub json: bool,

    /// Print the move table and generated-file plan, then exit.
    #[arg(long, help = "Print the plan (moves, markers, shims) and exit")]
    pub print_plan: bool,
}

impl Args {
    /// Effective log level derived from flags.
    /// Precedence: --debug > --log-level value > None (use default).
    pub fn effective_log_level(&self) -> Option<LogLevel> {
        if self.debug {
            return Some(LogLevel::Debug);
        }
        self.log_level.as_deref().and_then(LogLevel::parse)
    }

    /// Build the run Config from the parsed flags.
    pub fn to_config(&self) -> Config {
        let mut cfg = Config::new(self.root.clone());
        cfg.strict = self.strict;
        cfg.dry_run = self.dry_run;
        cfg.use_git = !self.no_git;
        if let Some(level) = self.effective_log_level() {
            cfg.log_level = level;
        }
        cfg.log_file = self.log_file.clone();
        cfg
    }
}

pub fn parse() -> Args {
    Args::parse()
}
