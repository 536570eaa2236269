//! Runtime configuration.
//! - Config holds the run settings, built from CLI flags only: the core
//!   relocation logic reads no config file and no environment variables.
//! - LogLevel represents verbosity with simple parsing helpers.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::Result;
use tracing::debug;

use crate::errors::ReorgError;

/// Program-defined verbosity levels exposed to users.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Only errors
    Quiet,
    /// Informational output (default)
    #[default]
    Normal,
    /// More info (like verbose)
    Info,
    /// Debug/trace
    Debug,
}

impl LogLevel {
    /// Parse common string names into our LogLevel (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "quiet" | "error" | "none" => Some(LogLevel::Quiet),
            "normal" => Some(LogLevel::Normal),
            "info" | "verbose" | "detailed" => Some(LogLevel::Info),
            "debug" | "trace" => Some(LogLevel::Debug),
            _ => None,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LogLevel::Quiet => "quiet",
            LogLevel::Normal => "normal",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        };
        f.write_str(s)
    }
}

impl FromStr for LogLevel {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("invalid log level: '{s}'"))
    }
}

/// Settings for one reorganization run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Working tree root the plan paths are relative to.
    pub root: PathBuf,
    /// Plain-variant mode: no fuzzy lookup, no shim writing.
    pub strict: bool,
    /// Report actions without touching the filesystem.
    pub dry_run: bool,
    /// Use `git mv` when the root is a git checkout.
    pub use_git: bool,
    /// Console verbosity
    pub log_level: LogLevel,
    /// Optional path to a log file
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            strict: false,
            dry_run: false,
            use_git: true,
            log_level: LogLevel::Normal,
            log_file: None,
        }
    }
}

impl Config {
    /// Construct a Config for a given root; other fields use defaults.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Default::default()
        }
    }

    /// Check the root exists and is a directory, then canonicalize it so
    /// every transcript line and git invocation sees one stable spelling.
    pub fn validate_and_normalize(&mut self) -> Result<()> {
        if !self.root.is_dir() {
            return Err(ReorgError::RootInvalid(self.root.clone()).into());
        }
        self.root = dunce::canonicalize(&self.root).unwrap_or_else(|_| self.root.clone());
        debug!(root = %self.root.display(), "root validated");
        Ok(())
    }
}
