//! Core library for `repo_reorg`.
//!
//! Reorganizes a flat Streamlit project layout into packaged
//! `views/spotify/` and `services/spotify/` trees: moves the files named in
//! a static table (with fuzzy basename discovery for sources that wandered),
//! writes package initializers including the services re-export aggregator,
//! and leaves compatibility shims at the old import paths.

pub mod config;
pub mod emit;
pub mod errors;
pub mod fs_ops;
pub mod output;
pub mod plan;
pub mod runner;

pub use config::{Config, LogLevel};
pub use errors::{LookupError, ReorgError};
pub use runner::{run, RunSummary};
