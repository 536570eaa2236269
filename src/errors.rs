//! Typed error definitions for repo_reorg.
//! Fatal failure modes carry a short machine code for structured logs; the
//! non-fatal lookup outcomes get their own type so the no-guessing policy is
//! explicit in signatures rather than implicit in control flow.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReorgError {
    #[error("Root path does not exist or is not a directory: {0}")]
    RootInvalid(PathBuf),

    #[error("Move failed {from} -> {to}: {context}")]
    MoveFailed {
        from: PathBuf,
        to: PathBuf,
        context: String,
    },
}

impl ReorgError {
    /// Stable short code for structured log fields.
    pub fn code(&self) -> &'static str {
        match self {
            ReorgError::RootInvalid(_) => "root_invalid",
            ReorgError::MoveFailed { .. } => "move_failed",
        }
    }
}

/// Outcome of a fuzzy basename lookup that did not identify a unique file.
/// Both variants are classification results, not run failures: the caller
/// reports them and continues with the next table entry.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LookupError {
    #[error("no file with that name found in the tree")]
    NotFound,

    #[error("multiple candidates found: {}", format_candidates(.0))]
    Ambiguous(Vec<PathBuf>),
}

fn format_candidates(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
