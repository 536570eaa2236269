//! Plan execution.
//! Strictly sequential: every move-table entry in order, then the package
//! markers, then the aggregator, then (enhanced mode) the shims. Non-match
//! outcomes are reported and skipped; any filesystem failure aborts the run
//! through the usual `?` propagation.

use std::path::Path;

use anyhow::Result;
use tracing::{error, info};

use crate::config::Config;
use crate::emit::{write_aggregator, write_marker, write_shim, WriteOutcome};
use crate::errors::ReorgError;
use crate::fs_ops::{apply_move, MoveOutcome};
use crate::output as out;
use crate::plan::{AGGREGATOR_DIR, MARKERS, MOVES, SHIMS};

/// Counts for one run, returned to library callers and tests.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub moved: usize,
    pub would_move: usize,
    pub skipped_missing: usize,
    pub skipped_ambiguous: usize,
    pub skipped_dest_exists: usize,
    pub skipped_shim_source: usize,
    pub markers_written: usize,
    pub markers_skipped: usize,
    pub aggregator_written: bool,
    pub shims_written: usize,
    pub shims_skipped: usize,
}

/// Path rendered relative to the root for transcript lines.
fn rel<'a>(root: &Path, path: &'a Path) -> std::path::Display<'a> {
    path.strip_prefix(root).unwrap_or(path).display()
}

/// Execute the whole reorganization plan against `cfg.root`.
pub fn run(cfg: &Config) -> Result<RunSummary> {
    let mut summary = RunSummary::default();

    for entry in MOVES {
        match apply_move(cfg, entry) {
            Ok(MoveOutcome::Moved { from, to }) => {
                out::print_success(&format!(
                    "moved {} -> {}",
                    rel(&cfg.root, &from),
                    rel(&cfg.root, &to)
                ));
                summary.moved += 1;
            }
            Ok(MoveOutcome::WouldMove { from, to }) => {
                out::print_info(&format!(
                    "dry-run: would move {} -> {}",
                    rel(&cfg.root, &from),
                    rel(&cfg.root, &to)
                ));
                summary.would_move += 1;
            }
            Ok(MoveOutcome::SkippedDestExists) => {
                out::print_skip(&format!(
                    "{}: destination {} already exists, not overwriting",
                    entry.source, entry.dest
                ));
                summary.skipped_dest_exists += 1;
            }
            Ok(MoveOutcome::SkippedShimSource) => {
                out::print_warn(&format!(
                    "{}: file is the compatibility shim, not moving it onto {}",
                    entry.source, entry.dest
                ));
                summary.skipped_shim_source += 1;
            }
            Ok(MoveOutcome::SkippedMissing) => {
                out::print_skip(&format!("{}: not found, left as-is", entry.source));
                summary.skipped_missing += 1;
            }
            Ok(MoveOutcome::SkippedAmbiguous(candidates)) => {
                let listed = candidates
                    .iter()
                    .map(|c| rel(&cfg.root, c).to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                out::print_warn(&format!(
                    "{}: multiple candidates, not moving: {listed}",
                    entry.source
                ));
                summary.skipped_ambiguous += 1;
            }
            Err(e) => {
                if let Some(re) = e.downcast_ref::<ReorgError>() {
                    error!(code = re.code(), error = %re, "move aborted the run");
                } else {
                    error!(error = ?e, "move aborted the run");
                }
                out::print_error(&format!("{}: {e}", entry.source));
                return Err(e);
            }
        }
    }

    for marker in MARKERS {
        match write_marker(cfg, marker)? {
            WriteOutcome::Written => {
                out::print_success(&format!("created {}/__init__.py", marker.dir));
                summary.markers_written += 1;
            }
            WriteOutcome::WouldWrite => {
                out::print_info(&format!("dry-run: would create {}/__init__.py", marker.dir));
            }
            WriteOutcome::SkippedExisting => {
                out::print_skip(&format!("{}/__init__.py exists, left untouched", marker.dir));
                summary.markers_skipped += 1;
            }
        }
    }

    match write_aggregator(cfg)? {
        (WriteOutcome::Written, _) => {
            out::print_success(&format!(
                "wrote {AGGREGATOR_DIR}/__init__.py (re-export aggregator)"
            ));
            summary.aggregator_written = true;
        }
        (WriteOutcome::WouldWrite, _) => {
            out::print_info(&format!(
                "dry-run: would write {AGGREGATOR_DIR}/__init__.py"
            ));
        }
        // the aggregator writer never skips
        (WriteOutcome::SkippedExisting, _) => {}
    }

    if !cfg.strict {
        for shim in SHIMS {
            match write_shim(cfg, shim)? {
                WriteOutcome::Written => {
                    out::print_success(&format!("shim {} -> {}", shim.legacy, shim.target));
                    summary.shims_written += 1;
                }
                WriteOutcome::WouldWrite => {
                    out::print_info(&format!(
                        "dry-run: would write shim {} -> {}",
                        shim.legacy, shim.target
                    ));
                }
                WriteOutcome::SkippedExisting => {
                    out::print_skip(&format!("{} exists, no shim needed", shim.legacy));
                    summary.shims_skipped += 1;
                }
            }
        }
    }

    info!(
        moved = summary.moved,
        skipped_missing = summary.skipped_missing,
        skipped_ambiguous = summary.skipped_ambiguous,
        markers = summary.markers_written,
        shims = summary.shims_written,
        "run complete"
    );

    Ok(summary)
}
