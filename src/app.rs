//! Application orchestrator.
//! Builds the run Config from flags, initializes logging, validates the
//! root, and executes the plan. The process exits non-zero on the first
//! hard filesystem failure; non-match skips never fail the run.

use anyhow::Result;
use tracing::{debug, error};

use repo_reorg::output as out;
use repo_reorg::plan::{MARKERS, MOVES, SHIMS};
use repo_reorg::ReorgError;

use crate::cli::Args;
use crate::logging::init_tracing;

/// Run the CLI application.
pub fn run(args: Args) -> Result<()> {
    if args.print_plan {
        out::print_info("move table:");
        for m in MOVES {
            println!("  {} -> {}", m.source, m.dest);
        }
        out::print_info("package markers:");
        for p in MARKERS {
            println!("  {}/__init__.py", p.dir);
        }
        out::print_info("compatibility shims:");
        for s in SHIMS {
            println!("  {} -> {}", s.legacy, s.target);
        }
        return Ok(());
    }

    let mut cfg = args.to_config();

    // Guard is dropped at the end of run() so file logs are flushed.
    let _guard = init_tracing(&cfg.log_level, cfg.log_file.as_deref(), args.json).map_err(|e| {
        out::print_error(&format!("Failed to initialize logging: {}", e));
        e
    })?;

    debug!("Starting repo_reorg: {:?}", args);

    if let Err(e) = cfg.validate_and_normalize() {
        if let Some(re) = e.downcast_ref::<ReorgError>() {
            error!(code = re.code(), error = %re, "invalid root");
        }
        out::print_error(&format!("{e}"));
        return Err(e);
    }

    let summary = repo_reorg::runner::run(&cfg)?;

    let skipped = summary.skipped_missing
        + summary.skipped_ambiguous
        + summary.skipped_dest_exists
        + summary.skipped_shim_source;
    if cfg.dry_run {
        out::print_info(&format!(
            "dry-run complete: {} move(s) pending, {} entry(ies) skipped",
            summary.would_move, skipped
        ));
    } else {
        out::print_info(&format!(
            "done: {} moved, {} skipped, {} marker(s), {} shim(s)",
            summary.moved, skipped, summary.markers_written, summary.shims_written
        ));
    }

    Ok(())
}
