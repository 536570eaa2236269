//! The move primitive for one table entry.
//! Exact-match sources move directly; absent sources go through the fuzzy
//! scan (unless strict mode disables it). A move failure is fatal for the
//! whole run; a non-match is reported and skipped.

use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::config::Config;
use crate::emit::shim_source;
use crate::errors::{LookupError, ReorgError};
use crate::plan::{MoveEntry, SHIMS, VCS_DIR};

use super::discover::find_unique;
use super::git;

/// What happened to one move-table entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// File relocated to the table destination.
    Moved { from: PathBuf, to: PathBuf },
    /// Dry-run: the move that would have happened.
    WouldMove { from: PathBuf, to: PathBuf },
    /// Something already lives at the destination; never overwritten.
    /// Makes reruns harmless once shims reoccupy the legacy paths.
    SkippedDestExists,
    /// The file at the source path is a generated compatibility shim, not
    /// the real module; moving it would plant a self-import at the
    /// canonical path.
    SkippedShimSource,
    /// Source absent and no candidate anywhere in the tree.
    SkippedMissing,
    /// Source absent and several same-named candidates; never guessed at.
    SkippedAmbiguous(Vec<PathBuf>),
}

/// Process one move-table entry against the configured root.
pub fn apply_move(cfg: &Config, entry: &MoveEntry) -> Result<MoveOutcome> {
    let src = cfg.root.join(entry.source);
    let dest = cfg.root.join(entry.dest);

    if dest.exists() {
        return Ok(MoveOutcome::SkippedDestExists);
    }

    if src.is_file() {
        if is_shim_at(entry, &src) {
            return Ok(MoveOutcome::SkippedShimSource);
        }
        return do_move(cfg, &src, &dest);
    }

    if cfg.strict {
        return Ok(MoveOutcome::SkippedMissing);
    }

    let name = Path::new(entry.source)
        .file_name()
        .with_context(|| format!("move table entry has no file name: {}", entry.source))?;

    match find_unique(&cfg.root, name, &[VCS_DIR]) {
        Ok(found) => do_move(cfg, &found, &dest),
        Err(LookupError::NotFound) => Ok(MoveOutcome::SkippedMissing),
        Err(LookupError::Ambiguous(candidates)) => Ok(MoveOutcome::SkippedAmbiguous(candidates)),
    }
}

/// True when the source sitting at a shim-table legacy path is the
/// generated redirect itself (the canonical module was deleted but its shim
/// survived). Any other content is a real file and moves normally; a read
/// failure falls through to the move, which will surface the error.
fn is_shim_at(entry: &MoveEntry, src: &Path) -> bool {
    let Some(shim) = SHIMS.iter().find(|s| s.legacy == entry.source) else {
        return false;
    };
    matches!(std::fs::read_to_string(src), Ok(content) if content == shim_source(shim))
}

/// Relocate `src` to `dest`, creating the destination's parent directories
/// first. Prefers `git mv` in a checkout, then a plain rename, then
/// copy+remove for cross-device renames. Any hard failure aborts the run.
fn do_move(cfg: &Config, src: &Path, dest: &Path) -> Result<MoveOutcome> {
    if cfg.dry_run {
        info!(src = %src.display(), dest = %dest.display(), "dry-run: would move file");
        return Ok(MoveOutcome::WouldMove {
            from: src.to_path_buf(),
            to: dest.to_path_buf(),
        });
    }

    if let Some(parent) = dest.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ReorgError::MoveFailed {
            from: src.to_path_buf(),
            to: dest.to_path_buf(),
            context: format!("cannot create destination directory {}: {e}", parent.display()),
        })?;
    }

    if cfg.use_git && git::is_git_root(&cfg.root) && git::try_git_mv(&cfg.root, src, dest) {
        info!(src = %src.display(), dest = %dest.display(), "moved via git mv");
        return Ok(MoveOutcome::Moved {
            from: src.to_path_buf(),
            to: dest.to_path_buf(),
        });
    }

    match std::fs::rename(src, dest) {
        Ok(()) => {
            info!(src = %src.display(), dest = %dest.display(), "renamed file");
        }
        Err(e) => {
            warn!(error = %e, "rename failed, falling back to copy+remove");
            copy_and_remove(src, dest).map_err(|ce| ReorgError::MoveFailed {
                from: src.to_path_buf(),
                to: dest.to_path_buf(),
                context: ce.to_string(),
            })?;
        }
    }

    Ok(MoveOutcome::Moved {
        from: src.to_path_buf(),
        to: dest.to_path_buf(),
    })
}

fn copy_and_remove(src: &Path, dest: &Path) -> io::Result<()> {
    std::fs::copy(src, dest)?;
    std::fs::remove_file(src)
}
