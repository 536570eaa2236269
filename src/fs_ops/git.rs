//! Version-control-aware move support.
//! `git mv` keeps rename history when the root is a checkout; any failure
//! here (no git binary, not a repo, index refusal) is non-fatal and the
//! caller falls through to a plain filesystem move.

use std::path::Path;
use std::process::Command;

use tracing::{debug, warn};

/// True when `root` looks like the top of a git checkout.
pub fn is_git_root(root: &Path) -> bool {
    root.join(".git").exists()
}

/// Attempt `git mv src dest` inside `root`. Returns true on success.
pub fn try_git_mv(root: &Path, src: &Path, dest: &Path) -> bool {
    let output = Command::new("git")
        .arg("-C")
        .arg(root)
        .arg("mv")
        .arg(src)
        .arg(dest)
        .output();

    match output {
        Ok(out) if out.status.success() => {
            debug!(src = %src.display(), dest = %dest.display(), "git mv succeeded");
            true
        }
        Ok(out) => {
            warn!(
                src = %src.display(),
                status = %out.status,
                stderr = %String::from_utf8_lossy(&out.stderr).trim(),
                "git mv refused, falling back to plain move"
            );
            false
        }
        Err(e) => {
            debug!(error = %e, "git not runnable, falling back to plain move");
            false
        }
    }
}
