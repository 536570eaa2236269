//! Package initializer writer.
//!
//! Two forms:
//! - plain marker: one-line docstring, created only when no `__init__.py`
//!   exists yet, so a hand-edited marker is never clobbered;
//! - aggregator: the `services/spotify/__init__.py` re-export module,
//!   overwritten on every run. Its content is a pure function of the fixed
//!   submodule list, so reruns are byte-identical.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::config::Config;
use crate::plan::{PackageMarker, AGGREGATOR_DIR, AGGREGATOR_SUBMODULES};

use super::WriteOutcome;

/// Write the docstring-only marker for one package directory.
pub fn write_marker(cfg: &Config, marker: &PackageMarker) -> Result<WriteOutcome> {
    let dir = cfg.root.join(marker.dir);
    let path = dir.join("__init__.py");

    if path.exists() {
        debug!(path = %path.display(), "marker exists, leaving untouched");
        return Ok(WriteOutcome::SkippedExisting);
    }
    if cfg.dry_run {
        return Ok(WriteOutcome::WouldWrite);
    }

    std::fs::create_dir_all(&dir)
        .with_context(|| format!("cannot create package directory {}", dir.display()))?;
    std::fs::write(&path, format!("\"\"\"{}\"\"\"\n", marker.doc))
        .with_context(|| format!("cannot write package marker {}", path.display()))?;
    info!(path = %path.display(), "wrote package marker");
    Ok(WriteOutcome::Written)
}

/// The generated aggregator module. Imports each expected submodule,
/// copies its public (non-underscore) attributes into the package namespace
/// and records them in `__all__`; a submodule that fails to import simply
/// contributes nothing. Later submodules overwrite earlier same-named
/// bindings (last-writer-wins, as the migrated app has always behaved).
pub fn aggregator_source() -> String {
    let mut src = String::new();
    src.push_str(
        "\"\"\"Spotify services namespace. Re-exports the public API for compatibility.\"\"\"\n",
    );
    src.push_str("__all__ = []\n\n");
    src.push_str("def _reexport(modname: str) -> None:\n");
    src.push_str("    try:\n");
    src.push_str("        module = __import__(f\"{__name__}.{modname}\", fromlist=[\"*\"])\n");
    src.push_str("        for key, value in module.__dict__.items():\n");
    src.push_str("            if not key.startswith(\"_\"):\n");
    src.push_str("                globals()[key] = value\n");
    src.push_str("                __all__.append(key)\n");
    src.push_str("    except Exception:\n");
    src.push_str("        pass\n\n");
    src.push_str("for _m in [\n");
    for name in AGGREGATOR_SUBMODULES {
        src.push_str(&format!("    \"{name}\",\n"));
    }
    src.push_str("]:\n");
    src.push_str("    _reexport(_m)\n");
    src.push_str("del _reexport\n");
    src
}

/// Write (always overwrite) the aggregator `__init__.py`. Returns the path
/// for transcript reporting.
pub fn write_aggregator(cfg: &Config) -> Result<(WriteOutcome, PathBuf)> {
    let dir = cfg.root.join(AGGREGATOR_DIR);
    let path = dir.join("__init__.py");

    if cfg.dry_run {
        return Ok((WriteOutcome::WouldWrite, path));
    }

    std::fs::create_dir_all(&dir)
        .with_context(|| format!("cannot create package directory {}", dir.display()))?;
    std::fs::write(&path, aggregator_source())
        .with_context(|| format!("cannot write aggregator {}", path.display()))?;
    info!(path = %path.display(), "wrote re-export aggregator");
    Ok((WriteOutcome::Written, path))
}
