//! Compatibility shim writer.
//! A shim is a one-line module at a legacy path that re-exports everything
//! from the relocated module, so external `import services.spotify_oauth`
//! style callers keep working. An existing file at the legacy path always
//! wins; content is never inspected or replaced.

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::config::Config;
use crate::plan::ShimEntry;

use super::WriteOutcome;

/// The single redirect statement for one shim.
pub fn shim_source(shim: &ShimEntry) -> String {
    format!(
        "from {} import *  # noqa: F401,F403 -- compatibility shim\n",
        shim.target
    )
}

/// Write the shim unless something already lives at the legacy path.
pub fn write_shim(cfg: &Config, shim: &ShimEntry) -> Result<WriteOutcome> {
    let path = cfg.root.join(shim.legacy);

    if path.exists() {
        debug!(path = %path.display(), "legacy path occupied, no shim written");
        return Ok(WriteOutcome::SkippedExisting);
    }
    if cfg.dry_run {
        return Ok(WriteOutcome::WouldWrite);
    }

    std::fs::write(&path, shim_source(shim))
        .with_context(|| format!("cannot write shim {}", path.display()))?;
    info!(path = %path.display(), target = shim.target, "wrote compatibility shim");
    Ok(WriteOutcome::Written)
}
