//! Generated files: package markers, the re-export aggregator, and
//! compatibility shims.

mod initpkg;
mod shim;

pub use initpkg::{aggregator_source, write_aggregator, write_marker};
pub use shim::{shim_source, write_shim};

/// What happened to one generated file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// File written (or overwritten, for the aggregator).
    Written,
    /// Dry-run: the write that would have happened.
    WouldWrite,
    /// A file already exists at that path; left untouched.
    SkippedExisting,
}
