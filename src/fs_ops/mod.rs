//! Filesystem operations: fuzzy discovery and the move primitive.

mod discover;
mod git;
mod move_file;

pub use discover::find_unique;
pub use move_file::{apply_move, MoveOutcome};
