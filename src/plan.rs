//! The reorganization plan: static move table, package markers, the
//! services aggregator submodule list, and the compatibility shim table.
//!
//! Everything here is inline data, not derived at runtime. Entry order only
//! affects transcript readability; moves are independent of each other.

/// One (source, destination) pair in the move table. Paths are relative to
/// the invocation root and use forward slashes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveEntry {
    pub source: &'static str,
    pub dest: &'static str,
}

/// The full move table: views entries first, then services entries.
pub const MOVES: &[MoveEntry] = &[
    // views -> views/spotify package
    MoveEntry { source: "views/spotify_results.py", dest: "views/spotify/results.py" },
    MoveEntry { source: "views/spotify_page.py", dest: "views/spotify/page.py" },
    MoveEntry { source: "views/spotify_helpers.py", dest: "views/spotify/helpers.py" },
    MoveEntry { source: "views/spotify_wiki_info.py", dest: "views/spotify/wiki_info.py" },
    MoveEntry { source: "views/spotify_ui.py", dest: "views/spotify/components/legacy_ui.py" },
    // loose services -> services/spotify package
    MoveEntry { source: "services/spotify.py", dest: "services/spotify/core.py" },
    MoveEntry { source: "services/spotify_oauth.py", dest: "services/spotify/auth.py" },
    MoveEntry { source: "services/spotify_lookup.py", dest: "services/spotify/lookup.py" },
    MoveEntry { source: "services/spotify_search.py", dest: "services/spotify/search.py" },
    MoveEntry { source: "services/spotify_albums.py", dest: "services/spotify/albums.py" },
    MoveEntry { source: "services/spotify_radio.py", dest: "services/spotify/radio.py" },
    MoveEntry { source: "services/spotify_genres.py", dest: "services/spotify/genres.py" },
    MoveEntry { source: "services/spotify_push.py", dest: "services/spotify/push.py" },
    MoveEntry {
        source: "services/spotify_session_push.py",
        dest: "services/spotify/session_push.py",
    },
];

/// A package directory that receives a plain docstring-only `__init__.py`.
/// Written only when no file exists at that path yet.
#[derive(Debug, Clone, Copy)]
pub struct PackageMarker {
    pub dir: &'static str,
    pub doc: &'static str,
}

pub const MARKERS: &[PackageMarker] = &[
    PackageMarker { dir: "views/spotify", doc: "Spotify views package." },
    PackageMarker { dir: "views/spotify/components", doc: "Spotify UI components." },
];

/// Directory receiving the re-export aggregator `__init__.py`. Unlike the
/// plain markers this file is overwritten on every run.
pub const AGGREGATOR_DIR: &str = "services/spotify";

/// Fixed ordered list of submodules the aggregator republishes. `core` is
/// the old `services/spotify.py`.
pub const AGGREGATOR_SUBMODULES: &[&str] = &[
    "core",
    "auth",
    "client",
    "errors",
    "models",
    "mappers",
    "queries",
    "search",
    "albums",
    "radio",
    "genres",
    "lookup",
    "push",
    "session_push",
];

/// A legacy import path preserved via a one-line redirect module.
#[derive(Debug, Clone, Copy)]
pub struct ShimEntry {
    /// Old file path, relative to the root.
    pub legacy: &'static str,
    /// Dotted module path the shim re-exports from.
    pub target: &'static str,
}

pub const SHIMS: &[ShimEntry] = &[
    ShimEntry { legacy: "services/spotify_oauth.py", target: "services.spotify.auth" },
    ShimEntry { legacy: "services/spotify_lookup.py", target: "services.spotify.lookup" },
    ShimEntry { legacy: "services/spotify_radio.py", target: "services.spotify.radio" },
    ShimEntry { legacy: "services/spotify_genres.py", target: "services.spotify.genres" },
    ShimEntry { legacy: "services/spotify_push.py", target: "services.spotify.push" },
];

/// Version-control metadata directory excluded from the fuzzy scan.
pub const VCS_DIR: &str = ".git";

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn move_table_sources_and_dests_are_unique() {
        let sources: HashSet<_> = MOVES.iter().map(|m| m.source).collect();
        let dests: HashSet<_> = MOVES.iter().map(|m| m.dest).collect();
        assert_eq!(sources.len(), MOVES.len(), "duplicate source in move table");
        assert_eq!(dests.len(), MOVES.len(), "duplicate destination in move table");
    }

    #[test]
    fn every_entry_renames_the_basename() {
        // A rerun must never fuzzy-match an already-moved file; that holds
        // because no destination shares its basename with any source.
        let source_names: HashSet<_> = MOVES
            .iter()
            .map(|m| m.source.rsplit('/').next().unwrap())
            .collect();
        for m in MOVES {
            let dest_name = m.dest.rsplit('/').next().unwrap();
            assert!(
                !source_names.contains(dest_name),
                "destination basename {dest_name} collides with a source basename"
            );
        }
    }

    #[test]
    fn shim_legacy_paths_are_move_sources() {
        for s in SHIMS {
            assert!(
                MOVES.iter().any(|m| m.source == s.legacy),
                "shim legacy path {} is not in the move table",
                s.legacy
            );
        }
    }
}
