use std::fs;
use std::path::Path;

use repo_reorg::plan::MOVES;
use repo_reorg::Config;
use tempfile::tempdir;

fn seed_full_tree(root: &Path) {
    fs::create_dir_all(root.join("views")).unwrap();
    fs::create_dir_all(root.join("services")).unwrap();
    for m in MOVES {
        fs::write(root.join(m.source), format!("# module {}\n", m.source)).unwrap();
    }
}

/// Every table entry present: one run relocates all of them, writes both
/// markers, the aggregator, and every shim.
#[test]
fn full_tree_migrates_in_one_run() -> Result<(), Box<dyn std::error::Error>> {
    let td = tempdir()?;
    seed_full_tree(td.path());

    let mut cfg = Config::new(td.path());
    cfg.use_git = false;

    let summary = repo_reorg::run(&cfg)?;
    assert_eq!(summary.moved, MOVES.len());
    assert_eq!(summary.markers_written, 2);
    assert!(summary.aggregator_written);
    assert_eq!(summary.shims_written, repo_reorg::plan::SHIMS.len());

    for m in MOVES {
        let dest = td.path().join(m.dest);
        assert!(dest.exists(), "missing destination {}", m.dest);
        assert_eq!(
            fs::read_to_string(&dest)?,
            format!("# module {}\n", m.source),
            "content changed for {}",
            m.dest
        );
    }
    Ok(())
}

/// Rerunning over an already-migrated tree moves nothing and rewrites only
/// the aggregator. The shims written by the first run reoccupy five legacy
/// source paths; the occupied-destination guard keeps them from being moved
/// over the relocated modules.
#[test]
fn second_run_is_idempotent() -> Result<(), Box<dyn std::error::Error>> {
    let td = tempdir()?;
    seed_full_tree(td.path());

    let mut cfg = Config::new(td.path());
    cfg.use_git = false;

    repo_reorg::run(&cfg)?;
    let summary = repo_reorg::run(&cfg)?;

    let shims = repo_reorg::plan::SHIMS.len();
    assert_eq!(summary.moved, 0);
    assert_eq!(summary.skipped_dest_exists, MOVES.len());
    assert_eq!(summary.skipped_missing, 0);
    assert_eq!(summary.skipped_ambiguous, 0);
    assert_eq!(summary.markers_written, 0);
    assert_eq!(summary.markers_skipped, 2);
    assert!(summary.aggregator_written);
    assert_eq!(summary.shims_written, 0);
    assert_eq!(summary.shims_skipped, shims);

    // the relocated modules still hold their original content, not shim text
    for m in MOVES {
        assert_eq!(
            fs::read_to_string(td.path().join(m.dest))?,
            format!("# module {}\n", m.source)
        );
    }
    Ok(())
}
