use assert_fs::prelude::*;
use repo_reorg::Config;

/// A hand-edited plain marker survives any number of reruns.
#[test]
fn hand_edited_marker_is_never_overwritten() {
    let temp = assert_fs::TempDir::new().unwrap();
    let marker = temp.child("views/spotify/__init__.py");
    marker.write_str("# customized by hand\n").unwrap();

    let mut cfg = Config::new(temp.path());
    cfg.use_git = false;

    repo_reorg::run(&cfg).expect("first run");
    repo_reorg::run(&cfg).expect("second run");

    marker.assert("# customized by hand\n");
}

/// Missing markers are created with their one-line docstring.
#[test]
fn missing_markers_are_created() {
    let temp = assert_fs::TempDir::new().unwrap();

    let mut cfg = Config::new(temp.path());
    cfg.use_git = false;

    let summary = repo_reorg::run(&cfg).expect("run should succeed");
    assert_eq!(summary.markers_written, 2);

    temp.child("views/spotify/__init__.py")
        .assert("\"\"\"Spotify views package.\"\"\"\n");
    temp.child("views/spotify/components/__init__.py")
        .assert("\"\"\"Spotify UI components.\"\"\"\n");
}
