use assert_fs::prelude::*;
use repo_reorg::{Config, ReorgError};

/// A hard filesystem failure mid-run is fatal: a plain file squatting where
/// the views/spotify package directory must go makes destination-directory
/// creation fail, and the whole run aborts instead of continuing to the
/// next entry. The source file is left exactly where it was.
#[test]
fn blocked_destination_dir_aborts_the_run() {
    let temp = assert_fs::TempDir::new().unwrap();
    let source = temp.child("views/spotify_results.py");
    source.write_str("RESULTS = 1\n").unwrap();
    // not a directory, so create_dir_all("views/spotify") must fail
    temp.child("views/spotify").write_str("squatter").unwrap();

    let mut cfg = Config::new(temp.path());
    cfg.use_git = false;

    let err = repo_reorg::run(&cfg).expect_err("run must abort on a hard failure");
    let reorg = err
        .downcast_ref::<ReorgError>()
        .expect("typed move failure");
    assert_eq!(reorg.code(), "move_failed");

    // nothing was half-done: source untouched, destination never created,
    // and the later stages (markers, aggregator, shims) never ran
    source.assert("RESULTS = 1\n");
    temp.child("views/spotify").assert("squatter");
    assert!(!temp.child("services/spotify/__init__.py").path().exists());
    assert!(!temp.child("services/spotify_lookup.py").path().exists());
}
