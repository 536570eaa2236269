use std::fs;
use std::process::Command;

use assert_cmd::cargo;
use tempfile::tempdir;

/// End-to-end binary run over a tree exercising all three mover outcomes:
/// one exact move, one entry with no candidate anywhere, and one ambiguous
/// entry with two same-named candidates.
#[test]
fn transcript_covers_moved_missing_and_ambiguous() {
    let td = tempdir().unwrap();
    let root = fs::canonicalize(td.path()).unwrap();
    fs::create_dir_all(root.join("views")).unwrap();
    fs::create_dir_all(root.join("services")).unwrap();
    fs::create_dir_all(root.join("old_ui")).unwrap();
    fs::create_dir_all(root.join("backup")).unwrap();

    // exact-match move
    fs::write(root.join("views/spotify_results.py"), "RESULTS").unwrap();
    // ambiguous: two candidates for views/spotify_ui.py
    fs::write(root.join("old_ui/spotify_ui.py"), "a").unwrap();
    fs::write(root.join("backup/spotify_ui.py"), "b").unwrap();
    // views/spotify_page.py: no candidate anywhere

    let me = cargo::cargo_bin!("repo_reorg");
    let out = Command::new(me)
        .arg(&root)
        .arg("--no-git")
        .output()
        .expect("spawn binary");

    assert!(out.status.success(), "run should succeed despite skips");
    let stdout = String::from_utf8_lossy(&out.stdout);
    let stderr = String::from_utf8_lossy(&out.stderr);

    assert!(
        stdout.contains("ok: moved views/spotify_results.py -> views/spotify/results.py"),
        "missing moved line in: {stdout}"
    );
    assert!(
        stdout.contains("skip: views/spotify_page.py: not found"),
        "missing not-found line in: {stdout}"
    );
    assert!(
        stderr.contains("warn: views/spotify_ui.py: multiple candidates"),
        "missing ambiguous line in: {stderr}"
    );
    assert!(stderr.contains("old_ui") && stderr.contains("backup"));

    // filesystem state matches the transcript
    assert!(root.join("views/spotify/results.py").exists());
    assert!(!root.join("views/spotify/page.py").exists());
    assert!(root.join("old_ui/spotify_ui.py").exists());
    assert!(root.join("backup/spotify_ui.py").exists());
    assert!(root.join("services/spotify/__init__.py").exists());
}

/// --print-plan lists the tables and touches nothing.
#[test]
fn print_plan_is_read_only() {
    let td = tempdir().unwrap();
    let root = fs::canonicalize(td.path()).unwrap();

    let me = cargo::cargo_bin!("repo_reorg");
    let out = Command::new(me)
        .arg(&root)
        .arg("--print-plan")
        .output()
        .expect("spawn binary");

    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("views/spotify_results.py -> views/spotify/results.py"));
    assert!(stdout.contains("services/spotify_oauth.py -> services.spotify.auth"));
    assert!(fs::read_dir(&root).unwrap().next().is_none(), "nothing written");
}

/// An invalid root is a hard failure with a non-zero exit.
#[test]
fn invalid_root_exits_nonzero() {
    let me = cargo::cargo_bin!("repo_reorg");
    let out = Command::new(me)
        .arg("/definitely/not/a/real/path")
        .output()
        .expect("spawn binary");

    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(
        stderr.contains("error:"),
        "stderr should carry the error prefix: {stderr}"
    );
}
