#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

/// The binary under test, with HOME pointed at a scratch directory so a
/// developer's own ~/.runcalc is never read.
pub fn rc() -> Command {
    let mut home: PathBuf = env::temp_dir();
    home.push("runcalc_test_home");
    let mut cmd = cargo_bin_cmd!("runcalc");
    cmd.env("HOME", home);
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_runcalc.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize the DB (schema + the two seeded races)
pub fn init_db(db_path: &str) {
    rc().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Initialize the DB and add one road race on 2025-10-12
pub fn init_db_with_data(db_path: &str) {
    init_db(db_path);

    rc().args([
        "--db",
        db_path,
        "add",
        "--name",
        "Maratona de São Paulo",
        "--location",
        "Brasil",
        "--distance",
        "42.195",
        "--date",
        "2025-10-12",
        "--type",
        "road",
    ])
    .assert()
    .success();
}
