//! Integration tests for the phototrack binary.

#![allow(clippy::unwrap_used)]

mod common;

use assert_cmd::cargo::cargo_bin_cmd;
use common::{read_gpx, write_geotagged, write_photo};
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

/// Command with an isolated config directory and no inherited overrides.
fn phototrack(config_home: &Path) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("phototrack");
    cmd.env("XDG_CONFIG_HOME", config_home)
        .env_remove("PHOTOTRACK_OUTPUT")
        .env_remove("PHOTOTRACK_RECURSIVE")
        .env_remove("RUST_LOG")
        .arg("--no-progress");
    cmd
}

#[test]
fn test_no_inputs_fails() {
    let temp = TempDir::new().unwrap();
    phototrack(temp.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("no input files"));
}

#[test]
fn test_nonexistent_file_fails_and_names_it() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("ghost.jpg");

    phototrack(temp.path())
        .arg(&missing)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("ghost.jpg"));

    assert!(!temp.path().join("phototrack.gpx").exists());
}

#[test]
fn test_directory_without_gps_fails() {
    let temp = TempDir::new().unwrap();
    let photos = temp.path().join("photos");
    write_photo(&photos.join("plain.tiff"), &[]);

    phototrack(temp.path())
        .arg(&photos)
        .assert()
        .failure()
        .stderr(predicate::str::contains("no GPS data found"));

    assert!(!photos.join("phototrack.gpx").exists());
}

#[test]
fn test_writes_track_to_explicit_output() {
    let temp = TempDir::new().unwrap();
    let photos = temp.path().join("photos");
    write_geotagged(
        &photos.join("a.tiff"),
        (51, 30, 0),
        "N",
        (0, 7, 0),
        "W",
        Some("2021:09:09 09:09:09"),
    );
    let output = temp.path().join("tracks").join("walk.gpx");

    phototrack(temp.path())
        .arg(&photos)
        .arg("-o")
        .arg(&output)
        .assert()
        .success();

    let doc = read_gpx(&output);
    assert_eq!(doc.waypoints.len(), 1);
    assert!(doc.waypoints[0].point().x() < 0.0);
}

#[test]
fn test_recursive_flag_descends() {
    let temp = TempDir::new().unwrap();
    let photos = temp.path().join("photos");
    write_geotagged(
        &photos.join("day1").join("a.tiff"),
        (1, 0, 0),
        "N",
        (1, 0, 0),
        "E",
        Some("2021:01:01 00:00:00"),
    );

    phototrack(temp.path())
        .arg(&photos)
        .assert()
        .failure()
        .stderr(predicate::str::contains("no GPS data found"));

    phototrack(temp.path())
        .arg(&photos)
        .arg("--recursive")
        .assert()
        .success();

    assert!(photos.join("phototrack.gpx").exists());
}

#[test]
fn test_no_recursive_overrides_config() {
    let temp = TempDir::new().unwrap();
    let config_dir = temp.path().join("phototrack");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(config_dir.join("config.toml"), "[defaults]\nrecursive = true\n").unwrap();

    let photos = temp.path().join("photos");
    write_geotagged(
        &photos.join("day1").join("a.tiff"),
        (1, 0, 0),
        "N",
        (1, 0, 0),
        "E",
        Some("2021:01:01 00:00:00"),
    );

    phototrack(temp.path())
        .arg(&photos)
        .arg("--no-recursive")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no GPS data found"));

    phototrack(temp.path()).arg(&photos).assert().success();
    assert!(photos.join("phototrack.gpx").exists());
}

#[test]
fn test_config_file_sets_filename_and_creator() {
    let temp = TempDir::new().unwrap();
    let config_dir = temp.path().join("phototrack");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(
        config_dir.join("config.toml"),
        "[output]\nfilename = \"trip.gpx\"\ncreator = \"field kit\"\n",
    )
    .unwrap();

    let photos = temp.path().join("photos");
    write_geotagged(&photos.join("a.tiff"), (5, 0, 0), "N", (6, 0, 0), "E", None);

    phototrack(temp.path()).arg(&photos).assert().success();

    let doc = read_gpx(&photos.join("trip.gpx"));
    assert_eq!(doc.creator.as_deref(), Some("field kit"));
}

#[test]
fn test_config_path_and_init() {
    let temp = TempDir::new().unwrap();
    let expected = temp.path().join("phototrack").join("config.toml");

    phototrack(temp.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));

    phototrack(temp.path())
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created configuration file"));
    assert!(expected.exists());

    phototrack(temp.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("filename = \"phototrack.gpx\""));
}
