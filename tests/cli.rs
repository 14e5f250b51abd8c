//! End-to-end CLI tests.
//!
//! Every test points `MATRYOSHKA_CONFIG` at a missing file so a user's own
//! config never leaks in.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;

fn cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("matryoshka");
    cmd.env("MATRYOSHKA_CONFIG", "/nonexistent/matryoshka/config.toml")
        .env_remove("MATRYOSHKA_BACKEND")
        .env_remove("MATRYOSHKA_OUTPUT_DIR")
        .env_remove("RUST_LOG");
    cmd
}

fn test_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(name);
    let _ = std::fs::remove_dir_all(&dir);
    dir
}

#[test]
fn default_run_prints_prompt_and_not_configured() {
    cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("repeating, rounded matryoshka dolls figures"))
        .stdout(predicate::str::contains(
            "Each figure holds one of the following objects: lantern, book, wrapped gift, \
holly and berries, and mug.",
        ))
        .stderr(predicate::str::contains("Image generation is not configured"));
}

#[test]
fn secondary_subject_and_empty_objects() {
    cmd()
        .args(["--secondary-subject", "foxes", "--held-objects", " , "])
        .assert()
        .success()
        .stdout(predicate::str::contains("matryoshka dolls and foxes figures"))
        .stdout(predicate::str::contains("holds one of the following").not());
}

#[test]
fn fallback_backend_writes_png() {
    let dir = test_dir("matryoshka_cli_fallback_test");

    cmd()
        .args(["--backend", "fallback", "--seed", "7", "--width", "240", "--height", "320"])
        .arg("--output-dir")
        .arg(&dir)
        .assert()
        .success()
        .stderr(predicate::str::contains("Saved:"));

    let files: Vec<_> = std::fs::read_dir(&dir).unwrap().filter_map(Result::ok).collect();
    assert_eq!(files.len(), 1);
    let path = files[0].path();
    assert!(path.file_name().unwrap().to_string_lossy().starts_with("matryoshka_prompt_"));
    assert_eq!(image::image_dimensions(&path).unwrap(), (240, 320));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn output_dir_from_env() {
    let dir = test_dir("matryoshka_cli_env_dir_test");

    cmd()
        .env("MATRYOSHKA_OUTPUT_DIR", &dir)
        .env("MATRYOSHKA_BACKEND", "fallback")
        .args(["--width", "100", "--height", "100"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Saved:"));

    assert_eq!(std::fs::read_dir(&dir).unwrap().count(), 1);
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn json_report() {
    let output = cmd().args(["--json", "--primary-subject", "owls"]).output().unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(report["prompt"].as_str().unwrap().contains("rounded owls figures"));
    assert!(report["image"].is_null());
    assert_eq!(report["options"]["primary_subject"], "owls");
    assert_eq!(report["options"]["eye_style"], "dot");
    assert!(report["message"].as_str().unwrap().contains("not configured"));
}

#[test]
fn unknown_backend_is_not_fatal() {
    cmd()
        .args(["--backend", "dall-e"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Image generation is not configured"));
}

#[test]
fn unwritable_output_reports_failure_without_crashing() {
    let dir = test_dir("matryoshka_cli_blocked_test");
    std::fs::create_dir_all(&dir).unwrap();
    let blocker = dir.join("blocker");
    std::fs::write(&blocker, b"x").unwrap();

    cmd()
        .args(["--backend", "fallback"])
        .arg("--output-dir")
        .arg(blocker.join("out"))
        .assert()
        .success()
        .stdout(predicate::str::contains("The overall color palette"))
        .stderr(predicate::str::contains("Image generation failed"));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn invalid_eye_style_exits_with_error() {
    cmd().args(["--eye-style", "squint"]).assert().failure().stderr(predicate::str::contains(
        "Unsupported eye style",
    ));
}

#[test]
fn invalid_config_exits_with_error() {
    let dir = test_dir("matryoshka_cli_bad_config_test");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("config.toml");
    std::fs::write(&path, "not = valid = toml").unwrap();

    cmd()
        .arg("--config")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config error"));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn config_prompt_defaults_apply() {
    let dir = test_dir("matryoshka_cli_config_prompt_test");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("config.toml");
    std::fs::write(&path, "[prompt]\nprimary_subject = \"hedgehogs\"\nmouth_color = \"pink\"\n")
        .unwrap();

    cmd()
        .env("MATRYOSHKA_CONFIG", &path)
        .args(["--mouth-color", "orange"])
        .assert()
        .success()
        .stdout(predicate::str::contains("rounded hedgehogs figures"))
        .stdout(predicate::str::contains("small orange mouths"));

    let _ = std::fs::remove_dir_all(&dir);
}
