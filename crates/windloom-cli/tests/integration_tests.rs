//! Integration tests for the windloom CLI

#![allow(deprecated)]

//!
//! These tests run the binary end to end inside temporary project directories

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const DARK_MODE_ENV: &str = "WINDLOOM_DARK_MODE";

/// A command rooted in `dir` with no inherited dark mode override
fn windloom(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("windloom").unwrap();
    cmd.current_dir(dir.path()).env_remove(DARK_MODE_ENV);
    cmd
}

const INCOMPLETE_TOML: &str = r##"
darkMode = "media"
content = ["./src/**/*.html", ""]

[theme.extend.colors.accent]
50 = "#fff7ed"
500 = "#f97316"
"##;

// ============================================================================
// Basic CLI Tests
// ============================================================================

#[test]
fn test_cli_version() {
    let mut cmd = Command::cargo_bin("windloom").unwrap();
    cmd.arg("--version");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("0.1.0"));
}

#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("windloom").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("shade"));
}

// ============================================================================
// init
// ============================================================================

#[test]
fn test_init_writes_brand_theme() {
    let temp = TempDir::new().unwrap();

    windloom(&temp)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created config file"));

    let written = fs::read_to_string(temp.path().join("windloom.toml")).unwrap();
    assert!(written.contains("darkMode = \"class\""));
    assert!(written.contains("#2f74ff"));
}

#[test]
fn test_init_refuses_to_overwrite() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("windloom.toml");
    fs::write(&path, "darkMode = \"media\"\ncontent = [\"*.html\"]\n").unwrap();

    windloom(&temp)
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));

    assert!(fs::read_to_string(&path).unwrap().contains("media"));

    windloom(&temp).args(["init", "--force"]).assert().success();
    assert!(fs::read_to_string(&path).unwrap().contains("class"));
}

#[test]
fn test_init_json_format() {
    let temp = TempDir::new().unwrap();

    windloom(&temp).args(["init", "-f", "json"]).assert().success();

    let written = fs::read_to_string(temp.path().join("windloom.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(value["darkMode"], "class");
}

// ============================================================================
// show / shade
// ============================================================================

#[test]
fn test_show_js_uses_built_in_theme() {
    let temp = TempDir::new().unwrap();

    windloom(&temp)
        .args(["show", "-f", "js"])
        .assert()
        .success()
        .stdout(predicate::str::contains("module.exports = {"))
        .stdout(predicate::str::contains("darkMode: 'class'"))
        .stdout(predicate::str::contains("'./**/templates/**/*.html'"));
}

#[test]
fn test_show_css_variables() {
    let temp = TempDir::new().unwrap();

    windloom(&temp)
        .args(["show", "--format", "css"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--color-brand-500: #2f74ff;"));
}

#[test]
fn test_shade_prints_hex() {
    let temp = TempDir::new().unwrap();

    windloom(&temp)
        .args(["shade", "brand", "500"])
        .assert()
        .success()
        .stdout(predicate::str::diff("#2f74ff\n"));
}

#[test]
fn test_shade_unknown_palette() {
    let temp = TempDir::new().unwrap();

    windloom(&temp)
        .args(["shade", "accent", "500"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("available: brand"));
}

#[test]
fn test_shade_invalid_key() {
    let temp = TempDir::new().unwrap();

    windloom(&temp)
        .args(["shade", "brand", "550"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid shade key"));
}

// ============================================================================
// Config resolution
// ============================================================================

#[test]
fn test_discovered_config_file() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("windloom.json"),
        r#"{ "darkMode": "media", "content": ["./src/**/*.html"] }"#,
    )
    .unwrap();

    windloom(&temp)
        .args(["show", "-f", "js"])
        .assert()
        .success()
        .stdout(predicate::str::contains("darkMode: 'media'"));
}

#[test]
fn test_dark_mode_flag_beats_env() {
    let temp = TempDir::new().unwrap();

    windloom(&temp)
        .env(DARK_MODE_ENV, "media")
        .args(["--dark-mode", "selector", "show", "-f", "js"])
        .assert()
        .success()
        .stdout(predicate::str::contains("darkMode: 'selector'"));
}

#[test]
fn test_dark_mode_env_override() {
    let temp = TempDir::new().unwrap();

    windloom(&temp)
        .env(DARK_MODE_ENV, "media")
        .args(["show", "-f", "js"])
        .assert()
        .success()
        .stdout(predicate::str::contains("darkMode: 'media'"));
}

#[test]
fn test_invalid_dark_mode_flag_names_the_flag() {
    let temp = TempDir::new().unwrap();

    windloom(&temp)
        .args(["--dark-mode", "sometimes", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--dark-mode"))
        .stderr(predicate::str::contains("'sometimes' is not a dark mode strategy"))
        .stderr(predicate::str::contains(DARK_MODE_ENV).not());
}

#[test]
fn test_invalid_dark_mode_env_names_the_variable() {
    let temp = TempDir::new().unwrap();

    windloom(&temp)
        .env(DARK_MODE_ENV, "sometimes")
        .arg("show")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value for WINDLOOM_DARK_MODE: sometimes"));
}

#[test]
fn test_layered_config_with_empty_local_file() {
    let temp = TempDir::new().unwrap();
    let base = temp.path().join("base.toml");
    let local = temp.path().join("local.yaml");
    fs::write(&base, "darkMode = \"class\"\ncontent = [\"./src/**/*.html\"]\n").unwrap();
    fs::write(&local, "").unwrap();

    windloom(&temp)
        .arg("-C")
        .arg(&base)
        .arg("-C")
        .arg(&local)
        .args(["show", "-f", "js"])
        .assert()
        .success()
        .stdout(predicate::str::contains("darkMode: 'class'"));
}

#[test]
fn test_layered_config_files() {
    let temp = TempDir::new().unwrap();
    let base = temp.path().join("base.toml");
    let local = temp.path().join("local.json");
    fs::write(&base, "darkMode = \"class\"\ncontent = [\"./src/**/*.html\"]\n").unwrap();
    fs::write(&local, r#"{ "darkMode": "media", "content": ["./lib/**/*.js"] }"#).unwrap();

    windloom(&temp)
        .arg("-C")
        .arg(&base)
        .arg("-C")
        .arg(&local)
        .args(["show", "-f", "js"])
        .assert()
        .success()
        .stdout(predicate::str::contains("darkMode: 'media'"))
        .stdout(predicate::str::contains("'./src/**/*.html'"))
        .stdout(predicate::str::contains("'./lib/**/*.js'"));
}

// ============================================================================
// validate
// ============================================================================

#[test]
fn test_validate_built_in_theme() {
    let temp = TempDir::new().unwrap();

    windloom(&temp)
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("built-in brand theme"))
        .stdout(predicate::str::contains(".dark &"));
}

#[test]
fn test_validate_reports_every_problem() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("broken.toml");
    fs::write(&path, INCOMPLETE_TOML).unwrap();

    windloom(&temp)
        .arg("validate")
        .arg("-C")
        .arg(&path)
        .assert()
        .failure()
        .stdout(predicate::str::contains("Configuration is invalid"))
        .stdout(predicate::str::contains("accent"))
        .stderr(predicate::str::contains("2 problem(s) found"));
}

#[test]
fn test_validate_rejects_malformed_color() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("windloom.toml");
    fs::write(
        &path,
        "content = [\"*.html\"]\n[theme.extend.colors.brand]\n500 = \"blue\"\n",
    )
    .unwrap();

    windloom(&temp)
        .arg("validate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("blue"));
}

// ============================================================================
// emit / scan
// ============================================================================

#[test]
fn test_emit_writes_default_file() {
    let temp = TempDir::new().unwrap();

    windloom(&temp).arg("emit").assert().success();

    let module = fs::read_to_string(temp.path().join("tailwind.config.js")).unwrap();
    assert!(module.starts_with("/** @type {import('tailwindcss').Config} */"));
    assert!(module.contains("500: '#2f74ff',"));
}

#[test]
fn test_emit_schema_to_stdout() {
    let temp = TempDir::new().unwrap();

    windloom(&temp)
        .args(["emit", "-k", "schema", "-o", "-"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"darkMode\""));

    assert!(!temp.path().join("windloom.schema.json").exists());
}

#[test]
fn test_emit_css_to_nested_path() {
    let temp = TempDir::new().unwrap();

    windloom(&temp)
        .args(["emit", "--kind", "css", "--out", "build/css/theme.css"])
        .assert()
        .success();

    let css = fs::read_to_string(temp.path().join("build/css/theme.css")).unwrap();
    assert!(css.starts_with(":root {"));
}

#[test]
fn test_scan_lists_matching_files() {
    let temp = TempDir::new().unwrap();
    let templates = temp.path().join("shop/templates");
    let scripts = temp.path().join("dashboard/static");
    fs::create_dir_all(&templates).unwrap();
    fs::create_dir_all(&scripts).unwrap();
    fs::create_dir_all(temp.path().join("node_modules/pkg/templates")).unwrap();
    fs::write(templates.join("index.html"), "<div class=\"p-4\"></div>").unwrap();
    fs::write(templates.join("notes.txt"), "not markup").unwrap();
    fs::write(scripts.join("app.js"), "export {}").unwrap();
    fs::write(
        temp.path().join("node_modules/pkg/templates/vendor.html"),
        "<div></div>",
    )
    .unwrap();

    windloom(&temp)
        .arg("scan")
        .assert()
        .success()
        .stdout(predicate::str::contains("shop/templates/index.html"))
        .stdout(predicate::str::contains("dashboard/static/app.js"))
        .stdout(predicate::str::contains("notes.txt").not())
        .stdout(predicate::str::contains("vendor.html").not())
        .stderr(predicate::str::contains("2 of"));
}
