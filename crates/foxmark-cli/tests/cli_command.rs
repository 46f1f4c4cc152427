use assert_cmd::Command;
use foxmark_core::{Bookmark, BookmarkStore};
use predicates::prelude::*;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

#[allow(deprecated)]
fn get_foxmark_bin() -> PathBuf {
    assert_cmd::cargo::cargo_bin("foxmark")
}

/// Write a config.ini and a bookmark store into a temp directory
fn setup() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let store_path = temp_dir.path().join("bookmarks.json");
    BookmarkStore::new(&store_path)
        .save(&[
            Bookmark::new("Example", "work", "http://example.com", 3),
            Bookmark::new("Mail", "personal", "https://mail.example", 0),
        ])
        .unwrap();

    let config_path = write_config(temp_dir.path(), &store_path);
    (temp_dir, config_path)
}

fn write_config(dir: &Path, store_path: &Path) -> PathBuf {
    let config_path = dir.join("config.ini");
    std::fs::write(
        &config_path,
        format!(
            "[Settings]\n\
             BOOKMARKS_FILE = {}\n\
             FIREFOX_EXECUTABLE = /nonexistent/firefox\n\
             THEME_PATH = {}\n\
             SEARCH_URL = https://search.example/?q=\n\
             MENU_PROGRAM = /nonexistent/rofi\n\
             \n\
             [Profiles]\n\
             PROFILES = work, personal\n",
            store_path.display(),
            dir.join("theme.rasi").display(),
        ),
    )
    .unwrap();
    config_path
}

fn foxmark(config: &Path) -> Command {
    let mut cmd = Command::new(get_foxmark_bin());
    cmd.env_remove("FOXMARK_CONFIG").arg("--config").arg(config);
    cmd
}

#[test]
fn test_help_lists_commands() {
    let mut cmd = Command::new(get_foxmark_bin());
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("open"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("--config"))
        .stdout(predicate::str::contains("completion").not());
}

#[test]
fn test_list_prints_choices_in_menu_order() {
    let (_dir, config) = setup();

    foxmark(&config).arg("list").assert().success().stdout(
        "default search (work)\n\
         default search (personal)\n\
         Example (work) - 3\n\
         Mail (personal) - 0\n",
    );
}

#[test]
fn test_missing_config_file_fails() {
    let mut cmd = foxmark(Path::new("/nonexistent/foxmark/config.ini"));
    cmd.arg("list");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load configuration"));
}

#[test]
fn test_missing_required_key_fails() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("config.ini");
    std::fs::write(&config, "[Settings]\nSEARCH_URL = https://search.example/?q=\n").unwrap();

    foxmark(&config)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("BOOKMARKS_FILE"));
}

#[test]
fn test_config_from_environment() {
    let (_dir, config) = setup();
    let mut cmd = Command::new(get_foxmark_bin());
    cmd.env("FOXMARK_CONFIG", &config).arg("list");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Mail (personal) - 0"));
}

#[test]
fn test_check_reports_warnings_without_failing() {
    let (_dir, config) = setup();

    foxmark(&config)
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("Warning: Browser executable"))
        .stdout(predicate::str::contains("Warning: Menu theme not found"))
        .stdout(predicate::str::contains("Warning: Menu program"))
        .stdout(predicate::str::contains("2 bookmark(s) loaded"));
}

#[test]
fn test_open_dry_run_bookmark() {
    let (_dir, config) = setup();
    let store_path = config.parent().unwrap().join("bookmarks.json");
    let before = std::fs::read_to_string(&store_path).unwrap();

    foxmark(&config)
        .args(["open", "--select", "example (WORK) - 3", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "/nonexistent/firefox ext+container:name=work&url=http://example.com",
        ));

    assert_eq!(std::fs::read_to_string(&store_path).unwrap(), before);
}

#[test]
fn test_open_dry_run_web_search() {
    let (_dir, config) = setup();

    foxmark(&config)
        .args(["open", "--select", "foo bar", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "ext+container:name=work&url=https://search.example/?q=foo+bar",
        ));
}

#[test]
fn test_open_invalid_profile_exits_zero() {
    let temp_dir = TempDir::new().unwrap();
    let store_path = temp_dir.path().join("bookmarks.json");
    BookmarkStore::new(&store_path)
        .save(&[Bookmark::new("Bank", "banking", "https://bank.example", 0)])
        .unwrap();
    let config = write_config(temp_dir.path(), &store_path);

    foxmark(&config)
        .args(["open", "--select", "Bank (banking) - 0", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Profile 'banking' is invalid."))
        .stdout(predicate::str::contains("ext+container").not());
}

#[test]
fn test_open_blank_selection_is_silent() {
    let (_dir, config) = setup();

    foxmark(&config)
        .args(["open", "--select", "  ", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ext+container").not());
}

#[test]
fn test_open_without_store_file_warns_and_searches() {
    let temp_dir = TempDir::new().unwrap();
    let config = write_config(temp_dir.path(), &temp_dir.path().join("missing.json"));

    foxmark(&config)
        .args(["open", "--select", "default search (personal)", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Warning: Bookmark file not found"))
        .stdout(predicate::str::contains(
            "ext+container:name=personal&url=https://search.example/",
        ));
}
