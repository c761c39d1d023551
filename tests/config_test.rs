//! Integration tests for Settings config loading with layered merge semantics.
//!
//! Note: These tests run without a global config (temp directories only),
//! so they effectively test local config merging with defaults.

use std::fs;

use tempfile::TempDir;

use taxonomy::config::{local_config_path, Settings};

#[test]
fn given_no_local_config_when_load_then_defaults() {
    let dir = TempDir::new().unwrap();

    let settings = Settings::load(Some(dir.path())).expect("load settings");

    assert_eq!(settings.render.outer_tag, "ul");
    assert_eq!(settings.render.inner_tag, "li");
}

#[test]
fn given_local_config_when_load_then_overrides_only_specified_fields() {
    let dir = TempDir::new().unwrap();
    fs::write(
        local_config_path(dir.path()),
        r#"
show_ids = false

[render]
outer_tag = "ol"
"#,
    )
    .unwrap();

    let settings = Settings::load(Some(dir.path())).expect("load settings");

    assert_eq!(settings.render.outer_tag, "ol");
    assert_eq!(settings.render.inner_tag, "li");
    assert!(!settings.show_ids);
}

#[test]
fn given_invalid_local_config_when_load_then_config_error() {
    let dir = TempDir::new().unwrap();
    fs::write(local_config_path(dir.path()), "render = [").unwrap();

    let result = Settings::load(Some(dir.path()));

    assert!(result.is_err());
}

#[test]
fn given_env_override_when_load_then_env_wins_over_local() {
    let dir = TempDir::new().unwrap();
    fs::write(
        local_config_path(dir.path()),
        "[render]\nstart_path = \"/local\"\n",
    )
    .unwrap();

    std::env::set_var("TAXONOMY_RENDER__START_PATH", "/env");
    let settings = Settings::load(Some(dir.path()));
    std::env::remove_var("TAXONOMY_RENDER__START_PATH");

    assert_eq!(settings.expect("load settings").render.start_path, "/env");
}
