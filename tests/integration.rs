// SPDX-License-Identifier: MPL-2.0
//! End-to-end checks for configuration and collection loading through
//! real files.

use std::fs;

use tempfile::tempdir;
use viewfinder::collection::Collection;
use viewfinder::config::{self, Config, DEFAULT_ENGAGE_SCROLL_PX};

#[test]
fn engage_threshold_survives_config_round_trip() {
    let dir = tempdir().expect("failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    let custom = Config {
        engage_scroll_px: Some(64.0),
        start_index: Some(1),
    };
    config::save_to_path(&custom, &config_path).expect("failed to save config");

    let loaded = config::load_from_path(&config_path).expect("failed to load config");
    assert_eq!(loaded.engage_scroll_px, Some(64.0));
    assert_eq!(loaded.start_index, Some(1));
}

#[test]
fn missing_config_fields_fall_back_to_defaults() {
    let dir = tempdir().expect("failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");
    fs::write(&config_path, "start_index = 2\n").expect("failed to write config");

    let loaded = config::load_from_path(&config_path).expect("failed to load config");
    assert_eq!(loaded.start_index, Some(2));
    assert_eq!(loaded.engage_scroll_px, None);
    assert_eq!(
        loaded.engage_scroll_px.unwrap_or(DEFAULT_ENGAGE_SCROLL_PX),
        DEFAULT_ENGAGE_SCROLL_PX
    );
}

#[test]
fn manifest_images_resolve_next_to_the_manifest() {
    let dir = tempdir().expect("failed to create temporary directory");
    let manifest_path = dir.path().join("collection.toml");
    fs::write(
        &manifest_path,
        r#"
title = "Harbor"

[[photo]]
image = "img/one.jpg"
title = "One"
photographer = "A. Writer"

[[photo]]
image = "img/two.jpg"
title = "Two"
photographer = "B. Writer"
"#,
    )
    .expect("failed to write manifest");

    let collection = Collection::load(&manifest_path).expect("failed to load collection");
    assert_eq!(collection.title.as_deref(), Some("Harbor"));
    assert_eq!(collection.len(), 2);
    assert_eq!(
        collection.photos()[0].source,
        dir.path().join("img/one.jpg")
    );
    assert_eq!(collection.photos()[1].title, "Two");
}

#[test]
fn empty_manifest_is_rejected_before_the_gallery_exists() {
    let dir = tempdir().expect("failed to create temporary directory");
    let manifest_path = dir.path().join("collection.toml");
    fs::write(&manifest_path, "title = \"Nothing\"\n").expect("failed to write manifest");

    assert!(Collection::load(&manifest_path).is_err());
}
