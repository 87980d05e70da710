// SPDX-License-Identifier: MPL-2.0
use iced_gallery::app::{Flags, Startup};
use iced_gallery::config::{self, Config};
use iced_gallery::error::Error;
use iced_gallery::i18n::I18n;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

/// Writes `config` the way a user would hand-edit settings.toml.
fn write_config(config: &Config, path: &Path) {
    let content = toml::to_string_pretty(config).expect("Failed to serialize config");
    fs::write(path, content).expect("Failed to write config file");
}

#[test]
fn test_language_change_via_config() {
    // Create a temporary directory for the config file
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    // 1. Initial config: en-US
    let mut initial_config = Config::default();
    initial_config.general.language = Some("en-US".to_string());
    write_config(&initial_config, &temp_config_file_path);

    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");
    assert_eq!(i18n_en.tr("button-next"), "Next");

    // 2. Change config to fr
    let mut french_config = Config::default();
    french_config.general.language = Some("fr".to_string());
    write_config(&french_config, &temp_config_file_path);

    let loaded_french_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load french config from path");
    let i18n_fr = I18n::new(None, &loaded_french_config);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");
    assert_eq!(i18n_fr.tr("button-next"), "Suivant");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_cli_language_overrides_config() {
    let mut config = Config::default();
    config.general.language = Some("fr".to_string());

    let i18n = I18n::new(Some("en-US".to_string()), &config);
    assert_eq!(i18n.tr("window-title"), "Internet Gallery App");
}

#[test]
fn test_startup_reads_gallery_from_config_dir() {
    let dir = tempdir().expect("Failed to create temporary directory");
    fs::write(
        dir.path().join("settings.toml"),
        r#"
[gallery]
images = ["one.jpeg", "two.jpeg"]
asset_root = "/srv/gallery"

[slideshow]
interval_ms = 4000
"#,
    )
    .expect("Failed to write config file");

    let startup = Startup::resolve(Flags {
        config_dir: Some(dir.path().to_path_buf()),
        ..Flags::default()
    })
    .expect("gallery is valid");

    assert_eq!(startup.images.len(), 2);
    assert_eq!(startup.asset_root, std::path::PathBuf::from("/srv/gallery"));
    assert_eq!(startup.timing.interval.as_millis(), 4000);
    assert!(startup.config_warning.is_none());
}

#[test]
fn test_startup_rejects_empty_gallery() {
    let dir = tempdir().expect("Failed to create temporary directory");
    fs::write(dir.path().join("settings.toml"), "[gallery]\nimages = []\n")
        .expect("Failed to write config file");

    let result = Startup::resolve(Flags {
        config_dir: Some(dir.path().to_path_buf()),
        ..Flags::default()
    });

    assert!(matches!(result, Err(Error::EmptyGallery)));
}

#[test]
fn test_malformed_config_falls_back_with_warning() {
    let dir = tempdir().expect("Failed to create temporary directory");
    fs::write(dir.path().join("settings.toml"), "[gallery\nimages = ")
        .expect("Failed to write config file");

    let startup = Startup::resolve(Flags {
        config_dir: Some(dir.path().to_path_buf()),
        ..Flags::default()
    })
    .expect("defaults are valid");

    assert_eq!(startup.images.len(), 9);
    assert_eq!(
        startup.config_warning.as_deref(),
        Some("notification-config-load-error")
    );
}
