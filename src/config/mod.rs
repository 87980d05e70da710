// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language
//! - `[gallery]` - Image list and the asset root they resolve against
//! - `[slideshow]` - Auto-advance period and crossfade durations
//!
//! # Examples
//!
//! ```no_run
//! use iced_gallery::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (config, _warning) = config::load();
//!
//! let period = config.slideshow_interval();
//! ```
//!
//! The gallery never writes the file back; it is edited by hand.

pub mod defaults;
pub mod paths;

pub use defaults::*;

use crate::domain::gallery::{FadeDuration, ImageList, ImageRef, SlideshowInterval};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Sections
// =============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// Locale override in BCP-47 form (e.g. `fr`, `en-US`).
    #[serde(default)]
    pub language: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GalleryConfig {
    /// Image references in display order.
    #[serde(default = "default_images")]
    pub images: Vec<String>,
    /// Directory image references resolve against.
    #[serde(default)]
    pub asset_root: Option<PathBuf>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            images: default_images(),
            asset_root: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SlideshowConfig {
    #[serde(default = "default_interval_ms")]
    pub interval_ms: Option<u64>,
    #[serde(default = "default_fade_out_ms")]
    pub fade_out_ms: Option<u64>,
    #[serde(default = "default_fade_in_ms")]
    pub fade_in_ms: Option<u64>,
}

impl Default for SlideshowConfig {
    fn default() -> Self {
        Self {
            interval_ms: default_interval_ms(),
            fade_out_ms: default_fade_out_ms(),
            fade_in_ms: default_fade_in_ms(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub gallery: GalleryConfig,
    #[serde(default)]
    pub slideshow: SlideshowConfig,
}

impl Config {
    /// Builds the validated image list.
    ///
    /// Fails with [`Error::EmptyGallery`](crate::error::Error::EmptyGallery) when no image is configured.
    pub fn image_list(&self) -> Result<ImageList> {
        ImageList::new(self.gallery.images.iter().map(ImageRef::new).collect())
    }

    /// Directory image references resolve against.
    pub fn asset_root(&self) -> PathBuf {
        self.gallery
            .asset_root
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_ASSET_ROOT))
    }

    pub fn slideshow_interval(&self) -> SlideshowInterval {
        self.slideshow
            .interval_ms
            .map(SlideshowInterval::from_millis)
            .unwrap_or_default()
    }

    pub fn fade_out(&self) -> FadeDuration {
        FadeDuration::from_millis(self.slideshow.fade_out_ms.unwrap_or(DEFAULT_FADE_OUT_MS))
    }

    pub fn fade_in(&self) -> FadeDuration {
        FadeDuration::from_millis(self.slideshow.fade_in_ms.unwrap_or(DEFAULT_FADE_IN_MS))
    }
}

fn default_images() -> Vec<String> {
    DEFAULT_IMAGES.iter().map(|path| (*path).to_string()).collect()
}

fn default_interval_ms() -> Option<u64> {
    Some(DEFAULT_SLIDESHOW_INTERVAL_MS)
}

fn default_fade_out_ms() -> Option<u64> {
    Some(DEFAULT_FADE_OUT_MS)
}

fn default_fade_in_ms() -> Option<u64> {
    Some(DEFAULT_FADE_IN_MS)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with the i18n key of a warning explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "falling back to default config");
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::time::Duration;
    use tempfile::tempdir;

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.general.language, None);
        assert_eq!(config.gallery.images.len(), 9);
        assert_eq!(config.gallery.images[0], "images/image1.jpeg");
        assert_eq!(config.slideshow.interval_ms, Some(2000));
        assert_eq!(config.slideshow.fade_out_ms, Some(500));
        assert_eq!(config.slideshow.fade_in_ms, Some(500));
        assert_eq!(config.asset_root(), PathBuf::from("assets"));
    }

    #[test]
    fn serialized_config_loads_back_unchanged() {
        let mut config = Config::default();
        config.general.language = Some("fr".to_string());
        config.gallery.images = vec!["a.png".into(), "b.png".into()];
        config.slideshow.interval_ms = Some(3500);

        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        let content = toml::to_string_pretty(&config).expect("failed to serialize config");
        fs::create_dir_all(temp_dir.path().join("nested")).expect("failed to create dir");
        fs::write(&config_path, content).expect("failed to write config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let result = load_from_path(&config_path);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn partial_file_fills_missing_sections_with_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[slideshow]\ninterval_ms = 4000\n").expect("write file");

        let loaded = load_from_path(&config_path).expect("load should succeed");
        assert_eq!(loaded.slideshow.interval_ms, Some(4000));
        assert_eq!(loaded.slideshow.fade_out_ms, Some(DEFAULT_FADE_OUT_MS));
        assert_eq!(loaded.gallery.images.len(), DEFAULT_IMAGES.len());
    }

    #[test]
    fn load_with_override_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert!(warning.is_none(), "should not warn for missing file");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_with_override_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();
        fs::write(base_dir.join("settings.toml"), "not = valid = toml").expect("write file");

        let (config, warning) = load_with_override(Some(base_dir));
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn empty_image_list_is_rejected() {
        let mut config = Config::default();
        config.gallery.images.clear();
        assert!(matches!(config.image_list(), Err(Error::EmptyGallery)));
    }

    #[test]
    fn timing_accessors_clamp_out_of_range_values() {
        let mut config = Config::default();
        config.slideshow.interval_ms = Some(1);
        config.slideshow.fade_out_ms = Some(1_000_000);

        assert_eq!(
            config.slideshow_interval().as_duration(),
            Duration::from_millis(MIN_SLIDESHOW_INTERVAL_MS)
        );
        assert_eq!(
            config.fade_out().as_duration(),
            Duration::from_millis(MAX_FADE_MS)
        );
    }

    #[test]
    fn missing_interval_uses_default() {
        let mut config = Config::default();
        config.slideshow.interval_ms = None;
        assert_eq!(
            config.slideshow_interval().as_duration(),
            Duration::from_millis(DEFAULT_SLIDESHOW_INTERVAL_MS)
        );
    }
}
