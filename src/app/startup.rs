// SPDX-License-Identifier: MPL-2.0
//! Startup resolution: merges CLI flags into the loaded configuration and
//! validates the gallery before any window is opened.

use super::Flags;
use crate::application::gallery::Timing;
use crate::config::{self, Config};
use crate::domain::gallery::ImageList;
use crate::error::Result;
use std::path::PathBuf;

/// Everything the application needs to boot, already validated.
#[derive(Debug, Clone)]
pub struct Startup {
    pub config: Config,
    /// i18n key of a warning to show once the window is up.
    pub config_warning: Option<String>,
    pub lang: Option<String>,
    pub images: ImageList,
    pub asset_root: PathBuf,
    pub timing: Timing,
}

impl Startup {
    /// Loads the configuration and applies the CLI overrides.
    ///
    /// Images given on the command line resolve against the working directory
    /// unless `--assets` names another root.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyGallery`] if no image is left to show.
    ///
    /// [`Error::EmptyGallery`]: crate::error::Error::EmptyGallery
    pub fn resolve(flags: Flags) -> Result<Self> {
        let (config, config_warning) = config::load_with_override(flags.config_dir.clone());
        Self::from_config(config, config_warning, flags)
    }

    pub fn from_config(
        mut config: Config,
        config_warning: Option<String>,
        flags: Flags,
    ) -> Result<Self> {
        let cli_images = !flags.images.is_empty();
        if cli_images {
            config.gallery.images = flags.images;
        }

        let asset_root = match flags.asset_root {
            Some(root) => root,
            None if cli_images => PathBuf::from("."),
            None => config.asset_root(),
        };

        let images = config.image_list()?;
        let timing = Timing {
            interval: config.slideshow_interval(),
            fade_out: config.fade_out(),
            fade_in: config.fade_in(),
        };

        tracing::info!(
            images = images.len(),
            asset_root = %asset_root.display(),
            interval_ms = timing.interval.as_millis(),
            "gallery configured"
        );

        Ok(Self {
            config,
            config_warning,
            lang: flags.lang,
            images,
            asset_root,
            timing,
        })
    }
}
