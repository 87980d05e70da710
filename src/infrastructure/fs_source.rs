// SPDX-License-Identifier: MPL-2.0
//! Filesystem image source.

use crate::application::port::{ImageBytes, ImageSource};
use crate::domain::gallery::ImageRef;
use crate::error::{Error, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Resolves image references as paths relative to an asset root.
///
/// Absolute references are read as-is, so images passed on the command line
/// work without an asset root.
#[derive(Debug, Clone)]
pub struct FsImageSource {
    root: PathBuf,
}

impl FsImageSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path an image reference resolves to.
    #[must_use]
    pub fn path_of(&self, image: &ImageRef) -> PathBuf {
        let relative = Path::new(image.as_str());
        if relative.is_absolute() {
            relative.to_path_buf()
        } else {
            self.root.join(relative)
        }
    }
}

impl ImageSource for FsImageSource {
    fn resolve(&self, image: &ImageRef) -> Result<ImageBytes> {
        let path = self.path_of(image);
        match fs::read(&path) {
            Ok(bytes) => {
                tracing::debug!(path = %path.display(), size = bytes.len(), "resolved image");
                Ok(ImageBytes::from(bytes))
            }
            Err(err) if matches!(err.kind(), ErrorKind::NotFound | ErrorKind::IsADirectory) => {
                Err(Error::ResourceNotFound(image.clone()))
            }
            Err(err) => Err(Error::from(err)),
        }
    }
}
