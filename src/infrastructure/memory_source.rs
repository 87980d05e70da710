// SPDX-License-Identifier: MPL-2.0
//! In-memory image source, for embedders that already hold decoded assets
//! and for exercising the gallery without touching the disk.

use crate::application::port::{ImageBytes, ImageSource};
use crate::domain::gallery::ImageRef;
use crate::error::{Error, Result};
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct MemoryImageSource {
    images: HashMap<ImageRef, ImageBytes>,
}

impl MemoryImageSource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `bytes` under `image`, replacing any previous entry.
    #[must_use]
    pub fn with_image(mut self, image: impl Into<ImageRef>, bytes: impl Into<ImageBytes>) -> Self {
        self.insert(image, bytes);
        self
    }

    pub fn insert(&mut self, image: impl Into<ImageRef>, bytes: impl Into<ImageBytes>) {
        self.images.insert(image.into(), bytes.into());
    }

    /// Forgets `image`, so later lookups fail with `ResourceNotFound`.
    pub fn remove(&mut self, image: &ImageRef) -> Option<ImageBytes> {
        self.images.remove(image)
    }
}

impl ImageSource for MemoryImageSource {
    fn resolve(&self, image: &ImageRef) -> Result<ImageBytes> {
        self.images
            .get(image)
            .cloned()
            .ok_or_else(|| Error::ResourceNotFound(image.clone()))
    }
}
