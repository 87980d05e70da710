// SPDX-License-Identifier: MPL-2.0
//! Image identifiers and the ordered, non-empty list that holds them.

use crate::error::{Error, Result};
use std::fmt;

/// Opaque identifier locating one image's bytes (a path relative to the asset root).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ImageRef(String);

impl ImageRef {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ImageRef {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ImageRef {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&String> for ImageRef {
    fn from(value: &String) -> Self {
        Self::new(value.as_str())
    }
}

/// Ordered gallery contents. Insertion order is display order.
///
/// Guaranteed non-empty, so index arithmetic modulo [`len`](Self::len) is
/// always defined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageList {
    images: Vec<ImageRef>,
}

impl ImageList {
    /// Creates the list, rejecting an empty sequence.
    pub fn new(images: Vec<ImageRef>) -> Result<Self> {
        if images.is_empty() {
            return Err(Error::EmptyGallery);
        }
        Ok(Self { images })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Always `false`; present for API symmetry with collections.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ImageRef> {
        self.images.get(index)
    }

    /// Returns the image at `index` modulo the list length.
    #[must_use]
    pub fn wrapped(&self, index: usize) -> &ImageRef {
        &self.images[index % self.images.len()]
    }

    /// Index following `index`, wrapping to the first image after the last.
    #[must_use]
    pub fn next_index(&self, index: usize) -> usize {
        (index + 1) % self.images.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ImageRef> {
        self.images.iter()
    }
}

impl<'a> IntoIterator for &'a ImageList {
    type Item = &'a ImageRef;
    type IntoIter = std::slice::Iter<'a, ImageRef>;

    fn into_iter(self) -> Self::IntoIter {
        self.images.iter()
    }
}
