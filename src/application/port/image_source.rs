// SPDX-License-Identifier: MPL-2.0
//! Image resolution port.
//!
//! The gallery state machine never touches the filesystem. It asks an
//! [`ImageSource`] for the bytes behind an [`ImageRef`] and treats any
//! failure as "skip this operation".

use crate::domain::gallery::ImageRef;
use crate::error::Result;
use std::fmt;
use std::sync::Arc;

/// Encoded image bytes (JPEG, PNG, ...) shared cheaply between the state
/// machine and the renderer.
#[derive(Clone, PartialEq, Eq)]
pub struct ImageBytes(Arc<[u8]>);

impl ImageBytes {
    #[must_use]
    pub fn new(bytes: impl Into<Arc<[u8]>>) -> Self {
        Self(bytes.into())
    }

    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for ImageBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ImageBytes")
            .field(&format_args!("{} bytes", self.0.len()))
            .finish()
    }
}

impl From<Vec<u8>> for ImageBytes {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes.into())
    }
}

/// Port for resolving image references.
///
/// # Errors
///
/// Implementations return [`Error::ResourceNotFound`] when nothing exists
/// behind the reference, and [`Error::Io`] for other read failures.
///
/// [`Error::ResourceNotFound`]: crate::error::Error::ResourceNotFound
/// [`Error::Io`]: crate::error::Error::Io
pub trait ImageSource {
    fn resolve(&self, image: &ImageRef) -> Result<ImageBytes>;
}

impl<S: ImageSource + ?Sized> ImageSource for &S {
    fn resolve(&self, image: &ImageRef) -> Result<ImageBytes> {
        (**self).resolve(image)
    }
}
