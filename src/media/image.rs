// SPDX-License-Identifier: MPL-2.0
//! Image data handed to the renderer.

use crate::application::port::ImageBytes;
use crate::error::Result;
use iced::widget::image;
use image_rs::ImageReader;
use std::io::Cursor;

#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl ImageData {
    /// Creates a new `ImageData` from RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        let handle = image::Handle::from_rgba(width, height, pixels);
        Self {
            handle,
            width,
            height,
        }
    }

    /// Creates a new `ImageData` from encoded bytes (PNG, JPEG, etc.).
    ///
    /// Only the header is parsed here; iced decodes the pixels when the image
    /// is first drawn.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Decode`] if the format is not recognised or the header
    /// is malformed.
    ///
    /// [`Error::Decode`]: crate::error::Error::Decode
    pub fn from_encoded(bytes: &ImageBytes) -> Result<Self> {
        let (width, height) = ImageReader::new(Cursor::new(bytes.as_slice()))
            .with_guessed_format()?
            .into_dimensions()?;
        let handle = image::Handle::from_bytes(bytes.as_slice().to_vec());
        Ok(Self {
            handle,
            width,
            height,
        })
    }
}
