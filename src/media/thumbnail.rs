// SPDX-License-Identifier: MPL-2.0
//! Circular thumbnails for the gallery grid.
//!
//! The source image is fitted into a `size`×`size` box preserving its aspect
//! ratio, centred on a transparent canvas, then clipped to the inscribed
//! circle. Pixels outside the circle are fully transparent.

use super::image::ImageData;
use crate::application::port::ImageBytes;
use crate::error::Result;
use image_rs::{imageops, RgbaImage};

/// Decodes `bytes` and renders a circular thumbnail of edge `size`.
///
/// # Errors
///
/// Returns [`Error::Decode`] if the bytes are not a supported image.
///
/// [`Error::Decode`]: crate::error::Error::Decode
pub fn circular_thumbnail(bytes: &ImageBytes, size: u32) -> Result<ImageData> {
    let canvas = render(bytes, size)?;
    let (width, height) = canvas.dimensions();
    Ok(ImageData::from_rgba(width, height, canvas.into_raw()))
}

fn render(bytes: &ImageBytes, size: u32) -> Result<RgbaImage> {
    let size = size.max(1);
    let source = image_rs::load_from_memory(bytes.as_slice())?;
    let fitted = source.thumbnail(size, size).to_rgba8();

    let mut canvas = RgbaImage::new(size, size);
    let x = i64::from(size.saturating_sub(fitted.width()) / 2);
    let y = i64::from(size.saturating_sub(fitted.height()) / 2);
    imageops::overlay(&mut canvas, &fitted, x, y);

    clip_to_circle(&mut canvas);
    Ok(canvas)
}

/// Clears every pixel whose centre lies outside the inscribed circle.
fn clip_to_circle(canvas: &mut RgbaImage) {
    let radius = canvas.width().min(canvas.height()) as f32 / 2.0;
    let center_x = canvas.width() as f32 / 2.0;
    let center_y = canvas.height() as f32 / 2.0;
    let radius_sq = radius * radius;

    for (x, y, pixel) in canvas.enumerate_pixels_mut() {
        let dx = x as f32 + 0.5 - center_x;
        let dy = y as f32 + 0.5 - center_y;
        if dx * dx + dy * dy > radius_sq {
            pixel.0[3] = 0;
        }
    }
}
