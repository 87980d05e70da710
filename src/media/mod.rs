// SPDX-License-Identifier: MPL-2.0
//! Decoding of gallery images into renderable handles.
//!
//! - [`image`]: Full-size images for the detail view
//! - [`thumbnail`]: Circular thumbnails for the grid

pub mod image;
pub mod thumbnail;

pub use image::ImageData;
pub use thumbnail::circular_thumbnail;
