// SPDX-License-Identifier: MPL-2.0
//! Gallery domain types.
//!
//! The image set is fixed once the gallery is initialized, so [`ImageList`]
//! is validated at construction and never mutated afterwards.

mod image_ref;
pub mod newtypes;

pub use image_ref::{ImageList, ImageRef};
pub use newtypes::{FadeDuration, SlideshowInterval};
