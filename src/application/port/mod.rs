// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! # Available Ports
//!
//! - [`image_source`]: Resolving an `ImageRef` into encoded image bytes
//!
//! # Design Notes
//!
//! - Traits use domain types only (no Iced handles)
//! - Methods are synchronous; lookups are small bundled files

pub mod image_source;

pub use image_source::{ImageBytes, ImageSource};
