// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core value types with no presentation dependencies.
//!
//! # Modules
//!
//! - [`gallery`]: Gallery types ([`ImageRef`](gallery::ImageRef),
//!   [`ImageList`](gallery::ImageList), [`SlideshowInterval`](gallery::SlideshowInterval),
//!   [`FadeDuration`](gallery::FadeDuration))
//! - [`diagnostics`]: Diagnostics types ([`BufferCapacity`](diagnostics::BufferCapacity))

pub mod diagnostics;
pub mod gallery;
