// SPDX-License-Identifier: MPL-2.0
//! `iced_gallery` is a single-window image gallery built with the Iced GUI framework.
//!
//! It shows a grid of circular thumbnails, opens any of them full size, and
//! runs a crossfading slideshow. The view logic lives in a plain state
//! machine ([`application::gallery::GalleryState`]) that returns effects
//! instead of touching widgets, so it can be driven and tested headless.
//!
//! # Layers
//!
//! - [`domain`]: Image references, the non-empty image list, clamped timings
//! - [`application`]: The gallery state machine and the image source port
//! - [`infrastructure`]: Filesystem and in-memory image sources
//! - [`app`], [`ui`], [`media`]: The Iced shell, widgets and decoding

#![doc(html_root_url = "https://docs.rs/iced_gallery/0.1.0")]

pub mod app;
pub mod application;
pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod media;
pub mod ui;
