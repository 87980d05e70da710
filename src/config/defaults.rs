// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Gallery**: Bundled image set and grid layout
//! - **Thumbnail**: Circular thumbnail geometry and hover feedback
//! - **Slideshow**: Auto-advance period and crossfade durations
//! - **Window**: Initial window geometry

// ==========================================================================
// Gallery Defaults
// ==========================================================================

/// Images shipped with the application, in display order.
pub const DEFAULT_IMAGES: [&str; 9] = [
    "images/image1.jpeg",
    "images/image2.jpeg",
    "images/image3.jpeg",
    "images/image4.jpeg",
    "images/image5.jpeg",
    "images/image6.jpeg",
    "images/image7.jpeg",
    "images/image8.jpeg",
    "images/image9.jpeg",
];

/// Directory, relative to the working directory, image references resolve against.
pub const DEFAULT_ASSET_ROOT: &str = "assets";

/// Number of thumbnails per grid row.
pub const GRID_COLUMNS: usize = 3;

/// Horizontal and vertical gap between thumbnails (in pixels).
pub const GRID_GAP: f32 = 10.0;

// ==========================================================================
// Thumbnail Defaults
// ==========================================================================

/// Edge of the square box thumbnails are fitted into (in pixels).
pub const THUMBNAIL_SIZE: u32 = 110;

/// Opacity applied to a thumbnail while the cursor hovers it.
pub const THUMBNAIL_HOVER_OPACITY: f32 = 0.7;

// ==========================================================================
// Slideshow Defaults
// ==========================================================================

/// Default period between two automatic advances (in milliseconds).
pub const DEFAULT_SLIDESHOW_INTERVAL_MS: u64 = 2000;

/// Minimum slideshow period (in milliseconds).
pub const MIN_SLIDESHOW_INTERVAL_MS: u64 = 500;

/// Maximum slideshow period (in milliseconds).
pub const MAX_SLIDESHOW_INTERVAL_MS: u64 = 60_000;

/// Default duration of the fade-out half of a crossfade (in milliseconds).
pub const DEFAULT_FADE_OUT_MS: u64 = 500;

/// Default duration of the fade-in half of a crossfade (in milliseconds).
pub const DEFAULT_FADE_IN_MS: u64 = 500;

/// Maximum duration of either crossfade half (in milliseconds).
pub const MAX_FADE_MS: u64 = 5_000;

/// Frame period of the animation tick while a crossfade runs (~60 fps).
pub const ANIMATION_TICK_MS: u64 = 16;

// ==========================================================================
// Window Defaults
// ==========================================================================

pub const WINDOW_DEFAULT_WIDTH: f32 = 900.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 850.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(!DEFAULT_IMAGES.is_empty());
    assert!(GRID_COLUMNS > 0);
    assert!(THUMBNAIL_SIZE > 0);
    assert!(THUMBNAIL_HOVER_OPACITY > 0.0 && THUMBNAIL_HOVER_OPACITY < 1.0);

    // Slideshow validation
    assert!(MIN_SLIDESHOW_INTERVAL_MS > 0);
    assert!(MAX_SLIDESHOW_INTERVAL_MS >= MIN_SLIDESHOW_INTERVAL_MS);
    assert!(DEFAULT_SLIDESHOW_INTERVAL_MS >= MIN_SLIDESHOW_INTERVAL_MS);
    assert!(DEFAULT_SLIDESHOW_INTERVAL_MS <= MAX_SLIDESHOW_INTERVAL_MS);

    // A full crossfade fits inside one slideshow period.
    assert!(DEFAULT_FADE_OUT_MS + DEFAULT_FADE_IN_MS <= DEFAULT_SLIDESHOW_INTERVAL_MS);
    assert!(DEFAULT_FADE_OUT_MS <= MAX_FADE_MS);
    assert!(DEFAULT_FADE_IN_MS <= MAX_FADE_MS);
};
