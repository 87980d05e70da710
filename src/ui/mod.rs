// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Widgets follow the Elm-style "state down, messages up" pattern: they render
//! from borrowed state and report user intent as messages.
//!
//! - [`gallery`] - Thumbnail grid, detail view and button row
//! - [`notifications`] - Toast notification system for user feedback
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod design_tokens;
pub mod gallery;
pub mod notifications;
pub mod styles;
