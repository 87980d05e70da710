// SPDX-License-Identifier: MPL-2.0
//! Gallery screens: the circular thumbnail grid, the detail view and the
//! button row under them.
//!
//! These widgets only render and report user intent. Every [`Message`] is
//! translated by the application into a gallery state machine command.

pub mod controls;
pub mod detail;
pub mod thumbnails;

pub use detail::DetailView;
pub use thumbnails::Thumbnails;

/// User intent reported by the gallery widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// A thumbnail was clicked.
    Select(usize),
    /// The cursor entered or left a thumbnail.
    Hover { index: usize, entering: bool },
    Next,
    Back,
    ToggleSlideshow,
}
