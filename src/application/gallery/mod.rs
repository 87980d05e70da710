// SPDX-License-Identifier: MPL-2.0
//! Gallery use case: the view state machine and the crossfade it schedules.

pub mod state;
pub mod transition;

pub use state::{Command, Effect, GalleryState, Mode, Outcome, Phase, SlideshowNotice, Timing};
pub use transition::{Crossfade, FadePhase, Frame};
