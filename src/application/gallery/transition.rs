// SPDX-License-Identifier: MPL-2.0
//! Two-phase crossfade between the previously shown image and the next one.
//!
//! A [`Crossfade`] is plain data: the state machine creates it when `next`
//! runs and the renderer samples it on every animation tick. The old image
//! fades out completely before the new one fades in; the core never waits
//! for either phase.

use crate::domain::gallery::{FadeDuration, ImageRef};
use std::time::{Duration, Instant};

/// Which half of the crossfade a sample falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadePhase {
    FadeOut,
    FadeIn,
    Done,
}

/// What the main image slot shows at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame<'a> {
    pub image: &'a ImageRef,
    pub opacity: f32,
    pub phase: FadePhase,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Crossfade {
    from: Option<ImageRef>,
    to: ImageRef,
    /// Effective fade-out length, already scaled by `start_opacity`.
    fade_out: Duration,
    fade_in: Duration,
    start_opacity: f32,
    started_at: Instant,
}

impl Crossfade {
    /// Starts a crossfade from a fully opaque `from` image.
    ///
    /// Without a `from` image the fade-out half is skipped.
    #[must_use]
    pub fn new(
        from: Option<ImageRef>,
        to: ImageRef,
        fade_out: FadeDuration,
        fade_in: FadeDuration,
        now: Instant,
    ) -> Self {
        let (fade_out, start_opacity) = if from.is_some() {
            (fade_out.as_duration(), 1.0)
        } else {
            (Duration::ZERO, 0.0)
        };
        Self {
            from,
            to,
            fade_out,
            fade_in: fade_in.as_duration(),
            start_opacity,
            started_at: now,
        }
    }

    /// Replaces the target of an in-flight crossfade (override-latest).
    ///
    /// The new fade-out starts from whatever is visible at `now`, at its
    /// current opacity, and is shortened proportionally so the fade speed
    /// stays constant.
    #[must_use]
    pub fn retarget(
        &self,
        to: ImageRef,
        fade_out: FadeDuration,
        fade_in: FadeDuration,
        now: Instant,
    ) -> Self {
        let frame = self.sample(now);
        let visible = frame.image.clone();
        let opacity = frame.opacity.clamp(0.0, 1.0);
        Self {
            from: Some(visible),
            to,
            fade_out: fade_out.as_duration().mul_f32(opacity),
            fade_in: fade_in.as_duration(),
            start_opacity: opacity,
            started_at: now,
        }
    }

    #[must_use]
    pub fn from(&self) -> Option<&ImageRef> {
        self.from.as_ref()
    }

    #[must_use]
    pub fn to(&self) -> &ImageRef {
        &self.to
    }

    /// Total length of both phases.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.fade_out + self.fade_in
    }

    /// Samples the main image slot at `now`.
    #[must_use]
    pub fn sample(&self, now: Instant) -> Frame<'_> {
        let elapsed = now.saturating_duration_since(self.started_at);

        if let Some(from) = &self.from {
            if elapsed < self.fade_out {
                let progress = ratio(elapsed, self.fade_out);
                return Frame {
                    image: from,
                    opacity: self.start_opacity * (1.0 - progress),
                    phase: FadePhase::FadeOut,
                };
            }
        }

        let fade_in_elapsed = elapsed.saturating_sub(self.fade_out);
        if fade_in_elapsed < self.fade_in {
            Frame {
                image: &self.to,
                opacity: ratio(fade_in_elapsed, self.fade_in),
                phase: FadePhase::FadeIn,
            }
        } else {
            Frame {
                image: &self.to,
                opacity: 1.0,
                phase: FadePhase::Done,
            }
        }
    }

    #[must_use]
    pub fn is_finished(&self, now: Instant) -> bool {
        self.sample(now).phase == FadePhase::Done
    }
}

fn ratio(elapsed: Duration, total: Duration) -> f32 {
    if total.is_zero() {
        1.0
    } else {
        (elapsed.as_secs_f32() / total.as_secs_f32()).clamp(0.0, 1.0)
    }
}
