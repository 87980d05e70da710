// SPDX-License-Identifier: MPL-2.0
//! Gallery view state machine.
//!
//! [`GalleryState`] owns the ordered image list, the current index, the
//! grid/detail mode and the slideshow flag. Commands mutate it and return an
//! [`Outcome`] listing the [`Effect`]s the presentation layer must carry out
//! (switch views, display bytes, start a crossfade, arm or cancel the
//! slideshow timer, show a notice, report a diagnostic).
//!
//! Invariants held after every command:
//! - `current_index < images.len()`
//! - `slideshow_active` implies `mode == Mode::Detail`
//!
//! Image bytes are resolved through an [`ImageSource`]. When resolution fails
//! the command is skipped: the state does not change and the outcome carries a
//! single [`Effect::Diagnostic`].

use super::transition::Crossfade;
use crate::application::port::{ImageBytes, ImageSource};
use crate::domain::gallery::{FadeDuration, ImageList, ImageRef, SlideshowInterval};
use crate::error::Error;
use std::time::{Duration, Instant};

/// Which screen the gallery shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Grid,
    Detail,
}

/// Combined mode and slideshow flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Grid,
    DetailStatic,
    DetailSlideshow,
}

/// External commands the state machine responds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Select(usize),
    Next,
    Back,
    ToggleSlideshow,
    /// Slideshow timer fired.
    Tick,
}

/// Informational notice raised by slideshow toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideshowNotice {
    Started,
    Stopped,
}

impl SlideshowNotice {
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            SlideshowNotice::Started => "notification-slideshow-started",
            SlideshowNotice::Stopped => "notification-slideshow-stopped",
        }
    }
}

/// Rendering or scheduling instruction produced by a command.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Switch to the thumbnail grid; no image is displayed.
    ShowGrid,
    /// Display `image` in the detail view.
    ShowImage { image: ImageRef, data: ImageBytes },
    /// Animate the main slot between two images.
    StartCrossfade(Crossfade),
    /// Arm the repeating slideshow timer.
    StartSlideshowTimer { period: Duration },
    StopSlideshowTimer,
    Notify(SlideshowNotice),
    /// A recoverable failure; the command was skipped.
    Diagnostic(Error),
}

/// Effects returned by a single command, in the order they should be applied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Outcome {
    effects: Vec<Effect>,
}

impl Outcome {
    fn none() -> Self {
        Self::default()
    }

    fn diagnostic(error: Error) -> Self {
        Self {
            effects: vec![Effect::Diagnostic(error)],
        }
    }

    fn push(&mut self, effect: Effect) {
        self.effects.push(effect);
    }

    #[must_use]
    pub fn effects(&self) -> &[Effect] {
        &self.effects
    }

    #[must_use]
    pub fn into_effects(self) -> Vec<Effect> {
        self.effects
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    /// Errors reported by the command.
    pub fn diagnostics(&self) -> impl Iterator<Item = &Error> {
        self.effects.iter().filter_map(|effect| match effect {
            Effect::Diagnostic(error) => Some(error),
            _ => None,
        })
    }

    pub fn notices(&self) -> impl Iterator<Item = SlideshowNotice> + '_ {
        self.effects.iter().filter_map(|effect| match effect {
            Effect::Notify(notice) => Some(*notice),
            _ => None,
        })
    }

    /// Image the command asked to display, if any.
    #[must_use]
    pub fn shown_image(&self) -> Option<&ImageRef> {
        self.effects.iter().find_map(|effect| match effect {
            Effect::ShowImage { image, .. } => Some(image),
            _ => None,
        })
    }
}

/// Slideshow period and crossfade durations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Timing {
    pub interval: SlideshowInterval,
    pub fade_out: FadeDuration,
    pub fade_in: FadeDuration,
}

#[derive(Debug, Clone)]
pub struct GalleryState {
    images: ImageList,
    current_index: usize,
    mode: Mode,
    slideshow_active: bool,
    crossfade: Option<Crossfade>,
    timing: Timing,
}

impl GalleryState {
    /// Creates the state in grid mode on the first image.
    #[must_use]
    pub fn new(images: ImageList) -> Self {
        Self::with_timing(images, Timing::default())
    }

    #[must_use]
    pub fn with_timing(images: ImageList, timing: Timing) -> Self {
        Self {
            images,
            current_index: 0,
            mode: Mode::Grid,
            slideshow_active: false,
            crossfade: None,
            timing,
        }
    }

    #[must_use]
    pub fn images(&self) -> &ImageList {
        &self.images
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Always false; an [`ImageList`] cannot be empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn current_image(&self) -> &ImageRef {
        self.images.wrapped(self.current_index)
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        match (self.mode, self.slideshow_active) {
            (Mode::Grid, _) => Phase::Grid,
            (Mode::Detail, false) => Phase::DetailStatic,
            (Mode::Detail, true) => Phase::DetailSlideshow,
        }
    }

    #[must_use]
    pub fn is_slideshow_active(&self) -> bool {
        self.slideshow_active
    }

    /// Crossfade started by the last `next`, until [`Self::finish_transition`]
    /// drops it.
    #[must_use]
    pub fn crossfade(&self) -> Option<&Crossfade> {
        self.crossfade.as_ref()
    }

    #[must_use]
    pub fn timing(&self) -> Timing {
        self.timing
    }

    /// Dispatches a command.
    pub fn apply<S>(&mut self, command: Command, source: &S, now: Instant) -> Outcome
    where
        S: ImageSource + ?Sized,
    {
        let outcome = match command {
            Command::Select(index) => self.select(index, source),
            Command::Next => self.next(source, now),
            Command::Back => self.back(),
            Command::ToggleSlideshow => self.toggle_slideshow(source),
            Command::Tick => self.tick(source, now),
        };
        debug_assert!(self.invariant_holds(), "gallery invariant violated");
        outcome
    }

    /// Opens image `index` in the detail view.
    ///
    /// Out-of-range indices and unresolvable images leave the state unchanged.
    pub fn select<S>(&mut self, index: usize, source: &S) -> Outcome
    where
        S: ImageSource + ?Sized,
    {
        let Some(image) = self.images.get(index) else {
            return Outcome::diagnostic(Error::IndexOutOfRange {
                index,
                len: self.images.len(),
            });
        };

        let data = match source.resolve(image) {
            Ok(data) => data,
            Err(error) => return Outcome::diagnostic(error),
        };

        let image = image.clone();
        tracing::info!(index, %image, "opening image");
        self.current_index = index;
        self.mode = Mode::Detail;
        self.crossfade = None;

        let mut outcome = Outcome::none();
        outcome.push(Effect::ShowImage { image, data });
        outcome
    }

    /// Advances to the next image with a crossfade. No-op in grid mode.
    ///
    /// A `next` issued while a crossfade is still running retargets it from
    /// whatever is visible at `now`.
    pub fn next<S>(&mut self, source: &S, now: Instant) -> Outcome
    where
        S: ImageSource + ?Sized,
    {
        if self.mode != Mode::Detail {
            return Outcome::none();
        }

        let next_index = self.images.next_index(self.current_index);
        let image = self.images.wrapped(next_index).clone();
        let data = match source.resolve(&image) {
            Ok(data) => data,
            Err(error) => return Outcome::diagnostic(error),
        };

        let Timing {
            fade_out, fade_in, ..
        } = self.timing;
        let crossfade = match self.crossfade.take() {
            Some(running) if !running.is_finished(now) => {
                running.retarget(image.clone(), fade_out, fade_in, now)
            }
            _ => Crossfade::new(
                Some(self.current_image().clone()),
                image.clone(),
                fade_out,
                fade_in,
                now,
            ),
        };

        tracing::debug!(from = self.current_index, to = next_index, "advancing");
        self.current_index = next_index;
        self.crossfade = Some(crossfade.clone());

        let mut outcome = Outcome::none();
        outcome.push(Effect::ShowImage { image, data });
        outcome.push(Effect::StartCrossfade(crossfade));
        outcome
    }

    /// Returns to the grid, stopping the slideshow if it runs.
    pub fn back(&mut self) -> Outcome {
        if self.mode == Mode::Grid {
            return Outcome::none();
        }

        let mut outcome = Outcome::none();
        if self.slideshow_active {
            self.stop_slideshow(&mut outcome);
        }
        self.mode = Mode::Grid;
        self.crossfade = None;
        tracing::info!(index = self.current_index, "back to grid");
        outcome.push(Effect::ShowGrid);
        outcome
    }

    /// Starts or stops the slideshow.
    ///
    /// From the grid, the slideshow always opens the first image; if it
    /// cannot be resolved nothing happens.
    pub fn toggle_slideshow<S>(&mut self, source: &S) -> Outcome
    where
        S: ImageSource + ?Sized,
    {
        let mut outcome = Outcome::none();

        if self.slideshow_active {
            self.stop_slideshow(&mut outcome);
            return outcome;
        }

        if self.mode == Mode::Grid {
            let opened = self.select(0, source);
            if opened.diagnostics().next().is_some() {
                return opened;
            }
            outcome = opened;
        }

        self.slideshow_active = true;
        tracing::info!(index = self.current_index, "slideshow started");
        outcome.push(Effect::StartSlideshowTimer {
            period: self.timing.interval.as_duration(),
        });
        outcome.push(Effect::Notify(SlideshowNotice::Started));
        outcome
    }

    /// Slideshow timer tick. Ignored unless the slideshow is active.
    pub fn tick<S>(&mut self, source: &S, now: Instant) -> Outcome
    where
        S: ImageSource + ?Sized,
    {
        if !self.slideshow_active {
            return Outcome::none();
        }
        self.next(source, now)
    }

    /// Drops the crossfade once it has completed. Returns `true` if one was
    /// dropped.
    pub fn finish_transition(&mut self, now: Instant) -> bool {
        match &self.crossfade {
            Some(crossfade) if crossfade.is_finished(now) => {
                self.crossfade = None;
                true
            }
            _ => false,
        }
    }

    /// Checks the class invariants.
    #[must_use]
    pub fn invariant_holds(&self) -> bool {
        let index_valid = self.current_index < self.images.len();
        let slideshow_in_detail = !self.slideshow_active || self.mode == Mode::Detail;
        let crossfade_in_detail = self.crossfade.is_none() || self.mode == Mode::Detail;
        index_valid && slideshow_in_detail && crossfade_in_detail
    }

    fn stop_slideshow(&mut self, outcome: &mut Outcome) {
        self.slideshow_active = false;
        tracing::info!(index = self.current_index, "slideshow stopped");
        outcome.push(Effect::StopSlideshowTimer);
        outcome.push(Effect::Notify(SlideshowNotice::Stopped));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::MemoryImageSource;

    fn gallery(names: &[&str]) -> (GalleryState, MemoryImageSource) {
        let images = ImageList::new(names.iter().map(|name| ImageRef::new(*name)).collect())
            .expect("non-empty list");
        let mut source = MemoryImageSource::new();
        for name in names {
            source.insert(ImageRef::new(*name), vec![1u8, 2, 3]);
        }
        (GalleryState::new(images), source)
    }

    fn names(count: usize) -> Vec<String> {
        (0..count).map(|i| format!("images/image{}.jpeg", i + 1)).collect()
    }

    fn gallery_of(count: usize) -> (GalleryState, MemoryImageSource) {
        let names = names(count);
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        gallery(&refs)
    }

    #[test]
    fn starts_in_grid_on_first_image() {
        let (state, _) = gallery(&["a", "b"]);
        assert_eq!(state.phase(), Phase::Grid);
        assert_eq!(state.current_index(), 0);
        assert!(!state.is_slideshow_active());
        assert!(state.crossfade().is_none());
    }

    #[test]
    fn select_opens_detail_and_shows_image() {
        let (mut state, source) = gallery(&["a", "b", "c"]);
        let outcome = state.select(1, &source);

        assert_eq!(state.phase(), Phase::DetailStatic);
        assert_eq!(state.current_index(), 1);
        assert_eq!(outcome.shown_image().map(ImageRef::as_str), Some("b"));
    }

    #[test]
    fn select_out_of_range_is_a_diagnostic_noop() {
        let (mut state, source) = gallery(&["a", "b", "c"]);
        let outcome = state.select(7, &source);

        assert_eq!(state.phase(), Phase::Grid);
        assert_eq!(state.current_index(), 0);
        assert_eq!(
            outcome.effects(),
            &[Effect::Diagnostic(Error::IndexOutOfRange { index: 7, len: 3 })]
        );
    }

    #[test]
    fn select_unresolvable_image_leaves_state_unchanged() {
        let (mut state, mut source) = gallery(&["a", "b", "c"]);
        source.remove(&ImageRef::new("b"));

        let outcome = state.select(1, &source);

        assert_eq!(state.mode(), Mode::Grid);
        assert_eq!(state.current_index(), 0);
        assert_eq!(
            outcome.diagnostics().collect::<Vec<_>>(),
            vec![&Error::ResourceNotFound(ImageRef::new("b"))]
        );
        assert!(outcome.shown_image().is_none());
    }

    #[test]
    fn next_cycles_back_to_start_for_every_size_and_start() {
        let now = Instant::now();
        for count in 1..=9 {
            for start in 0..count {
                let (mut state, source) = gallery_of(count);
                state.select(start, &source);
                for _ in 0..count {
                    state.next(&source, now);
                }
                assert_eq!(state.current_index(), start, "N={count} start={start}");
                assert_eq!(state.mode(), Mode::Detail);
            }
        }
    }

    #[test]
    fn next_emits_crossfade_from_old_to_new() {
        let now = Instant::now();
        let (mut state, source) = gallery(&["a", "b"]);
        state.select(0, &source);

        let outcome = state.next(&source, now);
        let crossfade = outcome
            .effects()
            .iter()
            .find_map(|effect| match effect {
                Effect::StartCrossfade(crossfade) => Some(crossfade),
                _ => None,
            })
            .expect("crossfade effect");
        assert_eq!(crossfade.from().map(ImageRef::as_str), Some("a"));
        assert_eq!(crossfade.to().as_str(), "b");
        assert_eq!(crossfade.duration(), Duration::from_millis(1000));
        assert_eq!(state.crossfade(), Some(crossfade));
    }

    #[test]
    fn next_in_grid_is_a_noop() {
        let (mut state, source) = gallery(&["a", "b"]);
        let outcome = state.next(&source, Instant::now());
        assert!(outcome.is_empty());
        assert_eq!(state.current_index(), 0);
        assert_eq!(state.mode(), Mode::Grid);
    }

    #[test]
    fn next_with_unresolvable_image_is_skipped() {
        let (mut state, mut source) = gallery(&["a", "b", "c"]);
        state.select(0, &source);
        source.remove(&ImageRef::new("b"));

        let outcome = state.next(&source, Instant::now());
        assert_eq!(state.current_index(), 0);
        assert_eq!(outcome.diagnostics().count(), 1);
        assert!(state.crossfade().is_none());
    }

    #[test]
    fn rapid_next_retargets_running_crossfade() {
        let start = Instant::now();
        let (mut state, source) = gallery(&["a", "b", "c"]);
        state.select(0, &source);

        state.next(&source, start);
        state.next(&source, start + Duration::from_millis(250));

        let crossfade = state.crossfade().expect("crossfade running");
        assert_eq!(crossfade.from().map(ImageRef::as_str), Some("a"));
        assert_eq!(crossfade.to().as_str(), "c");
        assert_eq!(state.current_index(), 2);
    }

    #[test]
    fn select_next_next_back_walks_b_c_a() {
        let now = Instant::now();
        let (mut state, source) = gallery(&["a", "b", "c"]);

        let shown = state.select(1, &source);
        assert_eq!(shown.shown_image().map(ImageRef::as_str), Some("b"));

        let shown = state.next(&source, now);
        assert_eq!(shown.shown_image().map(ImageRef::as_str), Some("c"));
        assert_eq!(state.current_index(), 2);

        let shown = state.next(&source, now + Duration::from_secs(2));
        assert_eq!(shown.shown_image().map(ImageRef::as_str), Some("a"));
        assert_eq!(state.current_index(), 0);

        let outcome = state.back();
        assert_eq!(outcome.effects(), &[Effect::ShowGrid]);
        assert_eq!(state.phase(), Phase::Grid);
        assert_eq!(state.current_index(), 0);
    }

    #[test]
    fn back_returns_to_grid_keeping_index() {
        let (mut state, source) = gallery(&["a", "b", "c"]);
        state.select(2, &source);

        let outcome = state.back();
        assert_eq!(state.mode(), Mode::Grid);
        assert_eq!(state.current_index(), 2);
        assert_eq!(outcome.effects(), &[Effect::ShowGrid]);
    }

    #[test]
    fn back_stops_running_slideshow() {
        let (mut state, source) = gallery(&["a", "b", "c"]);
        state.select(0, &source);
        state.toggle_slideshow(&source);

        let outcome = state.back();
        assert_eq!(state.phase(), Phase::Grid);
        assert_eq!(
            outcome.effects(),
            &[
                Effect::StopSlideshowTimer,
                Effect::Notify(SlideshowNotice::Stopped),
                Effect::ShowGrid,
            ]
        );
    }

    #[test]
    fn double_toggle_from_detail_static_keeps_index() {
        let (mut state, source) = gallery(&["a", "b", "c"]);
        state.select(1, &source);

        let started = state.toggle_slideshow(&source);
        assert_eq!(state.phase(), Phase::DetailSlideshow);
        assert_eq!(started.notices().collect::<Vec<_>>(), vec![SlideshowNotice::Started]);
        assert!(started.effects().contains(&Effect::StartSlideshowTimer {
            period: Duration::from_millis(2000)
        }));

        let stopped = state.toggle_slideshow(&source);
        assert_eq!(state.phase(), Phase::DetailStatic);
        assert_eq!(state.current_index(), 1);
        assert_eq!(
            stopped.effects(),
            &[
                Effect::StopSlideshowTimer,
                Effect::Notify(SlideshowNotice::Stopped)
            ]
        );
    }

    #[test]
    fn toggle_from_grid_opens_first_image_and_starts() {
        let (mut state, source) = gallery(&["a", "b", "c"]);
        state.select(2, &source);
        state.back();
        assert_eq!(state.current_index(), 2);

        let outcome = state.toggle_slideshow(&source);

        assert_eq!(state.phase(), Phase::DetailSlideshow);
        assert_eq!(state.current_index(), 0);
        assert_eq!(outcome.shown_image().map(ImageRef::as_str), Some("a"));
        assert_eq!(outcome.notices().collect::<Vec<_>>(), vec![SlideshowNotice::Started]);
    }

    #[test]
    fn toggle_from_grid_with_unresolvable_image_does_nothing() {
        let (mut state, mut source) = gallery(&["a", "b"]);
        source.remove(&ImageRef::new("a"));

        let outcome = state.toggle_slideshow(&source);
        assert_eq!(state.phase(), Phase::Grid);
        assert_eq!(outcome.diagnostics().count(), 1);
        assert_eq!(outcome.notices().count(), 0);
    }

    #[test]
    fn ticks_advance_only_while_slideshow_runs() {
        let now = Instant::now();
        let (mut state, source) = gallery(&["a", "b", "c"]);
        state.select(0, &source);

        assert!(state.tick(&source, now).is_empty());
        assert_eq!(state.current_index(), 0);

        state.toggle_slideshow(&source);
        state.tick(&source, now);
        state.tick(&source, now + Duration::from_millis(2000));
        assert_eq!(state.current_index(), 2);

        state.toggle_slideshow(&source);
        assert!(state.tick(&source, now + Duration::from_millis(4000)).is_empty());
        assert_eq!(state.current_index(), 2);
    }

    #[test]
    fn finish_transition_drops_completed_crossfade() {
        let start = Instant::now();
        let (mut state, source) = gallery(&["a", "b"]);
        state.select(0, &source);
        state.next(&source, start);

        assert!(!state.finish_transition(start + Duration::from_millis(100)));
        assert!(state.crossfade().is_some());
        assert!(state.finish_transition(start + Duration::from_millis(1000)));
        assert!(state.crossfade().is_none());
    }

    #[test]
    fn invariant_holds_across_command_sequences() {
        let commands = [
            Command::Select(0),
            Command::Select(4),
            Command::Select(99),
            Command::Next,
            Command::Back,
            Command::ToggleSlideshow,
            Command::Tick,
        ];
        let (mut state, source) = gallery_of(5);
        let start = Instant::now();

        // Deterministic pseudo-random walk over the command set.
        let mut seed: u64 = 0x9E37_79B9_7F4A_7C15;
        for step in 0..2_000u64 {
            seed = seed
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1_442_695_040_888_963_407);
            let command = commands[(seed >> 33) as usize % commands.len()];
            let now = start + Duration::from_millis(step * 37);
            let before = state.current_index();

            state.apply(command, &source, now);

            assert!(state.invariant_holds(), "after {command:?}");
            if command == Command::Back {
                assert_eq!(state.mode(), Mode::Grid);
                assert_eq!(state.current_index(), before);
            }
        }
    }

    #[test]
    fn notice_keys_match_locale_files() {
        assert_eq!(
            SlideshowNotice::Started.i18n_key(),
            "notification-slideshow-started"
        );
        assert_eq!(
            SlideshowNotice::Stopped.i18n_key(),
            "notification-slideshow-stopped"
        );
    }
}
