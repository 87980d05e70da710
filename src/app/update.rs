// SPDX-License-Identifier: MPL-2.0
//! Update handlers: gallery messages become state machine commands, and the
//! returned effects are applied to the renderer caches and notifications.

use super::Message;
use crate::application::gallery::{Command, Effect, GalleryState, Outcome, SlideshowNotice};
use crate::diagnostics::{DiagnosticsLog, Operation};
use crate::error::Error;
use crate::infrastructure::FsImageSource;
use crate::ui::gallery::{self, DetailView, Thumbnails};
use crate::ui::notifications::{self, Notification};
use iced::Task;
use std::time::Instant;

/// Key prefix shared by the slideshow started/stopped notices.
const SLIDESHOW_NOTICE_PREFIX: &str = "notification-slideshow-";

/// Mutable view of the application state used by the handlers.
pub struct UpdateContext<'a> {
    pub gallery: &'a mut GalleryState,
    pub source: &'a FsImageSource,
    pub thumbnails: &'a mut Thumbnails,
    pub detail: &'a mut DetailView,
    pub notifications: &'a mut notifications::Manager,
    pub diagnostics: &'a mut DiagnosticsLog,
    pub now: &'a mut Instant,
}

pub fn handle_gallery_message(
    ctx: &mut UpdateContext<'_>,
    message: gallery::Message,
    now: Instant,
) -> Task<Message> {
    *ctx.now = now;

    let (command, operation) = match message {
        gallery::Message::Hover { index, entering } => {
            ctx.thumbnails.hover(index, entering);
            return Task::none();
        }
        gallery::Message::Select(index) => (Command::Select(index), Operation::Select),
        gallery::Message::Next => (Command::Next, Operation::Next),
        gallery::Message::Back => (Command::Back, Operation::Back),
        gallery::Message::ToggleSlideshow => {
            (Command::ToggleSlideshow, Operation::ToggleSlideshow)
        }
    };

    let outcome = ctx.gallery.apply(command, ctx.source, now);
    apply_outcome(ctx, outcome, operation);
    Task::none()
}

pub fn handle_slideshow_tick(ctx: &mut UpdateContext<'_>, now: Instant) -> Task<Message> {
    *ctx.now = now;
    let outcome = ctx.gallery.apply(Command::Tick, ctx.source, now);
    apply_outcome(ctx, outcome, Operation::Next);
    Task::none()
}

/// Advances animations and expires toasts.
pub fn handle_tick(ctx: &mut UpdateContext<'_>, now: Instant) -> Task<Message> {
    *ctx.now = now;
    ctx.gallery.finish_transition(now);
    ctx.notifications.tick(now);
    Task::none()
}

/// Carries out the effects of one command, in order.
pub fn apply_outcome(ctx: &mut UpdateContext<'_>, outcome: Outcome, operation: Operation) {
    for effect in outcome.into_effects() {
        match effect {
            Effect::ShowGrid => ctx.thumbnails.clear_hover(),
            Effect::ShowImage { image, data } => {
                if let Err(error) = ctx.detail.show(&image, &data) {
                    report(ctx, Operation::Display, error);
                }
            }
            Effect::StartCrossfade(crossfade) => {
                tracing::trace!(to = %crossfade.to(), "crossfade started");
            }
            // The slideshow subscription follows the state machine's flag.
            Effect::StartSlideshowTimer { period } => {
                tracing::debug!(?period, "slideshow timer armed");
            }
            Effect::StopSlideshowTimer => tracing::debug!("slideshow timer cancelled"),
            Effect::Notify(notice) => notify(ctx.notifications, notice),
            Effect::Diagnostic(error) => report(ctx, operation, error),
        }
    }
}

fn notify(notifications: &mut notifications::Manager, notice: SlideshowNotice) {
    notifications.replace(SLIDESHOW_NOTICE_PREFIX, Notification::info(notice.i18n_key()));
}

fn report(ctx: &mut UpdateContext<'_>, operation: Operation, error: Error) {
    ctx.notifications.push(error_notification(&error));
    ctx.diagnostics.report(operation, error);
}

/// Warning toast describing a recoverable error.
pub fn error_notification(error: &Error) -> Notification {
    let notification = Notification::warning(error.i18n_key());
    match error {
        Error::Io(details)
        | Error::Config(details)
        | Error::Decode(details)
        | Error::Gui(details) => notification.with_arg("details", details.as_str()),
        Error::ResourceNotFound(image) => notification.with_arg("image", image.as_str()),
        Error::IndexOutOfRange { index, .. } => {
            notification.with_arg("index", index.to_string())
        }
        Error::EmptyGallery => notification,
    }
}
