// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` owns the gallery state machine, the image source it resolves
//! through, and the renderer-side caches (thumbnails and detail handles).
//! Messages from the widgets become state machine commands; the effects the
//! commands return are applied here.

mod message;
mod startup;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use startup::Startup;

use crate::application::gallery::GalleryState;
use crate::config;
use crate::diagnostics::{DiagnosticsLog, Operation};
use crate::error::Result;
use crate::i18n::I18n;
use crate::infrastructure::FsImageSource;
use crate::ui::gallery::{DetailView, Thumbnails};
use crate::ui::notifications;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::time::Instant;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    gallery: GalleryState,
    source: FsImageSource,
    thumbnails: Thumbnails,
    detail: DetailView,
    notifications: notifications::Manager,
    diagnostics: DiagnosticsLog,
    /// Instant the current frame is drawn at.
    now: Instant,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("phase", &self.gallery.phase())
            .field("current_index", &self.gallery.current_index())
            .field("thumbnails", &self.thumbnails.available().count())
            .field("diagnostics", &self.diagnostics.len())
            .finish()
    }
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(config::WINDOW_DEFAULT_WIDTH, config::WINDOW_DEFAULT_HEIGHT),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
///
/// # Errors
///
/// Fails before opening a window when the gallery has no image, and
/// afterwards if iced cannot start.
pub fn run(flags: Flags) -> Result<()> {
    let startup = Startup::resolve(flags)?;

    // iced 0.14 requires an `Fn` boot function.
    let boot = move || App::new(startup.clone());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()?;
    Ok(())
}

impl App {
    /// Initializes application state: locale, thumbnails, and any warning
    /// raised while loading settings or thumbnails.
    pub fn new(startup: Startup) -> (Self, Task<Message>) {
        let i18n = I18n::new(startup.lang.clone(), &startup.config);
        let source = FsImageSource::new(&startup.asset_root);
        let (thumbnails, thumbnail_errors) =
            Thumbnails::load(&startup.images, &source, config::THUMBNAIL_SIZE);

        let mut app = Self {
            i18n,
            gallery: GalleryState::with_timing(startup.images, startup.timing),
            source,
            thumbnails,
            detail: DetailView::new(),
            notifications: notifications::Manager::new(),
            diagnostics: DiagnosticsLog::default(),
            now: Instant::now(),
        };

        // Already logged by the config loader.
        if let Some(key) = startup.config_warning {
            app.notifications
                .push(notifications::Notification::warning(key));
        }

        if !thumbnail_errors.is_empty() {
            for error in thumbnail_errors {
                app.diagnostics.report(Operation::LoadThumbnail, error);
            }
            app.notifications.push(notifications::Notification::warning(
                "notification-image-load-error",
            ));
        }

        (app, Task::none())
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    fn subscription(&self) -> Subscription<Message> {
        let slideshow_sub = subscription::create_slideshow_subscription(
            self.gallery.is_slideshow_active(),
            self.gallery.timing().interval,
        );
        let tick_sub = subscription::create_tick_subscription(
            self.gallery.crossfade().is_some(),
            self.notifications.has_notifications(),
        );

        Subscription::batch([slideshow_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            gallery: &mut self.gallery,
            source: &self.source,
            thumbnails: &mut self.thumbnails,
            detail: &mut self.detail,
            notifications: &mut self.notifications,
            diagnostics: &mut self.diagnostics,
            now: &mut self.now,
        };

        match message {
            Message::Gallery(gallery_message) => {
                update::handle_gallery_message(&mut ctx, gallery_message, Instant::now())
            }
            Message::SlideshowTick(now) => update::handle_slideshow_tick(&mut ctx, now),
            Message::Tick(now) => update::handle_tick(&mut ctx, now),
            Message::Notification(notification_message) => {
                ctx.notifications.handle_message(&notification_message);
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            gallery: &self.gallery,
            thumbnails: &self.thumbnails,
            detail: &self.detail,
            notifications: &self.notifications,
            now: self.now,
        })
    }

    /// Failures recorded since startup.
    pub fn diagnostics(&self) -> &DiagnosticsLog {
        &self.diagnostics
    }
}
