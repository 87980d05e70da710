// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! A light-blue scene holds a grey panel with either the thumbnail grid or
//! the detail view, and the button row under it. Toasts float above.

use super::Message;
use crate::application::gallery::{GalleryState, Mode};
use crate::i18n::I18n;
use crate::ui::design_tokens::spacing;
use crate::ui::gallery::{controls, DetailView, Thumbnails};
use crate::ui::notifications::{self, Toast};
use crate::ui::styles;
use iced::widget::{Column, Container, Stack};
use iced::{Alignment, Element, Length};
use std::time::Instant;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub gallery: &'a GalleryState,
    pub thumbnails: &'a Thumbnails,
    pub detail: &'a DetailView,
    pub notifications: &'a notifications::Manager,
    pub now: Instant,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let content = match ctx.gallery.mode() {
        Mode::Grid => ctx.thumbnails.view(ctx.i18n),
        Mode::Detail => ctx.detail.view(ctx.gallery, ctx.now, ctx.i18n),
    }
    .map(Message::Gallery);

    let buttons = controls::view(controls::ViewContext {
        i18n: ctx.i18n,
        mode: ctx.gallery.mode(),
        slideshow_active: ctx.gallery.is_slideshow_active(),
    })
    .map(Message::Gallery);

    let panel = Column::new()
        .push(Container::new(content).center(Length::Fill))
        .push(buttons)
        .spacing(spacing::PANEL)
        .align_x(Alignment::Center);

    let scene = Container::new(
        Container::new(panel)
            .padding(spacing::PANEL)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::panel),
    )
    .padding(spacing::PANEL)
    .width(Length::Fill)
    .height(Length::Fill)
    .style(styles::container::scene);

    let toasts = Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    Stack::new()
        .push(scene)
        .push(toasts)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
