// SPDX-License-Identifier: MPL-2.0
//! Button row under the gallery.

use super::Message;
use crate::application::gallery::Mode;
use crate::i18n::I18n;
use crate::ui::design_tokens::spacing;
use crate::ui::styles;
use iced::widget::{button, text, Row};
use iced::{Alignment, Element};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub mode: Mode,
    pub slideshow_active: bool,
}

/// i18n key of the slideshow toggle label.
#[must_use]
pub fn slideshow_label_key(slideshow_active: bool) -> &'static str {
    if slideshow_active {
        "button-slideshow-stop"
    } else {
        "button-slideshow-start"
    }
}

/// Back and Next only make sense in the detail view; the slideshow toggle is
/// always offered.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let mut row = Row::new()
        .spacing(spacing::GALLERY_GAP)
        .align_y(Alignment::Center);

    if ctx.mode == Mode::Detail {
        row = row
            .push(gallery_button(ctx.i18n.tr("button-back"), Message::Back))
            .push(gallery_button(ctx.i18n.tr("button-next"), Message::Next));
    }

    row.push(gallery_button(
        ctx.i18n.tr(slideshow_label_key(ctx.slideshow_active)),
        Message::ToggleSlideshow,
    ))
    .into()
}

fn gallery_button<'a>(label: String, message: Message) -> Element<'a, Message> {
    button(text(label))
        .on_press(message)
        .padding(spacing::BUTTON_PADDING)
        .style(styles::button::gallery)
        .into()
}
