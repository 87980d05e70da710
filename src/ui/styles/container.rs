// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Light-blue scene filling the whole window.
pub fn scene(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::SCENE_BACKGROUND)),
        ..Default::default()
    }
}

/// Light grey panel holding the grid or the detail view and the controls.
pub fn panel(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::PANEL_BACKGROUND)),
        text_color: Some(palette::GRAY_900),
        ..Default::default()
    }
}

/// Round placeholder drawn while a thumbnail is not available.
pub fn thumbnail_placeholder(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::GRAY_200)),
        text_color: Some(palette::GRAY_400),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Toast card with a severity-colored border.
pub fn toast(theme: &Theme, accent: Color) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(Background::Color(bg_color)),
        border: Border {
            color: accent,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

/// Solid stripe in the toast's severity color.
pub fn toast_accent(accent: Color) -> container::Style {
    container::Style {
        background: Some(Background::Color(accent)),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scene_is_light_blue_and_panel_is_light_grey() {
        let theme = Theme::Light;
        assert_eq!(
            scene(&theme).background,
            Some(Background::Color(palette::PRIMARY_200))
        );
        assert_eq!(
            panel(&theme).background,
            Some(Background::Color(palette::GRAY_50))
        );
    }

    #[test]
    fn toast_uses_accent_color() {
        let style = toast(&Theme::Dark, palette::WARNING_500);
        assert_eq!(style.border.color, palette::WARNING_500);
        assert!(style.background.is_some());
    }
}
