// SPDX-License-Identifier: MPL-2.0
//! Detail view: one full-size image, crossfading on `next`.

use super::Message;
use crate::application::gallery::GalleryState;
use crate::application::port::ImageBytes;
use crate::domain::gallery::ImageRef;
use crate::error::Result;
use crate::i18n::I18n;
use crate::media::ImageData;
use crate::ui::design_tokens::typography;
use iced::widget::{container, image, text, Space, Stack};
use iced::{ContentFit, Element, Length};
use std::collections::HashMap;
use std::time::Instant;

/// Image handles the detail view can draw, keyed by reference.
///
/// Handles stay cached for the session so the outgoing image of a
/// crossfade is still drawable after `current_index` moved on.
#[derive(Debug, Default)]
pub struct DetailView {
    images: HashMap<ImageRef, ImageData>,
}

/// What the main slot shows at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Visible<'a> {
    pub image: &'a ImageRef,
    pub opacity: f32,
}

impl DetailView {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes `image` drawable from its encoded bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Decode`] when the bytes are not a supported image.
    ///
    /// [`Error::Decode`]: crate::error::Error::Decode
    pub fn show(&mut self, image: &ImageRef, data: &ImageBytes) -> Result<()> {
        if self.images.contains_key(image) {
            return Ok(());
        }
        let decoded = ImageData::from_encoded(data)?;
        self.images.insert(image.clone(), decoded);
        Ok(())
    }

    #[must_use]
    pub fn get(&self, image: &ImageRef) -> Option<&ImageData> {
        self.images.get(image)
    }

    #[must_use]
    pub fn cached(&self) -> usize {
        self.images.len()
    }

    /// Samples the running crossfade, or the current image when none runs.
    #[must_use]
    pub fn visible<'a>(state: &'a GalleryState, now: Instant) -> Visible<'a> {
        match state.crossfade() {
            Some(crossfade) => {
                let frame = crossfade.sample(now);
                Visible {
                    image: frame.image,
                    opacity: frame.opacity,
                }
            }
            None => Visible {
                image: state.current_image(),
                opacity: 1.0,
            },
        }
    }

    pub fn view<'a>(
        &'a self,
        state: &'a GalleryState,
        now: Instant,
        i18n: &'a I18n,
    ) -> Element<'a, Message> {
        let visible = Self::visible(state, now);

        let layer: Element<'a, Message> = match self.images.get(visible.image) {
            Some(data) => image(data.handle.clone())
                .content_fit(ContentFit::Contain)
                .width(Length::Fill)
                .height(Length::Fill)
                .opacity(visible.opacity)
                .into(),
            None => container(text(i18n.tr("detail-image-unavailable")).size(typography::BODY))
                .center(Length::Fill)
                .into(),
        };

        // The spacer keeps the slot's size fixed while the image is transparent.
        Stack::new()
            .push(Space::new().width(Length::Fill).height(Length::Fill))
            .push(layer)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}
