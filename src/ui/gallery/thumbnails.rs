// SPDX-License-Identifier: MPL-2.0
//! Circular thumbnail grid.

use super::Message;
use crate::application::port::ImageSource;
use crate::config::GRID_COLUMNS;
use crate::domain::gallery::ImageList;
use crate::error::Error;
use crate::i18n::I18n;
use crate::media::{circular_thumbnail, ImageData};
use crate::ui::design_tokens::{opacity, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{container, image, mouse_area, text, Column, Row};
use iced::{mouse, Alignment, Element, Length};

/// Thumbnails for every gallery image, by index.
///
/// Images that could not be resolved or decoded have no thumbnail and are
/// left out of the grid; the other thumbnails keep their gallery index.
#[derive(Debug, Default)]
pub struct Thumbnails {
    items: Vec<Option<ImageData>>,
    hovered: Option<usize>,
}

impl Thumbnails {
    /// Renders a thumbnail for each image, collecting the failures.
    pub fn load<S>(images: &ImageList, source: &S, size: u32) -> (Self, Vec<Error>)
    where
        S: ImageSource + ?Sized,
    {
        let mut errors = Vec::new();
        let items = images
            .iter()
            .map(|image| {
                match source
                    .resolve(image)
                    .and_then(|bytes| circular_thumbnail(&bytes, size))
                {
                    Ok(data) => Some(data),
                    Err(error) => {
                        errors.push(error);
                        None
                    }
                }
            })
            .collect();

        (
            Self {
                items,
                hovered: None,
            },
            errors,
        )
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ImageData> {
        self.items.get(index).and_then(Option::as_ref)
    }

    /// Indices that have a thumbnail, in gallery order.
    pub fn available(&self) -> impl Iterator<Item = usize> + '_ {
        self.items
            .iter()
            .enumerate()
            .filter_map(|(index, item)| item.as_ref().map(|_| index))
    }

    #[must_use]
    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    /// Tracks the cursor entering or leaving thumbnail `index`.
    pub fn hover(&mut self, index: usize, entering: bool) {
        if entering {
            self.hovered = Some(index);
        } else if self.hovered == Some(index) {
            self.hovered = None;
        }
    }

    pub fn clear_hover(&mut self) {
        self.hovered = None;
    }

    /// Opacity of thumbnail `index`: dimmed while hovered.
    #[must_use]
    pub fn opacity(&self, index: usize) -> f32 {
        if self.hovered == Some(index) {
            opacity::THUMBNAIL_HOVER
        } else {
            opacity::OPAQUE
        }
    }

    /// Lays the available thumbnails out in rows of [`GRID_COLUMNS`].
    ///
    /// With no thumbnail at all, a single round placeholder is shown instead.
    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let indices: Vec<usize> = self.available().collect();
        if indices.is_empty() {
            return Self::placeholder(i18n);
        }

        let rows = indices.chunks(GRID_COLUMNS).map(|chunk| {
            let cells = chunk.iter().filter_map(|&index| self.cell(index));
            Row::with_children(cells)
                .spacing(spacing::GALLERY_GAP)
                .into()
        });

        Column::with_children(rows)
            .spacing(spacing::GALLERY_GAP)
            .align_x(Alignment::Center)
            .into()
    }

    fn placeholder(i18n: &I18n) -> Element<'_, Message> {
        container(text(i18n.tr("grid-thumbnail-unavailable")).size(typography::CAPTION))
            .center_x(Length::Fixed(sizing::THUMBNAIL))
            .center_y(Length::Fixed(sizing::THUMBNAIL))
            .style(styles::container::thumbnail_placeholder)
            .into()
    }

    fn cell(&self, index: usize) -> Option<Element<'_, Message>> {
        let data = self.get(index)?;
        let picture = image(data.handle.clone())
            .width(Length::Fixed(sizing::THUMBNAIL))
            .height(Length::Fixed(sizing::THUMBNAIL))
            .opacity(self.opacity(index));

        Some(
            mouse_area(picture)
                .on_press(Message::Select(index))
                .on_enter(Message::Hover {
                    index,
                    entering: true,
                })
                .on_exit(Message::Hover {
                    index,
                    entering: false,
                })
                .interaction(mouse::Interaction::Pointer)
                .into(),
        )
    }
}
