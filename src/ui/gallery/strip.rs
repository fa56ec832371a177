// SPDX-License-Identifier: MPL-2.0
//! Thumbnail strip: one clickable thumbnail per photo inside a
//! horizontal scrollable.
//!
//! The scrollable carries a well-known [`Id`] so the gallery component
//! can drive its offset, and reports every scroll through
//! [`Message::StripScrolled`] so the component's viewport snapshot stays
//! current. Together they form the shared scroll-container handle.

use crate::media::ImageData;
use crate::ui::design_tokens::sizing;
use crate::ui::gallery::component::Message;
use crate::ui::styles;
use iced::widget::scrollable::{Direction, Scrollbar, Viewport};
use iced::widget::{button, Container, Id, Image, Row, Scrollable};
use iced::{ContentFit, Element, Length};

/// Identifier of the strip's scrollable widget.
pub const STRIP_ID: &str = "gallery-thumbnail-strip";

/// Data the strip needs from the gallery component to render.
pub struct ViewModel<'a> {
    pub thumbnails: &'a [Option<ImageData>],
    pub selected_index: usize,
}

pub fn view(model: ViewModel<'_>) -> Element<'_, Message> {
    let mut row = Row::new().spacing(sizing::THUMBNAIL_SPACING);

    for (index, thumbnail) in model.thumbnails.iter().enumerate() {
        let content: Element<'_, Message> = match thumbnail {
            Some(data) => Image::new(data.handle.clone())
                .width(Length::Fill)
                .height(Length::Fill)
                .content_fit(ContentFit::Cover)
                .into(),
            None => Container::new(iced::widget::Space::new())
                .width(Length::Fill)
                .height(Length::Fill)
                .style(styles::thumbnail_placeholder)
                .into(),
        };

        row = row.push(
            button(content)
                .width(Length::Fixed(sizing::THUMBNAIL_SIZE))
                .height(Length::Fixed(sizing::THUMBNAIL_SIZE))
                .padding(0)
                .style(styles::button_thumbnail(index == model.selected_index))
                .on_press(Message::ThumbnailPressed(index)),
        );
    }

    Scrollable::new(row)
        .id(Id::new(STRIP_ID))
        .width(Length::Fill)
        .height(Length::Fixed(sizing::STRIP_HEIGHT))
        .direction(Direction::Horizontal(Scrollbar::hidden()))
        .on_scroll(|viewport: Viewport| Message::StripScrolled {
            bounds: viewport.bounds(),
            content_bounds: viewport.content_bounds(),
            offset: viewport.absolute_offset(),
        })
        .into()
}
