// SPDX-License-Identifier: MPL-2.0
//! Gallery screen: hero image with overlay navigation, caption, and the
//! synchronized thumbnail strip.

pub mod component;
pub mod geometry;
pub mod scroll;
pub mod strip;

use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::Spinner;
use component::{Message, State};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, Column, Container, Image, Stack, Text};
use iced::{ContentFit, Element, Length};

pub fn view(state: &State) -> Element<'_, Message> {
    let content = Column::new()
        .spacing(spacing::MD)
        .width(Length::Fill)
        .height(Length::Fill)
        .push(hero_view(state))
        .push(caption_view(state))
        .push(strip::view(strip::ViewModel {
            thumbnails: state.thumbnails(),
            selected_index: state.selected_index(),
        }));

    let surface = Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::LG)
        .style(styles::surface);

    // Dismiss floats above everything in the top-right corner.
    let dismiss = Container::new(
        button(Text::new("✕").size(typography::TITLE_MD))
            .padding(spacing::XS)
            .style(styles::button_overlay())
            .on_press(Message::Dismiss),
    )
    .width(Length::Fill)
    .padding(spacing::MD)
    .align_x(Horizontal::Right);

    Stack::new().push(surface).push(dismiss).into()
}

/// Hero image with navigation arrows and the loading overlay.
fn hero_view(state: &State) -> Element<'_, Message> {
    let hero: Element<'_, Message> = match state.hero() {
        Some(data) => Image::new(data.handle.clone())
            .width(Length::Fill)
            .height(Length::Fill)
            .content_fit(ContentFit::Contain)
            .into(),
        None => Container::new(iced::widget::Space::new())
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
    };

    let mut stack = Stack::new().push(hero);

    stack = stack.push(arrow_zone("◀", Horizontal::Left, Message::Backward));
    stack = stack.push(arrow_zone("▶", Horizontal::Right, Message::Forward));

    if state.is_hero_loading() {
        let spinner = Spinner::new(state.spinner_rotation())
            .color(palette::WHITE)
            .into_element();
        stack = stack.push(
            Container::new(spinner)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(Horizontal::Center)
                .align_y(Vertical::Center),
        );
    }

    Container::new(stack)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn arrow_zone(glyph: &str, side: Horizontal, message: Message) -> Element<'_, Message> {
    let arrow = button(Text::new(glyph).size(typography::TITLE_LG))
        .padding(spacing::SM)
        .style(styles::button_overlay())
        .on_press(message);

    Container::new(arrow)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::MD)
        .align_x(side)
        .align_y(Vertical::Center)
        .into()
}

fn caption_view(state: &State) -> Element<'_, Message> {
    let photo = state.selected_photo();

    Column::new()
        .spacing(spacing::XXS)
        .push(
            Text::new(photo.title.as_str())
                .size(typography::TITLE_MD)
                .color(palette::WHITE),
        )
        .push(
            Text::new(format!("by {}", photo.photographer))
                .size(typography::BODY)
                .color(palette::ACCENT_500),
        )
        .into()
}
