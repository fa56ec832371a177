// SPDX-License-Identifier: MPL-2.0
//! Application root: wires the gallery component to the Iced runtime and
//! translates its effects into window-level actions.

use crate::collection::Collection;
use crate::config;
use crate::ui::gallery::{self, component};
use iced::{Element, Subscription, Task, Theme};

pub const WINDOW_DEFAULT_WIDTH: u32 = 1100;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const MIN_WINDOW_WIDTH: u32 = 640;
pub const MIN_WINDOW_HEIGHT: u32 = 520;

/// Runtime options passed in from the CLI.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Photo index to select on startup, overriding the config value.
    pub start_index: Option<usize>,
}

/// Root application state.
pub struct App {
    title: String,
    gallery: component::State,
}

#[derive(Debug, Clone)]
pub enum Message {
    Gallery(component::Message),
}

fn window_settings() -> iced::window::Settings {
    iced::window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..iced::window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
///
/// The collection has already been loaded and validated as non-empty.
pub fn run(collection: Collection, flags: Flags) -> iced::Result {
    iced::application(move || App::new(collection.clone(), flags.clone()), App::update, App::view)
        .title(|state: &App| state.title())
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    fn new(collection: Collection, flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_default();
        let engage_scroll_px = config
            .engage_scroll_px
            .unwrap_or(config::DEFAULT_ENGAGE_SCROLL_PX);
        let start_index = flags.start_index.or(config.start_index).unwrap_or(0);

        let title = collection
            .title
            .clone()
            .unwrap_or_else(|| "Viewfinder".to_string());

        let (gallery, task) =
            component::State::new(collection.into_photos(), engage_scroll_px, start_index);

        (Self { title, gallery }, task.map(Message::Gallery))
    }

    fn title(&self) -> String {
        self.title.clone()
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        self.gallery.subscription().map(Message::Gallery)
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Gallery(msg) => {
                let (effect, task) = self.gallery.handle_message(msg);
                match effect {
                    component::Effect::None => task.map(Message::Gallery),
                    component::Effect::Dismiss => iced::exit(),
                }
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        gallery::view(&self.gallery).map(Message::Gallery)
    }
}
