// SPDX-License-Identifier: MPL-2.0
//! Gallery component encapsulating selection state and update logic.

use crate::collection::Photo;
use crate::error::Error;
use crate::media::{self, ImageData};
use crate::ui::design_tokens::sizing;
use crate::ui::gallery::geometry::{self, StripViewport};
use crate::ui::gallery::{scroll, strip};
use iced::widget::scrollable::AbsoluteOffset;
use iced::widget::{operation, Id};
use iced::{Rectangle, Subscription, Task};
use std::time::Duration;

/// Spinner rotation speed in radians per tick.
const SPINNER_SPEED: f32 = 0.1;
const SPINNER_TICK: Duration = Duration::from_millis(16);

/// Messages emitted by gallery widgets.
#[derive(Debug, Clone)]
pub enum Message {
    /// Advance to the next photo, wrapping past the end.
    Forward,
    /// Go to the previous photo, wrapping before the start.
    Backward,
    /// Jump directly to the photo at this index (no scroll animation).
    ThumbnailPressed(usize),
    /// Hero image decode finished for the photo at `index`.
    HeroLoaded {
        index: usize,
        result: Result<ImageData, Error>,
    },
    /// Strip thumbnail decode finished for the photo at `index`.
    ThumbnailLoaded {
        index: usize,
        result: Result<ImageData, Error>,
    },
    /// The strip scrollable reported new bounds or a new scroll offset.
    StripScrolled {
        bounds: Rectangle,
        content_bounds: Rectangle,
        offset: AbsoluteOffset,
    },
    /// One step of the smooth-scroll animation.
    ScrollTick,
    /// One frame of the loading spinner.
    SpinnerTick,
    /// Close the gallery.
    Dismiss,
}

/// Side effects the application root should perform after a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Leave the gallery (hand control back to the surrounding
    /// navigation).
    Dismiss,
}

/// Gallery view state.
///
/// `selected_index` is always a valid index into `photos`; the
/// collection loader guarantees the list is non-empty.
pub struct State {
    photos: Vec<Photo>,
    selected_index: usize,
    hero: Option<ImageData>,
    hero_loading: bool,
    thumbnails: Vec<Option<ImageData>>,
    strip: StripViewport,
    driver: scroll::Driver,
    engage_scroll_px: f32,
    spinner_rotation: f32,
}

impl State {
    /// Builds the gallery for a non-empty photo list and returns the
    /// startup task: the first hero decode plus one decode per strip
    /// thumbnail.
    pub fn new(photos: Vec<Photo>, engage_scroll_px: f32, start_index: usize) -> (Self, Task<Message>) {
        debug_assert!(!photos.is_empty(), "gallery requires a non-empty photo list");
        let selected_index = start_index.min(photos.len() - 1);
        let thumbnails = vec![None; photos.len()];

        let mut state = Self {
            photos,
            selected_index,
            hero: None,
            hero_loading: false,
            thumbnails,
            strip: StripViewport::default(),
            driver: scroll::Driver::default(),
            engage_scroll_px,
            spinner_rotation: 0.0,
        };

        let hero_task = state.begin_hero_load(selected_index);
        let thumbnail_tasks = Task::batch(state.photos.iter().enumerate().map(|(index, photo)| {
            let path = photo.source.clone();
            Task::perform(
                async move { media::load_thumbnail(&path) },
                move |result| Message::ThumbnailLoaded { index, result },
            )
        }));

        (state, Task::batch([hero_task, thumbnail_tasks]))
    }

    pub fn handle_message(&mut self, message: Message) -> (Effect, Task<Message>) {
        match message {
            Message::Forward => self.forward(),
            Message::Backward => self.backward(),
            Message::ThumbnailPressed(index) => {
                if index >= self.photos.len() || index == self.selected_index {
                    return (Effect::None, Task::none());
                }
                // Direct selection jumps without animated centering.
                let task = self.select(index);
                (Effect::None, task)
            }
            Message::HeroLoaded { index, result } => {
                if index != self.selected_index {
                    // A newer selection superseded this load.
                    return (Effect::None, Task::none());
                }
                match result {
                    Ok(data) => {
                        self.hero = Some(data);
                        self.hero_loading = false;
                    }
                    Err(error) => {
                        // Indistinguishable from a slow load for the user:
                        // the spinner stays up.
                        eprintln!(
                            "Failed to load {}: {}",
                            self.photos[index].source.display(),
                            error
                        );
                    }
                }
                (Effect::None, Task::none())
            }
            Message::ThumbnailLoaded { index, result } => {
                match result {
                    Ok(data) => {
                        if let Some(slot) = self.thumbnails.get_mut(index) {
                            *slot = Some(data);
                        }
                    }
                    Err(error) => {
                        eprintln!("Failed to load thumbnail {}: {}", index, error);
                    }
                }
                (Effect::None, Task::none())
            }
            Message::StripScrolled {
                bounds,
                content_bounds,
                offset,
            } => {
                self.strip = StripViewport {
                    offset_x: offset.x,
                    width: bounds.width,
                    content_width: content_bounds.width,
                };
                (Effect::None, Task::none())
            }
            Message::ScrollTick => {
                let Some(delta) = self.driver.tick() else {
                    return (Effect::None, Task::none());
                };
                let target = self.strip.clamp_offset(self.strip.offset_x + delta);
                if target == self.strip.offset_x {
                    // Hit the scroll boundary; the rest of the run is moot.
                    self.driver.cancel();
                    return (Effect::None, Task::none());
                }
                self.strip.offset_x = target;
                (
                    Effect::None,
                    operation::scroll_to(
                        Id::new(strip::STRIP_ID),
                        AbsoluteOffset { x: target, y: 0.0 },
                    ),
                )
            }
            Message::SpinnerTick => {
                if self.hero_loading {
                    self.spinner_rotation = (self.spinner_rotation + SPINNER_SPEED) % std::f32::consts::TAU;
                }
                (Effect::None, Task::none())
            }
            Message::Dismiss => (Effect::Dismiss, Task::none()),
        }
    }

    fn forward(&mut self) -> (Effect, Task<Message>) {
        let len = self.photos.len();
        let old_index = self.selected_index;
        let task = self.select((old_index + 1) % len);

        if self.strip.content_fits() {
            return (Effect::None, task);
        }

        if old_index == len - 1 {
            // Wrapping forward resets the strip to the first thumbnail.
            let snap = self.jump_strip_to(0.0);
            return (Effect::None, Task::batch([task, snap]));
        }

        // Offsets of the thumbnail being moved onto, measured against the
        // viewport as it stands right now.
        let offsets = geometry::thumbnail_offsets(&self.strip, old_index + 1);
        if offsets.right < self.engage_scroll_px {
            let distance = geometry::centering_delta(&self.strip, offsets.right);
            self.driver.start(distance, scroll::STEP_PX);
        }

        (Effect::None, task)
    }

    fn backward(&mut self) -> (Effect, Task<Message>) {
        let len = self.photos.len();
        let offsets = geometry::thumbnail_offsets(&self.strip, self.selected_index);

        if self.selected_index == 0 {
            // Wrapping backward jumps the strip to the last thumbnail.
            // Deliberately not the mirror image of the forward wrap.
            let task = self.select(len - 1);
            #[allow(clippy::cast_precision_loss)]
            let snap = self.jump_strip_to(sizing::THUMBNAIL_SIZE_TOTAL * len as f32);
            return (Effect::None, Task::batch([task, snap]));
        }

        let task = self.select(self.selected_index - 1);
        if offsets.left < self.engage_scroll_px {
            let distance = geometry::centering_delta(&self.strip, offsets.left);
            self.driver.start(distance, -scroll::STEP_PX);
        }

        (Effect::None, task)
    }

    /// Commits a new selection and kicks off its hero decode.
    fn select(&mut self, index: usize) -> Task<Message> {
        self.selected_index = index;
        self.begin_hero_load(index)
    }

    fn begin_hero_load(&mut self, index: usize) -> Task<Message> {
        self.hero_loading = true;
        let path = self.photos[index].source.clone();
        Task::perform(async move { media::load_image(&path) }, move |result| {
            Message::HeroLoaded { index, result }
        })
    }

    /// Snaps the strip to an absolute offset, superseding any running
    /// animation. The requested offset is clamped to the reachable range.
    fn jump_strip_to(&mut self, x: f32) -> Task<Message> {
        self.driver.cancel();
        let target = self.strip.clamp_offset(x);
        self.strip.offset_x = target;
        operation::scroll_to(
            Id::new(strip::STRIP_ID),
            AbsoluteOffset { x: target, y: 0.0 },
        )
    }

    pub fn subscription(&self) -> Subscription<Message> {
        let spinner = if self.hero_loading {
            iced::time::every(SPINNER_TICK).map(|_| Message::SpinnerTick)
        } else {
            Subscription::none()
        };

        let scroll = if self.driver.is_animating() {
            iced::time::every(scroll::TICK_INTERVAL).map(|_| Message::ScrollTick)
        } else {
            Subscription::none()
        };

        Subscription::batch([spinner, scroll])
    }

    pub fn photos(&self) -> &[Photo] {
        &self.photos
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn selected_photo(&self) -> &Photo {
        &self.photos[self.selected_index]
    }

    pub fn hero(&self) -> Option<&ImageData> {
        self.hero.as_ref()
    }

    pub fn is_hero_loading(&self) -> bool {
        self.hero_loading
    }

    pub fn thumbnails(&self) -> &[Option<ImageData>] {
        &self.thumbnails
    }

    pub fn spinner_rotation(&self) -> f32 {
        self.spinner_rotation
    }

    #[cfg(test)]
    pub(crate) fn strip_viewport(&self) -> &StripViewport {
        &self.strip
    }

    #[cfg(test)]
    pub(crate) fn set_strip_viewport(&mut self, strip: StripViewport) {
        self.strip = strip;
    }

    #[cfg(test)]
    pub(crate) fn is_scroll_animating(&self) -> bool {
        self.driver.is_animating()
    }
}
