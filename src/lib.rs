// SPDX-License-Identifier: MPL-2.0
//! `viewfinder` is a photo-collection gallery viewer built with the Iced
//! GUI framework.
//!
//! It renders a hero image with wrap-around navigation, a caption, and a
//! thumbnail strip whose scroll position follows the selection.

pub mod app;
pub mod collection;
pub mod config;
pub mod error;
pub mod media;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
