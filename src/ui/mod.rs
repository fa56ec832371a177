// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Organized as Elm-style components: state down, messages up.
//!
//! - [`gallery`] - The gallery screen (hero image, navigation, thumbnail strip)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`styles`] - Centralized button/container styling
//! - [`widgets`] - Custom Iced widgets (loading spinner)

pub mod design_tokens;
pub mod gallery;
pub mod styles;
pub mod widgets;
