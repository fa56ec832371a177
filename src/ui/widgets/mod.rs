// SPDX-License-Identifier: MPL-2.0
//! Custom Iced widgets.

pub mod spinner;

pub use spinner::Spinner;
