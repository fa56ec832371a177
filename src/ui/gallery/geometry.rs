// SPDX-License-Identifier: MPL-2.0
//! Pure scroll-geometry helpers for the thumbnail strip.
//!
//! All values are snapshots of the live scrollable, captured from its
//! `on_scroll` events, never cached layout state. Thumbnails sit on a
//! fixed pitch of [`sizing::THUMBNAIL_SIZE_TOTAL`] pixels.

use crate::ui::design_tokens::sizing;

/// Snapshot of the strip's scrollable viewport.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StripViewport {
    /// Current horizontal scroll offset.
    pub offset_x: f32,
    /// Visible width of the scroll area.
    pub width: f32,
    /// Total width of the scrollable content.
    pub content_width: f32,
}

impl StripViewport {
    /// True when every thumbnail is already visible, so scroll
    /// synchronization has nothing to do.
    #[must_use]
    pub fn content_fits(&self) -> bool {
        self.width >= self.content_width
    }

    /// Largest reachable scroll offset.
    #[must_use]
    pub fn max_offset(&self) -> f32 {
        (self.content_width - self.width).max(0.0)
    }

    /// Clamps a requested offset to what the scrollable can reach.
    #[must_use]
    pub fn clamp_offset(&self, x: f32) -> f32 {
        x.clamp(0.0, self.max_offset())
    }
}

/// Distances from a thumbnail's edges to the matching edges of the
/// visible viewport. Negative values mean the edge is scrolled out of
/// view past that side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeOffsets {
    pub left: f32,
    pub right: f32,
}

/// Computes the edge offsets of the thumbnail at `index`.
#[must_use]
pub fn thumbnail_offsets(strip: &StripViewport, index: usize) -> EdgeOffsets {
    #[allow(clippy::cast_precision_loss)]
    let thumb_left = index as f32 * sizing::THUMBNAIL_SIZE_TOTAL;
    let thumb_right = thumb_left + sizing::THUMBNAIL_SIZE_TOTAL;

    EdgeOffsets {
        left: thumb_left - strip.offset_x,
        right: (strip.offset_x + strip.width) - thumb_right,
    }
}

/// Scroll distance that brings the edge described by `edge_offset` to
/// the horizontal center of the viewport.
#[must_use]
pub fn centering_delta(strip: &StripViewport, edge_offset: f32) -> f32 {
    strip.width / 2.0 - edge_offset
}
