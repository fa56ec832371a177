// SPDX-License-Identifier: MPL-2.0
//! Image loading and decoding for the hero view and the thumbnail strip.

use crate::error::Result;
use iced::widget::image;
use std::path::Path;

/// Longest edge of a decoded strip thumbnail, in pixels.
pub const THUMBNAIL_DECODE_EDGE: u32 = 192;

/// A decoded image ready for display by the Iced image widget.
#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl ImageData {
    /// Creates a new `ImageData` from RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            handle: image::Handle::from_rgba(width, height, pixels),
            width,
            height,
        }
    }
}

/// Decodes the image at `path` at full resolution.
pub fn load_image(path: &Path) -> Result<ImageData> {
    let decoded = image_rs::open(path)?;
    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(ImageData::from_rgba(width, height, rgba.into_vec()))
}

/// Decodes the image at `path` downscaled for the thumbnail strip.
///
/// Keeps aspect ratio; the longest edge ends up at most
/// [`THUMBNAIL_DECODE_EDGE`] pixels.
pub fn load_thumbnail(path: &Path) -> Result<ImageData> {
    let decoded = image_rs::open(path)?;
    let scaled = decoded.thumbnail(THUMBNAIL_DECODE_EDGE, THUMBNAIL_DECODE_EDGE);
    let rgba = scaled.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(ImageData::from_rgba(width, height, rgba.into_vec()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn write_test_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
        let path = dir.join(name);
        let pixels = image_rs::RgbaImage::from_pixel(width, height, image_rs::Rgba([9, 120, 40, 255]));
        pixels.save(&path).expect("failed to write test png");
        path
    }

    #[test]
    fn load_image_returns_full_dimensions() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = write_test_png(temp_dir.path(), "full.png", 48, 32);

        let data = load_image(&path).expect("load failed");
        assert_eq!((data.width, data.height), (48, 32));
    }

    #[test]
    fn load_thumbnail_downscales_large_images() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = write_test_png(temp_dir.path(), "large.png", 640, 480);

        let data = load_thumbnail(&path).expect("load failed");
        assert!(data.width <= THUMBNAIL_DECODE_EDGE);
        assert!(data.height <= THUMBNAIL_DECODE_EDGE);
        // Aspect ratio preserved: 4:3 stays 4:3.
        assert_eq!(data.width * 3, data.height * 4);
    }

    #[test]
    fn load_thumbnail_keeps_small_images_as_is() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = write_test_png(temp_dir.path(), "small.png", 60, 40);

        let data = load_thumbnail(&path).expect("load failed");
        assert_eq!((data.width, data.height), (60, 40));
    }

    #[test]
    fn load_image_fails_for_missing_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let err = load_image(&temp_dir.path().join("absent.png"))
            .expect_err("missing file should fail");
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn load_image_fails_for_undecodable_data() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("broken.png");
        std::fs::write(&path, b"not an image").expect("failed to write file");

        let err = load_image(&path).expect_err("garbage data should fail");
        assert!(matches!(err, Error::Decode(_) | Error::Io(_)));
    }
}
