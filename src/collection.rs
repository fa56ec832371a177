// SPDX-License-Identifier: MPL-2.0
//! Photo collection model and manifest loading.
//!
//! A collection is described by a TOML manifest listing photos in display
//! order. Image references are resolved against the manifest's directory,
//! so a manifest can be moved together with its images.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// A single entry of a photo collection. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Photo {
    /// Resolved path to the displayable image file.
    pub source: PathBuf,
    pub title: String,
    pub photographer: String,
}

/// An ordered, non-empty sequence of photos.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collection {
    pub title: Option<String>,
    photos: Vec<Photo>,
}

#[derive(Debug, Deserialize)]
struct Manifest {
    title: Option<String>,
    #[serde(rename = "photo", default)]
    photos: Vec<ManifestPhoto>,
}

#[derive(Debug, Deserialize)]
struct ManifestPhoto {
    image: String,
    title: String,
    photographer: String,
}

impl Collection {
    /// Loads a collection manifest, resolving each image reference.
    ///
    /// Returns an error if the file cannot be read, is not valid TOML, or
    /// lists no photos. The non-empty guarantee is what lets the gallery
    /// keep its selected index unconditionally valid.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let manifest: Manifest =
            toml::from_str(&content).map_err(|e| Error::Manifest(e.to_string()))?;

        if manifest.photos.is_empty() {
            return Err(Error::Manifest(format!(
                "collection {} lists no photos",
                path.display()
            )));
        }

        let base = path.parent().unwrap_or_else(|| Path::new("."));
        let photos = manifest
            .photos
            .into_iter()
            .map(|photo| Photo {
                source: resolve_media(base, &photo.image),
                title: photo.title,
                photographer: photo.photographer,
            })
            .collect();

        Ok(Self {
            title: manifest.title,
            photos,
        })
    }

    pub fn photos(&self) -> &[Photo] {
        &self.photos
    }

    pub fn into_photos(self) -> Vec<Photo> {
        self.photos
    }

    pub fn len(&self) -> usize {
        self.photos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }
}

/// Resolves a manifest image reference to a concrete file path.
///
/// Absolute references pass through untouched; relative ones are joined
/// to the manifest's directory.
pub fn resolve_media(base: &Path, reference: &str) -> PathBuf {
    let reference = Path::new(reference);
    if reference.is_absolute() {
        reference.to_path_buf()
    } else {
        base.join(reference)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    fn write_manifest(dir: &Path, content: &str) -> PathBuf {
        let path = dir.join("collection.toml");
        let mut file = fs::File::create(&path).expect("failed to create manifest");
        file.write_all(content.as_bytes())
            .expect("failed to write manifest");
        path
    }

    #[test]
    fn load_parses_photos_in_order() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = write_manifest(
            temp_dir.path(),
            r#"
title = "Coastlines"

[[photo]]
image = "img/dawn.jpg"
title = "Dawn"
photographer = "R. Ellis"

[[photo]]
image = "img/dusk.jpg"
title = "Dusk"
photographer = "M. Okafor"
"#,
        );

        let collection = Collection::load(&path).expect("load failed");
        assert_eq!(collection.title.as_deref(), Some("Coastlines"));
        assert_eq!(collection.len(), 2);
        assert_eq!(collection.photos()[0].title, "Dawn");
        assert_eq!(collection.photos()[1].photographer, "M. Okafor");
        assert_eq!(
            collection.photos()[0].source,
            temp_dir.path().join("img/dawn.jpg")
        );
    }

    #[test]
    fn load_rejects_empty_collection() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = write_manifest(temp_dir.path(), "title = \"Empty\"\n");

        let err = Collection::load(&path).expect_err("empty collection should fail");
        assert!(matches!(err, Error::Manifest(message) if message.contains("no photos")));
    }

    #[test]
    fn load_rejects_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = write_manifest(temp_dir.path(), "[[photo]\nbroken");

        let err = Collection::load(&path).expect_err("invalid toml should fail");
        assert!(matches!(err, Error::Manifest(_)));
    }

    #[test]
    fn load_fails_for_missing_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let err = Collection::load(&temp_dir.path().join("absent.toml"))
            .expect_err("missing file should fail");
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn resolve_media_keeps_absolute_references() {
        let base = Path::new("/collections/coast");
        let absolute = if cfg!(windows) {
            "C:\\shared\\hero.jpg"
        } else {
            "/shared/hero.jpg"
        };
        assert_eq!(resolve_media(base, absolute), PathBuf::from(absolute));
    }

    #[test]
    fn resolve_media_joins_relative_references() {
        let base = Path::new("/collections/coast");
        assert_eq!(
            resolve_media(base, "img/dawn.jpg"),
            PathBuf::from("/collections/coast/img/dawn.jpg")
        );
    }
}
