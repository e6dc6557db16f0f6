// SPDX-License-Identifier: MPL-2.0
//! Image probing for the track.
//!
//! Only the header of each file is read here; pixel data is decoded lazily
//! by the renderer through the [`image::Handle`].

use crate::config::SortOrder;
use crate::directory_scanner::ImageList;
use crate::error::{ImageError, Result};
use iced::widget::image;
use std::path::{Path, PathBuf};

/// Supported image extensions
pub mod extensions {
    /// Raster formats the renderer can decode.
    pub const IMAGE_EXTENSIONS: &[&str] = &[
        "jpg", "jpeg", "png", "gif", "tiff", "tif", "webp", "bmp", "ico",
    ];
}

pub use extensions::IMAGE_EXTENSIONS;

/// An image that owns one wrapper in the track.
#[derive(Debug, Clone)]
pub struct TrackImage {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
    pub handle: image::Handle,
}

impl TrackImage {
    /// Builds an entry from known dimensions without touching the file.
    pub fn new(path: impl Into<PathBuf>, width: u32, height: u32) -> Self {
        let path = path.into();
        let handle = image::Handle::from_path(&path);
        Self {
            path,
            width,
            height,
            handle,
        }
    }

    /// Width divided by height.
    #[must_use]
    pub fn aspect_ratio(&self) -> f32 {
        if self.height == 0 {
            return 1.0;
        }
        self.width as f32 / self.height as f32
    }
}

/// Checks the file extension against [`IMAGE_EXTENSIONS`], case-insensitively.
pub fn is_supported_image<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref()
        .extension()
        .and_then(|s| s.to_str())
        .map(str::to_lowercase)
        .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str()))
}

/// Reads the pixel dimensions of `path` from its header.
pub fn probe_image(path: &Path) -> Result<TrackImage> {
    if !is_supported_image(path) {
        return Err(ImageError::UnsupportedFormat.into());
    }

    let (width, height) = image_rs::image_dimensions(path)?;
    if width == 0 || height == 0 {
        return Err(ImageError::EmptyImage.into());
    }

    Ok(TrackImage::new(path, width, height))
}

/// Scans `directory` and probes every image, skipping unreadable files.
///
/// Returns an error only if the directory itself cannot be read.
pub fn load_track_images(directory: &Path, sort_order: SortOrder) -> Result<Vec<TrackImage>> {
    let list = ImageList::scan_directory(directory, sort_order)?;

    let images: Vec<TrackImage> = list
        .iter()
        .filter_map(|path| match probe_image(path) {
            Ok(image) => Some(image),
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "skipping image");
                None
            }
        })
        .collect();

    tracing::info!(
        directory = %directory.display(),
        found = list.len(),
        loaded = images.len(),
        "scanned image directory"
    );

    Ok(images)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn write_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
        let path = dir.join(name);
        image_rs::RgbImage::new(width, height)
            .save(&path)
            .expect("failed to write png");
        path
    }

    #[test]
    fn is_supported_image_recognizes_extensions() {
        assert!(is_supported_image("photo.JPG"));
        assert!(is_supported_image("photo.webp"));
        assert!(!is_supported_image("clip.mp4"));
        assert!(!is_supported_image("README"));
    }

    #[test]
    fn probe_image_reads_dimensions() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = write_png(temp_dir.path(), "wide.png", 8, 4);

        let image = probe_image(&path).expect("probe failed");
        assert_eq!((image.width, image.height), (8, 4));
        assert_eq!(image.aspect_ratio(), 2.0);
    }

    #[test]
    fn probe_image_rejects_garbage() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("broken.png");
        fs::write(&path, b"definitely not a png").expect("write failed");

        assert!(probe_image(&path).is_err());
    }

    #[test]
    fn load_track_images_skips_unreadable_files() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        write_png(temp_dir.path(), "a.png", 2, 3);
        write_png(temp_dir.path(), "c.png", 3, 2);
        fs::write(temp_dir.path().join("b.png"), b"junk").expect("write failed");

        let images = load_track_images(temp_dir.path(), SortOrder::Alphabetical)
            .expect("load failed");

        assert_eq!(images.len(), 2);
        assert!(images[0].path.ends_with("a.png"));
        assert!(images[1].path.ends_with("c.png"));
    }
}
