// SPDX-License-Identifier: MPL-2.0
//! Directory scanner module for finding and sorting image files.
//!
//! The track is built once from a single directory, so the list produced
//! here is fixed for the lifetime of the gallery.

use crate::config::SortOrder;
use crate::error::Result;
use crate::media;
use std::path::{Path, PathBuf};

/// Ordered list of image files found in a directory.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ImageList {
    image_files: Vec<PathBuf>,
}

impl ImageList {
    /// Creates a new empty ImageList.
    pub fn new() -> Self {
        Self::default()
    }

    /// Scans a directory (non-recursively) for supported images and sorts them.
    ///
    /// Returns an error if the directory cannot be read.
    pub fn scan_directory(directory: &Path, sort_order: SortOrder) -> Result<Self> {
        let mut image_files = Vec::new();

        for entry in std::fs::read_dir(directory)? {
            let entry = entry?;
            let path = entry.path();

            if path.is_file() && media::is_supported_image(&path) {
                image_files.push(path);
            }
        }

        sort_image_files(&mut image_files, sort_order);

        Ok(Self { image_files })
    }

    /// Returns the total number of image files in the list.
    pub fn len(&self) -> usize {
        self.image_files.len()
    }

    /// Checks if the image list is empty.
    pub fn is_empty(&self) -> bool {
        self.image_files.is_empty()
    }

    /// Returns the path at the specified index.
    pub fn get(&self, index: usize) -> Option<&Path> {
        self.image_files.get(index).map(|p| p.as_path())
    }

    /// Iterates over the paths in track order.
    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.image_files.iter().map(|p| p.as_path())
    }
}

/// Sorts a list of image file paths according to the specified sort order.
fn sort_image_files(image_files: &mut [PathBuf], sort_order: SortOrder) {
    match sort_order {
        SortOrder::Alphabetical => {
            image_files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        }
        SortOrder::ModifiedDate => {
            image_files.sort_by_key(|path| {
                path.metadata()
                    .and_then(|m| m.modified())
                    .unwrap_or(std::time::SystemTime::UNIX_EPOCH)
            });
        }
        SortOrder::CreatedDate => {
            image_files.sort_by_key(|path| {
                path.metadata()
                    .and_then(|m| m.created())
                    .unwrap_or(std::time::SystemTime::UNIX_EPOCH)
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Write;
    use tempfile::tempdir;

    fn create_test_file(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        let mut file = fs::File::create(&path).expect("failed to create test file");
        file.write_all(b"fake image data")
            .expect("failed to write test file");
        path
    }

    #[test]
    fn scan_directory_finds_all_images() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        create_test_file(temp_dir.path(), "a.jpg");
        create_test_file(temp_dir.path(), "b.png");
        create_test_file(temp_dir.path(), "c.webp");
        create_test_file(temp_dir.path(), "notes.txt");
        create_test_file(temp_dir.path(), "clip.mp4");

        let list = ImageList::scan_directory(temp_dir.path(), SortOrder::Alphabetical)
            .expect("failed to scan directory");

        assert_eq!(list.len(), 3);
    }

    #[test]
    fn scan_directory_sorts_alphabetically() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let img_c = create_test_file(temp_dir.path(), "c.jpg");
        let img_a = create_test_file(temp_dir.path(), "a.jpg");
        let img_b = create_test_file(temp_dir.path(), "b.jpg");

        let list = ImageList::scan_directory(temp_dir.path(), SortOrder::Alphabetical)
            .expect("failed to scan directory");

        assert_eq!(list.get(0), Some(img_a.as_path()));
        assert_eq!(list.get(1), Some(img_b.as_path()));
        assert_eq!(list.get(2), Some(img_c.as_path()));
    }

    #[test]
    fn scan_directory_ignores_subdirectories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::create_dir(temp_dir.path().join("nested.png")).expect("failed to create dir");
        create_test_file(temp_dir.path(), "a.png");

        let list = ImageList::scan_directory(temp_dir.path(), SortOrder::Alphabetical)
            .expect("failed to scan directory");

        assert_eq!(list.len(), 1);
    }

    #[test]
    fn scan_directory_handles_empty_directory() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let list = ImageList::scan_directory(temp_dir.path(), SortOrder::ModifiedDate)
            .expect("failed to scan directory");
        assert!(list.is_empty());
        assert_eq!(list.get(0), None);
    }

    #[test]
    fn scan_missing_directory_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let missing = temp_dir.path().join("missing");
        assert!(ImageList::scan_directory(&missing, SortOrder::Alphabetical).is_err());
    }
}
