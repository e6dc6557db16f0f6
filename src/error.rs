// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Image(ImageError),
}

/// Reasons an image file could not join the track.
#[derive(Debug, Clone, PartialEq)]
pub enum ImageError {
    /// Extension is not one of the supported raster formats
    UnsupportedFormat,

    /// Header could not be parsed to read the pixel dimensions
    UnreadableDimensions(String),

    /// Image reports a zero width or height
    EmptyImage,
}

impl fmt::Display for ImageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageError::UnsupportedFormat => write!(f, "Unsupported image format"),
            ImageError::UnreadableDimensions(msg) => {
                write!(f, "Could not read image dimensions: {}", msg)
            }
            ImageError::EmptyImage => write!(f, "Image has no pixels"),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Image(e) => write!(f, "Image Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<ImageError> for Error {
    fn from(err: ImageError) -> Self {
        Error::Image(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Image(ImageError::UnreadableDimensions(err.to_string()))
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn image_error_wraps_into_error() {
        let err: Error = ImageError::EmptyImage.into();
        assert!(matches!(err, Error::Image(ImageError::EmptyImage)));
        assert_eq!(format!("{}", err), "Image Error: Image has no pixels");
    }

    #[test]
    fn toml_error_maps_to_config_variant() {
        let parse: std::result::Result<toml::Value, _> = toml::from_str("a = = b");
        let err: Error = parse.expect_err("invalid toml should fail").into();
        assert!(matches!(err, Error::Config(_)));
    }
}
