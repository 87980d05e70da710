// SPDX-License-Identifier: MPL-2.0
use crate::domain::gallery::ImageRef;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Io(String),
    Config(String),
    /// Image bytes were found but could not be decoded.
    Decode(String),
    /// An `ImageRef` did not resolve to any image bytes.
    ResourceNotFound(ImageRef),
    /// The gallery was configured without any image.
    EmptyGallery,
    /// A thumbnail index outside the gallery was selected.
    IndexOutOfRange { index: usize, len: usize },
    /// The window or renderer could not be started.
    Gui(String),
}

impl Error {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Io(_) => "error-io",
            Error::Config(_) => "error-config",
            Error::Decode(_) => "error-decode",
            Error::ResourceNotFound(_) => "error-resource-not-found",
            Error::EmptyGallery => "error-empty-gallery",
            Error::IndexOutOfRange { .. } => "error-index-out-of-range",
            Error::Gui(_) => "error-gui",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Decode(e) => write!(f, "Decode Error: {}", e),
            Error::ResourceNotFound(image) => write!(f, "Image not found -> {}", image),
            Error::EmptyGallery => write!(f, "Gallery Error: no images configured"),
            Error::IndexOutOfRange { index, len } => {
                write!(f, "Gallery Error: index {} out of range (len {})", index, len)
            }
            Error::Gui(e) => write!(f, "GUI Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

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

impl From<iced::Error> for Error {
    fn from(err: iced::Error) -> Self {
        Error::Gui(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Decode(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
