use std::{fmt, path::PathBuf};

use crate::{palette::ColourKey, utils::pixel::Colour};

/// The main error type for the colour_id crate
#[derive(Debug)]
pub enum ColourIdError {
    /// Error occurred while reading or decoding an image
    ImageDecode(image::ImageError),

    /// Error occurred while writing or encoding an image
    ImageEncode(image::ImageError),

    /// Error occurred during I/O operations (file read/write)
    Io(std::io::Error),

    /// A black or white target was already claimed by an earlier asset in this run
    DuplicateColour {
        role: ColourKey,
        path: PathBuf,
        colour: Colour,
    },

    /// Two assets encode the same colour under different labels
    AmbiguousLabel {
        colour: [u8; 3],
        first: String,
        second: String,
    },

    /// The process config could not be parsed
    Config(String),
}

impl fmt::Display for ColourIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColourIdError::ImageDecode(e) => write!(f, "Image decode error: {}", e),
            ColourIdError::ImageEncode(e) => write!(f, "Image encode error: {}", e),
            ColourIdError::Io(e) => write!(f, "I/O error: {}", e),
            ColourIdError::DuplicateColour { role, path, colour } => write!(
                f,
                "{} re-uses {} value {}",
                path.display(),
                role,
                colour
            ),
            ColourIdError::AmbiguousLabel {
                colour,
                first,
                second,
            } => write!(
                f,
                "colour {:?} is claimed by both {} and {}",
                colour, first, second
            ),
            ColourIdError::Config(msg) => write!(f, "ConfigParseError {}", msg),
        }
    }
}

impl std::error::Error for ColourIdError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ColourIdError::ImageDecode(e) | ColourIdError::ImageEncode(e) => Some(e),
            ColourIdError::Io(e) => Some(e),
            _ => None,
        }
    }
}

// From implementations for automatic conversion from common error types

impl From<image::ImageError> for ColourIdError {
    fn from(err: image::ImageError) -> Self {
        // Distinguish between decode and encode errors based on the error kind
        match &err {
            image::ImageError::Encoding(_) => ColourIdError::ImageEncode(err),
            _ => ColourIdError::ImageDecode(err),
        }
    }
}

impl From<std::io::Error> for ColourIdError {
    fn from(err: std::io::Error) -> Self {
        ColourIdError::Io(err)
    }
}

impl From<json::Error> for ColourIdError {
    fn from(err: json::Error) -> Self {
        ColourIdError::Config(err.to_string())
    }
}

// Convenience type alias for Results using ColourIdError
pub type Result<T = ()> = std::result::Result<T, ColourIdError>;
