use std::io;

use crate::ImageType;

/// An Error type used in failure cases.
#[derive(Debug, thiserror::Error)]
pub enum ImageError {
    /// The header didn't match any of the signatures this crate knows about.
    #[error("could not identify a supported image format")]
    UnsupportedFormat,

    /// The format was identified, but its header was malformed, truncated, or
    /// uses a variant this crate doesn't handle.
    #[error("failed to parse {format:?} header")]
    ParserError {
        /// The format that was identified before parsing failed.
        format: ImageType,
        /// The underlying I/O or bounds failure.
        #[source]
        source: io::Error,
    },

    /// The underlying reader failed before a format could even be identified.
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl ImageError {
    /// Attaches a detected format to a lower-level I/O failure, turning a bare
    /// [`ImageError::Io`] into a [`ImageError::ParserError`].
    pub(crate) fn with_format(self, format: ImageType) -> ImageError {
        match self {
            ImageError::Io(source) => ImageError::ParserError { format, source },
            other => other,
        }
    }
}

pub type ImageResult<T> = Result<T, ImageError>;
