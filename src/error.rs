use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for color extraction operations.
pub type Result<T> = std::result::Result<T, ExtractError>;

/// Errors that can occur while extracting dominant colors from an image file.
///
/// The CLI prints the `Display` text of these in place of the result list;
/// library callers get the full variant plus the underlying decoder error
/// through [`std::error::Error::source`].
#[derive(Error, Debug)]
pub enum ExtractError {
    /// The image file does not exist.
    #[error("file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// The file was read but could not be decoded as an image.
    #[error("failed to decode image {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The file's format is not supported by the decoder.
    #[error("unsupported image format for {}: {source}", path.display())]
    UnsupportedFormat {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Any other failure (permissions, decoder limits, ...).
    #[error("{0}")]
    Other(String),
}

impl ExtractError {
    /// Map an I/O error from opening the image file.
    pub(crate) fn from_io(path: &std::path::Path, source: std::io::Error) -> Self {
        match source.kind() {
            std::io::ErrorKind::NotFound => Self::FileNotFound {
                path: path.to_path_buf(),
            },
            _ => Self::Other(format!("failed to open {}: {source}", path.display())),
        }
    }

    /// Map a decoder error from the `image` crate.
    pub(crate) fn from_image(path: &std::path::Path, source: image::ImageError) -> Self {
        let path = path.to_path_buf();

        match source {
            image::ImageError::Unsupported(_) => Self::UnsupportedFormat { path, source },
            image::ImageError::Decoding(_) => Self::Decode { path, source },
            other => Self::Other(format!("failed to read {}: {other}", path.display())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn missing_file_maps_to_file_not_found() {
        let io = std::io::Error::from(std::io::ErrorKind::NotFound);
        let err = ExtractError::from_io(Path::new("no_such.png"), io);

        assert!(matches!(err, ExtractError::FileNotFound { .. }));
        assert_eq!(err.to_string(), "file not found: no_such.png");
    }

    #[test]
    fn permission_error_maps_to_other() {
        let io = std::io::Error::from(std::io::ErrorKind::PermissionDenied);
        let err = ExtractError::from_io(Path::new("locked.png"), io);

        assert!(matches!(err, ExtractError::Other(_)));
    }
}
