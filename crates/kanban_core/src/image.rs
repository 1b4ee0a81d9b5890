//! Task image attachments as `data:` URIs.
//!
//! # Invariants
//! - Only `image/*` MIME types (guessed from the file extension) are accepted.
//! - No size limit is enforced.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;

/// Errors from image attachment loading.
#[derive(Debug)]
pub enum ImageError {
    Io(std::io::Error),
    /// File extension does not map to an `image/*` type.
    NotAnImage { mime: String },
}

impl Display for ImageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to read image: {err}"),
            Self::NotAnImage { mime } => write!(f, "file is not an image: {mime}"),
        }
    }
}

impl Error for ImageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::NotAnImage { .. } => None,
        }
    }
}

impl From<std::io::Error> for ImageError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

/// Reads a local image file and encodes it as `data:<mime>;base64,<payload>`.
pub fn image_data_uri(path: impl AsRef<Path>) -> Result<String, ImageError> {
    let path = path.as_ref();
    let mime = mime_guess::from_path(path).first_or_octet_stream();
    if mime.type_() != mime_guess::mime::IMAGE {
        return Err(ImageError::NotAnImage {
            mime: mime.essence_str().to_string(),
        });
    }

    let bytes = std::fs::read(path)?;
    Ok(format!(
        "data:{};base64,{}",
        mime.essence_str(),
        STANDARD.encode(bytes)
    ))
}
