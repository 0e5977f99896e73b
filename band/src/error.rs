//! Band error types.

use thiserror::Error;

use crate::surface::ImageId;

#[derive(Debug, Error)]
pub enum BandError {
    #[error("image decode error: {0}")]
    ImageDecode(#[from] image::ImageError),

    #[error("font buffer is empty")]
    EmptyFont,

    #[error("unknown image: {0:?}")]
    UnknownImage(ImageId),

    #[error("image {0:?} has zero height, aspect ratio is undefined")]
    ZeroImageHeight(ImageId),

    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, BandError>;
