use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// No display could be captured
    #[error("Display unavailable: {0}")]
    DeviceUnavailable(String),
    /// The quadrilateral does not define an invertible perspective transform
    #[error("Quadrilateral does not define a perspective transform")]
    DegenerateTransform,
    #[error("A quadrilateral needs exactly 4 points, got {0}")]
    InvalidQuadrilateral(usize),
    /// OCR language data is missing or the engine refused it
    #[error("OCR resource {} is not available: {}", path.display(), reason)]
    ResourceUnavailable { path: PathBuf, reason: String },
    #[error("Text recognition failed: {0}")]
    Recognition(String),
    /// Error writing an image file
    #[error("Image {} could not be written", path.display())]
    Io { path: PathBuf, source: io::Error },
    /// Error decoding an image file
    #[error("Image {} could not be decoded", path.display())]
    ImageError {
        path: PathBuf,
        source: image::error::ImageError,
    },
    /// Error encoding or decoding an in-memory image
    #[error("Image codec error")]
    Codec(#[from] image::error::ImageError),
}
