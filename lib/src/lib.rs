//! Read the text in a region of the screen
//!
//! This library captures the primary display, warps a quadrilateral region of the screenshot
//! onto a rectangle with a perspective transform, reads the text in it with Tesseract and saves
//! the warped region as a PNG file.
//!
//! # Basic usage
//! ```no_run
//! # use screenshot_ocr::{Error, Pipeline, Settings};
//! let pipeline = Pipeline::new(Settings::default());
//! let text = pipeline.run()?;
//! println!("OCR Result:\n{}", text);
//! # Ok::<(), Error>(())
//! ```
//! The default settings read the square (100,100)-(400,100)-(400,400)-(100,400), using the
//! English language data in `./tessdata`, and save the region to `cropped_image.png`.
//!
//! The stages can also be used on their own:
//! ```
//! # use screenshot_ocr::{crop, decode_png, encode_png, Error, Quadrilateral};
//! use image::{DynamicImage, RgbaImage};
//! let screenshot = DynamicImage::ImageRgba8(RgbaImage::new(800, 600));
//! let buf = encode_png(&screenshot)?;
//! let quad = Quadrilateral::from([(10, 10), (210, 20), (200, 120), (20, 110)]);
//! let region = crop(&decode_png(&buf)?, &quad)?;
//! assert_eq!((region.width(), region.height()), (800, 600));
//! # Ok::<(), Error>(())
//! ```
//!
//! # Features
//! * `capture` (default): screen capture with `xcap`
//! * `ocr` (default): text recognition with `tesseract`, needs the native Tesseract library

#[cfg(feature = "capture")]
mod capture;
mod codec;
mod crop;
mod error;
mod geometry;
#[cfg(feature = "ocr")]
mod ocr;
mod pipeline;

#[cfg(feature = "capture")]
pub use capture::capture_desktop;
pub use codec::{decode_png, encode_png, open_image, save_png};
pub use crop::{
    crop, crop_from_file, crop_from_memory, crop_with, perspective_transform, TransformMatrix,
};
pub use error::Error;
pub use geometry::{Point, Quadrilateral};
pub use imageproc::geometric_transformations::Interpolation;
#[cfg(feature = "ocr")]
pub use ocr::{OcrEngine, OcrMode, LANGUAGE, TESSDATA_DIR};
pub use pipeline::{Pipeline, Settings, DEFAULT_QUADRILATERAL, OUTPUT_FILE};
