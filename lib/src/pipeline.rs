use crate::codec::{decode_png, encode_png, save_png};
use crate::crop::crop_with;
use crate::{Error, Quadrilateral};
use image::DynamicImage;
use imageproc::geometric_transformations::Interpolation;
use log::info;
use std::path::PathBuf;

#[cfg(feature = "ocr")]
use crate::ocr::{OcrEngine, OcrMode, LANGUAGE, TESSDATA_DIR};

/// Region read by default: a 300 x 300 square near the top left of the screen.
pub const DEFAULT_QUADRILATERAL: [(i32, i32); 4] =
    [(100, 100), (400, 100), (400, 400), (100, 400)];
/// File the cropped region is saved to.
pub const OUTPUT_FILE: &str = "cropped_image.png";

/// Everything a pipeline run needs to know.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Area of the screenshot to read
    pub quadrilateral: Quadrilateral,
    /// Where the cropped image is written
    pub output: PathBuf,
    /// Pass the screenshot to the crop stage as a PNG buffer instead of directly
    pub png_handoff: bool,
    pub interpolation: Interpolation,
    /// Directory with the Tesseract language data
    #[cfg(feature = "ocr")]
    pub tessdata: PathBuf,
    #[cfg(feature = "ocr")]
    pub language: String,
    #[cfg(feature = "ocr")]
    pub mode: OcrMode,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            quadrilateral: Quadrilateral::from(DEFAULT_QUADRILATERAL),
            output: PathBuf::from(OUTPUT_FILE),
            png_handoff: true,
            interpolation: Interpolation::Nearest,
            #[cfg(feature = "ocr")]
            tessdata: PathBuf::from(TESSDATA_DIR),
            #[cfg(feature = "ocr")]
            language: String::from(LANGUAGE),
            #[cfg(feature = "ocr")]
            mode: OcrMode::default(),
        }
    }
}

/// The screenshot reader: capture, crop, recognize, save.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    settings: Settings,
}

impl Pipeline {
    pub fn new(settings: Settings) -> Pipeline {
        Pipeline { settings }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Crop the configured region out of `screenshot`.
    pub fn crop(&self, screenshot: DynamicImage) -> Result<DynamicImage, Error> {
        let screenshot = if self.settings.png_handoff {
            let buf = encode_png(&screenshot)?;
            drop(screenshot);
            decode_png(&buf)?
        } else {
            screenshot
        };
        info!("crop {}", self.settings.quadrilateral);
        crop_with(
            &screenshot,
            &self.settings.quadrilateral,
            self.settings.interpolation,
        )
    }

    #[cfg(feature = "ocr")]
    pub fn engine(&self) -> OcrEngine {
        OcrEngine::new(&self.settings.tessdata, self.settings.language.as_str())
            .with_mode(self.settings.mode)
    }

    /// Crop the configured region, read its text and save the crop.
    ///
    /// Returns the recognized text. Any failure aborts the run; the output
    /// file is only written after recognition succeeded.
    #[cfg(feature = "ocr")]
    pub fn process(&self, screenshot: DynamicImage) -> Result<String, Error> {
        let cropped = self.crop(screenshot)?;
        info!("recognize text");
        let text = self.engine().recognize(&cropped)?;
        info!("save {}", self.settings.output.display());
        save_png(&cropped, &self.settings.output)?;
        Ok(text)
    }

    /// Capture the primary screen and [process](Pipeline::process) it.
    #[cfg(all(feature = "capture", feature = "ocr"))]
    pub fn run(&self) -> Result<String, Error> {
        info!("capture desktop");
        let screenshot = crate::capture::capture_desktop()?;
        self.process(DynamicImage::ImageRgba8(screenshot))
    }

    /// Crop the configured region and save it, without text recognition.
    pub fn crop_and_save(&self, screenshot: DynamicImage) -> Result<DynamicImage, Error> {
        let cropped = self.crop(screenshot)?;
        save_png(&cropped, &self.settings.output)?;
        Ok(cropped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    fn screenshot() -> DynamicImage {
        DynamicImage::ImageRgba8(RgbaImage::from_fn(500, 450, |x, y| {
            Rgba([(x % 256) as u8, (y % 256) as u8, 128, 255])
        }))
    }

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.quadrilateral.to_string(), "(100,100)-(400,100)-(400,400)-(100,400)");
        assert_eq!(settings.output, PathBuf::from("cropped_image.png"));
        assert!(settings.png_handoff);
    }

    #[test]
    fn test_handoff_does_not_change_result() {
        let direct = Pipeline::new(Settings {
            png_handoff: false,
            ..Settings::default()
        });
        let handoff = Pipeline::default();
        let a = direct.crop(screenshot()).unwrap();
        let b = handoff.crop(screenshot()).unwrap();
        assert_eq!(a, b);
        assert_eq!((a.width(), a.height()), (500, 450));
    }

    #[test]
    fn test_degenerate_settings() {
        let pipeline = Pipeline::new(Settings {
            quadrilateral: Quadrilateral::from([(0, 0), (5, 5), (10, 10), (15, 15)]),
            ..Settings::default()
        });
        assert!(matches!(
            pipeline.crop(screenshot()),
            Err(Error::DegenerateTransform)
        ));
    }
}
