use crate::Error;
use image::DynamicImage;
use log::{debug, info, warn};
use std::path::{Path, PathBuf};
use tesseract::{OcrEngineMode, Tesseract};

/// Default location of the Tesseract language data.
pub const TESSDATA_DIR: &str = "./tessdata";
/// Default recognition language.
pub const LANGUAGE: &str = "eng";

/// Which Tesseract recognizer(s) to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OcrMode {
    /// The legacy pattern matching recognizer
    TesseractOnly,
    /// The LSTM neural net recognizer
    LstmOnly,
    /// Legacy and LSTM combined
    TesseractLstmCombined,
    /// Whatever the language data supports
    Default,
}

impl Default for OcrMode {
    fn default() -> Self {
        OcrMode::TesseractLstmCombined
    }
}

impl From<OcrMode> for OcrEngineMode {
    fn from(mode: OcrMode) -> Self {
        match mode {
            OcrMode::TesseractOnly => OcrEngineMode::TesseractOnly,
            OcrMode::LstmOnly => OcrEngineMode::LstmOnly,
            OcrMode::TesseractLstmCombined => OcrEngineMode::TesseractLstmCombined,
            OcrMode::Default => OcrEngineMode::Default,
        }
    }
}

/// Text recognizer backed by Tesseract.
///
/// Only holds the engine configuration. Every call to [recognize](OcrEngine::recognize)
/// initializes its own Tesseract instance, which is released when the call returns.
#[derive(Debug, Clone)]
pub struct OcrEngine {
    datapath: PathBuf,
    language: String,
    mode: OcrMode,
}

impl Default for OcrEngine {
    fn default() -> Self {
        OcrEngine::new(TESSDATA_DIR, LANGUAGE)
    }
}

impl OcrEngine {
    /// An engine that reads `<datapath>/<language>.traineddata`.
    pub fn new<P: Into<PathBuf>, S: Into<String>>(datapath: P, language: S) -> OcrEngine {
        OcrEngine {
            datapath: datapath.into(),
            language: language.into(),
            mode: OcrMode::default(),
        }
    }

    pub fn with_mode(mut self, mode: OcrMode) -> OcrEngine {
        self.mode = mode;
        self
    }

    pub fn datapath(&self) -> &Path {
        &self.datapath
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn mode(&self) -> OcrMode {
        self.mode
    }

    /// The language data file the engine needs.
    pub fn traineddata(&self) -> PathBuf {
        self.datapath.join(format!("{}.traineddata", self.language))
    }

    /// Recognize all text in `img`.
    ///
    /// The text is returned exactly as Tesseract produces it, no trimming or filtering.
    ///
    /// # Errors
    /// * [Error::ResourceUnavailable] if the language data is missing or can not be loaded
    /// * [Error::Recognition] if Tesseract fails on the image
    pub fn recognize(&self, img: &DynamicImage) -> Result<String, Error> {
        let traineddata = self.traineddata();
        if !traineddata.is_file() {
            return Err(Error::ResourceUnavailable {
                path: traineddata,
                reason: "no such file".to_string(),
            });
        }
        let datapath = self.datapath.to_str().ok_or_else(|| Error::ResourceUnavailable {
            path: self.datapath.clone(),
            reason: "path is not valid UTF-8".to_string(),
        })?;

        // Tesseract takes packed RGB frames
        let rgb = img.to_rgb8();
        let (width, height) = (rgb.width() as i32, rgb.height() as i32);
        debug!(
            "recognize {}x{} image, language {} mode {:?}",
            width, height, self.language, self.mode
        );

        // the native handle is freed when `tess` drops, on every return path
        let mut tess = Tesseract::new_with_oem(
            Some(datapath),
            Some(self.language.as_str()),
            self.mode.into(),
        )
        .map_err(|e| {
            warn!("tesseract could not load {}: {}", traineddata.display(), e);
            Error::ResourceUnavailable {
                path: traineddata,
                reason: e.to_string(),
            }
        })?
        .set_frame(rgb.as_raw(), width, height, 3, width * 3)
        .map_err(|e| Error::Recognition(e.to_string()))?;
        let text = tess
            .get_text()
            .map_err(|e| Error::Recognition(e.to_string()))?;
        info!("recognized {} characters", text.chars().count());
        Ok(text)
    }
}
