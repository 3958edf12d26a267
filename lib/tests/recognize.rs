use ab_glyph::{FontVec, PxScale};
use anyhow::{Context, Result};
use image::{DynamicImage, Rgb, RgbImage};
use imageproc::drawing::draw_text_mut;
use screenshot_ocr::{decode_png, OcrEngine, Pipeline, Quadrilateral, Settings};
use std::path::PathBuf;
use std::time::Instant;

const FONT: &str = "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf";

/// The font to render test text with, `SCREENSHOT_OCR_FONT` overrides the default DejaVu Sans.
fn load_font() -> Result<FontVec> {
    let path = std::env::var_os("SCREENSHOT_OCR_FONT")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(FONT));
    let data = std::fs::read(&path).with_context(|| format!("Failed to read {}", path.display()))?;
    FontVec::try_from_vec(data).with_context(|| format!("Invalid font {}", path.display()))
}

fn white(width: u32, height: u32) -> RgbImage {
    RgbImage::from_pixel(width, height, Rgb([255, 255, 255]))
}

#[test]
#[ignore = "needs ./tessdata/eng.traineddata and DejaVuSans.ttf, run with --ignored"]
fn test_recognize_hello() -> Result<()> {
    let font = load_font()?;
    let mut img = white(400, 120);
    draw_text_mut(&mut img, Rgb([0, 0, 0]), 40, 30, PxScale::from(56.0), &font, "HELLO");
    let engine = OcrEngine::default();
    let now = Instant::now();
    let text = engine.recognize(&DynamicImage::ImageRgb8(img))?;
    println!("recognize took {:?}: {:?}", now.elapsed(), text);
    assert!(text.contains("HELLO"), "{:?}", text);
    Ok(())
}

#[test]
#[ignore = "needs ./tessdata/eng.traineddata and DejaVuSans.ttf, run with --ignored"]
fn test_process_screenshot() -> Result<()> {
    let font = load_font()?;
    let mut screen = white(800, 600);
    draw_text_mut(&mut screen, Rgb([0, 0, 0]), 120, 200, PxScale::from(40.0), &font, "HELLO");
    let name = format!("screenshot-ocr-{}-hello.png", std::process::id());
    let output = std::env::temp_dir().join(name);
    let pipeline = Pipeline::new(Settings {
        quadrilateral: Quadrilateral::from([(100, 100), (400, 100), (400, 400), (100, 400)]),
        output: output.clone(),
        ..Settings::default()
    });
    let text = pipeline.process(DynamicImage::ImageRgb8(screen))?;
    assert!(text.contains("HELLO"), "{:?}", text);

    let saved =
        std::fs::read(&output).with_context(|| format!("Failed to read {}", output.display()))?;
    std::fs::remove_file(&output)?;
    let saved = decode_png(&saved)?;
    assert_eq!((saved.width(), saved.height()), (800, 600));
    Ok(())
}

#[test]
fn test_missing_tessdata_aborts_before_saving() {
    let name = format!("screenshot-ocr-{}-unsaved.png", std::process::id());
    let output = std::env::temp_dir().join(name);
    let pipeline = Pipeline::new(Settings {
        tessdata: "no/such/dir".into(),
        output: output.clone(),
        ..Settings::default()
    });
    let result = pipeline.process(DynamicImage::ImageRgb8(white(500, 500)));
    assert!(matches!(
        result,
        Err(screenshot_ocr::Error::ResourceUnavailable { .. })
    ));
    assert!(!output.exists());
}
