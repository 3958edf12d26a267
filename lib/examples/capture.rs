use anyhow::Result;
use screenshot_ocr::{capture_desktop, encode_png};
use std::time::Instant;

fn main() -> Result<()> {
    env_logger::init();
    let path = std::env::args().nth(1).unwrap_or_else(|| String::from("screenshot.png"));
    let t0 = Instant::now();
    let screenshot = capture_desktop()?;
    eprintln!(
        "captured {}x{} in {:?}",
        screenshot.width(),
        screenshot.height(),
        t0.elapsed()
    );
    let buf = encode_png(&image::DynamicImage::ImageRgba8(screenshot))?;
    std::fs::write(&path, &buf)?;
    eprintln!("saved {} bytes to {}", buf.len(), path);
    Ok(())
}
