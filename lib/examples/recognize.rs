use anyhow::{Context, Result};
use screenshot_ocr::{crop_from_file, open_image, OcrEngine, Quadrilateral};
use std::time::Instant;

fn run() -> Result<()> {
    let path = std::env::args()
        .nth(1)
        .context("Usage: recognize IMAGE [X0 Y0 X1 Y1 X2 Y2 X3 Y3]")?;
    let coords: Vec<i32> = std::env::args()
        .skip(2)
        .map(|s| s.parse())
        .collect::<Result<_, _>>()
        .context("Coordinates must be integers")?;

    let img = match coords[..] {
        [x0, y0, x1, y1, x2, y2, x3, y3] => {
            let quad = Quadrilateral::from([(x0, y0), (x1, y1), (x2, y2), (x3, y3)]);
            crop_from_file(&path, &quad)?
        }
        [] => open_image(&path)?,
        _ => anyhow::bail!("Expected 8 coordinates, got {}", coords.len()),
    };

    let t0 = Instant::now();
    let text = OcrEngine::default().recognize(&img)?;
    println!("recognize took {:?}", t0.elapsed());
    println!("{}", text);
    Ok(())
}

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("{:?}", err);
    }
}
