use anyhow::{bail, Context, Result};
use imageproc::drawing::draw_antialiased_line_segment_mut;
use imageproc::pixelops::interpolate;
use screenshot_ocr::{open_image, Pipeline, Point, Quadrilateral, Settings};
use std::convert::TryFrom;

const USAGE: &str = "Usage: crop IMAGE X0 Y0 X1 Y1 X2 Y2 X3 Y3";

fn parse_quadrilateral(args: &[String]) -> Result<Quadrilateral> {
    if args.len() != 8 {
        bail!(USAGE);
    }
    let coords = args
        .iter()
        .map(|s| s.parse::<i32>().with_context(|| format!("Bad coordinate {}", s)))
        .collect::<Result<Vec<_>>>()?;
    let points: Vec<Point> = coords.chunks(2).map(|c| Point::new(c[0], c[1])).collect();
    Ok(Quadrilateral::try_from(&points[..])?)
}

fn run() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let path = args.first().context(USAGE)?;
    let quad = parse_quadrilateral(&args[1..])?;

    let img = open_image(path)?;
    eprintln!("read {}x{} image from {}", img.width(), img.height(), path);

    // draw the quadrilateral outline in the source image
    let mut outline = img.to_rgba8();
    let red = image::Rgba([255, 0, 0, 255]);
    let corners = quad.points();
    for (i, a) in corners.iter().enumerate() {
        let b = corners[(i + 1) % 4];
        draw_antialiased_line_segment_mut(&mut outline, (a.x, a.y), (b.x, b.y), red, interpolate);
    }
    outline.save("outline.png")?;

    let pipeline = Pipeline::new(Settings {
        quadrilateral: quad,
        output: "cropped.png".into(),
        png_handoff: false,
        ..Settings::default()
    });
    pipeline.crop_and_save(img)?;
    eprintln!("saved {} to cropped.png", quad);
    Ok(())
}

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("{:?}", err);
    }
}
