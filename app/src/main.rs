use anyhow::{Context, Result};
use log::info;
use screenshot_ocr::{Pipeline, Settings};
use std::io::{self, BufRead};

fn main() -> Result<()> {
    env_logger::init();

    let settings = Settings::default();
    let output = settings.output.clone();
    let text = Pipeline::new(settings)
        .run()
        .context("Failed to read the screen")?;
    info!("cropped region saved to {}", output.display());

    println!("OCR Result:");
    println!("{}", text);

    // keep the console open until the user presses enter
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(())
}
