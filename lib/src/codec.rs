use crate::Error;
use image::{DynamicImage, ImageError, ImageFormat};
use log::debug;
use std::fs::File;
use std::io::{self, BufWriter, Cursor, Write};
use std::path::Path;

/// Encode `img` as PNG into a new buffer.
pub fn encode_png(img: &DynamicImage) -> Result<Vec<u8>, Error> {
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, ImageFormat::Png)?;
    let buf = buf.into_inner();
    debug!(
        "encoded {}x{} image to {} png bytes",
        img.width(),
        img.height(),
        buf.len()
    );
    Ok(buf)
}

/// Decode a PNG buffer produced by [encode_png].
pub fn decode_png(buf: &[u8]) -> Result<DynamicImage, Error> {
    Ok(image::load_from_memory_with_format(buf, ImageFormat::Png)?)
}

/// Open an image file, format guessed from its content.
pub fn open_image<P: AsRef<Path>>(path: P) -> Result<DynamicImage, Error> {
    let path = path.as_ref();
    image::open(path).map_err(|source| Error::ImageError {
        path: path.to_path_buf(),
        source,
    })
}

/// Save `img` as PNG, whatever the extension of `path`. An existing file is overwritten.
pub fn save_png<P: AsRef<Path>>(img: &DynamicImage, path: P) -> Result<(), Error> {
    let path = path.as_ref();
    let io_error = |source: io::Error| Error::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(io_error)?;
    let mut writer = BufWriter::new(file);
    img.write_to(&mut writer, ImageFormat::Png)
        .map_err(|e| match e {
            ImageError::IoError(source) => io_error(source),
            e => Error::Codec(e),
        })?;
    writer.flush().map_err(io_error)?;
    debug!("saved {}x{} image to {}", img.width(), img.height(), path.display());
    Ok(())
}
