use crate::codec::{decode_png, open_image};
use crate::{Error, Quadrilateral};
use image::{DynamicImage, ImageBuffer, Luma, LumaA, Pixel, Rgb, Rgba};
use imageproc::geometric_transformations::{warp_into, Interpolation, Projection};
use log::debug;
use std::borrow::Cow;
use std::path::Path;

/// Replicated edge pixels added around the source for the blending filters.
/// The bicubic kernel reads up to 3 pixels past the sample position.
const BORDER: u32 = 3;

/// A 3x3 perspective transform.
#[derive(Debug, Clone, Copy)]
pub struct TransformMatrix(Projection);

impl TransformMatrix {
    /// Map a point through the transform.
    pub fn map(&self, x: f32, y: f32) -> (f32, f32) {
        self.0 * (x, y)
    }

    pub fn inverse(self) -> TransformMatrix {
        TransformMatrix(self.0.invert())
    }

    pub fn projection(&self) -> &Projection {
        &self.0
    }
}

/// Compute the transform that maps `quad` onto the rectangle (0,0)-(W,0)-(W,H)-(0,H).
///
/// # Errors
/// [Error::DegenerateTransform] if three of the corners are collinear or the
/// rectangle is empty.
pub fn perspective_transform(
    quad: &Quadrilateral,
    width: u32,
    height: u32,
) -> Result<TransformMatrix, Error> {
    if width == 0 || height == 0 || quad.is_degenerate() {
        return Err(Error::DegenerateTransform);
    }
    solve(quad.as_control_points(), width, height)
}

fn solve(from: [(f32, f32); 4], width: u32, height: u32) -> Result<TransformMatrix, Error> {
    let (w, h) = (width as f32, height as f32);
    let to = [(0.0, 0.0), (w, 0.0), (w, h), (0.0, h)];
    Projection::from_control_points(from, to)
        .map(TransformMatrix)
        .ok_or(Error::DegenerateTransform)
}

/// `img` surrounded by `border` copies of its edge pixels.
fn pad<P: Pixel>(
    img: &ImageBuffer<P, Vec<P::Subpixel>>,
    border: u32,
) -> Cow<'_, ImageBuffer<P, Vec<P::Subpixel>>> {
    if border == 0 {
        return Cow::Borrowed(img);
    }
    let (w, h) = img.dimensions();
    Cow::Owned(ImageBuffer::from_fn(w + 2 * border, h + 2 * border, |x, y| {
        let sx = x.saturating_sub(border).min(w - 1);
        let sy = y.saturating_sub(border).min(h - 1);
        *img.get_pixel(sx, sy)
    }))
}

/// Crop `quad` out of `img` with nearest neighbour sampling. See [crop_with].
pub fn crop(img: &DynamicImage, quad: &Quadrilateral) -> Result<DynamicImage, Error> {
    crop_with(img, quad, Interpolation::Nearest)
}

/// Warp the area inside `quad` onto a canvas with the same dimensions as `img`.
///
/// The output is always as large as the source, whatever the size of the
/// quadrilateral. Pixels that map outside the source are left at zero.
/// The blending filters (bilinear, bicubic) first extend the source by a few
/// copies of its edge pixels, so the outermost rows and columns are sampled like
/// any other and not blended with zero.
/// 8 bit grayscale and RGB(A) images keep their color type, other images are
/// resampled as RGBA.
///
/// # Example
/// ```
/// # use screenshot_ocr::{crop, Quadrilateral, Error};
/// use image::{DynamicImage, RgbImage};
/// let img = DynamicImage::ImageRgb8(RgbImage::new(640, 480));
/// let quad = Quadrilateral::from([(100, 100), (400, 100), (400, 400), (100, 400)]);
/// let cropped = crop(&img, &quad)?;
/// assert_eq!((cropped.width(), cropped.height()), (640, 480));
/// # Ok::<(), Error>(())
/// ```
pub fn crop_with(
    img: &DynamicImage,
    quad: &Quadrilateral,
    interpolation: Interpolation,
) -> Result<DynamicImage, Error> {
    let (width, height) = (img.width(), img.height());
    let transform = perspective_transform(quad, width, height)?;
    debug!("crop {} from {}x{} image", quad, width, height);

    let border = match interpolation {
        Interpolation::Nearest => 0,
        _ => BORDER,
    };
    // the padded source moves the quadrilateral by `border`
    let transform = if border == 0 {
        transform
    } else {
        let shift = border as f32;
        let mut from = quad.as_control_points();
        for p in from.iter_mut() {
            *p = (p.0 + shift, p.1 + shift);
        }
        solve(from, width, height)?
    };
    let p = transform.projection();

    macro_rules! resample {
        ($buf:expr, $variant:ident, $blank:expr) => {{
            let src = pad($buf, border);
            let mut out = ImageBuffer::new(width, height);
            warp_into(&*src, p, interpolation, $blank, &mut out);
            DynamicImage::$variant(out)
        }};
    }

    let cropped = match img {
        DynamicImage::ImageLuma8(buf) => resample!(buf, ImageLuma8, Luma([0])),
        DynamicImage::ImageLumaA8(buf) => resample!(buf, ImageLumaA8, LumaA([0, 0])),
        DynamicImage::ImageRgb8(buf) => resample!(buf, ImageRgb8, Rgb([0, 0, 0])),
        DynamicImage::ImageRgba8(buf) => resample!(buf, ImageRgba8, Rgba([0, 0, 0, 0])),
        other => {
            debug!("resampling {:?} image as rgba8", other.color());
            let rgba = other.to_rgba8();
            resample!(&rgba, ImageRgba8, Rgba([0, 0, 0, 0]))
        }
    };
    Ok(cropped)
}

/// Decode a PNG buffer and crop `quad` out of it.
pub fn crop_from_memory(buf: &[u8], quad: &Quadrilateral) -> Result<DynamicImage, Error> {
    let img = decode_png(buf)?;
    crop(&img, quad)
}

/// Open an image file and crop `quad` out of it.
pub fn crop_from_file<P: AsRef<Path>>(
    path: P,
    quad: &Quadrilateral,
) -> Result<DynamicImage, Error> {
    let img = open_image(path)?;
    crop(&img, quad)
}
