use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, ImageError};

/// Encodes a `width` x `height` PNG filled with a single RGB colour.
///
/// The output is an 8-bit truecolour PNG: signature, `IHDR`, deflated
/// `IDAT` rows and `IEND`.
pub fn solid_png(width: u32, height: u32, rgb: [u8; 3]) -> Result<Vec<u8>, ImageError> {
    let pixels: Vec<u8> = rgb
        .iter()
        .copied()
        .cycle()
        .take(width as usize * height as usize * 3)
        .collect();

    let mut out = Vec::new();
    PngEncoder::new(&mut out).write_image(&pixels, width, height, ExtendedColorType::Rgb8)?;

    Ok(out)
}
