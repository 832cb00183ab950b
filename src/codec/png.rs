use std::io::Cursor;

use anyhow::Context;

use crate::foundation::core::ImageRGBA;
use crate::foundation::error::{FlatlayError, FlatlayResult};

/// Decode encoded image bytes into straight-alpha RGBA8.
pub fn decode_rgba(bytes: &[u8]) -> FlatlayResult<ImageRGBA> {
    let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(ImageRGBA {
        width,
        height,
        data: rgba.into_raw(),
    })
}

/// Encode RGBA8 pixels as a lossless PNG (full color plus alpha, no quantization).
pub fn encode_png(img: &ImageRGBA) -> FlatlayResult<Vec<u8>> {
    let expected = img.canvas().rgba8_len()?;
    if img.data.len() != expected {
        return Err(FlatlayError::validation(format!(
            "rgba8 buffer is {} bytes, expected {expected} for {}x{}",
            img.data.len(),
            img.width,
            img.height
        )));
    }

    let raw = image::RgbaImage::from_raw(img.width, img.height, img.data.clone())
        .ok_or_else(|| FlatlayError::validation("internal error: rgba8 container rejected"))?;

    let mut out = Vec::new();
    image::DynamicImage::ImageRgba8(raw)
        .write_to(&mut Cursor::new(&mut out), image::ImageFormat::Png)
        .context("encode png to memory")?;
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/codec/png.rs"]
mod tests;
