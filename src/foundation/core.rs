use crate::foundation::error::{FlatlayError, FlatlayResult};

/// Image dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Byte length of a tightly packed RGBA8 buffer with these dimensions.
    pub fn rgba8_len(self) -> FlatlayResult<usize> {
        (self.width as usize)
            .checked_mul(self.height as usize)
            .and_then(|v| v.checked_mul(4))
            .ok_or_else(|| FlatlayError::validation("canvas byte size overflows usize"))
    }
}

/// A decoded image as straight-alpha RGBA8 pixels.
///
/// `data` is tightly packed, row-major, four bytes per pixel in R,G,B,A order.
/// Stored color channels are **not** pre-scaled by alpha.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageRGBA {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// RGBA8 bytes; length is exactly `width * height * 4`.
    pub data: Vec<u8>,
}

impl ImageRGBA {
    /// Wrap raw RGBA8 bytes, checking the buffer length against the dimensions.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> FlatlayResult<Self> {
        let expected = Canvas { width, height }.rgba8_len()?;
        if data.len() != expected {
            return Err(FlatlayError::validation(format!(
                "rgba8 buffer is {} bytes, expected {expected} for {width}x{height}",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Dimensions of this image.
    pub fn canvas(&self) -> Canvas {
        Canvas {
            width: self.width,
            height: self.height,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
