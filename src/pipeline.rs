use crate::codec::png::{decode_rgba, encode_png};
use crate::composite::stack::{BlendThreading, combine_with};
use crate::foundation::error::FlatlayResult;

/// Decode, combine, and re-encode a stack of encoded images in one call.
///
/// Every input buffer is decoded to RGBA8, the stack is flattened bottom to
/// top, and the result is encoded as a lossless PNG. Decode and encode
/// failures surface unchanged.
pub fn combine_encoded<B: AsRef<[u8]>>(
    buffers: &[B],
    threading: &BlendThreading,
) -> FlatlayResult<Vec<u8>> {
    let mut layers = Vec::with_capacity(buffers.len());
    for buf in buffers {
        layers.push(decode_rgba(buf.as_ref())?);
    }
    let combined = combine_with(layers, threading)?;
    encode_png(&combined)
}

#[cfg(test)]
#[path = "../tests/unit/pipeline.rs"]
mod tests;
