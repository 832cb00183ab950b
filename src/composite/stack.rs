use anyhow::Context;
use rayon::prelude::*;

use crate::composite::blend::{blend_rgba8, over_in_place};
use crate::foundation::core::{Canvas, ImageRGBA};
use crate::foundation::error::{FlatlayError, FlatlayResult};

/// Threading configuration for [`combine_with`].
#[derive(Clone, Debug)]
pub struct BlendThreading {
    /// Blend each layer's pixels across a rayon pool instead of a single thread.
    pub parallel: bool,
    /// Pixels per parallel work item.
    pub chunk_pixels: usize,
    /// Worker thread count. `None` uses the rayon default.
    pub threads: Option<usize>,
}

impl Default for BlendThreading {
    fn default() -> Self {
        Self {
            parallel: false,
            chunk_pixels: 4096,
            threads: None,
        }
    }
}

/// Check that every layer in the stack is compatible with the base layer.
///
/// Verifies that the stack is non-empty, that each layer's dimensions equal
/// layer 0's, and that each layer's buffer length matches its dimensions.
/// Pure pre-pass: no pixel is touched before the whole stack validates.
pub fn validate_stack(layers: &[ImageRGBA]) -> FlatlayResult<Canvas> {
    let base = layers
        .first()
        .ok_or_else(|| FlatlayError::validation("cannot combine an empty layer stack"))?;
    let canvas = base.canvas();
    let expected_len = canvas.rgba8_len()?;

    for (index, layer) in layers.iter().enumerate() {
        if layer.canvas() != canvas {
            return Err(FlatlayError::dimension_mismatch(
                index,
                canvas,
                layer.canvas(),
            ));
        }
        if layer.data.len() != expected_len {
            return Err(FlatlayError::validation(format!(
                "layer {index} buffer is {} bytes, expected {expected_len} for {}x{}",
                layer.data.len(),
                canvas.width,
                canvas.height
            )));
        }
    }
    Ok(canvas)
}

/// Flatten an ordered layer stack into one image by sequential alpha-over blending.
///
/// Layer 0 is the bottom; later layers composite on top in index order. The
/// base layer's buffer is reused as the accumulator, so the stack is consumed.
pub fn combine(layers: Vec<ImageRGBA>) -> FlatlayResult<ImageRGBA> {
    combine_with(layers, &BlendThreading::default())
}

/// [`combine`] with an explicit [`BlendThreading`] configuration.
///
/// Layer `k`'s blend fully completes before layer `k + 1` begins; only the
/// per-pixel work within one layer fans out when `parallel` is set.
#[tracing::instrument(skip(layers), fields(layer_count = layers.len()))]
pub fn combine_with(
    layers: Vec<ImageRGBA>,
    threading: &BlendThreading,
) -> FlatlayResult<ImageRGBA> {
    let canvas = validate_stack(&layers)?;

    let pool = if threading.parallel {
        Some(build_thread_pool(threading.threads)?)
    } else {
        None
    };

    let mut rest = layers.into_iter();
    let mut combined = rest
        .next()
        .ok_or_else(|| FlatlayError::validation("cannot combine an empty layer stack"))?;

    for layer in rest {
        match &pool {
            Some(pool) => blend_parallel(
                pool,
                &mut combined.data,
                &layer.data,
                threading.chunk_pixels,
            ),
            None => over_in_place(&mut combined.data, &layer.data)?,
        }
    }

    tracing::debug!(
        width = canvas.width,
        height = canvas.height,
        "flattened layer stack"
    );
    Ok(combined)
}

fn blend_parallel(pool: &rayon::ThreadPool, dst: &mut [u8], src: &[u8], chunk_pixels: usize) {
    let chunk_bytes = chunk_pixels.max(1) * 4;
    pool.install(|| {
        dst.par_chunks_mut(chunk_bytes)
            .zip(src.par_chunks(chunk_bytes))
            .for_each(|(d, s)| blend_rgba8(d, s));
    });
}

fn build_thread_pool(threads: Option<usize>) -> FlatlayResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(FlatlayError::validation(
            "blend threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    Ok(builder.build().context("build rayon thread pool")?)
}

#[cfg(test)]
#[path = "../../tests/unit/composite/stack.rs"]
mod tests;
