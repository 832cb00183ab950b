//! Flatlay flattens an ordered stack of same-sized RGBA images into a single image.
//!
//! The pipeline is deliberately small:
//!
//! 1. **Decode**: encoded image bytes -> [`ImageRGBA`] (straight-alpha RGBA8) via [`decode_rgba`]
//! 2. **Combine**: validate the stack, then alpha-over blend each layer onto the base via [`combine`]
//! 3. **Encode** (optional): [`ImageRGBA`] -> lossless PNG bytes via [`encode_png`]
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: blending is pure and stable for a given input stack.
//! - **No IO in the core**: the compositor only ever sees decoded pixel buffers.
//! - **Straight RGBA8** end-to-end: stored channels are never pre-scaled by alpha.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod codec;
mod composite;
mod foundation;
mod pipeline;

pub use codec::png::{decode_rgba, encode_png};
pub use composite::blend::{Rgba8, over, over_in_place};
pub use composite::stack::{BlendThreading, combine, combine_with, validate_stack};
pub use foundation::core::{Canvas, ImageRGBA};
pub use foundation::error::{FlatlayError, FlatlayResult};
pub use pipeline::combine_encoded;
