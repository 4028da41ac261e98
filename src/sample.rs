extern crate alloc;
use alloc::vec::Vec;

use rgb::{RGB, RGBA};

/// Collect RGB samples from an interleaved RGBA byte buffer.
///
/// Reads four bytes per pixel and drops the alpha channel. A trailing
/// partial pixel is ignored.
pub fn from_rgba_bytes(bytes: &[u8]) -> Vec<RGB<u8>> {
    bytes
        .chunks_exact(4)
        .map(|px| RGB {
            r: px[0],
            g: px[1],
            b: px[2],
        })
        .collect()
}

/// Collect RGB samples from RGBA pixels, dropping alpha.
pub fn from_rgba_pixels(pixels: &[RGBA<u8>]) -> Vec<RGB<u8>> {
    pixels
        .iter()
        .map(|px| RGB {
            r: px.r,
            g: px.g,
            b: px.b,
        })
        .collect()
}

/// Collect every `step`-th pixel from an interleaved RGBA byte buffer.
///
/// Bounds the sample population on large images. A `step` of zero is
/// treated as one, sampling every pixel.
pub fn from_rgba_bytes_strided(bytes: &[u8], step: usize) -> Vec<RGB<u8>> {
    let step = step.max(1);
    bytes
        .chunks_exact(4)
        .step_by(step)
        .map(|px| RGB {
            r: px[0],
            g: px[1],
            b: px[2],
        })
        .collect()
}
