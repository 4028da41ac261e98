#![forbid(unsafe_code)]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod color;
pub mod error;
pub mod grid;
pub mod median_cut;
pub mod sample;

pub use error::ExtractError;
pub use grid::PaletteGrid;

/// Configuration for palette extraction.
#[derive(Debug, Clone)]
pub struct ExtractConfig {
    /// Number of dominant colors to extract. The grid needs four of them
    /// for its corners; extras are ignored.
    pub color_count: usize,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            color_count: PaletteGrid::CORNERS,
        }
    }
}

impl ExtractConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn color_count(mut self, n: usize) -> Self {
        self.color_count = n;
        self
    }
}

/// Extract a blended 3x3 palette from a flat sample population.
///
/// Reduces the samples to `config.color_count` dominant colors by median
/// cut, then builds the grid from the first four. Populations that cannot
/// produce four colors report [`ExtractError::InsufficientDominantColors`];
/// callers holding an earlier grid keep it via [`PaletteGrid::refresh`]
/// instead.
pub fn extract_palette(
    samples: &[rgb::RGB<u8>],
    config: &ExtractConfig,
) -> Result<PaletteGrid, ExtractError> {
    let dominant = median_cut::dominant_colors(samples, config.color_count)?;
    PaletteGrid::from_dominant(&dominant)
}
