extern crate alloc;
use alloc::string::String;

use core::ops::Index;

use rgb::RGB;

use crate::color::{blend, to_hex};
use crate::error::ExtractError;

/// The 3x3 blended palette derived from four dominant colors.
///
/// Cells are stored row-major: the corners hold the dominant colors in
/// extraction order (0 top-left, 2 top-right, 6 bottom-left, 8
/// bottom-right), each edge cell blends its two adjacent corners, and the
/// center blends the top and bottom edges. A fresh grid shows the
/// placeholder gray in every cell until the first successful refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteGrid {
    cells: [RGB<u8>; 9],
}

impl Default for PaletteGrid {
    fn default() -> Self {
        Self {
            cells: [Self::PLACEHOLDER; 9],
        }
    }
}

impl PaletteGrid {
    /// Number of cells in the grid.
    pub const CELLS: usize = 9;

    /// Dominant colors required to populate the corners.
    pub const CORNERS: usize = 4;

    /// Mid gray shown before any palette has been extracted.
    pub const PLACEHOLDER: RGB<u8> = RGB {
        r: 128,
        g: 128,
        b: 128,
    };

    pub fn new() -> Self {
        Self::default()
    }

    /// Build a grid from extracted dominant colors.
    ///
    /// The first four colors become the corners; extras are ignored. Fewer
    /// than four reports [`ExtractError::InsufficientDominantColors`].
    pub fn from_dominant(dominant: &[RGB<u8>]) -> Result<Self, ExtractError> {
        if dominant.len() < Self::CORNERS {
            return Err(ExtractError::InsufficientDominantColors {
                needed: Self::CORNERS,
                found: dominant.len(),
            });
        }

        let (d0, d1, d2, d3) = (dominant[0], dominant[1], dominant[2], dominant[3]);
        let top = blend(d0, d1);
        let bottom = blend(d2, d3);

        Ok(Self {
            cells: [
                d0,
                top,
                d1,
                blend(d0, d2),
                blend(top, bottom),
                blend(d1, d3),
                d2,
                bottom,
                d3,
            ],
        })
    }

    /// Replace the grid with one built from `dominant`.
    ///
    /// All nine cells are rewritten together on success. On error the
    /// previous cells stay exactly as they were.
    pub fn refresh(&mut self, dominant: &[RGB<u8>]) -> Result<(), ExtractError> {
        *self = Self::from_dominant(dominant)?;
        Ok(())
    }

    /// All nine cells in row-major order.
    pub fn cells(&self) -> &[RGB<u8>; 9] {
        &self.cells
    }

    /// The four corner cells in dominant-color order.
    pub fn corners(&self) -> [RGB<u8>; 4] {
        [self.cells[0], self.cells[2], self.cells[6], self.cells[8]]
    }

    /// The center cell.
    pub fn center(&self) -> RGB<u8> {
        self.cells[4]
    }

    /// Iterate the cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = RGB<u8>> + '_ {
        self.cells.iter().copied()
    }

    /// Every cell formatted as an uppercase `#RRGGBB` string.
    pub fn hex_cells(&self) -> [String; 9] {
        self.cells.map(to_hex)
    }
}

impl Index<usize> for PaletteGrid {
    type Output = RGB<u8>;

    fn index(&self, i: usize) -> &RGB<u8> {
        &self.cells[i]
    }
}

impl IntoIterator for PaletteGrid {
    type Item = RGB<u8>;
    type IntoIter = core::array::IntoIter<RGB<u8>, 9>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.into_iter()
    }
}
