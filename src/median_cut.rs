extern crate alloc;
use alloc::vec::Vec;

use rgb::RGB;

use crate::color::is_black_or_white;
use crate::error::ExtractError;

/// A box of color samples for median cut subdivision.
#[derive(Debug, Clone)]
pub struct ColorBox {
    samples: Vec<RGB<u8>>,
}

impl ColorBox {
    pub fn new(samples: Vec<RGB<u8>>) -> Self {
        Self { samples }
    }

    /// Number of samples in this box. Fixed at construction; splitting
    /// produces two new boxes instead of mutating this one.
    pub fn count(&self) -> usize {
        self.samples.len()
    }

    /// The samples held by this box, in their current order.
    pub fn samples(&self) -> &[RGB<u8>] {
        &self.samples
    }

    /// Compute the range (max - min) along each color channel.
    fn ranges(&self) -> (u8, u8, u8) {
        let Some(first) = self.samples.first() else {
            return (0, 0, 0);
        };

        let mut r_min = first.r;
        let mut r_max = first.r;
        let mut g_min = first.g;
        let mut g_max = first.g;
        let mut b_min = first.b;
        let mut b_max = first.b;

        for c in &self.samples {
            r_min = r_min.min(c.r);
            r_max = r_max.max(c.r);
            g_min = g_min.min(c.g);
            g_max = g_max.max(c.g);
            b_min = b_min.min(c.b);
            b_max = b_max.max(c.b);
        }

        (r_max - r_min, g_max - g_min, b_max - b_min)
    }

    /// Split this box along the channel with the largest range at the
    /// median sample.
    ///
    /// Pure black and pure white samples are dropped before the split and
    /// appear in neither child. A box with fewer than two remaining samples
    /// still splits; one child is simply empty.
    pub fn split(mut self) -> (ColorBox, ColorBox) {
        self.samples.retain(|c| !is_black_or_white(*c));

        let (rr, rg, rb) = self.ranges();

        // Choose split channel; ties resolve red, then green, then blue
        let axis = if rr >= rg && rr >= rb {
            0 // red
        } else if rg >= rb {
            1 // green
        } else {
            2 // blue
        };

        // Stable sort: samples with equal channel values keep their order
        self.samples.sort_by_key(|c| match axis {
            0 => c.r,
            1 => c.g,
            _ => c.b,
        });

        let mid = self.samples.len() / 2;
        let right = self.samples.split_off(mid);
        (ColorBox::new(self.samples), ColorBox::new(right))
    }

    /// Mean color of all samples in the box, truncated per channel.
    ///
    /// Every sample counts here, including pure black and white; the
    /// filter only applies while splitting. An empty box cannot be
    /// averaged and reports [`ExtractError::EmptyBoxAverage`].
    pub fn average_color(&self) -> Result<RGB<u8>, ExtractError> {
        if self.samples.is_empty() {
            return Err(ExtractError::EmptyBoxAverage);
        }

        let mut r_sum = 0u64;
        let mut g_sum = 0u64;
        let mut b_sum = 0u64;

        for c in &self.samples {
            r_sum += c.r as u64;
            g_sum += c.g as u64;
            b_sum += c.b as u64;
        }

        let n = self.samples.len() as u64;
        Ok(RGB {
            r: (r_sum / n) as u8,
            g: (g_sum / n) as u8,
            b: (b_sum / n) as u8,
        })
    }
}

/// Perform median cut over a flat sample population.
///
/// Starts with a single box holding every sample and repeatedly splits the
/// most populous box until `target` boxes exist. Empty input produces no
/// boxes; a `target` of zero leaves the initial box unsplit. Each pass
/// removes one box and appends its two halves, so a non-empty population
/// always reaches exactly `target` boxes (some possibly empty).
pub fn median_cut(samples: &[RGB<u8>], target: usize) -> Vec<ColorBox> {
    if samples.is_empty() {
        return Vec::new();
    }

    let mut boxes = Vec::with_capacity(target.max(1));
    boxes.push(ColorBox::new(samples.to_vec()));

    while boxes.len() < target {
        let Some(idx) = most_populous(&boxes) else {
            break;
        };

        // Remaining boxes keep their order; it decides ties next pass
        let to_split = boxes.remove(idx);
        let (left, right) = to_split.split();
        boxes.push(left);
        boxes.push(right);
    }

    boxes
}

/// Index of the box with the largest count; ties go to the earliest box.
fn most_populous(boxes: &[ColorBox]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (i, b) in boxes.iter().enumerate() {
        let better = match best {
            Some(j) => b.count() > boxes[j].count(),
            None => true,
        };
        if better {
            best = Some(i);
        }
    }
    best
}

/// Reduce a sample population to up to `count` dominant colors.
///
/// Runs [`median_cut`] and averages each resulting box. Fewer colors than
/// requested come back when the population cannot fill them (an empty
/// population yields an empty list); that shortfall is left to the caller
/// to judge.
pub fn dominant_colors(
    samples: &[RGB<u8>],
    count: usize,
) -> Result<Vec<RGB<u8>>, ExtractError> {
    let boxes = median_cut(samples, count);

    let mut colors = Vec::with_capacity(boxes.len());
    for b in &boxes {
        colors.push(b.average_color()?);
    }

    Ok(colors)
}
