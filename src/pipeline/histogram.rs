use std::collections::HashMap;
use std::ops::RangeInclusive;

use crate::color::Color;
use crate::pipeline::sample::PixelBuffer;

/// Pixels below this alpha are invisible to the histogram.
pub const MIN_VISIBLE_ALPHA: u8 = 127;

/// A color with the number of pixels that carried it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CountedColor {
    pub color: Color,
    pub count: usize,
}

/// Frequency map from exact 8-bit RGB triples to pixel counts.
///
/// Iteration follows first appearance in the scan, which makes tie order
/// between equal counts deterministic.
#[derive(Debug, Clone, Default)]
pub struct ColorHistogram {
    index: HashMap<[u8; 3], usize>,
    entries: Vec<([u8; 3], usize)>,
}

impl ColorHistogram {
    pub fn new() -> Self {
        Self::default()
    }

    /// Histogram of every visible pixel.
    pub fn from_pixels(pixels: &PixelBuffer) -> Self {
        let mut histogram = Self::new();
        for pixel in pixels.pixels() {
            let [r, g, b, a] = pixel.0;
            if a >= MIN_VISIBLE_ALPHA {
                histogram.add([r, g, b]);
            }
        }
        histogram
    }

    /// Histogram of the visible pixels in `columns`, still scanned row by row.
    /// Columns past the buffer edge are ignored.
    pub fn from_columns(pixels: &PixelBuffer, columns: RangeInclusive<u32>) -> Self {
        let mut histogram = Self::new();
        for (x, _, pixel) in pixels.enumerate_pixels() {
            let [r, g, b, a] = pixel.0;
            if columns.contains(&x) && a >= MIN_VISIBLE_ALPHA {
                histogram.add([r, g, b]);
            }
        }
        histogram
    }

    pub fn add(&mut self, rgb: [u8; 3]) {
        match self.index.get(&rgb) {
            Some(&slot) => self.entries[slot].1 += 1,
            None => {
                self.index.insert(rgb, self.entries.len());
                self.entries.push((rgb, 1));
            }
        }
    }

    /// Count for `color`, matched on its quantized triple.
    pub fn count(&self, color: Color) -> usize {
        self.index
            .get(&color.to_rgb8())
            .map_or(0, |&slot| self.entries[slot].1)
    }

    /// Number of distinct colors.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = CountedColor> + '_ {
        self.entries.iter().map(|&(rgb, count)| CountedColor {
            color: Color::from_rgb8(rgb),
            count,
        })
    }
}

/// Stable sort, most frequent first.
pub fn sort_by_count(colors: &mut [CountedColor]) {
    colors.sort_by(|a, b| b.count.cmp(&a.count));
}
