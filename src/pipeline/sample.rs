use std::path::Path;

use anyhow::{Context, Result};
use image::imageops::FilterType;
use image::{DynamicImage, RgbaImage};
use tracing::debug;

use crate::error::SamplingError;

/// Downscaled RGBA8 pixels, row-major, top to bottom.
pub type PixelBuffer = RgbaImage;

/// Width the sample is scaled to when no explicit size is requested.
pub const DEFAULT_SAMPLE_WIDTH: u32 = 250;

/// Largest sample area accepted, 4096 x 4096.
pub const MAX_SAMPLE_PIXELS: u64 = 4096 * 4096;

/// Requested sample dimensions. [`SampleSize::ZERO`] derives the size from
/// the source aspect ratio.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SampleSize {
    pub width: u32,
    pub height: u32,
}

impl SampleSize {
    pub const ZERO: SampleSize = SampleSize {
        width: 0,
        height: 0,
    };

    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn is_zero(self) -> bool {
        self == Self::ZERO
    }

    /// Resolve against a source of `width` x `height`.
    ///
    /// A zero size becomes 250 px wide with the source aspect ratio. Sizes
    /// over [`MAX_SAMPLE_PIXELS`] are rejected rather than allocated.
    pub fn resolve(self, width: u32, height: u32) -> Result<SampleSize, SamplingError> {
        if width == 0 || height == 0 {
            return Err(SamplingError::EmptyImage { width, height });
        }
        let (target_width, target_height) = if self.is_zero() {
            let ratio = width as f64 / height as f64;
            let derived = (DEFAULT_SAMPLE_WIDTH as f64 / ratio).round().max(1.0);
            (DEFAULT_SAMPLE_WIDTH as u64, derived as u64)
        } else if self.width == 0 || self.height == 0 {
            return Err(SamplingError::ZeroSampleSize {
                width: self.width,
                height: self.height,
            });
        } else {
            (self.width as u64, self.height as u64)
        };

        if target_width.saturating_mul(target_height) > MAX_SAMPLE_PIXELS {
            return Err(SamplingError::SampleTooLarge {
                width: target_width,
                height: target_height,
                max: MAX_SAMPLE_PIXELS,
            });
        }
        Ok(SampleSize::new(target_width as u32, target_height as u32))
    }
}

/// Load an image from disk for sampling.
pub fn load_image(path: &Path) -> Result<DynamicImage> {
    image::open(path).with_context(|| {
        if !path.exists() {
            format!("file not found: {}", path.display())
        } else {
            format!(
                "unsupported or corrupt image: {}. Supported formats: PNG, JPEG, WebP, BMP, TIFF, GIF",
                path.display()
            )
        }
    })
}

/// Resample `image` into a pixel buffer of the requested size.
///
/// Sources already at the target size are copied without filtering so
/// their exact colors survive.
pub fn sample(image: &DynamicImage, size: SampleSize) -> Result<PixelBuffer, SamplingError> {
    let target = size.resolve(image.width(), image.height())?;
    debug!(
        source_width = image.width(),
        source_height = image.height(),
        width = target.width,
        height = target.height,
        "sampling image"
    );

    if image.width() == target.width && image.height() == target.height {
        return Ok(image.to_rgba8());
    }
    Ok(image
        .resize_exact(target.width, target.height, FilterType::Triangle)
        .to_rgba8())
}
