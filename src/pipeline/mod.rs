pub mod assemble;
pub mod background;
pub mod foreground;
pub mod histogram;
pub mod sample;

use std::ops::RangeInclusive;

use image::DynamicImage;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::error::SamplingError;
use assemble::Palette;
use background::select_background;
use foreground::select_foreground;
use histogram::ColorHistogram;
use sample::{sample, PixelBuffer, SampleSize};

/// Columns sampled by [`BackgroundRegion::LeftEdge`]. Cropped artwork often
/// carries a black or white border in the first few columns.
pub const LEFT_EDGE_COLUMNS: RangeInclusive<u32> = 5..=10;

/// Which pixels feed the background choice. Foreground colors always come
/// from the whole sample.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BackgroundRegion {
    #[default]
    Whole,
    LeftEdge,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractOptions {
    pub sample_size: SampleSize,
    pub background_region: BackgroundRegion,
}

/// Derive a palette from an already-sampled pixel buffer.
pub fn extract_palette(pixels: &PixelBuffer) -> Palette {
    extract_palette_with(pixels, BackgroundRegion::Whole)
}

/// Like [`extract_palette`], choosing the background from `region`.
pub fn extract_palette_with(pixels: &PixelBuffer, region: BackgroundRegion) -> Palette {
    let histogram = ColorHistogram::from_pixels(pixels);
    debug!(
        width = pixels.width(),
        height = pixels.height(),
        colors = histogram.len(),
        "built histogram"
    );

    let background = match region {
        BackgroundRegion::Whole => select_background(&histogram, pixels.height()),
        BackgroundRegion::LeftEdge => {
            let edge = ColorHistogram::from_columns(pixels, LEFT_EDGE_COLUMNS);
            select_background(&edge, pixels.height())
        }
    };
    let foreground = select_foreground(&histogram, background);

    Palette::assemble(background, foreground)
}

/// Sample `image` and extract its palette on the current thread.
pub fn palette_for_image(
    image: &DynamicImage,
    options: &ExtractOptions,
) -> Result<Palette, SamplingError> {
    let pixels = sample(image, options.sample_size)?;
    Ok(extract_palette_with(&pixels, options.background_region))
}

/// Run [`palette_for_image`] on the blocking pool.
///
/// Dropping the future does not stop a pipeline that already started; its
/// result is discarded.
pub async fn palette_task(
    image: DynamicImage,
    options: ExtractOptions,
) -> Result<Palette, SamplingError> {
    tokio::task::spawn_blocking(move || palette_for_image(&image, &options))
        .await
        .map_err(|e| SamplingError::WorkerLost(e.to_string()))?
}

/// Extract in the background on the ambient tokio runtime. See
/// [`extract_palette_async_on`].
///
/// Panics when called outside a tokio runtime.
pub fn extract_palette_async<F>(
    image: DynamicImage,
    options: ExtractOptions,
    completion: F,
) -> JoinHandle<()>
where
    F: FnOnce(Result<Palette, SamplingError>) + Send + 'static,
{
    extract_palette_async_on(&Handle::current(), image, options, completion)
}

/// Extract on the blocking pool of `runtime` and hand the result to
/// `completion` on a task of that runtime, the completion context.
///
/// `completion` runs at most once: exactly once unless the runtime shuts
/// down before the task gets to call it, in which case it is dropped
/// uncalled.
pub fn extract_palette_async_on<F>(
    runtime: &Handle,
    image: DynamicImage,
    options: ExtractOptions,
    completion: F,
) -> JoinHandle<()>
where
    F: FnOnce(Result<Palette, SamplingError>) + Send + 'static,
{
    runtime.spawn(async move {
        let result = palette_task(image, options).await;
        completion(result);
    })
}
