use thiserror::Error;

/// The source image could not be turned into a pixel buffer.
///
/// Fatal for the extraction call it came from; nothing is retried.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SamplingError {
    #[error("image has no area ({width}x{height})")]
    EmptyImage { width: u32, height: u32 },
    #[error("sample size {width}x{height} has a zero dimension")]
    ZeroSampleSize { width: u32, height: u32 },
    #[error("sample size {width}x{height} exceeds the {max} pixel limit")]
    SampleTooLarge { width: u64, height: u64, max: u64 },
    #[error("palette worker did not finish: {0}")]
    WorkerLost(String),
}
