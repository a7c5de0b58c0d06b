pub mod cli;
pub mod color;
pub mod error;
pub mod pipeline;
pub mod preview;
pub mod theme;
pub mod tui;

pub use color::Color;
pub use error::SamplingError;
pub use pipeline::assemble::Palette;
pub use pipeline::{
    extract_palette, extract_palette_async, extract_palette_async_on, palette_for_image,
    palette_task,
};
