use crate::color::{Color, BLACK, WHITE};
use crate::pipeline::foreground::Foreground;

/// The four interface colors derived from a piece of artwork.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub background: Color,
    pub primary: Color,
    pub secondary: Color,
    pub detail: Color,
}

impl Palette {
    /// Fill unresolved foreground slots with the extreme opposite of the
    /// background: white on dark backgrounds, black otherwise.
    pub fn assemble(background: Color, foreground: Foreground) -> Self {
        let fallback = fallback_for(background);
        Self {
            background,
            primary: foreground.primary.unwrap_or(fallback),
            secondary: foreground.secondary.unwrap_or(fallback),
            detail: foreground.detail.unwrap_or(fallback),
        }
    }

    /// Every slot set to `color`, for callers that need a palette after a
    /// failed extraction.
    pub fn uniform(color: Color) -> Self {
        Self {
            background: color,
            primary: color,
            secondary: color,
            detail: color,
        }
    }

    /// Slots in display order with their names.
    pub fn slots(&self) -> [(&'static str, Color); 4] {
        [
            ("background", self.background),
            ("primary", self.primary),
            ("secondary", self.secondary),
            ("detail", self.detail),
        ]
    }
}

/// Foreground color used when no candidate fills a slot.
pub fn fallback_for(background: Color) -> Color {
    if background.is_dark() {
        WHITE
    } else {
        BLACK
    }
}
