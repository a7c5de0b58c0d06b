use tracing::debug;

use crate::color::Color;
use crate::pipeline::histogram::{sort_by_count, ColorHistogram, CountedColor};

/// Candidates are pushed to at least this saturation before classification.
pub const MIN_FOREGROUND_SATURATION: f32 = 0.15;

/// Foreground picks against a background. A `None` slot found no candidate.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Foreground {
    pub primary: Option<Color>,
    pub secondary: Option<Color>,
    pub detail: Option<Color>,
}

/// Choose up to three foreground colors that contrast with `background`.
///
/// Every histogram color is saturated to at least
/// [`MIN_FOREGROUND_SATURATION`] and kept when its darkness is the opposite
/// of the background's. Candidates are walked most frequent first, filling
/// primary, secondary and detail in turn; each later slot must also be
/// distinct from the slots already filled.
pub fn select_foreground(histogram: &ColorHistogram, background: Color) -> Foreground {
    let find_dark = !background.is_dark();

    let mut candidates: Vec<CountedColor> = histogram
        .iter()
        .map(|raw| CountedColor {
            color: raw.color.with_minimum_saturation(MIN_FOREGROUND_SATURATION),
            count: raw.count,
        })
        .filter(|adjusted| adjusted.color.is_dark() == find_dark)
        .collect();
    sort_by_count(&mut candidates);

    let mut picks = Foreground::default();
    for candidate in &candidates {
        let color = candidate.color;
        if !Color::is_contrasting(&background, &color) {
            continue;
        }
        match (picks.primary, picks.secondary) {
            (None, _) => picks.primary = Some(color),
            (Some(primary), None) => {
                if Color::is_distinct(&primary, &color) {
                    picks.secondary = Some(color);
                }
            }
            (Some(primary), Some(secondary)) => {
                if Color::is_distinct(&secondary, &color) && Color::is_distinct(&primary, &color) {
                    picks.detail = Some(color);
                    break;
                }
            }
        }
    }

    debug!(
        candidates = candidates.len(),
        find_dark,
        primary = ?picks.primary.map(Color::to_hex),
        secondary = ?picks.secondary.map(Color::to_hex),
        detail = ?picks.detail.map(Color::to_hex),
        "selected foreground"
    );
    picks
}
