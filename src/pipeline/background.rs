use tracing::debug;

use crate::color::{Color, BLACK};
use crate::pipeline::histogram::{sort_by_count, ColorHistogram, CountedColor};

/// Fraction of the sample height a color must exceed to count as more than
/// noise.
const NOISE_FRACTION: f64 = 0.01;
/// A runner-up replaces a black or white proposal only above this share of
/// the proposal's count.
const RUNNER_UP_RATIO: f64 = 0.3;

/// Pick the background color from `histogram`.
///
/// Colors at or below 1% of `sample_height` are dropped. The most frequent
/// remaining color wins, except that a near black or white winner yields to
/// the first frequent-enough color that is neither.
pub fn select_background(histogram: &ColorHistogram, sample_height: u32) -> Color {
    let threshold = (sample_height as f64 * NOISE_FRACTION).floor() as usize;

    let mut candidates: Vec<CountedColor> = histogram
        .iter()
        .filter(|c| c.count > threshold)
        .collect();
    sort_by_count(&mut candidates);

    let mut proposed = candidates.first().copied().unwrap_or(CountedColor {
        color: BLACK,
        count: 1,
    });

    if proposed.color.is_black_or_white() {
        for next in candidates.iter().skip(1) {
            let ratio = next.count as f64 / proposed.count as f64;
            if ratio <= RUNNER_UP_RATIO {
                break;
            }
            if !next.color.is_black_or_white() {
                proposed = *next;
                break;
            }
        }
    }

    debug!(
        candidates = candidates.len(),
        threshold,
        background = %proposed.color,
        count = proposed.count,
        "selected background"
    );
    proposed.color
}
