use anyhow::{bail, Result};
use palette::{FromColor, Hsv, Srgb};

/// Opaque color used throughout the pipeline.
///
/// Channels are `f32` in [0, 1]. Two colors that quantize to the same 8-bit
/// triple are the same histogram bucket (see [`Color::to_rgb8`]).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

pub const BLACK: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
};

pub const WHITE: Color = Color {
    r: 1.0,
    g: 1.0,
    b: 1.0,
};

const BLACK_OR_WHITE_HIGH: f32 = 0.91;
const BLACK_OR_WHITE_LOW: f32 = 0.09;
const DISTINCT_THRESHOLD: f32 = 0.25;
const GREYSCALE_THRESHOLD: f32 = 0.03;
const CONTRAST_THRESHOLD: f32 = 1.6;

impl Color {
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Exact conversion from 8-bit channels.
    pub fn from_rgb8(rgb: [u8; 3]) -> Self {
        Self {
            r: rgb[0] as f32 / 255.0,
            g: rgb[1] as f32 / 255.0,
            b: rgb[2] as f32 / 255.0,
        }
    }

    /// Quantize to 8-bit channels, clamping out-of-range values.
    pub fn to_rgb8(self) -> [u8; 3] {
        fn quantize(c: f32) -> u8 {
            (c.clamp(0.0, 1.0) * 255.0).round() as u8
        }
        [quantize(self.r), quantize(self.g), quantize(self.b)]
    }

    /// Parse a hex color string like `#ff8800` or `#FF8800`.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 {
            bail!(
                "invalid hex color: expected 6 hex digits, got {}",
                hex.len()
            );
        }
        let r = u8::from_str_radix(&hex[0..2], 16)?;
        let g = u8::from_str_radix(&hex[2..4], 16)?;
        let b = u8::from_str_radix(&hex[4..6], 16)?;
        Ok(Self::from_rgb8([r, g, b]))
    }

    /// Serialize to lowercase hex `#rrggbb`.
    pub fn to_hex(self) -> String {
        let [r, g, b] = self.to_rgb8();
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    fn to_srgb(self) -> Srgb<f32> {
        Srgb::new(self.r, self.g, self.b)
    }

    fn from_srgb(srgb: Srgb<f32>) -> Self {
        Self {
            r: srgb.red,
            g: srgb.green,
            b: srgb.blue,
        }
    }

    /// Relative luminance with BT.709 weights, applied to the channels as
    /// sampled (no linearization).
    pub fn luminance(self) -> f32 {
        0.2126 * self.r + 0.7152 * self.g + 0.0722 * self.b
    }

    pub fn is_dark(self) -> bool {
        self.luminance() < 0.5
    }

    /// Near white or near black on every channel.
    pub fn is_black_or_white(self) -> bool {
        let high = BLACK_OR_WHITE_HIGH;
        let low = BLACK_OR_WHITE_LOW;
        (self.r > high && self.g > high && self.b > high)
            || (self.r < low && self.g < low && self.b < low)
    }

    /// All three channels within a few percent of each other.
    fn is_near_greyscale(self) -> bool {
        (self.r - self.g).abs() < GREYSCALE_THRESHOLD
            && (self.r - self.b).abs() < GREYSCALE_THRESHOLD
            && (self.g - self.b).abs() < GREYSCALE_THRESHOLD
    }

    /// Squared Euclidean distance in RGB.
    pub fn distance(a: &Color, b: &Color) -> f32 {
        (a.r - b.r).powi(2) + (a.g - b.g).powi(2) + (a.b - b.b).powi(2)
    }

    /// Two colors are distinct when some channel differs by more than 0.25,
    /// except that two near-grey colors never count as distinct.
    pub fn is_distinct(a: &Color, b: &Color) -> bool {
        let differs = (a.r - b.r).abs() > DISTINCT_THRESHOLD
            || (a.g - b.g).abs() > DISTINCT_THRESHOLD
            || (a.b - b.b).abs() > DISTINCT_THRESHOLD;
        differs && !(a.is_near_greyscale() && b.is_near_greyscale())
    }

    /// Contrast ratio `(L_hi + 0.05) / (L_lo + 0.05)`.
    ///
    /// Returns a value in [1, 21]. Higher means more contrast.
    pub fn contrast_ratio(c1: &Color, c2: &Color) -> f32 {
        let l1 = c1.luminance();
        let l2 = c2.luminance();
        let (lighter, darker) = if l1 > l2 { (l1, l2) } else { (l2, l1) };
        (lighter + 0.05) / (darker + 0.05)
    }

    pub fn is_contrasting(background: &Color, foreground: &Color) -> bool {
        Color::contrast_ratio(background, foreground) > CONTRAST_THRESHOLD
    }

    /// Raise HSB saturation to `min_saturation` if it is below it.
    /// Hue and brightness are kept; colors already saturated enough are
    /// returned unchanged.
    pub fn with_minimum_saturation(self, min_saturation: f32) -> Color {
        let hsv: Hsv = Hsv::from_color(self.to_srgb());
        if hsv.saturation >= min_saturation {
            return self;
        }
        let adjusted: Hsv = Hsv::new(hsv.hue, min_saturation, hsv.value);
        Color::from_srgb(Srgb::from_color(adjusted))
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgb(r: u8, g: u8, b: u8) -> Color {
        Color::from_rgb8([r, g, b])
    }

    #[test]
    fn hex_round_trip() {
        let original = Color::from_hex("#ff8800").unwrap();
        assert_eq!(original.to_rgb8(), [255, 136, 0]);
        assert_eq!(original.to_hex(), "#ff8800");
    }

    #[test]
    fn hex_uppercase_input() {
        let color = Color::from_hex("#FF8800").unwrap();
        assert_eq!(color.to_hex(), "#ff8800");
    }

    #[test]
    fn hex_without_hash() {
        let color = Color::from_hex("aabbcc").unwrap();
        assert_eq!(color.to_hex(), "#aabbcc");
    }

    #[test]
    fn hex_invalid_length() {
        assert!(Color::from_hex("#fff").is_err());
    }

    #[test]
    fn hex_invalid_chars() {
        assert!(Color::from_hex("#gggggg").is_err());
    }

    #[test]
    fn rgb8_quantization_collapses_float_drift() {
        let a = Color::new(0.5, 0.25, 0.75);
        let b = Color::new(0.5 + 1e-5, 0.25 - 1e-5, 0.75);
        assert_eq!(a.to_rgb8(), b.to_rgb8());
    }

    #[test]
    fn luminance_uses_bt709_weights() {
        assert!((rgb(255, 0, 0).luminance() - 0.2126).abs() < 1e-6);
        assert!((rgb(0, 255, 0).luminance() - 0.7152).abs() < 1e-6);
        assert!((rgb(0, 0, 255).luminance() - 0.0722).abs() < 1e-6);
        assert!((WHITE.luminance() - 1.0).abs() < 1e-6);
        assert!(BLACK.luminance() < 1e-6);
    }

    #[test]
    fn dark_classification() {
        assert!(BLACK.is_dark());
        assert!(rgb(255, 0, 0).is_dark());
        assert!(!WHITE.is_dark());
        assert!(!rgb(0, 255, 0).is_dark());
    }

    #[test]
    fn black_or_white_bounds() {
        assert!(BLACK.is_black_or_white());
        assert!(WHITE.is_black_or_white());
        assert!(rgb(240, 240, 240).is_black_or_white());
        assert!(rgb(15, 15, 15).is_black_or_white());
        // one channel outside the band breaks it
        assert!(!rgb(240, 240, 200).is_black_or_white());
        assert!(!rgb(128, 128, 128).is_black_or_white());
    }

    #[test]
    fn distance_is_squared() {
        let d = Color::distance(&BLACK, &WHITE);
        assert!((d - 3.0).abs() < 1e-6, "expected 3.0, got {d}");
        assert_eq!(Color::distance(&WHITE, &WHITE), 0.0);
    }

    #[test]
    fn distinct_when_a_channel_moves_past_threshold() {
        let red = rgb(200, 50, 50);
        let blue = rgb(50, 50, 200);
        assert!(Color::is_distinct(&red, &blue));
        assert!(!Color::is_distinct(&red, &rgb(210, 60, 55)));
    }

    #[test]
    fn greys_are_never_distinct() {
        let dark_grey = rgb(40, 40, 40);
        let light_grey = rgb(200, 200, 200);
        assert!(!Color::is_distinct(&dark_grey, &light_grey));
        assert!(!Color::is_distinct(&BLACK, &WHITE));
        // only one side grey: lightness difference counts
        assert!(Color::is_distinct(&dark_grey, &rgb(200, 120, 40)));
    }

    #[test]
    fn green_blue_gap_breaks_greyscale() {
        // r sits within 0.03 of both g and b, but g and b are 10/255 apart
        let dark = rgb(45, 40, 50);
        let light = rgb(205, 200, 210);
        assert!(Color::is_distinct(&dark, &light));
    }

    #[test]
    fn contrast_ratio_black_white() {
        let ratio = Color::contrast_ratio(&BLACK, &WHITE);
        assert!(
            (ratio - 21.0).abs() < 0.01,
            "black/white contrast should be 21:1, got {ratio}"
        );
    }

    #[test]
    fn contrast_ratio_is_symmetric() {
        let a = rgb(200, 50, 50);
        let b = rgb(50, 200, 50);
        let ratio_ab = Color::contrast_ratio(&a, &b);
        let ratio_ba = Color::contrast_ratio(&b, &a);
        assert!((ratio_ab - ratio_ba).abs() < 0.001);
    }

    #[test]
    fn contrasting_threshold_is_strict() {
        let grey = rgb(128, 128, 128);
        assert!(!Color::is_contrasting(&grey, &grey));
        assert!(Color::is_contrasting(&BLACK, &WHITE));
        let near_black = Color::new(0.02, 0.02, 0.02);
        assert!(!Color::is_contrasting(&BLACK, &near_black));
    }

    #[test]
    fn minimum_saturation_raises_grey() {
        let adjusted = WHITE.with_minimum_saturation(0.15);
        assert!((adjusted.r - 1.0).abs() < 1e-4);
        assert!((adjusted.g - 0.85).abs() < 1e-4);
        assert!((adjusted.b - 0.85).abs() < 1e-4);
    }

    #[test]
    fn minimum_saturation_keeps_saturated_colors() {
        let red = rgb(255, 0, 0);
        assert_eq!(red.with_minimum_saturation(0.15), red);
        let teal = rgb(0, 128, 128);
        assert_eq!(teal.with_minimum_saturation(0.15), teal);
    }

    #[test]
    fn minimum_saturation_keeps_black_black() {
        let adjusted = BLACK.with_minimum_saturation(0.15);
        assert_eq!(adjusted.to_rgb8(), [0, 0, 0]);
    }

    #[test]
    fn display_matches_to_hex() {
        let color = rgb(171, 205, 239);
        assert_eq!(format!("{color}"), color.to_hex());
    }
}
