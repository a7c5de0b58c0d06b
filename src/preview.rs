use std::io::Write;

use anyhow::Result;
use crossterm::style::{Color as TermColor, Stylize};

use crate::color::Color;
use crate::pipeline::assemble::Palette;

fn term_color(c: Color) -> TermColor {
    let [r, g, b] = c.to_rgb8();
    TermColor::Rgb { r, g, b }
}

/// Print one swatch per slot: the slot color as a block, then a sample of
/// the slot drawn on the background, then the hex value and contrast ratio.
pub fn print_preview(palette: &Palette, out: &mut impl Write) -> Result<()> {
    let bg = term_color(palette.background);
    for (name, color) in palette.slots() {
        let ratio = Color::contrast_ratio(&color, &palette.background);
        writeln!(
            out,
            "{} {} {name:<10} {}  {ratio:>5.2}:1",
            "      ".on(term_color(color)),
            " Aa ".with(term_color(color)).on(bg),
            color.to_hex(),
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{BLACK, WHITE};

    #[test]
    fn preview_has_a_line_per_slot() {
        let palette = Palette {
            background: BLACK,
            primary: WHITE,
            secondary: Color::from_rgb8([200, 40, 40]),
            detail: Color::from_rgb8([40, 200, 40]),
        };
        let mut out = Vec::new();
        print_preview(&palette, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("background"));
        assert!(lines[1].contains("#ffffff"));
        assert!(lines[1].contains("21.00:1"));
    }
}
