use ratatui::prelude::*;
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::color::Color as AppColor;
use crate::pipeline::assemble::Palette;

/// Renders the four palette slots as swatches drawn on the background
/// color, with the selected slot's hex value and contrast ratio below.
pub struct PaletteWidget<'a> {
    palette: &'a Palette,
    selected: usize,
}

impl<'a> PaletteWidget<'a> {
    pub fn new(palette: &'a Palette, selected: usize) -> Self {
        Self { palette, selected }
    }
}

fn to_color(c: AppColor) -> Color {
    let [r, g, b] = c.to_rgb8();
    Color::Rgb(r, g, b)
}

/// Black or white label text, whichever reads on `c`.
fn label_fg(c: AppColor) -> Color {
    if c.is_dark() {
        Color::White
    } else {
        Color::Black
    }
}

/// A row of 12-wide swatches, one per slot, each labelled with its name.
fn build_swatch_row(palette: &Palette, selected: usize) -> Line<'static> {
    let mut spans = vec![Span::raw("  ")];
    for (i, (name, color)) in palette.slots().into_iter().enumerate() {
        let mut style = Style::default().bg(to_color(color)).fg(label_fg(color));
        if i == selected {
            style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
        }
        spans.push(Span::styled(format!("{name:^12}"), style));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

/// The foreground slots as text on the palette background.
fn build_sample_row(palette: &Palette) -> Line<'static> {
    let bg = to_color(palette.background);
    let mut spans = vec![Span::raw("  ")];
    for (_, color) in palette.slots().into_iter().skip(1) {
        spans.push(Span::styled(
            " Artist - Track Title ",
            Style::default().bg(bg).fg(to_color(color)),
        ));
    }
    Line::from(spans)
}

impl Widget for PaletteWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered().title("Palette");
        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines = vec![
            Line::from(""),
            build_swatch_row(self.palette, self.selected),
            Line::from(""),
            build_sample_row(self.palette),
        ];

        if let Some((name, color)) = self.palette.slots().get(self.selected).copied() {
            let ratio = AppColor::contrast_ratio(&color, &self.palette.background);
            let verdict = if AppColor::is_contrasting(&self.palette.background, &color) {
                "contrasting"
            } else {
                "low contrast"
            };
            lines.push(Line::from(""));
            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(
                    format!("  {name}  "),
                    Style::default().bg(to_color(color)).fg(label_fg(color)),
                ),
                Span::raw(format!(
                    "  {}  contrast {ratio:.2}:1 ({verdict})",
                    color.to_hex()
                )),
            ]));
        }

        Paragraph::new(lines).render(inner, buf);
    }
}
