pub mod widgets;

use std::path::PathBuf;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use ratatui::DefaultTerminal;

use crate::pipeline::assemble::Palette;
use widgets::PaletteWidget;

const SLOT_COUNT: usize = 4;

/// State for the interactive palette viewer.
pub struct TuiApp {
    pub palette: Palette,
    pub image_path: PathBuf,
    pub selected: usize,
}

impl TuiApp {
    pub fn new(palette: Palette, image_path: PathBuf) -> Self {
        Self {
            palette,
            image_path,
            selected: 0,
        }
    }

    /// Apply a key press. Returns `false` when the viewer should close.
    pub fn handle_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => return false,
            KeyCode::Right | KeyCode::Tab | KeyCode::Char('l') => {
                self.selected = (self.selected + 1) % SLOT_COUNT;
            }
            KeyCode::Left | KeyCode::BackTab | KeyCode::Char('h') => {
                self.selected = (self.selected + SLOT_COUNT - 1) % SLOT_COUNT;
            }
            _ => {}
        }
        true
    }

    fn draw(&self, frame: &mut Frame) {
        let [main, footer] =
            Layout::vertical([Constraint::Min(8), Constraint::Length(1)]).areas(frame.area());

        frame.render_widget(PaletteWidget::new(&self.palette, self.selected), main);
        frame.render_widget(
            Paragraph::new(format!(
                " {}  ←/→ select  q quit",
                self.image_path.display()
            ))
            .style(Style::default().fg(Color::DarkGray)),
            footer,
        );
    }
}

/// Launch the viewer and block until the user quits.
pub fn run(mut app: TuiApp) -> Result<()> {
    let mut terminal = ratatui::init();
    let result = event_loop(&mut terminal, &mut app);
    ratatui::restore();
    result
}

fn event_loop(terminal: &mut DefaultTerminal, app: &mut TuiApp) -> Result<()> {
    loop {
        terminal.draw(|frame| app.draw(frame))?;
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press && !app.handle_key(key.code) {
                return Ok(());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::WHITE;

    fn app() -> TuiApp {
        TuiApp::new(Palette::uniform(WHITE), PathBuf::from("cover.png"))
    }

    #[test]
    fn selection_wraps_both_ways() {
        let mut app = app();
        assert!(app.handle_key(KeyCode::Left));
        assert_eq!(app.selected, 3);
        assert!(app.handle_key(KeyCode::Right));
        assert_eq!(app.selected, 0);
        app.handle_key(KeyCode::Tab);
        app.handle_key(KeyCode::Tab);
        assert_eq!(app.selected, 2);
    }

    #[test]
    fn quit_keys_close_the_viewer() {
        let mut app = app();
        assert!(!app.handle_key(KeyCode::Char('q')));
        assert!(!app.handle_key(KeyCode::Esc));
        assert!(app.handle_key(KeyCode::Char('x')));
    }
}
