use std::path::Path;

use anyhow::{Context, Result};

use crate::pipeline::assemble::Palette;

/// A palette rendered as `key = #rrggbb` lines for the UI layer.
#[derive(Debug, Clone)]
pub struct PaletteTheme {
    pub palette: Palette,
}

impl PaletteTheme {
    pub fn from_palette(palette: Palette) -> Self {
        Self { palette }
    }

    /// One line per slot, background first.
    pub fn serialize(&self) -> String {
        let mut out = String::new();
        for (name, color) in self.palette.slots() {
            out.push_str(&format!("{name} = {}\n", color.to_hex()));
        }
        out
    }

    /// Write the theme to an arbitrary path.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.serialize())
            .with_context(|| format!("failed to write theme to {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{Color, BLACK, WHITE};

    fn test_palette() -> Palette {
        Palette {
            background: Color::from_rgb8([0x1a, 0x2b, 0x3c]),
            primary: WHITE,
            secondary: Color::from_rgb8([0xff, 0x88, 0x00]),
            detail: BLACK,
        }
    }

    #[test]
    fn serialization_lists_slots_in_order() {
        let output = PaletteTheme::from_palette(test_palette()).serialize();
        assert_eq!(
            output,
            "background = #1a2b3c\nprimary = #ffffff\nsecondary = #ff8800\ndetail = #000000\n"
        );
    }

    #[test]
    fn write_to_creates_file() {
        let theme = PaletteTheme::from_palette(test_palette());
        let dir = std::env::temp_dir().join("cover-palette-test-theme");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("theme.txt");

        theme.write_to(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, theme.serialize());

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn write_to_missing_directory_fails_with_path() {
        let theme = PaletteTheme::from_palette(test_palette());
        let path = Path::new("/nonexistent/dir/theme.txt");
        let err = theme.write_to(path).unwrap_err().to_string();
        assert!(err.contains("/nonexistent/dir/theme.txt"), "got: {err}");
    }
}
