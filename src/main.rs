use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn, Level};

use cover_palette::cli::Args;
use cover_palette::color::Color;
use cover_palette::pipeline::palette_task;
use cover_palette::pipeline::sample::load_image;
use cover_palette::preview::print_preview;
use cover_palette::theme::PaletteTheme;
use cover_palette::tui::{self, TuiApp};
use cover_palette::Palette;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::WARN })
        .init();

    let fallback = args
        .fallback
        .as_deref()
        .map(Color::from_hex)
        .transpose()
        .context("invalid --fallback color")?;

    let image = load_image(&args.image)?;
    let palette = match palette_task(image, args.extract_options()).await {
        Ok(palette) => palette,
        Err(err) => match fallback {
            Some(color) => {
                warn!("{err}; using fallback palette {color}");
                Palette::uniform(color)
            }
            None => {
                return Err(err)
                    .with_context(|| format!("failed to sample {}", args.image.display()))
            }
        },
    };
    info!(background = %palette.background, "palette ready");

    if args.tui {
        return tui::run(TuiApp::new(palette, args.image.clone()));
    }

    let theme = PaletteTheme::from_palette(palette);
    match &args.output {
        Some(path) => theme.write_to(path)?,
        None => print!("{}", theme.serialize()),
    }

    if args.preview {
        print_preview(&palette, &mut std::io::stdout())?;
    }
    Ok(())
}
