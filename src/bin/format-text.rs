use anyhow::{anyhow, Context, Result};
use clap::Parser;
use pixel_wrap::{layout, FontMetricsTable, Px};
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

/// Inserts line breaks into dialog text so it fits in a text box
#[derive(Parser, Debug)]
#[clap(author, version, about)]
struct Cli {
    /// Font metrics JSON file. Without one, text is only broken at authored breaks
    #[clap(short, long, env = "PIXEL_WRAP_FONTS")]
    fonts: Option<PathBuf>,

    /// Font id to measure with. Defaults to the file's default font
    #[clap(long)]
    font: Option<String>,

    /// Maximum line width in pixels. Defaults to the font's max line length
    #[clap(short, long)]
    width: Option<u32>,

    /// Text to format. Read from stdin when omitted
    text: Option<String>,
}

fn main() -> ExitCode {
    env_logger::init();

    if let Err(e) = try_main() {
        eprintln!("Error: {e:#}");
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn try_main() -> Result<()> {
    let cli = Cli::parse();

    let metrics = match &cli.fonts {
        Some(path) => FontMetricsTable::load(path)
            .with_context(|| format!("Failed to load fonts from {}", path.display()))?,
        None => FontMetricsTable::default(),
    };

    let font_id = cli
        .font
        .unwrap_or_else(|| metrics.default_font_id().to_string());

    let max_width = match cli.width {
        Some(width) => Px(width),
        None if font_id.is_empty() => Px(0),
        None => metrics.max_line_length(&font_id).ok_or_else(|| {
            anyhow!("No --width given and font '{font_id}' has no max line length")
        })?,
    };

    let text = match cli.text {
        Some(text) => text,
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .with_context(|| "Failed to read text from stdin")?;
            text
        }
    };

    let formatted = layout::format_text(&metrics, &text, max_width, &font_id)
        .with_context(|| "Failed to format text")?;
    println!("{formatted}");

    Ok(())
}
