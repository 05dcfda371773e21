//! Demo: describe a small settings window with the fluent API and dump the
//! resulting tree.

use anyhow::Result;
use trellis_markup::prelude::*;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let window = settings_panel();

    log::info!("built settings panel description");
    println!("{window:#?}");
    Ok(())
}

fn settings_panel() -> Border {
    let header = TextBlock::new("Settings")
        .font_size(20.0)
        .foreground(Color::from_rgb8(0xf0, 0xf0, 0xf5))
        .grid_column_span(2);

    let sidebar = StackPanel::new()
        .spacing(4.0)
        .padding((0.0, 8.0))
        .children([
            TextBlock::new("General"),
            TextBlock::new("Appearance"),
            TextBlock::new("Shortcuts"),
        ])
        .grid_row(1);

    let body = ScrollViewer::new()
        .content(
            TextBlock::new(LOREM)
                .wrapping(TextWrapping::Wrap)
                .max_lines(40)
                .padding(8.0),
        )
        .grid_row(1)
        .grid_column(1);

    let footer = TextBlock::new("v0.1.0")
        .foreground(Color::from_rgb8(0x80, 0x80, 0x88))
        .h_align(HorizontalAlignment::Right)
        .grid_row(2)
        .grid_column_span(2);

    Border::new()
        .padding(16.0)
        .corner_radius(8.0)
        .background(Color::from_rgb8(0x14, 0x14, 0x1c))
        .child(
            Grid::new()
                // "oops" is deliberate: the grammar degrades it to an auto
                // track and logs a warning instead of failing.
                .rows(["Auto", "*", "oops"])
                .columns(["180", "*"])
                .row_spacing(12.0)
                .column_spacing(12.0)
                .child(header)
                .child(sidebar)
                .child(body)
                .child(footer),
        )
}

const LOREM: &str = "Trellis describes UI trees; it never renders them. \
This text exists so the scroll viewer has something plausible to wrap.";
