//! shade-ramp CLI - render color shade ramps as terminal swatches.

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use shade_ramp::{
    build_named_palette, build_palette, contrast_text, hex_to_rgb, NamedColorTable, Palette,
    PaletteStore,
};

/// Generate design-system color shade ramps from seed colors.
#[derive(Parser, Debug)]
#[command(name = "shade-ramp")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Seed hex color(s), leading '#' optional (repeatable, max 5 total)
    #[arg(short, long = "color")]
    colors: Vec<String>,

    /// Named seed categories from the built-in table, e.g. "blue" (repeatable)
    #[arg(short, long = "named")]
    named: Vec<String>,

    /// Display name for the first custom color
    #[arg(long)]
    name: Option<String>,

    /// Print palettes as JSON instead of swatches
    #[arg(long)]
    json: bool,

    /// List the built-in named colors and exit
    #[arg(long)]
    list: bool,

    /// Disable the ANSI color blocks
    #[arg(long)]
    plain: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let table = NamedColorTable::builtin();

    if args.list {
        for name in table.names() {
            let (display, hex) = table
                .seed_for(name)
                .context("built-in table entry missing its 500 shade")?;
            println!("{display:<10} {hex}");
        }
        return Ok(());
    }

    if args.colors.is_empty() && args.named.is_empty() {
        anyhow::bail!("no seed color given; use --color or --named (see --help)");
    }

    let mut store = PaletteStore::new();

    for name in &args.named {
        let palette = build_named_palette(&table, name)
            .with_context(|| format!("failed to build palette for named color '{name}'"))?;
        add_to_store(&mut store, palette);
    }

    for (i, color) in args.colors.iter().enumerate() {
        let display = if i == 0 { args.name.as_deref() } else { None };
        let palette = build_palette(color, display)
            .with_context(|| format!("failed to build palette for '{color}'"))?;
        add_to_store(&mut store, palette);
    }

    info!("generated {} palette(s)", store.len());

    if args.json {
        let palettes: Vec<&Palette> = store.iter().collect();
        println!("{}", serde_json::to_string_pretty(&palettes)?);
        return Ok(());
    }

    for palette in store.iter() {
        render_palette(palette, args.plain)?;
    }

    Ok(())
}

fn add_to_store(store: &mut PaletteStore, palette: Palette) {
    let name = palette.name.clone();
    if store.add(palette).is_err() {
        warn!("skipping '{name}': palette limit reached");
    }
}

/// Print one palette as a vertical strip of swatches.
fn render_palette(palette: &Palette, plain: bool) -> Result<()> {
    println!(
        "\n{} (seed {}, base {})",
        palette.name, palette.seed, palette.base_shade
    );

    for swatch in &palette.swatches {
        let marker = if swatch.shade == palette.base_shade {
            "*"
        } else {
            " "
        };

        if plain {
            println!("  {:>3} {marker} {}", swatch.shade, swatch.hex);
            continue;
        }

        let bg = hex_to_rgb(&swatch.hex)?;
        let fg = hex_to_rgb(contrast_text(bg))?;
        println!(
            "  {:>3} {marker} \x1b[48;2;{};{};{}m\x1b[38;2;{};{};{}m  {}  \x1b[0m",
            swatch.shade, bg.r, bg.g, bg.b, fg.r, fg.g, fg.b, swatch.hex
        );
    }

    Ok(())
}
