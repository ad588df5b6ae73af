//! `efield`: show the electric field of a fixed dipole in a 3D window.
//!
//! Drag to orbit, right-drag (or shift-drag) to pan, scroll to zoom.
//! `E` toggles the field arrows, `Q` resets the camera.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use efield::{Options, Viewer};

#[derive(Parser, Debug)]
#[command(name = "efield", version, about)]
struct Cli {
    /// TOML options file; missing sections fall back to defaults.
    #[arg(long, value_name = "PATH")]
    options: Option<PathBuf>,

    /// Start with the field arrows hidden.
    #[arg(long)]
    hide_field: bool,

    /// Window title.
    #[arg(long, default_value = "Electric Field")]
    title: String,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    let cli = Cli::parse();

    let mut options = match &cli.options {
        Some(path) => Options::load(path).with_context(|| {
            format!("failed to load options from {}", path.display())
        })?,
        None => Options::default(),
    };
    if cli.hide_field {
        options.display.show_electric_field = false;
    }

    Viewer::builder()
        .with_options(options)
        .with_title(cli.title)
        .build()
        .run()
        .context("viewer exited with an error")
}
