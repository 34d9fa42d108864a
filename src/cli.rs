// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::Parser;

use crate::scene::ScenePreset;

#[derive(Parser, Debug, Clone)]
#[command(name = "pixel-gallery")]
#[command(about = "Windowed image gallery and 2D geometry demo", long_about = None)]
pub struct Cli {
    /// JSON config file; flags below override its fields
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Scene preset to run
    #[arg(long, value_enum)]
    pub scene: Option<ScenePreset>,

    /// Directory holding the five gallery images
    #[arg(long = "media-dir")]
    pub media_dir: Option<PathBuf>,

    /// Window title
    #[arg(long)]
    pub title: Option<String>,

    /// Window width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Window height in pixels
    #[arg(long)]
    pub height: Option<u32>,
}
