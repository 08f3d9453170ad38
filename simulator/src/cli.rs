//! Command line arguments.

use std::path::PathBuf;

use clap::Parser;

/// Desktop simulator for the HUD system diagnostics panel.
#[derive(Debug, Parser)]
#[command(name = "simulator", version, about)]
pub struct Args {
    /// HUD configuration file (TOML). Defaults are used when omitted.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Window pixel scale.
    #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u32).range(1..=8))]
    pub scale: u32,

    /// Framebuffer width in pixels.
    #[arg(long, default_value_t = 640)]
    pub width: u32,

    /// Framebuffer height in pixels.
    #[arg(long, default_value_t = 480)]
    pub height: u32,

    /// Start with the CO sensor detached.
    #[arg(long)]
    pub no_sensor: bool,
}
