#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use cgviz_core::{WindowConfig, WindowSize};
use clap::Parser;
use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use tracing_subscriber::EnvFilter;

/// CG Viz Studio - 3D visualization studio landing page
#[derive(Parser, Debug)]
#[command(name = "cgviz-desktop")]
#[command(about = "CG Viz Studio - 3D visualization services landing page")]
struct Args {
    /// Initial window size as WIDTHxHEIGHT
    #[arg(short = 's', long, default_value_t = WindowSize::default())]
    window_size: WindowSize,

    /// Window title
    #[arg(short, long)]
    title: Option<String>,

    /// Whether the window can be resized
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    resizable: bool,
}

impl Args {
    fn window_config(self) -> WindowConfig {
        let defaults = WindowConfig::default();
        WindowConfig {
            title: self.title.unwrap_or(defaults.title),
            size: self.window_size,
            resizable: self.resizable,
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let window = Args::parse().window_config();

    tracing::info!(
        "Starting '{}' at {} (resizable: {})",
        window.title,
        window.size,
        window.resizable
    );

    // Configure desktop window
    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&window.title)
            .with_inner_size(LogicalSize::new(window.size.width, window.size.height))
            .with_resizable(window.resizable),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
