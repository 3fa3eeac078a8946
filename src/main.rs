#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use ihsan_core::CartConfig;

/// Global data directory, set from command line
static DATA_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Cart configuration, loaded once at startup
static CART_CONFIG: OnceLock<CartConfig> = OnceLock::new();

/// Get the data directory (set from command line or default)
pub fn get_data_dir() -> PathBuf {
    DATA_DIR.get().cloned().unwrap_or_else(|| {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("ihsan")
    })
}

pub fn get_cart_config() -> CartConfig {
    CART_CONFIG.get().cloned().unwrap_or_default()
}

/// Ihsan Charity - Donation Cart
#[derive(Parser, Debug)]
#[command(name = "ihsan-desktop")]
#[command(about = "Ihsan Charity - browse projects and pledge donations")]
struct Args {
    /// Data directory for the saved cart
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// JSON file overriding the fee schedule
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let data_dir = args.data_dir.unwrap_or_else(get_data_dir);
    let _ = DATA_DIR.set(data_dir.clone());

    if let Some(path) = args.config {
        match CartConfig::load(&path) {
            Ok(config) => {
                let _ = CART_CONFIG.set(config);
            }
            Err(e) => tracing::error!("Ignoring config {:?}: {}", path, e),
        }
    }

    tracing::info!("Starting Ihsan Charity with data dir: {:?}", data_dir);

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Ihsan Charity")
            .with_inner_size(dioxus::desktop::LogicalSize::new(960.0, 900.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
