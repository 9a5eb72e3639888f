#![allow(non_snake_case)]

mod app;
mod components;
mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use giftshop_core::catalog::DEFAULT_BEST_AMOUNT;
use giftshop_core::Countdown;

use crate::context::ShopSettings;

/// Global settings, set once from the command line
static SETTINGS: OnceLock<ShopSettings> = OnceLock::new();

/// Get the shop settings (set from command line or default)
pub fn get_settings() -> ShopSettings {
    SETTINGS.get().cloned().unwrap_or_default()
}

/// Gift Shop - seasonal gift storefront
#[derive(Parser, Debug)]
#[command(name = "giftshop-desktop")]
#[command(about = "Gift Shop - seasonal gift storefront")]
struct Args {
    /// Directory holding gifts.json and the page assets
    #[arg(short, long, default_value = "assets")]
    assets: PathBuf,

    /// Fetch gifts.json relative to this URL instead of the assets directory
    #[arg(long)]
    gifts_url: Option<String>,

    /// Number of gifts in the best gifts panel
    #[arg(short, long, default_value_t = DEFAULT_BEST_AMOUNT)]
    best: usize,

    /// Countdown target (RFC 3339), defaults to the next New Year
    #[arg(long)]
    countdown_target: Option<String>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

fn main() {
    let args = Args::parse();
    setup_logging(args.verbose);

    let countdown = match args.countdown_target.as_deref().map(Countdown::parse) {
        Some(Ok(countdown)) => countdown,
        Some(Err(e)) => {
            tracing::warn!("{}; counting down to the next New Year instead", e);
            Countdown::until_new_year(chrono::Utc::now())
        }
        None => Countdown::until_new_year(chrono::Utc::now()),
    };

    let settings = ShopSettings {
        assets: args.assets,
        gifts_url: args.gifts_url,
        best_amount: args.best,
        countdown,
    };

    tracing::info!(
        assets = %settings.assets.display(),
        gifts_url = ?settings.gifts_url,
        best = settings.best_amount,
        "Starting Gift Shop"
    );

    // Store settings globally
    let _ = SETTINGS.set(settings);

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Gift Shop")
            .with_inner_size(dioxus::desktop::LogicalSize::new(1280.0, 900.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
