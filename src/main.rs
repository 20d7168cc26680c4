//! Entry point for the product page viewer.
//!
//! Responsibilities here are intentionally minimal:
//! - Parse command-line arguments.
//! - Load user configuration (default `conf/config.toml`).
//! - Load the product record from JSON.
//! - Print the effective config or the product's structured data, or
//!   launch the page.

mod app;
mod assets;
mod carousel;
mod config;
mod formatting;
mod product;
mod seo;
mod store;
mod theme;

use crate::app::run_app;
use crate::config::{load_config, serialize_config};
use crate::product::load_product;
use crate::seo::structured_data;
use crate::store::LocalStore;
use anyhow::{Context, Result, anyhow};
use std::env;
use std::path::PathBuf;
use tracing::{debug, error, info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*, reload};

type ReloadHandle = reload::Handle<EnvFilter, tracing_subscriber::Registry>;

const DEFAULT_CONFIG_PATH: &str = "conf/config.toml";
const USAGE: &str =
    "Usage: product-detail <product.json> [--config <path>] [--structured-data] [--dump-config]";

#[derive(Debug, PartialEq)]
struct Args {
    /// Absent only when dumping the config.
    product_path: Option<PathBuf>,
    config_path: PathBuf,
    structured_data: bool,
    dump_config: bool,
}

fn main() {
    let reload_handle = init_tracing();
    if let Err(err) = run(&reload_handle) {
        error!("{err:?}");
        std::process::exit(1);
    }
}

fn run(reload_handle: &ReloadHandle) -> Result<()> {
    let args = parse_args(env::args().skip(1))?;
    let config = load_config(&args.config_path);
    set_log_level(reload_handle, config.log_level.as_filter_str());
    if args.dump_config {
        print!("{}", serialize_config(&config)?);
        return Ok(());
    }
    let product_path = args.product_path.ok_or_else(|| anyhow!(USAGE))?;
    info!(
        product = %product_path.display(),
        level = %config.log_level,
        "Starting product page"
    );

    let product = load_product(&product_path)?;
    let json_ld = structured_data(&product, &config.base_url)?;
    if args.structured_data {
        println!("{json_ld}");
        return Ok(());
    }
    debug!(%json_ld, "Structured data for product");

    run_app(product, config, Box::new(LocalStore::new(None)))
        .context("Failed to start the GUI")?;
    Ok(())
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Args> {
    let mut product_path = None;
    let mut config_path = PathBuf::from(DEFAULT_CONFIG_PATH);
    let mut structured_data = false;
    let mut dump_config = false;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let path = args
                    .next()
                    .ok_or_else(|| anyhow!("--config needs a path\n{USAGE}"))?;
                config_path = PathBuf::from(path);
            }
            "--structured-data" => structured_data = true,
            "--dump-config" => dump_config = true,
            flag if flag.starts_with("--") => return Err(anyhow!("Unknown flag {flag}\n{USAGE}")),
            path => product_path = Some(PathBuf::from(path)),
        }
    }

    match &product_path {
        Some(path) if !path.exists() => {
            return Err(anyhow!("File not found: {}", path.display()));
        }
        None if !dump_config => return Err(anyhow!(USAGE)),
        _ => {}
    }
    Ok(Args {
        product_path,
        config_path,
        structured_data,
        dump_config,
    })
}

fn init_tracing() -> ReloadHandle {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    let (filter_layer, handle) = reload::Layer::new(env_filter);
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_filter(filter_layer),
        )
        .init();
    debug!("Logging initialized; override level with config log_level or RUST_LOG");
    handle
}

fn set_log_level(handle: &ReloadHandle, level: &str) {
    let parsed = EnvFilter::builder()
        .parse(level)
        .unwrap_or_else(|_| EnvFilter::new("debug"));
    if let Err(err) = handle.modify(|filter| *filter = parsed) {
        warn!(%level, "Failed to update log level from config: {err}");
    } else {
        info!(%level, "Applied log level from config");
    }
}
