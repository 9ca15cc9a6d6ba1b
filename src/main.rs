//! # Marketplace Cart CLI
//!
//! Drives the cart against the file backend so state carries over between runs.
//!
//! ```bash
//! marketplace-cart add p1 "Mug" https://img/mug.png 10.0
//! marketplace-cart increment p1
//! marketplace-cart decrement p1
//! marketplace-cart list
//! ```

use anyhow::Context;
use clap::{Parser, Subcommand};
use marketplace_cart::framework::CartStore;
use marketplace_cart::model::CartItem;
use marketplace_cart::runtime::{
    default_storage_path, setup_tracing, CartConfig, CartProvider, StorageConfig,
};
use std::path::PathBuf;
use tracing::{info, Instrument};

#[derive(Parser)]
#[command(name = "marketplace-cart", about = "Shopping cart backed by local storage")]
struct Cli {
    /// TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Storage document to use instead of the configured backend
    #[arg(long)]
    data_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Add one unit of a product
    Add {
        id: String,
        title: String,
        image_url: String,
        price: f64,
    },
    /// Add one unit of a product already in the cart
    Increment { id: String },
    /// Remove one unit (or the line, once it is at zero)
    Decrement { id: String },
    /// Print the cart
    List,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    setup_tracing();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => CartConfig::load(path)?,
        None => CartConfig {
            storage: StorageConfig::File {
                path: default_storage_path().context("no data directory on this platform")?,
            },
            ..CartConfig::default()
        },
    };
    if let Some(path) = cli.data_file {
        config.storage = StorageConfig::File { path };
    }

    let provider = CartProvider::from_config(&config);
    let cart = provider.use_cart();

    let span = tracing::info_span!("cart_command");
    async {
        match cli.command {
            Command::Add {
                id,
                title,
                image_url,
                price,
            } => cart.add_to_cart(CartItem::new(id, title, image_url, price, 1)).await,
            Command::Increment { id } => cart.increment(id.into()).await,
            Command::Decrement { id } => cart.decrement(id.into()).await,
            Command::List => Ok(()),
        }
    }
    .instrument(span)
    .await?;

    for item in cart.products().await? {
        println!(
            "{:<12} {:>3} x {:>8.2}  {}",
            item.id.0, item.quantity, item.price, item.title
        );
    }
    info!(units = cart.total_units().await?, "Cart listed");

    provider.shutdown().await.map_err(anyhow::Error::msg)?;
    Ok(())
}
