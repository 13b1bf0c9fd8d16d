//! Cart Checkout CLI - the shopping cart page in a terminal.
//!
//! # Usage
//!
//! ```bash
//! # Show the page for a cart fixture
//! checkout show --cart cart.yaml
//!
//! # Pick express delivery and apply a discount code
//! checkout show --cart cart.yaml --shipping express --discount DISCOUNT10
//!
//! # Replay a scripted session, printing JSON page views
//! checkout session --cart cart.yaml --script session.yaml --format json
//! ```
//!
//! # Commands
//!
//! - `show` - Print the cart page once
//! - `session` - Replay page intents against a cart store
//!
//! Pricing is configured through `CHECKOUT_*` environment variables; see
//! [`config`]. Logs go to stderr and honour `RUST_LOG`.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod fixtures;
mod navigator;
mod render;

use commands::OutputFormat;
use config::CheckoutConfig;

#[derive(Parser)]
#[command(name = "checkout")]
#[command(author, version, about = "Shopping cart page and order totals")]
struct Cli {
    /// Output format for page views
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the cart page for a cart fixture
    Show {
        /// Cart fixture (JSON or YAML list of line items)
        #[arg(short, long)]
        cart: PathBuf,

        /// Shipping tier (`standard`, `express`, or a tier label)
        #[arg(short, long, default_value = "standard")]
        shipping: String,

        /// Discount code, matched exactly
        #[arg(short, long, default_value = "")]
        discount: String,
    },
    /// Replay a scripted session of page intents
    Session {
        /// Cart fixture (JSON or YAML list of line items)
        #[arg(short, long)]
        cart: PathBuf,

        /// Session script (JSON or YAML list of intents)
        #[arg(short = 'S', long)]
        script: PathBuf,
    },
}

fn main() {
    // Defaults to info level for our crates if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "cart_checkout_cli=info,cart_checkout_core=info".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = CheckoutConfig::from_env()?;
    tracing::debug!(?config, "Loaded configuration");

    match cli.command {
        Commands::Show {
            cart,
            shipping,
            discount,
        } => commands::show::run(&config, &cart, &shipping, &discount, cli.format)?,
        Commands::Session { cart, script } => {
            commands::session::run(&config, &cart, &script, cli.format)?;
        }
    }
    Ok(())
}
