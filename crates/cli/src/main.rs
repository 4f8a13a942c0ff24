//! Mercado CLI - cart inspection and management tools.
//!
//! Operates on the same file-backed cart blob the app uses, so a cart
//! mutated here shows up on next app start.
//!
//! # Usage
//!
//! ```bash
//! # Add a product to the cart (or bump its quantity if present)
//! mercado add --id sku-1 --title "Red Mug" --image-url https://cdn.example.com/mug.png --price 12.50
//!
//! # Adjust quantities
//! mercado increment sku-1
//! mercado decrement sku-1
//!
//! # Show line items and totals
//! mercado show
//!
//! # Wipe the persisted cart
//! mercado clear
//! ```
//!
//! Storage location is configured via `MERCADO_STORAGE_DIR` and
//! `MERCADO_STORAGE_KEY` (see `mercado_cart::config`).

#![cfg_attr(not(test), forbid(unsafe_code))]
// CLI output goes to stdout
#![allow(clippy::print_stdout)]

use clap::{Parser, Subcommand};

use mercado_cart::{CartConfig, CartContext, CartStore, FileStore};
use mercado_core::{Price, ProductId};

mod commands;

#[derive(Parser)]
#[command(name = "mercado")]
#[command(author, version, about = "Mercado cart tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a product to the cart, incrementing if already present
    Add {
        /// Product identifier
        #[arg(long)]
        id: String,

        /// Product title
        #[arg(long)]
        title: String,

        /// Product image URL
        #[arg(long, default_value = "")]
        image_url: String,

        /// Unit price, e.g. 12.50
        #[arg(long)]
        price: Price,
    },
    /// Increment a product's quantity by 1
    Increment {
        /// Product identifier
        id: String,
    },
    /// Decrement a product's quantity by 1 (floors at 1)
    Decrement {
        /// Product identifier
        id: String,
    },
    /// Print the cart's line items and totals
    Show,
    /// Wipe the persisted cart
    Clear,
}

fn main() {
    // Initialize tracing with EnvFilter
    // Defaults to info level for our crates if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "mercado_cart=info,mercado=info".into());

    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();

    // Load configuration from environment
    let config = CartConfig::from_env().expect("Failed to load configuration");

    let storage = FileStore::new(config.storage_dir.clone());
    let context = CartContext::new(CartStore::open(Box::new(storage), config.storage_key));

    let result = match cli.command {
        Commands::Add {
            id,
            title,
            image_url,
            price,
        } => commands::add(&context, ProductId::new(id), title, image_url, price),
        Commands::Increment { id } => commands::increment(&context, &ProductId::new(id)),
        Commands::Decrement { id } => commands::decrement(&context, &ProductId::new(id)),
        Commands::Show => commands::show(&context),
        Commands::Clear => commands::clear(&context),
    };

    if let Err(e) = result {
        tracing::error!("{e}");
        std::process::exit(1);
    }
}
