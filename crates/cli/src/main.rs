//! EasyShop CLI - drive a shopping cart against a live EasyShop API.
//!
//! # Usage
//!
//! ```bash
//! # Display the current cart
//! easyshop show
//!
//! # Add one unit of product 15
//! easyshop add 15
//!
//! # Set product 15's quantity to 3
//! easyshop quantity 15 3
//!
//! # Empty the cart
//! easyshop clear
//!
//! # Check out every item in the cart
//! easyshop checkout
//!
//! # Check out a selected subset
//! easyshop checkout 15 27
//! ```
//!
//! # Configuration
//!
//! - `EASYSHOP_API_BASE_URL` - API base URL (required)
//! - `EASYSHOP_API_TOKEN` - bearer token for authenticated requests

#![cfg_attr(not(test), forbid(unsafe_code))]
// Terminal front end; printing is the interface.
#![allow(clippy::print_stdout, clippy::print_stderr)]

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use easyshop_cart::{CartConfig, CartService, CheckoutOutcome, HttpCartStore, UserSession};
use easyshop_core::ProductId;

mod terminal;

use terminal::TerminalUi;

#[derive(Parser)]
#[command(name = "easyshop")]
#[command(author, version, about = "EasyShop cart client")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load and display the current cart
    Show,
    /// Add one unit of a product to the cart
    Add {
        /// Product id to add
        product_id: ProductId,
    },
    /// Set the quantity of a product already in the cart
    Quantity {
        /// Product id to update
        product_id: ProductId,
        /// New unit count
        quantity: u32,
    },
    /// Empty the cart
    Clear,
    /// Check out the selected products (all items when none are given)
    Checkout {
        /// Product ids to include in the order
        product_ids: Vec<ProductId>,
    },
}

#[tokio::main]
async fn main() -> std::process::ExitCode {
    let cli = Cli::parse();

    // Initialize tracing with EnvFilter; defaults to info for our crates
    // if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "easyshop_cli=info,easyshop_cart=info".into());
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match CartConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            return std::process::ExitCode::FAILURE;
        }
    };
    tracing::debug!(?config, "configuration loaded");

    let session = config
        .api_token
        .clone()
        .map_or_else(UserSession::anonymous, UserSession::authenticated);
    let store = HttpCartStore::new(&config);
    let mut service = CartService::new(store, TerminalUi, session)
        .with_checkout_message_delay(config.checkout_message_delay);

    match cli.command {
        Commands::Show => {
            service.load_cart().await;
            service.render();
        }
        Commands::Add { product_id } => {
            service.add_to_cart(product_id).await;
        }
        Commands::Quantity {
            product_id,
            quantity,
        } => {
            service.load_cart().await;
            service.update_quantity(product_id, quantity).await;
        }
        Commands::Clear => {
            service.clear_cart().await;
        }
        Commands::Checkout { product_ids } => {
            // The selection is reconciled against a fresh snapshot, the
            // way the cart page re-reads its checkboxes at confirm time.
            service.load_cart().await;
            let selected: Vec<ProductId> = if product_ids.is_empty() {
                // No explicit selection means everything, matching the
                // cart page's select-all default.
                service
                    .state()
                    .items()
                    .map(|item| item.product.product_id)
                    .collect()
            } else {
                product_ids
            };

            if let CheckoutOutcome::Failed(_) = service.checkout(selected).await {
                return std::process::ExitCode::FAILURE;
            }
        }
    }

    std::process::ExitCode::SUCCESS
}
