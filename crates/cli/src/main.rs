//! Partshop CLI - store setup and management tools.
//!
//! # Usage
//!
//! ```bash
//! # Create the store document with seed data (no-op if it exists)
//! partshop init
//!
//! # Show the second page of the catalog, five per page
//! partshop products list --page 2 --limit 5
//!
//! # Create an admin user
//! partshop admin create -e ops@shop.local -n "Ops" -p 's3cret'
//!
//! # Operate on a document other than STOREFRONT_DATA_PATH
//! partshop --data /tmp/store.json init
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use partshop_storefront::config::StorefrontConfig;
use partshop_storefront::db::DocumentStore;

mod commands;

#[derive(Parser)]
#[command(name = "partshop")]
#[command(author, version, about = "Partshop CLI tools")]
struct Cli {
    /// Store document path (defaults to `STOREFRONT_DATA_PATH`)
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the store document with seed data if it is missing
    Init,
    /// Inspect the catalog
    Products {
        #[command(subcommand)]
        action: ProductsAction,
    },
    /// Manage admin users
    Admin {
        #[command(subcommand)]
        action: AdminAction,
    },
}

#[derive(Subcommand)]
enum ProductsAction {
    /// List one page of products
    List {
        /// Page number, starting at 1
        #[arg(long, default_value_t = 1)]
        page: usize,

        /// Products per page
        #[arg(long, default_value_t = partshop_storefront::services::DEFAULT_PAGE_SIZE)]
        limit: usize,
    },
}

#[derive(Subcommand)]
enum AdminAction {
    /// Create a new admin user
    Create {
        /// Admin email address
        #[arg(short, long)]
        email: String,

        /// Admin display name
        #[arg(short, long)]
        name: String,

        /// Admin password
        #[arg(short, long)]
        password: String,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let path = match cli.data {
        Some(path) => path,
        None => StorefrontConfig::from_env()?.data_path,
    };
    let store = DocumentStore::new(path);

    match cli.command {
        Commands::Init => {
            commands::init::run(&store).await?;
        }
        Commands::Products { action } => match action {
            ProductsAction::List { page, limit } => {
                commands::products::list(&store, page, limit).await?;
            }
        },
        Commands::Admin { action } => match action {
            AdminAction::Create {
                email,
                name,
                password,
            } => {
                commands::admin::create_user(&store, &email, &name, &password).await?;
            }
        },
    }
    Ok(())
}
