use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use storefront_http::{AppState, create_router};
use storefront_service::{CustomerService, OrderService, ProductService};
use storefront_storage::StorageBackend;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "storefront")]
#[command(about = "Order-management backend for customers, products, and orders", long_about = None)]
struct Cli {
    /// Path to the SQLite database file
    #[arg(long, global = true)]
    db: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP server
    Serve {
        #[arg(short, long, default_value = "8080")]
        port: u16,
        #[arg(short = 'H', long, default_value = "127.0.0.1")]
        host: String,
    },
    /// Print all customers as JSON
    Customers,
    /// Print all products as JSON
    Products,
    /// Print all orders as JSON
    Orders,
}

fn default_db_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("storefront")
        .join("storefront.db")
}

/// Opens the backend selected by the environment.
///
/// With the `postgres` feature, `STOREFRONT_DATABASE_URL` takes precedence;
/// otherwise a SQLite file under the local data directory is used.
async fn open_backend(db: Option<PathBuf>) -> Result<StorageBackend> {
    #[cfg(feature = "postgres")]
    if let Ok(url) = std::env::var("STOREFRONT_DATABASE_URL") {
        return Ok(StorageBackend::new_postgres(&url).await?);
    }

    let db_path = db.unwrap_or_else(default_db_path);
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    Ok(StorageBackend::new_sqlite(&db_path)?)
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let cli = Cli::parse();
    let storage = Arc::new(open_backend(cli.db).await?);

    match cli.command {
        Commands::Serve { port, host } => {
            let state = Arc::new(AppState::new(storage));
            let router = create_router(state);
            let addr = format!("{}:{}", host, port);
            tracing::info!("Starting HTTP server on {}", addr);
            let listener = tokio::net::TcpListener::bind(&addr).await?;
            axum::serve(listener, router).await?;
        }
        Commands::Customers => {
            let customers = CustomerService::new(storage).all().await?;
            println!("{}", serde_json::to_string_pretty(&customers)?);
        }
        Commands::Products => {
            let products = ProductService::new(storage).all().await?;
            println!("{}", serde_json::to_string_pretty(&products)?);
        }
        Commands::Orders => {
            let orders = OrderService::new(storage).all().await?;
            println!("{}", serde_json::to_string_pretty(&orders)?);
        }
    }

    Ok(())
}
