//! # Catalog Admin API
//!
//! HTTP server binary for the product catalog admin.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Admin API Server                                 │
//! │                                                                         │
//! │  Client ───► HTTP (8080) ───► Handlers ───► SQLite                     │
//! │                                   │                                     │
//! │                                   ▼                                     │
//! │                              MediaStore                                 │
//! │                            (public blobs)                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use actix_web::{web, App, HttpServer};
use tracing::info;
use tracing_subscriber::EnvFilter;

use catalog_admin_api::storage::MediaStore;
use catalog_admin_api::{routes, AppConfig, AppState};
use catalog_db::{Database, DbConfig};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize tracing; RUST_LOG overrides the default level
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("Starting catalog admin API server...");

    // Load configuration
    let config = AppConfig::load().map_err(std::io::Error::other)?;
    info!(
        port = config.http_port,
        database = %config.database_path.display(),
        media_root = %config.media_root.display(),
        "Configuration loaded"
    );

    // Connect to the database (runs migrations)
    let db = Database::new(DbConfig::new(&config.database_path))
        .await
        .map_err(std::io::Error::other)?;
    info!("Connected to SQLite");

    let media = MediaStore::new(&config.media_root);

    let http_port = config.http_port;
    let state = AppState::new(db, media, config);

    info!(port = http_port, "Starting HTTP server");

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(tracing_actix_web::TracingLogger::default())
            .configure(routes::configure_routes)
    })
    .bind(("0.0.0.0", http_port))?
    .run()
    .await
}
