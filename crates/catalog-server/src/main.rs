use std::net::SocketAddr;
use std::sync::Arc;

use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info};

use catalog_api::AppState;
use catalog_core::services::AuthService;
use catalog_infrastructure::database::{connection, PgProductRepository, PgUserRepository};
use catalog_security::TokenIssuer;
use catalog_shared::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env
    dotenvy::dotenv().ok();

    // Initialize telemetry
    catalog_shared::telemetry::init_telemetry();

    info!("Catalog server starting...");

    // Load configuration
    let config = match AppConfig::load() {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Connect to Database
    info!("Connecting to database...");
    let pool = connection::create_pool(&config.database.url, config.database.max_connections).await?;
    connection::run_migrations(&pool).await?;
    info!("Database connection established, schema up to date.");

    // Wire repositories and services
    let products = Arc::new(PgProductRepository::new(pool.clone()));
    let users = Arc::new(PgUserRepository::new(pool));
    let tokens = Arc::new(TokenIssuer::new(&config.jwt.secret));
    let auth = Arc::new(AuthService::new(users, tokens.clone()));

    let state = AppState {
        products,
        auth,
        tokens,
    };

    // Build router
    let app = catalog_api::router(state)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods([
                    axum::http::Method::GET,
                    axum::http::Method::POST,
                    axum::http::Method::PUT,
                    axum::http::Method::DELETE,
                    axum::http::Method::OPTIONS,
                ])
                .allow_headers([axum::http::header::CONTENT_TYPE, axum::http::header::AUTHORIZATION]),
        );

    // Bind address
    let host: std::net::IpAddr = config.app.host.parse()?;
    let addr = SocketAddr::from((host, config.app.port));
    info!("Listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
