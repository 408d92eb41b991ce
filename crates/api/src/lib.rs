//! # Padelbook API
//!
//! The API crate provides the web server for the padel court booking service.
//! Business owners publish hourly "available matches" for their courts and
//! customers reserve them.
//!
//! ## Architecture
//!
//! This crate follows a layered architecture:
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Extract request data and call into `padelbook_core`
//! - **Middleware**: Caller identity extraction and error-to-HTTP mapping
//! - **Config**: Handle environment and application configuration
//!
//! Handlers reach persistence only through the store and directory held in
//! [`ApiState`], so the same router runs over Postgres or the in-memory
//! backends used in tests.

/// Configuration module for API settings
pub mod config;
/// Request handlers for slots, businesses and courts
pub mod handlers;
/// Caller identity and error handling
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::http::{HeaderName, HeaderValue, Method, header};
use eyre::{Result, WrapErr};
use padelbook_core::store::{AvailabilityStore, BusinessDirectory};
use padelbook_db::{PgAvailabilityStore, PgBusinessDirectory};
use sqlx::PgPool;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::FmtSubscriber;

use crate::middleware::caller::CALLER_HEADER;

/// Shared application state that is accessible to all request handlers
///
/// Holds the two persistence seams the booking core needs. Handlers pass them
/// explicitly into each use case; nothing else is shared between requests.
pub struct ApiState {
    /// Slot storage
    pub store: Arc<dyn AvailabilityStore>,
    /// Business and court lookups
    pub directory: Arc<dyn BusinessDirectory>,
}

impl ApiState {
    pub fn new(store: Arc<dyn AvailabilityStore>, directory: Arc<dyn BusinessDirectory>) -> Self {
        Self { store, directory }
    }

    /// State backed by PostgreSQL through a shared pool
    pub fn postgres(db_pool: PgPool) -> Self {
        Self::new(
            Arc::new(PgAvailabilityStore::new(db_pool.clone())),
            Arc::new(PgBusinessDirectory::new(db_pool)),
        )
    }
}

/// Builds the application router with all routes and request tracing
pub fn app(state: Arc<ApiState>) -> Router {
    Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Business and court registration endpoints
        .merge(routes::businesses::routes())
        // Available match endpoints
        .merge(routes::available_matches::routes())
        // Attach shared state to all routes
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Starts the API server with the provided configuration and database connection
///
/// # Arguments
///
/// * `config` - API configuration including host, port, and other settings
/// * `db_pool` - PostgreSQL connection pool backing the store and directory
///
/// # Errors
///
/// Fails if a global subscriber is already installed, a CORS origin is not a
/// valid header value, or the listener cannot bind.
pub async fn start_server(config: config::ApiConfig, db_pool: PgPool) -> Result<()> {
    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let state = Arc::new(ApiState::postgres(db_pool));
    let app = app(state);

    // Apply CORS configuration if origins are specified
    let app = if let Some(origins) = &config.cors_origins {
        let origins = origins
            .iter()
            .map(|origin| origin.parse::<HeaderValue>())
            .collect::<Result<Vec<_>, _>>()
            .wrap_err("Invalid API_CORS_ORIGINS value")?;

        let cors = CorsLayer::new()
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PATCH,
                Method::DELETE,
                Method::OPTIONS,
            ])
            .allow_headers([
                header::CONTENT_TYPE,
                header::ACCEPT,
                HeaderName::from_static(CALLER_HEADER),
            ])
            .allow_origin(origins)
            .allow_credentials(true);

        app.layer(cors)
    } else {
        app
    };

    // Add request timeout middleware
    let app = app.layer(TimeoutLayer::new(Duration::from_secs(config.request_timeout)));

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
