//! LightGel Storefront - public catalog and order-drafting site.
//!
//! This binary serves the NPstore LightGel catalog on port 3000.
//!
//! # Architecture
//!
//! - Axum web framework with HTMX for cart interactivity
//! - Askama templates for server-side rendering
//! - Catalog fetched once at startup from a spreadsheet-backed JSON endpoint
//! - Per-session in-memory cart, handed off as a WhatsApp message link
//!
//! The site stays up regardless of the catalog fetch outcome: a failed
//! fetch logs an error and serves an empty grid. There is no database, no
//! payments, and no authentication; "placing an order" composes a message
//! the visitor sends manually.

#![cfg_attr(not(test), forbid(unsafe_code))]
// The binary compiles the same modules as the library; helpers and error
// variants that only the library surface reaches are not dead there
#![allow(dead_code)]

use axum::{Router, routing::get};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

mod config;
mod error;
mod filters;
mod middleware;
mod routes;
mod sheet;
mod state;

use config::StorefrontConfig;
use lightgel_core::Catalog;
use sentry::integrations::tracing as sentry_tracing;
use state::AppState;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize Sentry error tracking and return guard that must be kept alive.
fn init_sentry(config: &StorefrontConfig) -> Option<sentry::ClientInitGuard> {
    let dsn = config.sentry_dsn.as_ref()?;

    let guard = sentry::init((
        dsn.as_str(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            environment: config
                .sentry_environment
                .clone()
                .map(std::borrow::Cow::Owned),
            attach_stacktrace: true,
            ..Default::default()
        },
    ));

    tracing::info!("Sentry initialized");
    Some(guard)
}

/// Filter tracing events to Sentry event types.
fn sentry_event_filter(metadata: &tracing::Metadata<'_>) -> sentry_tracing::EventFilter {
    match *metadata.level() {
        tracing::Level::ERROR | tracing::Level::WARN => sentry_tracing::EventFilter::Event,
        tracing::Level::INFO | tracing::Level::DEBUG => sentry_tracing::EventFilter::Breadcrumb,
        _ => sentry_tracing::EventFilter::Ignore,
    }
}

#[tokio::main]
async fn main() {
    // Load configuration from environment (needed for Sentry init)
    let config = StorefrontConfig::from_env().expect("Failed to load configuration");

    // Initialize Sentry (must be done before tracing subscriber)
    let _sentry_guard = init_sentry(&config);

    // Initialize tracing with EnvFilter and Sentry integration
    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "lightgel_storefront=info,tower_http=debug".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .with(sentry_tracing::layer().event_filter(sentry_event_filter))
        .init();

    // One-shot catalog load: no retry, no cache. A failure leaves the
    // grid empty; the page stays interactive either way.
    let client = sheet::SheetClient::new(&config);
    let catalog = match client.fetch_rows().await {
        Ok(rows) => Catalog::from_records(rows, &config.placeholder_image_url),
        Err(e) => {
            tracing::error!("Failed to fetch catalog: {e}");
            Catalog::empty()
        }
    };
    tracing::info!(items = catalog.len(), "Catalog loaded");

    // Build application state
    let state = AppState::new(config.clone(), catalog);

    // Create session layer (in-memory; the cart is per-session)
    let session_layer = middleware::create_session_layer();

    // Build router
    let app = Router::new()
        .route("/health", get(health))
        .merge(routes::routes())
        .nest_service("/static", ServeDir::new("crates/storefront/static"))
        .layer(TraceLayer::new_for_http())
        .layer(session_layer)
        .with_state(state)
        // Sentry layers (outermost for full request coverage)
        .layer(sentry_tower::NewSentryLayer::new_from_top())
        .layer(sentry_tower::SentryHttpLayer::new().enable_transaction());

    // Start server
    let addr = config.socket_addr();
    tracing::info!("storefront listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. The catalog is not a dependency:
/// the site serves with an empty catalog too.
async fn health() -> &'static str {
    "ok"
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
