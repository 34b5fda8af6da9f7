//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /               - Catalog page (facets via ?aroma= & ?tipo=)
//! GET  /health         - Health check
//!
//! # Cart (HTMX fragments)
//! POST /cart/add       - Add to cart (returns summary fragment, fires toast + scroll)
//! POST /cart/remove    - Remove entry (returns summary fragment, fires toast)
//! GET  /cart/count     - Cart count badge (fragment)
//! ```

pub mod cart;
pub mod catalog;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/add", post(cart::add))
        .route("/remove", post(cart::remove))
        .route("/count", get(cart::count))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Catalog page
        .route("/", get(catalog::index))
        // Cart routes
        .nest("/cart", cart_routes())
}
