//! Integration tests for the LightGel storefront.
//!
//! # Running Tests
//!
//! ```bash
//! # Start the storefront (needs CATALOG_SHEET_URL in the environment)
//! cargo run -p lightgel-storefront
//!
//! # Run the ignored end-to-end tests against it
//! cargo test -p lightgel-integration-tests -- --ignored
//! ```
//!
//! The tests drive a cookie-holding HTTP client through the catalog page
//! and the cart fragments. They assert structure, not catalog content:
//! the sheet behind `CATALOG_SHEET_URL` is live data.
