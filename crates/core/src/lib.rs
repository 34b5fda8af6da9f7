//! LightGel Core - catalog and cart domain library.
//!
//! This crate holds the domain logic of the LightGel storefront:
//! - [`catalog`] - sheet-row normalization and the derived facet options
//! - [`filter`] - the two-facet selection and its predicate
//! - [`cart`] - the identity-merging cart ledger
//! - [`order`] - order message composition and the WhatsApp handoff link
//!
//! # Architecture
//!
//! The core crate contains only types and logic - no I/O, no HTTP clients.
//! Fetching the catalog and serving pages live in the `storefront` crate;
//! everything here is deterministic and synchronous.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod filter;
pub mod order;

pub use cart::{AddOutcome, Cart, CartEntry};
pub use catalog::{Catalog, Item, SheetRecord};
pub use filter::FilterSelection;
