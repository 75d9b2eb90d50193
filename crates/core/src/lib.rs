//! Padoca Core - Shared domain library for the digital menu.
//!
//! This crate provides the domain logic used across all Padoca components:
//! - `storefront` - Customer-facing menu, cart, and open/closed indicator
//! - `admin` - Back office for categories, products, and store hours
//! - `cli` - Command-line tools for migrations and seeding
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no
//! database access, no HTTP clients. The optional `postgres` feature adds
//! `sqlx` derives so the binaries can decode rows straight into these types.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, BRL prices, customer names
//! - [`store_hours`] - Open/closed evaluation
//! - [`cart`] - Session-local cart accumulator
//! - [`catalog`] - Categories, products, sorting and menu listing
//! - [`forms`] - Back-office input validation

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod forms;
pub mod store_hours;
pub mod types;

pub use cart::{Cart, CartLine, ProductSnapshot};
pub use catalog::{Category, MenuListing, MenuSelection, MenuTab, Product};
pub use forms::{CategoryInput, ProductDraft, ProductInput, ValidationError};
pub use store_hours::{StoreHours, StoreStatus, TimeOfDay};
pub use types::*;
