//! Object storage for product images and the logo.

mod client;
mod error;
pub mod naming;

pub use client::StorageClient;
pub use error::StorageError;
pub use naming::object_name;

/// Object name of the bakery logo.
pub const LOGO_OBJECT_NAME: &str = "padoca_logo.png";
