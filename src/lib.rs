//! Storefront - a small JSON record service backed by local files
//!
//! Two collections, `products` and `orders`, each persisted as one JSON
//! array document. Every request reads the document fresh; every create
//! rewrites it in full.

pub mod api;
pub mod collection;
pub mod config;
pub mod error;
pub mod id;
pub mod storage;
pub mod store;
pub mod types;

pub use error::{Error, Result};
