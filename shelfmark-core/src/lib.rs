//! Shelfmark core library exports

pub mod catalog;
pub mod error;

pub use error::{CatalogError, Result};
