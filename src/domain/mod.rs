//! # Domain Layer
//!
//! Catalog records, chat messages, pricing helpers and the error taxonomy.
//! This layer is independent of HTTP and storage concerns.

pub mod error;
pub mod models;
pub mod services;

pub use error::*;
pub use models::*;
pub use services::*;
