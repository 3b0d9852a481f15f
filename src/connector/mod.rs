//! # Connector Layer
//!
//! External integrations implementing application interfaces:
//! - Catalog and wishlist storage (JSON files, in-memory)
//! - Completion API (Gemini, mock)
//! - Chat endpoint client (reqwest)
//! - HTTP API (axum) and CLI controllers

pub mod adapter;
pub mod api;
pub mod http;

pub use adapter::*;
