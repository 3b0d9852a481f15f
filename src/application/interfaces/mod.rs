mod chat_transport;
mod completion_service;
mod product_catalog;
mod wishlist_repository;

pub use chat_transport::*;
pub use completion_service::*;
pub use product_catalog::*;
pub use wishlist_repository::*;
