mod gemini_client;
mod http_chat_transport;
mod in_memory_product_catalog;
mod json_product_catalog;
mod json_wishlist_repository;
mod mock_completion;

pub use gemini_client::*;
pub use http_chat_transport::*;
pub use in_memory_product_catalog::*;
pub use json_product_catalog::*;
pub use json_wishlist_repository::*;
pub use mock_completion::*;
