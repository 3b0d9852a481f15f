mod browse_products;
mod chat_assistant;
pub mod chat_prompt;
mod chat_session;
pub mod related_products;
mod wishlist;

pub use browse_products::*;
pub use chat_assistant::*;
pub use chat_session::*;
pub use wishlist::*;
