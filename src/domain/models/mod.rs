mod chat_message;
mod niche;
mod product;
mod product_query;
mod wishlist;

pub use chat_message::*;
pub use niche::*;
pub use product::*;
pub use product_query::*;
pub use wishlist::*;
