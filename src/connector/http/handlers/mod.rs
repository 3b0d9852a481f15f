mod chat;
mod health;
mod products;

pub use chat::*;
pub use health::*;
pub use products::*;
