mod catalog_controller;
mod chat_controller;
mod wishlist_controller;

pub use catalog_controller::CatalogController;
pub use chat_controller::ChatController;
pub use wishlist_controller::WishlistController;
