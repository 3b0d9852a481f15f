use async_trait::async_trait;

use crate::domain::{DomainError, Wishlist};

/// Whole-blob persistence for a wishlist. The last save wins.
#[async_trait]
pub trait WishlistRepository: Send + Sync {
    async fn load(&self) -> Result<Wishlist, DomainError>;

    async fn save(&self, wishlist: &Wishlist) -> Result<(), DomainError>;
}
