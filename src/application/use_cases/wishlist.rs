use std::sync::Arc;

use tracing::info;

use crate::application::{ProductCatalog, WishlistRepository};
use crate::domain::{DomainError, Product, Wishlist};

/// Saves and removes catalog products on the shopper's wishlist.
///
/// Each operation loads the whole list, changes it and writes it back.
pub struct WishlistUseCase {
    catalog: Arc<dyn ProductCatalog>,
    repository: Arc<dyn WishlistRepository>,
}

impl WishlistUseCase {
    pub fn new(catalog: Arc<dyn ProductCatalog>, repository: Arc<dyn WishlistRepository>) -> Self {
        Self {
            catalog,
            repository,
        }
    }

    pub async fn list(&self) -> Result<Vec<Product>, DomainError> {
        Ok(self.repository.load().await?.products().to_vec())
    }

    pub async fn contains(&self, product_id: &str) -> Result<bool, DomainError> {
        Ok(self.repository.load().await?.contains(product_id))
    }

    /// Returns `false` when the product was already saved.
    pub async fn add(&self, product_id: &str) -> Result<bool, DomainError> {
        let product = self.lookup(product_id).await?;
        let mut wishlist = self.repository.load().await?;
        let added = wishlist.add(product);
        if added {
            self.repository.save(&wishlist).await?;
            info!("Added {} to wishlist", product_id);
        }
        Ok(added)
    }

    /// Returns `false` when the product was not on the list.
    pub async fn remove(&self, product_id: &str) -> Result<bool, DomainError> {
        let mut wishlist = self.repository.load().await?;
        let removed = wishlist.remove(product_id);
        if removed {
            self.repository.save(&wishlist).await?;
            info!("Removed {} from wishlist", product_id);
        }
        Ok(removed)
    }

    /// Returns whether the product is saved afterwards.
    pub async fn toggle(&self, product_id: &str) -> Result<bool, DomainError> {
        let mut wishlist = self.repository.load().await?;
        let saved = if wishlist.contains(product_id) {
            wishlist.remove(product_id);
            false
        } else {
            wishlist.toggle(self.lookup(product_id).await?)
        };
        self.repository.save(&wishlist).await?;
        Ok(saved)
    }

    pub async fn clear(&self) -> Result<(), DomainError> {
        self.repository.save(&Wishlist::new()).await
    }

    async fn lookup(&self, product_id: &str) -> Result<Product, DomainError> {
        self.catalog
            .find_by_id(product_id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("Product not found: {}", product_id)))
    }
}
