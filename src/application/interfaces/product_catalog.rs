use async_trait::async_trait;

use crate::domain::{DomainError, Niche, Product};

/// Read-only access to the product catalog.
///
/// Products come back in catalog order; the chat prompt and the related-product
/// matcher both depend on that order.
#[async_trait]
pub trait ProductCatalog: Send + Sync {
    async fn all_products(&self) -> Result<Vec<Product>, DomainError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<Product>, DomainError>;

    async fn niches(&self) -> Result<Vec<Niche>, DomainError>;
}
