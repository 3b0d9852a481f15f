use async_trait::async_trait;

use crate::application::ProductCatalog;
use crate::domain::{DomainError, Niche, Product};

/// Fixed catalog held in memory. Used by tests and as the backing store of
/// [`super::JsonProductCatalog`] once the fixture files are read.
pub struct InMemoryProductCatalog {
    products: Vec<Product>,
    niches: Vec<Niche>,
}

impl InMemoryProductCatalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products,
            niches: Vec::new(),
        }
    }

    pub fn with_niches(mut self, niches: Vec<Niche>) -> Self {
        self.niches = niches;
        self
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Default for InMemoryProductCatalog {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[async_trait]
impl ProductCatalog for InMemoryProductCatalog {
    async fn all_products(&self) -> Result<Vec<Product>, DomainError> {
        Ok(self.products.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Product>, DomainError> {
        Ok(self.products.iter().find(|p| p.id == id).cloned())
    }

    async fn niches(&self) -> Result<Vec<Niche>, DomainError> {
        Ok(self.niches.clone())
    }
}
