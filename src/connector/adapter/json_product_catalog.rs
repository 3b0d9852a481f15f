use std::path::Path;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::application::ProductCatalog;
use crate::domain::{DomainError, Niche, Product};

use super::InMemoryProductCatalog;

pub const PRODUCTS_FILE: &str = "products.json";
pub const NICHES_FILE: &str = "niches.json";

/// Catalog read once from `products.json` and `niches.json` in a data directory.
///
/// The files are the storefront's static fixtures; they are never written back.
/// `niches.json` is optional.
pub struct JsonProductCatalog {
    inner: InMemoryProductCatalog,
}

impl JsonProductCatalog {
    pub fn load(data_dir: impl AsRef<Path>) -> Result<Self, DomainError> {
        let data_dir = data_dir.as_ref();

        let products: Vec<Product> = read_json(&data_dir.join(PRODUCTS_FILE))?;

        let niches_path = data_dir.join(NICHES_FILE);
        let niches: Vec<Niche> = if niches_path.exists() {
            read_json(&niches_path)?
        } else {
            debug!("No {} in {}, serving no niches", NICHES_FILE, data_dir.display());
            Vec::new()
        };

        info!(
            "Loaded {} products and {} niches from {}",
            products.len(),
            niches.len(),
            data_dir.display()
        );

        Ok(Self {
            inner: InMemoryProductCatalog::new(products).with_niches(niches),
        })
    }

    pub fn product_count(&self) -> usize {
        self.inner.len()
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, DomainError> {
    let raw = std::fs::read_to_string(path).map_err(|e| {
        DomainError::storage(format!("Failed to read {}: {}", path.display(), e))
    })?;
    serde_json::from_str(&raw)
        .map_err(|e| DomainError::parse(format!("Invalid JSON in {}: {}", path.display(), e)))
}

#[async_trait]
impl ProductCatalog for JsonProductCatalog {
    async fn all_products(&self) -> Result<Vec<Product>, DomainError> {
        self.inner.all_products().await
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Product>, DomainError> {
        self.inner.find_by_id(id).await
    }

    async fn niches(&self) -> Result<Vec<Niche>, DomainError> {
        self.inner.niches().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const PRODUCTS: &str = r#"[
        {"id": "p1", "name": "UltraBook Pro", "nicheId": "electronics", "niche": "Electronics", "price": 89999},
        {"id": "p2", "name": "Silk Scarf", "nicheId": "fashion", "niche": "Fashion", "price": 1499}
    ]"#;

    #[tokio::test]
    async fn loads_products_without_niches_file() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(PRODUCTS_FILE), PRODUCTS).unwrap();

        let catalog = JsonProductCatalog::load(dir.path()).unwrap();

        assert_eq!(catalog.product_count(), 2);
        assert_eq!(catalog.all_products().await.unwrap()[1].name, "Silk Scarf");
        assert!(catalog.niches().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn loads_niches_when_present() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(PRODUCTS_FILE), PRODUCTS).unwrap();
        std::fs::write(
            dir.path().join(NICHES_FILE),
            r#"[{"id": "fashion", "name": "Fashion", "productCount": 1}]"#,
        )
        .unwrap();

        let catalog = JsonProductCatalog::load(dir.path()).unwrap();
        let niches = catalog.niches().await.unwrap();

        assert_eq!(niches.len(), 1);
        assert_eq!(niches[0].product_count, 1);
    }

    #[test]
    fn missing_products_file_is_a_storage_error() {
        let dir = TempDir::new().unwrap();

        let result = JsonProductCatalog::load(dir.path());

        assert!(matches!(result, Err(DomainError::StorageError(_))));
    }

    #[test]
    fn malformed_products_file_is_a_parse_error() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(PRODUCTS_FILE), "{not json").unwrap();

        let result = JsonProductCatalog::load(dir.path());

        assert!(matches!(result, Err(DomainError::ParseError(_))));
    }
}
