use std::cmp::Ordering;
use std::sync::Arc;

use tracing::debug;

use crate::application::ProductCatalog;
use crate::domain::{DomainError, Niche, Product, ProductQuery, SortOption};

/// Catalog listing, detail lookup and niche listing for the storefront pages.
pub struct BrowseProductsUseCase {
    catalog: Arc<dyn ProductCatalog>,
}

impl BrowseProductsUseCase {
    pub fn new(catalog: Arc<dyn ProductCatalog>) -> Self {
        Self { catalog }
    }

    pub async fn execute(&self, query: &ProductQuery) -> Result<Vec<Product>, DomainError> {
        let products = self.catalog.all_products().await?;
        let total = products.len();
        let listed = apply_query(products, query);
        debug!(
            "Listed {} of {} products (sort={})",
            listed.len(),
            total,
            query.sort()
        );
        Ok(listed)
    }

    pub async fn get(&self, id: &str) -> Result<Product, DomainError> {
        self.catalog
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("Product not found: {}", id)))
    }

    pub async fn niches(&self) -> Result<Vec<Niche>, DomainError> {
        self.catalog.niches().await
    }
}

/// Filters then sorts. Sorting is stable, so ties keep catalog order.
pub fn apply_query(products: Vec<Product>, query: &ProductQuery) -> Vec<Product> {
    let mut filtered: Vec<Product> = products
        .into_iter()
        .filter(|p| query.niche_id().map_or(true, |niche| p.niche_id == niche))
        .filter(|p| !query.is_trending_only() || p.trending)
        .filter(|p| !query.is_new_arrivals_only() || p.new_arrival)
        .filter(|p| p.in_price_range(query.min_price(), query.max_price()))
        .filter(|p| p.rating >= query.min_rating())
        .collect();

    match query.sort() {
        SortOption::Trending => filtered.sort_by(|a, b| {
            b.trending
                .cmp(&a.trending)
                .then_with(|| b.views.cmp(&a.views))
        }),
        // ISO-8601 timestamps order correctly as strings.
        SortOption::Newest => filtered.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortOption::PriceLow => filtered.sort_by(|a, b| a.price.cmp(&b.price)),
        SortOption::PriceHigh => filtered.sort_by(|a, b| b.price.cmp(&a.price)),
        SortOption::Rating => filtered.sort_by(|a, b| {
            b.rating.partial_cmp(&a.rating).unwrap_or(Ordering::Equal)
        }),
    }

    filtered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connector::adapter::InMemoryProductCatalog;

    fn products() -> Vec<Product> {
        vec![
            Product::new("p1", "UltraBook Pro", "electronics", "Electronics", 89999)
                .with_rating(4.6)
                .with_views(500)
                .with_created_at("2024-01-10T00:00:00Z"),
            Product::new("p2", "Silk Scarf", "fashion", "Fashion", 1499)
                .with_rating(4.1)
                .with_views(900)
                .trending(true)
                .with_created_at("2024-03-01T00:00:00Z"),
            Product::new("p3", "Noise Buds", "electronics", "Electronics", 2999)
                .with_rating(3.9)
                .with_views(100)
                .trending(true)
                .new_arrival(true)
                .with_created_at("2024-02-15T00:00:00Z"),
        ]
    }

    fn ids(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn default_query_sorts_trending_then_views() {
        let listed = apply_query(products(), &ProductQuery::new());
        assert_eq!(ids(&listed), vec!["p2", "p3", "p1"]);
    }

    #[test]
    fn filters_by_niche_and_flags() {
        let listed = apply_query(products(), &ProductQuery::new().with_niche("electronics"));
        assert_eq!(ids(&listed), vec!["p3", "p1"]);

        let listed = apply_query(products(), &ProductQuery::new().new_arrivals_only());
        assert_eq!(ids(&listed), vec!["p3"]);

        let listed = apply_query(
            products(),
            &ProductQuery::new().trending_only().with_niche("fashion"),
        );
        assert_eq!(ids(&listed), vec!["p2"]);
    }

    #[test]
    fn price_and_rating_bounds_are_inclusive() {
        let query = ProductQuery::new()
            .with_price_range(1499, 2999)
            .with_min_rating(3.9)
            .sorted_by(SortOption::PriceLow);

        let listed = apply_query(products(), &query);
        assert_eq!(ids(&listed), vec!["p2", "p3"]);
    }

    #[test]
    fn supports_every_sort_order() {
        let by = |sort| ids(&apply_query(products(), &ProductQuery::new().sorted_by(sort)))
            .into_iter()
            .map(String::from)
            .collect::<Vec<_>>();

        assert_eq!(by(SortOption::Newest), vec!["p2", "p3", "p1"]);
        assert_eq!(by(SortOption::PriceLow), vec!["p2", "p3", "p1"]);
        assert_eq!(by(SortOption::PriceHigh), vec!["p1", "p3", "p2"]);
        assert_eq!(by(SortOption::Rating), vec!["p1", "p2", "p3"]);
    }

    #[tokio::test]
    async fn get_reports_missing_product() {
        let use_case = BrowseProductsUseCase::new(Arc::new(InMemoryProductCatalog::new(products())));

        assert_eq!(use_case.get("p3").await.unwrap().name, "Noise Buds");
        assert!(use_case.get("nope").await.unwrap_err().is_not_found());
    }
}
