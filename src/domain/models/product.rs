use serde::{Deserialize, Serialize};

use crate::domain::services::{calculate_discount, slugify};

/// A catalog entry as stored in the product fixtures.
///
/// Prices are whole rupees. Field names follow the fixture JSON (camelCase) so a
/// product round-trips through the catalog files and the HTTP API unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub niche_id: String,
    /// Display label of the niche, e.g. `"Electronics"`.
    pub niche: String,
    pub price: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<u64>,
    #[serde(default)]
    pub rating: f32,
    #[serde(default)]
    pub review_count: u32,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub short_description: String,
    #[serde(default)]
    pub full_description: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub affiliate_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    #[serde(default)]
    pub trending: bool,
    #[serde(default)]
    pub new_arrival: bool,
    #[serde(default)]
    pub views: u64,
    #[serde(default)]
    pub clicks: u64,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

impl Product {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        niche_id: impl Into<String>,
        niche: impl Into<String>,
        price: u64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            niche_id: niche_id.into(),
            niche: niche.into(),
            price,
            original_price: None,
            rating: 0.0,
            review_count: 0,
            images: Vec::new(),
            short_description: String::new(),
            full_description: String::new(),
            features: Vec::new(),
            affiliate_url: String::new(),
            video_url: None,
            trending: false,
            new_arrival: false,
            views: 0,
            clicks: 0,
            created_at: String::new(),
            updated_at: String::new(),
        }
    }

    pub fn with_short_description(mut self, text: impl Into<String>) -> Self {
        self.short_description = text.into();
        self
    }

    pub fn with_original_price(mut self, price: u64) -> Self {
        self.original_price = Some(price);
        self
    }

    pub fn with_rating(mut self, rating: f32) -> Self {
        self.rating = rating;
        self
    }

    pub fn with_views(mut self, views: u64) -> Self {
        self.views = views;
        self
    }

    pub fn with_created_at(mut self, created_at: impl Into<String>) -> Self {
        self.created_at = created_at.into();
        self
    }

    pub fn trending(mut self, trending: bool) -> Self {
        self.trending = trending;
        self
    }

    pub fn new_arrival(mut self, new_arrival: bool) -> Self {
        self.new_arrival = new_arrival;
        self
    }

    /// Discount against the original price, as a whole percentage.
    pub fn discount_percent(&self) -> u64 {
        self.original_price
            .map(|original| calculate_discount(original, self.price))
            .unwrap_or(0)
    }

    /// URL-friendly form of the name.
    pub fn slug(&self) -> String {
        slugify(&self.name)
    }

    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    pub fn in_price_range(&self, min: u64, max: u64) -> bool {
        self.price >= min && self.price <= max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_fixture_shape() {
        let json = r#"{
            "id": "prod-001",
            "name": "UltraBook Pro",
            "nicheId": "electronics",
            "niche": "Electronics",
            "price": 89999,
            "originalPrice": 99999,
            "rating": 4.6,
            "reviewCount": 120,
            "images": ["/img/ultrabook.jpg"],
            "shortDescription": "Thin and light laptop",
            "fullDescription": "A long description",
            "features": ["16GB RAM"],
            "affiliateUrl": "https://example.com/a",
            "trending": true,
            "newArrival": false,
            "views": 1500,
            "clicks": 90,
            "createdAt": "2024-01-10T00:00:00Z",
            "updatedAt": "2024-01-12T00:00:00Z"
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();

        assert_eq!(product.niche_id, "electronics");
        assert_eq!(product.original_price, Some(99999));
        assert_eq!(product.primary_image(), Some("/img/ultrabook.jpg"));
        assert!(product.video_url.is_none());
        assert!(product.trending);
    }

    #[test]
    fn omits_absent_optionals_when_serialized() {
        let product = Product::new("p1", "Mug", "home", "Home", 499);
        let value = serde_json::to_value(&product).unwrap();

        assert!(value.get("originalPrice").is_none());
        assert!(value.get("videoUrl").is_none());
        assert_eq!(value["shortDescription"], "");
    }

    #[test]
    fn discount_percent_uses_original_price() {
        let product = Product::new("p1", "Mug", "home", "Home", 750).with_original_price(1000);
        assert_eq!(product.discount_percent(), 25);

        let no_original = Product::new("p2", "Cup", "home", "Home", 750);
        assert_eq!(no_original.discount_percent(), 0);
    }

    #[test]
    fn slug_is_derived_from_name() {
        let product = Product::new("p1", "UltraBook Pro 14", "electronics", "Electronics", 1);
        assert_eq!(product.slug(), "ultrabook-pro-14");
    }
}
