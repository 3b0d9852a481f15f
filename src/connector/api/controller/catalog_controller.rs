use anyhow::Result;

use crate::domain::{format_price, truncate_text, Niche, Product, ProductQuery};

use super::super::Container;

const DESCRIPTION_PREVIEW_CHARS: usize = 80;

pub struct CatalogController<'a> {
    container: &'a Container,
}

impl<'a> CatalogController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn products(&self, query: ProductQuery) -> Result<String> {
        let use_case = self.container.browse_use_case();
        let products = use_case.execute(&query).await?;
        Ok(self.format_product_list(&products))
    }

    pub async fn product(&self, id: &str) -> Result<String> {
        let use_case = self.container.browse_use_case();
        let product = use_case.get(id).await?;
        Ok(self.format_product_detail(&product))
    }

    pub async fn niches(&self) -> Result<String> {
        let use_case = self.container.browse_use_case();
        let niches = use_case.niches().await?;
        Ok(self.format_niches(&niches))
    }

    fn format_product_list(&self, products: &[Product]) -> String {
        if products.is_empty() {
            return "No products found.".to_string();
        }

        let mut output = format!("{} products found:\n\n", products.len());
        for product in products {
            output.push_str(&format_product_line(product));
            output.push('\n');
            if !product.short_description.is_empty() {
                output.push_str(&format!(
                    "    {}\n",
                    truncate_text(&product.short_description, DESCRIPTION_PREVIEW_CHARS)
                ));
            }
        }

        output
    }

    fn format_product_detail(&self, product: &Product) -> String {
        let mut output = format!("{} ({})\n", product.name, product.id);
        output.push_str(&format!("Niche:   {}\n", product.niche));
        output.push_str(&format!("Slug:    {}\n", product.slug()));

        let mut price_line = format!("Price:   {}", format_price(product.price));
        if let Some(original) = product.original_price {
            let discount = product.discount_percent();
            if discount > 0 {
                price_line.push_str(&format!(" (was {}, {}% off)", format_price(original), discount));
            }
        }
        output.push_str(&price_line);
        output.push('\n');

        output.push_str(&format!(
            "Rating:  {:.1} ({} reviews)\n",
            product.rating, product.review_count
        ));
        if !product.affiliate_url.is_empty() {
            output.push_str(&format!("Buy:     {}\n", product.affiliate_url));
        }
        if !product.full_description.is_empty() {
            output.push_str(&format!("\n{}\n", product.full_description));
        }
        if !product.features.is_empty() {
            output.push_str("\nFeatures:\n");
            for feature in &product.features {
                output.push_str(&format!("  - {}\n", feature));
            }
        }

        output
    }

    fn format_niches(&self, niches: &[Niche]) -> String {
        if niches.is_empty() {
            return "No niches configured.".to_string();
        }

        let mut output = "Niches:\n\n".to_string();
        for niche in niches {
            output.push_str(&format!(
                "  {} ({}) - {} products\n",
                niche.name, niche.id, niche.product_count
            ));
        }
        output
    }
}

/// One-line summary used by every product listing in the CLI.
pub(crate) fn format_product_line(product: &Product) -> String {
    let mut line = format!(
        "  {} [{}] {} - {} ★{:.1}",
        product.name,
        product.id,
        product.niche,
        format_price(product.price),
        product.rating
    );
    if product.trending {
        line.push_str(" (trending)");
    }
    if product.new_arrival {
        line.push_str(" (new)");
    }
    line
}
