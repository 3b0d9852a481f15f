use anyhow::Result;

use super::super::Container;
use super::catalog_controller::format_product_line;

pub struct WishlistController<'a> {
    container: &'a Container,
}

impl<'a> WishlistController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn list(&self) -> Result<String> {
        let products = self.container.wishlist_use_case().list().await?;
        if products.is_empty() {
            return Ok("Your wishlist is empty.".to_string());
        }

        let mut output = format!("Wishlist ({} items):\n\n", products.len());
        for product in &products {
            output.push_str(&format_product_line(product));
            output.push('\n');
        }
        Ok(output)
    }

    pub async fn add(&self, product_id: &str) -> Result<String> {
        let added = self.container.wishlist_use_case().add(product_id).await?;
        Ok(if added {
            format!("Added {} to your wishlist.", product_id)
        } else {
            format!("{} is already on your wishlist.", product_id)
        })
    }

    pub async fn remove(&self, product_id: &str) -> Result<String> {
        let removed = self.container.wishlist_use_case().remove(product_id).await?;
        Ok(if removed {
            format!("Removed {} from your wishlist.", product_id)
        } else {
            format!("{} was not on your wishlist.", product_id)
        })
    }

    pub async fn toggle(&self, product_id: &str) -> Result<String> {
        let saved = self.container.wishlist_use_case().toggle(product_id).await?;
        Ok(if saved {
            format!("Added {} to your wishlist.", product_id)
        } else {
            format!("Removed {} from your wishlist.", product_id)
        })
    }

    pub async fn clear(&self) -> Result<String> {
        self.container.wishlist_use_case().clear().await?;
        Ok("Wishlist cleared.".to_string())
    }
}
