use anyhow::Result;

use crate::domain::{ProductQuery, SortOption, DEFAULT_MAX_PRICE, DEFAULT_MIN_PRICE};
use crate::{Commands, WishlistAction};

use super::container::Container;
use super::controller::{CatalogController, WishlistController};

pub struct Router<'a> {
    catalog_controller: CatalogController<'a>,
    wishlist_controller: WishlistController<'a>,
}

impl<'a> Router<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self {
            catalog_controller: CatalogController::new(container),
            wishlist_controller: WishlistController::new(container),
        }
    }

    pub async fn route(&self, command: Commands) -> Result<String> {
        match command {
            Commands::Products {
                niche,
                trending,
                new_arrivals,
                min_price,
                max_price,
                min_rating,
                sort,
            } => {
                let mut query = ProductQuery::new()
                    .with_price_range(
                        min_price.unwrap_or(DEFAULT_MIN_PRICE),
                        max_price.unwrap_or(DEFAULT_MAX_PRICE),
                    )
                    .sorted_by(sort.parse::<SortOption>()?);

                if let Some(niche) = niche {
                    query = query.with_niche(niche);
                }
                if trending {
                    query = query.trending_only();
                }
                if new_arrivals {
                    query = query.new_arrivals_only();
                }
                if let Some(rating) = min_rating {
                    query = query.with_min_rating(rating);
                }

                self.catalog_controller.products(query).await
            }
            Commands::Product { id } => self.catalog_controller.product(&id).await,
            Commands::Niches => self.catalog_controller.niches().await,
            Commands::Wishlist { action } => match action {
                WishlistAction::List => self.wishlist_controller.list().await,
                WishlistAction::Add { product_id } => self.wishlist_controller.add(&product_id).await,
                WishlistAction::Remove { product_id } => {
                    self.wishlist_controller.remove(&product_id).await
                }
                WishlistAction::Toggle { product_id } => {
                    self.wishlist_controller.toggle(&product_id).await
                }
                WishlistAction::Clear => self.wishlist_controller.clear().await,
            },
            Commands::Serve { .. } | Commands::Ask { .. } | Commands::Chat { .. } => {
                unreachable!("serve and the chat client are handled in main")
            }
        }
    }
}
