use std::sync::Arc;

use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;

use crate::connector::api::Container;
use crate::connector::http::ApiError;
use crate::domain::{
    DomainError, Niche, Product, ProductQuery, SortOption, DEFAULT_MAX_PRICE, DEFAULT_MIN_PRICE,
};

/// Query string of `GET /api/products`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductListParams {
    pub niche: Option<String>,
    #[serde(default)]
    pub trending: bool,
    #[serde(default)]
    pub new: bool,
    pub min_price: Option<u64>,
    pub max_price: Option<u64>,
    pub min_rating: Option<f32>,
    pub sort: Option<String>,
}

impl TryFrom<ProductListParams> for ProductQuery {
    type Error = DomainError;

    fn try_from(params: ProductListParams) -> Result<Self, Self::Error> {
        let mut query = ProductQuery::new().with_price_range(
            params.min_price.unwrap_or(DEFAULT_MIN_PRICE),
            params.max_price.unwrap_or(DEFAULT_MAX_PRICE),
        );

        if let Some(niche) = params.niche {
            query = query.with_niche(niche);
        }
        if params.trending {
            query = query.trending_only();
        }
        if params.new {
            query = query.new_arrivals_only();
        }
        if let Some(rating) = params.min_rating {
            query = query.with_min_rating(rating);
        }
        if let Some(sort) = params.sort {
            query = query.sorted_by(sort.parse::<SortOption>()?);
        }

        Ok(query)
    }
}

/// `GET /api/products`
pub async fn list_products(
    State(container): State<Arc<Container>>,
    params: Result<Query<ProductListParams>, QueryRejection>,
) -> Result<Json<Vec<Product>>, ApiError> {
    let Query(params) = params.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let query = ProductQuery::try_from(params)?;

    let products = container.browse_use_case().execute(&query).await?;
    Ok(Json(products))
}

/// `GET /api/products/{id}`
pub async fn get_product(
    State(container): State<Arc<Container>>,
    Path(id): Path<String>,
) -> Result<Json<Product>, ApiError> {
    let product = container.browse_use_case().get(&id).await?;
    Ok(Json(product))
}

/// `GET /api/niches`
pub async fn list_niches(
    State(container): State<Arc<Container>>,
) -> Result<Json<Vec<Niche>>, ApiError> {
    let niches = container.browse_use_case().niches().await?;
    Ok(Json(niches))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_params_give_default_query() {
        let query = ProductQuery::try_from(ProductListParams::default()).unwrap();
        assert_eq!(query, ProductQuery::new());
    }

    #[test]
    fn params_map_onto_query() {
        let params = ProductListParams {
            niche: Some("fashion".into()),
            trending: true,
            new: false,
            min_price: Some(100),
            max_price: Some(2000),
            min_rating: Some(4.0),
            sort: Some("price-high".into()),
        };

        let query = ProductQuery::try_from(params).unwrap();

        assert_eq!(query.niche_id(), Some("fashion"));
        assert!(query.is_trending_only());
        assert!(!query.is_new_arrivals_only());
        assert_eq!((query.min_price(), query.max_price()), (100, 2000));
        assert_eq!(query.sort(), SortOption::PriceHigh);
    }

    #[test]
    fn unknown_sort_is_rejected() {
        let params = ProductListParams {
            sort: Some("random".into()),
            ..Default::default()
        };

        assert!(ProductQuery::try_from(params).is_err());
    }
}
