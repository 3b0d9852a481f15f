use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

pub const DEFAULT_MIN_PRICE: u64 = 0;
pub const DEFAULT_MAX_PRICE: u64 = 500_000;

/// Ordering applied to a product listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOption {
    /// Trending products first, then by view count.
    #[default]
    Trending,
    Newest,
    PriceLow,
    PriceHigh,
    Rating,
}

impl SortOption {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOption::Trending => "trending",
            SortOption::Newest => "newest",
            SortOption::PriceLow => "price-low",
            SortOption::PriceHigh => "price-high",
            SortOption::Rating => "rating",
        }
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOption {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "trending" => Ok(SortOption::Trending),
            "newest" => Ok(SortOption::Newest),
            "price-low" => Ok(SortOption::PriceLow),
            "price-high" => Ok(SortOption::PriceHigh),
            "rating" => Ok(SortOption::Rating),
            other => Err(DomainError::invalid_input(format!(
                "unknown sort option '{other}'"
            ))),
        }
    }
}

/// Filters and ordering for browsing the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductQuery {
    niche_id: Option<String>,
    trending_only: bool,
    new_arrivals_only: bool,
    min_price: u64,
    max_price: u64,
    min_rating: f32,
    sort: SortOption,
}

impl Default for ProductQuery {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductQuery {
    pub fn new() -> Self {
        Self {
            niche_id: None,
            trending_only: false,
            new_arrivals_only: false,
            min_price: DEFAULT_MIN_PRICE,
            max_price: DEFAULT_MAX_PRICE,
            min_rating: 0.0,
            sort: SortOption::default(),
        }
    }

    /// `"all"` clears the niche filter.
    pub fn with_niche(mut self, niche_id: impl Into<String>) -> Self {
        let niche_id = niche_id.into();
        self.niche_id = if niche_id == "all" { None } else { Some(niche_id) };
        self
    }

    pub fn trending_only(mut self) -> Self {
        self.trending_only = true;
        self
    }

    pub fn new_arrivals_only(mut self) -> Self {
        self.new_arrivals_only = true;
        self
    }

    pub fn with_price_range(mut self, min: u64, max: u64) -> Self {
        self.min_price = min;
        self.max_price = max;
        self
    }

    pub fn with_min_rating(mut self, rating: f32) -> Self {
        self.min_rating = rating;
        self
    }

    pub fn sorted_by(mut self, sort: SortOption) -> Self {
        self.sort = sort;
        self
    }

    pub fn niche_id(&self) -> Option<&str> {
        self.niche_id.as_deref()
    }

    pub fn is_trending_only(&self) -> bool {
        self.trending_only
    }

    pub fn is_new_arrivals_only(&self) -> bool {
        self.new_arrivals_only
    }

    pub fn min_price(&self) -> u64 {
        self.min_price
    }

    pub fn max_price(&self) -> u64 {
        self.max_price
    }

    pub fn min_rating(&self) -> f32 {
        self.min_rating
    }

    pub fn sort(&self) -> SortOption {
        self.sort
    }
}
