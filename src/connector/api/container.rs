use std::sync::Arc;

use anyhow::Result;
use tracing::{debug, warn};

use crate::application::{CompletionService, ProductCatalog, WishlistRepository};
use crate::{
    BrowseProductsUseCase, ChatAssistantUseCase, GeminiClient, JsonProductCatalog,
    JsonWishlistRepository, MockCompletion, WishlistUseCase,
};

pub struct ContainerConfig {
    /// Directory holding `products.json` and (optionally) `niches.json`.
    pub data_dir: String,
    /// File the CLI wishlist is stored in.
    pub wishlist_path: String,
    /// Answer chat requests with a canned reply instead of calling Gemini.
    pub mock_completion: bool,
}

/// Wires adapters to use cases. Shared by the CLI controllers and, behind an
/// `Arc`, by every HTTP handler.
pub struct Container {
    catalog: Arc<dyn ProductCatalog>,
    completion: Arc<dyn CompletionService>,
    wishlist_repo: Arc<dyn WishlistRepository>,
}

impl Container {
    pub fn new(config: ContainerConfig) -> Result<Self> {
        let catalog = Arc::new(JsonProductCatalog::load(&config.data_dir)?);

        let completion: Arc<dyn CompletionService> = if config.mock_completion {
            debug!("Using mock completion service");
            Arc::new(MockCompletion::new())
        } else {
            let gemini = GeminiClient::from_env();
            if gemini.is_configured() {
                debug!("Using Gemini model {}", gemini.model_name());
            } else {
                warn!("GEMINI_API_KEY is not set; chat requests will fail until it is configured");
            }
            Arc::new(gemini)
        };

        let wishlist_repo = Arc::new(JsonWishlistRepository::new(&config.wishlist_path));

        Ok(Self {
            catalog,
            completion,
            wishlist_repo,
        })
    }

    /// Assemble from ready-made adapters, e.g. in-memory ones in tests.
    pub fn from_parts(
        catalog: Arc<dyn ProductCatalog>,
        completion: Arc<dyn CompletionService>,
        wishlist_repo: Arc<dyn WishlistRepository>,
    ) -> Self {
        Self {
            catalog,
            completion,
            wishlist_repo,
        }
    }

    pub fn chat_use_case(&self) -> ChatAssistantUseCase {
        ChatAssistantUseCase::new(self.catalog.clone(), self.completion.clone())
    }

    pub fn browse_use_case(&self) -> BrowseProductsUseCase {
        BrowseProductsUseCase::new(self.catalog.clone())
    }

    pub fn wishlist_use_case(&self) -> WishlistUseCase {
        WishlistUseCase::new(self.catalog.clone(), self.wishlist_repo.clone())
    }

    pub fn assistant_configured(&self) -> bool {
        self.completion.is_configured()
    }

    pub fn completion_model(&self) -> &str {
        self.completion.model_name()
    }
}
