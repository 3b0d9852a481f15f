pub mod application;
pub mod cli;
pub mod connector;
pub mod domain;

pub use application::{
    BrowseProductsUseCase, ChatAssistantUseCase, ChatSession, ChatTransport, CompletionService,
    Conversation, ProductCatalog, WishlistRepository, WishlistUseCase, FALLBACK_REPLY,
    WELCOME_MESSAGE,
};

pub use cli::{Commands, WishlistAction};

pub use connector::{
    GeminiClient, HttpChatTransport, InMemoryProductCatalog, JsonProductCatalog,
    JsonWishlistRepository, MockCompletion,
};

pub use domain::{
    ChatMessage, ChatReply, ChatRequest, ChatRole, DomainError, Niche, Product, ProductQuery,
    SortOption, Wishlist,
};
