use clap::Subcommand;

/// Root URL of a locally running `storefront serve`.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:3000";

#[derive(Subcommand)]
pub enum Commands {
    /// Run the storefront HTTP API (chat assistant and catalog)
    Serve {
        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// Bind to 0.0.0.0 instead of 127.0.0.1, exposing the server on all network interfaces
        #[arg(long)]
        public: bool,
    },

    /// Ask the shopping assistant a single question
    Ask {
        message: String,

        #[arg(long, default_value = DEFAULT_ENDPOINT)]
        endpoint: String,
    },

    /// Chat with the shopping assistant interactively
    Chat {
        #[arg(long, default_value = DEFAULT_ENDPOINT)]
        endpoint: String,
    },

    /// List catalog products
    Products {
        /// Niche id, or "all"
        #[arg(short, long)]
        niche: Option<String>,

        #[arg(long)]
        trending: bool,

        /// Only new arrivals
        #[arg(long = "new")]
        new_arrivals: bool,

        #[arg(long)]
        min_price: Option<u64>,

        #[arg(long)]
        max_price: Option<u64>,

        #[arg(long)]
        min_rating: Option<f32>,

        /// trending, newest, price-low, price-high or rating
        #[arg(short, long, default_value = "trending")]
        sort: String,
    },

    /// Show one product
    Product { id: String },

    /// List niches
    Niches,

    /// Manage the local wishlist
    Wishlist {
        #[command(subcommand)]
        action: WishlistAction,
    },
}

#[derive(Subcommand)]
pub enum WishlistAction {
    List,
    Add { product_id: String },
    Remove { product_id: String },
    Toggle { product_id: String },
    Clear,
}
