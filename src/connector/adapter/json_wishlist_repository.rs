use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::application::WishlistRepository;
use crate::domain::{DomainError, Wishlist};

pub const WISHLIST_FILE: &str = "wishlist.json";

/// Stores the wishlist as a JSON array of products in a single file.
///
/// A missing file is an empty wishlist. So is a corrupt one: it is logged and
/// overwritten on the next save.
pub struct JsonWishlistRepository {
    path: PathBuf,
}

impl JsonWishlistRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<data_dir>/wishlist.json`
    pub fn in_dir(data_dir: impl AsRef<Path>) -> Self {
        Self::new(data_dir.as_ref().join(WISHLIST_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl WishlistRepository for JsonWishlistRepository {
    async fn load(&self) -> Result<Wishlist, DomainError> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No wishlist at {}, starting empty", self.path.display());
                return Ok(Wishlist::new());
            }
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_str(&raw) {
            Ok(wishlist) => Ok(wishlist),
            Err(e) => {
                warn!("Failed to parse wishlist at {}: {}", self.path.display(), e);
                Ok(Wishlist::new())
            }
        }
    }

    async fn save(&self, wishlist: &Wishlist) -> Result<(), DomainError> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let json = serde_json::to_string_pretty(wishlist)
            .map_err(|e| DomainError::storage(format!("Failed to encode wishlist: {}", e)))?;
        tokio::fs::write(&self.path, json).await?;
        Ok(())
    }
}
