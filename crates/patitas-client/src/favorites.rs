//! # Favorites Store
//!
//! Per-user favorite products, persisted locally under a key scoped by
//! user id so switching accounts never mixes lists. Favorites never
//! touch the network.

use patitas_core::{favorites_key, BoxedIdentityResolver, BoxedStorage, StoreError, StoreResult};
use tracing::{debug, warn};

/// Locally persisted favorite product ids for the signed-in user
#[derive(Clone)]
pub struct FavoritesStore {
    storage: BoxedStorage,
    identity: BoxedIdentityResolver,
}

impl FavoritesStore {
    /// Create a favorites store over the given storage and identity
    pub fn new(storage: BoxedStorage, identity: BoxedIdentityResolver) -> Self {
        Self { storage, identity }
    }

    /// Favorite product ids of the current user. Empty when signed out
    /// or when the stored list cannot be read.
    pub fn favorites(&self) -> Vec<i64> {
        let Some(user_id) = self.identity.current_user_id() else {
            return Vec::new();
        };
        let raw = match self.storage.get(&favorites_key(user_id)) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!("Failed to read favorites: {e}");
                return Vec::new();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(ids) => ids,
            Err(e) => {
                warn!("Discarding corrupt favorites list: {e}");
                Vec::new()
            }
        }
    }

    /// Whether one product is in the current user's favorites
    pub fn is_favorite(&self, product_id: i64) -> bool {
        self.favorites().contains(&product_id)
    }

    /// Number of favorites for the current user
    pub fn count(&self) -> usize {
        self.favorites().len()
    }

    /// Flip a product in or out of the favorites list, answering with
    /// whether it is a favorite afterwards. Signed out, this is a no-op.
    pub fn toggle(&self, product_id: i64) -> StoreResult<bool> {
        let Some(user_id) = self.identity.current_user_id() else {
            debug!("Ignoring favorite toggle without a session");
            return Ok(false);
        };

        let mut ids = self.favorites();
        let now_favorite = if let Some(pos) = ids.iter().position(|&id| id == product_id) {
            ids.remove(pos);
            false
        } else {
            ids.push(product_id);
            true
        };

        let json =
            serde_json::to_string(&ids).map_err(|e| StoreError::Storage(e.to_string()))?;
        self.storage.set(&favorites_key(user_id), &json)?;
        Ok(now_favorite)
    }
}
