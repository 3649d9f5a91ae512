//! # Identity Resolution
//!
//! The cart and checkout components never reach into ambient session
//! state; they take an identity accessor at construction time. The
//! session store implements this trait for real use, `FixedIdentity`
//! covers tests and embedding.

use std::sync::Arc;

/// Resolves the signed-in user's id, if any. A synchronous lookup over
/// already-persisted state, never a network call.
pub trait IdentityResolver: Send + Sync {
    /// The current user id, or `None` when no session exists
    fn current_user_id(&self) -> Option<i64>;
}

/// Type alias for a shared identity resolver (dynamic dispatch)
pub type BoxedIdentityResolver = Arc<dyn IdentityResolver>;

/// An identity pinned at construction time
#[derive(Debug, Clone, Copy)]
pub struct FixedIdentity {
    user_id: Option<i64>,
}

impl FixedIdentity {
    /// Resolver that always reports the given user
    pub fn user(user_id: i64) -> Self {
        Self {
            user_id: Some(user_id),
        }
    }

    /// Resolver that always reports no session
    pub fn anonymous() -> Self {
        Self { user_id: None }
    }
}

impl IdentityResolver for FixedIdentity {
    fn current_user_id(&self) -> Option<i64> {
        self.user_id
    }
}
