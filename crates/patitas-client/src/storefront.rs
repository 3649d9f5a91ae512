//! # Storefront
//!
//! Wires configuration, storage, the gateway and every service client
//! into one handle. Construct it once and hand out the pieces; all of
//! them are cheap clones sharing the same HTTP client and storage.

use crate::checkout::CheckoutFlow;
use crate::config::ServiceEndpoints;
use crate::favorites::FavoritesStore;
use crate::gateway::ApiGateway;
use crate::services::{
    AnimalService, AuthService, CartService, CatalogService, FormService, OrderService,
};
use crate::session::SessionStore;
use crate::sync::SyncedCart;
use patitas_core::{BoxedStorage, FileStorage, StoreResult};
use std::sync::Arc;
use tracing::info;

/// Default location of the persisted session file
const SESSION_FILE: &str = ".patitas/session.json";

/// The assembled client: session, catalog, cart, animals, forms, orders
#[derive(Clone)]
pub struct Storefront {
    config: ServiceEndpoints,
    storage: BoxedStorage,
    session: SessionStore,
    auth: AuthService,
    catalog: CatalogService,
    cart_service: CartService,
    animals: AnimalService,
    forms: FormService,
    orders: OrderService,
}

impl Storefront {
    /// Assemble a storefront over explicit endpoints and storage
    pub fn new(config: ServiceEndpoints, storage: BoxedStorage) -> Self {
        let gateway = ApiGateway::new(storage.clone());
        let auth = AuthService::new(gateway.clone(), config.auth.clone());
        let session = SessionStore::new(auth.clone(), storage.clone());
        info!("Storefront assembled");

        Self {
            catalog: CatalogService::new(gateway.clone(), config.catalog.clone()),
            cart_service: CartService::new(gateway.clone(), config.cart.clone()),
            animals: AnimalService::new(gateway.clone(), config.animals.clone()),
            forms: FormService::new(gateway.clone(), config.forms.clone()),
            orders: OrderService::new(gateway, config.orders.clone()),
            auth,
            session,
            storage,
            config,
        }
    }

    /// Assemble from `config/services.toml` or the environment, with a
    /// file-backed session store.
    ///
    /// The session file lives at `PATITAS_SESSION_FILE`, defaulting to
    /// `.patitas/session.json` under the working directory.
    pub fn from_env() -> StoreResult<Self> {
        let config = ServiceEndpoints::load()?;
        let path =
            std::env::var("PATITAS_SESSION_FILE").unwrap_or_else(|_| SESSION_FILE.to_string());
        let storage: BoxedStorage = Arc::new(FileStorage::new(path));
        Ok(Self::new(config, storage))
    }

    /// The endpoints this storefront talks to
    pub fn config(&self) -> &ServiceEndpoints {
        &self.config
    }

    /// Login state and account operations
    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Direct auth-service lookups, for admin tooling
    pub fn auth(&self) -> &AuthService {
        &self.auth
    }

    /// Product catalog
    pub fn catalog(&self) -> &CatalogService {
        &self.catalog
    }

    /// Adoptable animals
    pub fn animals(&self) -> &AnimalService {
        &self.animals
    }

    /// Adoption applications
    pub fn forms(&self) -> &FormService {
        &self.forms
    }

    /// Order history and admin order operations
    pub fn orders(&self) -> &OrderService {
        &self.orders
    }

    /// A synchronized cart bound to the current session
    pub fn cart(&self) -> SyncedCart {
        SyncedCart::new(
            Arc::new(self.cart_service.clone()),
            Arc::new(self.session.clone()),
        )
    }

    /// A checkout flow bound to the current session
    pub fn checkout(&self) -> CheckoutFlow {
        CheckoutFlow::new(Arc::new(self.orders.clone()), Arc::new(self.session.clone()))
    }

    /// The current user's locally persisted favorites
    pub fn favorites(&self) -> FavoritesStore {
        FavoritesStore::new(self.storage.clone(), Arc::new(self.session.clone()))
    }
}
