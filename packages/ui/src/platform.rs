//! Shared constructors for the client-side state managers.
//!
//! Credential persistence is platform-appropriate:
//! - **Web** (WASM + `web` feature): browser localStorage via [`store::WebStore`]
//! - **Native** (tests, tooling): in-memory via [`store::MemoryStore`]

use api::{ApiClient, ApiConfig, FavoritesSync, SessionHandle, SessionManager};

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformStore = store::WebStore;
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type PlatformStore = store::MemoryStore;

pub type AppSession = SessionManager<PlatformStore, ApiClient>;
pub type AppFavorites = FavoritesSync<ApiClient>;

/// One client for the whole app; clones share the transport's bearer cell.
pub fn make_client() -> ApiClient {
    ApiClient::new(ApiConfig::default())
}

/// Session manager over the platform store, sharing `client`'s transport so
/// credential changes reach every outgoing request.
pub fn make_session_manager(client: &ApiClient) -> AppSession {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    let storage = store::WebStore::new();
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    let storage = store::MemoryStore::new();

    SessionManager::new(client.transport().clone(), storage, client.clone())
}

/// Favorites synchronizer gated on `session`.
pub fn make_favorites_sync(client: &ApiClient, session: SessionHandle) -> AppFavorites {
    FavoritesSync::new(client.clone(), session)
}
