//! # Credential storage — persisted session state
//!
//! The session survives page reloads through three independent string keys
//! ([`ACCESS_TOKEN_KEY`], [`REFRESH_TOKEN_KEY`], [`USER_KEY`]). The three are
//! always written and cleared together; the presence of the access-token key
//! is the only signal consulted when rehydrating a session at startup.
//!
//! [`CredentialStore`] is deliberately synchronous: browser `localStorage` is
//! a synchronous API, and keeping the trait synchronous lets the session
//! manager persist credentials in the same tick that it mutates its in-memory
//! state, so a crash can never leave memory ahead of storage.
//!
//! Implementations live in sibling modules: [`MemoryStore`] for native
//! targets and tests, and `WebStore` (web platform) backed by
//! `window.localStorage`.

mod memory;
pub use memory::MemoryStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod web;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use web::WebStore;

/// Storage key for the bearer access token.
pub const ACCESS_TOKEN_KEY: &str = "accessToken";
/// Storage key for the refresh token (retained, never consumed).
pub const REFRESH_TOKEN_KEY: &str = "refreshToken";
/// Storage key for the JSON-serialized identity record.
pub const USER_KEY: &str = "user";

/// Synchronous string key-value storage for session credentials.
pub trait CredentialStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}
