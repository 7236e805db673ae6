//! # API crate — client core for the Maravilla tourism site
//!
//! This crate is the backbone of the client. It owns everything that talks to
//! the remote backend and everything stateful that the UI layers wrap in
//! signals: the HTTP transport, the wire models, the session manager, and the
//! favorites synchronizer. It knows nothing about any UI framework.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | Backend base URL, with a compile-time override |
//! | [`transport`] | HTTP transport with bearer-header injection and error-body decoding |
//! | [`error`] | The public error taxonomy ([`ApiError`]) |
//! | [`models`] | Catalog entities, identity record, favorites, wire shapes |
//! | [`client`] | [`ApiClient`] — typed methods for every backend endpoint |
//! | [`session`] | [`SessionManager`] — login/register/logout/profile, persistence, hydration |
//! | [`favorites`] | [`FavoritesSync`] — cached favorites list, toggle, membership index |
//! | [`newsletter`] | Subscribe-with-fallback and soft-404 unsubscribe flows |
//!
//! The stateful subsystems are generic over small gateway traits
//! ([`AuthGateway`], [`FavoritesGateway`], [`NewsletterGateway`]) so their
//! behavior is exercised in tests against scripted stubs; [`ApiClient`]
//! implements all three against the real backend.

pub mod client;
pub mod config;
pub mod error;
pub mod favorites;
pub mod models;
pub mod newsletter;
pub mod session;
pub mod transport;

pub use client::ApiClient;
pub use config::ApiConfig;
pub use error::ApiError;
pub use favorites::{FavoritesGateway, FavoritesSync};
pub use models::{
    Activity, Category, Contact, ContactMessage, Culture, Destination, Event, Favorite,
    FavoriteKind, FavoriteTarget, ItemSummary, Subscriber, ToggleOutcome, UserProfile,
};
pub use newsletter::{
    subscribe_with_fallback, unsubscribe, NewsletterGateway, SubscribeOutcome, UnsubscribeOutcome,
};
pub use session::{
    AuthGateway, ProfileUpdate, RegistrationForm, Session, SessionHandle, SessionManager,
    TokenGrant,
};
pub use transport::Transport;
