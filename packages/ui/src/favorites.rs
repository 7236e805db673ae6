//! Favorites context and hooks for the UI.
//!
//! A reactive wrapper over [`api::FavoritesSync`]: the `list` signal mirrors
//! the last confirmed server snapshot (never an optimistic guess), and the
//! `catalog_epoch` signal lets catalog views refetch after a toggle so their
//! favorite badges recompute. Signing in refetches, signing out clears.

use api::{ApiError, Favorite, FavoriteKind, ToggleOutcome};
use dioxus::prelude::*;

use crate::platform::{make_favorites_sync, AppFavorites};
use crate::session::use_session;
use crate::toast::{toast_error, toast_success, Toasts};

#[derive(Clone)]
pub struct FavoritesContext {
    pub sync: AppFavorites,
    pub list: Signal<Vec<Favorite>>,
    pub loading: Signal<bool>,
    pub catalog_epoch: Signal<u64>,
}

impl FavoritesContext {
    /// Membership lookup against the last-fetched list; false while empty
    /// or loading.
    pub fn is_favorite(&self, kind: FavoriteKind, item_id: u32) -> bool {
        self.list
            .read()
            .iter()
            .any(|favorite| favorite.target.matches(kind, item_id))
    }

    /// Fetch the current snapshot into the `list` signal.
    pub async fn refresh(&self) {
        let mut loading = self.loading;
        let mut list = self.list;
        loading.set(true);
        match self.sync.list().await {
            Ok(snapshot) => list.set(snapshot.as_ref().clone()),
            Err(err) => tracing::error!("failed to fetch favorites: {err}"),
        }
        loading.set(false);
    }

    /// Toggle membership and report the outcome as a toast. `title` names
    /// the item in the success message. On success the invalidated list is
    /// refetched immediately; on failure nothing changes.
    pub async fn toggle(
        &self,
        kind: FavoriteKind,
        item_id: u32,
        title: Option<String>,
        toasts: &mut Signal<Toasts>,
    ) -> Result<ToggleOutcome, ApiError> {
        match self.sync.toggle(kind, item_id).await {
            Ok(outcome) => {
                let mut epoch = self.catalog_epoch;
                epoch.set(self.sync.epoch());

                let (action, verb) = match outcome {
                    ToggleOutcome::Added => ("Added to favorites", "added to"),
                    ToggleOutcome::Removed => ("Removed from favorites", "removed from"),
                };
                let description =
                    title.map(|title| format!("{title} has been {verb} your favorites"));
                toast_success(toasts, action, description);

                self.refresh().await;
                Ok(outcome)
            }
            Err(err) => {
                toast_error(
                    toasts,
                    "Failed to update favorite",
                    Some("Please try again later".to_string()),
                );
                Err(err)
            }
        }
    }

    /// Drop everything cached; used when the session ends.
    pub fn clear(&self) {
        self.sync.invalidate();
        let mut list = self.list;
        list.set(Vec::new());
        let mut epoch = self.catalog_epoch;
        epoch.set(self.sync.epoch());
    }
}

/// Get the current favorites context.
pub fn use_favorites() -> FavoritesContext {
    use_context::<FavoritesContext>()
}

/// Provider component that keeps the favorites list in step with the
/// session. Must be nested inside a `SessionProvider`.
#[component]
pub fn FavoritesProvider(children: Element) -> Element {
    let session = use_session();
    let sync = use_hook(|| make_favorites_sync(&session.client, session.manager.handle()));
    let list = use_signal(Vec::new);
    let loading = use_signal(|| false);
    let catalog_epoch = use_signal(|| 0u64);

    let context = use_context_provider(move || FavoritesContext {
        sync,
        list,
        loading,
        catalog_epoch,
    });

    // Refetch on sign-in, clear on sign-out.
    use_effect(move || {
        let authenticated = session.state.read().is_authenticated();
        let context = context.clone();
        if authenticated {
            spawn(async move {
                context.refresh().await;
            });
        } else {
            context.clear();
        }
    });

    rsx! {
        {children}
    }
}
