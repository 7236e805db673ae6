//! # Favorites synchronizer — cached list, toggle, membership index
//!
//! [`FavoritesSync`] maintains the signed-in user's favorites and a derived
//! membership lookup. The cached list is a shared snapshot: every reader sees
//! the same `Arc` until the next invalidation, and an invalidation is visible
//! to all current and future readers at once.
//!
//! There is no optimistic mutation. A successful toggle drops the cache and
//! bumps the catalog epoch; [`FavoritesSync::is_favorite`] reflects the new
//! membership only after the next [`FavoritesSync::list`] refetch. A failed
//! toggle leaves the cache untouched.
//!
//! Rapid repeated toggles on the same item are not deduplicated; each call
//! reaches the backend independently and the backend's own idempotency keeps
//! the final state correct. The next refetch observes whichever write landed
//! last.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use crate::error::ApiError;
use crate::models::{Favorite, FavoriteKind, ToggleOutcome};
use crate::session::SessionHandle;

/// Favorites endpoints as the synchronizer needs them.
pub trait FavoritesGateway {
    fn list_favorites(&self) -> impl Future<Output = Result<Vec<Favorite>, ApiError>>;
    fn toggle_favorite(
        &self,
        kind: FavoriteKind,
        item_id: u32,
    ) -> impl Future<Output = Result<ToggleOutcome, ApiError>>;
}

/// Keeps the favorites list consistent with server state after mutations.
#[derive(Clone)]
pub struct FavoritesSync<G> {
    gateway: G,
    session: SessionHandle,
    cache: Arc<Mutex<Option<Arc<Vec<Favorite>>>>>,
    epoch: Arc<AtomicU64>,
}

impl<G: FavoritesGateway> FavoritesSync<G> {
    pub fn new(gateway: G, session: SessionHandle) -> Self {
        Self {
            gateway,
            session,
            cache: Arc::new(Mutex::new(None)),
            epoch: Arc::new(AtomicU64::new(0)),
        }
    }

    /// The cached snapshot, fetching when authenticated and the cache is
    /// cold. Anonymous callers get an empty list immediately, without a
    /// request; any stale cache from a previous session is dropped so a
    /// signed-out client can never observe another session's rows.
    pub async fn list(&self) -> Result<Arc<Vec<Favorite>>, ApiError> {
        if !self.session.is_authenticated() {
            self.cache.lock().unwrap().take();
            return Ok(Arc::new(Vec::new()));
        }
        if let Some(cached) = self.cache.lock().unwrap().clone() {
            return Ok(cached);
        }
        let fetched = Arc::new(self.gateway.list_favorites().await?);
        *self.cache.lock().unwrap() = Some(fetched.clone());
        Ok(fetched)
    }

    /// Flip membership server-side. On success the cached list is dropped
    /// (the next `list` refetches) and the catalog epoch bumps; on failure
    /// cached state is untouched.
    pub async fn toggle(
        &self,
        kind: FavoriteKind,
        item_id: u32,
    ) -> Result<ToggleOutcome, ApiError> {
        let outcome = self.gateway.toggle_favorite(kind, item_id).await?;
        self.invalidate();
        Ok(outcome)
    }

    /// Membership lookup against the last-fetched snapshot. False whenever
    /// the list is unfetched, empty, or the user is anonymous.
    pub fn is_favorite(&self, kind: FavoriteKind, item_id: u32) -> bool {
        match self.cache.lock().unwrap().as_ref() {
            Some(list) => list.iter().any(|fav| fav.target.matches(kind, item_id)),
            None => false,
        }
    }

    /// Drop the snapshot and bump the epoch.
    pub fn invalidate(&self) {
        self.cache.lock().unwrap().take();
        self.epoch.fetch_add(1, Ordering::Relaxed);
    }

    /// Monotone counter bumped on every invalidation. Catalog views watch it
    /// to recompute favorite-state badges.
    pub fn epoch(&self) -> u64 {
        self.epoch.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FavoriteTarget;
    use crate::session::{test_authenticated_session, test_handle, Session};

    #[derive(Clone, Default)]
    struct StubFavorites {
        rows: Arc<Mutex<Vec<Favorite>>>,
        list_calls: Arc<Mutex<u32>>,
        fail_toggle: bool,
    }

    impl StubFavorites {
        fn list_calls(&self) -> u32 {
            *self.list_calls.lock().unwrap()
        }
    }

    impl FavoritesGateway for StubFavorites {
        async fn list_favorites(&self) -> Result<Vec<Favorite>, ApiError> {
            *self.list_calls.lock().unwrap() += 1;
            Ok(self.rows.lock().unwrap().clone())
        }

        async fn toggle_favorite(
            &self,
            kind: FavoriteKind,
            item_id: u32,
        ) -> Result<ToggleOutcome, ApiError> {
            if self.fail_toggle {
                return Err(ApiError::Favorite);
            }
            let mut rows = self.rows.lock().unwrap();
            if let Some(pos) = rows.iter().position(|f| f.target.matches(kind, item_id)) {
                rows.remove(pos);
                Ok(ToggleOutcome::Removed)
            } else {
                rows.push(favorite(kind, item_id));
                Ok(ToggleOutcome::Added)
            }
        }
    }

    fn favorite(kind: FavoriteKind, item_id: u32) -> Favorite {
        let target = match kind {
            FavoriteKind::Destination => FavoriteTarget::Destination(item_id),
            FavoriteKind::Activity => FavoriteTarget::Activity(item_id),
            FavoriteKind::Culture => FavoriteTarget::Culture(item_id),
        };
        Favorite {
            id: item_id,
            target,
            created_at: "2024-05-01T09:00:00Z".to_string(),
            summary: None,
        }
    }

    fn authenticated_sync(stub: StubFavorites) -> FavoritesSync<StubFavorites> {
        FavoritesSync::new(stub, test_handle(test_authenticated_session()))
    }

    #[tokio::test]
    async fn test_anonymous_list_is_empty_without_a_request() {
        let stub = StubFavorites::default();
        stub.rows
            .lock()
            .unwrap()
            .push(favorite(FavoriteKind::Destination, 3));
        let sync = FavoritesSync::new(stub.clone(), test_handle(Session::default()));

        let list = sync.list().await.unwrap();
        assert!(list.is_empty());
        assert_eq!(stub.list_calls(), 0);
        assert!(!sync.is_favorite(FavoriteKind::Destination, 3));
    }

    #[tokio::test]
    async fn test_toggle_twice_adds_then_removes() {
        let stub = StubFavorites::default();
        let sync = authenticated_sync(stub.clone());

        sync.list().await.unwrap();
        assert!(!sync.is_favorite(FavoriteKind::Destination, 3));

        let first = sync.toggle(FavoriteKind::Destination, 3).await.unwrap();
        assert_eq!(first, ToggleOutcome::Added);
        // Not visible until the backing list is refetched.
        assert!(!sync.is_favorite(FavoriteKind::Destination, 3));

        sync.list().await.unwrap();
        assert!(sync.is_favorite(FavoriteKind::Destination, 3));

        let second = sync.toggle(FavoriteKind::Destination, 3).await.unwrap();
        assert_eq!(second, ToggleOutcome::Removed);

        sync.list().await.unwrap();
        assert!(!sync.is_favorite(FavoriteKind::Destination, 3));
    }

    #[tokio::test]
    async fn test_is_favorite_false_on_empty_list() {
        let sync = authenticated_sync(StubFavorites::default());

        sync.list().await.unwrap();
        assert!(!sync.is_favorite(FavoriteKind::Destination, 1));
        assert!(!sync.is_favorite(FavoriteKind::Activity, 99));
        assert!(!sync.is_favorite(FavoriteKind::Culture, 0));
    }

    #[tokio::test]
    async fn test_list_snapshot_is_shared_until_invalidation() {
        let stub = StubFavorites::default();
        let sync = authenticated_sync(stub.clone());

        sync.list().await.unwrap();
        sync.list().await.unwrap();
        assert_eq!(stub.list_calls(), 1);

        sync.invalidate();
        sync.list().await.unwrap();
        assert_eq!(stub.list_calls(), 2);
    }

    #[tokio::test]
    async fn test_toggle_failure_leaves_cache_untouched() {
        let stub = StubFavorites {
            fail_toggle: true,
            ..StubFavorites::default()
        };
        stub.rows
            .lock()
            .unwrap()
            .push(favorite(FavoriteKind::Activity, 5));
        let sync = authenticated_sync(stub);

        sync.list().await.unwrap();
        assert!(sync.is_favorite(FavoriteKind::Activity, 5));
        let before = sync.epoch();

        let err = sync.toggle(FavoriteKind::Activity, 5).await.unwrap_err();
        assert_eq!(err, ApiError::Favorite);
        assert!(sync.is_favorite(FavoriteKind::Activity, 5));
        assert_eq!(sync.epoch(), before);
    }

    #[tokio::test]
    async fn test_epoch_bumps_on_each_successful_toggle() {
        let sync = authenticated_sync(StubFavorites::default());
        let start = sync.epoch();

        sync.toggle(FavoriteKind::Culture, 2).await.unwrap();
        sync.toggle(FavoriteKind::Culture, 2).await.unwrap();
        assert_eq!(sync.epoch(), start + 2);
    }

    #[tokio::test]
    async fn test_signing_out_drops_the_stale_cache() {
        let stub = StubFavorites::default();
        stub.rows
            .lock()
            .unwrap()
            .push(favorite(FavoriteKind::Destination, 3));
        let handle = test_handle(test_authenticated_session());
        let sync = FavoritesSync::new(stub, handle.clone());

        sync.list().await.unwrap();
        assert!(sync.is_favorite(FavoriteKind::Destination, 3));

        handle.test_set(Session::default());
        let list = sync.list().await.unwrap();
        assert!(list.is_empty());
        assert!(!sync.is_favorite(FavoriteKind::Destination, 3));
    }
}
