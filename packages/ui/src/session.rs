//! Session context and hooks for the UI.
//!
//! [`SessionProvider`] builds the shared [`api::ApiClient`] and
//! [`AppSession`] once, hydrates the persisted session before the first
//! render, and exposes both through context. Components read the reactive
//! snapshot via [`use_session`] and call the async operations on
//! [`SessionContext`], which keep the snapshot signal in step with the
//! manager after every mutation.

use api::{ApiClient, ApiError, ProfileUpdate, RegistrationForm, Session, UserProfile};
use dioxus::prelude::*;

use crate::platform::{make_client, make_session_manager, AppSession};

/// Session state plus the operations that mutate it.
#[derive(Clone)]
pub struct SessionContext {
    pub manager: AppSession,
    pub client: ApiClient,
    pub state: Signal<Session>,
}

impl SessionContext {
    pub fn is_authenticated(&self) -> bool {
        self.state.read().is_authenticated()
    }

    pub fn current_user(&self) -> Option<UserProfile> {
        self.state.read().user().cloned()
    }

    pub async fn login(&self, username: String, password: String) -> Result<(), ApiError> {
        let result = self.manager.login(&username, &password).await;
        self.sync_state();
        result.map(|_| ())
    }

    pub async fn register(&self, form: RegistrationForm) -> Result<(), ApiError> {
        let result = self.manager.register(&form).await;
        self.sync_state();
        result.map(|_| ())
    }

    pub fn logout(&self) {
        self.manager.logout();
        self.sync_state();
    }

    pub async fn update_profile(&self, update: ProfileUpdate) -> Result<UserProfile, ApiError> {
        let result = self.manager.update_profile(&update).await;
        self.sync_state();
        result
    }

    fn sync_state(&self) {
        let mut state = self.state;
        state.set(self.manager.session());
    }
}

/// Get the current session context.
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>()
}

/// The shared API client, for calls outside the session's own operations
/// (catalog reads, newsletter, contact).
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>()
}

/// Provider component that manages authentication state.
/// Wrap your app with this component to enable sign-in.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let (client, manager) = use_hook(|| {
        let client = make_client();
        let manager = make_session_manager(&client);
        // Restore a persisted session before anything renders.
        manager.hydrate();
        (client, manager)
    });

    let state = use_signal({
        let manager = manager.clone();
        move || manager.session()
    });

    use_context_provider({
        let client = client.clone();
        move || client
    });
    use_context_provider(move || SessionContext {
        manager,
        client,
        state,
    });

    rsx! {
        {children}
    }
}
