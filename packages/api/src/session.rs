//! # Session manager — identity, credentials, persistence
//!
//! [`SessionManager`] owns the [`Session`] and everything that must move with
//! it: the three persisted storage keys, and the transport's bearer cell. It
//! is generic over [`store::CredentialStore`] (persistence) and
//! [`AuthGateway`] (the auth endpoints), so its behavior is exercised in
//! tests against an in-memory store and a scripted gateway.
//!
//! Two states exist: anonymous and authenticated. `login`/`register` move
//! anonymous → authenticated, `logout` moves back (and is a no-op when
//! already anonymous). There is no credential-refresh transition; the refresh
//! token is stored but never consumed.
//!
//! Invariant: the identity record and the access token are set and cleared
//! together, and persisted storage is written before in-memory state, so an
//! interrupted mutation can never leave memory ahead of storage.
//!
//! Mutations issued concurrently apply in the order their network calls
//! resolve, not the order they were invoked. A `logout` racing an in-flight
//! `login` can land either way; nothing here sequences them.

use std::future::Future;
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};
use store::{CredentialStore, ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY, USER_KEY};

use crate::error::ApiError;
use crate::models::UserProfile;
use crate::transport::Transport;

/// Token endpoint response: both credentials plus the identity fields.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TokenGrant {
    pub access: String,
    pub refresh: String,
    pub user_id: u32,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

/// Registration request body.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RegistrationForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub password_confirm: String,
    pub first_name: String,
    pub last_name: String,
}

/// Partial identity fields, used both as the PATCH body and as the echoed
/// response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// The client's record of whether a user is signed in and which credential
/// to present.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    user: Option<UserProfile>,
    access: Option<String>,
    refresh: Option<String>,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.access.is_some()
    }

    pub fn user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }

    pub fn access(&self) -> Option<&str> {
        self.access.as_deref()
    }

    pub fn refresh(&self) -> Option<&str> {
        self.refresh.as_deref()
    }

    fn from_grant(grant: TokenGrant) -> Self {
        Self {
            user: Some(UserProfile {
                id: grant.user_id,
                username: grant.username,
                email: grant.email,
                first_name: grant.first_name,
                last_name: grant.last_name,
            }),
            access: Some(grant.access),
            refresh: Some(grant.refresh),
        }
    }
}

/// Auth endpoints as the session manager needs them.
pub trait AuthGateway {
    fn login(
        &self,
        username: &str,
        password: &str,
    ) -> impl Future<Output = Result<TokenGrant, ApiError>>;
    fn register(&self, form: &RegistrationForm) -> impl Future<Output = Result<(), ApiError>>;
    fn update_profile(
        &self,
        update: &ProfileUpdate,
    ) -> impl Future<Output = Result<ProfileUpdate, ApiError>>;
}

/// Cheap shared view of the current session, for collaborators that only
/// need the authentication gate.
#[derive(Clone, Debug, Default)]
pub struct SessionHandle(Arc<Mutex<Session>>);

impl SessionHandle {
    pub fn snapshot(&self) -> Session {
        self.0.lock().unwrap().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.0.lock().unwrap().is_authenticated()
    }

    pub fn current_user(&self) -> Option<UserProfile> {
        self.0.lock().unwrap().user.clone()
    }
}

/// Owns the session and its persistence; configures the shared transport's
/// credential header.
#[derive(Clone)]
pub struct SessionManager<S, G> {
    transport: Transport,
    storage: S,
    gateway: G,
    state: SessionHandle,
}

impl<S: CredentialStore, G: AuthGateway> SessionManager<S, G> {
    pub fn new(transport: Transport, storage: S, gateway: G) -> Self {
        Self {
            transport,
            storage,
            gateway,
            state: SessionHandle::default(),
        }
    }

    /// Shared view for collaborators gated on authentication.
    pub fn handle(&self) -> SessionHandle {
        self.state.clone()
    }

    pub fn session(&self) -> Session {
        self.state.snapshot()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.is_authenticated()
    }

    pub fn current_user(&self) -> Option<UserProfile> {
        self.state.current_user()
    }

    /// Restore a persisted session. Called once at startup; the presence of
    /// the access-token key is the only authentication signal consulted.
    pub fn hydrate(&self) {
        let Some(access) = self.storage.get(ACCESS_TOKEN_KEY) else {
            return;
        };
        let user = self
            .storage
            .get(USER_KEY)
            .and_then(|json| serde_json::from_str::<UserProfile>(&json).ok());
        let Some(user) = user else {
            // Half-written record: treat as signed out.
            self.storage.remove(ACCESS_TOKEN_KEY);
            self.storage.remove(REFRESH_TOKEN_KEY);
            self.storage.remove(USER_KEY);
            return;
        };
        let refresh = self.storage.get(REFRESH_TOKEN_KEY);

        self.transport.set_bearer(&access);
        *self.state.0.lock().unwrap() = Session {
            user: Some(user),
            access: Some(access),
            refresh,
        };
    }

    /// Exchange credentials for a session. On failure the session is left
    /// unchanged and the error carries the server's `detail` when present.
    pub async fn login(&self, username: &str, password: &str) -> Result<Session, ApiError> {
        let grant = self.gateway.login(username, password).await?;
        Ok(self.install(Session::from_grant(grant)))
    }

    /// Create an account, then sign in with the same credentials. If account
    /// creation succeeds but the sign-in fails, the account exists
    /// server-side while this client stays anonymous.
    pub async fn register(&self, form: &RegistrationForm) -> Result<Session, ApiError> {
        self.gateway.register(form).await?;
        self.login(&form.username, &form.password).await
    }

    /// Drop the session, the persisted record, and the transport credential.
    /// Never fails; a no-op when already anonymous.
    pub fn logout(&self) {
        self.install(Session::default());
    }

    /// Patch the identity record and merge the echoed fields into the
    /// session. Requires an authenticated session as a precondition.
    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<UserProfile, ApiError> {
        if !self.is_authenticated() {
            return Err(ApiError::Profile("Not signed in.".to_string()));
        }
        let echoed = self.gateway.update_profile(update).await?;

        let Some(mut user) = self.state.current_user() else {
            // The session was dropped while the request was in flight.
            return Err(ApiError::Profile("Not signed in.".to_string()));
        };
        if let Some(first_name) = echoed.first_name {
            user.first_name = first_name;
        }
        if let Some(last_name) = echoed.last_name {
            user.last_name = last_name;
        }
        if let Some(email) = echoed.email {
            user.email = email;
        }

        if let Ok(json) = serde_json::to_string(&user) {
            self.storage.set(USER_KEY, &json);
        }
        if let Some(current) = self.state.0.lock().unwrap().user.as_mut() {
            *current = user.clone();
        }
        Ok(user)
    }

    /// Swap in a new session: storage first, then the transport header, then
    /// memory.
    fn install(&self, session: Session) -> Session {
        self.persist(&session);
        match session.access() {
            Some(token) => self.transport.set_bearer(token),
            None => self.transport.clear_bearer(),
        }
        *self.state.0.lock().unwrap() = session.clone();
        session
    }

    fn persist(&self, session: &Session) {
        match (&session.access, &session.user) {
            (Some(access), Some(user)) => {
                self.storage.set(ACCESS_TOKEN_KEY, access);
                match &session.refresh {
                    Some(refresh) => self.storage.set(REFRESH_TOKEN_KEY, refresh),
                    None => self.storage.remove(REFRESH_TOKEN_KEY),
                }
                if let Ok(json) = serde_json::to_string(user) {
                    self.storage.set(USER_KEY, &json);
                }
            }
            _ => {
                self.storage.remove(ACCESS_TOKEN_KEY);
                self.storage.remove(REFRESH_TOKEN_KEY);
                self.storage.remove(USER_KEY);
            }
        }
    }
}

#[cfg(test)]
pub(crate) fn test_handle(session: Session) -> SessionHandle {
    SessionHandle(Arc::new(Mutex::new(session)))
}

#[cfg(test)]
pub(crate) fn test_authenticated_session() -> Session {
    Session {
        user: Some(UserProfile {
            id: 1,
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            first_name: "Alice".to_string(),
            last_name: "Reyes".to_string(),
        }),
        access: Some("access-token".to_string()),
        refresh: Some("refresh-token".to_string()),
    }
}

#[cfg(test)]
impl SessionHandle {
    pub(crate) fn test_set(&self, session: Session) {
        *self.0.lock().unwrap() = session;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;
    use store::MemoryStore;

    #[derive(Clone)]
    struct StubAuth {
        login: Result<TokenGrant, ApiError>,
        register: Result<(), ApiError>,
        profile: Result<ProfileUpdate, ApiError>,
        calls: Arc<Mutex<Vec<&'static str>>>,
    }

    impl Default for StubAuth {
        fn default() -> Self {
            Self {
                login: Ok(grant()),
                register: Ok(()),
                profile: Ok(ProfileUpdate::default()),
                calls: Arc::new(Mutex::new(Vec::new())),
            }
        }
    }

    impl StubAuth {
        fn calls(&self) -> Vec<&'static str> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl AuthGateway for StubAuth {
        async fn login(&self, _username: &str, _password: &str) -> Result<TokenGrant, ApiError> {
            self.calls.lock().unwrap().push("login");
            self.login.clone()
        }

        async fn register(&self, _form: &RegistrationForm) -> Result<(), ApiError> {
            self.calls.lock().unwrap().push("register");
            self.register.clone()
        }

        async fn update_profile(&self, _update: &ProfileUpdate) -> Result<ProfileUpdate, ApiError> {
            self.calls.lock().unwrap().push("update_profile");
            self.profile.clone()
        }
    }

    fn grant() -> TokenGrant {
        TokenGrant {
            access: "access-token".to_string(),
            refresh: "refresh-token".to_string(),
            user_id: 1,
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            first_name: "Alice".to_string(),
            last_name: "Reyes".to_string(),
        }
    }

    fn manager(stub: StubAuth) -> (SessionManager<MemoryStore, StubAuth>, MemoryStore) {
        let storage = MemoryStore::new();
        let manager = SessionManager::new(
            Transport::new(ApiConfig::new("https://example.test/api")),
            storage.clone(),
            stub,
        );
        (manager, storage)
    }

    fn assert_pairing(session: &Session) {
        assert_eq!(session.user().is_some(), session.access().is_some());
    }

    #[tokio::test]
    async fn test_login_installs_session_storage_and_bearer() {
        let (manager, storage) = manager(StubAuth::default());

        let session = manager.login("alice", "secret").await.unwrap();
        assert!(session.is_authenticated());
        assert_pairing(&session);
        assert_eq!(session.user().unwrap().username, "alice");

        assert_eq!(storage.get(ACCESS_TOKEN_KEY).as_deref(), Some("access-token"));
        assert_eq!(storage.get(REFRESH_TOKEN_KEY).as_deref(), Some("refresh-token"));
        let persisted: UserProfile =
            serde_json::from_str(&storage.get(USER_KEY).unwrap()).unwrap();
        assert_eq!(persisted.username, "alice");

        assert_eq!(manager.transport.bearer().as_deref(), Some("access-token"));
    }

    #[tokio::test]
    async fn test_login_failure_leaves_session_anonymous() {
        let stub = StubAuth {
            login: Err(ApiError::Auth(
                "No active account found with the given credentials".to_string(),
            )),
            ..StubAuth::default()
        };
        let (manager, storage) = manager(stub);

        let err = manager.login("alice", "wrong").await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "No active account found with the given credentials"
        );

        assert!(!manager.is_authenticated());
        assert_pairing(&manager.session());
        assert!(storage.get(ACCESS_TOKEN_KEY).is_none());
        assert!(manager.transport.bearer().is_none());
    }

    #[tokio::test]
    async fn test_login_then_logout_clears_everything() {
        let (manager, storage) = manager(StubAuth::default());

        manager.login("alice", "secret").await.unwrap();
        manager.logout();

        let session = manager.session();
        assert!(!session.is_authenticated());
        assert_pairing(&session);
        assert!(storage.get(ACCESS_TOKEN_KEY).is_none());
        assert!(storage.get(REFRESH_TOKEN_KEY).is_none());
        assert!(storage.get(USER_KEY).is_none());
        assert!(manager.transport.bearer().is_none());
    }

    #[tokio::test]
    async fn test_logout_when_anonymous_is_a_noop() {
        let (manager, storage) = manager(StubAuth::default());

        manager.logout();
        assert!(!manager.is_authenticated());
        assert!(storage.get(ACCESS_TOKEN_KEY).is_none());
    }

    #[tokio::test]
    async fn test_register_logs_in_with_same_credentials() {
        let stub = StubAuth::default();
        let (manager, _storage) = manager(stub.clone());

        let form = RegistrationForm {
            username: "alice".to_string(),
            password: "secret".to_string(),
            ..RegistrationForm::default()
        };
        let session = manager.register(&form).await.unwrap();

        assert!(session.is_authenticated());
        assert_eq!(stub.calls(), vec!["register", "login"]);
    }

    #[tokio::test]
    async fn test_register_validation_error_names_the_field() {
        let stub = StubAuth {
            register: Err(ApiError::Validation(
                "username: A user with that username already exists.".to_string(),
            )),
            ..StubAuth::default()
        };
        let (manager, _storage) = manager(stub.clone());

        let err = manager
            .register(&RegistrationForm::default())
            .await
            .unwrap_err();
        assert!(err.to_string().contains("username"));

        // No login attempt after a failed creation.
        assert_eq!(stub.calls(), vec!["register"]);
        assert!(!manager.is_authenticated());
    }

    #[tokio::test]
    async fn test_register_succeeds_but_login_fails() {
        let stub = StubAuth {
            login: Err(ApiError::Auth("token endpoint unavailable".to_string())),
            ..StubAuth::default()
        };
        let (manager, storage) = manager(stub.clone());

        let err = manager
            .register(&RegistrationForm::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Auth(_)));

        // The account was created server-side, yet this client stays
        // anonymous with nothing persisted.
        assert_eq!(stub.calls(), vec!["register", "login"]);
        assert!(!manager.is_authenticated());
        assert!(storage.get(ACCESS_TOKEN_KEY).is_none());
    }

    #[tokio::test]
    async fn test_update_profile_merges_and_persists() {
        let stub = StubAuth {
            profile: Ok(ProfileUpdate {
                first_name: Some("Alicia".to_string()),
                email: Some("alicia@example.com".to_string()),
                ..ProfileUpdate::default()
            }),
            ..StubAuth::default()
        };
        let (manager, storage) = manager(stub);

        manager.login("alice", "secret").await.unwrap();
        let user = manager
            .update_profile(&ProfileUpdate {
                first_name: Some("Alicia".to_string()),
                email: Some("alicia@example.com".to_string()),
                ..ProfileUpdate::default()
            })
            .await
            .unwrap();

        assert_eq!(user.first_name, "Alicia");
        assert_eq!(user.email, "alicia@example.com");
        // Untouched field survives the merge.
        assert_eq!(user.last_name, "Reyes");

        let persisted: UserProfile =
            serde_json::from_str(&storage.get(USER_KEY).unwrap()).unwrap();
        assert_eq!(persisted.first_name, "Alicia");
        assert_eq!(manager.current_user().unwrap().first_name, "Alicia");
    }

    #[tokio::test]
    async fn test_update_profile_requires_a_session() {
        let stub = StubAuth::default();
        let (manager, _storage) = manager(stub.clone());

        let err = manager
            .update_profile(&ProfileUpdate::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Profile(_)));
        assert!(stub.calls().is_empty());
    }

    #[tokio::test]
    async fn test_hydrate_restores_persisted_session() {
        let (manager, storage) = manager(StubAuth::default());

        storage.set(ACCESS_TOKEN_KEY, "stored-access");
        storage.set(REFRESH_TOKEN_KEY, "stored-refresh");
        storage.set(
            USER_KEY,
            r#"{"id":1,"username":"alice","email":"alice@example.com","first_name":"Alice","last_name":"Reyes"}"#,
        );

        manager.hydrate();

        let session = manager.session();
        assert!(session.is_authenticated());
        assert_pairing(&session);
        assert_eq!(session.access(), Some("stored-access"));
        assert_eq!(session.refresh(), Some("stored-refresh"));
        assert_eq!(manager.transport.bearer().as_deref(), Some("stored-access"));
    }

    #[tokio::test]
    async fn test_hydrate_drops_an_unpaired_token() {
        let (manager, storage) = manager(StubAuth::default());

        // Access token without an identity record.
        storage.set(ACCESS_TOKEN_KEY, "stored-access");

        manager.hydrate();

        assert!(!manager.is_authenticated());
        assert!(storage.get(ACCESS_TOKEN_KEY).is_none());
        assert!(storage.get(REFRESH_TOKEN_KEY).is_none());
        assert!(storage.get(USER_KEY).is_none());
        assert!(manager.transport.bearer().is_none());
    }

    #[tokio::test]
    async fn test_hydrate_without_stored_state_stays_anonymous() {
        let (manager, _storage) = manager(StubAuth::default());

        manager.hydrate();

        assert!(!manager.is_authenticated());
        assert!(manager.current_user().is_none());
    }
}
