//! # ApiClient — typed methods for every backend endpoint
//!
//! One method per operation, each converting transport failures into the
//! [`ApiError`] taxonomy at its own boundary. The client implements the
//! three gateway traits so the session manager, the favorites synchronizer,
//! and the newsletter flows run against it unchanged.

use serde::Serialize;

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::favorites::FavoritesGateway;
use crate::models::{
    Activity, Category, Contact, ContactMessage, Culture, Destination, Event, Favorite,
    FavoriteKind, FavoriteRow, Subscriber, ToggleOutcome, ToggleStatus,
};
use crate::newsletter::NewsletterGateway;
use crate::session::{AuthGateway, ProfileUpdate, RegistrationForm, TokenGrant};
use crate::transport::Transport;

#[derive(Serialize)]
struct Credentials<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct EmailBody<'a> {
    email: &'a str,
}

#[derive(Serialize)]
struct ToggleBody {
    item_type: FavoriteKind,
    item_id: u32,
}

/// Typed client over the remote backend.
#[derive(Clone)]
pub struct ApiClient {
    transport: Transport,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            transport: Transport::new(config),
        }
    }

    /// The shared transport, for collaborators that configure the bearer
    /// credential.
    pub fn transport(&self) -> &Transport {
        &self.transport
    }

    // --- catalog reads ---

    pub async fn destinations(&self) -> Result<Vec<Destination>, ApiError> {
        self.transport
            .get("/explore/destinations/")
            .await
            .map_err(|err| err.into_fetch())
    }

    pub async fn destination(&self, id: u32) -> Result<Destination, ApiError> {
        self.transport
            .get(&format!("/explore/destinations/{id}/"))
            .await
            .map_err(|err| err.into_fetch())
    }

    pub async fn activities(&self) -> Result<Vec<Activity>, ApiError> {
        self.transport
            .get("/explore/activities/")
            .await
            .map_err(|err| err.into_fetch())
    }

    pub async fn activity(&self, id: u32) -> Result<Activity, ApiError> {
        self.transport
            .get(&format!("/explore/activities/{id}/"))
            .await
            .map_err(|err| err.into_fetch())
    }

    pub async fn cultures(&self) -> Result<Vec<Culture>, ApiError> {
        self.transport
            .get("/explore/cultures/")
            .await
            .map_err(|err| err.into_fetch())
    }

    pub async fn culture(&self, id: u32) -> Result<Culture, ApiError> {
        self.transport
            .get(&format!("/explore/cultures/{id}/"))
            .await
            .map_err(|err| err.into_fetch())
    }

    pub async fn categories(&self) -> Result<Vec<Category>, ApiError> {
        self.transport
            .get("/explore/categories/")
            .await
            .map_err(|err| err.into_fetch())
    }

    /// All events, or only those in `month` (lowercase month name).
    pub async fn events(&self, month: Option<&str>) -> Result<Vec<Event>, ApiError> {
        let path = match month {
            Some(month) => format!("/events/?month={month}"),
            None => "/events/".to_string(),
        };
        self.transport.get(&path).await.map_err(|err| err.into_fetch())
    }

    pub async fn event(&self, id: u32) -> Result<Event, ApiError> {
        self.transport
            .get(&format!("/events/{id}/"))
            .await
            .map_err(|err| err.into_fetch())
    }

    // --- contact ---

    pub async fn send_contact(&self, message: &ContactMessage) -> Result<Contact, ApiError> {
        self.transport
            .post("/auth/contacts/", message)
            .await
            .map_err(|err| err.into_fetch())
    }
}

impl AuthGateway for ApiClient {
    async fn login(&self, username: &str, password: &str) -> Result<TokenGrant, ApiError> {
        self.transport
            .post("/auth/token/", &Credentials { username, password })
            .await
            .map_err(|err| err.into_auth("Login failed. Please check your credentials."))
    }

    async fn register(&self, form: &RegistrationForm) -> Result<(), ApiError> {
        let _: serde_json::Value = self
            .transport
            .post("/auth/register/", form)
            .await
            .map_err(|err| err.into_validation("Registration failed. Please try again."))?;
        Ok(())
    }

    async fn update_profile(&self, update: &ProfileUpdate) -> Result<ProfileUpdate, ApiError> {
        self.transport
            .patch("/auth/profile/", update)
            .await
            .map_err(|err| err.into_profile("Failed to update profile."))
    }
}

impl FavoritesGateway for ApiClient {
    async fn list_favorites(&self) -> Result<Vec<Favorite>, ApiError> {
        let rows: Vec<FavoriteRow> = self
            .transport
            .get("/explore/favorites/")
            .await
            .map_err(|err| err.into_fetch())?;
        Ok(rows
            .into_iter()
            .filter_map(|row| {
                let id = row.id;
                let favorite = Favorite::from_row(row);
                if favorite.is_none() {
                    tracing::warn!(id, "skipping favorite row without a single target");
                }
                favorite
            })
            .collect())
    }

    async fn toggle_favorite(
        &self,
        kind: FavoriteKind,
        item_id: u32,
    ) -> Result<ToggleOutcome, ApiError> {
        let status: ToggleStatus = self
            .transport
            .post("/explore/favorites/toggle/", &ToggleBody { item_type: kind, item_id })
            .await
            .map_err(|_| ApiError::Favorite)?;
        ToggleOutcome::from_status(&status.status).ok_or(ApiError::Favorite)
    }
}

impl NewsletterGateway for ApiClient {
    async fn subscribe(&self, email: &str) -> Result<Subscriber, ApiError> {
        self.transport
            .post("/auth/subscribers/", &EmailBody { email })
            .await
            .map_err(|err| {
                if err.detail() == Some("Email already subscribed") {
                    ApiError::AlreadySubscribed
                } else {
                    err.into_fetch()
                }
            })
    }

    async fn resubscribe(&self, email: &str) -> Result<Subscriber, ApiError> {
        self.transport
            .post("/auth/subscribers/resubscribe/", &EmailBody { email })
            .await
            .map_err(|err| err.into_fetch())
    }

    async fn unsubscribe(&self, email: &str) -> Result<(), ApiError> {
        self.transport
            .post_unit("/auth/subscribers/unsubscribe/", &EmailBody { email })
            .await
            .map_err(|err| {
                if err.status() == Some(404) {
                    ApiError::NotSubscribed
                } else {
                    err.into_fetch()
                }
            })
    }
}
