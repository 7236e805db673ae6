//! # Wire models
//!
//! Everything the backend serves or accepts. Catalog entities are plain
//! records; the favorites list arrives as rows with three mutually exclusive
//! reference columns and is converted into the [`Favorite`] sum type so that
//! "exactly one target" is structural rather than a convention.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: u32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Destination {
    pub id: u32,
    pub title: String,
    pub image: String,
    #[serde(default)]
    pub categories: Vec<Category>,
    pub short_description: String,
    pub long_description: String,
    #[serde(default)]
    pub location_name: Option<String>,
    #[serde(default)]
    pub maps_link: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub id: u32,
    pub title: String,
    pub image: String,
    pub short_description: String,
    pub long_description: String,
    #[serde(default)]
    pub tips: String,
    #[serde(default)]
    pub duration: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Culture {
    pub id: u32,
    pub title: String,
    pub image: String,
    pub short_description: String,
    pub long_description: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: u32,
    pub title: String,
    pub image: String,
    pub description: String,
    pub date: String,
    #[serde(default)]
    pub month: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Identity record held by the session and persisted across reloads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: u32,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

impl UserProfile {
    /// Full name, falling back to the username when no name was given.
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name, self.last_name);
        let full = full.trim();
        if full.is_empty() {
            self.username.clone()
        } else {
            full.to_string()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subscriber {
    pub id: u32,
    pub email: String,
    #[serde(default)]
    pub subscribed_at: String,
    #[serde(default)]
    pub is_active: bool,
}

/// A contact-form submission.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub inquiry_type: String,
    pub subject: String,
    pub message: String,
}

/// Created contact record as echoed by the backend.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Contact {
    pub id: u32,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub inquiry_type: String,
    pub subject: String,
    pub message: String,
    pub created_at: String,
    #[serde(default)]
    pub is_read: bool,
}

/// The three likable catalog kinds. Serializes to the wire `item_type`
/// values (`"destination"`, `"activity"`, `"culture"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FavoriteKind {
    Destination,
    Activity,
    Culture,
}

impl FavoriteKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Destination => "destination",
            Self::Activity => "activity",
            Self::Culture => "culture",
        }
    }
}

/// Embedded summary of a referenced entity, for display without a second
/// fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemSummary {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub short_description: String,
}

/// What a favorite points at. Exactly one target, by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteTarget {
    Destination(u32),
    Activity(u32),
    Culture(u32),
}

impl FavoriteTarget {
    pub fn kind(&self) -> FavoriteKind {
        match self {
            Self::Destination(_) => FavoriteKind::Destination,
            Self::Activity(_) => FavoriteKind::Activity,
            Self::Culture(_) => FavoriteKind::Culture,
        }
    }

    pub fn item_id(&self) -> u32 {
        match self {
            Self::Destination(id) | Self::Activity(id) | Self::Culture(id) => *id,
        }
    }

    pub fn matches(&self, kind: FavoriteKind, item_id: u32) -> bool {
        self.kind() == kind && self.item_id() == item_id
    }
}

/// A saved association between the signed-in user and one catalog entity.
#[derive(Debug, Clone, PartialEq)]
pub struct Favorite {
    pub id: u32,
    pub target: FavoriteTarget,
    pub created_at: String,
    pub summary: Option<ItemSummary>,
}

impl Favorite {
    pub fn kind(&self) -> FavoriteKind {
        self.target.kind()
    }

    pub fn item_id(&self) -> u32 {
        self.target.item_id()
    }

    /// Convert a wire row into the sum type. Returns `None` unless exactly
    /// one of the three reference columns is populated.
    pub fn from_row(row: FavoriteRow) -> Option<Self> {
        let (target, summary) = match (row.destination, row.activity, row.culture) {
            (Some(id), None, None) => (FavoriteTarget::Destination(id), row.destination_details),
            (None, Some(id), None) => (FavoriteTarget::Activity(id), row.activity_details),
            (None, None, Some(id)) => (FavoriteTarget::Culture(id), row.culture_details),
            _ => return None,
        };
        Some(Self {
            id: row.id,
            target,
            created_at: row.created_at,
            summary,
        })
    }
}

/// Favorites list row as the backend serves it: three optional reference
/// columns plus optional embedded details per column.
#[derive(Debug, Clone, Deserialize)]
pub struct FavoriteRow {
    pub id: u32,
    #[serde(default)]
    pub destination: Option<u32>,
    #[serde(default)]
    pub activity: Option<u32>,
    #[serde(default)]
    pub culture: Option<u32>,
    pub created_at: String,
    #[serde(default)]
    pub destination_details: Option<ItemSummary>,
    #[serde(default)]
    pub activity_details: Option<ItemSummary>,
    #[serde(default)]
    pub culture_details: Option<ItemSummary>,
}

/// Which way a toggle flipped membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Added,
    Removed,
}

impl ToggleOutcome {
    pub(crate) fn from_status(status: &str) -> Option<Self> {
        match status {
            "added" => Some(Self::Added),
            "removed" => Some(Self::Removed),
            _ => None,
        }
    }
}

/// Toggle endpoint response shape.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ToggleStatus {
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_favorite_from_row_destination() {
        let row: FavoriteRow = serde_json::from_str(
            r#"{
                "id": 7,
                "destination": 3,
                "created_at": "2024-05-01T09:00:00Z",
                "destination_details": {"id": 3, "title": "Hidden Lagoon"}
            }"#,
        )
        .unwrap();

        let fav = Favorite::from_row(row).unwrap();
        assert_eq!(fav.target, FavoriteTarget::Destination(3));
        assert_eq!(fav.kind(), FavoriteKind::Destination);
        assert_eq!(fav.item_id(), 3);
        assert_eq!(fav.summary.unwrap().title, "Hidden Lagoon");
    }

    #[test]
    fn test_favorite_from_row_rejects_zero_or_two_targets() {
        let none: FavoriteRow =
            serde_json::from_str(r#"{"id": 1, "created_at": "2024-05-01T09:00:00Z"}"#).unwrap();
        assert!(Favorite::from_row(none).is_none());

        let two: FavoriteRow = serde_json::from_str(
            r#"{"id": 2, "destination": 1, "activity": 4, "created_at": "2024-05-01T09:00:00Z"}"#,
        )
        .unwrap();
        assert!(Favorite::from_row(two).is_none());
    }

    #[test]
    fn test_favorite_kind_wire_names() {
        assert_eq!(
            serde_json::to_string(&FavoriteKind::Destination).unwrap(),
            r#""destination""#
        );
        assert_eq!(
            serde_json::to_string(&FavoriteKind::Culture).unwrap(),
            r#""culture""#
        );
        assert_eq!(FavoriteKind::Activity.as_str(), "activity");
    }

    #[test]
    fn test_toggle_outcome_parse() {
        assert_eq!(ToggleOutcome::from_status("added"), Some(ToggleOutcome::Added));
        assert_eq!(
            ToggleOutcome::from_status("removed"),
            Some(ToggleOutcome::Removed)
        );
        assert_eq!(ToggleOutcome::from_status("flipped"), None);
    }

    #[test]
    fn test_display_name_falls_back_to_username() {
        let user = UserProfile {
            id: 1,
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            first_name: String::new(),
            last_name: String::new(),
        };
        assert_eq!(user.display_name(), "alice");

        let named = UserProfile {
            first_name: "Alice".to_string(),
            last_name: "Reyes".to_string(),
            ..user
        };
        assert_eq!(named.display_name(), "Alice Reyes");
    }
}
