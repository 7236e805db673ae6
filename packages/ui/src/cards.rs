//! Catalog cards.
//!
//! Presentation only; the favorite badge on the likable kinds goes through
//! [`FavoriteButton`], which owns the auth gate and toast feedback.

use api::{Activity, Culture, Destination, Event, FavoriteKind};
use dioxus::prelude::*;

use crate::favorite_button::FavoriteButton;

#[component]
pub fn DestinationCard(destination: Destination) -> Element {
    rsx! {
        div {
            class: "card",
            div {
                class: "card__media",
                img { class: "card__image", src: "{destination.image}", alt: "{destination.title}" }
                FavoriteButton {
                    kind: FavoriteKind::Destination,
                    item_id: destination.id,
                    title: destination.title.clone(),
                    class: "card__favorite",
                }
            }
            div {
                class: "card__body",
                h3 { class: "card__title", "{destination.title}" }
                if !destination.categories.is_empty() {
                    div {
                        class: "card__chips",
                        for category in &destination.categories {
                            span { key: "{category.id}", class: "chip", "{category.name}" }
                        }
                    }
                }
                p { class: "card__description", "{destination.short_description}" }
                if let Some(location) = &destination.location_name {
                    span { class: "card__location", "{location}" }
                }
            }
        }
    }
}

#[component]
pub fn ActivityCard(activity: Activity) -> Element {
    rsx! {
        div {
            class: "card",
            div {
                class: "card__media",
                img { class: "card__image", src: "{activity.image}", alt: "{activity.title}" }
                FavoriteButton {
                    kind: FavoriteKind::Activity,
                    item_id: activity.id,
                    title: activity.title.clone(),
                    class: "card__favorite",
                }
            }
            div {
                class: "card__body",
                h3 { class: "card__title", "{activity.title}" }
                if let Some(duration) = &activity.duration {
                    span { class: "chip chip--duration", "{duration}" }
                }
                p { class: "card__description", "{activity.short_description}" }
            }
        }
    }
}

#[component]
pub fn CultureCard(culture: Culture) -> Element {
    rsx! {
        div {
            class: "card",
            div {
                class: "card__media",
                img { class: "card__image", src: "{culture.image}", alt: "{culture.title}" }
                FavoriteButton {
                    kind: FavoriteKind::Culture,
                    item_id: culture.id,
                    title: culture.title.clone(),
                    class: "card__favorite",
                }
            }
            div {
                class: "card__body",
                h3 { class: "card__title", "{culture.title}" }
                p { class: "card__description", "{culture.short_description}" }
            }
        }
    }
}

#[component]
pub fn EventCard(event: Event) -> Element {
    rsx! {
        div {
            class: "card card--event",
            div {
                class: "card__media",
                img { class: "card__image", src: "{event.image}", alt: "{event.title}" }
                span { class: "card__date-badge", "{event.date}" }
            }
            div {
                class: "card__body",
                h3 { class: "card__title", "{event.title}" }
                p { class: "card__description", "{event.description}" }
            }
        }
    }
}
