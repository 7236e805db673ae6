//! Destinations catalog.

use dioxus::prelude::*;
use ui::{use_api, use_favorites, DestinationCard};

#[component]
pub fn Destinations() -> Element {
    let client = use_api();
    let favorites = use_favorites();

    let destinations = use_resource(move || {
        let client = client.clone();
        // A favorite toggle invalidates the catalog; refetch so the badges
        // recompute.
        let _epoch = *favorites.catalog_epoch.read();
        async move { client.destinations().await }
    });

    rsx! {
        section {
            class: "page",
            h1 { class: "page__title", "Destinations" }
            p {
                class: "page__lead",
                "Beaches, lookouts, and hidden corners of the island worth the detour."
            }
            match &*destinations.read() {
                Some(Ok(items)) => rsx! {
                    div {
                        class: "card-grid",
                        for destination in items.clone() {
                            DestinationCard { key: "{destination.id}", destination }
                        }
                    }
                },
                Some(Err(_)) => rsx! {
                    p { class: "page__error", "Could not load destinations. Please try again later." }
                },
                None => rsx! {
                    p { class: "page__loading", "Loading..." }
                },
            }
        }
    }
}
