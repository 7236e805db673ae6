//! Activities catalog.

use dioxus::prelude::*;
use ui::{use_api, use_favorites, ActivityCard};

#[component]
pub fn Activities() -> Element {
    let client = use_api();
    let favorites = use_favorites();

    let activities = use_resource(move || {
        let client = client.clone();
        let _epoch = *favorites.catalog_epoch.read();
        async move { client.activities().await }
    });

    rsx! {
        section {
            class: "page",
            h1 { class: "page__title", "Activities" }
            p {
                class: "page__lead",
                "Surf, paddle, hike, or just drift — things to do around the island."
            }
            match &*activities.read() {
                Some(Ok(items)) => rsx! {
                    div {
                        class: "card-grid",
                        for activity in items.clone() {
                            ActivityCard { key: "{activity.id}", activity }
                        }
                    }
                },
                Some(Err(_)) => rsx! {
                    p { class: "page__error", "Could not load activities. Please try again later." }
                },
                None => rsx! {
                    p { class: "page__loading", "Loading..." }
                },
            }
        }
    }
}
