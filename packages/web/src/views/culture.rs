//! Culture and heritage catalog.

use dioxus::prelude::*;
use ui::{use_api, use_favorites, CultureCard};

#[component]
pub fn Culture() -> Element {
    let client = use_api();
    let favorites = use_favorites();

    let cultures = use_resource(move || {
        let client = client.clone();
        let _epoch = *favorites.catalog_epoch.read();
        async move { client.cultures().await }
    });

    rsx! {
        section {
            class: "page",
            h1 { class: "page__title", "Culture" }
            p {
                class: "page__lead",
                "Traditions, crafts, and stories that shaped the island."
            }
            match &*cultures.read() {
                Some(Ok(items)) => rsx! {
                    div {
                        class: "card-grid",
                        for culture in items.clone() {
                            CultureCard { key: "{culture.id}", culture }
                        }
                    }
                },
                Some(Err(_)) => rsx! {
                    p { class: "page__error", "Could not load culture entries. Please try again later." }
                },
                None => rsx! {
                    p { class: "page__loading", "Loading..." }
                },
            }
        }
    }
}
