//! Landing page: hero, featured destinations, newsletter signup.

use dioxus::prelude::*;
use ui::{use_api, DestinationCard, SubscribeForm};

#[component]
pub fn Home() -> Element {
    let client = use_api();

    let featured = use_resource(move || {
        let client = client.clone();
        async move { client.destinations().await }
    });

    rsx! {
        section {
            class: "hero",
            div {
                class: "hero__inner",
                h1 { class: "hero__title", "Discover Maravilla" }
                p {
                    class: "hero__subtitle",
                    "Turquoise coves, cliff trails, and a harbor town that never rushes. Plan your stay on the island."
                }
            }
        }

        section {
            class: "page",
            h2 { class: "page__title", "Featured Destinations" }
            match &*featured.read() {
                Some(Ok(items)) => rsx! {
                    div {
                        class: "card-grid",
                        for destination in items.iter().take(3).cloned() {
                            DestinationCard { key: "{destination.id}", destination }
                        }
                    }
                },
                Some(Err(_)) => rsx! {
                    p { class: "page__error", "Could not load destinations right now." }
                },
                None => rsx! {
                    p { class: "page__loading", "Loading..." }
                },
            }
        }

        section {
            class: "page page--narrow",
            SubscribeForm {}
        }
    }
}
