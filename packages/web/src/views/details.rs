//! Detail page for a single catalog entity, addressed as `/details/:kind/:id`.

use api::{ApiError, FavoriteKind};
use dioxus::prelude::*;
use ui::{use_api, use_favorites, FavoriteButton};

/// Unified view model over the four catalog kinds.
#[derive(Debug, Clone, PartialEq)]
struct DetailContent {
    title: String,
    image: String,
    body: String,
    extra: Option<String>,
    favorite: Option<FavoriteKind>,
}

#[component]
pub fn Details(kind: String, id: u32) -> Element {
    let client = use_api();
    let favorites = use_favorites();
    let resource_kind = kind.clone();

    let detail = use_resource(move || {
        let client = client.clone();
        let kind = resource_kind.clone();
        let _epoch = *favorites.catalog_epoch.read();
        async move {
            match kind.as_str() {
                "destination" => client.destination(id).await.map(|d| DetailContent {
                    title: d.title,
                    image: d.image,
                    body: d.long_description,
                    extra: d.location_name,
                    favorite: Some(FavoriteKind::Destination),
                }),
                "activity" => client.activity(id).await.map(|a| DetailContent {
                    title: a.title,
                    image: a.image,
                    body: a.long_description,
                    extra: if a.tips.is_empty() { None } else { Some(a.tips) },
                    favorite: Some(FavoriteKind::Activity),
                }),
                "culture" => client.culture(id).await.map(|c| DetailContent {
                    title: c.title,
                    image: c.image,
                    body: c.long_description,
                    extra: None,
                    favorite: Some(FavoriteKind::Culture),
                }),
                "event" => client.event(id).await.map(|e| DetailContent {
                    title: e.title,
                    image: e.image,
                    body: e.description,
                    extra: Some(e.date),
                    favorite: None,
                }),
                _ => Err(ApiError::Status {
                    status: 404,
                    detail: None,
                }),
            }
        }
    });

    rsx! {
        section {
            class: "page page--narrow",
            match &*detail.read() {
                Some(Ok(content)) => rsx! {
                    article {
                        class: "detail",
                        div {
                            class: "detail__media",
                            img { class: "detail__image", src: "{content.image}", alt: "{content.title}" }
                            if let Some(favorite_kind) = content.favorite {
                                FavoriteButton {
                                    kind: favorite_kind,
                                    item_id: id,
                                    title: content.title.clone(),
                                    class: "detail__favorite",
                                }
                            }
                        }
                        h1 { class: "detail__title", "{content.title}" }
                        if let Some(extra) = &content.extra {
                            p { class: "detail__extra", "{extra}" }
                        }
                        p { class: "detail__body", "{content.body}" }
                    }
                },
                Some(Err(_)) => rsx! {
                    p { class: "page__error", "We couldn't find that entry." }
                },
                None => rsx! {
                    p { class: "page__loading", "Loading..." }
                },
            }
        }
    }
}
