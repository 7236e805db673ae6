//! Heart button for saving catalog items.
//!
//! Anonymous visitors get the auth dialog instead of a toggle; the toggle
//! itself goes through the favorites context so the cached list and the
//! catalog badges stay consistent with the server.

use api::FavoriteKind;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaHeart;
use dioxus_free_icons::Icon;

use crate::auth_dialog::AuthDialog;
use crate::favorites::use_favorites;
use crate::session::use_session;
use crate::toast::use_toasts;

#[component]
pub fn FavoriteButton(
    kind: FavoriteKind,
    item_id: u32,
    title: String,
    #[props(default)] class: String,
) -> Element {
    let session = use_session();
    let favorites = use_favorites();
    let mut toasts = use_toasts();
    let show_auth = use_signal(|| false);

    let is_fav = favorites.is_favorite(kind, item_id);

    let handle_click = move |evt: MouseEvent| {
        evt.stop_propagation();

        if !session.is_authenticated() {
            let mut show_auth = show_auth;
            show_auth.set(true);
            return;
        }

        let favorites = favorites.clone();
        let title = title.clone();
        spawn(async move {
            let _ = favorites
                .toggle(kind, item_id, Some(title), &mut toasts)
                .await;
        });
    };

    let button_class = if is_fav {
        format!("favorite-btn favorite-btn--active {class}")
    } else {
        format!("favorite-btn {class}")
    };
    let label = if is_fav {
        "Remove from favorites"
    } else {
        "Add to favorites"
    };

    rsx! {
        button {
            class: "{button_class}",
            aria_label: "{label}",
            title: "{label}",
            onclick: handle_click,
            Icon { icon: FaHeart, width: 18, height: 18 }
        }
        AuthDialog { open: show_auth }
    }
}
