//! Profile page: saved favorites plus account settings, behind the sign-in
//! gate.

use api::{Favorite, ProfileUpdate, UserProfile};
use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant, Input, Label};
use ui::{
    toast_error, toast_success, use_favorites, use_session, use_toasts, AuthDialog,
};

#[derive(Clone, Copy, PartialEq)]
enum ProfileTab {
    Favorites,
    Settings,
}

#[component]
pub fn Profile() -> Element {
    let session = use_session();
    let favorites = use_favorites();
    let mut tab = use_signal(|| ProfileTab::Favorites);

    if !session.is_authenticated() {
        return rsx! {
            section {
                class: "page page--narrow",
                h1 { class: "page__title", "Your Profile" }
                p {
                    class: "page__lead",
                    "Sign in to see your saved favorites and manage your account."
                }
                AuthDialog { trigger_label: "Sign In" }
            }
        };
    }

    let Some(user) = session.current_user() else {
        return rsx! {};
    };
    let display_name = user.display_name();

    rsx! {
        section {
            class: "page page--narrow",
            h1 { class: "page__title", "Hello, {display_name}" }

            div {
                class: "profile-tabs",
                button {
                    class: if tab() == ProfileTab::Favorites { "profile-tab profile-tab--active" } else { "profile-tab" },
                    onclick: move |_| tab.set(ProfileTab::Favorites),
                    "Favorites"
                }
                button {
                    class: if tab() == ProfileTab::Settings { "profile-tab profile-tab--active" } else { "profile-tab" },
                    onclick: move |_| tab.set(ProfileTab::Settings),
                    "Settings"
                }
            }

            match tab() {
                ProfileTab::Favorites => rsx! { FavoritesList {} },
                ProfileTab::Settings => rsx! { SettingsForm { user } },
            }
        }
    }
}

#[component]
fn FavoritesList() -> Element {
    let favorites = use_favorites();
    let entries = favorites.list.read().clone();
    let loading = *favorites.loading.read();

    if loading && entries.is_empty() {
        return rsx! {
            p { class: "page__loading", "Loading your favorites..." }
        };
    }
    if entries.is_empty() {
        return rsx! {
            p { class: "page__lead", "You haven't saved any favorites yet." }
        };
    }

    rsx! {
        ul {
            class: "favorites-list",
            for favorite in entries {
                FavoriteRowItem { key: "{favorite.id}", favorite }
            }
        }
    }
}

#[component]
fn FavoriteRowItem(favorite: Favorite) -> Element {
    let favorites = use_favorites();
    let mut toasts = use_toasts();

    let kind = favorite.kind();
    let item_id = favorite.item_id();
    let title = favorite
        .summary
        .as_ref()
        .map(|summary| summary.title.clone())
        .unwrap_or_else(|| format!("{} #{item_id}", kind.as_str()));
    let image = favorite
        .summary
        .as_ref()
        .map(|summary| summary.image.clone())
        .unwrap_or_default();
    let remove_title = title.clone();

    let handle_remove = move |_| {
        let favorites = favorites.clone();
        let title = remove_title.clone();
        spawn(async move {
            let _ = favorites.toggle(kind, item_id, Some(title), &mut toasts).await;
        });
    };

    rsx! {
        li {
            class: "favorites-list__row",
            if !image.is_empty() {
                img { class: "favorites-list__thumb", src: "{image}", alt: "{title}" }
            }
            div {
                class: "favorites-list__info",
                span { class: "favorites-list__title", "{title}" }
                span { class: "favorites-list__kind", "{kind.as_str()}" }
            }
            Button {
                variant: ButtonVariant::Outline,
                onclick: handle_remove,
                "Remove"
            }
        }
    }
}

#[component]
fn SettingsForm(user: UserProfile) -> Element {
    let session = use_session();
    let mut toasts = use_toasts();

    let initial_first = user.first_name.clone();
    let initial_last = user.last_name.clone();
    let initial_email = user.email.clone();
    let mut first_name = use_signal(move || initial_first);
    let mut last_name = use_signal(move || initial_last);
    let mut email = use_signal(move || initial_email);
    let mut error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let session = session.clone();
        spawn(async move {
            error.set(None);
            saving.set(true);

            let update = ProfileUpdate {
                first_name: Some(first_name().trim().to_string()),
                last_name: Some(last_name().trim().to_string()),
                email: Some(email().trim().to_string()),
            };
            match session.update_profile(update).await {
                Ok(_) => {
                    toast_success(&mut toasts, "Profile updated successfully", None);
                }
                Err(err) => {
                    error.set(Some(err.to_string()));
                    toast_error(&mut toasts, "Profile Update Error", Some(err.to_string()));
                }
            }
            saving.set(false);
        });
    };

    rsx! {
        form {
            class: "settings-form",
            onsubmit: handle_submit,

            if let Some(err) = error() {
                div { class: "form-error", "{err}" }
            }

            div {
                class: "settings-form__row",
                div {
                    Label { html_for: "settings-first-name", "First name" }
                    Input {
                        id: "settings-first-name",
                        value: first_name(),
                        oninput: move |evt: FormEvent| first_name.set(evt.value()),
                    }
                }
                div {
                    Label { html_for: "settings-last-name", "Last name" }
                    Input {
                        id: "settings-last-name",
                        value: last_name(),
                        oninput: move |evt: FormEvent| last_name.set(evt.value()),
                    }
                }
            }

            Label { html_for: "settings-email", "Email" }
            Input {
                id: "settings-email",
                r#type: "email",
                value: email(),
                oninput: move |evt: FormEvent| email.set(evt.value()),
            }

            Button {
                r#type: "submit",
                disabled: saving(),
                if saving() { "Saving..." } else { "Save Changes" }
            }
        }
    }
}
