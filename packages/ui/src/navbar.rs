use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaUser;
use dioxus_free_icons::Icon;

use crate::auth_dialog::AuthDialog;
use crate::components::{Button, ButtonVariant};
use crate::session::use_session;
use crate::toast::{toast_success, use_toasts};

/// Top navigation bar container; the app shell supplies the links.
#[component]
pub fn Navbar(children: Element) -> Element {
    rsx! {
        nav {
            class: "navbar",
            {children}
        }
    }
}

/// Auth corner of the navbar: a sign-in trigger for visitors, a greeting
/// plus sign-out for the signed-in user.
#[component]
pub fn UserMenu() -> Element {
    let session = use_session();
    let mut toasts = use_toasts();

    let Some(user) = session.current_user() else {
        return rsx! {
            AuthDialog { trigger_label: "Sign In" }
        };
    };
    let display_name = user.display_name();

    rsx! {
        div {
            class: "user-menu",
            span {
                class: "user-menu__name",
                Icon { icon: FaUser, width: 14, height: 14 }
                "{display_name}"
            }
            Button {
                variant: ButtonVariant::Outline,
                onclick: move |_| {
                    session.logout();
                    toast_success(&mut toasts, "Logged out successfully", None);
                },
                "Sign Out"
            }
        }
    }
}
