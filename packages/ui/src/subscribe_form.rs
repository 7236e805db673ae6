//! Newsletter signup card.
//!
//! A rejected address that is already known to the backend is reactivated
//! through the resubscribe endpoint and greeted with a welcome-back toast
//! instead of an error.

use api::{subscribe_with_fallback, SubscribeOutcome};
use dioxus::prelude::*;

use crate::components::{Button, Input};
use crate::session::use_api;
use crate::toast::{toast_error, toast_success, use_toasts};
use crate::unsubscribe_dialog::UnsubscribeDialog;

#[component]
pub fn SubscribeForm(
    #[props(default = "Stay Updated".to_string())] title: String,
    #[props(default = "Subscribe to our newsletter for the latest updates and events.".to_string())]
    description: String,
) -> Element {
    let client = use_api();
    let mut toasts = use_toasts();
    let mut email = use_signal(String::new);
    let mut loading = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        spawn(async move {
            let address = email().trim().to_string();
            if address.is_empty() {
                return;
            }

            loading.set(true);
            match subscribe_with_fallback(&client, &address).await {
                Ok(SubscribeOutcome::Subscribed) => {
                    toast_success(&mut toasts, "Thank you for subscribing!", None);
                    email.set(String::new());
                }
                Ok(SubscribeOutcome::Reactivated) => {
                    toast_success(
                        &mut toasts,
                        "Welcome back! Your subscription has been reactivated.",
                        None,
                    );
                    email.set(String::new());
                }
                Err(_) => {
                    toast_error(&mut toasts, "Failed to subscribe. Please try again later.", None);
                }
            }
            loading.set(false);
        });
    };

    rsx! {
        div {
            class: "subscribe-card",
            h3 { class: "subscribe-card__title", "{title}" }
            p { class: "subscribe-card__description", "{description}" }
            form {
                onsubmit: handle_submit,
                Input {
                    r#type: "email",
                    placeholder: "Enter your email",
                    required: true,
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }
                Button {
                    r#type: "submit",
                    class: "subscribe-card__submit",
                    disabled: loading(),
                    if loading() { "Subscribing..." } else { "Subscribe Now" }
                }
            }
            div {
                class: "subscribe-card__footer",
                UnsubscribeDialog {}
            }
            p {
                class: "subscribe-card__fine-print",
                "You can unsubscribe at any time and resubscribe whenever you want. We respect your privacy."
            }
        }
    }
}
