//! Newsletter unsubscribe dialog.
//!
//! A 404 from the backend means the address was never subscribed; that is an
//! informational toast and the dialog still closes. Only a hard failure
//! keeps it open for another attempt.

use api::{unsubscribe, UnsubscribeOutcome};
use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant, Input, Label};
use crate::modal_overlay::ModalOverlay;
use crate::session::use_api;
use crate::toast::{toast_error, toast_info, toast_success, use_toasts};

#[component]
pub fn UnsubscribeDialog(
    #[props(default = "Unsubscribe from newsletter".to_string())] trigger_label: String,
) -> Element {
    let client = use_api();
    let mut toasts = use_toasts();
    let mut open = use_signal(|| false);
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
            match unsubscribe(&client, &address).await {
                Ok(UnsubscribeOutcome::Unsubscribed) => {
                    toast_success(&mut toasts, "Successfully unsubscribed from newsletter", None);
                    email.set(String::new());
                    open.set(false);
                }
                Ok(UnsubscribeOutcome::NotSubscribed) => {
                    toast_info(&mut toasts, "This email is not currently subscribed", None);
                    email.set(String::new());
                    open.set(false);
                }
                Err(_) => {
                    toast_error(&mut toasts, "Could not process your request", None);
                }
            }
            loading.set(false);
        });
    };

    rsx! {
        Button {
            variant: ButtonVariant::Link,
            onclick: move |_| open.set(true),
            "{trigger_label}"
        }
        if open() {
            ModalOverlay {
                on_close: move |_| open.set(false),
                div {
                    class: "dialog-body",
                    h2 { class: "dialog-body__title", "Unsubscribe from Newsletter" }
                    p {
                        class: "dialog-body__description",
                        "We're sorry to see you go. Please enter your email address to unsubscribe from our newsletter."
                    }
                    form {
                        onsubmit: handle_submit,
                        Label { html_for: "unsubscribe-email", "Email Address" }
                        Input {
                            id: "unsubscribe-email",
                            r#type: "email",
                            placeholder: "Enter your email",
                            required: true,
                            value: email(),
                            oninput: move |evt: FormEvent| email.set(evt.value()),
                        }
                        div {
                            class: "dialog-actions",
                            Button {
                                variant: ButtonVariant::Outline,
                                onclick: move |_| open.set(false),
                                "Cancel"
                            }
                            Button {
                                r#type: "submit",
                                disabled: loading(),
                                if loading() { "Processing..." } else { "Confirm Unsubscribe" }
                            }
                        }
                    }
                }
            }
        }
    }
}
