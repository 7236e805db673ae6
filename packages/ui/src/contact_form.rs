//! Contact form.

use api::ContactMessage;
use dioxus::prelude::*;

use crate::components::{Button, Input, Label, Textarea};
use crate::session::use_api;
use crate::toast::{toast_error, toast_success, use_toasts};

const INQUIRY_TYPES: [(&str, &str); 5] = [
    ("general", "General Inquiry"),
    ("destinations", "Destinations"),
    ("activities", "Activities"),
    ("events", "Events"),
    ("feedback", "Feedback"),
];

#[component]
pub fn ContactForm() -> Element {
    let client = use_api();
    let mut toasts = use_toasts();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut inquiry_type = use_signal(|| "general".to_string());
    let mut subject = use_signal(String::new);
    let mut message = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        spawn(async move {
            error.set(None);

            if name().trim().is_empty()
                || email().trim().is_empty()
                || subject().trim().is_empty()
                || message().trim().is_empty()
            {
                error.set(Some("Please fill in all fields".to_string()));
                return;
            }

            loading.set(true);
            let form = ContactMessage {
                name: name().trim().to_string(),
                email: email().trim().to_string(),
                inquiry_type: inquiry_type(),
                subject: subject().trim().to_string(),
                message: message().trim().to_string(),
            };
            match client.send_contact(&form).await {
                Ok(_) => {
                    toast_success(&mut toasts, "Your message has been sent successfully!", None);
                    name.set(String::new());
                    email.set(String::new());
                    inquiry_type.set("general".to_string());
                    subject.set(String::new());
                    message.set(String::new());
                }
                Err(err) => {
                    error.set(Some(err.to_string()));
                    toast_error(
                        &mut toasts,
                        "Failed to send your message. Please try again later.",
                        None,
                    );
                }
            }
            loading.set(false);
        });
    };

    rsx! {
        form {
            class: "contact-form",
            onsubmit: handle_submit,

            if let Some(err) = error() {
                div { class: "form-error", "{err}" }
            }

            div {
                class: "contact-form__row",
                div {
                    Label { html_for: "contact-name", "Name" }
                    Input {
                        id: "contact-name",
                        placeholder: "Your name",
                        required: true,
                        value: name(),
                        oninput: move |evt: FormEvent| name.set(evt.value()),
                    }
                }
                div {
                    Label { html_for: "contact-email", "Email" }
                    Input {
                        id: "contact-email",
                        r#type: "email",
                        placeholder: "you@example.com",
                        required: true,
                        value: email(),
                        oninput: move |evt: FormEvent| email.set(evt.value()),
                    }
                }
            }

            Label { html_for: "contact-inquiry", "Inquiry Type" }
            select {
                id: "contact-inquiry",
                class: "select",
                value: inquiry_type(),
                onchange: move |evt| inquiry_type.set(evt.value()),
                for (value, label) in INQUIRY_TYPES {
                    option { value: "{value}", "{label}" }
                }
            }

            Label { html_for: "contact-subject", "Subject" }
            Input {
                id: "contact-subject",
                placeholder: "What is this about?",
                required: true,
                value: subject(),
                oninput: move |evt: FormEvent| subject.set(evt.value()),
            }

            Label { html_for: "contact-message", "Message" }
            Textarea {
                id: "contact-message",
                placeholder: "Tell us more...",
                rows: 6,
                required: true,
                value: message(),
                oninput: move |evt: FormEvent| message.set(evt.value()),
            }

            Button {
                r#type: "submit",
                class: "contact-form__submit",
                disabled: loading(),
                if loading() { "Sending..." } else { "Send Message" }
            }
        }
    }
}
