//! Contact page.

use dioxus::prelude::*;
use ui::ContactForm;

#[component]
pub fn Contact() -> Element {
    rsx! {
        section {
            class: "page page--narrow",
            h1 { class: "page__title", "Get in Touch" }
            p {
                class: "page__lead",
                "Questions about a destination, an activity, or an upcoming event? Send us a message and we'll get back to you."
            }
            ContactForm {}
        }
    }
}
