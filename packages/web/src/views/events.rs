//! Events calendar with a by-month filter.

use dioxus::prelude::*;
use ui::{use_api, EventCard};

const MONTHS: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

fn capitalize(month: &str) -> String {
    let mut chars = month.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[component]
pub fn Events() -> Element {
    let client = use_api();
    let mut selected_month = use_signal(|| "all".to_string());

    let events = use_resource(move || {
        let client = client.clone();
        let month = selected_month();
        async move {
            let filter = if month == "all" { None } else { Some(month.as_str()) };
            client.events(filter).await
        }
    });

    rsx! {
        section {
            class: "page",
            div {
                class: "page__header",
                h1 { class: "page__title", "Events" }
                select {
                    class: "select select--inline",
                    value: selected_month(),
                    onchange: move |evt| selected_month.set(evt.value()),
                    option { value: "all", "All months" }
                    for month in MONTHS {
                        option { value: "{month}", {capitalize(month)} }
                    }
                }
            }
            match &*events.read() {
                Some(Ok(items)) => rsx! {
                    if items.is_empty() {
                        p { class: "page__lead", "No events scheduled for this month." }
                    } else {
                        div {
                            class: "card-grid",
                            for event in items.clone() {
                                EventCard { key: "{event.id}", event }
                            }
                        }
                    }
                },
                Some(Err(_)) => rsx! {
                    p { class: "page__error", "Could not load events. Please try again later." }
                },
                None => rsx! {
                    p { class: "page__loading", "Loading..." }
                },
            }
        }
    }
}
