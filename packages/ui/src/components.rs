//! Small form primitives shared by every view.

use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ButtonVariant {
    Primary,
    Outline,
    Link,
}

#[component]
pub fn Button(
    #[props(default = ButtonVariant::Primary)] variant: ButtonVariant,
    #[props(default)] class: String,
    #[props(default)] disabled: bool,
    #[props(default = "button".to_string())] r#type: String,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let variant_class = match variant {
        ButtonVariant::Primary => "btn btn--primary",
        ButtonVariant::Outline => "btn btn--outline",
        ButtonVariant::Link => "btn btn--link",
    };

    rsx! {
        button {
            class: "{variant_class} {class}",
            r#type: "{r#type}",
            disabled,
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}

#[component]
pub fn Input(
    #[props(default)] id: String,
    #[props(default = "text".to_string())] r#type: String,
    #[props(default)] placeholder: String,
    #[props(default)] class: String,
    #[props(default)] required: bool,
    value: String,
    oninput: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        input {
            id: "{id}",
            r#type: "{r#type}",
            placeholder: "{placeholder}",
            class: "input {class}",
            required,
            value: "{value}",
            oninput: move |evt| oninput.call(evt),
        }
    }
}

#[component]
pub fn Label(#[props(default)] html_for: String, children: Element) -> Element {
    rsx! {
        label {
            r#for: "{html_for}",
            class: "label",
            {children}
        }
    }
}

#[component]
pub fn Textarea(
    #[props(default)] id: String,
    #[props(default)] placeholder: String,
    #[props(default)] class: String,
    #[props(default = 5)] rows: u32,
    #[props(default)] required: bool,
    value: String,
    oninput: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        textarea {
            id: "{id}",
            placeholder: "{placeholder}",
            class: "textarea {class}",
            rows: "{rows}",
            required,
            value: "{value}",
            oninput: move |evt| oninput.call(evt),
        }
    }
}
