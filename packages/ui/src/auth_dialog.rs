//! Sign-in / registration dialog.
//!
//! The dialog's open state is dual-mode: a caller may inject an
//! externally-owned `Signal<bool>` (controlled), or omit it and let the
//! dialog own its state behind the built-in trigger button (uncontrolled).
//! The internal holder exists either way and is simply bypassed when the
//! caller supplies one.

use api::RegistrationForm;
use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant, Input};
use crate::modal_overlay::ModalOverlay;
use crate::session::use_session;
use crate::toast::{toast_error, use_toasts};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AuthTab {
    Login,
    Register,
}

#[component]
pub fn AuthDialog(
    #[props(default = AuthTab::Login)] default_tab: AuthTab,
    /// Externally-owned open state; when absent the dialog owns its own.
    open: Option<Signal<bool>>,
    on_success: Option<EventHandler<()>>,
    /// When non-empty, renders a trigger button with this label
    /// (uncontrolled use).
    #[props(default)] trigger_label: String,
) -> Element {
    let internal_open = use_signal(|| false);
    let mut open_state = open.unwrap_or(internal_open);
    let mut tab = use_signal(|| default_tab);

    let finish = move |_| {
        open_state.set(false);
        if let Some(handler) = &on_success {
            handler.call(());
        }
    };

    rsx! {
        if !trigger_label.is_empty() {
            Button {
                variant: ButtonVariant::Outline,
                onclick: move |_| open_state.set(true),
                "{trigger_label}"
            }
        }
        if open_state() {
            ModalOverlay {
                on_close: move |_| open_state.set(false),
                div {
                    class: "auth-dialog",
                    h2 {
                        class: "auth-dialog__title",
                        if tab() == AuthTab::Login { "Welcome Back" } else { "Create an Account" }
                    }
                    p {
                        class: "auth-dialog__subtitle",
                        if tab() == AuthTab::Login {
                            "Sign in to access your favorites and more."
                        } else {
                            "Join us to save your favorite destinations and experiences."
                        }
                    }
                    div {
                        class: "auth-dialog__tabs",
                        button {
                            class: if tab() == AuthTab::Login { "auth-tab auth-tab--active" } else { "auth-tab" },
                            onclick: move |_| tab.set(AuthTab::Login),
                            "Login"
                        }
                        button {
                            class: if tab() == AuthTab::Register { "auth-tab auth-tab--active" } else { "auth-tab" },
                            onclick: move |_| tab.set(AuthTab::Register),
                            "Register"
                        }
                    }
                    match tab() {
                        AuthTab::Login => rsx! { LoginForm { on_success: finish } },
                        AuthTab::Register => rsx! { RegisterForm { on_success: finish } },
                    }
                }
            }
        }
    }
}

#[component]
pub fn LoginForm(on_success: EventHandler<()>) -> Element {
    let session = use_session();
    let mut toasts = use_toasts();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let session = session.clone();
        spawn(async move {
            error.set(None);

            let name = username().trim().to_string();
            if name.is_empty() || password().is_empty() {
                error.set(Some("Username and password are required".to_string()));
                return;
            }

            loading.set(true);
            match session.login(name, password()).await {
                Ok(()) => {
                    loading.set(false);
                    on_success.call(());
                }
                Err(err) => {
                    loading.set(false);
                    error.set(Some(err.to_string()));
                    toast_error(&mut toasts, "Authentication Error", Some(err.to_string()));
                }
            }
        });
    };

    rsx! {
        form {
            class: "auth-form",
            onsubmit: handle_submit,

            if let Some(err) = error() {
                div { class: "form-error", "{err}" }
            }

            Input {
                placeholder: "Username",
                value: username(),
                oninput: move |evt: FormEvent| username.set(evt.value()),
            }
            Input {
                r#type: "password",
                placeholder: "Password",
                value: password(),
                oninput: move |evt: FormEvent| password.set(evt.value()),
            }
            Button {
                r#type: "submit",
                class: "auth-form__submit",
                disabled: loading(),
                if loading() { "Signing in..." } else { "Sign In" }
            }
        }
    }
}

#[component]
pub fn RegisterForm(on_success: EventHandler<()>) -> Element {
    let session = use_session();
    let mut toasts = use_toasts();
    let mut username = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut first_name = use_signal(String::new);
    let mut last_name = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut password_confirm = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let session = session.clone();
        spawn(async move {
            error.set(None);

            let name = username().trim().to_string();
            let address = email().trim().to_string();
            if name.is_empty() {
                error.set(Some("Username is required".to_string()));
                return;
            }
            if address.is_empty() || !address.contains('@') {
                error.set(Some("Please enter a valid email".to_string()));
                return;
            }
            if password().len() < 8 {
                error.set(Some("Password must be at least 8 characters".to_string()));
                return;
            }
            if password() != password_confirm() {
                error.set(Some("Passwords do not match".to_string()));
                return;
            }

            loading.set(true);
            let form = RegistrationForm {
                username: name,
                email: address,
                password: password(),
                password_confirm: password_confirm(),
                first_name: first_name().trim().to_string(),
                last_name: last_name().trim().to_string(),
            };
            match session.register(form).await {
                Ok(()) => {
                    loading.set(false);
                    on_success.call(());
                }
                Err(err) => {
                    loading.set(false);
                    error.set(Some(err.to_string()));
                    toast_error(&mut toasts, "Registration Error", Some(err.to_string()));
                }
            }
        });
    };

    rsx! {
        form {
            class: "auth-form",
            onsubmit: handle_submit,

            if let Some(err) = error() {
                div { class: "form-error", "{err}" }
            }

            Input {
                placeholder: "Username",
                value: username(),
                oninput: move |evt: FormEvent| username.set(evt.value()),
            }
            Input {
                r#type: "email",
                placeholder: "Email",
                value: email(),
                oninput: move |evt: FormEvent| email.set(evt.value()),
            }
            div {
                class: "auth-form__row",
                Input {
                    placeholder: "First name",
                    value: first_name(),
                    oninput: move |evt: FormEvent| first_name.set(evt.value()),
                }
                Input {
                    placeholder: "Last name",
                    value: last_name(),
                    oninput: move |evt: FormEvent| last_name.set(evt.value()),
                }
            }
            Input {
                r#type: "password",
                placeholder: "Password (min 8 characters)",
                value: password(),
                oninput: move |evt: FormEvent| password.set(evt.value()),
            }
            Input {
                r#type: "password",
                placeholder: "Confirm password",
                value: password_confirm(),
                oninput: move |evt: FormEvent| password_confirm.set(evt.value()),
            }
            Button {
                r#type: "submit",
                class: "auth-form__submit",
                disabled: loading(),
                if loading() { "Creating account..." } else { "Create Account" }
            }
        }
    }
}
