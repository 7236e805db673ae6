//! Toast notifications.
//!
//! Every operation boundary reports its outcome here instead of letting an
//! error escape into the view tree. [`ToastProvider`] owns the signal and
//! renders the stack; the `toast_*` helpers push entries from event handlers.

use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ToastLevel {
    Info,
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub level: ToastLevel,
    pub title: String,
    pub description: Option<String>,
}

#[derive(Clone, Debug, Default)]
pub struct Toasts {
    pub entries: Vec<Toast>,
    next_id: u64,
}

impl Toasts {
    fn push(&mut self, level: ToastLevel, title: &str, description: Option<String>) {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(Toast {
            id,
            level,
            title: title.to_string(),
            description,
        });
    }

    pub fn dismiss(&mut self, id: u64) {
        self.entries.retain(|toast| toast.id != id);
    }
}

/// Get the toast stack. Must be called under a [`ToastProvider`].
pub fn use_toasts() -> Signal<Toasts> {
    use_context::<Signal<Toasts>>()
}

pub fn toast_success(toasts: &mut Signal<Toasts>, title: &str, description: Option<String>) {
    toasts.write().push(ToastLevel::Success, title, description);
}

pub fn toast_error(toasts: &mut Signal<Toasts>, title: &str, description: Option<String>) {
    toasts.write().push(ToastLevel::Error, title, description);
}

pub fn toast_info(toasts: &mut Signal<Toasts>, title: &str, description: Option<String>) {
    toasts.write().push(ToastLevel::Info, title, description);
}

/// Provider component that owns the toast stack and renders it.
#[component]
pub fn ToastProvider(children: Element) -> Element {
    let toasts = use_signal(Toasts::default);
    use_context_provider(|| toasts);

    rsx! {
        {children}
        ToastHost {}
    }
}

#[component]
fn ToastHost() -> Element {
    let toasts = use_toasts();

    rsx! {
        div {
            class: "toast-stack",
            for toast in toasts.read().entries.clone() {
                ToastCard { key: "{toast.id}", toast }
            }
        }
    }
}

#[component]
fn ToastCard(toast: Toast) -> Element {
    let mut toasts = use_toasts();
    let id = toast.id;

    // Auto-dismiss after a few seconds on the web; native builds keep the
    // card until it is clicked away.
    use_hook(move || {
        #[cfg(target_arch = "wasm32")]
        spawn(async move {
            gloo_timers::future::sleep(std::time::Duration::from_secs(4)).await;
            toasts.write().dismiss(id);
        });
    });

    let level_class = match toast.level {
        ToastLevel::Info => "toast--info",
        ToastLevel::Success => "toast--success",
        ToastLevel::Error => "toast--error",
    };

    rsx! {
        div {
            class: "toast {level_class}",
            onclick: move |_| toasts.write().dismiss(id),
            div { class: "toast-title", "{toast.title}" }
            if let Some(description) = &toast.description {
                div { class: "toast-description", "{description}" }
            }
        }
    }
}
