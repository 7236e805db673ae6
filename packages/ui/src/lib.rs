//! This crate contains all shared UI for the workspace.

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod platform;
pub use platform::{
    make_client, make_favorites_sync, make_session_manager, AppFavorites, AppSession,
    PlatformStore,
};

mod session;
pub use session::{use_api, use_session, SessionContext, SessionProvider};

mod favorites;
pub use favorites::{use_favorites, FavoritesContext, FavoritesProvider};

mod toast;
pub use toast::{
    toast_error, toast_info, toast_success, use_toasts, Toast, ToastLevel, ToastProvider, Toasts,
};

mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod auth_dialog;
pub use auth_dialog::{AuthDialog, AuthTab, LoginForm, RegisterForm};

mod favorite_button;
pub use favorite_button::FavoriteButton;

mod subscribe_form;
pub use subscribe_form::SubscribeForm;

mod unsubscribe_dialog;
pub use unsubscribe_dialog::UnsubscribeDialog;

mod contact_form;
pub use contact_form::ContactForm;

mod navbar;
pub use navbar::{Navbar, UserMenu};

mod cards;
pub use cards::{ActivityCard, CultureCard, DestinationCard, EventCard};
