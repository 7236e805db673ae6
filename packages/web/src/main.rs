use dioxus::prelude::*;

use ui::{FavoritesProvider, Navbar, SessionProvider, ToastProvider, UserMenu};
use views::{Activities, Contact, Culture, Destinations, Details, Events, Home, Profile};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
    #[route("/")]
    Home {},
    #[route("/destinations")]
    Destinations {},
    #[route("/activities")]
    Activities {},
    #[route("/culture")]
    Culture {},
    #[route("/events")]
    Events {},
    #[route("/details/:kind/:id")]
    Details { kind: String, id: u32 },
    #[route("/profile")]
    Profile {},
    #[route("/contact")]
    Contact {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        SessionProvider {
            ToastProvider {
                FavoritesProvider {
                    Router::<Route> {}
                }
            }
        }
    }
}

/// Shared chrome around every route.
#[component]
fn Shell() -> Element {
    rsx! {
        Navbar {
            Link { class: "navbar__brand", to: Route::Home {}, "Maravilla" }
            div {
                class: "navbar__links",
                Link { to: Route::Destinations {}, "Destinations" }
                Link { to: Route::Activities {}, "Activities" }
                Link { to: Route::Culture {}, "Culture" }
                Link { to: Route::Events {}, "Events" }
                Link { to: Route::Contact {}, "Contact" }
                Link { to: Route::Profile {}, "Profile" }
            }
            UserMenu {}
        }
        main {
            class: "content",
            Outlet::<Route> {}
        }
    }
}
