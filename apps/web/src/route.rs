use crate::pages::{Home, Login, Register};
use dioxus::prelude::*;

/// Every path the shell serves. Unknown paths land on [`Route::Home`].
#[derive(Debug, Clone, PartialEq, Eq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
    #[redirect("/:..segments", |segments: Vec<String>| {
        tracing::debug!(path = %segments.join("/"), "Redirecting unknown path");
        Route::Home {}
    })]
    #[route("/")]
    Home {},
}

/// Root component: mounts the router.
#[component]
pub fn App() -> Element {
    rsx! {
        Router::<Route> {}
    }
}
