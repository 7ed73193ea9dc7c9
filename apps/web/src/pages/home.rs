use super::{Role, Sidebar};
use crate::route::Route;
use crate::shell::AppTitle;
use dioxus::prelude::*;
use helphut_ui::{BaseLink, Button, ButtonSize, LinkVariant};
use strum::IntoEnumIterator;

const CARD_CLASS: &str = "group relative overflow-hidden rounded-lg border bg-white p-6 text-left shadow-sm transition-all hover:shadow-md";

#[component]
pub(crate) fn Home() -> Element {
    let title = try_consume_context::<AppTitle>().unwrap_or_default().0;
    let navigator = use_navigator();
    let register = Route::Register {}.to_string();

    rsx! {
        div { class: "min-h-screen flex bg-gray-50",
            Sidebar {}
            main { class: "flex-1 px-4 py-8",
                div { class: "mx-auto max-w-6xl",
                    div { class: "mb-8 text-center",
                        h1 { class: "text-4xl font-bold tracking-tight", "Welcome to {title}" }
                        p { class: "mt-2 text-lg text-gray-500",
                            "Connect surplus food with the people who need it."
                        }
                    }
                    div { class: "grid gap-6 sm:grid-cols-3",
                        for role in Role::iter() {
                            div { key: "{role}", class: CARD_CLASS,
                                h3 { class: "font-semibold", "{role}s" }
                                p { class: "mt-1 text-sm text-gray-500", {role.summary()} }
                                div { class: "mt-4",
                                    BaseLink {
                                        to: register.clone(),
                                        variant: LinkVariant::Primary,
                                        underline: true,
                                        "Join as a {role}"
                                    }
                                }
                            }
                        }
                    }
                    div { class: "mt-10 flex justify-center gap-4",
                        Button {
                            size: ButtonSize::Lg,
                            onclick: move |_| {
                                navigator.push(Route::Login {});
                            },
                            "Sign in"
                        }
                        BaseLink {
                            to: "https://www.feedingamerica.org/find-your-local-foodbank",
                            external: true,
                            variant: LinkVariant::Muted,
                            "Find a food bank"
                        }
                    }
                }
            }
        }
    }
}
