//! Page shells. No page talks to a backend; forms only acknowledge input.

mod home;
mod login;
mod register;

pub(crate) use home::Home;
pub(crate) use login::Login;
pub(crate) use register::Register;

use crate::route::Route;
use dioxus::prelude::*;
use helphut_ui::{MenuGroup, NavItem};
use strum::IntoEnumIterator;

/// Community roles a visitor can sign up as.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, strum_macros::Display, strum_macros::EnumIter)]
pub(crate) enum Role {
    #[default]
    Donor,
    Volunteer,
    Partner,
}

impl Role {
    pub(crate) const fn summary(self) -> &'static str {
        match self {
            Self::Donor => "Easily donate surplus food and track your community impact",
            Self::Volunteer => "Help deliver food to those who need it most",
            Self::Partner => "Receive donations and manage your food inventory efficiently",
        }
    }
}

/// Navigation rail shared by every page.
#[component]
pub(crate) fn Sidebar() -> Element {
    let route = use_route::<Route>();
    let (home, login, register) = (Route::Home {}, Route::Login {}, Route::Register {});
    let home_active = route == home;
    let login_active = route == login;
    let register_active = route == register;

    rsx! {
        aside { class: "hidden w-64 shrink-0 border-r border-gray-200 bg-white p-4 lg:block",
            nav { class: "space-y-2",
                NavItem { label: "Home", to: home.to_string(), is_active: home_active }
                MenuGroup { title: "Account", default_open: true,
                    NavItem {
                        label: "Sign in",
                        to: login.to_string(),
                        is_active: login_active,
                        level: 1,
                    }
                    NavItem {
                        label: "Create an account",
                        to: register.to_string(),
                        is_active: register_active,
                        level: 1,
                    }
                }
            }
        }
    }
}

/// Two-column layout of the sign-in and sign-up pages.
#[component]
pub(crate) fn AuthLayout(#[props(into)] heading: String, children: Element) -> Element {
    rsx! {
        div { class: "min-h-screen flex bg-gray-50",
            Sidebar {}
            div { class: "hidden lg:flex lg:flex-1 lg:flex-col lg:px-16 lg:py-12 bg-gradient-to-b from-white to-blue-50",
                div { class: "flex flex-col items-center text-center mb-8",
                    h1 { class: "text-5xl font-bold text-gray-900 tracking-tight mb-6 max-w-xl", "HelpHut" }
                    p { class: "text-xl text-gray-600 mb-8 max-w-lg",
                        "Join our mission to reduce food waste and fight hunger in your local community."
                    }
                }
                div { class: "grid grid-cols-1 gap-10 max-w-lg mx-auto",
                    for role in Role::iter() {
                        div { key: "{role}", class: "flex items-start gap-6 bg-white p-6 rounded-xl shadow-sm",
                            div { class: "flex-1 text-left",
                                h3 { class: "text-lg font-semibold text-gray-900 mb-2", "{role}s" }
                                p { class: "text-gray-600", {role.summary()} }
                            }
                        }
                    }
                }
            }
            div { class: "flex-1 flex items-center justify-center px-4 sm:px-6 lg:px-8 py-12",
                div { class: "max-w-md w-full space-y-8",
                    h2 { class: "mt-6 text-center text-3xl font-extrabold text-gray-900", "{heading}" }
                    {children}
                }
            }
        }
    }
}
