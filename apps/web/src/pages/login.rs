use super::AuthLayout;
use crate::route::Route;
use dioxus::prelude::*;
use helphut_ui::{BaseLink, Button, Input, LinkVariant};

#[component]
pub(crate) fn Login() -> Element {
    let mut notice = use_signal(|| None::<String>);

    rsx! {
        AuthLayout { heading: "Sign in to HelpHut",
            p { class: "mt-2 text-center text-sm text-gray-600",
                "Or "
                BaseLink { to: Route::Register {}.to_string(), variant: LinkVariant::Primary, "create a new account" }
            }
            if let Some(message) = notice() {
                div { class: "rounded-md bg-blue-50 p-4",
                    div { class: "text-sm text-blue-700", "{message}" }
                }
            }
            form {
                class: "mt-8 space-y-6",
                onsubmit: move |event: FormEvent| {
                    event.prevent_default();
                    tracing::info!("Sign-in submitted");
                    notice.set(Some("Sign-in is not connected yet.".to_owned()));
                },
                Input { label: "Email address", r#type: "email", name: "email", autocomplete: "email", required: true }
                Input { label: "Password", r#type: "password", name: "password", autocomplete: "current-password", required: true }
                Button { submit: true, class: "w-full", "Sign in" }
            }
        }
    }
}
