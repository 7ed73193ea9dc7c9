use super::{AuthLayout, Role};
use crate::route::Route;
use dioxus::prelude::*;
use helphut_ui::{BaseLink, Button, ButtonSize, ButtonVariant, Input, LinkVariant, Textarea};
use strum::IntoEnumIterator;

#[component]
pub(crate) fn Register() -> Element {
    let mut role = use_signal(Role::default);
    let mut notice = use_signal(|| None::<String>);
    let selected = role();

    rsx! {
        AuthLayout { heading: "Create your account",
            p { class: "mt-2 text-center text-sm text-gray-600",
                "Already registered? "
                BaseLink { to: Route::Login {}.to_string(), variant: LinkVariant::Primary, "Sign in" }
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
                    tracing::info!(role = %role.peek(), "Sign-up submitted");
                    notice.set(Some("Sign-up is not connected yet.".to_owned()));
                },
                div { class: "flex gap-2",
                    for option in Role::iter() {
                        Button {
                            key: "{option}",
                            size: ButtonSize::Sm,
                            variant: role_variant(option, selected),
                            onclick: move |_| role.set(option),
                            "{option}"
                        }
                    }
                }
                Input { label: "Name", name: "name", required: true }
                Input { label: "Email", r#type: "email", name: "email", required: true }
                Input {
                    label: "Password",
                    r#type: "password",
                    name: "password",
                    helper_text: "At least 8 characters",
                    required: true,
                }
                {match selected {
                    Role::Donor => rsx! {
                        Input { label: "Organization Name", name: "organization_name" }
                        Input { label: "Business Hours", name: "business_hours" }
                    },
                    Role::Volunteer => rsx! {
                        Input { label: "Phone Number", r#type: "tel", name: "phone" }
                        Input { label: "Vehicle Type", name: "vehicle_type" }
                    },
                    Role::Partner => rsx! {
                        Input { label: "Organization Name", name: "organization_name" }
                        Input { label: "Organization Contact Email", r#type: "email", name: "contact_email" }
                        Textarea { label: "About your organization", name: "about", rows: 4 }
                    },
                }}
                Button { submit: true, variant: ButtonVariant::Success, class: "w-full", "Create account" }
            }
        }
    }
}

fn role_variant(option: Role, selected: Role) -> ButtonVariant {
    if option == selected { ButtonVariant::Primary } else { ButtonVariant::Secondary }
}
