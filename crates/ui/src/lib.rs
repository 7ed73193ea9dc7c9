//! # UI primitives
//!
//! Presentational building blocks shared by every HelpHut page: a polymorphic
//! link, a button with a caller-driven busy state, labeled fields and a
//! collapsible menu group.
//!
//! * Styling is expressed as utility classes. Each primitive owns closed
//!   variant/size tables ([`StyleBundle`]) and resolves them through a
//!   [`ClassList`], with caller classes stacked last.
//! * Primitives are stateless renderers of their props, except
//!   [`MenuGroup`], which owns its [`DisclosureState`].
//!
//! ## Example
//!
//! ```rust,ignore
//! use dioxus::prelude::*;
//! use helphut_ui::{Button, ButtonVariant, MenuGroup, NavItem};
//!
//! #[component]
//! fn Sidebar(saving: bool) -> Element {
//!     rsx! {
//!         MenuGroup { title: "Overview", default_open: true,
//!             NavItem { label: "Dashboard", to: "/" }
//!         }
//!         Button { variant: ButtonVariant::Success, is_loading: saving, "Save" }
//!     }
//! }
//! ```

mod button;
mod error;
mod field;
mod icons;
mod input;
mod link;
mod menu_group;
mod nav_item;
mod style;
mod textarea;

pub use crate::button::{
    Button, ButtonProps, ButtonSize, ButtonStyle, ButtonVariant, Interaction, LOADING_LABEL,
};
pub use crate::error::{UiError, UiErrorExt};
pub use crate::field::{FieldBinding, FieldKind, FieldStyle, field_id, merge_attributes};
pub use crate::icons::{Chevron, ChevronProps, Spinner, SpinnerProps};
pub use crate::input::{Input, InputProps};
pub use crate::link::{BaseLink, BaseLinkProps, LinkStyle, LinkTarget, LinkVariant};
pub use crate::menu_group::{
    Badge, DisclosureState, MenuGroup, MenuGroupProps, TriggerStyle, chevron_class,
};
pub use crate::nav_item::{NavItem, NavItemProps, NavItemStyle};
pub use crate::style::{ClassList, ResolveClasses, StyleBundle, VariantKey};
pub use crate::textarea::{DEFAULT_ROWS, Textarea, TextareaProps};
