//! Base link that renders either a router link or an external anchor.

use crate::error::UiError;
use crate::style::{ClassList, ResolveClasses, StyleBundle, VariantKey};
use dioxus::prelude::*;
use strum_macros::{Display, EnumIter, EnumString};

const LINK_BASE: &str = "inline-flex items-center gap-2 transition-colors focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-gray-950 focus-visible:ring-offset-2";
const UNDERLINE_ON: &str = "underline-offset-4 hover:underline";
const UNDERLINE_OFF: &str = "no-underline";

/// Link color presets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum LinkVariant {
    #[default]
    Default,
    Muted,
    Primary,
    Destructive,
}

impl StyleBundle for LinkVariant {
    fn classes(self) -> &'static str {
        match self {
            Self::Default => "text-gray-900 hover:text-gray-700",
            Self::Muted => "text-gray-500 hover:text-gray-900",
            Self::Primary => "text-blue-600 hover:text-blue-700",
            Self::Destructive => "text-red-600 hover:text-red-700",
        }
    }
}

impl VariantKey for LinkVariant {
    const KIND: &'static str = "link variant";
}

/// Style configuration of [`BaseLink`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinkStyle {
    pub variant: LinkVariant,
    pub underline: bool,
}

impl LinkStyle {
    /// Builds the configuration from string keys.
    ///
    /// # Errors
    /// Returns [`UiError::UnknownVariant`] if `variant` is not a link variant.
    pub fn from_keys(variant: &str, underline: bool) -> Result<Self, UiError> {
        Ok(Self { variant: LinkVariant::parse_key(variant)?, underline })
    }
}

impl ResolveClasses for LinkStyle {
    fn class_list(&self) -> ClassList<'static> {
        ClassList::new()
            .with(LINK_BASE)
            .with(self.variant.classes())
            .with(if self.underline { UNDERLINE_ON } else { UNDERLINE_OFF })
    }
}

/// Where a link goes, derived from `to` and `external` on every render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkTarget {
    /// Client-side route transition inside the app.
    Internal { to: String },
    /// Navigation into a new browsing context. `href` may be absent.
    External { href: Option<String> },
}

impl LinkTarget {
    pub const EXTERNAL_TARGET: &'static str = "_blank";
    pub const EXTERNAL_REL: &'static str = "noopener noreferrer";

    /// A link is external when asked to be, or when it has nowhere to route to.
    #[must_use]
    pub fn resolve(to: Option<String>, external: bool) -> Self {
        match to {
            Some(to) if !external => Self::Internal { to },
            href => Self::External { href },
        }
    }

    #[must_use]
    pub const fn is_external(&self) -> bool {
        matches!(self, Self::External { .. })
    }
}

/// Text link with an optional trailing icon.
///
/// ```rust,ignore
/// rsx! {
///     BaseLink { to: "/register", variant: LinkVariant::Primary, "Create an account" }
///     BaseLink { to: "https://example.org", external: true, icon: rsx! { ExternalIcon {} }, "Docs" }
/// }
/// ```
#[component]
pub fn BaseLink(
    #[props(into)] to: Option<String>,
    #[props(default)] external: bool,
    icon: Option<Element>,
    #[props(default)] variant: LinkVariant,
    #[props(default)] underline: bool,
    #[props(into)] class: Option<String>,
    children: Element,
) -> Element {
    let class = LinkStyle { variant, underline }.resolve(class.as_deref());
    let target = LinkTarget::resolve(to, external);

    match target {
        LinkTarget::External { href } => {
            if href.is_none() {
                tracing::debug!("Rendering external link without href");
            }
            rsx! {
                a {
                    class,
                    href,
                    target: LinkTarget::EXTERNAL_TARGET,
                    rel: LinkTarget::EXTERNAL_REL,
                    {children}
                    if let Some(icon) = icon {
                        span { class: "inline-block", {icon} }
                    }
                }
            }
        },
        LinkTarget::Internal { to } => rsx! {
            Link { to: NavigationTarget::Internal(to), class: class,
                {children}
                if let Some(icon) = icon {
                    span { class: "inline-block", {icon} }
                }
            }
        },
    }
}
