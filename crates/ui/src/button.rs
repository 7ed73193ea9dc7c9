//! Button Component

use crate::error::UiError;
use crate::icons::Spinner;
use crate::style::{ClassList, ResolveClasses, StyleBundle, VariantKey};
use dioxus::prelude::*;
use strum_macros::{Display, EnumIter, EnumString};

const BUTTON_BASE: &str = "relative inline-flex items-center justify-center font-medium \
    rounded-xl shadow-lg \
    transition-all duration-200 ease-out \
    hover:translate-y-[-1px] hover:shadow-xl active:translate-y-[1px] \
    focus:outline-none focus:ring-2 focus:ring-offset-2 \
    disabled:opacity-50 disabled:pointer-events-none disabled:shadow-none";

/// Label shown while the caller reports the action as in flight.
pub const LOADING_LABEL: &str = "Loading...";

/// Button variant
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum ButtonVariant {
    /// Primary action button (blue)
    #[default]
    Primary,
    /// Secondary button (gray)
    Secondary,
    /// Destructive button (red)
    Danger,
    /// Confirming button (green)
    Success,
    /// Translucent button for busy backgrounds
    Glass,
}

impl ButtonVariant {
    /// Focus ring color paired with each variant.
    #[must_use]
    pub const fn focus_ring(self) -> &'static str {
        match self {
            Self::Primary => "focus:ring-blue-200",
            Self::Secondary | Self::Glass => "focus:ring-gray-200",
            Self::Danger => "focus:ring-red-200",
            Self::Success => "focus:ring-green-200",
        }
    }
}

impl StyleBundle for ButtonVariant {
    fn classes(self) -> &'static str {
        match self {
            Self::Primary => {
                "bg-gradient-to-b from-blue-400 to-blue-500 text-white shadow-blue-200/50"
            },
            Self::Secondary => {
                "bg-gradient-to-b from-gray-50 to-gray-100 text-gray-900 shadow-gray-200/50"
            },
            Self::Danger => "bg-gradient-to-b from-red-400 to-red-500 text-white shadow-red-200/50",
            Self::Success => {
                "bg-gradient-to-b from-green-400 to-green-500 text-white shadow-green-200/50"
            },
            Self::Glass => {
                "bg-white/80 backdrop-blur-sm border border-white/20 text-gray-900 shadow-gray-200/50"
            },
        }
    }
}

impl VariantKey for ButtonVariant {
    const KIND: &'static str = "button variant";
}

/// Button size
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum ButtonSize {
    /// Small button
    Sm,
    /// Medium button (default)
    #[default]
    Md,
    /// Large button
    Lg,
}

impl StyleBundle for ButtonSize {
    fn classes(self) -> &'static str {
        match self {
            Self::Sm => "px-3 py-1.5 text-sm",
            Self::Md => "px-5 py-2.5 text-sm",
            Self::Lg => "px-6 py-3 text-base",
        }
    }
}

impl VariantKey for ButtonSize {
    const KIND: &'static str = "button size";
}

/// Style configuration of [`Button`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonStyle {
    pub variant: ButtonVariant,
    pub size: ButtonSize,
}

impl ButtonStyle {
    /// Builds the configuration from string keys.
    ///
    /// # Errors
    /// Returns [`UiError::UnknownVariant`] if either key is outside its table.
    pub fn from_keys(variant: &str, size: &str) -> Result<Self, UiError> {
        Ok(Self { variant: ButtonVariant::parse_key(variant)?, size: ButtonSize::parse_key(size)? })
    }
}

impl ResolveClasses for ButtonStyle {
    fn class_list(&self) -> ClassList<'static> {
        ClassList::new()
            .with(BUTTON_BASE)
            .with(self.variant.classes())
            .with(self.size.classes())
            .with(self.variant.focus_ring())
    }
}

/// Interaction gate of a button: busy and disabled are OR-combined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Interaction {
    busy: bool,
    disabled: bool,
}

impl Interaction {
    #[must_use]
    pub const fn new(busy: bool, disabled: bool) -> Self {
        Self { busy, disabled }
    }

    #[must_use]
    pub const fn is_busy(self) -> bool {
        self.busy
    }

    #[must_use]
    pub const fn is_interactive(self) -> bool {
        !(self.busy || self.disabled)
    }
}

/// A styled button.
///
/// While `is_loading` is set the content is replaced by a spinner and
/// [`LOADING_LABEL`], and the button is disabled whatever `disabled` says.
#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default)] size: ButtonSize,
    #[props(default)] is_loading: bool,
    #[props(default)] disabled: bool,
    /// Renders `type="submit"` instead of `type="button"`.
    #[props(default)]
    submit: bool,
    start_icon: Option<Element>,
    end_icon: Option<Element>,
    #[props(into)] class: Option<String>,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let interaction = Interaction::new(is_loading, disabled);
    let class = ButtonStyle { variant, size }.resolve(class.as_deref());
    let kind = if submit { "submit" } else { "button" };
    let aria_disabled = (!interaction.is_interactive()).then_some("true");
    let aria_busy = interaction.is_busy().then_some("true");

    rsx! {
        button {
            r#type: kind,
            class,
            disabled: !interaction.is_interactive(),
            "aria-disabled": aria_disabled,
            "aria-busy": aria_busy,
            onclick: move |evt| {
                if !interaction.is_interactive() {
                    return;
                }
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            if interaction.is_busy() {
                Spinner { class: "animate-spin -ml-1 mr-2 h-4 w-4" }
                span { "{LOADING_LABEL}" }
            } else {
                if let Some(icon) = start_icon {
                    span { class: "mr-2 -ml-1", {icon} }
                }
                {children}
                if let Some(icon) = end_icon {
                    span { class: "ml-2 -mr-1", {icon} }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_interaction_is_or_of_busy_and_disabled() {
        assert!(Interaction::new(false, false).is_interactive());
        assert!(!Interaction::new(true, false).is_interactive());
        assert!(!Interaction::new(false, true).is_interactive());
        assert!(!Interaction::new(true, true).is_interactive());
    }

    #[test]
    fn test_every_variant_has_one_focus_ring() {
        for variant in ButtonVariant::iter() {
            let resolved = ButtonStyle { variant, size: ButtonSize::Md }.resolve(None);
            let rings = resolved
                .split(' ')
                .filter(|c| c.starts_with("focus:ring-") && !c.starts_with("focus:ring-offset"))
                .filter(|c| *c != "focus:ring-2")
                .count();
            assert_eq!(rings, 1, "{variant} should carry exactly one focus ring color");
        }
    }

    #[test]
    fn test_from_keys_rejects_unknown_size() {
        let err = ButtonStyle::from_keys("primary", "xl").unwrap_err();
        assert!(matches!(err, UiError::UnknownVariant { kind: "button size", .. }));
    }
}
