//! Collapsible menu group (disclosure).

use crate::icons::Chevron;
use crate::style::{ClassList, ResolveClasses};
use dioxus::prelude::*;
use std::fmt;

const TRIGGER_BASE: &str = "group flex w-full items-center justify-between rounded-md px-3 py-2 text-sm font-medium transition-colors hover:bg-accent hover:text-accent-foreground";
const INDENT: &str = "ml-6";
const CHEVRON_BASE: &str = "h-4 w-4 text-muted-foreground transition-transform duration-200 group-hover:text-accent-foreground";
const CHEVRON_OPEN: &str = "rotate-180";
const BADGE_CLASS: &str = "rounded-full bg-muted px-2 py-0.5 text-xs font-medium text-muted-foreground group-hover:bg-accent-foreground/10 group-hover:text-accent-foreground";
const ICON_CLASS: &str = "h-4 w-4 text-muted-foreground group-hover:text-accent-foreground";

/// Open/closed state of one disclosure plus whether its content is mounted.
///
/// The open flag flips immediately on [`DisclosureState::toggle`]. Content
/// mounts as soon as the group opens. On close it unmounts at once, unless an
/// animation has started and not yet finished; then it stays until
/// [`DisclosureState::animation_finished`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisclosureState {
    open: bool,
    content_mounted: bool,
    animating: bool,
}

impl DisclosureState {
    #[must_use]
    pub const fn new(default_open: bool) -> Self {
        Self { open: default_open, content_mounted: default_open, animating: false }
    }

    #[must_use]
    pub const fn is_open(self) -> bool {
        self.open
    }

    #[must_use]
    pub const fn is_content_present(self) -> bool {
        self.content_mounted
    }

    #[must_use]
    pub const fn is_animating(self) -> bool {
        self.animating
    }

    pub const fn toggle(&mut self) {
        self.open = !self.open;
        self.content_mounted = self.open || self.animating;
    }

    /// Called when the content's expand/collapse animation starts.
    pub const fn animation_started(&mut self) {
        if self.content_mounted {
            self.animating = true;
        }
    }

    /// Called when the content's expand/collapse animation ends.
    pub const fn animation_finished(&mut self) {
        self.animating = false;
        if !self.open {
            self.content_mounted = false;
        }
    }

    #[must_use]
    pub const fn data_state(self) -> &'static str {
        if self.open { "open" } else { "closed" }
    }
}

/// Trailing badge on a trigger row, rendered verbatim.
///
/// Pass it as `badge: Badge::Count(3)` or `badge: Badge::from("new")`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Badge {
    Text(String),
    Count(u64),
}

impl fmt::Display for Badge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Count(count) => write!(f, "{count}"),
        }
    }
}

impl From<&str> for Badge {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for Badge {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<u64> for Badge {
    fn from(count: u64) -> Self {
        Self::Count(count)
    }
}

impl From<u32> for Badge {
    fn from(count: u32) -> Self {
        Self::Count(u64::from(count))
    }
}

impl From<usize> for Badge {
    fn from(count: usize) -> Self {
        Self::Count(u64::try_from(count).unwrap_or(u64::MAX))
    }
}

/// Style configuration of a disclosure trigger row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TriggerStyle {
    pub level: u8,
}

impl ResolveClasses for TriggerStyle {
    fn class_list(&self) -> ClassList<'static> {
        ClassList::new().with(TRIGGER_BASE).with_if(self.level > 0, INDENT)
    }
}

/// Classes of the trigger chevron for the given open state.
#[must_use]
pub fn chevron_class(open: bool) -> String {
    ClassList::new().with(CHEVRON_BASE).with_if(open, CHEVRON_OPEN).resolve()
}

/// A titled group of menu entries that expands and collapses on click.
///
/// Each instance owns its own state; `default_open` is only read on mount.
/// Nested groups pass `level` to indent their trigger row.
#[component]
pub fn MenuGroup(
    #[props(into)] title: String,
    icon: Option<Element>,
    badge: Option<Badge>,
    #[props(default)] default_open: bool,
    #[props(default)] level: u8,
    #[props(into)] class: Option<String>,
    children: Element,
) -> Element {
    let mut state = use_signal(|| DisclosureState::new(default_open));
    let current = state();
    let trigger_class = TriggerStyle { level }.resolve(class.as_deref());
    let content_class = if current.is_open() {
        "overflow-hidden animate-expand"
    } else {
        "overflow-hidden animate-collapse"
    };
    let expanded = if current.is_open() { "true" } else { "false" };
    let log_title = title.clone();

    rsx! {
        div { "data-state": current.data_state(),
            button {
                r#type: "button",
                class: trigger_class,
                "aria-expanded": expanded,
                "data-state": current.data_state(),
                onclick: move |_| {
                    state.write().toggle();
                    tracing::debug!(title = %log_title, open = state.peek().is_open(), "Menu group toggled");
                },
                div { class: "flex items-center gap-x-3",
                    if let Some(icon) = icon {
                        span { class: ICON_CLASS, {icon} }
                    }
                    span { "{title}" }
                }
                div { class: "flex items-center gap-x-2",
                    if let Some(badge) = badge {
                        span { class: BADGE_CLASS, "{badge}" }
                    }
                    Chevron { class: chevron_class(current.is_open()) }
                }
            }
            if current.is_content_present() {
                div {
                    class: content_class,
                    "data-state": current.data_state(),
                    onanimationstart: move |_| state.write().animation_started(),
                    onanimationend: move |_| state.write().animation_finished(),
                    div { class: "py-2", {children} }
                }
            }
        }
    }
}
