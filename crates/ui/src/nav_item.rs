//! Sidebar navigation entry.

use crate::menu_group::Badge;
use crate::style::{ClassList, ResolveClasses};
use dioxus::prelude::*;

/// Style configuration of a [`NavItem`] row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavItemStyle {
    pub active: bool,
    pub level: u8,
}

impl ResolveClasses for NavItemStyle {
    fn class_list(&self) -> ClassList<'static> {
        ClassList::new()
            .with("group flex items-center gap-x-3 rounded-lg px-3 py-2.5 text-sm font-medium transition-all duration-200")
            .with(if self.active {
                "bg-blue-50 text-blue-700 shadow-sm"
            } else {
                "text-gray-600 hover:bg-gray-50 hover:text-gray-900"
            })
            .with_if(self.level > 0, "ml-6")
    }
}

impl NavItemStyle {
    fn icon(self) -> String {
        ClassList::new()
            .with("h-5 w-5 flex-shrink-0 transition-colors duration-200")
            .with(if self.active { "text-blue-600" } else { "text-gray-400 group-hover:text-gray-600" })
            .resolve()
    }

    fn badge(self) -> String {
        ClassList::new()
            .with("ml-auto rounded-full px-2 py-0.5 text-xs font-medium transition-colors duration-200")
            .with(if self.active {
                "bg-blue-100 text-blue-700"
            } else {
                "bg-gray-100 text-gray-600 group-hover:bg-gray-200 group-hover:text-gray-900"
            })
            .resolve()
    }
}

/// A router link row for sidebars, usually nested inside a [`crate::MenuGroup`].
#[component]
pub fn NavItem(
    #[props(into)] label: String,
    #[props(into)] to: String,
    icon: Option<Element>,
    #[props(default)] is_active: bool,
    badge: Option<Badge>,
    #[props(default)] level: u8,
    #[props(into)] class: Option<String>,
) -> Element {
    let style = NavItemStyle { active: is_active, level };
    let class = style.resolve(class.as_deref());

    rsx! {
        Link { to: NavigationTarget::Internal(to), class: class,
            if let Some(icon) = icon {
                span { class: style.icon(), {icon} }
            }
            span { class: "flex-1", "{label}" }
            if let Some(badge) = badge {
                span { class: style.badge(), "{badge}" }
            }
        }
    }
}
