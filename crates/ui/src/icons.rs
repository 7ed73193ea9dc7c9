//! Inline SVG glyphs shared by the primitives.

use dioxus::prelude::*;

/// Indeterminate progress indicator.
#[component]
pub fn Spinner(#[props(into)] class: String) -> Element {
    rsx! {
        svg {
            class,
            fill: "none",
            view_box: "0 0 24 24",
            "aria-hidden": "true",
            circle {
                class: "opacity-25",
                cx: "12",
                cy: "12",
                r: "10",
                stroke: "currentColor",
                stroke_width: "4",
            }
            path {
                class: "opacity-75",
                fill: "currentColor",
                d: "M4 12a8 8 0 018-8V0C5.373 0 0 5.373 0 12h4zm2 5.291A7.962 7.962 0 014 12H0c0 3.042 1.135 5.824 3 7.938l3-2.647z",
            }
        }
    }
}

/// Downward chevron used by disclosure triggers.
#[component]
pub fn Chevron(#[props(into)] class: String) -> Element {
    rsx! {
        svg {
            class,
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            polyline { points: "6 9 12 15 18 9" }
        }
    }
}
