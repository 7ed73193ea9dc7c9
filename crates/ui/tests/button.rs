mod common;

use common::{attr_value, class_of, has_attr, render};
use dioxus::prelude::*;
use helphut_ui::{Button, ButtonSize, ButtonVariant, LOADING_LABEL};

#[derive(Clone, PartialEq)]
struct Busy {
    disabled: bool,
}

fn busy_button(case: Busy) -> Element {
    rsx! {
        Button {
            is_loading: true,
            disabled: case.disabled,
            start_icon: rsx! { i { "start-icon" } },
            end_icon: rsx! { i { "end-icon" } },
            "Save"
        }
    }
}

#[test]
fn loading_replaces_content_and_blocks_interaction() {
    for disabled in [false, true] {
        let html = render(busy_button, Busy { disabled });

        assert!(html.contains(LOADING_LABEL), "disabled={disabled}: {html}");
        assert!(html.contains("animate-spin"));
        assert!(!html.contains("Save"));
        assert!(!html.contains("start-icon"));
        assert!(!html.contains("end-icon"));
        assert!(has_attr(&html, "disabled"), "{html}");
        assert_eq!(attr_value(&html, "aria-disabled").as_deref(), Some("true"));
        assert_eq!(attr_value(&html, "aria-busy").as_deref(), Some("true"));
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
struct Slots {
    start: bool,
    children: bool,
    end: bool,
}

fn idle_button(slots: Slots) -> Element {
    let start = rsx! { i { "start-icon" } };
    let end = rsx! { i { "end-icon" } };

    match (slots.start, slots.end) {
        (true, true) => rsx! {
            Button { start_icon: start, end_icon: end,
                if slots.children { "Save" }
            }
        },
        (true, false) => rsx! {
            Button { start_icon: start,
                if slots.children { "Save" }
            }
        },
        (false, true) => rsx! {
            Button { end_icon: end,
                if slots.children { "Save" }
            }
        },
        (false, false) => rsx! {
            Button {
                if slots.children { "Save" }
            }
        },
    }
}

#[test]
fn idle_content_renders_every_slot_combination_in_order() {
    for bits in 0_u8..8 {
        let slots = Slots { start: bits & 1 != 0, children: bits & 2 != 0, end: bits & 4 != 0 };
        let html = render(idle_button, slots);

        assert!(!html.contains(LOADING_LABEL), "{slots:?}: {html}");
        assert!(attr_value(&html, "aria-busy").is_none(), "{slots:?}: {html}");

        let positions: Vec<usize> = [
            (slots.start, "start-icon"),
            (slots.children, "Save"),
            (slots.end, "end-icon"),
        ]
        .into_iter()
        .filter_map(|(present, marker)| {
            let found = html.find(marker);
            assert_eq!(found.is_some(), present, "{slots:?}: {marker} in {html}");
            found
        })
        .collect();

        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{slots:?}: out of order {html}");
    }
}

#[test]
fn icon_slots_are_spaced() {
    let html = render(idle_button, Slots { start: true, children: true, end: true });
    assert!(html.contains(r#"class="mr-2 -ml-1""#));
    assert!(html.contains(r#"class="ml-2 -mr-1""#));
}

fn disabled_button(_: ()) -> Element {
    rsx! { Button { disabled: true, "Save" } }
}

#[test]
fn disabled_without_loading_keeps_content() {
    let html = render(disabled_button, ());

    assert!(html.contains("Save"));
    assert!(!html.contains(LOADING_LABEL));
    assert_eq!(attr_value(&html, "aria-disabled").as_deref(), Some("true"));
    assert!(attr_value(&html, "aria-busy").is_none());
}

fn styled_button(_: ()) -> Element {
    rsx! {
        Button {
            variant: ButtonVariant::Glass,
            size: ButtonSize::Lg,
            submit: true,
            class: "bg-red-900 px-8",
            "Send"
        }
    }
}

#[test]
fn caller_classes_win_over_variant_and_size() {
    let html = render(styled_button, ());
    let class = class_of(&html, "button").expect("button class");
    let classes: Vec<&str> = class.split(' ').collect();

    assert!(classes.contains(&"bg-red-900"));
    assert!(!classes.contains(&"bg-white/80"));
    assert!(classes.contains(&"px-8"));
    assert!(!classes.contains(&"px-6"));
    assert!(classes.contains(&"py-3"));
    assert!(classes.contains(&"text-base"));
    assert!(classes.contains(&"focus:ring-gray-200"));
    assert_eq!(attr_value(&html, "type").as_deref(), Some("submit"));
}
