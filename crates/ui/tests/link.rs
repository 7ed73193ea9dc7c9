mod common;

use common::{attr_value, render};
use dioxus::prelude::*;
use dioxus_history::{MemoryHistory, provide_history_context};
use helphut_ui::{BaseLink, LinkStyle, LinkTarget, LinkVariant, ResolveClasses, UiError};
use std::rc::Rc;

#[test]
fn link_target_truth_table() {
    let cases = [
        (Some("/login"), false, false),
        (Some("/login"), true, true),
        (None, false, true),
        (None, true, true),
    ];

    for (to, external, expect_external) in cases {
        let target = LinkTarget::resolve(to.map(str::to_owned), external);
        assert_eq!(
            target.is_external(),
            expect_external,
            "to={to:?} external={external} resolved to {target:?}"
        );
    }

    assert_eq!(
        LinkTarget::resolve(Some("/register".to_owned()), false),
        LinkTarget::Internal { to: "/register".to_owned() }
    );
    assert_eq!(LinkTarget::resolve(None, false), LinkTarget::External { href: None });
}

#[derive(Clone, PartialEq)]
struct ExternalCase {
    to: Option<&'static str>,
    icon: bool,
}

fn external_link(case: ExternalCase) -> Element {
    let icon = rsx! { i { "arrow" } };
    match (case.to, case.icon) {
        (Some(to), true) => rsx! { BaseLink { to: to, external: true, icon: icon, "Docs" } },
        (Some(to), false) => rsx! { BaseLink { to: to, external: true, "Docs" } },
        (None, true) => rsx! { BaseLink { external: true, icon: icon, "Docs" } },
        (None, false) => rsx! { BaseLink { external: true, "Docs" } },
    }
}

#[test]
fn external_link_opens_new_context_without_opener_or_referrer() {
    let html = render(external_link, ExternalCase { to: Some("https://example.org"), icon: false });

    assert!(html.starts_with("<a"), "expected an anchor, got {html}");
    assert_eq!(attr_value(&html, "href").as_deref(), Some("https://example.org"));
    assert_eq!(attr_value(&html, "target").as_deref(), Some("_blank"));
    assert_eq!(attr_value(&html, "rel").as_deref(), Some("noopener noreferrer"));
}

#[test]
fn link_without_destination_is_external_and_has_no_href() {
    let html = render(external_link, ExternalCase { to: None, icon: false });

    assert!(html.starts_with("<a"));
    assert!(attr_value(&html, "href").is_none(), "href should be omitted: {html}");
    assert_eq!(attr_value(&html, "target").as_deref(), Some("_blank"));
}

#[test]
fn icon_trails_children() {
    let html = render(external_link, ExternalCase { to: Some("https://example.org"), icon: true });

    let text = html.find("Docs").expect("children rendered");
    let icon = html.find("inline-block").expect("icon wrapper rendered");
    assert!(text < icon, "icon must come after the text: {html}");
    assert!(html.contains(">arrow<"));
}

fn styled_link(_: ()) -> Element {
    rsx! {
        BaseLink {
            to: "https://example.org",
            external: true,
            variant: LinkVariant::Primary,
            underline: true,
            class: "text-emerald-700",
            "Docs"
        }
    }
}

#[test]
fn caller_class_overrides_variant_color() {
    let html = render(styled_link, ());
    let class = attr_value(&html, "class").expect("class attribute");

    assert!(class.split(' ').any(|c| c == "text-emerald-700"));
    assert!(!class.split(' ').any(|c| c == "text-blue-600"));
    assert!(class.contains("hover:text-blue-700"));
    assert!(class.contains("hover:underline"));
}

#[test]
fn unknown_link_variant_fails_fast() {
    let err = LinkStyle::from_keys("loud", false).unwrap_err();
    assert!(matches!(err, UiError::UnknownVariant { kind: "link variant", .. }));

    let style = LinkStyle::from_keys("muted", true).expect("known key");
    assert!(style.resolve(None).contains("text-gray-500"));
}

#[derive(Debug, Clone, PartialEq, Routable)]
enum ShelfRoute {
    #[route("/")]
    Shelf {},
    #[route("/login")]
    Desk {},
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct RoutedCase {
    to: Option<&'static str>,
    external: bool,
}

#[component]
fn Shelf() -> Element {
    let case = use_context::<RoutedCase>();
    let icon = rsx! { i { "arrow" } };

    match case.to {
        Some(to) => rsx! { BaseLink { to: to, external: case.external, icon: icon, "Docs" } },
        None => rsx! { BaseLink { external: case.external, icon: icon, "Docs" } },
    }
}

#[component]
fn Desk() -> Element {
    rsx! { "desk" }
}

fn routed_link(case: RoutedCase) -> Element {
    use_context_provider(|| case);
    use_hook(|| provide_history_context(Rc::new(MemoryHistory::with_initial_path("/"))));

    rsx! { Router::<ShelfRoute> {} }
}

#[test]
fn rendered_element_follows_the_truth_table() {
    let cases = [
        (Some("/login"), false, false),
        (Some("/login"), true, true),
        (None, false, true),
        (None, true, true),
    ];

    for (to, external, expect_external) in cases {
        let html = render(routed_link, RoutedCase { to, external });
        let anchor = &html[html.find("<a").expect("an anchor is rendered")..];

        if expect_external {
            assert_eq!(attr_value(anchor, "target").as_deref(), Some("_blank"), "{html}");
            assert_eq!(attr_value(anchor, "rel").as_deref(), Some("noopener noreferrer"), "{html}");
        } else {
            assert_eq!(attr_value(anchor, "href").as_deref(), Some("/login"), "{html}");
            assert!(!anchor.contains("_blank"), "internal link opened a new context: {html}");
            assert!(!anchor.contains("noopener"), "internal link carries rel: {html}");
        }

        let text = anchor.find("Docs").expect("children rendered");
        let icon = anchor.find("inline-block").expect("icon wrapper rendered");
        assert!(text < icon, "icon must come after the text: {html}");
    }
}
