#![allow(dead_code)]

use dioxus::prelude::*;

/// Renders `root` once with `props` and returns the HTML.
pub fn render<P: Clone + 'static>(root: fn(P) -> Element, props: P) -> String {
    let mut dom = VirtualDom::new_with_props(root, props);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

/// Value of the first ` name=` attribute in `html`, quoted or not.
pub fn attr_value(html: &str, name: &str) -> Option<String> {
    let needle = format!(" {name}=");
    let start = html.find(&needle)? + needle.len();
    let rest = &html[start..];

    let value = match rest.strip_prefix('"') {
        Some(quoted) => quoted.split('"').next().unwrap_or_default(),
        None => rest.split([' ', '>', '/']).next().unwrap_or_default(),
    };

    Some(value.to_owned())
}

/// Class attribute of the first `<tag` element in `html`.
pub fn class_of(html: &str, tag: &str) -> Option<String> {
    let start = html.find(&format!("<{tag}"))?;
    attr_value(&html[start..], "class")
}

/// Whether `html` carries a ` name` attribute, with or without a value.
pub fn has_attr(html: &str, name: &str) -> bool {
    ['=', ' ', '>', '/'].iter().any(|next| html.contains(&format!(" {name}{next}")))
}
