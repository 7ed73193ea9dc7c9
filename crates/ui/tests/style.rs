use helphut_ui::{
    ButtonSize, ButtonStyle, ButtonVariant, LinkStyle, LinkVariant, ResolveClasses, UiError,
    VariantKey,
};
use proptest::prelude::*;
use strum::IntoEnumIterator;

fn button_variant() -> impl Strategy<Value = ButtonVariant> {
    proptest::sample::select(ButtonVariant::iter().collect::<Vec<_>>())
}

fn button_size() -> impl Strategy<Value = ButtonSize> {
    proptest::sample::select(ButtonSize::iter().collect::<Vec<_>>())
}

fn palette_color() -> impl Strategy<Value = String> {
    let hues = prop::sample::select(vec!["slate", "red", "amber", "emerald", "violet", "pink"]);
    let shades = prop::sample::select(vec![50_u16, 100, 300, 500, 700, 900]);
    (hues, shades).prop_map(|(hue, shade)| format!("{hue}-{shade}"))
}

proptest! {
    #[test]
    fn button_resolution_is_deterministic(variant in button_variant(), size in button_size()) {
        let style = ButtonStyle { variant, size };
        prop_assert_eq!(style.resolve(None), style.resolve(None));
    }

    #[test]
    fn caller_background_always_wins(variant in button_variant(), size in button_size(), color in palette_color()) {
        let extra = format!("bg-{color}");
        let resolved = ButtonStyle { variant, size }.resolve(Some(&extra));
        let classes: Vec<&str> = resolved.split(' ').collect();

        prop_assert_eq!(classes.last().copied(), Some(extra.as_str()));
        let backgrounds = classes
            .iter()
            .filter(|c| c.starts_with("bg-") && !c.starts_with("bg-gradient"))
            .count();
        prop_assert_eq!(backgrounds, 1, "{}", resolved);
    }

    #[test]
    fn caller_text_color_replaces_variant_color_only(variant in prop::sample::select(LinkVariant::iter().collect::<Vec<_>>()), color in palette_color()) {
        let extra = format!("text-{color}");
        let resolved = LinkStyle { variant, underline: true }.resolve(Some(&extra));
        let classes: Vec<&str> = resolved.split(' ').collect();

        let plain_text_colors: Vec<&str> = classes
            .iter()
            .copied()
            .filter(|c| c.starts_with("text-"))
            .collect();
        let expected = vec![extra.as_str()];
        prop_assert_eq!(plain_text_colors, expected);
        prop_assert!(classes.iter().any(|c| c.starts_with("hover:text-")));
    }

    #[test]
    fn unknown_keys_are_rejected(key in "[a-z]{1,8}") {
        prop_assume!(!ButtonVariant::keys().contains(&key));
        let rejected = matches!(
            ButtonVariant::parse_key(&key),
            Err(UiError::UnknownVariant { kind: "button variant", .. })
        );
        prop_assert!(rejected);
    }
}

#[test]
fn every_listed_key_parses() {
    for key in ButtonVariant::keys() {
        assert!(ButtonVariant::parse_key(&key).is_ok(), "{key}");
    }
    for key in ButtonSize::keys() {
        assert!(ButtonSize::parse_key(&key).is_ok(), "{key}");
    }
    for key in LinkVariant::keys() {
        assert!(LinkVariant::parse_key(&key).is_ok(), "{key}");
    }
}

#[test]
fn from_keys_reports_the_offending_table() {
    let err = ButtonStyle::from_keys("primary", "xl").unwrap_err();
    assert_eq!(err.to_string(), "Unknown button size 'xl'");

    let err = LinkStyle::from_keys("loud", false).unwrap_err();
    assert_eq!(err.to_string(), "Unknown link variant 'loud'");
}
