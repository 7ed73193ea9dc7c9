//! # Variant resolution
//!
//! Every primitive describes its look as a stack of utility-class bundles:
//! base structural classes, then the variant bundle, then the size bundle,
//! then per-flag bundles, and finally whatever extra classes the caller
//! passed in. [`ClassList::resolve`] flattens that stack into one class
//! string where later bundles override earlier ones.
//!
//! Two classes "conflict" when they set the same property under the same
//! modifier chain, e.g. `bg-white/80` and `bg-red-600`, or `hover:text-gray-700`
//! and `hover:text-blue-700`. The later class wins and takes the later
//! position. Classes that set different properties with the same prefix
//! (`text-sm` vs `text-white`, `shadow-lg` vs `shadow-blue-200/50`) never
//! conflict.
//!
//! Variant and size tables are closed enums. Their bundles are resolved by an
//! exhaustive `match` ([`StyleBundle`]), and parsing a string key that is not
//! in the table fails with [`UiError::UnknownVariant`] ([`VariantKey`]).

use crate::error::UiError;
use std::fmt::Display;
use std::str::FromStr;
use strum::IntoEnumIterator;

/// Ordered stack of utility classes, accumulated bundle by bundle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList<'a> {
    /// Each class with whether it was stacked additively.
    classes: Vec<(&'a str, bool)>,
}

impl<'a> ClassList<'a> {
    #[must_use]
    pub const fn new() -> Self {
        Self { classes: Vec::new() }
    }

    /// Appends every whitespace-separated class of `bundle`.
    #[must_use]
    pub fn with(mut self, bundle: &'a str) -> Self {
        self.classes.extend(bundle.split_whitespace().map(|class| (class, false)));
        self
    }

    /// Appends `bundle` on top of the stack without evicting conflicting
    /// classes already present. Later bundles may still override it.
    #[must_use]
    pub fn with_additive_if(mut self, condition: bool, bundle: &'a str) -> Self {
        if condition {
            self.classes.extend(bundle.split_whitespace().map(|class| (class, true)));
        }
        self
    }

    /// Appends `bundle` only when `condition` holds.
    #[must_use]
    pub fn with_if(self, condition: bool, bundle: &'a str) -> Self {
        if condition { self.with(bundle) } else { self }
    }

    /// Appends caller supplied classes. These always come last and therefore win.
    #[must_use]
    pub fn with_extra(self, extra: Option<&'a str>) -> Self {
        match extra {
            Some(extra) => self.with(extra),
            None => self,
        }
    }

    /// Number of classes pushed so far, duplicates included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Flattens the stack into a single class attribute value.
    #[must_use]
    pub fn resolve(&self) -> String {
        let mut kept: Vec<(&str, Option<String>)> = Vec::with_capacity(self.classes.len());

        for &(class, additive) in &self.classes {
            let key = conflict_key(class);
            kept.retain(|(existing, existing_key)| {
                *existing != class && (additive || key.is_none() || *existing_key != key)
            });
            kept.push((class, key));
        }

        kept.iter().map(|(class, _)| *class).collect::<Vec<_>>().join(" ")
    }
}

/// A closed enum whose every value maps to exactly one class bundle.
pub trait StyleBundle: Copy {
    fn classes(self) -> &'static str;
}

/// String keys for closed enums. Unknown keys are rejected, never defaulted.
pub trait VariantKey: Sized + FromStr + IntoEnumIterator + Display {
    /// Human readable table name used in error messages.
    const KIND: &'static str;

    /// Parses a key from the closed table.
    ///
    /// # Errors
    /// Returns [`UiError::UnknownVariant`] if `key` names no entry of the table.
    fn parse_key(key: &str) -> Result<Self, UiError> {
        key.parse().map_err(|_| UiError::UnknownVariant {
            kind: Self::KIND,
            key: key.to_owned().into(),
            context: None,
        })
    }

    /// All keys of the table in declaration order.
    #[must_use]
    fn keys() -> Vec<String> {
        Self::iter().map(|value| value.to_string()).collect()
    }
}

/// A style configuration that knows its own class stack.
pub trait ResolveClasses {
    fn class_list(&self) -> ClassList<'static>;

    /// Resolves the configuration with caller supplied classes on top.
    fn resolve(&self, extra: Option<&str>) -> String {
        self.class_list().with_extra(extra).resolve()
    }
}

/// Returns `"{modifiers}|{group}"` for classes that take part in conflict
/// resolution, `None` for classes that only de-duplicate.
fn conflict_key(class: &str) -> Option<String> {
    let (modifiers, utility) = split_modifiers(class);
    let utility = utility.trim_start_matches('!').trim_start_matches('-');
    group_of(utility).map(|group| format!("{modifiers}|{group}"))
}

/// Splits `hover:focus:bg-red-500` into `("hover:focus", "bg-red-500")`.
/// Colons inside arbitrary values (`data-[state=open]:`) are respected.
fn split_modifiers(class: &str) -> (&str, &str) {
    let mut depth = 0_usize;
    let mut split = None;

    for (index, ch) in class.char_indices() {
        match ch {
            '[' => depth += 1,
            ']' => depth = depth.saturating_sub(1),
            ':' if depth == 0 => split = Some(index),
            _ => {},
        }
    }

    split.map_or(("", class), |index| (&class[..index], &class[index + 1..]))
}

const EXACT: &[(&str, &str)] = &[
    ("block", "display"),
    ("inline-block", "display"),
    ("inline", "display"),
    ("flex", "display"),
    ("inline-flex", "display"),
    ("grid", "display"),
    ("inline-grid", "display"),
    ("contents", "display"),
    ("hidden", "display"),
    ("static", "position"),
    ("relative", "position"),
    ("absolute", "position"),
    ("fixed", "position"),
    ("sticky", "position"),
    ("underline", "text-decoration"),
    ("no-underline", "text-decoration"),
    ("line-through", "text-decoration"),
    ("overline", "text-decoration"),
    ("italic", "font-style"),
    ("not-italic", "font-style"),
    ("uppercase", "text-transform"),
    ("lowercase", "text-transform"),
    ("capitalize", "text-transform"),
    ("normal-case", "text-transform"),
    ("truncate", "text-overflow"),
    ("grow", "flex-grow"),
    ("shrink", "flex-shrink"),
];

/// Utility prefixes, longest first where one is a prefix of another.
const PREFIXES: &[&str] = &[
    "underline-offset",
    "pointer-events",
    "ring-offset",
    "outline-offset",
    "backdrop-blur",
    "flex-shrink",
    "flex-grow",
    "translate-x",
    "translate-y",
    "overflow-x",
    "overflow-y",
    "space-x",
    "space-y",
    "gap-x",
    "gap-y",
    "min-w",
    "min-h",
    "max-w",
    "max-h",
    "appearance",
    "transition",
    "whitespace",
    "duration",
    "overflow",
    "tracking",
    "leading",
    "opacity",
    "rounded",
    "animate",
    "justify",
    "content",
    "cursor",
    "border",
    "shadow",
    "outline",
    "rotate",
    "scale",
    "items",
    "inset",
    "delay",
    "self",
    "blur",
    "ease",
    "text",
    "font",
    "flex",
    "ring",
    "size",
    "gap",
    "from",
    "via",
    "top",
    "bottom",
    "left",
    "right",
    "bg",
    "to",
    "px",
    "py",
    "pt",
    "pb",
    "pl",
    "pr",
    "mx",
    "my",
    "mt",
    "mb",
    "ml",
    "mr",
    "w",
    "h",
    "z",
    "p",
    "m",
];

const SIZES: &[&str] = &["xs", "sm", "base", "md", "lg", "xl", "2xl", "3xl", "4xl", "5xl", "6xl", "7xl", "8xl", "9xl"];
const FONT_WEIGHTS: &[&str] = &[
    "thin",
    "extralight",
    "light",
    "normal",
    "medium",
    "semibold",
    "bold",
    "extrabold",
    "black",
];
const TEXT_ALIGN: &[&str] = &["left", "center", "right", "justify", "start", "end"];
const SHADOW_SIZES: &[&str] = &["", "sm", "md", "lg", "xl", "2xl", "inner", "none"];
const LINE_STYLES: &[&str] = &["solid", "dashed", "dotted", "double", "hidden", "none"];
const SIDES: &[&str] = &["x", "y", "t", "b", "l", "r", "s", "e"];
const CORNERS: &[&str] = &["t", "b", "l", "r", "s", "e", "tl", "tr", "bl", "br", "ss", "se", "es", "ee"];

fn group_of(utility: &str) -> Option<String> {
    if let Some((_, group)) = EXACT.iter().find(|(name, _)| *name == utility) {
        return Some((*group).to_owned());
    }

    let (prefix, value) = PREFIXES.iter().find_map(|prefix| {
        if utility == *prefix {
            Some((*prefix, ""))
        } else {
            utility
                .strip_prefix(prefix)
                .and_then(|rest| rest.strip_prefix('-'))
                .map(|value| (*prefix, value))
        }
    })?;

    let group = match prefix {
        "text" if SIZES.contains(&value) || is_length(value) => "font-size".to_owned(),
        "text" if TEXT_ALIGN.contains(&value) => "text-align".to_owned(),
        "text" => "text-color".to_owned(),
        "font" if FONT_WEIGHTS.contains(&value) || is_numeric(value) => "font-weight".to_owned(),
        "font" => "font-family".to_owned(),
        "bg" if value.starts_with("gradient") || value == "none" => "bg-image".to_owned(),
        "bg" if ["fixed", "local", "scroll"].contains(&value) => "bg-attachment".to_owned(),
        "bg" => "bg-color".to_owned(),
        "shadow" if SHADOW_SIZES.contains(&value) || value.starts_with('[') => "shadow".to_owned(),
        "shadow" => "shadow-color".to_owned(),
        "ring" if value.is_empty() || is_length(value) => "ring-width".to_owned(),
        "ring" if value == "inset" => "ring-inset".to_owned(),
        "ring" => "ring-color".to_owned(),
        "ring-offset" if is_length(value) => "ring-offset-width".to_owned(),
        "ring-offset" => "ring-offset-color".to_owned(),
        "outline" if LINE_STYLES.contains(&value) || value.is_empty() => "outline-style".to_owned(),
        "outline" if is_length(value) => "outline-width".to_owned(),
        "outline" => "outline-color".to_owned(),
        "border" => border_group(value),
        "rounded" => rounded_group(value),
        "flex" if ["row", "row-reverse", "col", "col-reverse"].contains(&value) => {
            "flex-direction".to_owned()
        },
        "flex" if value.starts_with("wrap") || value == "nowrap" => "flex-wrap".to_owned(),
        "flex-shrink" => "flex-shrink".to_owned(),
        "flex-grow" => "flex-grow".to_owned(),
        other => other.to_owned(),
    };

    Some(group)
}

fn border_group(value: &str) -> String {
    let (side, rest) = split_side(value, SIDES);
    let side = side.map_or(String::new(), |side| format!("-{side}"));

    if rest.is_empty() || is_length(rest) {
        format!("border-width{side}")
    } else if LINE_STYLES.contains(&rest) {
        "border-style".to_owned()
    } else {
        format!("border-color{side}")
    }
}

fn rounded_group(value: &str) -> String {
    let (corner, _) = split_side(value, CORNERS);
    corner.map_or_else(|| "rounded".to_owned(), |corner| format!("rounded-{corner}"))
}

/// Splits a leading side/corner token (`t-2` -> `(Some("t"), "2")`).
fn split_side<'v>(value: &'v str, sides: &[&'static str]) -> (Option<&'static str>, &'v str) {
    let mut candidates: Vec<&'static str> = sides.to_vec();
    candidates.sort_by_key(|side| std::cmp::Reverse(side.len()));

    for side in candidates {
        if value == side {
            return (Some(side), "");
        }
        if let Some(rest) = value.strip_prefix(side).and_then(|rest| rest.strip_prefix('-')) {
            return (Some(side), rest);
        }
    }

    (None, value)
}

fn is_numeric(value: &str) -> bool {
    !value.is_empty() && value.parse::<f64>().is_ok()
}

fn is_length(value: &str) -> bool {
    if is_numeric(value) || value == "px" {
        return true;
    }

    value.strip_prefix('[').and_then(|v| v.strip_suffix(']')).is_some_and(|inner| {
        !inner.starts_with('#')
            && !inner.starts_with("rgb")
            && !inner.starts_with("hsl")
            && !inner.starts_with("color:")
    })
}
