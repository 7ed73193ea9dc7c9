//! Shared pieces of labeled form fields: binding pass-through, attribute
//! precedence and the field style tables.

use crate::style::{ClassList, ResolveClasses, StyleBundle};
use dioxus::prelude::*;

/// Attributes handed over by a form-state library (name, listeners, refs...).
///
/// The field never looks inside; it only layers the attributes between its
/// own defaults and the attributes passed explicitly by the caller.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldBinding(Vec<Attribute>);

impl FieldBinding {
    #[must_use]
    pub const fn new(attributes: Vec<Attribute>) -> Self {
        Self(attributes)
    }

    #[must_use]
    pub fn into_attributes(self) -> Vec<Attribute> {
        self.0
    }
}

impl From<Vec<Attribute>> for FieldBinding {
    fn from(attributes: Vec<Attribute>) -> Self {
        Self(attributes)
    }
}

/// Layers attribute sets so that later layers replace earlier attributes with
/// the same name and namespace. First-seen order is kept.
#[must_use]
pub fn merge_attributes<I>(layers: I) -> Vec<Attribute>
where
    I: IntoIterator<Item = Vec<Attribute>>,
{
    let mut merged: Vec<Attribute> = Vec::new();

    for attribute in layers.into_iter().flatten() {
        match merged
            .iter_mut()
            .find(|existing| existing.name == attribute.name && existing.namespace == attribute.namespace)
        {
            Some(slot) => *slot = attribute,
            None => merged.push(attribute),
        }
    }

    merged
}

/// Stable id for a label/control pair derived from the label text.
#[must_use]
pub fn field_id(label: &str) -> String {
    let slug = label
        .split(|c: char| !c.is_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-");

    format!("field-{slug}")
}

/// Which control a field renders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FieldKind {
    #[default]
    Textarea,
    Input,
}

impl StyleBundle for FieldKind {
    fn classes(self) -> &'static str {
        match self {
            Self::Textarea => {
                "block w-full rounded-md shadow-sm transition-colors disabled:bg-gray-50 disabled:text-gray-500"
            },
            Self::Input => {
                "block w-full appearance-none rounded-lg bg-white/75 px-3 py-2 border text-gray-900 text-sm \
                 transition-all duration-200 ease-out hover:border-gray-300 hover:bg-white \
                 focus:border-transparent focus:outline-none focus:ring-2 \
                 disabled:bg-gray-50 disabled:text-gray-500 placeholder:text-gray-400 placeholder:text-sm"
            },
        }
    }
}

impl FieldKind {
    const fn tone(self) -> &'static str {
        match self {
            Self::Textarea => "border-gray-300 focus:border-blue-500 focus:ring-blue-500",
            Self::Input => "border-gray-200 focus:ring-blue-100",
        }
    }

    const fn error_tone(self) -> &'static str {
        match self {
            Self::Textarea => "border-red-500 focus:border-red-500 focus:ring-red-500",
            Self::Input => "border-red-300 focus:ring-red-100",
        }
    }
}

/// Style configuration of a field control.
///
/// The error tone is layered on top of the regular bundles without removing
/// any of them. Caller classes still override both.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldStyle {
    pub kind: FieldKind,
    pub invalid: bool,
}

impl ResolveClasses for FieldStyle {
    fn class_list(&self) -> ClassList<'static> {
        ClassList::new()
            .with(self.kind.classes())
            .with(self.kind.tone())
            .with_additive_if(self.invalid, self.kind.error_tone())
    }
}
