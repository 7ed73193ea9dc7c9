//! Textarea Component

use crate::field::{FieldBinding, FieldKind, FieldStyle, field_id, merge_attributes};
use crate::style::{ClassList, ResolveClasses};
use dioxus::dioxus_core::AttributeValue;
use dioxus::prelude::*;

/// Row count used when neither the binding nor the caller sets `rows`.
pub const DEFAULT_ROWS: i64 = 3;

const LABEL_CLASS: &str = "block text-sm font-medium text-gray-700 mb-1";
const ERROR_CLASS: &str = "mt-1 text-sm text-red-600";

/// A labeled multi-line text field.
///
/// Attribute precedence on the `textarea` element, lowest first: the
/// `rows = 3` default, then `binding`, then attributes passed directly.
/// `error` is displayed as-is; nothing is validated here.
#[component]
pub fn Textarea(
    #[props(into)] label: String,
    #[props(into)] error: Option<String>,
    binding: Option<FieldBinding>,
    #[props(into)] id: Option<String>,
    #[props(into)] container_class: Option<String>,
    #[props(into)] class: Option<String>,
    #[props(extends = textarea)] attributes: Vec<Attribute>,
) -> Element {
    let id = id.unwrap_or_else(|| field_id(&label));
    let container = ClassList::new().with("w-full").with_extra(container_class.as_deref()).resolve();
    let class = FieldStyle { kind: FieldKind::Textarea, invalid: error.is_some() }
        .resolve(class.as_deref());
    let attributes = merge_attributes([
        vec![Attribute::new("rows", AttributeValue::Int(DEFAULT_ROWS), None, false)],
        binding.map(FieldBinding::into_attributes).unwrap_or_default(),
        attributes,
    ]);

    rsx! {
        div { class: container,
            label { class: LABEL_CLASS, r#for: id.clone(), "{label}" }
            textarea { id, class, ..attributes }
            if let Some(error) = error {
                p { class: ERROR_CLASS, "{error}" }
            }
        }
    }
}
