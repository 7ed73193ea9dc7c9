//! Input Component

use crate::field::{FieldBinding, FieldKind, FieldStyle, field_id, merge_attributes};
use crate::style::{ClassList, ResolveClasses};
use dioxus::dioxus_core::AttributeValue;
use dioxus::prelude::*;

const LABEL_BASE: &str = "text-sm font-medium transition-colors duration-200";

/// A labeled single-line input, with optional helper text beside the label.
///
/// Same attribute precedence as [`crate::Textarea`], with `type="text"` as
/// the default layer.
#[component]
pub fn Input(
    #[props(into)] label: String,
    #[props(into)] error: Option<String>,
    #[props(into)] helper_text: Option<String>,
    binding: Option<FieldBinding>,
    #[props(into)] id: Option<String>,
    #[props(into)] container_class: Option<String>,
    #[props(into)] class: Option<String>,
    #[props(extends = input)] attributes: Vec<Attribute>,
) -> Element {
    let id = id.unwrap_or_else(|| field_id(&label));
    let invalid = error.is_some();
    let container =
        ClassList::new().with("w-full space-y-1.5").with_extra(container_class.as_deref()).resolve();
    let label_class = ClassList::new()
        .with(LABEL_BASE)
        .with(if invalid { "text-red-500" } else { "text-gray-700" })
        .resolve();
    let class = FieldStyle { kind: FieldKind::Input, invalid }.resolve(class.as_deref());
    let attributes = merge_attributes([
        vec![Attribute::new("type", AttributeValue::Text("text".to_owned()), None, false)],
        binding.map(FieldBinding::into_attributes).unwrap_or_default(),
        attributes,
    ]);

    rsx! {
        div { class: container,
            div { class: "flex justify-between",
                label { class: label_class, r#for: id.clone(), "{label}" }
                if let Some(helper) = helper_text {
                    span { class: "text-xs text-gray-500", "{helper}" }
                }
            }
            div { class: "relative",
                input { id, class, ..attributes }
                if let Some(error) = error {
                    div { class: "mt-1 text-xs text-red-500", "{error}" }
                }
            }
        }
    }
}
