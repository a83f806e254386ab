//! Input Field Components
//!
//! Labelled form inputs. They are uncontrolled: the DOM keeps the typed
//! value and nothing reads it back.

use cgviz_core::FormField;
use dioxus::prelude::*;

/// Properties for the Input component
#[derive(Clone, PartialEq, Props)]
pub struct InputProps {
    /// Field descriptor (id, label, type, placeholder)
    pub field: FormField,
    /// Prefix for the element id, keeps ids unique across forms
    #[props(default)]
    pub id_prefix: Option<String>,
}

/// Build the element id for a field
pub fn field_element_id(prefix: Option<&str>, field: &FormField) -> String {
    match prefix {
        Some(prefix) if !prefix.is_empty() => format!("{}-{}", prefix, field.id),
        _ => field.id.to_string(),
    }
}

/// Labelled text input
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     for field in form.fields {
///         Input { field: *field, id_prefix: form.tab.as_str().to_string() }
///     }
/// }
/// ```
#[component]
pub fn Input(props: InputProps) -> Element {
    let field = props.field;
    let id = field_element_id(props.id_prefix.as_deref(), &field);

    rsx! {
        div { class: "form-field",
            label {
                class: "input-label",
                r#for: "{id}",
                "{field.label}"
            }
            input {
                id: "{id}",
                name: "{field.id}",
                class: "input-field",
                r#type: field.kind.as_str(),
                placeholder: field.placeholder.unwrap_or(""),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgviz_core::AuthTab;

    #[test]
    fn field_ids_are_prefixed() {
        let email = AuthTab::Login.form().fields[0];
        assert_eq!(field_element_id(None, &email), "email");
        assert_eq!(field_element_id(Some(""), &email), "email");
        assert_eq!(field_element_id(Some("signup"), &email), "signup-email");
    }
}
