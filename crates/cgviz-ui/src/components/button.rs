//! Button Components
//!
//! Button styles used across the page:
//! - Primary: solid purple, form submits and card actions
//! - Ghost: transparent, header "Login" and the modal close control
//! - Outline: white with purple text, header "Sign Up"
//! - Gradient: large rounded purple-to-pink call to action
//! - Link: text-only footer links

use dioxus::prelude::*;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Ghost,
    Outline,
    Gradient,
    Link,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Ghost => "btn-ghost",
            ButtonVariant::Outline => "btn-outline",
            ButtonVariant::Gradient => "btn-gradient",
            ButtonVariant::Link => "btn-link",
        }
    }
}

/// Join a base class with optional extra classes, skipping empty extras
pub fn class_list(base: &str, extra: Option<&str>) -> String {
    match extra {
        Some(extra) if !extra.is_empty() => format!("{} {}", base, extra),
        _ => base.to_string(),
    }
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    /// Button content (text, icons, etc.)
    pub children: Element,
    /// Click handler. Buttons without one are inert.
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// Stretch to the container width
    #[props(default = false)]
    pub full_width: bool,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Styled button
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::Outline,
///         onclick: move |_| state.write().open_auth_modal(AuthTrigger::SignUp),
///         "Sign Up"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let base = if props.full_width {
        format!("btn {} btn-block", props.variant.class())
    } else {
        format!("btn {}", props.variant.class())
    };
    let full_class = class_list(&base, props.class.as_deref());

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            onclick: move |_| {
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}

/// Icon button for compact actions (close, expand, etc.)
#[derive(Clone, PartialEq, Props)]
pub struct IconButtonProps {
    /// The icon content
    pub children: Element,
    /// Click handler
    pub onclick: EventHandler<()>,
    /// Accessible label for screen readers
    pub aria_label: String,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

#[component]
pub fn IconButton(props: IconButtonProps) -> Element {
    let full_class = class_list("btn btn-ghost icon-btn", props.class.as_deref());

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            "aria-label": "{props.aria_label}",
            onclick: move |_| props.onclick.call(()),
            {props.children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_variant_classes() {
        assert_eq!(ButtonVariant::Primary.class(), "btn-primary");
        assert_eq!(ButtonVariant::Ghost.class(), "btn-ghost");
        assert_eq!(ButtonVariant::Outline.class(), "btn-outline");
        assert_eq!(ButtonVariant::Gradient.class(), "btn-gradient");
        assert_eq!(ButtonVariant::Link.class(), "btn-link");
    }

    #[test]
    fn button_variant_default() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Primary);
    }

    #[test]
    fn class_list_joins_extra() {
        assert_eq!(class_list("btn", None), "btn");
        assert_eq!(class_list("btn", Some("")), "btn");
        assert_eq!(class_list("btn", Some("wide")), "btn wide");
    }

    #[test]
    fn class_list_with_theme_root_class() {
        use cgviz_core::Theme;

        assert_eq!(class_list("page", Some(Theme::Light.root_class())), "page");
        assert_eq!(class_list("page", Some(Theme::Dark.root_class())), "page dark");
    }
}
