//! Button Components
//!
//! - Primary: call-to-action buttons
//! - Arrow: slider controls, dimmed while disabled
//! - Round: floating round buttons such as scroll-to-top

use dioxus::prelude::*;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Arrow,
    Round,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "button button--primary",
            ButtonVariant::Arrow => "button button--arrow",
            ButtonVariant::Round => "button button--round",
        }
    }
}

/// Full class list for a button
pub fn button_class(variant: ButtonVariant, disabled: bool, extra: Option<&str>) -> String {
    let mut class = variant.class().to_string();
    if disabled {
        class.push_str(" button--disabled");
    }
    if let Some(extra) = extra {
        class.push(' ');
        class.push_str(extra);
    }
    class
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    /// Button content (text, icons, etc.)
    pub children: Element,
    /// Click handler
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// Whether the button is disabled
    #[props(default = false)]
    pub disabled: bool,
    /// Accessible label for icon-only buttons
    #[props(default)]
    pub label: Option<String>,
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
///         variant: ButtonVariant::Arrow,
///         disabled: slider().at_end(),
///         onclick: move |_| slider.write().scroll_right(),
///         "\u{2192}"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let class = button_class(props.variant, props.disabled, props.class.as_deref());
    let onclick = props.onclick;

    rsx! {
        button {
            class: "{class}",
            r#type: "button",
            disabled: props.disabled,
            "aria-label": props.label.clone(),
            onclick: move |_| {
                if let Some(handler) = &onclick {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_includes_variant_state_and_extra() {
        assert_eq!(
            button_class(ButtonVariant::Primary, false, None),
            "button button--primary"
        );
        assert_eq!(
            button_class(ButtonVariant::Arrow, true, Some("slider__left")),
            "button button--arrow button--disabled slider__left"
        );
    }
}
