//! Labeled text input field
//!
//! Render-only: the value lives in the app state and key routing happens
//! in the model, so this just draws the label, the value, and a trailing
//! cursor when focused.

use iocraft::prelude::*;

use crate::tui::theme::theme;

/// Props for the TextField component
#[derive(Default, Props)]
pub struct TextFieldProps {
    /// Field label shown above the value
    pub label: String,
    /// Current value
    pub value: String,
    /// Placeholder shown dimmed when the value is empty
    pub placeholder: String,
    /// Whether this field has keyboard focus
    pub has_focus: bool,
}

/// Bordered text field with label and cursor
#[component]
pub fn TextField(props: &TextFieldProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let border_color = if props.has_focus {
        theme.border_focused
    } else {
        theme.border
    };

    let empty = props.value.is_empty();
    let display = if props.has_focus {
        format!("{}_", props.value)
    } else if empty {
        props.placeholder.clone()
    } else {
        props.value.clone()
    };
    let value_color = if empty && !props.has_focus {
        theme.text_dimmed
    } else {
        theme.text
    };

    element! {
        View(flex_direction: FlexDirection::Column, width: 100pct) {
            Text(content: props.label.clone(), color: theme.text_dimmed)
            View(
                width: 100pct,
                height: 3,
                border_style: BorderStyle::Round,
                border_color: border_color,
                padding_left: 1,
                padding_right: 1,
            ) {
                Text(content: display, color: value_color)
            }
        }
    }
}
