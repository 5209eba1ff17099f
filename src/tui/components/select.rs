//! Labeled option selector
//!
//! Shows the current option between arrows; cycling is handled by the
//! model, not the component.

use iocraft::prelude::*;

use crate::tui::theme::theme;

/// Props for the SelectField component
#[derive(Default, Props)]
pub struct SelectFieldProps {
    /// Field label shown above the value
    pub label: String,
    /// Current option rendered as text
    pub value: String,
    /// Optional annotation after the value (e.g. a price estimate)
    pub annotation: Option<String>,
    /// Whether the value is a placeholder (no option picked yet)
    pub is_placeholder: bool,
    /// Whether this field has keyboard focus
    pub has_focus: bool,
}

/// Bordered select field showing the current option between arrows
#[component]
pub fn SelectField(props: &SelectFieldProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let border_color = if props.has_focus {
        theme.border_focused
    } else {
        theme.border
    };
    let arrow_color = if props.has_focus {
        theme.border_focused
    } else {
        theme.text_dimmed
    };
    let value_color = if props.is_placeholder {
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
                flex_direction: FlexDirection::Row,
                border_style: BorderStyle::Round,
                border_color: border_color,
                padding_left: 1,
                padding_right: 1,
                gap: 1,
            ) {
                Text(content: "<", color: arrow_color)
                Text(content: props.value.clone(), color: value_color)
                #(props.annotation.as_ref().map(|a| element! {
                    Text(content: a.clone(), color: theme.text_dimmed)
                }))
                Text(content: ">", color: arrow_color)
            }
        }
    }
}
