//! Keyboard shortcuts bar component
//!
//! Displays available keyboard shortcuts at the bottom of the screen.

use iocraft::prelude::*;

use crate::tui::theme::theme;

/// A single keyboard shortcut entry
#[derive(Debug, Clone)]
pub struct Shortcut {
    /// The key or key combination (e.g., "q", "Ctrl+S", "Tab")
    pub key: String,
    /// Description of the action (e.g., "Quit", "Book", "Next field")
    pub action: String,
}

impl Shortcut {
    pub fn new(key: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            action: action.into(),
        }
    }
}

/// Props for the Footer component
#[derive(Default, Props)]
pub struct FooterProps {
    /// List of keyboard shortcuts to display
    pub shortcuts: Vec<Shortcut>,
}

/// Keyboard shortcuts bar at the bottom of the screen
#[component]
pub fn Footer(props: &FooterProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    element! {
        View(
            width: 100pct,
            min_height: 1,
            flex_direction: FlexDirection::Row,
            flex_wrap: FlexWrap::Wrap,
            flex_shrink: 0.0,
            padding_left: 1,
            padding_right: 1,
            column_gap: 2,
            background_color: theme.border,
        ) {
            #(props.shortcuts.iter().map(|shortcut| {
                let key = shortcut.key.clone();
                let action = shortcut.action.clone();
                element! {
                    View(flex_direction: FlexDirection::Row) {
                        Text(
                            content: format!("[{}]", key),
                            color: theme.highlight,
                            weight: Weight::Bold,
                        )
                        Text(
                            content: format!(" {}", action),
                            color: theme.text,
                        )
                    }
                }
            }))
        }
    }
}

/// Shortcuts while the tab bar is focused
pub fn tab_shortcuts() -> Vec<Shortcut> {
    vec![
        Shortcut::new("1-3", "Switch Screen"),
        Shortcut::new("Tab", "Enter Screen"),
        Shortcut::new("q", "Quit"),
    ]
}

/// Shortcuts while a form text field is focused
pub fn form_shortcuts() -> Vec<Shortcut> {
    vec![
        Shortcut::new("Tab", "Next Field"),
        Shortcut::new("S-Tab", "Prev Field"),
        Shortcut::new("C-s", "Submit"),
        Shortcut::new("Esc", "Back to Tabs"),
        Shortcut::new("C-q", "Quit"),
    ]
}

/// Shortcuts while an option select is focused
pub fn select_shortcuts() -> Vec<Shortcut> {
    vec![
        Shortcut::new("h/l", "Change Option"),
        Shortcut::new("Tab", "Next Field"),
        Shortcut::new("C-s", "Submit"),
        Shortcut::new("Esc", "Back to Tabs"),
    ]
}

/// Shortcuts while the ticket search box is focused
pub fn search_shortcuts() -> Vec<Shortcut> {
    vec![
        Shortcut::new("Enter", "Apply Search"),
        Shortcut::new("Tab", "Next Field"),
        Shortcut::new("Esc", "Back to Tabs"),
        Shortcut::new("C-q", "Quit"),
    ]
}

/// Shortcuts for the admin ticket table
pub fn admin_shortcuts() -> Vec<Shortcut> {
    vec![
        Shortcut::new("j/k", "Select Ticket"),
        Shortcut::new("h/l", "Change Status"),
        Shortcut::new("Esc", "Back to Tabs"),
        Shortcut::new("C-q", "Quit"),
    ]
}
