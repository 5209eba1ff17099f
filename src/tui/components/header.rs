//! App header bar component
//!
//! Displays the application title and the three screen tabs.

use iocraft::prelude::*;

use crate::tui::theme::theme;
use crate::types::Screen;

/// Props for the Header component
#[derive(Default, Props)]
pub struct HeaderProps {
    /// Currently active screen
    pub active: Screen,
    /// Whether the tab bar has keyboard focus
    pub has_focus: bool,
    /// Ticket count shown on the right
    pub ticket_count: Option<usize>,
}

/// App header bar with title and screen tabs
#[component]
pub fn Header(props: &HeaderProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let active = props.active;
    let has_focus = props.has_focus;

    let tabs = [
        (Screen::Passenger, "1 Passenger"),
        (Screen::Support, "2 Support"),
        (Screen::Admin, "3 Admin"),
    ];

    element! {
        View(
            width: 100pct,
            height: 1,
            flex_direction: FlexDirection::Row,
            flex_shrink: 0.0,
            justify_content: JustifyContent::SpaceBetween,
            padding_left: 1,
            padding_right: 1,
            background_color: if has_focus { theme.highlight } else { theme.border },
        ) {
            View(flex_direction: FlexDirection::Row, gap: 2) {
                Text(
                    content: "Tmuber",
                    color: theme.text,
                    weight: Weight::Bold,
                )
                #(tabs.iter().map(|(screen, label)| {
                    let is_active = *screen == active;
                    element! {
                        Text(
                            content: if is_active { format!("[{label}]") } else { format!(" {label} ") },
                            color: if is_active { theme.search_match } else { theme.text },
                            weight: if is_active { Weight::Bold } else { Weight::Normal },
                        )
                    }
                }))
            }
            #(props.ticket_count.map(|count| element! {
                Text(
                    content: format!("{count} tickets"),
                    color: theme.text_dimmed,
                )
            }))
        }
    }
}
