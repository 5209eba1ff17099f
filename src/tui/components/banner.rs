//! Notification banner component
//!
//! Renders the current auto-dismissing notification, if any, as a bar
//! above the footer.

use iocraft::prelude::*;

use crate::notify::Notification;
use crate::tui::theme::theme;

/// Props for the NotificationBanner component
#[derive(Default, Props)]
pub struct NotificationBannerProps {
    /// The notification to display
    pub notification: Option<Notification>,
}

/// Auto-dismissing notification bar
#[component]
pub fn NotificationBanner(props: &NotificationBannerProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    element! {
        View() {
            #(props.notification.as_ref().map(|n| {
                let color = theme.severity_color(n.severity);
                element! {
                    View(
                        width: 100pct,
                        height: 3,
                        align_items: AlignItems::Center,
                        justify_content: JustifyContent::Center,
                        background_color: Color::Black,
                        border_edges: Edges::Top,
                        border_style: BorderStyle::Single,
                        border_color: color,
                    ) {
                        Text(content: n.message.clone(), color: color)
                    }
                }
            }))
        }
    }
}
