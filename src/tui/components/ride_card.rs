//! Ride history card component

use iocraft::prelude::*;

use crate::tui::theme::theme;
use crate::types::Ride;

/// Props for the RideCard component
#[derive(Default, Props)]
pub struct RideCardProps {
    /// The ride to display
    pub ride: Option<Ride>,
}

/// Compact card for one past ride
#[component]
pub fn RideCard(props: &RideCardProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    element! {
        View() {
            #(props.ride.as_ref().map(|ride| {
                element! {
                    View(
                        width: 100pct,
                        flex_direction: FlexDirection::Column,
                        border_style: BorderStyle::Round,
                        border_color: theme.border,
                        padding_left: 1,
                        padding_right: 1,
                    ) {
                        View(flex_direction: FlexDirection::Row, gap: 1) {
                            Text(
                                content: format!("{} -> {}", ride.from, ride.to),
                                color: theme.text,
                                weight: Weight::Bold,
                            )
                            Text(
                                content: format!("${:.2}", ride.fare),
                                color: theme.status_resolved,
                            )
                        }
                        View(flex_direction: FlexDirection::Row, gap: 2) {
                            Text(content: ride.date.clone(), color: theme.text_dimmed)
                            Text(
                                content: format!("{} (* {:.1})", ride.driver, ride.rating),
                                color: theme.text_dimmed,
                            )
                            Text(content: ride.status.clone(), color: theme.status_resolved)
                        }
                    }
                }
            }))
        }
    }
}
