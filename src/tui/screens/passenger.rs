//! Passenger screen: booking form and ride history
//!
//! Layout:
//! ```text
//! +--------------------+---------------------+
//! | Book a Ride        | Your Recent Rides   |
//! |  Pickup            |  ride card          |
//! |  Destination       |  ride card          |
//! |  Ride Type         |  ride card          |
//! |  [status line]     | Need Help?          |
//! +--------------------+---------------------+
//! ```

use iocraft::prelude::*;

use crate::booking::{BookingDraft, SEARCHING_MESSAGE};
use crate::sample;
use crate::tui::components::{RideCard, SelectField, TextField};
use crate::tui::model::Focus;
use crate::tui::theme::theme;
use crate::types::Ride;

/// Props for the PassengerScreen component
#[derive(Default, Props)]
pub struct PassengerScreenProps {
    /// Current booking form contents
    pub booking: BookingDraft,
    /// Whether a driver search is in flight
    pub searching: bool,
    /// Past rides to list
    pub rides: Vec<Ride>,
    /// Current keyboard focus
    pub focus: Focus,
}

/// Passenger view with the booking form on the left and ride history on
/// the right
#[component]
pub fn PassengerScreen(props: &PassengerScreenProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let booking = &props.booking;
    let focus = props.focus;

    let status_line = if props.searching {
        (SEARCHING_MESSAGE.to_string(), theme.search_match)
    } else {
        ("Press Ctrl+S to book".to_string(), theme.text_dimmed)
    };

    element! {
        View(
            flex_grow: 1.0,
            width: 100pct,
            flex_direction: FlexDirection::Row,
            padding: 1,
            gap: 2,
        ) {
            // Booking form
            View(
                width: 45pct,
                flex_direction: FlexDirection::Column,
                gap: 1,
            ) {
                Text(content: "Book a Ride", color: theme.text, weight: Weight::Bold)
                TextField(
                    label: "Pickup Location",
                    value: booking.pickup.clone(),
                    has_focus: focus == Focus::Pickup,
                )
                TextField(
                    label: "Destination",
                    value: booking.destination.clone(),
                    placeholder: "Where to?",
                    has_focus: focus == Focus::Destination,
                )
                SelectField(
                    label: "Ride Type",
                    value: booking.ride_type.to_string(),
                    annotation: Some(booking.ride_type.price_label().to_string()),
                    has_focus: focus == Focus::RideTypeSelect,
                )
                Text(content: status_line.0, color: status_line.1)
            }

            // Ride history
            View(
                flex_grow: 1.0,
                flex_direction: FlexDirection::Column,
                gap: 1,
            ) {
                Text(content: "Your Recent Rides", color: theme.text, weight: Weight::Bold)
                #(props.rides.iter().map(|ride| {
                    element! {
                        RideCard(ride: Some(ride.clone()))
                    }
                }))

                Text(content: "Need Help?", color: theme.text, weight: Weight::Bold)
                View(
                    border_style: BorderStyle::Round,
                    border_color: theme.border,
                    flex_direction: FlexDirection::Column,
                    padding_left: 1,
                    padding_right: 1,
                ) {
                    #(sample::help_entries().iter().map(|(title, detail)| {
                        element! {
                            View(flex_direction: FlexDirection::Row, gap: 1) {
                                Text(content: *title, color: theme.text)
                                Text(content: *detail, color: theme.text_dimmed)
                            }
                        }
                    }))
                }
            }
        }
    }
}
