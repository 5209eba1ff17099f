pub mod booking;
pub mod commands;
pub mod error;
pub mod notify;
pub mod sample;
pub mod store;
pub mod tui;
pub mod types;

pub use booking::{BookingDraft, DriverSearch};
pub use error::{Result, TmuberError, ValidationError};
pub use notify::{Notification, NotificationState, Severity};
pub use store::{FilteredTicket, TicketDraft, TicketStore};
pub use types::{
    Ride, RideType, Screen, StatsSnapshot, StatusFilter, Ticket, TicketCategory, TicketPriority,
    TicketStatus, VALID_SCREENS, VALID_STATUSES,
};
