//! Reusable TUI components

pub mod banner;
pub mod footer;
pub mod header;
pub mod ride_card;
pub mod select;
pub mod stat_card;
pub mod text_field;
pub mod ticket_card;

pub use banner::NotificationBanner;
pub use footer::{
    Footer, Shortcut, admin_shortcuts, form_shortcuts, search_shortcuts, select_shortcuts,
    tab_shortcuts,
};
pub use header::Header;
pub use ride_card::RideCard;
pub use select::SelectField;
pub use stat_card::StatCard;
pub use text_field::TextField;
pub use ticket_card::TicketCard;
