//! Screen components for the three app views

pub mod admin;
pub mod passenger;
pub mod support;

pub use admin::AdminScreen;
pub use passenger::PassengerScreen;
pub use support::SupportScreen;
