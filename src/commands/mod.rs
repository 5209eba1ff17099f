mod rides;
mod stats;
mod tickets;
mod view;

pub use rides::cmd_rides;
pub use stats::cmd_stats;
pub use tickets::cmd_tickets;
pub use view::cmd_view;

use owo_colors::OwoColorize;
use serde::Serialize;

use crate::error::Result;
use crate::types::{TicketPriority, TicketStatus};

/// Serialize a value as pretty JSON to stdout.
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Status badge with the same colors the TUI uses.
pub fn format_status(status: TicketStatus) -> String {
    let badge = format!("[{status}]");
    match status {
        TicketStatus::Open => badge.red().to_string(),
        TicketStatus::InProgress => badge.yellow().to_string(),
        TicketStatus::Resolved => badge.green().to_string(),
    }
}

/// Priority badge, colored by severity.
pub fn format_priority(priority: TicketPriority) -> String {
    let badge = format!("[{priority}]");
    match priority {
        TicketPriority::High => badge.red().to_string(),
        TicketPriority::Medium => badge.yellow().to_string(),
        TicketPriority::Low => badge,
    }
}
