//! Ticket listing command (`tmuber tickets`)

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::commands::{format_priority, format_status, print_json};
use crate::error::Result;
use crate::store::TicketStore;
use crate::types::StatusFilter;

/// A row in the ticket list table
#[derive(Tabled)]
struct TicketRow {
    #[tabled(rename = "Id")]
    id: u32,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Priority")]
    priority: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Assignee")]
    assignee: String,
}

/// List sample tickets, optionally filtered by status and search text
pub fn cmd_tickets(filter: StatusFilter, search: Option<&str>, json: bool) -> Result<()> {
    let store = TicketStore::with_sample_data();
    let filtered = store.filter(filter, search.unwrap_or(""));

    if json {
        let tickets: Vec<_> = filtered.iter().map(|f| &f.ticket).collect();
        return print_json(&tickets);
    }

    if filtered.is_empty() {
        println!("No tickets match.");
        return Ok(());
    }

    let rows: Vec<TicketRow> = filtered
        .iter()
        .map(|f| TicketRow {
            id: f.ticket.id,
            title: f.ticket.title.clone(),
            category: f.ticket.category.to_string(),
            status: format_status(f.ticket.status),
            priority: format_priority(f.ticket.priority),
            date: f.ticket.date.clone(),
            assignee: f.ticket.assignee.clone(),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{table}");

    println!("\n{} ticket(s)", filtered.len());
    Ok(())
}
