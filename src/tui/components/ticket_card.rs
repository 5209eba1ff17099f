//! Ticket card component
//!
//! Card view of a support ticket with status and priority badges, search
//! match highlighting in the title, and the ticket metadata line.

use iocraft::prelude::*;

use crate::store::FilteredTicket;
use crate::tui::theme::theme;

/// Props for the TicketCard component
#[derive(Default, Props)]
pub struct TicketCardProps {
    /// The filtered ticket to display
    pub ticket: FilteredTicket,
}

/// Split a title into (text, highlighted) runs from match indices.
///
/// Indices are character positions; consecutive runs with the same
/// highlight flag are merged so the renderer emits few Text nodes.
pub fn title_runs(title: &str, indices: &[usize]) -> Vec<(String, bool)> {
    let mut runs: Vec<(String, bool)> = Vec::new();
    for (i, c) in title.chars().enumerate() {
        let hit = indices.contains(&i);
        match runs.last_mut() {
            Some((text, flag)) if *flag == hit => text.push(c),
            _ => runs.push((c.to_string(), hit)),
        }
    }
    runs
}

/// Bordered ticket card
#[component]
pub fn TicketCard(props: &TicketCardProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let ticket = &props.ticket.ticket;

    let status_color = theme.status_color(ticket.status);
    let priority_color = theme.priority_color(ticket.priority);
    let runs = title_runs(&ticket.title, &props.ticket.title_indices);

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
                    content: format!("#{}", ticket.id),
                    color: theme.id_color,
                    weight: Weight::Bold,
                )
                View(flex_direction: FlexDirection::Row) {
                    #(runs.iter().map(|(text, hit)| {
                        element! {
                            Text(
                                content: text.clone(),
                                color: if *hit { theme.search_match } else { theme.text },
                                weight: Weight::Bold,
                            )
                        }
                    }))
                }
                Text(content: format!("[{}]", ticket.status), color: status_color)
                Text(content: format!("[{}]", ticket.priority), color: priority_color)
            }
            Text(content: ticket.description.clone(), color: theme.text)
            View(flex_direction: FlexDirection::Row, gap: 2) {
                Text(content: ticket.category.to_string(), color: theme.accent)
                Text(content: ticket.date.clone(), color: theme.text_dimmed)
                Text(
                    content: format!("Assigned to: {}", ticket.assignee),
                    color: theme.text_dimmed,
                )
            }
        }
    }
}
