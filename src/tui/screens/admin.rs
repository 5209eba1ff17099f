//! Admin screen: dashboard stats, ticket management, system status

use iocraft::prelude::*;

use crate::sample;
use crate::tui::components::StatCard;
use crate::tui::model::Focus;
use crate::tui::theme::theme;
use crate::types::{StatsSnapshot, Ticket};

/// Props for the AdminScreen component
#[derive(Default, Props)]
pub struct AdminScreenProps {
    /// Fixed dashboard counters
    pub stats: StatsSnapshot,
    /// All tickets, newest first
    pub tickets: Vec<Ticket>,
    /// Selected row in the ticket table
    pub selected: usize,
    /// Current keyboard focus
    pub focus: Focus,
}

/// Format an integer with thousands separators, e.g. 1247 -> "1,247".
pub fn thousands(n: u32) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Admin dashboard view
#[component]
pub fn AdminScreen(props: &AdminScreenProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let stats = &props.stats;
    let trends = sample::stat_trends();
    let table_focused = props.focus == Focus::AdminTickets;

    let tiles = [
        ("Total Rides", thousands(stats.total_rides), trends[0]),
        ("Active Users", stats.active_users.to_string(), trends[1]),
        ("Open Tickets", stats.open_tickets.to_string(), trends[2]),
        (
            "Avg Response Time",
            stats.avg_response_time.clone(),
            trends[3],
        ),
        (
            "Satisfaction",
            format!("{:.1}/5", stats.satisfaction),
            trends[4],
        ),
    ];

    element! {
        View(
            flex_grow: 1.0,
            width: 100pct,
            flex_direction: FlexDirection::Column,
            padding: 1,
            gap: 1,
        ) {
            // Stat tiles
            View(flex_direction: FlexDirection::Row, width: 100pct, gap: 1) {
                #(tiles.iter().map(|(label, value, trend)| {
                    element! {
                        StatCard(
                            label: label.to_string(),
                            value: value.clone(),
                            trend: trend.to_string(),
                        )
                    }
                }))
            }

            // Ticket management table
            View(
                flex_direction: FlexDirection::Column,
                width: 100pct,
                border_style: BorderStyle::Round,
                border_color: if table_focused { theme.border_focused } else { theme.border },
            ) {
                View(padding_left: 1) {
                    Text(content: "Ticket Management", color: theme.text, weight: Weight::Bold)
                }
                #(props.tickets.iter().enumerate().map(|(i, ticket)| {
                    let is_selected = table_focused && i == props.selected;
                    let row_color = if is_selected { theme.highlight_text } else { theme.text };
                    element! {
                        View(
                            height: 1,
                            width: 100pct,
                            flex_direction: FlexDirection::Row,
                            padding_left: 1,
                            padding_right: 1,
                            background_color: if is_selected { Some(theme.highlight) } else { None },
                        ) {
                            View(width: 2, flex_shrink: 0.0) {
                                Text(content: if is_selected { ">" } else { " " }, color: row_color)
                            }
                            View(width: 5, flex_shrink: 0.0) {
                                Text(
                                    content: format!("#{:<3}", ticket.id),
                                    color: if is_selected { theme.highlight_text } else { theme.id_color },
                                )
                            }
                            View(width: 15, flex_shrink: 0.0) {
                                Text(
                                    content: format!("[{}]", ticket.status),
                                    color: if is_selected { theme.highlight_text } else { theme.status_color(ticket.status) },
                                )
                            }
                            View(width: 10, flex_shrink: 0.0) {
                                Text(
                                    content: format!("[{}]", ticket.priority),
                                    color: if is_selected { theme.highlight_text } else { theme.priority_color(ticket.priority) },
                                )
                            }
                            View(flex_grow: 1.0, overflow: Overflow::Hidden) {
                                Text(content: ticket.title.clone(), color: row_color)
                            }
                            Text(content: ticket.assignee.clone(), color: theme.text_dimmed)
                        }
                    }
                }))
            }

            // System status
            View(flex_direction: FlexDirection::Row, width: 100pct, gap: 1) {
                View(
                    width: 50pct,
                    flex_direction: FlexDirection::Column,
                    border_style: BorderStyle::Round,
                    border_color: theme.border,
                    padding_left: 1,
                    padding_right: 1,
                ) {
                    Text(content: "Core Services", color: theme.text, weight: Weight::Bold)
                    #(sample::core_services().into_iter().map(|service| {
                        element! {
                            View(flex_direction: FlexDirection::Row, justify_content: JustifyContent::SpaceBetween) {
                                Text(content: service.name.clone(), color: theme.text)
                                View(flex_direction: FlexDirection::Row, gap: 1) {
                                    Text(
                                        content: service.status.to_string(),
                                        color: theme.service_color(service.status),
                                    )
                                    Text(content: service.uptime.clone(), color: theme.text_dimmed)
                                }
                            }
                        }
                    }))
                }
                View(
                    flex_grow: 1.0,
                    flex_direction: FlexDirection::Column,
                    border_style: BorderStyle::Round,
                    border_color: theme.border,
                    padding_left: 1,
                    padding_right: 1,
                ) {
                    Text(content: "Performance", color: theme.text, weight: Weight::Bold)
                    #(sample::performance_metrics().into_iter().map(|(label, value)| {
                        element! {
                            View(flex_direction: FlexDirection::Row, justify_content: JustifyContent::SpaceBetween) {
                                Text(content: label, color: theme.text)
                                Text(content: value, color: theme.text_dimmed)
                            }
                        }
                    }))
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thousands_grouping() {
        assert_eq!(thousands(0), "0");
        assert_eq!(thousands(89), "89");
        assert_eq!(thousands(1247), "1,247");
        assert_eq!(thousands(1000000), "1,000,000");
    }
}
