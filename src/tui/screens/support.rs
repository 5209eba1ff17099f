//! Support screen: issue report form, FAQ, and the filtered ticket list

use iocraft::prelude::*;

use crate::sample;
use crate::store::{FilteredTicket, TicketDraft};
use crate::tui::components::{SelectField, TextField, TicketCard};
use crate::tui::model::Focus;
use crate::tui::theme::theme;
use crate::types::StatusFilter;

/// Props for the SupportScreen component
#[derive(Default, Props)]
pub struct SupportScreenProps {
    /// Current report form contents
    pub draft: TicketDraft,
    /// Tickets passing the filter and search
    pub tickets: Vec<FilteredTicket>,
    /// Active status filter
    pub filter: StatusFilter,
    /// Active search query
    pub query: String,
    /// Current keyboard focus
    pub focus: Focus,
}

/// Support view: report form and FAQ on top, ticket list below
#[component]
pub fn SupportScreen(props: &SupportScreenProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let draft = &props.draft;
    let focus = props.focus;

    let category_value = draft
        .category
        .map(|c| c.to_string())
        .unwrap_or_else(|| "Select Category".to_string());

    element! {
        View(
            flex_grow: 1.0,
            width: 100pct,
            flex_direction: FlexDirection::Column,
            padding: 1,
            gap: 1,
        ) {
            View(flex_direction: FlexDirection::Row, width: 100pct, gap: 2) {
                // Report an issue
                View(width: 45pct, flex_direction: FlexDirection::Column, gap: 1) {
                    Text(content: "Report an Issue", color: theme.text, weight: Weight::Bold)
                    TextField(
                        label: "Issue Title",
                        value: draft.title.clone(),
                        placeholder: "Brief description of the issue",
                        has_focus: focus == Focus::TicketTitle,
                    )
                    SelectField(
                        label: "Category",
                        value: category_value,
                        is_placeholder: draft.category.is_none(),
                        has_focus: focus == Focus::TicketCategory,
                    )
                    SelectField(
                        label: "Priority",
                        value: draft.priority.to_string(),
                        has_focus: focus == Focus::TicketPriority,
                    )
                    TextField(
                        label: "Description",
                        value: draft.description.clone(),
                        placeholder: "What happened?",
                        has_focus: focus == Focus::TicketDescription,
                    )
                }

                // FAQ
                View(flex_grow: 1.0, flex_direction: FlexDirection::Column, gap: 1) {
                    Text(
                        content: "Frequently Asked Questions",
                        color: theme.text,
                        weight: Weight::Bold,
                    )
                    #(sample::faqs().into_iter().map(|faq| {
                        element! {
                            View(
                                width: 100pct,
                                flex_direction: FlexDirection::Column,
                                border_style: BorderStyle::Round,
                                border_color: theme.border,
                                padding_left: 1,
                                padding_right: 1,
                            ) {
                                Text(content: faq.question, color: theme.text, weight: Weight::Bold)
                                Text(content: faq.answer, color: theme.text_dimmed)
                            }
                        }
                    }))
                }
            }

            // Ticket list with filter and search
            View(flex_direction: FlexDirection::Column, width: 100pct, gap: 1) {
                Text(
                    content: format!("Your Support Tickets ({})", props.tickets.len()),
                    color: theme.text,
                    weight: Weight::Bold,
                )
                View(flex_direction: FlexDirection::Row, width: 100pct, gap: 2) {
                    View(width: 30pct) {
                        SelectField(
                            label: "Filter",
                            value: props.filter.to_string(),
                            has_focus: focus == Focus::FilterStatus,
                        )
                    }
                    View(flex_grow: 1.0) {
                        TextField(
                            label: "Search",
                            value: props.query.clone(),
                            placeholder: "Search tickets...",
                            has_focus: focus == Focus::SearchQuery,
                        )
                    }
                }
                #(if props.tickets.is_empty() {
                    Some(element! {
                        Text(content: "No tickets match.", color: theme.text_dimmed)
                    })
                } else {
                    None
                })
                #(props.tickets.iter().map(|ft| {
                    element! {
                        TicketCard(ticket: ft.clone())
                    }
                }))
            }
        }
    }
}
