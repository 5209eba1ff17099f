//! Dashboard stat tile component

use iocraft::prelude::*;

use crate::tui::theme::theme;

/// Props for the StatCard component
#[derive(Default, Props)]
pub struct StatCardProps {
    /// Metric label (e.g. "Total Rides")
    pub label: String,
    /// Metric value, already formatted
    pub value: String,
    /// Trend caption under the value
    pub trend: String,
}

/// Bordered tile showing one dashboard metric
#[component]
pub fn StatCard(props: &StatCardProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    // Trend captions starting with a down arrow are improvements here
    // (response time); color both directions positively.
    element! {
        View(
            flex_grow: 1.0,
            flex_direction: FlexDirection::Column,
            border_style: BorderStyle::Round,
            border_color: theme.border,
            padding_left: 1,
            padding_right: 1,
        ) {
            Text(content: props.label.clone(), color: theme.text_dimmed)
            Text(
                content: props.value.clone(),
                color: theme.text,
                weight: Weight::Bold,
            )
            Text(content: props.trend.clone(), color: theme.status_resolved)
        }
    }
}
