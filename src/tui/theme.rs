//! Theme system for TUI colors and styles
//!
//! Color choices mirror the CLI output (commands/mod.rs).

use iocraft::prelude::Color;

use crate::notify::Severity;
use crate::types::{ServiceStatus, TicketPriority, TicketStatus};

/// Theme configuration for TUI components
#[derive(Debug, Clone)]
pub struct Theme {
    // Status colors
    pub status_open: Color,
    pub status_in_progress: Color,
    pub status_resolved: Color,

    // Priority colors
    pub priority_high: Color,
    pub priority_medium: Color,
    pub priority_low: Color,

    // UI colors
    pub border: Color,
    pub border_focused: Color,
    pub background: Color,
    pub text: Color,
    pub text_dimmed: Color,
    pub highlight: Color,
    pub highlight_text: Color,
    pub search_match: Color,
    pub id_color: Color,
    pub accent: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            status_open: Color::Red,
            status_in_progress: Color::Yellow,
            status_resolved: Color::Green,

            priority_high: Color::Red,
            priority_medium: Color::Yellow,
            priority_low: Color::Green,

            border: Color::Rgb {
                r: 120,
                g: 120,
                b: 120,
            },
            border_focused: Color::Blue,
            background: Color::Reset,
            text: Color::White,
            text_dimmed: Color::Rgb {
                r: 120,
                g: 120,
                b: 120,
            },
            highlight: Color::Blue,
            highlight_text: Color::White,
            search_match: Color::Yellow,
            id_color: Color::Cyan,
            accent: Color::Magenta,
        }
    }
}

impl Theme {
    /// Get the color for a ticket status
    pub fn status_color(&self, status: TicketStatus) -> Color {
        match status {
            TicketStatus::Open => self.status_open,
            TicketStatus::InProgress => self.status_in_progress,
            TicketStatus::Resolved => self.status_resolved,
        }
    }

    /// Get the color for a ticket priority
    pub fn priority_color(&self, priority: TicketPriority) -> Color {
        match priority {
            TicketPriority::High => self.priority_high,
            TicketPriority::Medium => self.priority_medium,
            TicketPriority::Low => self.priority_low,
        }
    }

    /// Get the color for a service health status
    pub fn service_color(&self, status: ServiceStatus) -> Color {
        match status {
            ServiceStatus::Operational => self.status_resolved,
            ServiceStatus::Delayed => self.status_in_progress,
        }
    }

    /// Get the color for a notification severity
    pub fn severity_color(&self, severity: Severity) -> Color {
        match severity {
            Severity::Success => Color::Green,
            Severity::Error => Color::Red,
            Severity::Info => Color::Cyan,
        }
    }
}

/// Global theme instance
pub static THEME: std::sync::LazyLock<Theme> = std::sync::LazyLock::new(Theme::default);

/// Get a reference to the global theme
pub fn theme() -> &'static Theme {
    &THEME
}
