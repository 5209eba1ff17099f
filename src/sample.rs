//! Hard-coded sample data
//!
//! The whole app runs on this fixture: three past rides, three seeded
//! support tickets, and fixed dashboard numbers. Nothing here is ever
//! recomputed from live state.

use crate::types::{
    Faq, Ride, ServiceHealth, ServiceStatus, StatsSnapshot, Ticket, TicketCategory,
    TicketPriority, TicketStatus,
};

/// Default assignee for newly created tickets.
pub const DEFAULT_ASSIGNEE: &str = "Support Team A";

/// Default pickup location pre-filled in the booking form.
pub const DEFAULT_PICKUP: &str = "Toronto Metropolitan University";

pub fn rides() -> Vec<Ride> {
    vec![
        Ride {
            id: 1,
            from: "Toronto Metropolitan University".to_string(),
            to: "CN Tower".to_string(),
            status: "completed".to_string(),
            date: "2024-05-30".to_string(),
            fare: 15.50,
            driver: "John D.".to_string(),
            rating: 4.8,
        },
        Ride {
            id: 2,
            from: "Eaton Centre".to_string(),
            to: "Pearson Airport".to_string(),
            status: "completed".to_string(),
            date: "2024-05-28".to_string(),
            fare: 45.00,
            driver: "Sarah M.".to_string(),
            rating: 4.9,
        },
        Ride {
            id: 3,
            from: "Union Station".to_string(),
            to: "Yorkdale Mall".to_string(),
            status: "completed".to_string(),
            date: "2024-05-25".to_string(),
            fare: 22.75,
            driver: "Mike R.".to_string(),
            rating: 4.7,
        },
    ]
}

pub fn tickets() -> Vec<Ticket> {
    vec![
        Ticket {
            id: 1,
            title: "Payment Failed".to_string(),
            category: TicketCategory::PaymentIssue,
            status: TicketStatus::Open,
            priority: TicketPriority::High,
            date: "2024-06-05".to_string(),
            description: "Credit card was charged but ride was cancelled. Need immediate refund."
                .to_string(),
            assignee: "Support Team A".to_string(),
        },
        Ticket {
            id: 2,
            title: "App Crashes on Login".to_string(),
            category: TicketCategory::AppBug,
            status: TicketStatus::InProgress,
            priority: TicketPriority::Medium,
            date: "2024-06-04".to_string(),
            description: "App closes when I try to log in with Facebook authentication."
                .to_string(),
            assignee: "Tech Team B".to_string(),
        },
        Ticket {
            id: 3,
            title: "Driver Not Found".to_string(),
            category: TicketCategory::BookingIssue,
            status: TicketStatus::Resolved,
            priority: TicketPriority::Low,
            date: "2024-06-03".to_string(),
            description: "Could not find driver for 10 minutes in downtown area.".to_string(),
            assignee: "Support Team A".to_string(),
        },
    ]
}

pub fn stats() -> StatsSnapshot {
    StatsSnapshot {
        total_rides: 1247,
        active_users: 89,
        open_tickets: 12,
        avg_response_time: "2.3 hours".to_string(),
        satisfaction: 4.6,
    }
}

/// Trend captions shown under each stat tile.
pub fn stat_trends() -> [&'static str; 5] {
    [
        "↑ 12% this week",
        "↑ 8% this week",
        "↑ 3 new today",
        "↓ 0.5h improved",
        "↑ 0.2 this month",
    ]
}

pub fn core_services() -> Vec<ServiceHealth> {
    vec![
        ServiceHealth {
            name: "Database Connection".to_string(),
            status: ServiceStatus::Operational,
            uptime: "99.9%".to_string(),
        },
        ServiceHealth {
            name: "Payment Gateway".to_string(),
            status: ServiceStatus::Operational,
            uptime: "99.8%".to_string(),
        },
        ServiceHealth {
            name: "Maps API".to_string(),
            status: ServiceStatus::Operational,
            uptime: "99.7%".to_string(),
        },
        ServiceHealth {
            name: "SMS Notifications".to_string(),
            status: ServiceStatus::Delayed,
            uptime: "97.2%".to_string(),
        },
    ]
}

/// Fixed performance metrics for the system status panel.
pub fn performance_metrics() -> Vec<(&'static str, &'static str)> {
    vec![
        ("Average Response Time", "120ms"),
        ("Active Connections", "1,247"),
        ("Error Rate", "0.02%"),
        ("Server Load", "23%"),
    ]
}

/// Quick-support entries shown under the ride history.
pub fn help_entries() -> Vec<(&'static str, &'static str)> {
    vec![
        ("Report an Issue", "Get help with your ride"),
        ("Live Chat", "Available 24/7"),
        ("Emergency", "Call: (416) 123-4567"),
    ]
}

pub fn faqs() -> Vec<Faq> {
    vec![
        Faq {
            question: "How do I cancel a ride?",
            answer: "You can cancel a ride up to 5 minutes after booking without any charges. \
                     Go to 'My Rides' and click 'Cancel'.",
        },
        Faq {
            question: "Payment was deducted but ride was cancelled?",
            answer: "If your payment was charged for a cancelled ride, please report this issue \
                     and we'll refund within 3-5 business days.",
        },
        Faq {
            question: "App keeps crashing on my phone?",
            answer: "Try clearing the app cache or reinstalling the app. If the issue persists, \
                     please report a bug with your device details.",
        },
        Faq {
            question: "How do I change my payment method?",
            answer: "Go to Profile > Payment Methods to add, remove, or set a default payment \
                     method.",
        },
    ]
}
