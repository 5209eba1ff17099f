use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use unicase::UniCase;

use crate::error::TmuberError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
pub enum TicketStatus {
    #[default]
    #[serde(rename = "open")]
    Open,
    #[serde(rename = "in-progress")]
    InProgress,
    #[serde(rename = "resolved")]
    Resolved,
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TicketStatus::Open => write!(f, "Open"),
            TicketStatus::InProgress => write!(f, "In Progress"),
            TicketStatus::Resolved => write!(f, "Resolved"),
        }
    }
}

impl FromStr for TicketStatus {
    type Err = TmuberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = UniCase::new(s.trim());
        if s == UniCase::new("open") {
            Ok(TicketStatus::Open)
        } else if s == UniCase::new("in progress") || s == UniCase::new("in-progress") {
            Ok(TicketStatus::InProgress)
        } else if s == UniCase::new("resolved") {
            Ok(TicketStatus::Resolved)
        } else {
            Err(TmuberError::InvalidStatus(s.to_string()))
        }
    }
}

pub const VALID_STATUSES: &[&str] = &["open", "in-progress", "resolved"];

/// Status filter for the ticket list: everything, or one status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Is(TicketStatus),
}

impl StatusFilter {
    pub fn matches(&self, status: TicketStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Is(wanted) => *wanted == status,
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusFilter::All => write!(f, "All Status"),
            StatusFilter::Is(status) => write!(f, "{}", status),
        }
    }
}

impl FromStr for StatusFilter {
    type Err = TmuberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if UniCase::new(s.trim()) == UniCase::new("all") {
            Ok(StatusFilter::All)
        } else {
            s.parse::<TicketStatus>().map(StatusFilter::Is)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
pub enum TicketCategory {
    #[default]
    #[serde(rename = "app-bug")]
    AppBug,
    #[serde(rename = "payment-issue")]
    PaymentIssue,
    #[serde(rename = "booking-issue")]
    BookingIssue,
    #[serde(rename = "account-issue")]
    AccountIssue,
    #[serde(rename = "driver-issue")]
    DriverIssue,
    #[serde(rename = "safety-concern")]
    SafetyConcern,
}

impl fmt::Display for TicketCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TicketCategory::AppBug => write!(f, "App Bug"),
            TicketCategory::PaymentIssue => write!(f, "Payment Issue"),
            TicketCategory::BookingIssue => write!(f, "Booking Issue"),
            TicketCategory::AccountIssue => write!(f, "Account Issue"),
            TicketCategory::DriverIssue => write!(f, "Driver Issue"),
            TicketCategory::SafetyConcern => write!(f, "Safety Concern"),
        }
    }
}

impl FromStr for TicketCategory {
    type Err = TmuberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = UniCase::new(s.trim());
        for category in [
            TicketCategory::AppBug,
            TicketCategory::PaymentIssue,
            TicketCategory::BookingIssue,
            TicketCategory::AccountIssue,
            TicketCategory::DriverIssue,
            TicketCategory::SafetyConcern,
        ] {
            if s == UniCase::new(&category.to_string()) {
                return Ok(category);
            }
        }
        Err(TmuberError::InvalidCategory(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TicketPriority {
    Low,
    #[default]
    Medium,
    High,
}

impl fmt::Display for TicketPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TicketPriority::Low => write!(f, "Low"),
            TicketPriority::Medium => write!(f, "Medium"),
            TicketPriority::High => write!(f, "High"),
        }
    }
}

impl FromStr for TicketPriority {
    type Err = TmuberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = UniCase::new(s.trim());
        if s == UniCase::new("low") {
            Ok(TicketPriority::Low)
        } else if s == UniCase::new("medium") {
            Ok(TicketPriority::Medium)
        } else if s == UniCase::new("high") {
            Ok(TicketPriority::High)
        } else {
            Err(TmuberError::InvalidPriority(s.to_string()))
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RideType {
    #[default]
    Standard,
    Comfort,
    Premium,
}

impl RideType {
    /// Fare estimate label shown next to the ride type.
    pub fn price_label(&self) -> &'static str {
        match self {
            RideType::Standard => "Est. $12-18",
            RideType::Comfort => "Est. $15-22",
            RideType::Premium => "Est. $20-30",
        }
    }
}

impl fmt::Display for RideType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RideType::Standard => write!(f, "Standard"),
            RideType::Comfort => write!(f, "Comfort"),
            RideType::Premium => write!(f, "Premium"),
        }
    }
}

impl FromStr for RideType {
    type Err = TmuberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = UniCase::new(s.trim());
        if s == UniCase::new("standard") {
            Ok(RideType::Standard)
        } else if s == UniCase::new("comfort") {
            Ok(RideType::Comfort)
        } else if s == UniCase::new("premium") {
            Ok(RideType::Premium)
        } else {
            Err(TmuberError::InvalidRideType(s.to_string()))
        }
    }
}

/// Which of the three screens is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Passenger,
    Support,
    Admin,
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Screen::Passenger => write!(f, "Passenger"),
            Screen::Support => write!(f, "Support"),
            Screen::Admin => write!(f, "Admin"),
        }
    }
}

impl FromStr for Screen {
    type Err = TmuberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = UniCase::new(s.trim());
        if s == UniCase::new("passenger") {
            Ok(Screen::Passenger)
        } else if s == UniCase::new("support") {
            Ok(Screen::Support)
        } else if s == UniCase::new("admin") {
            Ok(Screen::Admin)
        } else {
            Err(TmuberError::InvalidScreen(s.to_string()))
        }
    }
}

pub const VALID_SCREENS: &[&str] = &["passenger", "support", "admin"];

/// A user-reported support issue record.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct Ticket {
    pub id: u32,
    pub title: String,
    pub category: TicketCategory,
    pub priority: TicketPriority,
    pub status: TicketStatus,
    pub date: String,
    pub description: String,
    pub assignee: String,
}

/// A historical completed-trip record, read-only.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ride {
    pub id: u32,
    pub from: String,
    pub to: String,
    pub status: String,
    pub date: String,
    pub fare: f64,
    pub driver: String,
    pub rating: f64,
}

/// Fixed aggregate counters for the admin dashboard.
///
/// Display-only sample values; deliberately not recomputed from the live
/// ticket or ride lists.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct StatsSnapshot {
    pub total_rides: u32,
    pub active_users: u32,
    pub open_tickets: u32,
    pub avg_response_time: String,
    pub satisfaction: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    Operational,
    Delayed,
}

impl fmt::Display for ServiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceStatus::Operational => write!(f, "Operational"),
            ServiceStatus::Delayed => write!(f, "Delayed"),
        }
    }
}

/// One row of the system status panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceHealth {
    pub name: String,
    pub status: ServiceStatus,
    pub uptime: String,
}

/// A question/answer pair for the support screen.
#[derive(Debug, Clone, PartialEq)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}
