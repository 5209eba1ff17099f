use thiserror::Error;

#[derive(Error, Debug)]
pub enum TmuberError {
    #[error("ticket #{0} not found")]
    TicketNotFound(u32),

    #[error("invalid status '{0}'")]
    InvalidStatus(String),

    #[error("invalid category '{0}'")]
    InvalidCategory(String),

    #[error("invalid priority '{0}'")]
    InvalidPriority(String),

    #[error("invalid ride type '{0}'")]
    InvalidRideType(String),

    #[error("invalid screen '{0}'")]
    InvalidScreen(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, TmuberError>;

/// Validation failure for a form submission.
///
/// Surfaced to the caller; the UI decides whether to show it or silently
/// keep the form open.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("title cannot be empty")]
    EmptyTitle,

    #[error("no category selected")]
    MissingCategory,

    #[error("description cannot be empty")]
    EmptyDescription,

    #[error("pickup location cannot be empty")]
    EmptyPickup,

    #[error("destination cannot be empty")]
    EmptyDestination,
}
