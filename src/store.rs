//! In-memory ticket store
//!
//! Holds the mutable list of support tickets. Tickets are only ever created
//! or have their status overwritten; nothing is deleted. New tickets are
//! prepended so the most recent report shows first.

use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;

use crate::error::{Result, TmuberError, ValidationError};
use crate::sample;
use crate::types::{StatusFilter, Ticket, TicketCategory, TicketPriority, TicketStatus};

/// Draft of a ticket being filled in by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketDraft {
    pub title: String,
    pub category: Option<TicketCategory>,
    pub priority: TicketPriority,
    pub description: String,
}

impl Default for TicketDraft {
    fn default() -> Self {
        TicketDraft {
            title: String::new(),
            category: None,
            priority: TicketPriority::Medium,
            description: String::new(),
        }
    }
}

impl TicketDraft {
    /// Check required fields: title, category, and description.
    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        if self.category.is_none() {
            return Err(ValidationError::MissingCategory);
        }
        if self.description.trim().is_empty() {
            return Err(ValidationError::EmptyDescription);
        }
        Ok(())
    }
}

/// A ticket that passed the filter, with fuzzy match indices for
/// highlighting the search hit in the title.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilteredTicket {
    pub ticket: Ticket,
    pub title_indices: Vec<usize>,
}

#[derive(Debug, Clone, Default)]
pub struct TicketStore {
    tickets: Vec<Ticket>,
    next_id: u32,
}

impl TicketStore {
    /// Build a store from an initial ticket list. The id counter starts past
    /// the largest seeded id, so ids stay unique even if the list shrinks.
    pub fn new(tickets: Vec<Ticket>) -> Self {
        let next_id = tickets.iter().map(|t| t.id).max().unwrap_or(0) + 1;
        TicketStore { tickets, next_id }
    }

    /// Store seeded with the sample tickets.
    pub fn with_sample_data() -> Self {
        Self::new(sample::tickets())
    }

    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }

    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&Ticket> {
        self.tickets.iter().find(|t| t.id == id)
    }

    /// Create a ticket from a draft.
    ///
    /// Validates required fields, then prepends a new ticket with status
    /// Open, the default assignee, and today's date. Returns the created
    /// ticket on success; on validation failure the store is untouched.
    pub fn create(
        &mut self,
        draft: &TicketDraft,
    ) -> std::result::Result<&Ticket, ValidationError> {
        draft.validate()?;
        let Some(category) = draft.category else {
            return Err(ValidationError::MissingCategory);
        };

        let id = self.next_id;
        self.next_id += 1;

        let ticket = Ticket {
            id,
            title: draft.title.trim().to_string(),
            category,
            priority: draft.priority,
            status: TicketStatus::Open,
            date: today(),
            description: draft.description.trim().to_string(),
            assignee: sample::DEFAULT_ASSIGNEE.to_string(),
        };
        tracing::debug!("created ticket #{id}: {}", ticket.title);
        self.tickets.insert(0, ticket);
        Ok(&self.tickets[0])
    }

    /// Overwrite the status of a ticket. Any transition is allowed,
    /// including reopening a resolved ticket.
    pub fn set_status(&mut self, id: u32, status: TicketStatus) -> Result<()> {
        let ticket = self
            .tickets
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(TmuberError::TicketNotFound(id))?;
        tracing::debug!("ticket #{id} status {} -> {status}", ticket.status);
        ticket.status = status;
        Ok(())
    }

    /// Filter tickets by status and free-text search.
    ///
    /// A ticket passes when the status filter is All or matches its status,
    /// AND its title or description contains the query (case-insensitive
    /// substring). Recomputed on every call; list order is preserved.
    pub fn filter(&self, status: StatusFilter, query: &str) -> Vec<FilteredTicket> {
        let needle = query.trim().to_lowercase();
        let matcher = SkimMatcherV2::default().smart_case();

        self.tickets
            .iter()
            .filter(|t| {
                status.matches(t.status)
                    && (needle.is_empty()
                        || t.title.to_lowercase().contains(&needle)
                        || t.description.to_lowercase().contains(&needle))
            })
            .map(|t| {
                let title_indices = if needle.is_empty() {
                    vec![]
                } else {
                    matcher
                        .fuzzy_indices(&t.title, needle.as_str())
                        .map(|(_, indices)| indices)
                        .unwrap_or_default()
                };
                FilteredTicket {
                    ticket: t.clone(),
                    title_indices,
                }
            })
            .collect()
    }
}

/// Today's date as `YYYY-MM-DD`, matching the sample data format.
pub fn today() -> String {
    jiff::Zoned::now().strftime("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str, category: Option<TicketCategory>, description: &str) -> TicketDraft {
        TicketDraft {
            title: title.to_string(),
            category,
            priority: TicketPriority::Medium,
            description: description.to_string(),
        }
    }

    #[test]
    fn test_create_valid_ticket() {
        let mut store = TicketStore::with_sample_data();
        let before = store.len();

        let created = store
            .create(&draft(
                "Lost item",
                Some(TicketCategory::DriverIssue),
                "Left my bag in the car.",
            ))
            .unwrap();

        assert_eq!(created.status, TicketStatus::Open);
        assert_eq!(created.assignee, sample::DEFAULT_ASSIGNEE);
        assert_eq!(store.len(), before + 1);
        // New tickets are prepended
        assert_eq!(store.tickets()[0].title, "Lost item");
    }

    #[test]
    fn test_create_rejects_missing_fields() {
        let mut store = TicketStore::with_sample_data();
        let before = store.len();

        assert_eq!(
            store.create(&draft("", Some(TicketCategory::AppBug), "desc")),
            Err(ValidationError::EmptyTitle)
        );
        assert_eq!(
            store.create(&draft("title", None, "desc")),
            Err(ValidationError::MissingCategory)
        );
        assert_eq!(
            store.create(&draft("title", Some(TicketCategory::AppBug), "   ")),
            Err(ValidationError::EmptyDescription)
        );
        assert_eq!(store.len(), before);
    }

    #[test]
    fn test_ids_are_monotonic() {
        let mut store = TicketStore::with_sample_data();
        let a = store
            .create(&draft("A", Some(TicketCategory::AppBug), "a"))
            .unwrap()
            .id;
        let b = store
            .create(&draft("B", Some(TicketCategory::AppBug), "b"))
            .unwrap()
            .id;
        assert_eq!(a, 4);
        assert_eq!(b, 5);
    }

    #[test]
    fn test_set_status_changes_only_target() {
        let mut store = TicketStore::with_sample_data();
        store.set_status(2, TicketStatus::Resolved).unwrap();

        assert_eq!(store.get(2).unwrap().status, TicketStatus::Resolved);
        assert_eq!(store.get(1).unwrap().status, TicketStatus::Open);
        assert_eq!(store.get(3).unwrap().status, TicketStatus::Resolved);
    }

    #[test]
    fn test_set_status_allows_any_transition() {
        let mut store = TicketStore::with_sample_data();
        // Resolved -> Open is allowed
        store.set_status(3, TicketStatus::Open).unwrap();
        assert_eq!(store.get(3).unwrap().status, TicketStatus::Open);
    }

    #[test]
    fn test_set_status_unknown_id() {
        let mut store = TicketStore::with_sample_data();
        assert!(matches!(
            store.set_status(99, TicketStatus::Open),
            Err(TmuberError::TicketNotFound(99))
        ));
    }

    #[test]
    fn test_filter_by_status_only() {
        let store = TicketStore::with_sample_data();
        let open = store.filter(StatusFilter::Is(TicketStatus::Open), "");
        assert_eq!(open.len(), 1);
        assert!(open.iter().all(|f| f.ticket.status == TicketStatus::Open));
    }

    #[test]
    fn test_filter_search_matches_title() {
        let store = TicketStore::with_sample_data();
        let hits = store.filter(StatusFilter::All, "crash");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].ticket.title, "App Crashes on Login");
        assert!(!hits[0].title_indices.is_empty());
    }

    #[test]
    fn test_filter_search_matches_description() {
        let store = TicketStore::with_sample_data();
        let hits = store.filter(StatusFilter::All, "refund");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].ticket.title, "Payment Failed");
        // Hit is in the description, so no title highlight
        assert!(hits[0].title_indices.is_empty());
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let store = TicketStore::with_sample_data();
        assert_eq!(store.filter(StatusFilter::All, "CRASH").len(), 1);
        assert_eq!(store.filter(StatusFilter::All, "Crash").len(), 1);
    }

    #[test]
    fn test_filter_combines_status_and_search() {
        let store = TicketStore::with_sample_data();
        let hits = store.filter(StatusFilter::Is(TicketStatus::Resolved), "driver");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].ticket.title, "Driver Not Found");

        let none = store.filter(StatusFilter::Is(TicketStatus::Open), "crash");
        assert!(none.is_empty());
    }

    #[test]
    fn test_filter_empty_query_returns_all() {
        let store = TicketStore::with_sample_data();
        assert_eq!(store.filter(StatusFilter::All, "").len(), 3);
    }

    #[test]
    fn test_new_store_counter_survives_gaps() {
        let mut tickets = sample::tickets();
        tickets.remove(0);
        let mut store = TicketStore::new(tickets);
        let id = store
            .create(&draft("X", Some(TicketCategory::AppBug), "x"))
            .unwrap()
            .id;
        // Counter seeds past the max id, not the list length
        assert_eq!(id, 4);
    }
}
