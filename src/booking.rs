//! Ride booking flow
//!
//! Booking is simulated: submitting a valid form enters a "searching"
//! phase, and a delayed completion reports the driver as found. Each
//! search carries a sequence token so a completion that arrives after a
//! newer search started (or after a reset) is ignored.

use std::time::Duration;

use crate::error::ValidationError;
use crate::sample;
use crate::types::RideType;

/// Simulated time spent looking for a driver.
pub const DRIVER_SEARCH_DELAY: Duration = Duration::from_millis(2000);

pub const SEARCHING_MESSAGE: &str = "Looking for nearby drivers...";
pub const DRIVER_FOUND_MESSAGE: &str = "Driver found! Your ride will arrive in 5 minutes.";

/// The booking form as the user fills it in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingDraft {
    pub pickup: String,
    pub destination: String,
    pub ride_type: RideType,
}

impl Default for BookingDraft {
    fn default() -> Self {
        BookingDraft {
            pickup: sample::DEFAULT_PICKUP.to_string(),
            destination: String::new(),
            ride_type: RideType::Standard,
        }
    }
}

impl BookingDraft {
    /// Both locations are required; ride type always has a value.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.pickup.trim().is_empty() {
            return Err(ValidationError::EmptyPickup);
        }
        if self.destination.trim().is_empty() {
            return Err(ValidationError::EmptyDestination);
        }
        Ok(())
    }
}

/// Driver search state machine: idle or searching.
///
/// The sequence token ties a pending completion to the search that
/// scheduled it. `finish` with a stale token is a no-op, so restarting
/// the search (or leaving the screen) invalidates the old timer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DriverSearch {
    searching: bool,
    seq: u64,
}

impl DriverSearch {
    /// Begin a search. Returns the token for the completion timer.
    pub fn start(&mut self) -> u64 {
        self.seq += 1;
        self.searching = true;
        self.seq
    }

    /// Complete the search identified by `token`. Returns true when this
    /// was the live search; false when the token is stale.
    pub fn finish(&mut self, token: u64) -> bool {
        if token == self.seq && self.searching {
            self.searching = false;
            true
        } else {
            false
        }
    }

    /// Abandon any in-flight search without reporting a driver.
    pub fn cancel(&mut self) {
        self.seq += 1;
        self.searching = false;
    }

    pub fn is_searching(&self) -> bool {
        self.searching
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_draft_prefills_pickup() {
        let draft = BookingDraft::default();
        assert_eq!(draft.pickup, sample::DEFAULT_PICKUP);
        assert!(draft.destination.is_empty());
        assert_eq!(draft.ride_type, RideType::Standard);
        // Pickup is pre-filled, so only the destination is missing.
        assert_eq!(draft.validate(), Err(ValidationError::EmptyDestination));
    }

    #[test]
    fn test_validate_requires_both_locations() {
        let mut draft = BookingDraft::default();
        draft.destination = "CN Tower".to_string();
        assert_eq!(draft.validate(), Ok(()));

        draft.pickup = "   ".to_string();
        assert_eq!(draft.validate(), Err(ValidationError::EmptyPickup));
    }

    #[test]
    fn test_search_start_and_finish() {
        let mut search = DriverSearch::default();
        assert!(!search.is_searching());

        let token = search.start();
        assert!(search.is_searching());
        assert!(search.finish(token));
        assert!(!search.is_searching());
    }

    #[test]
    fn test_restart_invalidates_previous_completion() {
        let mut search = DriverSearch::default();
        let first = search.start();
        let second = search.start();

        // First timer fires late; the restarted search ignores it.
        assert!(!search.finish(first));
        assert!(search.is_searching());

        assert!(search.finish(second));
        assert!(!search.is_searching());
    }

    #[test]
    fn test_cancel_invalidates_pending_completion() {
        let mut search = DriverSearch::default();
        let token = search.start();
        search.cancel();

        assert!(!search.is_searching());
        assert!(!search.finish(token));
    }
}
