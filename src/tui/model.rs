//! App model types for testable state management
//!
//! Separates state (AppState) from rendering, so every interaction can be
//! unit tested without the iocraft framework. `reduce` is a pure state
//! transition; timed work is described by `Effect` values that the
//! component schedules and feeds back in as actions.

use iocraft::prelude::{KeyCode, KeyModifiers};
use std::time::Duration;

use crate::booking::{
    BookingDraft, DRIVER_FOUND_MESSAGE, DRIVER_SEARCH_DELAY, DriverSearch, SEARCHING_MESSAGE,
};
use crate::notify::{DISMISS_AFTER, Notification, NotificationState};
use crate::sample;
use crate::store::{FilteredTicket, TicketDraft, TicketStore};
use crate::types::{
    Ride, RideType, Screen, StatsSnapshot, StatusFilter, TicketCategory, TicketPriority,
    TicketStatus,
};

pub const TICKET_CREATED_MESSAGE: &str = "Support ticket created successfully!";

/// Which widget receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The screen tab bar; digit keys switch screens from here.
    #[default]
    Tabs,

    // Passenger screen
    Pickup,
    Destination,
    RideTypeSelect,

    // Support screen
    TicketTitle,
    TicketCategory,
    TicketPriority,
    TicketDescription,
    FilterStatus,
    SearchQuery,

    // Admin screen
    AdminTickets,
}

impl Focus {
    pub fn is_text_field(self) -> bool {
        matches!(
            self,
            Focus::Pickup
                | Focus::Destination
                | Focus::TicketTitle
                | Focus::TicketDescription
                | Focus::SearchQuery
        )
    }

    pub fn is_select(self) -> bool {
        matches!(
            self,
            Focus::RideTypeSelect
                | Focus::TicketCategory
                | Focus::TicketPriority
                | Focus::FilterStatus
        )
    }
}

/// Raw state that changes during user interaction
#[derive(Debug, Clone)]
pub struct AppState {
    pub screen: Screen,
    pub focus: Focus,
    pub store: TicketStore,
    pub rides: Vec<Ride>,
    pub stats: StatsSnapshot,
    pub booking: BookingDraft,
    pub driver_search: DriverSearch,
    pub ticket_draft: TicketDraft,
    pub status_filter: StatusFilter,
    pub search_query: String,
    pub notifications: NotificationState,
    /// Selected row in the admin ticket table
    pub admin_selected: usize,
    pub should_exit: bool,
}

impl AppState {
    pub fn new() -> Self {
        AppState {
            screen: Screen::Passenger,
            focus: Focus::Tabs,
            store: TicketStore::with_sample_data(),
            rides: sample::rides(),
            stats: sample::stats(),
            booking: BookingDraft::default(),
            driver_search: DriverSearch::default(),
            ticket_draft: TicketDraft::default(),
            status_filter: StatusFilter::All,
            search_query: String::new(),
            notifications: NotificationState::default(),
            admin_selected: 0,
            should_exit: false,
        }
    }

    /// Tickets passing the support screen's status filter and search query.
    pub fn filtered_tickets(&self) -> Vec<FilteredTicket> {
        self.store.filter(self.status_filter, &self.search_query)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// All possible actions on the app
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    // Screens and focus
    SwitchScreen(Screen),
    FocusNext,
    FocusPrev,
    /// Return focus to the tab bar
    FocusTabs,

    // Text input (routed to the focused field)
    Input(char),
    Backspace,

    // Option cycling (routed to the focused select)
    SelectNext,
    SelectPrev,

    /// Submit the current screen's form
    Submit,

    // Admin ticket table
    AdminDown,
    AdminUp,
    /// Cycle the selected ticket's status forward
    AdminStatusForward,
    /// Cycle the selected ticket's status backward
    AdminStatusBackward,

    // Timer completions
    DriverFound(u64),
    DismissNotification(u64),

    Quit,
}

/// Timed side effect requested by the reducer.
///
/// The component sleeps for `delay()` and then feeds `into_action()` back
/// through `reduce`. Tokens make late firings harmless.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    DismissNotification(u64),
    CompleteDriverSearch(u64),
}

impl Effect {
    pub fn delay(&self) -> Duration {
        match self {
            Effect::DismissNotification(_) => DISMISS_AFTER,
            Effect::CompleteDriverSearch(_) => DRIVER_SEARCH_DELAY,
        }
    }

    pub fn into_action(self) -> AppAction {
        match self {
            Effect::DismissNotification(token) => AppAction::DismissNotification(token),
            Effect::CompleteDriverSearch(token) => AppAction::DriverFound(token),
        }
    }
}

/// Focus cycle for each screen, starting at the tab bar.
fn focus_ring(screen: Screen) -> &'static [Focus] {
    match screen {
        Screen::Passenger => &[
            Focus::Tabs,
            Focus::Pickup,
            Focus::Destination,
            Focus::RideTypeSelect,
        ],
        Screen::Support => &[
            Focus::Tabs,
            Focus::TicketTitle,
            Focus::TicketCategory,
            Focus::TicketPriority,
            Focus::TicketDescription,
            Focus::FilterStatus,
            Focus::SearchQuery,
        ],
        Screen::Admin => &[Focus::Tabs, Focus::AdminTickets],
    }
}

fn cycle_focus(screen: Screen, focus: Focus, forward: bool) -> Focus {
    let ring = focus_ring(screen);
    let pos = ring.iter().position(|f| *f == focus).unwrap_or(0);
    let next = if forward {
        (pos + 1) % ring.len()
    } else {
        (pos + ring.len() - 1) % ring.len()
    };
    ring[next]
}

fn cycle_screen(screen: Screen, forward: bool) -> Screen {
    match (screen, forward) {
        (Screen::Passenger, true) => Screen::Support,
        (Screen::Support, true) => Screen::Admin,
        (Screen::Admin, true) => Screen::Passenger,
        (Screen::Passenger, false) => Screen::Admin,
        (Screen::Support, false) => Screen::Passenger,
        (Screen::Admin, false) => Screen::Support,
    }
}

fn cycle_ride_type(ride_type: RideType, forward: bool) -> RideType {
    match (ride_type, forward) {
        (RideType::Standard, true) => RideType::Comfort,
        (RideType::Comfort, true) => RideType::Premium,
        (RideType::Premium, true) => RideType::Standard,
        (RideType::Standard, false) => RideType::Premium,
        (RideType::Comfort, false) => RideType::Standard,
        (RideType::Premium, false) => RideType::Comfort,
    }
}

const CATEGORIES: [TicketCategory; 6] = [
    TicketCategory::AppBug,
    TicketCategory::PaymentIssue,
    TicketCategory::BookingIssue,
    TicketCategory::AccountIssue,
    TicketCategory::DriverIssue,
    TicketCategory::SafetyConcern,
];

/// Cycle through "no category" plus the six categories.
fn cycle_category(category: Option<TicketCategory>, forward: bool) -> Option<TicketCategory> {
    let pos = category.map(|c| CATEGORIES.iter().position(|x| *x == c).unwrap_or(0));
    match (pos, forward) {
        (None, true) => Some(CATEGORIES[0]),
        (None, false) => Some(CATEGORIES[CATEGORIES.len() - 1]),
        (Some(i), true) => {
            if i + 1 < CATEGORIES.len() {
                Some(CATEGORIES[i + 1])
            } else {
                None
            }
        }
        (Some(0), false) => None,
        (Some(i), false) => Some(CATEGORIES[i - 1]),
    }
}

fn cycle_priority(priority: TicketPriority, forward: bool) -> TicketPriority {
    match (priority, forward) {
        (TicketPriority::Low, true) => TicketPriority::Medium,
        (TicketPriority::Medium, true) => TicketPriority::High,
        (TicketPriority::High, true) => TicketPriority::Low,
        (TicketPriority::Low, false) => TicketPriority::High,
        (TicketPriority::Medium, false) => TicketPriority::Low,
        (TicketPriority::High, false) => TicketPriority::Medium,
    }
}

fn cycle_filter(filter: StatusFilter, forward: bool) -> StatusFilter {
    match (filter, forward) {
        (StatusFilter::All, true) => StatusFilter::Is(TicketStatus::Open),
        (StatusFilter::Is(TicketStatus::Open), true) => {
            StatusFilter::Is(TicketStatus::InProgress)
        }
        (StatusFilter::Is(TicketStatus::InProgress), true) => {
            StatusFilter::Is(TicketStatus::Resolved)
        }
        (StatusFilter::Is(TicketStatus::Resolved), true) => StatusFilter::All,
        (StatusFilter::All, false) => StatusFilter::Is(TicketStatus::Resolved),
        (StatusFilter::Is(TicketStatus::Open), false) => StatusFilter::All,
        (StatusFilter::Is(TicketStatus::InProgress), false) => {
            StatusFilter::Is(TicketStatus::Open)
        }
        (StatusFilter::Is(TicketStatus::Resolved), false) => {
            StatusFilter::Is(TicketStatus::InProgress)
        }
    }
}

fn cycle_status(status: TicketStatus, forward: bool) -> TicketStatus {
    match (status, forward) {
        (TicketStatus::Open, true) => TicketStatus::InProgress,
        (TicketStatus::InProgress, true) => TicketStatus::Resolved,
        (TicketStatus::Resolved, true) => TicketStatus::Open,
        (TicketStatus::Open, false) => TicketStatus::Resolved,
        (TicketStatus::InProgress, false) => TicketStatus::Open,
        (TicketStatus::Resolved, false) => TicketStatus::InProgress,
    }
}

/// Pure function: apply action to state (reducer pattern)
///
/// Returns the new state plus any timed effects the caller must schedule.
/// No I/O and no timers happen here.
pub fn reduce(mut state: AppState, action: AppAction) -> (AppState, Vec<Effect>) {
    let mut effects = Vec::new();

    match action {
        AppAction::SwitchScreen(screen) => {
            if screen != state.screen {
                // A pending driver search does not survive leaving the screen
                if state.screen == Screen::Passenger {
                    state.driver_search.cancel();
                }
                state.screen = screen;
                state.focus = Focus::Tabs;
            }
        }

        AppAction::FocusNext => {
            state.focus = cycle_focus(state.screen, state.focus, true);
        }
        AppAction::FocusPrev => {
            state.focus = cycle_focus(state.screen, state.focus, false);
        }
        AppAction::FocusTabs => {
            state.focus = Focus::Tabs;
        }

        AppAction::Input(c) => match state.focus {
            Focus::Pickup => state.booking.pickup.push(c),
            Focus::Destination => state.booking.destination.push(c),
            Focus::TicketTitle => state.ticket_draft.title.push(c),
            Focus::TicketDescription => state.ticket_draft.description.push(c),
            Focus::SearchQuery => state.search_query.push(c),
            _ => {}
        },
        AppAction::Backspace => match state.focus {
            Focus::Pickup => {
                state.booking.pickup.pop();
            }
            Focus::Destination => {
                state.booking.destination.pop();
            }
            Focus::TicketTitle => {
                state.ticket_draft.title.pop();
            }
            Focus::TicketDescription => {
                state.ticket_draft.description.pop();
            }
            Focus::SearchQuery => {
                state.search_query.pop();
            }
            _ => {}
        },

        AppAction::SelectNext | AppAction::SelectPrev => {
            let forward = action == AppAction::SelectNext;
            match state.focus {
                Focus::RideTypeSelect => {
                    state.booking.ride_type = cycle_ride_type(state.booking.ride_type, forward);
                }
                Focus::TicketCategory => {
                    state.ticket_draft.category =
                        cycle_category(state.ticket_draft.category, forward);
                }
                Focus::TicketPriority => {
                    state.ticket_draft.priority =
                        cycle_priority(state.ticket_draft.priority, forward);
                }
                Focus::FilterStatus => {
                    state.status_filter = cycle_filter(state.status_filter, forward);
                }
                _ => {}
            }
        }

        AppAction::Submit => match state.screen {
            Screen::Passenger => {
                // Validation failures keep the form as-is, no banner.
                // Re-submitting during a search restarts it: start() bumps
                // the token, so the older completion goes stale.
                if state.booking.validate().is_ok() {
                    let ntoken = state
                        .notifications
                        .show(Notification::info(SEARCHING_MESSAGE));
                    let stoken = state.driver_search.start();
                    effects.push(Effect::DismissNotification(ntoken));
                    effects.push(Effect::CompleteDriverSearch(stoken));
                }
            }
            Screen::Support => {
                if state.store.create(&state.ticket_draft).is_ok() {
                    state.ticket_draft = TicketDraft::default();
                    let ntoken = state
                        .notifications
                        .show(Notification::success(TICKET_CREATED_MESSAGE));
                    effects.push(Effect::DismissNotification(ntoken));
                }
            }
            Screen::Admin => {}
        },

        AppAction::AdminDown => {
            if !state.store.is_empty() {
                state.admin_selected = (state.admin_selected + 1).min(state.store.len() - 1);
            }
        }
        AppAction::AdminUp => {
            state.admin_selected = state.admin_selected.saturating_sub(1);
        }
        AppAction::AdminStatusForward | AppAction::AdminStatusBackward => {
            let forward = action == AppAction::AdminStatusForward;
            let target = state
                .store
                .tickets()
                .get(state.admin_selected)
                .map(|t| (t.id, cycle_status(t.status, forward)));
            if let Some((id, next)) = target {
                if state.store.set_status(id, next).is_ok() {
                    let ntoken = state.notifications.show(Notification::info(format!(
                        "Ticket #{id} status updated to {next}"
                    )));
                    effects.push(Effect::DismissNotification(ntoken));
                }
            }
        }

        AppAction::DriverFound(token) => {
            // The form is intentionally left as-is; the user can rebook
            if state.driver_search.finish(token) {
                let ntoken = state
                    .notifications
                    .show(Notification::success(DRIVER_FOUND_MESSAGE));
                effects.push(Effect::DismissNotification(ntoken));
            }
        }
        AppAction::DismissNotification(token) => {
            state.notifications.dismiss(token);
        }

        AppAction::Quit => {
            state.should_exit = true;
        }
    }

    (state, effects)
}

/// Convert a key event to an AppAction (pure function)
///
/// Returns `None` if the key doesn't map to any action in the current
/// screen/focus combination.
pub fn key_to_action(
    code: KeyCode,
    modifiers: KeyModifiers,
    screen: Screen,
    focus: Focus,
) -> Option<AppAction> {
    // Global bindings
    if modifiers.contains(KeyModifiers::CONTROL) {
        return match code {
            KeyCode::Char('q') => Some(AppAction::Quit),
            KeyCode::Char('s') if screen != Screen::Admin => Some(AppAction::Submit),
            _ => None,
        };
    }
    match code {
        KeyCode::Tab => return Some(AppAction::FocusNext),
        KeyCode::BackTab => return Some(AppAction::FocusPrev),
        KeyCode::Esc => {
            return if focus == Focus::Tabs {
                Some(AppAction::Quit)
            } else {
                Some(AppAction::FocusTabs)
            };
        }
        _ => {}
    }

    if focus == Focus::Tabs {
        return match code {
            KeyCode::Char('1') => Some(AppAction::SwitchScreen(Screen::Passenger)),
            KeyCode::Char('2') => Some(AppAction::SwitchScreen(Screen::Support)),
            KeyCode::Char('3') => Some(AppAction::SwitchScreen(Screen::Admin)),
            KeyCode::Char('q') => Some(AppAction::Quit),
            KeyCode::Right | KeyCode::Char('l') => {
                Some(AppAction::SwitchScreen(cycle_screen(screen, true)))
            }
            KeyCode::Left | KeyCode::Char('h') => {
                Some(AppAction::SwitchScreen(cycle_screen(screen, false)))
            }
            KeyCode::Enter | KeyCode::Down | KeyCode::Char('j') => Some(AppAction::FocusNext),
            _ => None,
        };
    }

    if focus.is_text_field() {
        return match code {
            KeyCode::Char(c) => Some(AppAction::Input(c)),
            KeyCode::Backspace => Some(AppAction::Backspace),
            // Enter submits the form; in the search box it just leaves
            KeyCode::Enter if focus == Focus::SearchQuery => Some(AppAction::FocusTabs),
            KeyCode::Enter => Some(AppAction::Submit),
            _ => None,
        };
    }

    if focus.is_select() {
        return match code {
            KeyCode::Right | KeyCode::Down | KeyCode::Char('j') | KeyCode::Char(' ') => {
                Some(AppAction::SelectNext)
            }
            KeyCode::Left | KeyCode::Up | KeyCode::Char('k') => Some(AppAction::SelectPrev),
            KeyCode::Enter if focus != Focus::FilterStatus => Some(AppAction::Submit),
            KeyCode::Enter => Some(AppAction::FocusNext),
            _ => None,
        };
    }

    // Admin ticket table
    match code {
        KeyCode::Down | KeyCode::Char('j') => Some(AppAction::AdminDown),
        KeyCode::Up | KeyCode::Char('k') => Some(AppAction::AdminUp),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('s') | KeyCode::Enter => {
            Some(AppAction::AdminStatusForward)
        }
        KeyCode::Left | KeyCode::Char('h') => Some(AppAction::AdminStatusBackward),
        _ => None,
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> AppState {
        AppState::new()
    }

    fn apply(state: AppState, actions: &[AppAction]) -> (AppState, Vec<Effect>) {
        let mut effects = Vec::new();
        let mut state = state;
        for action in actions {
            let (next, mut fx) = reduce(state, *action);
            state = next;
            effects.append(&mut fx);
        }
        (state, effects)
    }

    // ========================================================================
    // Screens and focus
    // ========================================================================

    #[test]
    fn test_switch_screen_resets_focus() {
        let mut s = state();
        s.focus = Focus::Destination;
        let (s, _) = reduce(s, AppAction::SwitchScreen(Screen::Support));
        assert_eq!(s.screen, Screen::Support);
        assert_eq!(s.focus, Focus::Tabs);
    }

    #[test]
    fn test_switch_screen_cancels_driver_search() {
        let mut s = state();
        s.booking.destination = "CN Tower".to_string();
        let (s, effects) = reduce(s, AppAction::Submit);
        assert!(s.driver_search.is_searching());
        let token = match effects[1] {
            Effect::CompleteDriverSearch(t) => t,
            _ => panic!("expected driver search effect"),
        };

        let (s, _) = reduce(s, AppAction::SwitchScreen(Screen::Admin));
        assert!(!s.driver_search.is_searching());

        // The in-flight completion is now stale; the searching banner
        // stays up until its own dismiss timer fires.
        let (s, effects) = reduce(s, AppAction::DriverFound(token));
        assert!(effects.is_empty());
        assert_eq!(
            s.notifications.current().map(|n| n.message.as_str()),
            Some(SEARCHING_MESSAGE)
        );
    }

    #[test]
    fn test_focus_cycles_through_passenger_ring() {
        let mut s = state();
        for expected in [
            Focus::Pickup,
            Focus::Destination,
            Focus::RideTypeSelect,
            Focus::Tabs,
        ] {
            let (next, _) = reduce(s, AppAction::FocusNext);
            s = next;
            assert_eq!(s.focus, expected);
        }
    }

    #[test]
    fn test_focus_prev_wraps() {
        let s = state();
        let (s, _) = reduce(s, AppAction::FocusPrev);
        assert_eq!(s.focus, Focus::RideTypeSelect);
    }

    // ========================================================================
    // Text input and selects
    // ========================================================================

    #[test]
    fn test_input_routes_to_focused_field() {
        let mut s = state();
        s.focus = Focus::Destination;
        let (s, _) = apply(
            s,
            &[
                AppAction::Input('C'),
                AppAction::Input('N'),
                AppAction::Input('x'),
                AppAction::Backspace,
            ],
        );
        assert_eq!(s.booking.destination, "CN");
        assert_eq!(s.booking.pickup, sample::DEFAULT_PICKUP);
    }

    #[test]
    fn test_search_query_input() {
        let mut s = state();
        s.screen = Screen::Support;
        s.focus = Focus::SearchQuery;
        let (s, _) = apply(s, &[AppAction::Input('c'), AppAction::Input('r')]);
        assert_eq!(s.search_query, "cr");
    }

    #[test]
    fn test_ride_type_select_cycles() {
        let mut s = state();
        s.focus = Focus::RideTypeSelect;
        let (s, _) = reduce(s, AppAction::SelectNext);
        assert_eq!(s.booking.ride_type, RideType::Comfort);
        let (s, _) = reduce(s, AppAction::SelectPrev);
        assert_eq!(s.booking.ride_type, RideType::Standard);
        let (s, _) = reduce(s, AppAction::SelectPrev);
        assert_eq!(s.booking.ride_type, RideType::Premium);
    }

    #[test]
    fn test_category_select_cycles_through_none() {
        let mut s = state();
        s.screen = Screen::Support;
        s.focus = Focus::TicketCategory;
        assert_eq!(s.ticket_draft.category, None);

        let (s, _) = reduce(s, AppAction::SelectNext);
        assert_eq!(s.ticket_draft.category, Some(TicketCategory::AppBug));
        let (s, _) = reduce(s, AppAction::SelectPrev);
        assert_eq!(s.ticket_draft.category, None);
        let (s, _) = reduce(s, AppAction::SelectPrev);
        assert_eq!(s.ticket_draft.category, Some(TicketCategory::SafetyConcern));
    }

    #[test]
    fn test_filter_select_cycles() {
        let mut s = state();
        s.screen = Screen::Support;
        s.focus = Focus::FilterStatus;
        let (s, _) = reduce(s, AppAction::SelectNext);
        assert_eq!(s.status_filter, StatusFilter::Is(TicketStatus::Open));
        let (s, _) = reduce(s, AppAction::SelectPrev);
        assert_eq!(s.status_filter, StatusFilter::All);
    }

    // ========================================================================
    // Booking flow
    // ========================================================================

    #[test]
    fn test_book_ride_starts_search_and_schedules_effects() {
        let mut s = state();
        s.booking.destination = "CN Tower".to_string();
        let (s, effects) = reduce(s, AppAction::Submit);

        assert!(s.driver_search.is_searching());
        assert_eq!(
            s.notifications.current().map(|n| n.message.as_str()),
            Some(SEARCHING_MESSAGE)
        );
        assert_eq!(effects.len(), 2);
        assert!(matches!(effects[0], Effect::DismissNotification(_)));
        assert!(matches!(effects[1], Effect::CompleteDriverSearch(_)));
    }

    #[test]
    fn test_book_ride_invalid_form_is_silent() {
        let s = state(); // destination empty
        let (s, effects) = reduce(s, AppAction::Submit);
        assert!(!s.driver_search.is_searching());
        assert!(s.notifications.current().is_none());
        assert!(effects.is_empty());
    }

    #[test]
    fn test_resubmit_while_searching_restarts_search() {
        let mut s = state();
        s.booking.destination = "CN Tower".to_string();
        let (s, first) = reduce(s, AppAction::Submit);
        let old_token = match first[1] {
            Effect::CompleteDriverSearch(t) => t,
            _ => panic!("expected driver search effect"),
        };

        // Second valid submit during the search starts over
        let (s, second) = reduce(s, AppAction::Submit);
        assert!(s.driver_search.is_searching());
        assert_eq!(
            s.notifications.current().map(|n| n.message.as_str()),
            Some(SEARCHING_MESSAGE)
        );
        assert_eq!(second.len(), 2);

        // The first search's completion is stale now
        let (s, effects) = reduce(s, AppAction::DriverFound(old_token));
        assert!(effects.is_empty());
        assert!(s.driver_search.is_searching());

        // The restarted search still completes
        let new_token = match second[1] {
            Effect::CompleteDriverSearch(t) => t,
            _ => panic!("expected driver search effect"),
        };
        let (s, _) = reduce(s, AppAction::DriverFound(new_token));
        assert!(!s.driver_search.is_searching());
        assert_eq!(
            s.notifications.current().map(|n| n.message.as_str()),
            Some(DRIVER_FOUND_MESSAGE)
        );
    }

    #[test]
    fn test_driver_found_shows_success_and_keeps_form() {
        let mut s = state();
        s.booking.destination = "CN Tower".to_string();
        let (s, effects) = reduce(s, AppAction::Submit);
        let token = match effects[1] {
            Effect::CompleteDriverSearch(t) => t,
            _ => panic!("expected driver search effect"),
        };

        let (s, effects) = reduce(s, AppAction::DriverFound(token));
        assert!(!s.driver_search.is_searching());
        assert_eq!(s.booking.destination, "CN Tower");
        assert_eq!(
            s.notifications.current().map(|n| n.message.as_str()),
            Some(DRIVER_FOUND_MESSAGE)
        );
        assert_eq!(effects.len(), 1);
    }

    #[test]
    fn test_rebooking_invalidates_previous_search() {
        let mut s = state();
        s.booking.destination = "CN Tower".to_string();
        let (s, effects) = reduce(s, AppAction::Submit);
        let stale = match effects[1] {
            Effect::CompleteDriverSearch(t) => t,
            _ => panic!("expected driver search effect"),
        };

        // Leave and come back, then book again
        let (s, _) = reduce(s, AppAction::SwitchScreen(Screen::Support));
        let (mut s, _) = reduce(s, AppAction::SwitchScreen(Screen::Passenger));
        s.booking.destination = "Union Station".to_string();
        let (s, _) = reduce(s, AppAction::Submit);

        // The first booking's completion must not fire
        let (s, effects) = reduce(s, AppAction::DriverFound(stale));
        assert!(effects.is_empty());
        assert!(s.driver_search.is_searching());
    }

    // ========================================================================
    // Ticket form
    // ========================================================================

    #[test]
    fn test_submit_ticket_creates_and_resets_form() {
        let mut s = state();
        s.screen = Screen::Support;
        s.ticket_draft.title = "Lost item".to_string();
        s.ticket_draft.category = Some(TicketCategory::DriverIssue);
        s.ticket_draft.description = "Left my bag in the car.".to_string();

        let before = s.store.len();
        let (s, effects) = reduce(s, AppAction::Submit);

        assert_eq!(s.store.len(), before + 1);
        assert_eq!(s.store.tickets()[0].title, "Lost item");
        assert_eq!(s.ticket_draft, TicketDraft::default());
        assert_eq!(
            s.notifications.current().map(|n| n.message.as_str()),
            Some(TICKET_CREATED_MESSAGE)
        );
        assert_eq!(effects.len(), 1);
    }

    #[test]
    fn test_submit_invalid_ticket_is_silent() {
        let mut s = state();
        s.screen = Screen::Support;
        s.ticket_draft.title = "Missing the rest".to_string();

        let before = s.store.len();
        let (s, effects) = reduce(s, AppAction::Submit);

        assert_eq!(s.store.len(), before);
        assert_eq!(s.ticket_draft.title, "Missing the rest");
        assert!(s.notifications.current().is_none());
        assert!(effects.is_empty());
    }

    // ========================================================================
    // Admin ticket management
    // ========================================================================

    #[test]
    fn test_admin_navigation_clamps() {
        let mut s = state();
        s.screen = Screen::Admin;
        s.focus = Focus::AdminTickets;
        let (s, _) = apply(
            s,
            &[
                AppAction::AdminDown,
                AppAction::AdminDown,
                AppAction::AdminDown,
                AppAction::AdminDown,
            ],
        );
        assert_eq!(s.admin_selected, 2);
        let (s, _) = apply(s, &[AppAction::AdminUp; 5]);
        assert_eq!(s.admin_selected, 0);
    }

    #[test]
    fn test_admin_status_cycle_updates_store_and_notifies() {
        let mut s = state();
        s.screen = Screen::Admin;
        s.focus = Focus::AdminTickets;
        // Row 0 is ticket #1, currently Open
        let (s, effects) = reduce(s, AppAction::AdminStatusForward);

        assert_eq!(
            s.store.get(1).unwrap().status,
            TicketStatus::InProgress
        );
        assert_eq!(
            s.notifications.current().map(|n| n.message.as_str()),
            Some("Ticket #1 status updated to In Progress")
        );
        assert_eq!(effects.len(), 1);
    }

    #[test]
    fn test_admin_status_cycle_backward_wraps() {
        let mut s = state();
        s.screen = Screen::Admin;
        let (s, _) = reduce(s, AppAction::AdminStatusBackward);
        assert_eq!(s.store.get(1).unwrap().status, TicketStatus::Resolved);
    }

    #[test]
    fn test_admin_status_change_leaves_stats_alone() {
        let mut s = state();
        s.screen = Screen::Admin;
        let stats_before = s.stats.clone();
        let (s, _) = reduce(s, AppAction::AdminStatusForward);
        assert_eq!(s.stats, stats_before);
    }

    // ========================================================================
    // Notifications
    // ========================================================================

    #[test]
    fn test_newer_notification_survives_older_dismiss_timer() {
        let mut s = state();
        s.screen = Screen::Support;
        s.ticket_draft.title = "A".to_string();
        s.ticket_draft.category = Some(TicketCategory::AppBug);
        s.ticket_draft.description = "a".to_string();
        let (s, effects) = reduce(s, AppAction::Submit);
        let stale = match effects[0] {
            Effect::DismissNotification(t) => t,
            _ => panic!("expected dismiss effect"),
        };

        // A second notification replaces the first before its timer fires.
        // Row 0 is the just-created ticket #4 (new tickets are prepended).
        let (mut s, _) = reduce(s, AppAction::SwitchScreen(Screen::Admin));
        s.focus = Focus::AdminTickets;
        let (s, _) = reduce(s, AppAction::AdminStatusForward);

        let (s, _) = reduce(s, AppAction::DismissNotification(stale));
        assert_eq!(
            s.notifications.current().map(|n| n.message.as_str()),
            Some("Ticket #4 status updated to In Progress")
        );
    }

    #[test]
    fn test_dismiss_clears_live_notification() {
        let mut s = state();
        s.booking.destination = "CN Tower".to_string();
        let (s, effects) = reduce(s, AppAction::Submit);
        let token = match effects[0] {
            Effect::DismissNotification(t) => t,
            _ => panic!("expected dismiss effect"),
        };
        let (s, _) = reduce(s, AppAction::DismissNotification(token));
        assert!(s.notifications.current().is_none());
    }

    // ========================================================================
    // Key mapping
    // ========================================================================

    #[test]
    fn test_key_ctrl_q_quits_everywhere() {
        for focus in [Focus::Tabs, Focus::Destination, Focus::AdminTickets] {
            assert_eq!(
                key_to_action(
                    KeyCode::Char('q'),
                    KeyModifiers::CONTROL,
                    Screen::Passenger,
                    focus
                ),
                Some(AppAction::Quit)
            );
        }
    }

    #[test]
    fn test_key_digits_switch_screens_from_tabs() {
        assert_eq!(
            key_to_action(
                KeyCode::Char('2'),
                KeyModifiers::NONE,
                Screen::Passenger,
                Focus::Tabs
            ),
            Some(AppAction::SwitchScreen(Screen::Support))
        );
        // But not while typing
        assert_eq!(
            key_to_action(
                KeyCode::Char('2'),
                KeyModifiers::NONE,
                Screen::Passenger,
                Focus::Destination
            ),
            Some(AppAction::Input('2'))
        );
    }

    #[test]
    fn test_key_esc_leaves_field_then_quits() {
        assert_eq!(
            key_to_action(
                KeyCode::Esc,
                KeyModifiers::NONE,
                Screen::Support,
                Focus::TicketTitle
            ),
            Some(AppAction::FocusTabs)
        );
        assert_eq!(
            key_to_action(KeyCode::Esc, KeyModifiers::NONE, Screen::Support, Focus::Tabs),
            Some(AppAction::Quit)
        );
    }

    #[test]
    fn test_key_ctrl_s_submits_forms_only() {
        assert_eq!(
            key_to_action(
                KeyCode::Char('s'),
                KeyModifiers::CONTROL,
                Screen::Support,
                Focus::TicketTitle
            ),
            Some(AppAction::Submit)
        );
        assert_eq!(
            key_to_action(
                KeyCode::Char('s'),
                KeyModifiers::CONTROL,
                Screen::Admin,
                Focus::AdminTickets
            ),
            None
        );
    }

    #[test]
    fn test_key_admin_table_bindings() {
        assert_eq!(
            key_to_action(
                KeyCode::Char('j'),
                KeyModifiers::NONE,
                Screen::Admin,
                Focus::AdminTickets
            ),
            Some(AppAction::AdminDown)
        );
        assert_eq!(
            key_to_action(
                KeyCode::Right,
                KeyModifiers::NONE,
                Screen::Admin,
                Focus::AdminTickets
            ),
            Some(AppAction::AdminStatusForward)
        );
    }

    #[test]
    fn test_key_select_bindings() {
        assert_eq!(
            key_to_action(
                KeyCode::Char('j'),
                KeyModifiers::NONE,
                Screen::Passenger,
                Focus::RideTypeSelect
            ),
            Some(AppAction::SelectNext)
        );
        assert_eq!(
            key_to_action(
                KeyCode::Up,
                KeyModifiers::NONE,
                Screen::Support,
                Focus::TicketPriority
            ),
            Some(AppAction::SelectPrev)
        );
    }
}
