//! Root app component
//!
//! Owns the single `AppState`, routes keyboard events through
//! `key_to_action` and `reduce`, and schedules the reducer's timed
//! effects on the tokio runtime. Late timer firings carry stale tokens
//! and reduce to no-ops.

use iocraft::prelude::*;

use crate::tui::components::{
    Footer, Header, NotificationBanner, admin_shortcuts, form_shortcuts, search_shortcuts,
    select_shortcuts, tab_shortcuts,
};
use crate::tui::model::{AppState, Effect, Focus, key_to_action, reduce};
use crate::tui::screens::{AdminScreen, PassengerScreen, SupportScreen};
use crate::tui::theme::theme;
use crate::types::Screen;

/// Props for the TmuberApp component
#[derive(Default, Props)]
pub struct TmuberAppProps {
    /// Screen to show on startup
    pub initial_screen: Screen,
}

/// Top-level component: header, active screen, notification banner, footer
#[component]
pub fn TmuberApp<'a>(props: &TmuberAppProps, mut hooks: Hooks) -> impl Into<AnyElement<'a>> {
    let (width, height) = hooks.use_terminal_size();
    let mut system = hooks.use_context_mut::<SystemContext>();

    let initial_screen = props.initial_screen;
    let mut state: State<AppState> = hooks.use_state(move || {
        let mut state = AppState::new();
        state.screen = initial_screen;
        state
    });

    // Each invocation runs its own timer loop: sleep until the earliest
    // deadline, feed the completion back through the reducer, and pick up
    // any follow-up effects it produces.
    let run_effects: Handler<Vec<Effect>> = hooks.use_async_handler(move |effects: Vec<Effect>| {
        async move {
            let now = tokio::time::Instant::now();
            let mut pending: Vec<(tokio::time::Instant, Effect)> = effects
                .into_iter()
                .map(|e| (now + e.delay(), e))
                .collect();

            while !pending.is_empty() {
                pending.sort_by_key(|(at, _)| *at);
                let (at, effect) = pending.remove(0);
                tokio::time::sleep_until(at).await;

                let (next, more) = reduce(state.read().clone(), effect.into_action());
                state.set(next);

                let now = tokio::time::Instant::now();
                pending.extend(more.into_iter().map(|e| (now + e.delay(), e)));
            }
        }
    });

    hooks.use_terminal_events({
        let run_effects = run_effects.clone();
        move |event| match event {
            TerminalEvent::Key(KeyEvent {
                code,
                kind,
                modifiers,
                ..
            }) if kind != KeyEventKind::Release => {
                let (screen, focus) = {
                    let s = state.read();
                    (s.screen, s.focus)
                };
                if let Some(action) = key_to_action(code, modifiers, screen, focus) {
                    let (next, effects) = reduce(state.read().clone(), action);
                    state.set(next);
                    if !effects.is_empty() {
                        run_effects.clone()(effects);
                    }
                }
            }
            _ => {}
        }
    });

    if state.read().should_exit {
        system.exit();
    }

    let theme = theme();
    let snapshot = state.read().clone();
    let notification = snapshot.notifications.current().cloned();

    let shortcuts = match snapshot.focus {
        Focus::Tabs => tab_shortcuts(),
        Focus::SearchQuery => search_shortcuts(),
        Focus::AdminTickets => admin_shortcuts(),
        f if f.is_select() => select_shortcuts(),
        _ => form_shortcuts(),
    };

    element! {
        View(
            width,
            height,
            flex_direction: FlexDirection::Column,
            background_color: theme.background,
        ) {
            Header(
                active: snapshot.screen,
                has_focus: snapshot.focus == Focus::Tabs,
                ticket_count: Some(snapshot.store.len()),
            )

            #(Some(match snapshot.screen {
                Screen::Passenger => element! {
                    PassengerScreen(
                        booking: snapshot.booking.clone(),
                        searching: snapshot.driver_search.is_searching(),
                        rides: snapshot.rides.clone(),
                        focus: snapshot.focus,
                    )
                }.into_any(),
                Screen::Support => element! {
                    SupportScreen(
                        draft: snapshot.ticket_draft.clone(),
                        tickets: snapshot.filtered_tickets(),
                        filter: snapshot.status_filter,
                        query: snapshot.search_query.clone(),
                        focus: snapshot.focus,
                    )
                }.into_any(),
                Screen::Admin => element! {
                    AdminScreen(
                        stats: snapshot.stats.clone(),
                        tickets: snapshot.store.tickets().to_vec(),
                        selected: snapshot.admin_selected,
                        focus: snapshot.focus,
                    )
                }.into_any(),
            }))

            NotificationBanner(notification: notification)
            Footer(shortcuts: shortcuts)
        }
    }
}
