//! Open/closed state of the slide-out navigation menu.
//!
//! The state machine has exactly two transitions:
//!
//! | From   | Event                                                     | To     |
//! |--------|-----------------------------------------------------------|--------|
//! | Closed | toggle clicked                                            | Open   |
//! | Open   | close clicked, link clicked, backdrop clicked, Escape key | Closed |
//!
//! Every other (state, event) pair leaves the state alone and yields no
//! [`MenuEffect`], so repeated opens or closes never touch the page.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

/// User interactions the navigation menu reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    ToggleClicked,
    CloseClicked,
    /// A link inside the menu was followed.
    LinkClicked,
    /// A click landed on the menu container itself rather than its content.
    BackdropClicked,
    EscapePressed,
}

/// Page change required after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEffect {
    /// Mark the menu active and lock background scrolling.
    Opened,
    /// Clear the active mark and restore scrolling.
    Closed,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open)
    }

    /// Returns the state that follows `event`.
    pub fn next(
        self,
        event: MenuEvent,
    ) -> MenuState {
        match (self, event) {
            (Self::Closed, MenuEvent::ToggleClicked) => Self::Open,
            (
                Self::Open,
                MenuEvent::CloseClicked
                | MenuEvent::LinkClicked
                | MenuEvent::BackdropClicked
                | MenuEvent::EscapePressed,
            ) => Self::Closed,
            (state, _) => state,
        }
    }

    /// Advances the state in place and reports the effect to apply, if the
    /// state changed.
    pub fn apply(
        &mut self,
        event: MenuEvent,
    ) -> Option<MenuEffect> {
        let next = self.next(event);
        if next == *self {
            return None;
        }
        *self = next;
        Some(match next {
            Self::Open => MenuEffect::Opened,
            Self::Closed => MenuEffect::Closed,
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const CLOSING_EVENTS: [MenuEvent; 4] = [
        MenuEvent::CloseClicked,
        MenuEvent::LinkClicked,
        MenuEvent::BackdropClicked,
        MenuEvent::EscapePressed,
    ];

    #[test]
    fn starts_closed() {
        assert_eq!(MenuState::default(), MenuState::Closed);
    }

    #[test]
    fn toggle_opens_closed_menu() {
        let mut state = MenuState::Closed;

        assert_eq!(state.apply(MenuEvent::ToggleClicked), Some(MenuEffect::Opened));
        assert!(state.is_open());
    }

    #[test]
    fn every_closing_event_closes_open_menu() {
        for event in CLOSING_EVENTS {
            let mut state = MenuState::Open;

            assert_eq!(state.apply(event), Some(MenuEffect::Closed), "{event:?}");
            assert_eq!(state, MenuState::Closed);
        }
    }

    #[test]
    fn open_then_escape_returns_to_closed() {
        let mut state = MenuState::default();

        state.apply(MenuEvent::ToggleClicked);
        state.apply(MenuEvent::EscapePressed);

        assert_eq!(state, MenuState::Closed);
    }

    #[test]
    fn closing_a_closed_menu_has_no_effect() {
        for event in CLOSING_EVENTS {
            let mut state = MenuState::Closed;

            assert_eq!(state.apply(event), None, "{event:?}");
            assert_eq!(state, MenuState::Closed);
        }
    }

    #[test]
    fn toggle_on_open_menu_has_no_effect() {
        let mut state = MenuState::Open;

        assert_eq!(state.apply(MenuEvent::ToggleClicked), None);
        assert_eq!(state, MenuState::Open);
    }
}
