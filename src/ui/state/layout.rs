// SPDX-License-Identifier: MPL-2.0
//! Layout state machine
//!
//! The track is either panning (every wrapper in one row, draggable) or
//! focused on one wrapper (the rest dimmed behind it, not draggable).
//!
//! | From         | Event                     | To                   |
//! |--------------|---------------------------|----------------------|
//! | `Panning`    | `WrapperClicked(i)`       | `Focused(i)`         |
//! | `Focused(i)` | `Navigate(Next)`          | `Focused((i+1) % n)` |
//! | `Focused(i)` | `Navigate(Previous)`      | `Focused((i+n-1) % n)` |
//! | `Focused(_)` | `ReturnToPanning` (opt-in)| `Panning`            |
//!
//! Every other pair leaves the mode unchanged.

/// Marker carried by each wrapper. Exactly one applies at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutClass {
    /// Part of the draggable row.
    Panning,
    /// The single enlarged wrapper.
    Focused,
    /// Dimmed behind the focused wrapper.
    Background,
}

/// Which half of the viewport a navigation click hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

impl Direction {
    /// Right half goes forward, everything else goes back.
    #[must_use]
    pub fn from_click(x: f32, viewport_width: f32) -> Self {
        if x > viewport_width / 2.0 {
            Direction::Next
        } else {
            Direction::Previous
        }
    }

    /// Steps `index` one place in this direction, wrapping around `len`.
    #[must_use]
    pub fn step(self, index: usize, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        match self {
            Direction::Next => (index + 1) % len,
            Direction::Previous => (index + len - 1) % len,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutEvent {
    WrapperClicked(usize),
    Navigate(Direction),
    ReturnToPanning,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutMode {
    #[default]
    Panning,
    Focused(usize),
}

impl LayoutMode {
    #[must_use]
    pub fn is_panning(self) -> bool {
        matches!(self, LayoutMode::Panning)
    }

    #[must_use]
    pub fn focused_index(self) -> Option<usize> {
        match self {
            LayoutMode::Focused(index) => Some(index),
            LayoutMode::Panning => None,
        }
    }

    /// Class wrapper `index` carries in this mode.
    #[must_use]
    pub fn class_of(self, index: usize) -> LayoutClass {
        match self {
            LayoutMode::Panning => LayoutClass::Panning,
            LayoutMode::Focused(focused) if focused == index => LayoutClass::Focused,
            LayoutMode::Focused(_) => LayoutClass::Background,
        }
    }

    /// Applies the transition table to `len` wrappers.
    ///
    /// Returns `None` when the event does not change the mode.
    #[must_use]
    pub fn transition(
        self,
        event: LayoutEvent,
        len: usize,
        allow_return: bool,
    ) -> Option<LayoutMode> {
        match (self, event) {
            (LayoutMode::Panning, LayoutEvent::WrapperClicked(index)) if index < len => {
                Some(LayoutMode::Focused(index))
            }
            (LayoutMode::Focused(index), LayoutEvent::Navigate(direction)) => {
                let next = direction.step(index, len);
                (next != index).then_some(LayoutMode::Focused(next))
            }
            (LayoutMode::Focused(_), LayoutEvent::ReturnToPanning) if allow_return => {
                Some(LayoutMode::Panning)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn click_side_picks_direction() {
        assert_eq!(Direction::from_click(700.0, 1000.0), Direction::Next);
        assert_eq!(Direction::from_click(300.0, 1000.0), Direction::Previous);
        assert_eq!(Direction::from_click(500.0, 1000.0), Direction::Previous);
    }

    #[test]
    fn step_wraps_both_ways() {
        assert_eq!(Direction::Next.step(4, 5), 0);
        assert_eq!(Direction::Previous.step(0, 5), 4);
        assert_eq!(Direction::Next.step(0, 5), 1);
        assert_eq!(Direction::Previous.step(0, 0), 0);
    }

    #[test]
    fn clicking_in_panning_focuses_the_wrapper() {
        let mode = LayoutMode::Panning.transition(LayoutEvent::WrapperClicked(2), 5, false);
        assert_eq!(mode, Some(LayoutMode::Focused(2)));
    }

    #[test]
    fn clicking_unknown_wrapper_is_ignored() {
        let mode = LayoutMode::Panning.transition(LayoutEvent::WrapperClicked(9), 5, false);
        assert_eq!(mode, None);
    }

    #[test]
    fn navigation_walks_circularly() {
        let mode = LayoutMode::Focused(0);
        let right = mode.transition(LayoutEvent::Navigate(Direction::Next), 5, false);
        assert_eq!(right, Some(LayoutMode::Focused(1)));

        let back = LayoutMode::Focused(1).transition(
            LayoutEvent::Navigate(Direction::Previous),
            5,
            false,
        );
        assert_eq!(back, Some(LayoutMode::Focused(0)));

        let wrap = mode.transition(LayoutEvent::Navigate(Direction::Previous), 5, false);
        assert_eq!(wrap, Some(LayoutMode::Focused(4)));
    }

    #[test]
    fn navigation_with_single_wrapper_is_a_no_op() {
        let mode = LayoutMode::Focused(0);
        assert_eq!(
            mode.transition(LayoutEvent::Navigate(Direction::Next), 1, false),
            None
        );
    }

    #[test]
    fn panning_ignores_navigation_and_return() {
        let mode = LayoutMode::Panning;
        assert_eq!(
            mode.transition(LayoutEvent::Navigate(Direction::Next), 5, true),
            None
        );
        assert_eq!(mode.transition(LayoutEvent::ReturnToPanning, 5, true), None);
    }

    #[test]
    fn focused_ignores_wrapper_clicks() {
        let mode = LayoutMode::Focused(3);
        assert_eq!(mode.transition(LayoutEvent::WrapperClicked(1), 5, true), None);
    }

    #[test]
    fn return_to_panning_requires_opt_in() {
        let mode = LayoutMode::Focused(3);
        assert_eq!(mode.transition(LayoutEvent::ReturnToPanning, 5, false), None);
        assert_eq!(
            mode.transition(LayoutEvent::ReturnToPanning, 5, true),
            Some(LayoutMode::Panning)
        );
    }

    #[test]
    fn classes_follow_mode() {
        assert_eq!(LayoutMode::Panning.class_of(0), LayoutClass::Panning);
        assert_eq!(LayoutMode::Focused(1).class_of(1), LayoutClass::Focused);
        assert_eq!(LayoutMode::Focused(1).class_of(0), LayoutClass::Background);
    }
}
