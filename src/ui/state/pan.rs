// SPDX-License-Identifier: MPL-2.0
//! Pan state management
//!
//! The track position is a percentage of the scrollable distance:
//! `0` shows the first wrapper at the viewport centre, `-100` the last.

pub use crate::config::MAX_PERCENTAGE;

/// Track position, guaranteed to be within `[-100, 0]`.
///
/// This type ensures that pan values are always valid, eliminating
/// the need for manual clamping at usage sites.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PanPercent(f32);

impl PanPercent {
    /// Creates a new pan percentage, clamping the value to the valid range.
    ///
    /// NaN clamps to `0`.
    #[must_use]
    pub fn new(percent: f32) -> Self {
        if percent.is_nan() {
            return Self(0.0);
        }
        Self(percent.clamp(-MAX_PERCENTAGE, 0.0))
    }

    /// Returns the raw percentage value.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns the position as a fraction of the scrollable distance (`-1.0..=0.0`).
    #[must_use]
    pub fn as_fraction(self) -> f32 {
        self.0 / MAX_PERCENTAGE
    }

    /// Moves by `delta` percentage points, clamping the result.
    #[must_use]
    pub fn offset_by(self, delta: f32) -> Self {
        Self::new(self.0 + delta)
    }

    #[must_use]
    pub fn is_start(self) -> bool {
        self.0 >= 0.0
    }

    #[must_use]
    pub fn is_end(self) -> bool {
        self.0 <= -MAX_PERCENTAGE
    }
}

/// Committed and live pan positions.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PanState {
    /// Position the track is shown at.
    pub current: PanPercent,

    /// Position committed at the end of the last drag; drags are relative to it.
    pub previous: PanPercent,
}

impl PanState {
    /// Makes the live position the base for the next drag.
    pub fn commit(&mut self) {
        self.previous = self.current;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_to_range() {
        assert_eq!(PanPercent::new(25.0).value(), 0.0);
        assert_eq!(PanPercent::new(-250.0).value(), -100.0);
        assert_eq!(PanPercent::new(-42.5).value(), -42.5);
        assert_eq!(PanPercent::new(f32::NAN).value(), 0.0);
    }

    #[test]
    fn offset_by_stays_in_range() {
        let pan = PanPercent::new(-90.0);
        assert_eq!(pan.offset_by(-30.0).value(), -100.0);
        assert!(pan.offset_by(-30.0).is_end());
        assert!(pan.offset_by(500.0).is_start());
    }

    #[test]
    fn fraction_maps_percent_to_unit_range() {
        assert_eq!(PanPercent::new(-50.0).as_fraction(), -0.5);
        assert_eq!(PanPercent::default().as_fraction(), 0.0);
    }

    #[test]
    fn commit_copies_current_into_previous() {
        let mut pan = PanState {
            current: PanPercent::new(-30.0),
            ..PanState::default()
        };
        pan.commit();
        assert_eq!(pan.previous.value(), -30.0);
    }
}
