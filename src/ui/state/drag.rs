// SPDX-License-Identifier: MPL-2.0
//! Drag state management
//!
//! Handles the press-and-drag interaction used to pan the track, and tells
//! drags apart from clicks.

/// Manages grab-and-drag state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DragState {
    /// Pointer x where the press happened, `None` when no button or finger is down
    pub anchor_x: Option<f32>,

    /// Whether the pointer has travelled past the drag threshold since the press
    pub is_dragging: bool,
}

impl DragState {
    /// Records the press position. A press never starts out as a drag.
    pub fn start(&mut self, x: f32) {
        self.anchor_x = Some(x);
        self.is_dragging = false;
    }

    /// Clears the press.
    pub fn stop(&mut self) {
        self.anchor_x = None;
        self.is_dragging = false;
    }

    /// Whether a press is in progress.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.anchor_x.is_some()
    }

    /// Returns `anchor - x` and marks the press as a drag once the
    /// distance exceeds `threshold`.
    ///
    /// Returns `None` when no press is in progress.
    pub fn track(&mut self, x: f32, threshold: f32) -> Option<f32> {
        let delta = self.anchor_x? - x;
        if delta.abs() > threshold {
            self.is_dragging = true;
        }
        Some(delta)
    }
}
