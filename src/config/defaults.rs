// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Track**: Pan sensitivity, tween durations and the drag threshold
//! - **Layout**: Wrapper sizing in viewport-min units
//! - **Smooth Scroll**: Wheel smoothing factor

// ==========================================================================
// Track Defaults
// ==========================================================================

/// Percentage step multiplier applied to wheel deltas.
pub const DEFAULT_SCROLL_SENSITIVITY: f32 = 30.0;

/// Minimum allowed scroll sensitivity.
pub const MIN_SCROLL_SENSITIVITY: f32 = 1.0;

/// Maximum allowed scroll sensitivity.
pub const MAX_SCROLL_SENSITIVITY: f32 = 200.0;

/// Duration of the pan tween (in seconds).
pub const DEFAULT_ANIMATION_DURATION_SECS: f32 = 0.5;

/// Duration of the layout snapshot transition (in seconds).
pub const DEFAULT_FLIP_DURATION_SECS: f32 = 0.8;

/// Upper bound for any configurable tween duration (in seconds).
pub const MAX_ANIMATION_DURATION_SECS: f32 = 5.0;

/// Magnitude of the percentage range; the track lives in `[-MAX, 0]`.
pub const MAX_PERCENTAGE: f32 = 100.0;

/// Pointer travel (in pixels) above which a press becomes a drag.
pub const DEFAULT_DRAG_THRESHOLD_PX: f32 = 5.0;

/// Delay between consecutive background wrappers in a staggered flip.
pub const DEFAULT_STAGGER_EACH_SECS: f32 = 0.03;

/// Pixels reported by one wheel notch when the platform reports lines.
pub const WHEEL_LINE_HEIGHT_PX: f32 = 100.0;

// ==========================================================================
// Layout Defaults
// ==========================================================================

/// Wrapper width in the panning layout (1 vmin = 1% of the smaller viewport side).
pub const DEFAULT_WRAPPER_WIDTH_VMIN: f32 = 40.0;

/// Wrapper height in the panning layout.
pub const DEFAULT_WRAPPER_HEIGHT_VMIN: f32 = 56.0;

/// Horizontal gap between wrappers in the panning layout.
pub const DEFAULT_GAP_VMIN: f32 = 4.0;

/// Smallest wrapper dimension accepted from the config file.
pub const MIN_WRAPPER_VMIN: f32 = 5.0;

/// Largest wrapper dimension accepted from the config file.
pub const MAX_WRAPPER_VMIN: f32 = 100.0;

/// Opacity of wrappers dimmed behind the focused image.
pub const BACKGROUND_OPACITY: f32 = 0.45;

// ==========================================================================
// Smooth Scroll Defaults
// ==========================================================================

/// Fraction of the remaining wheel distance released per 60 Hz frame.
pub const DEFAULT_SMOOTH_SCROLL_LERP: f32 = 0.1;

/// Minimum smoothing factor.
pub const MIN_SMOOTH_SCROLL_LERP: f32 = 0.01;

/// Maximum smoothing factor (1.0 releases the whole delta at once).
pub const MAX_SMOOTH_SCROLL_LERP: f32 = 1.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_SCROLL_SENSITIVITY > 0.0);
    assert!(DEFAULT_SCROLL_SENSITIVITY >= MIN_SCROLL_SENSITIVITY);
    assert!(DEFAULT_SCROLL_SENSITIVITY <= MAX_SCROLL_SENSITIVITY);

    assert!(DEFAULT_ANIMATION_DURATION_SECS > 0.0);
    assert!(DEFAULT_FLIP_DURATION_SECS > 0.0);
    assert!(DEFAULT_FLIP_DURATION_SECS <= MAX_ANIMATION_DURATION_SECS);

    assert!(DEFAULT_WRAPPER_WIDTH_VMIN >= MIN_WRAPPER_VMIN);
    assert!(DEFAULT_WRAPPER_HEIGHT_VMIN <= MAX_WRAPPER_VMIN);

    assert!(DEFAULT_SMOOTH_SCROLL_LERP >= MIN_SMOOTH_SCROLL_LERP);
    assert!(DEFAULT_SMOOTH_SCROLL_LERP <= MAX_SMOOTH_SCROLL_LERP);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn track_defaults_are_valid() {
        assert_eq!(DEFAULT_SCROLL_SENSITIVITY, 30.0);
        assert_eq!(DEFAULT_ANIMATION_DURATION_SECS, 0.5);
        assert_eq!(DEFAULT_FLIP_DURATION_SECS, 0.8);
        assert_eq!(MAX_PERCENTAGE, 100.0);
        assert_eq!(DEFAULT_DRAG_THRESHOLD_PX, 5.0);
    }

    #[test]
    fn layout_defaults_are_valid() {
        assert!(DEFAULT_WRAPPER_HEIGHT_VMIN > DEFAULT_WRAPPER_WIDTH_VMIN);
        assert!(DEFAULT_GAP_VMIN < DEFAULT_WRAPPER_WIDTH_VMIN);
        assert!(BACKGROUND_OPACITY > 0.0 && BACKGROUND_OPACITY < 1.0);
    }

    #[test]
    fn smooth_scroll_defaults_are_valid() {
        assert!(DEFAULT_SMOOTH_SCROLL_LERP >= MIN_SMOOTH_SCROLL_LERP);
        assert!(DEFAULT_SMOOTH_SCROLL_LERP <= MAX_SMOOTH_SCROLL_LERP);
    }
}
