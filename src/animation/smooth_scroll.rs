// SPDX-License-Identifier: MPL-2.0
//! Wheel smoothing with exponential ease-out.
//!
//! Wheel deltas accumulate into a pending distance. Each frame releases a
//! fixed fraction of what is left, so a single notch turns into a short
//! decelerating glide instead of a jump.

use crate::config::SmoothScrollConfig;

/// Residual distance (in pixels) below which the glide settles.
const SETTLE_THRESHOLD_PX: f32 = 0.1;

/// Frame rate the lerp factor is expressed against.
const REFERENCE_FPS: f32 = 60.0;

#[derive(Debug, Clone)]
pub struct SmoothScroll {
    pending: f32,
    lerp: f32,
    enabled: bool,
}

impl SmoothScroll {
    #[must_use]
    pub fn new(config: SmoothScrollConfig) -> Self {
        Self {
            pending: 0.0,
            lerp: config.lerp.clamp(0.0, 1.0),
            enabled: config.enabled,
        }
    }

    /// Feeds a wheel delta.
    ///
    /// When smoothing is disabled the delta is handed straight back to be
    /// applied immediately.
    pub fn push(&mut self, delta: f32) -> Option<f32> {
        if !self.enabled {
            return Some(delta);
        }
        self.pending += delta;
        None
    }

    /// Releases this frame's share of the pending distance. Call once per frame.
    pub fn tick(&mut self, dt: f32) -> f32 {
        if self.pending == 0.0 {
            return 0.0;
        }

        let factor = 1.0 - (1.0 - self.lerp).powf(dt.max(0.0) * REFERENCE_FPS);
        let mut step = self.pending * factor;
        if (self.pending - step).abs() < SETTLE_THRESHOLD_PX {
            step = self.pending;
        }
        self.pending -= step;
        step
    }

    /// Drops any glide in progress.
    pub fn stop(&mut self) {
        self.pending = 0.0;
    }

    /// True while distance is still waiting to be released.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.pending != 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn smooth(lerp: f32) -> SmoothScroll {
        SmoothScroll::new(SmoothScrollConfig {
            enabled: true,
            lerp,
        })
    }

    #[test]
    fn disabled_passes_delta_through() {
        let mut scroll = SmoothScroll::new(SmoothScrollConfig {
            enabled: false,
            lerp: 0.1,
        });
        assert_eq!(scroll.push(120.0), Some(120.0));
        assert!(!scroll.is_animating());
    }

    #[test]
    fn glide_releases_whole_distance() {
        let mut scroll = smooth(0.1);
        assert_eq!(scroll.push(100.0), None);
        assert!(scroll.is_animating());

        let mut released = 0.0;
        for _ in 0..200 {
            released += scroll.tick(1.0 / 60.0);
        }

        assert!((released - 100.0).abs() < 1e-3);
        assert!(!scroll.is_animating());
    }

    #[test]
    fn first_frame_releases_lerp_fraction() {
        let mut scroll = smooth(0.25);
        scroll.push(100.0);
        let step = scroll.tick(1.0 / 60.0);
        assert!((step - 25.0).abs() < 1e-3);
    }

    #[test]
    fn lerp_of_one_releases_everything_at_once() {
        let mut scroll = smooth(1.0);
        scroll.push(-40.0);
        assert_eq!(scroll.tick(1.0 / 60.0), -40.0);
        assert!(!scroll.is_animating());
    }

    #[test]
    fn stop_discards_pending_distance() {
        let mut scroll = smooth(0.1);
        scroll.push(50.0);
        scroll.stop();
        assert_eq!(scroll.tick(1.0 / 60.0), 0.0);
    }
}
