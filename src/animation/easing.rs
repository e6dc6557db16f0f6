// SPDX-License-Identifier: MPL-2.0
//! Easing curves for tweens.

/// Maps linear progress `t` in `[0, 1]` onto an eased progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    Power2In,
    /// Quadratic deceleration, the curve used for every track motion.
    #[default]
    Power2Out,
    Power2InOut,
}

impl Easing {
    /// Applies the curve. Input outside `[0, 1]` is clamped.
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::Power2In => t * t,
            Easing::Power2Out => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::Power2InOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - 2.0 * (1.0 - t) * (1.0 - t)
                }
            }
        }
    }
}
