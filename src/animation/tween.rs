// SPDX-License-Identifier: MPL-2.0
//! Scalar tweens driven by the stage clock.

use super::easing::Easing;

/// Timing of a single tween command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TweenSpec {
    /// Seconds from start to end of the motion.
    pub duration: f32,
    pub easing: Easing,
    /// Seconds to wait before the motion starts.
    pub delay: f32,
}

impl TweenSpec {
    #[must_use]
    pub fn new(duration: f32, easing: Easing) -> Self {
        Self {
            duration,
            easing,
            delay: 0.0,
        }
    }

    #[must_use]
    pub fn with_delay(mut self, delay: f32) -> Self {
        self.delay = delay;
        self
    }
}

/// A value moving from `from` to `to` over a window of clock time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    from: f32,
    to: f32,
    start: f32,
    duration: f32,
    easing: Easing,
}

impl Tween {
    /// A tween that holds `value` forever.
    #[must_use]
    pub fn at_rest(value: f32) -> Self {
        Self {
            from: value,
            to: value,
            start: 0.0,
            duration: 0.0,
            easing: Easing::Linear,
        }
    }

    /// Interpolated value at clock time `now`.
    #[must_use]
    pub fn value_at(&self, now: f32) -> f32 {
        if self.duration <= 0.0 || now >= self.start + self.duration {
            return self.to;
        }
        if now <= self.start {
            return self.from;
        }
        let progress = (now - self.start) / self.duration;
        self.from + (self.to - self.from) * self.easing.apply(progress)
    }

    /// Value the tween settles on.
    #[must_use]
    pub fn target(&self) -> f32 {
        self.to
    }

    /// Redirects the tween toward `to`, continuing from wherever it is at `now`.
    pub fn retarget(&mut self, to: f32, timing: TweenSpec, now: f32) {
        self.from = self.value_at(now);
        self.to = to;
        self.start = now + timing.delay.max(0.0);
        self.duration = timing.duration.max(0.0);
        self.easing = timing.easing;
    }

    /// Jumps to `value`, cancelling any motion in flight.
    pub fn set(&mut self, value: f32) {
        *self = Self::at_rest(value);
    }

    /// Whether the value still changes after `now`.
    #[must_use]
    pub fn is_active(&self, now: f32) -> bool {
        self.duration > 0.0 && now < self.start + self.duration && self.from != self.to
    }
}
