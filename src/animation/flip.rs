// SPDX-License-Identifier: MPL-2.0
//! Snapshot transitions.
//!
//! A [`Snapshot`] records where every wrapper is drawn right now. After the
//! layout classes change, each target is animated from its captured visual
//! to its new resting visual, optionally staggered along an axis.

use super::easing::Easing;
use iced::{Point, Rectangle, Size};

/// What a wrapper looks like on screen: its bounds and opacity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Visual {
    pub bounds: Rectangle,
    pub opacity: f32,
}

impl Visual {
    #[must_use]
    pub fn new(bounds: Rectangle, opacity: f32) -> Self {
        Self { bounds, opacity }
    }

    /// Interpolates every component by `t` in `[0, 1]`.
    #[must_use]
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        let mix = |a: f32, b: f32| a + (b - a) * t;
        Self {
            bounds: Rectangle::new(
                Point::new(
                    mix(self.bounds.x, other.bounds.x),
                    mix(self.bounds.y, other.bounds.y),
                ),
                Size::new(
                    mix(self.bounds.width, other.bounds.width),
                    mix(self.bounds.height, other.bounds.height),
                ),
            ),
            opacity: mix(self.opacity, other.opacity),
        }
    }

    /// Shifts the bounds horizontally.
    #[must_use]
    pub fn translated_x(mut self, dx: f32) -> Self {
        self.bounds.x += dx;
        self
    }
}

impl Default for Visual {
    fn default() -> Self {
        Self {
            bounds: Rectangle::new(Point::ORIGIN, Size::ZERO),
            opacity: 1.0,
        }
    }
}

/// Captured visuals, indexed by wrapper.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Snapshot {
    visuals: Vec<Visual>,
}

impl Snapshot {
    #[must_use]
    pub fn new(visuals: Vec<Visual>) -> Self {
        Self { visuals }
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<Visual> {
        self.visuals.get(index).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.visuals.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.visuals.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StaggerFrom {
    #[default]
    Start,
    End,
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Axis {
    #[default]
    X,
    Y,
}

/// Offsets the start of each target by `each` seconds, in axis order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stagger {
    pub each: f32,
    pub from: StaggerFrom,
    pub axis: Axis,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlipOptions {
    pub duration: f32,
    pub easing: Easing,
    pub stagger: Option<Stagger>,
}

impl FlipOptions {
    #[must_use]
    pub fn new(duration: f32, easing: Easing) -> Self {
        Self {
            duration,
            easing,
            stagger: None,
        }
    }

    #[must_use]
    pub fn staggered(mut self, stagger: Stagger) -> Self {
        self.stagger = Some(stagger);
        self
    }

    /// Start delay for each entry of `targets`, in the same order.
    ///
    /// Targets are ranked by their final position along the stagger axis.
    #[must_use]
    pub fn delays(&self, targets: &[(usize, Visual)]) -> Vec<f32> {
        let Some(stagger) = self.stagger else {
            return vec![0.0; targets.len()];
        };

        let position = |visual: &Visual| match stagger.axis {
            Axis::X => visual.bounds.x,
            Axis::Y => visual.bounds.y,
        };

        let mut order: Vec<usize> = (0..targets.len()).collect();
        order.sort_by(|&a, &b| position(&targets[a].1).total_cmp(&position(&targets[b].1)));

        let count = targets.len();
        let mut delays = vec![0.0; count];
        for (rank, &slot) in order.iter().enumerate() {
            let steps = match stagger.from {
                StaggerFrom::Start => rank as f32,
                StaggerFrom::End => (count - 1 - rank) as f32,
                StaggerFrom::Center => (rank as f32 - (count - 1) as f32 / 2.0).abs(),
            };
            delays[slot] = steps * stagger.each;
        }
        delays
    }
}

/// One wrapper moving from a captured visual to its new resting visual.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlipTransition {
    from: Visual,
    to: Visual,
    start: f32,
    duration: f32,
    easing: Easing,
}

impl FlipTransition {
    #[must_use]
    pub fn new(from: Visual, to: Visual, start: f32, duration: f32, easing: Easing) -> Self {
        Self {
            from,
            to,
            start,
            duration,
            easing,
        }
    }

    #[must_use]
    pub fn visual_at(&self, now: f32) -> Visual {
        if self.duration <= 0.0 || now >= self.start + self.duration {
            return self.to;
        }
        if now <= self.start {
            return self.from;
        }
        let progress = (now - self.start) / self.duration;
        self.from.lerp(&self.to, self.easing.apply(progress))
    }

    #[must_use]
    pub fn is_active(&self, now: f32) -> bool {
        self.duration > 0.0 && now < self.start + self.duration
    }
}
