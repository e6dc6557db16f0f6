// SPDX-License-Identifier: MPL-2.0
//! The concrete animation engine behind the track.

use super::flip::{FlipOptions, FlipTransition, Snapshot, Visual};
use super::tween::{Tween, TweenSpec};
use super::Animator;

/// Centre alignment of an image inside its wrapper, in percent.
pub const CENTERED_OBJECT_POSITION: f32 = 50.0;

#[derive(Debug, Clone)]
struct Element {
    layout: Visual,
    translate_x: Tween,
    object_position: Tween,
    flip: Option<FlipTransition>,
}

impl Element {
    fn new() -> Self {
        Self {
            layout: Visual::default(),
            translate_x: Tween::at_rest(0.0),
            object_position: Tween::at_rest(CENTERED_OBJECT_POSITION),
            flip: None,
        }
    }
}

/// Per-wrapper animation state and the clock that drives it.
#[derive(Debug, Clone)]
pub struct Stage {
    elements: Vec<Element>,
    now: f32,
}

impl Stage {
    /// Creates a stage for `count` wrappers, all at rest.
    #[must_use]
    pub fn new(count: usize) -> Self {
        Self {
            elements: (0..count).map(|_| Element::new()).collect(),
            now: 0.0,
        }
    }

    /// Advances the clock by `dt` seconds and drops finished flips.
    pub fn tick(&mut self, dt: f32) {
        self.now += dt.max(0.0);
        let now = self.now;
        for element in &mut self.elements {
            if let Some(flip) = element.flip {
                if !flip.is_active(now) {
                    element.flip = None;
                }
            }
        }
    }

    /// Current clock time in seconds.
    #[must_use]
    pub fn now(&self) -> f32 {
        self.now
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Whether any tween or flip still moves after the current clock time.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        let now = self.now;
        self.elements.iter().any(|element| {
            element.translate_x.is_active(now)
                || element.object_position.is_active(now)
                || element.flip.is_some_and(|flip| flip.is_active(now))
        })
    }

    /// Horizontal pan offset currently applied to a wrapper.
    #[must_use]
    pub fn translate_x(&self, target: usize) -> Option<f32> {
        self.elements
            .get(target)
            .map(|element| element.translate_x.value_at(self.now))
    }

    /// Horizontal object position of a wrapper's image, in percent.
    #[must_use]
    pub fn object_position(&self, target: usize) -> Option<f32> {
        self.elements
            .get(target)
            .map(|element| element.object_position.value_at(self.now))
    }

    /// Visual the wrapper is heading to once every motion settles.
    #[must_use]
    pub fn resting_visual(&self, target: usize) -> Option<Visual> {
        self.elements
            .get(target)
            .map(|element| element.layout.translated_x(element.translate_x.target()))
    }
}

impl Animator for Stage {
    fn place(&mut self, target: usize, visual: Visual) {
        if let Some(element) = self.elements.get_mut(target) {
            element.layout = visual;
            element.flip = None;
        }
    }

    fn tween_translate_x(&mut self, target: usize, value: f32, tween: TweenSpec) {
        let now = self.now;
        if let Some(element) = self.elements.get_mut(target) {
            element.translate_x.retarget(value, tween, now);
        }
    }

    fn set_translate_x(&mut self, target: usize, value: f32) {
        if let Some(element) = self.elements.get_mut(target) {
            element.translate_x.set(value);
        }
    }

    fn tween_object_position(&mut self, target: usize, percent: f32, tween: TweenSpec) {
        let now = self.now;
        if let Some(element) = self.elements.get_mut(target) {
            element.object_position.retarget(percent, tween, now);
        }
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot::new(
            (0..self.elements.len())
                .filter_map(|index| self.visual(index))
                .collect(),
        )
    }

    fn flip_from(&mut self, snapshot: &Snapshot, targets: &[(usize, Visual)], options: &FlipOptions) {
        let now = self.now;
        let delays = options.delays(targets);

        for (&(target, to), delay) in targets.iter().zip(delays) {
            let Some(element) = self.elements.get_mut(target) else {
                continue;
            };
            element.layout = to;
            // Offsets are folded into the captured visual, so the flip lands on the bare layout
            let from = snapshot
                .get(target)
                .map(|captured| captured.translated_x(-element.translate_x.value_at(now)))
                .unwrap_or(to);
            element.flip = Some(FlipTransition::new(
                from,
                to,
                now + delay,
                options.duration,
                options.easing,
            ));
        }
    }

    fn visual(&self, target: usize) -> Option<Visual> {
        let element = self.elements.get(target)?;
        let base = match element.flip {
            Some(flip) => flip.visual_at(self.now),
            None => element.layout,
        };
        Some(base.translated_x(element.translate_x.value_at(self.now)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::easing::Easing;
    use iced::{Point, Rectangle, Size};

    fn visual(x: f32, opacity: f32) -> Visual {
        Visual::new(
            Rectangle::new(Point::new(x, 0.0), Size::new(10.0, 10.0)),
            opacity,
        )
    }

    fn linear(duration: f32) -> TweenSpec {
        TweenSpec::new(duration, Easing::Linear)
    }

    #[test]
    fn new_stage_is_at_rest() {
        let stage = Stage::new(3);
        assert_eq!(stage.len(), 3);
        assert!(!stage.is_animating());
        assert_eq!(stage.object_position(0), Some(CENTERED_OBJECT_POSITION));
        assert_eq!(stage.translate_x(2), Some(0.0));
        assert_eq!(stage.translate_x(3), None);
    }

    #[test]
    fn visual_includes_translation() {
        let mut stage = Stage::new(1);
        stage.place(0, visual(100.0, 1.0));
        stage.tween_translate_x(0, -40.0, linear(1.0));

        assert!(stage.is_animating());
        stage.tick(0.5);
        let mid = stage.visual(0).expect("wrapper exists");
        assert!((mid.bounds.x - 80.0).abs() < 1e-4);

        stage.tick(0.5);
        assert_eq!(stage.visual(0).map(|v| v.bounds.x), Some(60.0));
        assert!(!stage.is_animating());
    }

    #[test]
    fn flip_animates_from_snapshot_to_new_layout() {
        let mut stage = Stage::new(1);
        stage.place(0, visual(0.0, 1.0));
        let snapshot = stage.snapshot();

        stage.flip_from(
            &snapshot,
            &[(0, visual(100.0, 0.5))],
            &FlipOptions::new(1.0, Easing::Linear),
        );

        assert_eq!(stage.visual(0), Some(visual(0.0, 1.0)));
        stage.tick(0.5);
        let mid = stage.visual(0).expect("wrapper exists");
        assert!((mid.bounds.x - 50.0).abs() < 1e-4);
        assert!((mid.opacity - 0.75).abs() < 1e-4);

        stage.tick(0.5);
        assert_eq!(stage.visual(0), Some(visual(100.0, 0.5)));
        assert!(!stage.is_animating());
    }

    #[test]
    fn flip_after_offset_reset_starts_where_wrapper_was_drawn() {
        let mut stage = Stage::new(1);
        stage.place(0, visual(500.0, 1.0));
        stage.set_translate_x(0, -200.0);

        let snapshot = stage.snapshot();
        stage.set_translate_x(0, 0.0);
        stage.flip_from(
            &snapshot,
            &[(0, visual(50.0, 1.0))],
            &FlipOptions::new(1.0, Easing::Linear),
        );

        assert_eq!(stage.visual(0).map(|v| v.bounds.x), Some(300.0));
        stage.tick(1.0);
        assert_eq!(stage.visual(0).map(|v| v.bounds.x), Some(50.0));
    }

    #[test]
    fn place_cancels_running_flip() {
        let mut stage = Stage::new(1);
        let snapshot = stage.snapshot();
        stage.flip_from(
            &snapshot,
            &[(0, visual(100.0, 1.0))],
            &FlipOptions::new(1.0, Easing::Linear),
        );
        stage.place(0, visual(10.0, 1.0));

        assert_eq!(stage.visual(0), Some(visual(10.0, 1.0)));
        assert!(!stage.is_animating());
    }

    #[test]
    fn out_of_range_targets_are_ignored() {
        let mut stage = Stage::new(1);
        stage.tween_translate_x(5, 10.0, linear(1.0));
        stage.place(5, visual(1.0, 1.0));
        assert!(stage.visual(5).is_none());
        assert!(!stage.is_animating());
    }
}
