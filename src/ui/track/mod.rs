// SPDX-License-Identifier: MPL-2.0
//! The track controller.
//!
//! Turns pointer, wheel and click input into commands for an [`Animator`]:
//! panning the row while in [`LayoutMode::Panning`], and snapshot transitions
//! between layouts once a wrapper is focused.

pub mod geometry;

use crate::animation::{
    stage::CENTERED_OBJECT_POSITION, Animator, Axis, Easing, FlipOptions, Stagger, StaggerFrom,
    TweenSpec, Visual,
};
use crate::config::TrackConfig;
use crate::media::TrackImage;
use crate::ui::state::{
    Direction, DragState, LayoutClass, LayoutEvent, LayoutMode, PanPercent, PanState,
};
use iced::{Point, Size};

/// Everything the controller is built from. The image set is fixed for the
/// controller's lifetime.
#[derive(Debug, Clone)]
pub struct TrackContext {
    pub config: TrackConfig,
    pub images: Vec<TrackImage>,
    pub viewport: Size,
}

/// Mutable interaction state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrackState {
    pub drag: DragState,
    pub pan: PanState,
    /// Mirrors whether the animator still has motion in flight.
    pub is_animating: bool,
    pub layout: LayoutMode,
}

pub struct TrackController<A: Animator> {
    context: TrackContext,
    state: TrackState,
    total_width: f32,
    animator: A,
}

impl<A: Animator> TrackController<A> {
    /// Places every wrapper for the context's viewport.
    pub fn new(context: TrackContext, animator: A) -> Self {
        let viewport = context.viewport;
        let mut controller = Self {
            context,
            state: TrackState::default(),
            total_width: 0.0,
            animator,
        };
        controller.resize(viewport);
        controller
    }

    #[must_use]
    pub fn state(&self) -> &TrackState {
        &self.state
    }

    #[must_use]
    pub fn context(&self) -> &TrackContext {
        &self.context
    }

    #[must_use]
    pub fn images(&self) -> &[TrackImage] {
        &self.context.images
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.context.images.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.context.images.is_empty()
    }

    #[must_use]
    pub fn layout(&self) -> LayoutMode {
        self.state.layout
    }

    #[must_use]
    pub fn current_percentage(&self) -> PanPercent {
        self.state.pan.current
    }

    #[must_use]
    pub fn total_width(&self) -> f32 {
        self.total_width
    }

    /// Distance the row can travel: total width minus one viewport.
    #[must_use]
    pub fn max_translate(&self) -> f32 {
        (self.total_width - self.context.viewport.width).max(0.0)
    }

    #[must_use]
    pub fn animator(&self) -> &A {
        &self.animator
    }

    pub fn animator_mut(&mut self) -> &mut A {
        &mut self.animator
    }

    pub fn set_animating(&mut self, animating: bool) {
        self.state.is_animating = animating;
    }

    /// Class wrapper `index` carries right now.
    #[must_use]
    pub fn class_of(&self, index: usize) -> LayoutClass {
        self.state.layout.class_of(index)
    }

    /// Recomputes the total width and re-places every wrapper.
    pub fn resize(&mut self, viewport: Size) {
        self.context.viewport = viewport;
        self.total_width = geometry::total_width(self.len(), &self.context.config, viewport);

        for index in 0..self.len() {
            let visual = self.resting_visual(index);
            self.animator.place(index, visual);
        }

        // Focused wrappers sit at offset zero, only the row follows the pan
        if self.state.layout.is_panning() {
            self.update_position(self.state.pan.current);
        }
    }

    /// Pixel offset the row gets at `percentage`.
    #[must_use]
    pub fn translate_for(&self, percentage: PanPercent) -> f32 {
        percentage.as_fraction() * self.max_translate()
    }

    /// Tweens every wrapper to the offset for `percentage`, and each image's
    /// object position the opposite way. Returns the target offset.
    pub fn update_position(&mut self, percentage: PanPercent) -> f32 {
        let translate = self.translate_for(percentage);
        let object_position =
            CENTERED_OBJECT_POSITION - percentage.as_fraction() * CENTERED_OBJECT_POSITION;
        let tween = TweenSpec::new(self.context.config.animation_duration, Easing::Power2Out);

        for index in 0..self.len() {
            self.animator.tween_translate_x(index, translate, tween);
            self.animator
                .tween_object_position(index, object_position, tween);
        }
        translate
    }

    pub fn drag_start(&mut self, x: f32) {
        self.state.drag.start(x);
    }

    pub fn drag_end(&mut self) {
        self.state.pan.commit();
        self.state.drag.stop();
    }

    /// Pans by the distance from the press anchor to `x`.
    ///
    /// Returns `false` without touching any state when nothing is pressed or
    /// the track is not panning.
    pub fn drag_move(&mut self, x: f32) -> bool {
        if !self.state.layout.is_panning() || !self.state.drag.is_active() {
            return false;
        }
        let Some(delta) = self
            .state
            .drag
            .track(x, self.context.config.drag_threshold)
        else {
            return false;
        };

        let max_delta = self.max_translate();
        if max_delta <= 0.0 {
            return false;
        }

        let percentage = delta / max_delta * -self.context.config.max_percentage;
        self.state.pan.current = self.state.pan.previous.offset_by(percentage);
        self.update_position(self.state.pan.current);
        true
    }

    /// Pans by a wheel delta in pixels; positive `delta_y` moves toward the end.
    pub fn scroll(&mut self, delta_y: f32) -> bool {
        if !self.state.layout.is_panning() {
            return false;
        }
        let max_delta = self.max_translate();
        if max_delta <= 0.0 || delta_y == 0.0 {
            return false;
        }

        let percentage = delta_y / max_delta * -self.context.config.scroll_sensitivity;
        self.state.pan.current = self.state.pan.current.offset_by(percentage);
        // The next drag continues from here instead of jumping back
        if !self.state.drag.is_active() {
            self.state.pan.commit();
        }
        self.update_position(self.state.pan.current);
        true
    }

    /// Ends a press at `position`. A press that never became a drag counts
    /// as a click. Returns whether the layout changed.
    pub fn release(&mut self, position: Point) -> bool {
        let was_pressed = self.state.drag.is_active();
        let was_dragging = self.state.drag.is_dragging;
        self.drag_end();

        was_pressed && !was_dragging && self.click(position)
    }

    /// Topmost wrapper under `position`. The focused wrapper is drawn last.
    #[must_use]
    pub fn hit_test(&self, position: Point) -> Option<usize> {
        let focused = self.state.layout.focused_index();
        focused
            .into_iter()
            .chain((0..self.len()).rev().filter(|&index| Some(index) != focused))
            .find(|&index| {
                self.animator
                    .visual(index)
                    .is_some_and(|visual| visual.bounds.contains(position))
            })
    }

    /// Routes a click: focuses a wrapper while panning, navigates when a
    /// background wrapper is hit while focused.
    pub fn click(&mut self, position: Point) -> bool {
        let Some(index) = self.hit_test(position) else {
            return false;
        };

        match self.state.layout {
            LayoutMode::Panning => self.toggle_layout(index),
            LayoutMode::Focused(_) => self.handle_layout_navigation(index, position.x),
        }
    }

    /// Focuses wrapper `index` and sends every other wrapper to the background.
    pub fn toggle_layout(&mut self, index: usize) -> bool {
        let Some(next) = self.state.layout.transition(
            LayoutEvent::WrapperClicked(index),
            self.len(),
            self.context.config.allow_return_to_panning,
        ) else {
            return false;
        };

        let snapshot = self.animator.snapshot();
        self.state.layout = next;
        for target in 0..self.len() {
            self.animator.set_translate_x(target, 0.0);
        }

        let focused = [(index, self.resting_visual(index))];
        self.animator
            .flip_from(&snapshot, &focused, &self.flip_options());

        let background = self.targets_with(LayoutClass::Background);
        let stagger = Stagger {
            each: self.context.config.stagger_each,
            from: StaggerFrom::Start,
            axis: Axis::X,
        };
        self.animator.flip_from(
            &snapshot,
            &background,
            &self.flip_options().staggered(stagger),
        );

        tracing::debug!(index, "focused wrapper");
        true
    }

    /// Navigates from a click on `target` at `click_x`.
    ///
    /// Only clicks on background wrappers navigate; the side of the viewport
    /// picks the direction.
    pub fn handle_layout_navigation(&mut self, target: usize, click_x: f32) -> bool {
        if self.state.layout.is_panning() || self.class_of(target) != LayoutClass::Background {
            return false;
        }
        let direction = Direction::from_click(click_x, self.context.viewport.width);
        self.navigate(direction)
    }

    /// Moves focus one wrapper in `direction`, wrapping around.
    pub fn navigate(&mut self, direction: Direction) -> bool {
        let Some(next) = self.state.layout.transition(
            LayoutEvent::Navigate(direction),
            self.len(),
            self.context.config.allow_return_to_panning,
        ) else {
            return false;
        };

        let snapshot = self.animator.snapshot();
        self.state.layout = next;
        let targets = self.all_targets();
        self.animator
            .flip_from(&snapshot, &targets, &self.flip_options());

        tracing::debug!(?direction, focused = ?next.focused_index(), "navigated");
        true
    }

    /// Brings every wrapper back into the row, where the pan left off.
    ///
    /// Only available when `allow_return_to_panning` is enabled.
    pub fn return_to_panning(&mut self) -> bool {
        let Some(next) = self.state.layout.transition(
            LayoutEvent::ReturnToPanning,
            self.len(),
            self.context.config.allow_return_to_panning,
        ) else {
            return false;
        };

        let snapshot = self.animator.snapshot();
        self.state.layout = next;
        let targets = self.all_targets();
        let stagger = Stagger {
            each: self.context.config.stagger_each,
            from: StaggerFrom::Start,
            axis: Axis::X,
        };
        self.animator
            .flip_from(&snapshot, &targets, &self.flip_options().staggered(stagger));
        self.update_position(self.state.pan.current);

        tracing::debug!("returned to panning");
        true
    }

    /// Where wrapper `index` rests in the current layout, before pan offset.
    #[must_use]
    pub fn resting_visual(&self, index: usize) -> Visual {
        let aspect_ratio = self
            .context
            .images
            .get(index)
            .map_or(1.0, TrackImage::aspect_ratio);
        geometry::visual_for(
            self.class_of(index),
            index,
            self.len(),
            aspect_ratio,
            &self.context.config,
            self.context.viewport,
        )
    }

    fn flip_options(&self) -> FlipOptions {
        FlipOptions::new(self.context.config.flip_duration, Easing::Power2Out)
    }

    fn all_targets(&self) -> Vec<(usize, Visual)> {
        (0..self.len())
            .map(|index| (index, self.resting_visual(index)))
            .collect()
    }

    fn targets_with(&self, class: LayoutClass) -> Vec<(usize, Visual)> {
        (0..self.len())
            .filter(|&index| self.class_of(index) == class)
            .map(|index| (index, self.resting_visual(index)))
            .collect()
    }
}
