// SPDX-License-Identifier: MPL-2.0
//! Animation engine for the track.
//!
//! - [`easing`]: progress curves
//! - [`tween`]: scalar tweens that can be redirected mid-flight
//! - [`flip`]: snapshot transitions between layouts, with stagger
//! - [`stage`]: the per-wrapper engine implementing [`Animator`]
//! - [`smooth_scroll`]: frame-driven wheel smoothing

pub mod easing;
pub mod flip;
pub mod smooth_scroll;
pub mod stage;
pub mod tween;

pub use easing::Easing;
pub use flip::{Axis, FlipOptions, Snapshot, Stagger, StaggerFrom, Visual};
pub use smooth_scroll::SmoothScroll;
pub use stage::Stage;
pub use tween::TweenSpec;

/// Commands the track controller issues to whatever draws the wrappers.
///
/// Targets are wrapper indices. Commands for unknown indices are ignored.
/// A new tween on a property replaces the one in flight, starting from the
/// currently displayed value.
pub trait Animator {
    /// Sets a wrapper's resting layout without animating.
    fn place(&mut self, target: usize, visual: Visual);

    /// Tweens the horizontal pan offset of a wrapper.
    fn tween_translate_x(&mut self, target: usize, value: f32, tween: TweenSpec);

    /// Jumps the horizontal pan offset of a wrapper.
    fn set_translate_x(&mut self, target: usize, value: f32);

    /// Tweens the horizontal alignment of a wrapper's image, in percent.
    fn tween_object_position(&mut self, target: usize, percent: f32, tween: TweenSpec);

    /// Captures how every wrapper is drawn right now.
    fn snapshot(&self) -> Snapshot;

    /// Animates each target from its captured visual to its new layout.
    fn flip_from(&mut self, snapshot: &Snapshot, targets: &[(usize, Visual)], options: &FlipOptions);

    /// How a wrapper is drawn right now, pan offset included.
    fn visual(&self, target: usize) -> Option<Visual>;
}
