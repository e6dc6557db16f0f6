// SPDX-License-Identifier: MPL-2.0
//! User interface: interaction state, the track controller and its canvas.
//!
//! - [`state`] - Drag, pan and layout state the controller mutates
//! - [`track`] - The track controller and wrapper geometry
//! - [`widgets`] - The canvas that draws the track

pub mod state;
pub mod track;
pub mod widgets;
