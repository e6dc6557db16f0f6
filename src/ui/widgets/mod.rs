// SPDX-License-Identifier: MPL-2.0
pub mod track_canvas;

pub use track_canvas::TrackCanvas;
