// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! Plain state the track controller mutates, kept free of rendering so it
//! can be tested on its own.

pub mod drag;
pub mod layout;
pub mod pan;

pub use drag::DragState;
pub use layout::{Direction, LayoutClass, LayoutEvent, LayoutMode};
pub use pan::{PanPercent, PanState};
