// SPDX-License-Identifier: MPL-2.0
//! `iced_track` shows a directory of images as a horizontal track built with
//! the Iced GUI framework.
//!
//! The track pans with drag, touch and wheel input. Clicking an image
//! focuses it with a snapshot transition; clicks on the dimmed thumbnails
//! then step through the images.

#![doc(html_root_url = "https://docs.rs/iced_track/0.1.0")]

pub mod animation;
pub mod app;
pub mod config;
pub mod directory_scanner;
pub mod error;
pub mod media;
pub mod ui;

pub use error::{Error, Result};
