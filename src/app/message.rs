// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::config::SortOrder;
use crate::error::Error;
use crate::media::TrackImage;
use std::time::Instant;

/// Messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Native window, mouse, touch or keyboard event.
    RawEvent(iced::Event),
    /// Frame tick, only delivered while something moves.
    Tick(Instant),
    /// Result of the background directory scan.
    ImagesLoaded(Result<Vec<TrackImage>, Error>),
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default)]
pub struct Flags {
    /// Directory whose images fill the track. Defaults to the working directory.
    pub directory: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_TRACK_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Sort order override; falls back to `display.sort_order`.
    pub sort: Option<SortOrder>,
}
