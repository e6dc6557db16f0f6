// SPDX-License-Identifier: MPL-2.0
//! Application root state.
//!
//! The `App` owns the track controller once the image directory has been
//! scanned, feeds it native input events, and drives the animation clock
//! from a frame tick that only runs while something moves.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use subscription::FRAME_INTERVAL;

use crate::animation::{SmoothScroll, Stage};
use crate::config::{self, Config, SortOrder, TrackConfig};
use crate::error::Error;
use crate::media;
use crate::ui::track::TrackController;
use iced::{touch, window, Point, Size, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::time::Instant;

pub const WINDOW_DEFAULT_WIDTH: u32 = 1200;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const MIN_WINDOW_WIDTH: u32 = 480;
pub const MIN_WINDOW_HEIGHT: u32 = 360;

/// Root Iced application state.
pub struct App {
    directory: PathBuf,
    track_config: TrackConfig,
    smooth_scroll: SmoothScroll,
    /// `None` until the directory scan finishes.
    track: Option<TrackController<Stage>>,
    load_error: Option<String>,
    viewport: Size,
    cursor: Point,
    /// First finger down; other fingers are ignored until it lifts.
    active_finger: Option<touch::Finger>,
    last_tick: Option<Instant>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("directory", &self.directory)
            .field("images", &self.track.as_ref().map(TrackController::len))
            .field("layout", &self.track.as_ref().map(TrackController::layout))
            .finish()
    }
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH as f32, MIN_WINDOW_HEIGHT as f32)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot closure; flags are consumed once
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads the config and starts scanning the image directory in the background.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_override(flags.config_dir);

        let (config, config_warning) = config::load();
        if let Some(warning) = config_warning {
            tracing::warn!("{warning}");
        }

        let directory = flags
            .directory
            .map_or_else(|| PathBuf::from("."), PathBuf::from);
        let sort_order = flags
            .sort
            .or(config.display.sort_order)
            .unwrap_or_default();

        let app = Self::from_config(directory.clone(), &config);
        let task = Task::perform(load_images(directory, sort_order), Message::ImagesLoaded);
        (app, task)
    }

    /// Creates an app with no images loaded yet.
    pub fn from_config(directory: PathBuf, config: &Config) -> Self {
        Self {
            directory,
            track_config: config.track_config(),
            smooth_scroll: SmoothScroll::new(config.smooth_scroll_config()),
            track: None,
            load_error: None,
            viewport: Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
            cursor: Point::ORIGIN,
            active_finger: None,
            last_tick: None,
        }
    }

    #[must_use]
    pub fn track(&self) -> Option<&TrackController<Stage>> {
        self.track.as_ref()
    }

    fn title(&self) -> String {
        let name = self
            .directory
            .canonicalize()
            .ok()
            .and_then(|path| path.file_name().map(|n| n.to_string_lossy().into_owned()))
            .unwrap_or_else(|| self.directory.display().to_string());
        format!("{name} - IcedTrack")
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    /// Whether the frame tick should run.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.smooth_scroll.is_animating()
            || self
                .track
                .as_ref()
                .is_some_and(|track| track.state().is_animating)
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(self.is_animating()),
        ])
    }
}

/// Scans and probes on a blocking thread so the window opens immediately.
async fn load_images(
    directory: PathBuf,
    sort_order: SortOrder,
) -> Result<Vec<media::TrackImage>, Error> {
    tokio::task::spawn_blocking(move || media::load_track_images(&directory, sort_order))
        .await
        .map_err(|e| Error::Io(e.to_string()))?
}
