// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[track]` - Pan sensitivity, tween durations, drag threshold, stagger
//! - `[layout]` - Wrapper sizing and whether focus mode may return to panning
//! - `[smooth_scroll]` - Wheel smoothing
//! - `[display]` - Image sorting order
//!
//! Every field is optional. Missing fields fall back to [`defaults`], and
//! out-of-range values are clamped when the runtime [`TrackConfig`] is
//! resolved.
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. `--config-dir` CLI argument or `ICED_TRACK_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_track::config;
//!
//! let (mut config, _warning) = config::load();
//! config.smooth_scroll.enabled = Some(false);
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the settings file inside the config directory.
pub const CONFIG_FILE: &str = "settings.toml";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    #[default]
    Alphabetical,
    ModifiedDate,
    CreatedDate,
}

impl std::str::FromStr for SortOrder {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "alphabetical" => Ok(SortOrder::Alphabetical),
            "modified-date" => Ok(SortOrder::ModifiedDate),
            "created-date" => Ok(SortOrder::CreatedDate),
            other => Err(Error::Config(format!("invalid sort order: {}", other))),
        }
    }
}

// =============================================================================
// Section Structs
// =============================================================================

/// Pan and tween settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrackSection {
    #[serde(
        default = "default_scroll_sensitivity",
        skip_serializing_if = "Option::is_none"
    )]
    pub scroll_sensitivity: Option<f32>,

    #[serde(
        default = "default_animation_duration",
        skip_serializing_if = "Option::is_none"
    )]
    pub animation_duration_secs: Option<f32>,

    #[serde(
        default = "default_flip_duration",
        skip_serializing_if = "Option::is_none"
    )]
    pub flip_duration_secs: Option<f32>,

    #[serde(
        default = "default_drag_threshold",
        skip_serializing_if = "Option::is_none"
    )]
    pub drag_threshold_px: Option<f32>,

    #[serde(
        default = "default_stagger_each",
        skip_serializing_if = "Option::is_none"
    )]
    pub stagger_each_secs: Option<f32>,
}

impl Default for TrackSection {
    fn default() -> Self {
        Self {
            scroll_sensitivity: default_scroll_sensitivity(),
            animation_duration_secs: default_animation_duration(),
            flip_duration_secs: default_flip_duration(),
            drag_threshold_px: default_drag_threshold(),
            stagger_each_secs: default_stagger_each(),
        }
    }
}

/// Wrapper geometry and layout state machine options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LayoutSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wrapper_width_vmin: Option<f32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wrapper_height_vmin: Option<f32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gap_vmin: Option<f32>,

    /// Lets Escape leave focus mode. Off unless explicitly enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_return_to_panning: Option<bool>,
}

impl Default for LayoutSection {
    fn default() -> Self {
        Self {
            wrapper_width_vmin: Some(DEFAULT_WRAPPER_WIDTH_VMIN),
            wrapper_height_vmin: Some(DEFAULT_WRAPPER_HEIGHT_VMIN),
            gap_vmin: Some(DEFAULT_GAP_VMIN),
            allow_return_to_panning: Some(false),
        }
    }
}

/// Wheel smoothing settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SmoothScrollSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lerp: Option<f32>,
}

impl Default for SmoothScrollSection {
    fn default() -> Self {
        Self {
            enabled: Some(true),
            lerp: Some(DEFAULT_SMOOTH_SCROLL_LERP),
        }
    }
}

/// Display settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct DisplayConfig {
    /// Image sorting order in the track.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<SortOrder>,
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub track: TrackSection,

    #[serde(default)]
    pub layout: LayoutSection,

    #[serde(default)]
    pub smooth_scroll: SmoothScrollSection,

    #[serde(default)]
    pub display: DisplayConfig,
}

// =============================================================================
// Resolved Runtime Configuration
// =============================================================================

/// Constants the track controller runs with, resolved from [`Config`].
///
/// Values here are always within their documented ranges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackConfig {
    pub scroll_sensitivity: f32,
    pub animation_duration: f32,
    pub flip_duration: f32,
    pub max_percentage: f32,
    pub drag_threshold: f32,
    pub stagger_each: f32,
    pub wrapper_width_vmin: f32,
    pub wrapper_height_vmin: f32,
    pub gap_vmin: f32,
    pub allow_return_to_panning: bool,
}

impl Default for TrackConfig {
    fn default() -> Self {
        Config::default().track_config()
    }
}

/// Wheel smoothing resolved from [`SmoothScrollSection`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothScrollConfig {
    pub enabled: bool,
    pub lerp: f32,
}

impl Config {
    /// Resolves the track section into clamped runtime values.
    #[must_use]
    pub fn track_config(&self) -> TrackConfig {
        let track = &self.track;
        let layout = &self.layout;
        let duration = |value: Option<f32>, default: f32| {
            value
                .unwrap_or(default)
                .clamp(0.0, MAX_ANIMATION_DURATION_SECS)
        };
        let vmin = |value: Option<f32>, default: f32| {
            value
                .unwrap_or(default)
                .clamp(MIN_WRAPPER_VMIN, MAX_WRAPPER_VMIN)
        };

        TrackConfig {
            scroll_sensitivity: track
                .scroll_sensitivity
                .unwrap_or(DEFAULT_SCROLL_SENSITIVITY)
                .clamp(MIN_SCROLL_SENSITIVITY, MAX_SCROLL_SENSITIVITY),
            animation_duration: duration(
                track.animation_duration_secs,
                DEFAULT_ANIMATION_DURATION_SECS,
            ),
            flip_duration: duration(track.flip_duration_secs, DEFAULT_FLIP_DURATION_SECS),
            max_percentage: MAX_PERCENTAGE,
            drag_threshold: track
                .drag_threshold_px
                .unwrap_or(DEFAULT_DRAG_THRESHOLD_PX)
                .max(0.0),
            stagger_each: duration(track.stagger_each_secs, DEFAULT_STAGGER_EACH_SECS),
            wrapper_width_vmin: vmin(layout.wrapper_width_vmin, DEFAULT_WRAPPER_WIDTH_VMIN),
            wrapper_height_vmin: vmin(layout.wrapper_height_vmin, DEFAULT_WRAPPER_HEIGHT_VMIN),
            gap_vmin: layout
                .gap_vmin
                .unwrap_or(DEFAULT_GAP_VMIN)
                .clamp(0.0, MAX_WRAPPER_VMIN),
            allow_return_to_panning: layout.allow_return_to_panning.unwrap_or(false),
        }
    }

    /// Resolves the smooth scroll section into clamped runtime values.
    #[must_use]
    pub fn smooth_scroll_config(&self) -> SmoothScrollConfig {
        SmoothScrollConfig {
            enabled: self.smooth_scroll.enabled.unwrap_or(true),
            lerp: self
                .smooth_scroll
                .lerp
                .unwrap_or(DEFAULT_SMOOTH_SCROLL_LERP)
                .clamp(MIN_SMOOTH_SCROLL_LERP, MAX_SMOOTH_SCROLL_LERP),
        }
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_scroll_sensitivity() -> Option<f32> {
    Some(DEFAULT_SCROLL_SENSITIVITY)
}

fn default_animation_duration() -> Option<f32> {
    Some(DEFAULT_ANIMATION_DURATION_SECS)
}

fn default_flip_duration() -> Option<f32> {
    Some(DEFAULT_FLIP_DURATION_SECS)
}

fn default_drag_threshold() -> Option<f32> {
    Some(DEFAULT_DRAG_THRESHOLD_PX)
}

fn default_stagger_each() -> Option<f32> {
    Some(DEFAULT_STAGGER_EACH_SECS)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    return (
                        Config::default(),
                        Some(format!("could not load {}: {}", path.display(), err)),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
