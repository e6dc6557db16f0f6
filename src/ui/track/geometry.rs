// SPDX-License-Identifier: MPL-2.0
//! Resting positions of wrappers for each layout class.
//!
//! Sizes are given in vmin (1% of the smaller viewport side) so the track
//! keeps its proportions across window shapes.

use crate::animation::Visual;
use crate::config::{TrackConfig, BACKGROUND_OPACITY};
use crate::ui::state::LayoutClass;
use iced::{Point, Rectangle, Size};

/// Share of the viewport height the focused wrapper fills.
const FOCUSED_HEIGHT_RATIO: f32 = 0.7;

/// Widest the focused wrapper may get, as a share of the viewport width.
const FOCUSED_MAX_WIDTH_RATIO: f32 = 0.8;

/// Vertical centre of the focused wrapper, as a share of the viewport height.
const FOCUSED_CENTER_Y_RATIO: f32 = 0.45;

/// Background thumbnails are this many times smaller than panning wrappers.
const THUMBNAIL_DIVISOR: f32 = 5.0;

/// Widest the thumbnail row may get, as a share of the viewport width.
const THUMBNAIL_ROW_MAX_RATIO: f32 = 0.9;

/// Distance between the thumbnail row and the bottom edge, in vmin.
const THUMBNAIL_BOTTOM_MARGIN_VMIN: f32 = 3.0;

fn vmin(viewport: Size) -> f32 {
    viewport.width.min(viewport.height) / 100.0
}

/// Horizontal space one wrapper takes in the panning row, gap included.
#[must_use]
pub fn slot_width(config: &TrackConfig, viewport: Size) -> f32 {
    (config.wrapper_width_vmin + config.gap_vmin) * vmin(viewport)
}

/// Width of all wrappers plus one viewport width of padding.
#[must_use]
pub fn total_width(count: usize, config: &TrackConfig, viewport: Size) -> f32 {
    count as f32 * slot_width(config, viewport) + viewport.width
}

/// Wrapper `index` in the panning row, before any pan offset.
///
/// The row starts at the horizontal centre of the viewport.
#[must_use]
pub fn panning_visual(index: usize, config: &TrackConfig, viewport: Size) -> Visual {
    let unit = vmin(viewport);
    let width = config.wrapper_width_vmin * unit;
    let height = config.wrapper_height_vmin * unit;

    let x = viewport.width / 2.0 + index as f32 * slot_width(config, viewport);
    let y = (viewport.height - height) / 2.0;

    Visual::new(
        Rectangle::new(Point::new(x, y), Size::new(width, height)),
        1.0,
    )
}

/// The enlarged wrapper, sized to the image's aspect ratio.
#[must_use]
pub fn focused_visual(aspect_ratio: f32, viewport: Size) -> Visual {
    let aspect = if aspect_ratio.is_finite() && aspect_ratio > 0.0 {
        aspect_ratio
    } else {
        1.0
    };

    let mut height = viewport.height * FOCUSED_HEIGHT_RATIO;
    let mut width = height * aspect;
    let max_width = viewport.width * FOCUSED_MAX_WIDTH_RATIO;
    if width > max_width {
        width = max_width;
        height = width / aspect;
    }

    let x = (viewport.width - width) / 2.0;
    let y = viewport.height * FOCUSED_CENTER_Y_RATIO - height / 2.0;

    Visual::new(
        Rectangle::new(Point::new(x, y), Size::new(width, height)),
        1.0,
    )
}

/// Dimmed thumbnail `index` in the row along the bottom edge.
///
/// Every wrapper keeps its slot in the row, so the focused wrapper leaves a gap.
#[must_use]
pub fn background_visual(
    index: usize,
    count: usize,
    config: &TrackConfig,
    viewport: Size,
) -> Visual {
    let unit = vmin(viewport);
    let mut width = config.wrapper_width_vmin * unit / THUMBNAIL_DIVISOR;
    let mut height = config.wrapper_height_vmin * unit / THUMBNAIL_DIVISOR;
    let mut spacing = config.gap_vmin * unit / 4.0;

    let count = count.max(1) as f32;
    let row = count * width + (count - 1.0) * spacing;
    let max_row = viewport.width * THUMBNAIL_ROW_MAX_RATIO;
    if row > max_row && row > 0.0 {
        let scale = max_row / row;
        width *= scale;
        height *= scale;
        spacing *= scale;
    }

    let row = count * width + (count - 1.0) * spacing;
    let x = (viewport.width - row) / 2.0 + index as f32 * (width + spacing);
    let y = viewport.height - height - THUMBNAIL_BOTTOM_MARGIN_VMIN * unit;

    Visual::new(
        Rectangle::new(Point::new(x, y), Size::new(width, height)),
        BACKGROUND_OPACITY,
    )
}

/// Resting visual of wrapper `index` given its class.
#[must_use]
pub fn visual_for(
    class: LayoutClass,
    index: usize,
    count: usize,
    aspect_ratio: f32,
    config: &TrackConfig,
    viewport: Size,
) -> Visual {
    match class {
        LayoutClass::Panning => panning_visual(index, config, viewport),
        LayoutClass::Focused => focused_visual(aspect_ratio, viewport),
        LayoutClass::Background => background_visual(index, count, config, viewport),
    }
}
