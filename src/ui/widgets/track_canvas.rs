// SPDX-License-Identifier: MPL-2.0
//! Canvas that draws the track.
//!
//! Each wrapper is a clipped rectangle filled with its image in cover fit,
//! horizontally aligned by the wrapper's object position.

use crate::animation::{stage::CENTERED_OBJECT_POSITION, Animator, Stage};
use crate::media::TrackImage;
use crate::ui::track::TrackController;
use iced::widget::canvas::{self, Canvas, Frame, Geometry, Path};
use iced::{mouse, Color, Element, Length, Point, Rectangle, Renderer, Size, Theme};

/// Fill shown while an image is still decoding.
const PLACEHOLDER: Color = Color::from_rgb(0.12, 0.12, 0.12);

/// Draws every wrapper of a controller driven by a [`Stage`].
pub struct TrackCanvas<'a> {
    controller: &'a TrackController<Stage>,
}

impl<'a> TrackCanvas<'a> {
    #[must_use]
    pub fn new(controller: &'a TrackController<Stage>) -> Self {
        Self { controller }
    }

    pub fn into_element<Message: 'a>(self) -> Element<'a, Message> {
        Canvas::new(self)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    /// Background wrappers first, the focused one on top.
    fn draw_order(&self) -> impl Iterator<Item = usize> + '_ {
        let focused = self.controller.layout().focused_index();
        (0..self.controller.len())
            .filter(move |&index| Some(index) != focused)
            .chain(focused)
    }

    fn draw_wrapper(&self, frame: &mut Frame, index: usize, image: &TrackImage) {
        let stage = self.controller.animator();
        let Some(visual) = stage.visual(index) else {
            return;
        };
        let wrapper = visual.bounds;
        if wrapper.width <= 0.0 || wrapper.height <= 0.0 {
            return;
        }
        let position = stage
            .object_position(index)
            .unwrap_or(CENTERED_OBJECT_POSITION);
        let target = cover_rect(
            Size::new(image.width as f32, image.height as f32),
            wrapper.size(),
            position,
        );
        let opacity = visual.opacity.clamp(0.0, 1.0);

        frame.with_clip(wrapper, |frame| {
            frame.fill(
                &Path::rectangle(Point::ORIGIN, wrapper.size()),
                Color {
                    a: opacity,
                    ..PLACEHOLDER
                },
            );
            frame.draw_image(
                target,
                canvas::Image::new(image.handle.clone()).opacity(opacity),
            );
        });
    }
}

impl<Message> canvas::Program<Message> for TrackCanvas<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        for index in self.draw_order() {
            if let Some(image) = self.controller.images().get(index) {
                self.draw_wrapper(&mut frame, index, image);
            }
        }

        vec![frame.into_geometry()]
    }
}

/// Where an image of `image` size lands when it covers a `wrapper`, relative
/// to the wrapper's top-left corner.
///
/// The overflow is split by `object_position` percent horizontally and
/// centred vertically.
#[must_use]
pub fn cover_rect(image: Size, wrapper: Size, object_position: f32) -> Rectangle {
    if image.width <= 0.0 || image.height <= 0.0 {
        return Rectangle::new(Point::ORIGIN, wrapper);
    }

    let scale = (wrapper.width / image.width).max(wrapper.height / image.height);
    let drawn = Size::new(image.width * scale, image.height * scale);
    let align = object_position.clamp(0.0, 100.0) / 100.0;

    Rectangle::new(
        Point::new(
            (wrapper.width - drawn.width) * align,
            (wrapper.height - drawn.height) / 2.0,
        ),
        drawn,
    )
}
