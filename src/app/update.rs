// SPDX-License-Identifier: MPL-2.0
//! Update logic for the application.
//!
//! Native events are translated into track controller calls here. The
//! controller decides whether they apply in the current layout.

use super::{App, Message};
use crate::animation::Stage;
use crate::config::WHEEL_LINE_HEIGHT_PX;
use crate::media::TrackImage;
use crate::ui::state::Direction;
use crate::ui::track::{TrackContext, TrackController};
use iced::keyboard::{self, key};
use iced::{event, mouse, touch, window, Point, Task};
use std::time::Instant;

/// Longest frame step fed to the animation clock, in seconds. Keeps a
/// stalled window from skipping whole transitions.
const MAX_FRAME_STEP_SECS: f32 = 0.1;

/// Converts a wheel delta to pixels, positive toward the end of the track.
///
/// Iced reports wheel-up as positive, the track pans the opposite way.
pub(crate) fn wheel_delta_y(delta: mouse::ScrollDelta) -> f32 {
    match delta {
        mouse::ScrollDelta::Lines { y, .. } => -y * WHEEL_LINE_HEIGHT_PX,
        mouse::ScrollDelta::Pixels { y, .. } => -y,
    }
}

impl App {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::RawEvent(event) => self.handle_raw_event(event),
            Message::Tick(now) => self.handle_tick(now),
            Message::ImagesLoaded(Ok(images)) => self.handle_images_loaded(images),
            Message::ImagesLoaded(Err(err)) => {
                tracing::error!(directory = %self.directory.display(), error = %err, "failed to load images");
                self.load_error = Some(err.to_string());
            }
        }

        if let Some(track) = self.track.as_mut() {
            let animating = track.animator().is_animating();
            track.set_animating(animating);
        }
        Task::none()
    }

    fn handle_images_loaded(&mut self, images: Vec<TrackImage>) {
        let count = images.len();
        let context = TrackContext {
            config: self.track_config,
            images,
            viewport: self.viewport,
        };
        self.track = Some(TrackController::new(context, Stage::new(count)));
        self.load_error = None;
    }

    fn handle_raw_event(&mut self, event: event::Event) {
        match event {
            event::Event::Window(window::Event::Resized(size)) => {
                self.viewport = size;
                if let Some(track) = self.track.as_mut() {
                    track.resize(size);
                }
            }
            event::Event::Mouse(mouse_event) => self.handle_mouse(mouse_event),
            event::Event::Touch(touch_event) => self.handle_touch(touch_event),
            event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => {
                self.handle_key(&key);
            }
            _ => {}
        }
    }

    fn handle_mouse(&mut self, event: mouse::Event) {
        let Some(track) = self.track.as_mut() else {
            return;
        };

        match event {
            mouse::Event::CursorMoved { position } => {
                self.cursor = position;
                track.drag_move(position.x);
            }
            mouse::Event::ButtonPressed(mouse::Button::Left) => {
                track.drag_start(self.cursor.x);
            }
            mouse::Event::ButtonReleased(mouse::Button::Left) => {
                track.release(self.cursor);
            }
            // Releases outside the window never arrive
            mouse::Event::CursorLeft => track.drag_end(),
            mouse::Event::WheelScrolled { delta } => {
                if !track.layout().is_panning() {
                    return;
                }
                if let Some(delta) = self.smooth_scroll.push(wheel_delta_y(delta)) {
                    track.scroll(delta);
                }
            }
            _ => {}
        }
    }

    fn handle_touch(&mut self, event: touch::Event) {
        let Some(track) = self.track.as_mut() else {
            return;
        };

        match event {
            touch::Event::FingerPressed { id, position } if self.active_finger.is_none() => {
                self.active_finger = Some(id);
                self.cursor = position;
                track.drag_start(position.x);
            }
            touch::Event::FingerMoved { id, position } if self.active_finger == Some(id) => {
                self.cursor = position;
                track.drag_move(position.x);
            }
            touch::Event::FingerLifted { id, position } if self.active_finger == Some(id) => {
                self.active_finger = None;
                self.cursor = position;
                track.release(position);
            }
            touch::Event::FingerLost { id, .. } if self.active_finger == Some(id) => {
                self.active_finger = None;
                track.drag_end();
            }
            _ => {}
        }
    }

    fn handle_key(&mut self, key: &keyboard::Key) {
        let Some(track) = self.track.as_mut() else {
            return;
        };

        match key {
            keyboard::Key::Named(key::Named::ArrowRight) => {
                track.navigate(Direction::Next);
            }
            keyboard::Key::Named(key::Named::ArrowLeft) => {
                track.navigate(Direction::Previous);
            }
            keyboard::Key::Named(key::Named::Escape) => {
                if track.return_to_panning() {
                    self.smooth_scroll.stop();
                }
            }
            _ => {}
        }
    }

    /// Advances the animation clock and releases the next wheel slice.
    fn handle_tick(&mut self, now: Instant) {
        let dt = self
            .last_tick
            .map_or(0.0, |last| now.saturating_duration_since(last).as_secs_f32())
            .min(MAX_FRAME_STEP_SECS);
        self.last_tick = Some(now);

        let Some(track) = self.track.as_mut() else {
            self.smooth_scroll.stop();
            self.last_tick = None;
            return;
        };

        track.animator_mut().tick(dt);

        let slice = self.smooth_scroll.tick(dt);
        if slice != 0.0 && !track.scroll(slice) {
            self.smooth_scroll.stop();
        }

        if !track.animator().is_animating() && !self.smooth_scroll.is_animating() {
            // Next burst starts with a zero step instead of the idle gap
            self.last_tick = None;
        }
    }

    /// Cursor position as last reported by the window.
    #[must_use]
    pub fn cursor(&self) -> Point {
        self.cursor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::ui::state::LayoutMode;
    use iced::Size;
    use std::path::PathBuf;
    use std::time::Duration;

    fn loaded_app(config: &Config, count: usize) -> App {
        let mut app = App::from_config(PathBuf::from("."), config);
        let images = (0..count)
            .map(|index| TrackImage::new(format!("{index}.png"), 1200, 800))
            .collect();
        let _ = app.update(Message::RawEvent(event::Event::Window(
            window::Event::Resized(Size::new(1000.0, 500.0)),
        )));
        let _ = app.update(Message::ImagesLoaded(Ok(images)));
        app
    }

    fn send_mouse(app: &mut App, event: mouse::Event) {
        let _ = app.update(Message::RawEvent(event::Event::Mouse(event)));
    }

    fn centre_of_wrapper(app: &App, index: usize) -> Point {
        use crate::animation::Animator;
        app.track()
            .and_then(|track| track.animator().visual(index))
            .map(|visual| visual.bounds.center())
            .expect("wrapper exists")
    }

    #[test]
    fn wheel_down_pans_toward_the_end() {
        assert_eq!(
            wheel_delta_y(mouse::ScrollDelta::Lines { x: 0.0, y: -1.0 }),
            WHEEL_LINE_HEIGHT_PX
        );
        assert_eq!(
            wheel_delta_y(mouse::ScrollDelta::Pixels { x: 0.0, y: 12.0 }),
            -12.0
        );
    }

    #[test]
    fn events_before_loading_are_ignored() {
        let mut app = App::from_config(PathBuf::from("."), &Config::default());
        send_mouse(&mut app, mouse::Event::ButtonPressed(mouse::Button::Left));
        send_mouse(
            &mut app,
            mouse::Event::WheelScrolled {
                delta: mouse::ScrollDelta::Lines { x: 0.0, y: -1.0 },
            },
        );
        assert!(app.track().is_none());
        assert!(!app.is_animating());
    }

    #[test]
    fn load_error_is_kept_for_display() {
        let mut app = App::from_config(PathBuf::from("missing"), &Config::default());
        let _ = app.update(Message::ImagesLoaded(Err(crate::error::Error::Io(
            "no such directory".into(),
        ))));
        assert!(app.track().is_none());
        assert!(app.load_error.is_some());
    }

    #[test]
    fn click_focuses_and_ticks_run_the_flip() {
        let mut app = loaded_app(&Config::default(), 4);
        let target = centre_of_wrapper(&app, 0);

        send_mouse(&mut app, mouse::Event::CursorMoved { position: target });
        send_mouse(&mut app, mouse::Event::ButtonPressed(mouse::Button::Left));
        send_mouse(&mut app, mouse::Event::ButtonReleased(mouse::Button::Left));

        let track = app.track().expect("track loaded");
        assert_eq!(track.layout(), LayoutMode::Focused(0));
        assert!(app.is_animating());

        let start = Instant::now();
        for frame in 0..=120 {
            let _ = app.update(Message::Tick(start + FRAME_STEP * frame));
        }
        assert!(!app.is_animating());
    }

    const FRAME_STEP: Duration = Duration::from_millis(16);

    #[test]
    fn drag_pans_and_does_not_click() {
        let mut app = loaded_app(&Config::default(), 4);
        let target = centre_of_wrapper(&app, 0);

        send_mouse(&mut app, mouse::Event::CursorMoved { position: target });
        send_mouse(&mut app, mouse::Event::ButtonPressed(mouse::Button::Left));
        send_mouse(
            &mut app,
            mouse::Event::CursorMoved {
                position: Point::new(target.x - 100.0, target.y),
            },
        );
        send_mouse(&mut app, mouse::Event::ButtonReleased(mouse::Button::Left));

        let track = app.track().expect("track loaded");
        assert!(track.layout().is_panning());
        assert!(track.current_percentage().value() < 0.0);
    }

    #[test]
    fn wheel_is_smoothed_over_ticks() {
        let mut app = loaded_app(&Config::default(), 4);
        send_mouse(
            &mut app,
            mouse::Event::WheelScrolled {
                delta: mouse::ScrollDelta::Lines { x: 0.0, y: -1.0 },
            },
        );
        let track = app.track().expect("track loaded");
        assert_eq!(track.current_percentage().value(), 0.0);
        assert!(app.is_animating());

        let start = Instant::now();
        for frame in 0..=10 {
            let _ = app.update(Message::Tick(start + FRAME_STEP * frame));
        }
        let track = app.track().expect("track loaded");
        assert!(track.current_percentage().value() < 0.0);
    }

    #[test]
    fn wheel_without_smoothing_pans_immediately() {
        let mut config = Config::default();
        config.smooth_scroll.enabled = Some(false);
        let mut app = loaded_app(&config, 4);

        send_mouse(
            &mut app,
            mouse::Event::WheelScrolled {
                delta: mouse::ScrollDelta::Pixels { x: 0.0, y: -40.0 },
            },
        );
        let track = app.track().expect("track loaded");
        assert!(track.current_percentage().value() < 0.0);
    }

    #[test]
    fn second_finger_is_ignored() {
        let mut app = loaded_app(&Config::default(), 4);
        let first = touch::Finger(1);
        let second = touch::Finger(2);

        let _ = app.update(Message::RawEvent(event::Event::Touch(
            touch::Event::FingerPressed {
                id: first,
                position: Point::new(600.0, 250.0),
            },
        )));
        let _ = app.update(Message::RawEvent(event::Event::Touch(
            touch::Event::FingerMoved {
                id: second,
                position: Point::new(100.0, 250.0),
            },
        )));
        let track = app.track().expect("track loaded");
        assert_eq!(track.current_percentage().value(), 0.0);
        assert!(!track.state().drag.is_dragging);

        let _ = app.update(Message::RawEvent(event::Event::Touch(
            touch::Event::FingerMoved {
                id: first,
                position: Point::new(400.0, 250.0),
            },
        )));
        let track = app.track().expect("track loaded");
        assert!(track.state().drag.is_dragging);
    }

    #[test]
    fn arrow_keys_navigate_while_focused() {
        let mut app = loaded_app(&Config::default(), 3);
        if let Some(track) = app.track.as_mut() {
            track.toggle_layout(2);
        }

        app.handle_key(&keyboard::Key::Named(key::Named::ArrowRight));
        let track = app.track().expect("track loaded");
        assert_eq!(track.layout(), LayoutMode::Focused(0));

        // Return to panning is off by default
        app.handle_key(&keyboard::Key::Named(key::Named::Escape));
        let track = app.track().expect("track loaded");
        assert_eq!(track.layout(), LayoutMode::Focused(0));
    }
}
