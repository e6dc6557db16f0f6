// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Pointer input is routed regardless of capture status since the track
//! canvas never captures it. Keyboard input only arrives when no widget
//! claimed it.

use super::Message;
use iced::{event, mouse, time, touch, window, Subscription};
use std::time::Duration;

/// Frame interval of the animation tick (about 60 frames per second).
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Routes resize, pointer and keyboard events to the track.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| match event {
        routed @ (event::Event::Window(window::Event::Resized(_))
        | event::Event::Mouse(
            mouse::Event::CursorMoved { .. }
            | mouse::Event::CursorLeft
            | mouse::Event::ButtonPressed(mouse::Button::Left)
            | mouse::Event::ButtonReleased(mouse::Button::Left)
            | mouse::Event::WheelScrolled { .. },
        )
        | event::Event::Touch(
            touch::Event::FingerPressed { .. }
            | touch::Event::FingerMoved { .. }
            | touch::Event::FingerLifted { .. }
            | touch::Event::FingerLost { .. },
        )) => Some(Message::RawEvent(routed)),
        key @ event::Event::Keyboard(..) => match status {
            event::Status::Ignored => Some(Message::RawEvent(key)),
            event::Status::Captured => None,
        },
        _ => None,
    })
}

/// Ticks every frame while tweens, flips or wheel smoothing are in flight.
pub fn create_tick_subscription(animating: bool) -> Subscription<Message> {
    if animating {
        time::every(FRAME_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
