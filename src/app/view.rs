// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::{App, Message};
use crate::ui::widgets::TrackCanvas;
use iced::widget::{container, text, Container};
use iced::{Element, Length};

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let content: Element<'_, Message> = match (&self.track, &self.load_error) {
            (Some(track), _) if !track.is_empty() => TrackCanvas::new(track).into_element(),
            (Some(_), _) => centered_message(format!(
                "No images found in {}",
                self.directory.display()
            )),
            (None, Some(error)) => centered_message(error.clone()),
            (None, None) => centered_message("Loading images...".to_string()),
        };

        Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

fn centered_message<'a>(message: String) -> Element<'a, Message> {
    container(text(message).size(18))
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}
