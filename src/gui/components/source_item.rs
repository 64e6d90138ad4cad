//! One row of the source list

use crate::gui::app::Message;
use iced::widget::{button, container, row, text, Space};
use iced::{Alignment, Element, Length};

/// `label` is the "Source n (quality)" text, `position` the 1-based row number.
pub fn source_item(label: String, position: usize) -> Element<'static, Message> {
    use crate::gui::theme;

    container(
        row![
            text(label)
                .size(15)
                .style(iced::theme::Text::Color(theme::GRAY_800)),
            Space::with_width(Length::Fill),
            button(text(format!("Open video {}", position)).size(14))
                .on_press(Message::OpenSource(position))
                .padding([8, 16])
                .style(iced::theme::Button::Custom(Box::new(theme::PrimaryButton))),
        ]
        .spacing(12)
        .align_items(Alignment::Center),
    )
    .padding([10, 14])
    .width(Length::Fill)
    .style(iced::theme::Container::Custom(Box::new(
        theme::SourceRowContainer,
    )))
    .into()
}
