//! URL input component

use crate::gui::app::Message;
use iced::widget::{button, column, row, text, text_input, tooltip};
use iced::{Alignment, Element, Length};

/// URL field with paste and clear buttons and an optional error line
pub fn url_input(value: &str, error_message: Option<&str>) -> Element<'static, Message> {
    use crate::gui::theme;

    let input_row = row![
        text_input("https://www.tiktok.com/...", value)
            .on_input(Message::UrlInputChanged)
            .on_submit(Message::SubmitPressed)
            .padding(14)
            .width(Length::Fill)
            .style(iced::theme::TextInput::Custom(Box::new(theme::UrlInputStyle {
                has_error: error_message.is_some(),
            }))),
        tooltip(
            button(text("Paste").size(14))
                .on_press(Message::PasteFromClipboard)
                .padding([8, 12])
                .style(iced::theme::Button::Custom(Box::new(theme::IconButton))),
            "Paste a TikTok link from the clipboard",
            tooltip::Position::Bottom,
        ),
        button(text("Clear").size(14))
            .on_press(Message::ClearUrlInput)
            .padding([8, 12])
            .style(iced::theme::Button::Custom(Box::new(theme::IconButton))),
    ]
    .spacing(12)
    .align_items(Alignment::Center);

    match error_message {
        Some(error) => column![
            input_row,
            text(error.to_string())
                .size(14)
                .style(iced::theme::Text::Color(theme::DANGER)),
        ]
        .spacing(8)
        .into(),
        None => input_row.into(),
    }
}
