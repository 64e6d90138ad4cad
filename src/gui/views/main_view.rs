//! Main view implementation

use crate::gui::app::Message;
use crate::gui::components::{source_item, url_input};
use crate::gui::state::Screen;
use iced::widget::{button, column, container, row, scrollable, text, Column, Space};
use iced::{Alignment, Element, Length};

/// Create the main view
pub fn main_view(screen: &Screen, status_line: Option<&str>) -> Element<'static, Message> {
    use crate::gui::theme;

    let mut content = Column::new().spacing(20).align_items(Alignment::Center);

    if screen.form_visible() {
        content = content.push(
            text("Download TikTok video")
                .size(28)
                .style(iced::theme::Text::Color(theme::ACCENT)),
        );
        content = content.push(url_input(&screen.url_input, screen.input_error.as_deref()));
        content = content.push(
            button(
                container(text("Get video").size(16))
                    .width(Length::Fill)
                    .center_x(),
            )
            .on_press_maybe(screen.can_submit().then_some(Message::SubmitPressed))
            .width(Length::Fill)
            .padding([14, 28])
            .style(iced::theme::Button::Custom(Box::new(theme::PrimaryButton))),
        );
    }

    if screen.is_loading() {
        content = content.push(
            text("Looking up video sources...")
                .size(15)
                .style(iced::theme::Text::Color(theme::GRAY_600)),
        );
    }

    // The input error is already rendered under the field
    if let Some(notice) = screen.notice().filter(|_| screen.input_error.is_none()) {
        content = content.push(
            text(notice.to_string())
                .size(15)
                .style(iced::theme::Text::Color(theme::DANGER)),
        );
    }

    if let Some(result) = screen.results() {
        let mut list = column![text("Available video sources:")
            .size(18)
            .style(iced::theme::Text::Color(theme::GRAY_800))]
        .spacing(8);

        for (position, (label, _)) in result.labelled().enumerate() {
            list = list.push(source_item(label, position + 1));
        }

        content = content.push(
            scrollable(list)
                .height(Length::Fill)
                .style(iced::theme::Scrollable::Custom(Box::new(
                    theme::ScrollableStyle,
                ))),
        );
    }

    if !screen.form_visible() && !screen.is_loading() {
        content = content.push(
            button(
                container(text("Search another video").size(15))
                    .width(Length::Fill)
                    .center_x(),
            )
            .on_press(Message::NewSearch)
            .width(Length::Fill)
            .padding([12, 24])
            .style(iced::theme::Button::Custom(Box::new(theme::SecondaryButton))),
        );
    }

    if let Some(status) = status_line {
        content = content.push(row![
            Space::with_width(Length::Fill),
            text(status.to_string())
                .size(12)
                .style(iced::theme::Text::Color(theme::GRAY_500)),
        ]);
    }

    container(content)
        .padding(32)
        .width(Length::Fixed(560.0))
        .style(iced::theme::Container::Custom(Box::new(theme::CardContainer)))
        .into()
}
