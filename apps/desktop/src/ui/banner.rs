use iced::widget::{column, container, text};
use iced::{Element, Length, Padding};
use vidnotes_core::SubmissionResult;

use crate::app::Message;
use crate::ui::{style, transition::Frame};

/// Success/error alert for the last resolved submission.
pub fn view(result: &SubmissionResult, frame: Frame) -> Element<'_, Message> {
    let body = column![
        text(result.title()).size(16),
        text(result.message.as_str()).size(14),
    ]
    .spacing(4);

    let alert = container(body)
        .padding(16)
        .width(Length::Fill)
        .style(style::banner(result.success, frame.opacity));

    container(alert)
        .padding(Padding {
            top: frame.offset_y.max(0.0),
            ..Padding::ZERO
        })
        .width(Length::Fill)
        .into()
}
