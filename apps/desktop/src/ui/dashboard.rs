//! Link and file submission cards.

use iced::alignment::Horizontal;
use iced::widget::{button, column, container, mouse_area, row, text, text_input};
use iced::{Alignment, Element, Length};
use vidnotes_core::Session;

use crate::app::Message;
use crate::ui::style::{self, GRAY_400, GRAY_500, GRAY_700, GRAY_800, fade};

pub const LINK_PLACEHOLDER: &str = "https://www.youtube.com/watch?v=...";

pub fn view(session: &Session, spinner: char, opacity: f32) -> Element<'_, Message> {
    row![
        link_card(session, spinner, opacity),
        file_card(session, opacity)
    ]
    .spacing(32)
    .width(Length::Fill)
    .into()
}

fn link_card(session: &Session, spinner: char, opacity: f32) -> Element<'_, Message> {
    let submit = session.can_submit_link().then_some(Message::SubmitLink);

    let input = text_input(LINK_PLACEHOLDER, session.link_input())
        .on_input(Message::LinkChanged)
        .on_submit_maybe(submit.clone())
        .padding(10);

    let label = if session.is_processing() {
        format!("{spinner} Processing")
    } else {
        "Generate Notes".to_string()
    };

    let generate = button(text(label))
        .on_press_maybe(submit)
        .padding([8, 16])
        .style(style::primary_button(opacity));

    let body = column![
        text("YouTube Video Link")
            .size(14)
            .color(fade(GRAY_700, opacity)),
        input,
    ]
    .spacing(6);

    card(
        "YouTube Link",
        "Generate notes from a YouTube video link",
        body.into(),
        generate.into(),
        opacity,
    )
}

fn file_card(session: &Session, opacity: f32) -> Element<'_, Message> {
    let upload = session.can_submit_file().then_some(Message::UploadPressed);

    let prompt = column![
        text("Upload").size(20).color(fade(GRAY_400, opacity)),
        text("Click to upload a video file")
            .size(14)
            .color(fade(GRAY_500, opacity)),
    ]
    .spacing(8)
    .align_x(Alignment::Center);

    let dropzone = container(prompt)
        .center_x(Length::Fill)
        .center_y(128)
        .style(style::dropzone(opacity));

    let dropzone: Element<'_, Message> = match upload.clone() {
        Some(message) => mouse_area(dropzone).on_press(message).into(),
        None => dropzone.into(),
    };

    let upload_button = button(text("Upload Video"))
        .on_press_maybe(upload)
        .padding([8, 16])
        .style(style::primary_button(opacity));

    card(
        "Local Video File",
        "Generate notes from a downloaded video",
        dropzone,
        upload_button.into(),
        opacity,
    )
}

fn card<'a>(
    title: &'a str,
    description: &'a str,
    body: Element<'a, Message>,
    action: Element<'a, Message>,
    opacity: f32,
) -> Element<'a, Message> {
    let header = column![
        text(title).size(22).color(fade(GRAY_800, opacity)),
        text(description).size(14).color(fade(GRAY_500, opacity)),
    ]
    .spacing(4);

    let footer = container(action)
        .width(Length::Fill)
        .align_x(Horizontal::Right);

    container(column![header, body, footer].spacing(20))
        .padding(24)
        .width(Length::Fill)
        .style(style::card(opacity))
        .into()
}
