use iced::widget::{Column, button, column, container, text};
use iced::{Element, Length};
use vidnotes_core::{NoteBook, NoteRecord, format_generated_on};

use crate::app::Message;
use crate::ui::style::{self, GRAY_500, GRAY_800, fade};

pub fn view(notes: &NoteBook, opacity: f32) -> Element<'_, Message> {
    if notes.is_empty() {
        return container(text("No notes yet").color(fade(GRAY_500, opacity)))
            .padding(24)
            .width(Length::Fill)
            .into();
    }

    notes
        .iter()
        .fold(Column::new().spacing(16), |list, note| {
            list.push(note_card(note, opacity))
        })
        .into()
}

fn note_card(note: &NoteRecord, opacity: f32) -> Element<'_, Message> {
    // Download has no document behind it yet; the press is only logged.
    let download = button(text("Download PDF").size(14))
        .on_press(Message::DownloadPressed(note.id))
        .padding([6, 12])
        .style(style::outline_button(opacity));

    let content = column![
        text(note.title.as_str())
            .size(20)
            .color(fade(GRAY_800, opacity)),
        text(format_generated_on(note.date))
            .size(14)
            .color(fade(GRAY_500, opacity)),
        download,
    ]
    .spacing(8);

    container(content)
        .padding(24)
        .width(Length::Fill)
        .style(style::card(opacity))
        .into()
}
