use iced::widget::{Row, button, text};
use iced::Element;
use vidnotes_core::Tab;

use crate::app::Message;
use crate::ui::style;

pub fn view<'a>(active: Tab) -> Element<'a, Message> {
    Tab::ALL
        .iter()
        .fold(Row::new().spacing(16), |row, tab| {
            row.push(
                button(text(tab.label()).size(18))
                    .on_press(Message::TabSelected(*tab))
                    .padding([6, 12])
                    .style(style::tab_button(*tab == active)),
            )
        })
        .into()
}
