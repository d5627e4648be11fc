use iced::widget::{column, container, scrollable, text};
use iced::{Alignment, Element, Length, Padding};
use vidnotes_core::Tab;

use super::{App, Message, TITLE};
use crate::ui::{
    banner, dashboard, notes_list,
    style::{self, GRAY_800},
    tabs,
    transition::{Frame, SLIDE_DISTANCE},
};

const CONTENT_WIDTH: f32 = 896.0;

impl App {
    pub(super) fn view(&self) -> Element<'_, Message> {
        let heading = text(TITLE).size(36).color(GRAY_800);

        let frame = self.transition.frame(self.now);
        let panel: Element<'_, Message> = match self.transition.shown() {
            Tab::Dashboard => dashboard::view(&self.session, self.spinner(), frame.opacity),
            Tab::Notes => notes_list::view(self.session.notes(), frame.opacity),
        };
        let panel = container(panel)
            .padding(slide_padding(frame))
            .width(Length::Fill);

        let mut content = column![heading, tabs::view(self.session.active_tab()), panel]
            .spacing(24)
            .align_x(Alignment::Center)
            .max_width(CONTENT_WIDTH);

        if let Some(result) = self.session.result() {
            let frame = self
                .banner
                .map(|reveal| reveal.frame(self.now))
                .unwrap_or(Frame::VISIBLE);
            content = content.push(banner::view(result, frame));
        }

        container(scrollable(
            container(content).center_x(Length::Fill).padding(32),
        ))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(style::page)
        .into()
    }
}

/// Keeps the panel's resting position `SLIDE_DISTANCE` down so it can move
/// both up and down without shifting the layout around it.
fn slide_padding(frame: Frame) -> Padding {
    let top = (SLIDE_DISTANCE + frame.offset_y).max(0.0);
    Padding {
        top,
        bottom: 2.0 * SLIDE_DISTANCE - top,
        ..Padding::ZERO
    }
}
