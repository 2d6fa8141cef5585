use cosmic::iced::{Alignment, Length};
use cosmic::widget::{button, column, container, flex_row, icon, row, scrollable, text};
use cosmic::{Element, theme};

use crate::components::note_card::note_card;
use crate::core::note::Note;
use crate::message::Message;

/// The note grid plus the action row (lock, add, animation pause).
pub fn home_view<'a>(notes: &[Note], locked: bool, float_paused: bool) -> Element<'a, Message> {
    let header = column()
        .spacing(4)
        .align_x(Alignment::Center)
        .push(text::title3("Opal"))
        .push(text::caption("Your notes and tasks"));

    let grid: Element<'a, Message> = if notes.is_empty() {
        container(
            container(
                column()
                    .spacing(8)
                    .align_x(Alignment::Center)
                    .push(text::body("No notes yet"))
                    .push(text::caption("Press + to create your first note or task")),
            )
            .padding(32)
            .class(theme::Container::Card),
        )
        .center_x(Length::Fill)
        .padding(48)
        .into()
    } else {
        let cards: Vec<Element<'a, Message>> = notes.iter().map(note_card).collect();
        flex_row(cards).row_spacing(12).column_spacing(12).into()
    };

    let lock_icon = if locked {
        "changes-prevent-symbolic"
    } else {
        "system-lock-screen-symbolic"
    };
    let float_icon = if float_paused {
        "media-playback-start-symbolic"
    } else {
        "media-playback-pause-symbolic"
    };

    let actions = row()
        .spacing(8)
        .push(button::icon(icon::from_name(lock_icon)).on_press(Message::ToggleLock))
        .push(
            button::icon(icon::from_name("list-add-symbolic"))
                .on_press(Message::OpenEditor(None)),
        )
        .push(button::icon(icon::from_name(float_icon)).on_press(Message::ToggleFloat));

    let content = column()
        .spacing(16)
        .push(header)
        .push(grid);

    column()
        .push(
            container(scrollable(content.padding(16).width(Length::Fill)))
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .push(
            container(actions)
                .padding([8, 16])
                .align_x(Alignment::End)
                .width(Length::Fill),
        )
        .into()
}
