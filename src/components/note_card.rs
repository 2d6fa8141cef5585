use cosmic::iced::{Alignment, Length};
use cosmic::widget::{button, checkbox, column, container, icon, row, text};
use cosmic::{Element, theme};

use crate::core::note::{Note, NoteKind};
use crate::message::Message;

const CARD_WIDTH: f32 = 280.0;
const PREVIEW_LINES: usize = 4;

/// One note or task as a clickable card: title row with task checkbox and
/// edit/delete actions, a short content preview, and the modified stamp.
pub fn note_card(note: &Note) -> Element<'static, Message> {
    let id = note.id;
    let completed = note.kind.completed();

    let mut header = row().spacing(8).align_y(Alignment::Center);
    if let NoteKind::Task { completed } = note.kind {
        header = header.push(
            checkbox("", completed).on_toggle(move |_| Message::ToggleComplete(id)),
        );
    }
    let title: Element<'static, Message> = if completed {
        text::caption(note.display_title().to_string()).into()
    } else {
        text::body(note.display_title().to_string()).into()
    };
    header = header
        .push(container(title).width(Length::Fill))
        .push(
            button::icon(icon::from_name("document-edit-symbolic"))
                .on_press(Message::OpenEditor(Some(id))),
        )
        .push(
            button::icon(icon::from_name("edit-delete-symbolic"))
                .on_press(Message::DeleteNote(id)),
        );

    let preview = if note.content.is_empty() {
        "No content...".to_string()
    } else {
        note.content
            .lines()
            .take(PREVIEW_LINES)
            .collect::<Vec<_>>()
            .join("\n")
    };

    let col = column()
        .spacing(6)
        .push(header)
        .push(text::caption(preview).size(12.0))
        .push(text::caption(note.modified.format("%d/%m %H:%M").to_string()).size(11.0));

    let card_body = container(col)
        .padding(12)
        .width(Length::Fixed(CARD_WIDTH))
        .class(theme::Container::Card);

    button::custom(card_body)
        .padding(0)
        .class(theme::Button::Text)
        .on_press(Message::OpenEditor(Some(id)))
        .into()
}
