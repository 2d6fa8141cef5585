use cosmic::iced::{Alignment, Length};
use cosmic::widget::{button, column, container, icon, row, text, text_editor, text_input};
use cosmic::Element;

use crate::application::EditorState;
use crate::core::note::{Note, NoteKind};
use crate::message::Message;

/// Full-screen editor: back / kind toggle / save header, title input, body.
/// `persisted` is the stored note behind the session, if any, for the footer.
pub fn editor_view<'a>(
    editor: &'a EditorState,
    persisted: Option<&Note>,
) -> Element<'a, Message> {
    let session = &editor.session;
    let is_task = session.kind.is_task();

    let note_btn = if is_task {
        button::standard("Note")
    } else {
        button::suggested("Note")
    }
    .on_press(Message::EditorKindChanged(NoteKind::Note));

    let task_btn = if is_task {
        button::suggested("Task")
    } else {
        button::standard("Task")
    }
    .on_press(Message::EditorKindChanged(session.kind.into_task()));

    let header = row()
        .spacing(8)
        .align_y(Alignment::Center)
        .push(
            button::icon(icon::from_name("go-previous-symbolic"))
                .on_press(Message::EditorBack),
        )
        .push(container(row().spacing(4).push(note_btn).push(task_btn)).width(Length::Fill))
        .push(
            button::icon(icon::from_name("document-save-symbolic"))
                .on_press(Message::EditorSave),
        );

    let title_placeholder = if is_task { "Task title..." } else { "Note title..." };
    let title_input = text_input::text_input(title_placeholder, session.title.clone())
        .on_input(Message::EditorTitleChanged)
        .on_submit(|_| Message::EditorSave)
        .width(Length::Fill);

    let body = container(
        text_editor(&editor.body)
            .on_action(Message::EditorBodyAction)
            .height(Length::Fill),
    )
    .width(Length::Fill)
    .height(Length::Fill);

    let status = match persisted {
        Some(note) => format!(
            "{} · auto-saved · modified {}",
            if is_task { "Task" } else { "Note" },
            note.modified.format("%H:%M"),
        ),
        None => format!("{} · auto-saved · new", if is_task { "Task" } else { "Note" }),
    };

    column()
        .spacing(12)
        .padding(16)
        .push(header)
        .push(title_input)
        .push(body)
        .push(text::caption(status))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
