use uuid::Uuid;

use crate::core::note::NoteKind;

/// Top-level navigational state: which screen is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveView {
    Home,
    Editor,
    Lock,
}

#[derive(Debug, Clone)]
pub enum Message {
    // Home
    OpenEditor(Option<Uuid>),
    DeleteNote(Uuid),
    ToggleComplete(Uuid),
    ToggleLock,
    ToggleFloat,

    // Editor
    EditorTitleChanged(String),
    EditorBodyAction(cosmic::widget::text_editor::Action),
    EditorKindChanged(NoteKind),
    EditorDebounceElapsed(u64),
    EditorSave,
    EditorBack,

    // Lock screen
    LockDigit(u8),
    LockBackspace,
    LockClear,
    LockErrorElapsed(u64),
    BypassLock,
}
