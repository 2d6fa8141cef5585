use chrono::NaiveDateTime;
use uuid::Uuid;

/// Tagged entity kind. `completed` lives on the `Task` variant only, so a
/// plain note cannot carry a half-meaningful completion flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteKind {
    Note,
    Task { completed: bool },
}

impl NoteKind {
    pub fn is_task(&self) -> bool {
        matches!(self, Self::Task { .. })
    }

    pub fn completed(&self) -> bool {
        matches!(self, Self::Task { completed: true })
    }

    /// Switch to the task variant, keeping the completion flag if already a task.
    pub fn into_task(self) -> Self {
        match self {
            Self::Task { completed } => Self::Task { completed },
            Self::Note => Self::Task { completed: false },
        }
    }
}

/// The fields an editor session commits; ids and timestamps are owned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
    pub kind: NoteKind,
}

#[derive(Debug, Clone)]
pub struct Note {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub kind: NoteKind,
    pub created: NaiveDateTime,
    pub modified: NaiveDateTime,
}

impl Note {
    pub fn new(draft: NoteDraft) -> Self {
        let now = chrono::Local::now().naive_local();
        Self {
            id: Uuid::new_v4(),
            title: draft.title,
            content: draft.content,
            kind: draft.kind,
            created: now,
            modified: now,
        }
    }

    /// Title as shown on cards; an empty title reads "Untitled".
    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            "Untitled"
        } else {
            &self.title
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_note_timestamps_match() {
        let note = Note::new(NoteDraft {
            title: "a".into(),
            content: String::new(),
            kind: NoteKind::Note,
        });
        assert_eq!(note.created, note.modified);
    }

    #[test]
    fn empty_title_displays_untitled() {
        let note = Note::new(NoteDraft {
            title: String::new(),
            content: "body".into(),
            kind: NoteKind::Note,
        });
        assert_eq!(note.display_title(), "Untitled");
    }

    #[test]
    fn kind_switch_keeps_completion() {
        let kind = NoteKind::Task { completed: true };
        assert_eq!(kind.into_task(), NoteKind::Task { completed: true });
        assert_eq!(NoteKind::Note.into_task(), NoteKind::Task { completed: false });
        assert!(!NoteKind::Note.completed());
    }
}
