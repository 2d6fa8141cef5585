use uuid::Uuid;

use super::note::{Note, NoteDraft, NoteKind};

/// Quiet period after the last edit before the session auto-commits.
pub const AUTOSAVE_DEBOUNCE_MS: u64 = 1000;

/// Transient edit buffer for one note. Every change bumps `revision`; the
/// application schedules a debounce timer per revision and commits only when
/// the elapsed timer still matches, so superseded timers are ignored rather
/// than cancelled.
#[derive(Debug)]
pub struct EditorSession {
    target: Option<Uuid>,
    pub title: String,
    pub content: String,
    pub kind: NoteKind,
    revision: u64,
    dirty: bool,
}

impl EditorSession {
    pub fn create() -> Self {
        Self {
            target: None,
            title: String::new(),
            content: String::new(),
            kind: NoteKind::Note,
            revision: 0,
            dirty: false,
        }
    }

    /// Working copies of an existing note; the completion flag rides along in
    /// `kind` and is carried through commits unchanged.
    pub fn edit(note: &Note) -> Self {
        Self {
            target: Some(note.id),
            title: note.title.clone(),
            content: note.content.clone(),
            kind: note.kind,
            revision: 0,
            dirty: false,
        }
    }

    pub fn target(&self) -> Option<Uuid> {
        self.target
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Whether a debounce elapse scheduled at `revision` should still commit:
    /// the session has unsaved changes and no later edit superseded the timer.
    pub fn should_commit(&self, revision: u64) -> bool {
        self.dirty && self.revision == revision
    }

    fn touch(&mut self) -> u64 {
        self.dirty = true;
        self.revision += 1;
        self.revision
    }

    /// Each setter returns the new revision for the debounce timer it restarts.
    pub fn set_title(&mut self, title: String) -> u64 {
        self.title = title;
        self.touch()
    }

    pub fn set_content(&mut self, content: String) -> u64 {
        self.content = content;
        self.touch()
    }

    pub fn set_kind(&mut self, kind: NoteKind) -> u64 {
        self.kind = kind;
        self.touch()
    }

    /// The fields a commit persists: whitespace trimmed, empty title
    /// defaulted to "Untitled".
    pub fn draft(&self) -> NoteDraft {
        let title = self.title.trim();
        NoteDraft {
            title: if title.is_empty() {
                "Untitled".to_string()
            } else {
                title.to_string()
            },
            content: self.content.trim().to_string(),
            kind: self.kind,
        }
    }

    pub fn into_commit(self) -> (NoteDraft, Option<Uuid>) {
        (self.draft(), self.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::store::NoteStore;

    #[test]
    fn every_change_bumps_the_revision() {
        let mut session = EditorSession::create();
        assert!(!session.is_dirty());

        let r1 = session.set_title("h".into());
        let r2 = session.set_title("he".into());
        let r3 = session.set_content("body".into());
        assert!(r1 < r2 && r2 < r3);
        assert_eq!(session.revision(), r3);
        assert!(session.is_dirty());

        // Only the latest revision's timer should commit.
        assert_ne!(session.revision(), r1);
    }

    #[test]
    fn only_the_latest_debounce_revision_commits() {
        let mut session = EditorSession::create();
        let first = session.set_title("G".into());
        let second = session.set_title("Gr".into());
        let third = session.set_content("list".into());

        // Timers for superseded revisions elapse but must not commit.
        assert!(!session.should_commit(first));
        assert!(!session.should_commit(second));
        assert!(session.should_commit(third));
    }

    #[test]
    fn pristine_session_does_not_commit_on_elapse() {
        let session = EditorSession::create();
        assert!(!session.should_commit(session.revision()));
    }

    #[test]
    fn commit_trims_and_defaults_untitled() {
        let mut session = EditorSession::create();
        session.set_title("   ".into());
        session.set_content(String::new());

        let draft = session.draft();
        assert_eq!(draft.title, "Untitled");
        assert_eq!(draft.content, "");
    }

    #[test]
    fn commit_uses_final_buffer_contents() {
        let mut session = EditorSession::create();
        session.set_title("Groceries".into());
        session.set_content("milk".into());
        session.set_content("milk\neggs\n".into());

        let draft = session.draft();
        assert_eq!(draft.content, "milk\neggs");
    }

    #[test]
    fn commit_is_idempotent_except_modified() {
        let mut store = NoteStore::new();
        let mut session = EditorSession::create();
        session.set_title("Note".into());
        session.set_content("text".into());

        let id = store.upsert(session.draft(), session.target());
        let first = store.get(id).unwrap().clone();

        let mut again = EditorSession::edit(&first);
        let id2 = store.upsert(again.draft(), again.target());
        assert_eq!(id, id2);

        let second = store.get(id).unwrap();
        assert_eq!(second.title, first.title);
        assert_eq!(second.content, first.content);
        assert_eq!(second.kind, first.kind);
        assert_eq!(second.created, first.created);
        assert!(second.modified >= first.modified);

        // Unchanged kind setter still carries the completion flag through.
        again.set_kind(again.kind.into_task());
        assert_eq!(again.draft().kind, NoteKind::Task { completed: false });
    }

    #[test]
    fn editing_session_carries_completion_flag() {
        let mut store = NoteStore::new();
        let id = store.upsert(
            crate::core::note::NoteDraft {
                title: "Chores".into(),
                content: String::new(),
                kind: NoteKind::Task { completed: false },
            },
            None,
        );
        store.toggle_complete(id);

        let session = EditorSession::edit(store.get(id).unwrap());
        assert_eq!(session.draft().kind, NoteKind::Task { completed: true });
    }
}
