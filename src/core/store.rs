use chrono::Duration;
use uuid::Uuid;

use super::note::{Note, NoteDraft, NoteKind};

/// In-memory note collection, newest first. Owned exclusively by the
/// application; views get read-only slices per render.
#[derive(Debug, Default)]
pub struct NoteStore {
    notes: Vec<Note>,
}

impl NoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with demonstration notes for a first launch.
    pub fn with_samples() -> Self {
        let now = chrono::Local::now().naive_local();
        let sample = |title: &str, content: &str, kind: NoteKind, age_days: i64| {
            let stamp = now - Duration::days(age_days);
            Note {
                id: Uuid::new_v4(),
                title: title.to_string(),
                content: content.to_string(),
                kind,
                created: stamp,
                modified: stamp,
            }
        };

        Self {
            notes: vec![
                sample(
                    "Welcome to Opal!",
                    "This is your note-taking app. Try creating new notes and tasks \
                     with the + button, or lock the screen with the padlock.",
                    NoteKind::Note,
                    0,
                ),
                sample(
                    "Shopping list",
                    "• Bread\n• Milk\n• Eggs\n• Fruit\n• Vegetables",
                    NoteKind::Task { completed: false },
                    1,
                ),
                sample(
                    "Project ideas",
                    "Push notifications, note categories, cloud sync, automatic dark mode...",
                    NoteKind::Note,
                    2,
                ),
            ],
        }
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn get(&self, id: Uuid) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Merge a draft into the entity with `existing` id, or prepend a new
    /// entity so fresh notes surface first. Returns the id written to.
    /// A stale `existing` id (note deleted meanwhile) falls through to insert.
    pub fn upsert(&mut self, draft: NoteDraft, existing: Option<Uuid>) -> Uuid {
        if let Some(id) = existing {
            if let Some(note) = self.notes.iter_mut().find(|n| n.id == id) {
                note.title = draft.title;
                note.content = draft.content;
                note.kind = draft.kind;
                note.modified = chrono::Local::now().naive_local();
                return id;
            }
        }
        let note = Note::new(draft);
        let id = note.id;
        self.notes.insert(0, note);
        id
    }

    /// Idempotent: removing an absent id leaves the store unchanged.
    pub fn remove(&mut self, id: Uuid) {
        self.notes.retain(|n| n.id != id);
    }

    /// Flip a task's completion flag. Plain notes have no flag to flip, so
    /// this is a no-op for them.
    pub fn toggle_complete(&mut self, id: Uuid) {
        let Some(note) = self.notes.iter_mut().find(|n| n.id == id) else {
            return;
        };
        match note.kind {
            NoteKind::Task { completed } => {
                note.kind = NoteKind::Task { completed: !completed };
                note.modified = chrono::Local::now().naive_local();
            }
            NoteKind::Note => {
                log::debug!("toggle_complete on non-task note {}", id);
            }
        }
    }
}
