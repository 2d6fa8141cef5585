use std::time::Duration;

use cosmic::app::{Core, Task as CosmicTask};
use cosmic::widget::text_editor;
use cosmic::{Application, Element, executor};

use crate::config::OpalConfig;
use crate::core::editor::{AUTOSAVE_DEBOUNCE_MS, EditorSession};
use crate::core::lock::{ERROR_CLEAR_MS, LockGate, PinOutcome};
use crate::core::store::NoteStore;
use crate::message::{ActiveView, Message};
use crate::pages;

/// Live editor state: the domain session plus the widget buffer backing the
/// body `text_editor`. The widget buffer is mirrored into the session on every
/// edit action so the session alone decides what a commit persists.
pub struct EditorState {
    pub session: EditorSession,
    pub body: text_editor::Content,
}

impl EditorState {
    fn new(session: EditorSession) -> Self {
        let body = text_editor::Content::with_text(&session.content);
        Self { session, body }
    }
}

pub struct Opal {
    core: Core,
    config: OpalConfig,
    cosmic_config: cosmic::cosmic_config::Config,
    active_view: ActiveView,
    /// Set when the padlock is pressed; the lock screen itself only appears
    /// on the next access, so locking never yanks the user off their view.
    locked: bool,
    notes: NoteStore,
    editor: Option<EditorState>,
    lock_gate: LockGate,
}

pub struct Flags {
    pub config: OpalConfig,
    pub cosmic_config: cosmic::cosmic_config::Config,
}

/// Commit-after-quiet timer. Fires with the revision it was scheduled for;
/// the update loop drops elapses whose revision has been superseded.
fn debounce_timer(revision: u64) -> CosmicTask<Message> {
    CosmicTask::perform(
        async move {
            tokio::time::sleep(Duration::from_millis(AUTOSAVE_DEBOUNCE_MS)).await;
            revision
        },
        |revision| cosmic::Action::App(Message::EditorDebounceElapsed(revision)),
    )
}

/// Error-display window on the lock screen, tagged with the attempt it belongs to.
fn error_clear_timer(attempt: u64) -> CosmicTask<Message> {
    CosmicTask::perform(
        async move {
            tokio::time::sleep(Duration::from_millis(ERROR_CLEAR_MS)).await;
            attempt
        },
        |attempt| cosmic::Action::App(Message::LockErrorElapsed(attempt)),
    )
}

impl Application for Opal {
    type Executor = executor::Default;
    type Flags = Flags;
    type Message = Message;

    const APP_ID: &'static str = "dev.opal.app";

    fn core(&self) -> &Core {
        &self.core
    }

    fn core_mut(&mut self) -> &mut Core {
        &mut self.core
    }

    fn init(core: Core, flags: Self::Flags) -> (Self, CosmicTask<Self::Message>) {
        let app = Self {
            core,
            config: flags.config,
            cosmic_config: flags.cosmic_config,
            active_view: ActiveView::Home,
            locked: false,
            notes: NoteStore::with_samples(),
            editor: None,
            lock_gate: LockGate::new(),
        };
        (app, CosmicTask::none())
    }

    fn update(&mut self, message: Message) -> CosmicTask<Message> {
        match message {
            Message::OpenEditor(target) => {
                let session = match target.and_then(|id| self.notes.get(id)) {
                    Some(note) => EditorSession::edit(note),
                    None => EditorSession::create(),
                };
                self.editor = Some(EditorState::new(session));
                self.active_view = ActiveView::Editor;
            }

            Message::DeleteNote(id) => {
                self.notes.remove(id);
            }

            Message::ToggleComplete(id) => {
                self.notes.toggle_complete(id);
            }

            Message::ToggleLock => {
                if self.locked {
                    self.active_view = ActiveView::Lock;
                } else {
                    self.locked = true;
                }
            }

            Message::ToggleFloat => {
                self.config.float_paused = !self.config.float_paused;
                self.save_config();
            }

            Message::EditorTitleChanged(value) => {
                if let Some(ref mut editor) = self.editor {
                    let revision = editor.session.set_title(value);
                    return debounce_timer(revision);
                }
            }

            Message::EditorBodyAction(action) => {
                if let Some(ref mut editor) = self.editor {
                    let is_edit = action.is_edit();
                    editor.body.perform(action);
                    if is_edit {
                        let revision = editor.session.set_content(editor.body.text());
                        return debounce_timer(revision);
                    }
                }
            }

            Message::EditorKindChanged(kind) => {
                if let Some(ref mut editor) = self.editor {
                    if editor.session.kind != kind {
                        let revision = editor.session.set_kind(kind);
                        return debounce_timer(revision);
                    }
                }
            }

            Message::EditorDebounceElapsed(revision) => {
                let current = self
                    .editor
                    .as_ref()
                    .is_some_and(|e| e.session.should_commit(revision));
                if current && self.active_view == ActiveView::Editor {
                    self.commit_editor();
                }
            }

            Message::EditorSave => {
                if self.active_view == ActiveView::Editor {
                    self.commit_editor();
                }
            }

            Message::EditorBack => {
                // Back flushes whatever is buffered, pending debounce or not.
                if self.active_view == ActiveView::Editor {
                    self.commit_editor();
                }
            }

            Message::LockDigit(digit) => {
                if self.active_view == ActiveView::Lock {
                    match self.lock_gate.push_digit(digit, &self.config.pin) {
                        PinOutcome::Accepted => self.unlock(),
                        PinOutcome::Rejected { attempt } => {
                            log::debug!("PIN mismatch, attempt {}", attempt);
                            return error_clear_timer(attempt);
                        }
                        PinOutcome::Pending => {}
                    }
                }
            }

            Message::LockBackspace => {
                if self.active_view == ActiveView::Lock {
                    self.lock_gate.backspace();
                }
            }

            Message::LockClear => {
                if self.active_view == ActiveView::Lock {
                    self.lock_gate.reset();
                }
            }

            Message::LockErrorElapsed(attempt) => {
                self.lock_gate.clear_rejected(attempt);
            }

            Message::BypassLock => {
                // Deliberate escape hatch: the lock is a courtesy, not security.
                if self.active_view == ActiveView::Lock {
                    self.unlock();
                }
            }
        }

        CosmicTask::none()
    }

    fn on_escape(&mut self) -> CosmicTask<Message> {
        match self.active_view {
            ActiveView::Editor => self.commit_editor(),
            // The lock screen is terminal until unlock; Escape is not a back door.
            ActiveView::Lock | ActiveView::Home => {}
        }
        CosmicTask::none()
    }

    fn subscription(&self) -> cosmic::iced::Subscription<Message> {
        // Keyboard entry for the PIN pad; the update loop ignores these
        // outside the lock view, so typing in the editor is unaffected.
        cosmic::iced::event::listen_with(|event, _status, _id| match event {
            cosmic::iced::Event::Keyboard(cosmic::iced::keyboard::Event::KeyPressed {
                key: cosmic::iced::keyboard::Key::Character(ref c),
                ..
            }) => c
                .as_str()
                .chars()
                .next()
                .and_then(|ch| ch.to_digit(10))
                .map(|d| Message::LockDigit(d as u8)),
            cosmic::iced::Event::Keyboard(cosmic::iced::keyboard::Event::KeyPressed {
                key:
                    cosmic::iced::keyboard::Key::Named(cosmic::iced::keyboard::key::Named::Backspace),
                ..
            }) => Some(Message::LockBackspace),
            _ => None,
        })
    }

    fn view(&self) -> Element<'_, Message> {
        match self.active_view {
            ActiveView::Lock => pages::lock::lock_view(&self.lock_gate),
            ActiveView::Editor => match self.editor {
                Some(ref editor) => pages::editor::editor_view(
                    editor,
                    editor.session.target().and_then(|id| self.notes.get(id)),
                ),
                // No live session: nothing to edit, fall back to home.
                None => pages::home::home_view(
                    self.notes.notes(),
                    self.locked,
                    self.config.float_paused,
                ),
            },
            ActiveView::Home => pages::home::home_view(
                self.notes.notes(),
                self.locked,
                self.config.float_paused,
            ),
        }
    }
}

impl Opal {
    /// Flush the live session into the store and return home.
    fn commit_editor(&mut self) {
        if let Some(editor) = self.editor.take() {
            let (draft, target) = editor.session.into_commit();
            let id = self.notes.upsert(draft, target);
            log::debug!("committed note {}", id);
        }
        self.active_view = ActiveView::Home;
    }

    fn unlock(&mut self) {
        self.locked = false;
        self.lock_gate.reset();
        self.active_view = ActiveView::Home;
    }

    fn save_config(&mut self) {
        use cosmic::cosmic_config::CosmicConfigEntry;
        if let Err(e) = self.config.write_entry(&self.cosmic_config) {
            log::error!("Failed to save config: {}", e);
        }
    }
}
