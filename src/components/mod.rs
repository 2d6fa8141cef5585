pub mod note_card;
