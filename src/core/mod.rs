pub mod editor;
pub mod lock;
pub mod note;
pub mod store;
