//! Notefile: a flat note store kept in a single JSON file.
#[macro_use]
extern crate tracing;

pub mod errors;
pub mod note;
pub mod notestore;

pub use note::{Note, NoteEdit, NoteID};
pub use notestore::{InMemoryStore, JsonFileStore, NoteStore};
