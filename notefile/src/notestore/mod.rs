//! Storage backends of notes.
use crate::errors::NoteStoreError;
use crate::note::*;
use futures::future::BoxFuture;

mod in_memory;
mod json_file;
pub mod util;

pub use in_memory::InMemoryStore;
pub use json_file::JsonFileStore;


pub type BoxedNoteStore = Box<dyn NoteStore + Send + Sync>;

/// An abstraction for storage backends.
///
/// A store holds an ordered sequence of [`Note`]s.
/// Lookups by [`NoteID`] are linear scans, and the store never checks that IDs are unique.
pub trait NoteStore {
    /// Get all notes in insertion order.
    fn list_notes(&self) -> BoxFuture<Result<Vec<Note>, NoteStoreError>>;
    /// Append a note to the end of the sequence.
    ///
    /// No duplicate check is done: a note with an ID already in use is appended anyway.
    fn add_note(&self, note: Note) -> BoxFuture<Result<Note, NoteStoreError>>;
    /// Delete every note with a given ID.
    ///
    /// All matching notes are removed, not just the first one.
    /// Returns how many notes were removed, which can be zero.
    /// `None` stands for an ID that could not be parsed and matches nothing.
    fn delete_note(&self, id: Option<NoteID>) -> BoxFuture<Result<usize, NoteStoreError>>;
    /// Replace the first note with a given ID.
    ///
    /// The replacement is total: the new note is made of the ID and the fields of `edit`.
    /// If no note matches, nothing is written.
    fn edit_note(
        &self,
        id: Option<NoteID>,
        edit: NoteEdit,
    ) -> BoxFuture<Result<Note, NoteStoreError>>;
}

/// Remove all notes with `id`, keeping the order of the rest.
pub(crate) fn remove_all(notes: &mut Vec<Note>, id: Option<NoteID>) -> usize {
    let before = notes.len();
    if let Some(id) = id {
        notes.retain(|note| note.id != id);
    }
    before - notes.len()
}

/// Replace the first note with `id` in place.
pub(crate) fn replace_first(
    notes: &mut [Note],
    id: Option<NoteID>,
    edit: NoteEdit,
) -> Result<Note, NoteStoreError> {
    let id = id.ok_or(NoteStoreError::UnparsableNoteID)?;
    let slot = notes
        .iter_mut()
        .find(|note| note.id == id)
        .ok_or(NoteStoreError::NoteNotExist(id))?;
    *slot = edit.into_note(id);
    Ok(slot.clone())
}
