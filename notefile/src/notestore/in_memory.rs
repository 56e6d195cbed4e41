//! In-memory storage of notes
use crate::errors::NoteStoreError;
use crate::note::{Note, NoteEdit, NoteID};
use crate::notestore::{remove_all, replace_first, NoteStore};
use futures::future::BoxFuture;
use tokio::sync::RwLock;

/// In-memory storage.
///
/// This is mostly designed for development use, because there is no persistence layer.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    notes: RwLock<Vec<Note>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Default::default()
    }
}

impl NoteStore for InMemoryStore {
    fn list_notes(&self) -> BoxFuture<Result<Vec<Note>, NoteStoreError>> {
        Box::pin(async move {
            let notes = self.notes.read().await;
            Ok(notes.clone())
        })
    }

    fn add_note(&self, note: Note) -> BoxFuture<Result<Note, NoteStoreError>> {
        Box::pin(async move {
            let mut notes = self.notes.write().await;
            notes.push(note.clone());
            Ok(note)
        })
    }

    fn delete_note(&self, id: Option<NoteID>) -> BoxFuture<Result<usize, NoteStoreError>> {
        Box::pin(async move {
            let mut notes = self.notes.write().await;
            Ok(remove_all(&mut notes, id))
        })
    }

    fn edit_note(
        &self,
        id: Option<NoteID>,
        edit: NoteEdit,
    ) -> BoxFuture<Result<Note, NoteStoreError>> {
        Box::pin(async move {
            let mut notes = self.notes.write().await;
            replace_first(&mut notes, id, edit)
        })
    }
}
