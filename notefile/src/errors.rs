use thiserror::Error;

use crate::NoteID;

#[derive(Error, Debug)]
pub enum NoteStoreError {
    #[error("note `{0}` doesn't exist")]
    NoteNotExist(NoteID),
    #[error("no note has an unparsable ID")]
    UnparsableNoteID,
    #[error("failed to read note store")]
    ReadError(#[source] std::io::Error),
    #[error("failed to write note store")]
    WriteError(#[source] std::io::Error),
    #[error("note store is corrupted")]
    CorruptedStore(#[from] serde_json::Error),
}

impl NoteStoreError {
    /// Whether the error means the requested note isn't there.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            NoteStoreError::NoteNotExist(_) | NoteStoreError::UnparsableNoteID
        )
    }
}
