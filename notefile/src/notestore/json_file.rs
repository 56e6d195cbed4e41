//! Storage of notes in a single JSON file.
//!
//! The file holds a JSON array of notes.
//! Every operation reads the whole file, and every mutation writes the whole file back.
use crate::errors::NoteStoreError;
use crate::note::{Note, NoteEdit, NoteID};
use crate::notestore::{remove_all, replace_first, NoteStore};
use futures::future::BoxFuture;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::Mutex;

/// A note store backed by one JSON file.
///
/// Nothing is cached: the file is the only source of truth.
/// File access is serialized within the process, so a write is never interleaved with
/// another write or a read.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonFileStore {
    /// Open the store at `path`, creating the file with an empty array if it is absent.
    ///
    /// An existing file is not touched, even if it isn't a valid store.
    pub async fn open<P: AsRef<Path>>(path: P) -> Result<Self, NoteStoreError> {
        let path = path.as_ref().to_path_buf();
        match fs::metadata(&path).await {
            Ok(_) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => {
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    fs::create_dir_all(parent)
                        .await
                        .map_err(NoteStoreError::WriteError)?;
                }
                fs::write(&path, b"[]")
                    .await
                    .map_err(NoteStoreError::WriteError)?;
                info!(path = %path.display(), "Created empty note store");
            }
            Err(e) => return Err(NoteStoreError::ReadError(e)),
        }
        Ok(JsonFileStore {
            path,
            lock: Mutex::new(()),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read(&self) -> Result<Vec<Note>, NoteStoreError> {
        let data = fs::read(&self.path)
            .await
            .map_err(NoteStoreError::ReadError)?;
        Ok(serde_json::from_slice(&data)?)
    }

    /// Sibling file that a write goes to before it replaces the store.
    pub fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    /// Replace the whole file.
    ///
    /// The array is written next to the store and renamed over it, so a crash never leaves
    /// a partially written store behind.
    async fn write(&self, notes: &[Note]) -> Result<(), NoteStoreError> {
        let data = serde_json::to_vec_pretty(notes)?;
        let temp_path = self.temp_path();
        fs::write(&temp_path, data)
            .await
            .map_err(NoteStoreError::WriteError)?;
        fs::rename(&temp_path, &self.path)
            .await
            .map_err(NoteStoreError::WriteError)
    }
}

impl NoteStore for JsonFileStore {
    fn list_notes(&self) -> BoxFuture<Result<Vec<Note>, NoteStoreError>> {
        Box::pin(async move {
            let _guard = self.lock.lock().await;
            self.read().await
        })
    }

    fn add_note(&self, note: Note) -> BoxFuture<Result<Note, NoteStoreError>> {
        Box::pin(async move {
            let _guard = self.lock.lock().await;
            let mut notes = self.read().await?;
            notes.push(note.clone());
            self.write(&notes).await?;
            Ok(note)
        })
    }

    fn delete_note(&self, id: Option<NoteID>) -> BoxFuture<Result<usize, NoteStoreError>> {
        Box::pin(async move {
            let _guard = self.lock.lock().await;
            let mut notes = self.read().await?;
            let removed = remove_all(&mut notes, id);
            self.write(&notes).await?;
            Ok(removed)
        })
    }

    fn edit_note(
        &self,
        id: Option<NoteID>,
        edit: NoteEdit,
    ) -> BoxFuture<Result<Note, NoteStoreError>> {
        Box::pin(async move {
            let _guard = self.lock.lock().await;
            let mut notes = self.read().await?;
            let edited = replace_first(&mut notes, id, edit)?;
            self.write(&notes).await?;
            Ok(edited)
        })
    }
}
