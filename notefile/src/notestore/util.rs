//! Sample notes for development stores.
use crate::errors::NoteStoreError;
use crate::notestore::BoxedNoteStore;
use crate::Note;

pub async fn populate_test_data(store: &BoxedNoteStore) -> Result<(), NoteStoreError> {
    let notes: [(i64, &str, &str, &str); 3] = [
        (1, "Welcome", "Notes are kept in the order they are added.", "2024-01-01"),
        (2, "Shopping", "Milk, eggs, bread", "2024-01-02"),
        (3, "Ideas", "Edit a note to replace its title, content and date.", "2024-01-03"),
    ];
    for (id, title, content, date) in notes {
        store
            .add_note(Note::new(
                id.into(),
                title.to_owned(),
                content.to_owned(),
                date.to_owned(),
            ))
            .await?;
    }
    Ok(())
}
