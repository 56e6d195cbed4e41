use crate::routes::plain_text;
use actix_web::web::Either;
use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use notefile::errors::NoteStoreError;
use notefile::notestore::BoxedNoteStore;
use notefile::{Note, NoteEdit, NoteID};
use serde::{Deserialize, Serialize};

/// A request body sent either as JSON or as an urlencoded form.
type Body<T> = Either<web::Json<T>, web::Form<T>>;

fn body_inner<T>(body: Body<T>) -> T {
    match body {
        Either::Left(json) => json.into_inner(),
        Either::Right(form) => form.into_inner(),
    }
}

/// Turn a store error into a plain-text response.
///
/// `write_message` is what the caller sees when the store could not be written.
fn notestore_error_handler(
    e: &NoteStoreError,
    read_message: &'static str,
    write_message: &'static str,
) -> HttpResponse {
    match e {
        NoteStoreError::NoteNotExist(_) | NoteStoreError::UnparsableNoteID => {
            plain_text(HttpResponse::NotFound(), "Note not found")
        }
        NoteStoreError::ReadError(_) | NoteStoreError::CorruptedStore(_) => {
            error!("Note store internal error {:?}", e);
            plain_text(HttpResponse::InternalServerError(), read_message)
        }
        NoteStoreError::WriteError(_) => {
            error!("Note store internal error {:?}", e);
            plain_text(HttpResponse::InternalServerError(), write_message)
        }
    }
}

#[get("/")]
#[instrument(skip(store))]
async fn list_notes(store: web::Data<BoxedNoteStore>) -> impl Responder {
    match store.list_notes().await {
        Ok(notes) => HttpResponse::Ok().json(notes),
        Err(e) => notestore_error_handler(&e, "Database error", "Database error"),
    }
}

/// Body of an add request. Every field is required.
#[derive(Deserialize)]
struct NotePostData {
    title: String,
    content: String,
    date: String,
    id: NoteID,
}

impl From<NotePostData> for Note {
    fn from(note: NotePostData) -> Self {
        Note::new(note.id, note.title, note.content, note.date)
    }
}

#[post("/add-note")]
#[instrument(skip(store, note), fields(note_id = tracing::field::Empty))]
async fn add_note(store: web::Data<BoxedNoteStore>, note: Body<NotePostData>) -> impl Responder {
    let note: Note = body_inner(note).into();
    tracing::Span::current().record("note_id", tracing::field::display(note.id));
    let res = store.add_note(note).await;
    match res {
        Ok(note) => HttpResponse::Created().json(note),
        Err(e) => notestore_error_handler(&e, "Failed to read data", "Failed to save data"),
    }
}

#[derive(Serialize)]
struct DeleteResponse {
    message: &'static str,
    id: String,
}

/// Delete every note with the ID in the path.
///
/// Succeeds whether or not anything was deleted, and echoes the ID as it was written in the path.
#[delete("/delete-note/{note_id}")]
#[instrument(
    skip(store, params),
    fields(
        note_id = %params.0
    )
)]
async fn delete_note(
    store: web::Data<BoxedNoteStore>,
    params: web::Path<(String,)>,
) -> impl Responder {
    let (note_id,) = params.into_inner();
    let res = store.delete_note(NoteID::parse_lenient(&note_id)).await;
    match res {
        Ok(removed) => {
            debug!(removed, "Deleted notes");
            HttpResponse::Ok().json(DeleteResponse {
                message: "Note deleted successfully",
                id: note_id,
            })
        }
        Err(e) => notestore_error_handler(&e, "Failed to read data", "Failed to delete data"),
    }
}

#[put("/edit-notes/{note_id}")]
#[instrument(
    skip(store, params, edit),
    fields(
        note_id = %params.0
    )
)]
async fn edit_note(
    store: web::Data<BoxedNoteStore>,
    params: web::Path<(String,)>,
    edit: Body<NoteEdit>,
) -> impl Responder {
    let (note_id,) = params.into_inner();
    let res = store
        .edit_note(NoteID::parse_lenient(&note_id), body_inner(edit))
        .await;
    match res {
        Ok(note) => HttpResponse::Ok().json(note),
        Err(e) => notestore_error_handler(&e, "Failed to read data", "Failed to update data"),
    }
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(list_notes)
        .service(add_note)
        .service(delete_note)
        .service(edit_note);
}
