use crate::routes::plain_text;
use actix_web::{get, web, HttpResponse};
use notefile::notestore::BoxedNoteStore;

/// Report whether the note store can be read.
#[get("/health_check")]
#[instrument(skip(store))]
async fn health_check(store: web::Data<BoxedNoteStore>) -> HttpResponse {
    match store.list_notes().await {
        Ok(_) => HttpResponse::Ok().finish(),
        Err(e) => {
            warn!("Note store unreadable {:?}", e);
            plain_text(HttpResponse::ServiceUnavailable(), "Note store unavailable")
        }
    }
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check);
}
