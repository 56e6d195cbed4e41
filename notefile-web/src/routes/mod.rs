use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, HttpResponseBuilder};

mod index;
mod notes;

pub use index::config as index_config;
pub use notes::config as notes_config;

/// Finish `builder` with a `text/plain` body.
pub(crate) fn plain_text(mut builder: HttpResponseBuilder, body: &str) -> HttpResponse {
    builder
        .content_type(ContentType::plaintext())
        .body(body.to_owned())
}
