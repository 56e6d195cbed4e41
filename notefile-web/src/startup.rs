use crate::routes::*;
use actix_cors::Cors;
use actix_web::dev::Server;
use actix_web::error::InternalError;
use actix_web::http::{header, Method};
use actix_web::middleware::{NormalizePath, TrailingSlash};
use actix_web::web::Data;
use actix_web::{web, App, HttpResponse, HttpServer};
use notefile::notestore::BoxedNoteStore;
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allowed_methods(vec![Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allowed_headers(vec![header::CONTENT_TYPE, header::AUTHORIZATION])
        .supports_credentials()
}

/// Reject bodies that don't fit the request struct with a plain-text 400.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let response = plain_text(HttpResponse::BadRequest(), &err.to_string());
        InternalError::from_response(err, response).into()
    })
}

fn form_config() -> web::FormConfig {
    web::FormConfig::default().error_handler(|err, _req| {
        let response = plain_text(HttpResponse::BadRequest(), &err.to_string());
        InternalError::from_response(err, response).into()
    })
}

pub fn run(listener: TcpListener, note_store: BoxedNoteStore) -> Result<Server, std::io::Error> {
    let ns: Data<BoxedNoteStore> = Data::new(note_store);
    let server = HttpServer::new(move || {
        App::new()
            .wrap(NormalizePath::new(TrailingSlash::Trim))
            .wrap(cors())
            .wrap(TracingLogger::default())
            .app_data(json_config())
            .app_data(form_config())
            .configure(notes_config)
            .configure(index_config)
            .app_data(ns.clone())
    })
    .listen(listener)?
    .run();
    Ok(server)
}
