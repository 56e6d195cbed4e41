use notefile_web::configuration::CONFIGURATION;
use notefile_web::startup::run;
use notefile_web::telemetry::{get_subscriber, init_tracing};
use std::net::TcpListener;
use tracing_subscriber::layer::SubscriberExt;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let subscriber =
        get_subscriber(&CONFIGURATION).with(tracing_subscriber::fmt::Layer::default());
    init_tracing(subscriber);

    let note_store = CONFIGURATION
        .get_note_store()
        .await
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
    let address = CONFIGURATION.address();
    let listener = TcpListener::bind(&address)?;
    tracing::info!(%address, store = ?CONFIGURATION.notestoretype, "Server listening");
    run(listener, note_store)?.await
}
