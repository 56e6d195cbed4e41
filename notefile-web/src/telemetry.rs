use crate::configuration::Settings;
use tracing::Subscriber;
use tracing_log::LogTracer;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{layer::SubscriberExt, EnvFilter, Registry};

/// Filter used when `RUST_LOG` is not set.
///
/// Debug mode only turns up our own crates; actix stays at info.
fn default_filter(debug: bool) -> &'static str {
    if debug {
        "info,notefile=debug,notefile_web=debug"
    } else {
        "info"
    }
}

pub fn get_subscriber(
    configuration: &Settings,
) -> impl Subscriber + Send + Sync + for<'span> LookupSpan<'span> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(configuration.debug)));
    Registry::default().with(env_filter)
}

/// Install `subscriber` as the global default and route `log` records into it.
///
/// Actix logs through `log`, so without the bridge its records would be lost.
pub fn init_tracing(subscriber: impl Subscriber + Send + Sync + for<'span> LookupSpan<'span>) {
    LogTracer::init().expect("Failed to init LogTracer");
    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set the default tracing subscriber");
}
