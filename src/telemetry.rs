use tracing::{subscriber::set_global_default, Subscriber};
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_log::LogTracer;
use tracing_subscriber::{fmt::MakeWriter, layer::SubscriberExt, EnvFilter, Registry};

/// Composes multiple layers into a `tracing` subscriber.
///
/// `RUST_LOG` takes precedence over `env_filter` when it is set. Spans and events are formatted as
/// bunyan-compatible JSON and written to `sink`, which lets tests pass `std::io::sink` to silence
/// output.
///
/// The return type is `impl Subscriber` so callers don't have to spell out the layered type.
pub fn get_subscriber<Sink>(
    name: String,
    env_filter: String,
    sink: Sink,
) -> impl Subscriber + Send + Sync
where
    Sink: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(env_filter));
    let formatting_layer = BunyanFormattingLayer::new(name, sink);
    Registry::default().with(env_filter).with(JsonStorageLayer).with(formatting_layer)
}

/// Registers a subscriber as the global default to process span data.
///
/// This should only be called once per process.
pub fn init_subscriber(subscriber: impl Subscriber + Send + Sync) {
    // Redirect all `log` events to our subscriber.
    LogTracer::init().expect("Failed to set logger");
    set_global_default(subscriber).expect("Failed to set subscriber");
}
